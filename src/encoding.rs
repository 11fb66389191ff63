//! Wire color-format encoding policies
//!
//! Addressable-LED parts disagree on how a pixel looks on the wire: WS2812
//! strips want green first, SK6812 RGBW parts carry a fourth white byte, and
//! clocked DotStar/APA102 strips prefix every pixel with a constant header
//! byte. The [`ColorEncoding`] trait captures one such format as a
//! compile-time policy: its byte width, its color value type, and the
//! pixel-level primitives the engine builds everything from.
//!
//! [`PixelBus`](crate::bus::PixelBus) is written once against this trait;
//! supporting a new wire format means adding a policy here, never touching
//! the engine. The policies are zero-sized, so all dispatch resolves at
//! compile time and the per-pixel hot path stays free of indirection.
//!
//! ## Example
//!
//! ```
//! use pixelbus::encoding::{ColorEncoding, Grb};
//! use rgb::RGB8;
//!
//! let mut buffer = [0u8; 6];
//! Grb::write(&mut buffer, 1, RGB8::new(0x11, 0x22, 0x33));
//!
//! // WS2812 byte order is G, R, B
//! assert_eq!(buffer, [0, 0, 0, 0x22, 0x11, 0x33]);
//! assert_eq!(Grb::read(&buffer, 1), RGB8::new(0x11, 0x22, 0x33));
//! ```

use core::fmt::Debug;

use rgb::RGB8;

use crate::color::Rgbw;

/// One wire color format, as a compile-time strategy
///
/// Implementations describe how a single pixel is laid out in the backing
/// buffer and provide the run primitives (replicate, directional move) the
/// engine composes its transforms from.
///
/// All indices and counts are in pixels, not bytes. Callers are responsible
/// for staying within the buffer; the engine performs its bounds checks
/// before reaching this layer, and the default methods will panic on
/// out-of-range input rather than wrap.
///
/// `Encoded` must be `[u8; PIXEL_SIZE]` (the two cannot be tied together in
/// the type system yet, so keeping them in agreement is an implementation
/// invariant).
pub trait ColorEncoding {
    /// Byte width of one encoded pixel
    const PIXEL_SIZE: usize;

    /// The color value type callers work with
    ///
    /// `Default` must be the zero/black value; the engine returns it as the
    /// out-of-range read sentinel.
    type Color: Copy + Default + PartialEq + Debug;

    /// One encoded pixel
    type Encoded: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Encode a color into its wire byte layout
    fn encode(color: Self::Color) -> Self::Encoded;

    /// Decode one pixel from its wire bytes
    ///
    /// `raw` is exactly [`PIXEL_SIZE`](Self::PIXEL_SIZE) bytes.
    fn decode(raw: &[u8]) -> Self::Color;

    /// Byte offset of the pixel at `index`
    fn offset(index: usize) -> usize {
        index * Self::PIXEL_SIZE
    }

    /// Encode `color` into the buffer at pixel `index`
    fn write(buffer: &mut [u8], index: usize, color: Self::Color) {
        let start = Self::offset(index);
        buffer[start..start + Self::PIXEL_SIZE].copy_from_slice(Self::encode(color).as_ref());
    }

    /// Decode the pixel at `index`
    fn read(buffer: &[u8], index: usize) -> Self::Color {
        let start = Self::offset(index);
        Self::decode(&buffer[start..start + Self::PIXEL_SIZE])
    }

    /// Fill `count` pixels starting at `index` from one encoded pattern
    ///
    /// `pattern` is one encoded pixel ([`PIXEL_SIZE`](Self::PIXEL_SIZE)
    /// bytes); encoding once and stamping the bytes avoids re-encoding the
    /// color per pixel.
    fn replicate(buffer: &mut [u8], index: usize, count: usize, pattern: &[u8]) {
        let start = Self::offset(index);
        let end = start + count * Self::PIXEL_SIZE;
        for pixel in buffer[start..end].chunks_exact_mut(Self::PIXEL_SIZE) {
            pixel.copy_from_slice(pattern);
        }
    }

    /// Move a run of `count` pixels from `src` down to `dest` (`dest <= src`)
    ///
    /// Copy order is increasing, so overlapping ranges are safe when moving
    /// toward lower indices. `copy_within` guarantees this.
    fn move_forward(buffer: &mut [u8], dest: usize, src: usize, count: usize) {
        let start = Self::offset(src);
        buffer.copy_within(start..start + count * Self::PIXEL_SIZE, Self::offset(dest));
    }

    /// Move a run of `count` pixels from `src` up to `dest` (`dest >= src`)
    ///
    /// Copy order is decreasing, so overlapping ranges are safe when moving
    /// toward higher indices. `copy_within` guarantees this.
    fn move_backward(buffer: &mut [u8], dest: usize, src: usize, count: usize) {
        let start = Self::offset(src);
        buffer.copy_within(start..start + count * Self::PIXEL_SIZE, Self::offset(dest));
    }
}

/// WS2812/WS2812B byte order: G, R, B
///
/// The most common "NeoPixel" format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grb;

impl ColorEncoding for Grb {
    const PIXEL_SIZE: usize = 3;
    type Color = RGB8;
    type Encoded = [u8; 3];

    fn encode(color: RGB8) -> [u8; 3] {
        [color.g, color.r, color.b]
    }

    fn decode(raw: &[u8]) -> RGB8 {
        RGB8::new(raw[1], raw[0], raw[2])
    }
}

/// Straight R, G, B byte order
///
/// Used by WS2811 drivers and some 12V strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb;

impl ColorEncoding for Rgb {
    const PIXEL_SIZE: usize = 3;
    type Color = RGB8;
    type Encoded = [u8; 3];

    fn encode(color: RGB8) -> [u8; 3] {
        [color.r, color.g, color.b]
    }

    fn decode(raw: &[u8]) -> RGB8 {
        RGB8::new(raw[0], raw[1], raw[2])
    }
}

/// SK6812 RGBW byte order: G, R, B, W
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grbw;

impl ColorEncoding for Grbw {
    const PIXEL_SIZE: usize = 4;
    type Color = Rgbw;
    type Encoded = [u8; 4];

    fn encode(color: Rgbw) -> [u8; 4] {
        [color.g, color.r, color.b, color.w]
    }

    fn decode(raw: &[u8]) -> Rgbw {
        Rgbw::new(raw[1], raw[0], raw[2], raw[3])
    }
}

/// DotStar/APA102 frame: 0xFF header, then B, G, R
///
/// Clocked strips frame every pixel with a header byte carrying the start
/// bits and a global-brightness field; this policy pins brightness to full
/// (0xFF) and models the remaining three bytes as an ordinary color. The
/// header byte is regenerated on every encode, so a decode/encode trip is
/// lossless for the color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotStarBgr;

impl DotStarBgr {
    /// Pixel header: start bits plus full global brightness
    pub const HEADER: u8 = 0xFF;
}

impl ColorEncoding for DotStarBgr {
    const PIXEL_SIZE: usize = 4;
    type Color = RGB8;
    type Encoded = [u8; 4];

    fn encode(color: RGB8) -> [u8; 4] {
        [Self::HEADER, color.b, color.g, color.r]
    }

    fn decode(raw: &[u8]) -> RGB8 {
        RGB8::new(raw[3], raw[2], raw[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grb_byte_order() {
        let mut buffer = [0u8; 3];
        Grb::write(&mut buffer, 0, RGB8::new(1, 2, 3));
        assert_eq!(buffer, [2, 1, 3]);
    }

    #[test]
    fn test_rgb_byte_order() {
        let mut buffer = [0u8; 3];
        Rgb::write(&mut buffer, 0, RGB8::new(1, 2, 3));
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_grbw_byte_order() {
        let mut buffer = [0u8; 4];
        Grbw::write(&mut buffer, 0, Rgbw::new(1, 2, 3, 4));
        assert_eq!(buffer, [2, 1, 3, 4]);
    }

    #[test]
    fn test_dotstar_frame_layout() {
        let mut buffer = [0u8; 4];
        DotStarBgr::write(&mut buffer, 0, RGB8::new(1, 2, 3));
        assert_eq!(buffer, [0xFF, 3, 2, 1]);
    }

    #[test]
    fn test_write_read_round_trip_all_encodings() {
        let mut buffer = [0u8; 12];

        Grb::write(&mut buffer, 2, RGB8::new(10, 20, 30));
        assert_eq!(Grb::read(&buffer, 2), RGB8::new(10, 20, 30));

        Rgb::write(&mut buffer, 2, RGB8::new(40, 50, 60));
        assert_eq!(Rgb::read(&buffer, 2), RGB8::new(40, 50, 60));

        Grbw::write(&mut buffer, 1, Rgbw::new(1, 2, 3, 4));
        assert_eq!(Grbw::read(&buffer, 1), Rgbw::new(1, 2, 3, 4));

        DotStarBgr::write(&mut buffer, 1, RGB8::new(7, 8, 9));
        assert_eq!(DotStarBgr::read(&buffer, 1), RGB8::new(7, 8, 9));
    }

    #[test]
    fn test_offset_scales_by_pixel_size() {
        assert_eq!(Grb::offset(5), 15);
        assert_eq!(Grbw::offset(5), 20);
    }

    #[test]
    fn test_replicate_stamps_pattern() {
        let mut buffer = [0u8; 9];
        let pattern = Grb::encode(RGB8::new(1, 2, 3));
        Grb::replicate(&mut buffer, 1, 2, pattern.as_ref());
        assert_eq!(buffer, [0, 0, 0, 2, 1, 3, 2, 1, 3]);
    }

    #[test]
    fn test_move_forward_overlapping_run() {
        // Pixels [1, 2, 3] -> [0, 1, 2]; pixel 3 keeps its stale bytes.
        let mut buffer = [10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40];
        Grb::move_forward(&mut buffer, 0, 1, 3);
        assert_eq!(buffer, [20, 20, 20, 30, 30, 30, 40, 40, 40, 40, 40, 40]);
    }

    #[test]
    fn test_move_backward_overlapping_run() {
        // Pixels [0, 1, 2] -> [1, 2, 3]; pixel 0 keeps its stale bytes.
        let mut buffer = [10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40];
        Grb::move_backward(&mut buffer, 1, 0, 3);
        assert_eq!(buffer, [10, 10, 10, 10, 10, 10, 20, 20, 20, 30, 30, 30]);
    }

    #[test]
    fn test_default_color_is_black() {
        assert_eq!(<Grb as ColorEncoding>::Color::default(), RGB8::new(0, 0, 0));
        assert_eq!(
            <Grbw as ColorEncoding>::Color::default(),
            Rgbw::new(0, 0, 0, 0)
        );
    }
}
