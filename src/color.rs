//! Color types and color-space utilities
//!
//! This module defines the color values used by the encoding policies and the
//! pure color-math helpers: HSV conversion and gamma correction.
//!
//! ## Color Representation
//!
//! Three-channel strips (WS2812 and friends) use [`rgb::RGB8`] directly.
//! Four-channel strips with a dedicated white emitter use [`Rgbw`]. The
//! [`Packed`] type carries all four channels in one `u32`:
//!
//! | Byte | 31..24 | 23..16 | 15..8 | 7..0 |
//! |------|--------|--------|-------|------|
//! | Channel | W | R | G | B |
//!
//! ## Example
//!
//! ```
//! use pixelbus::color::{hsv, Packed};
//! use rgb::RGB8;
//!
//! // Hue 0 is pure red at full saturation and value
//! assert_eq!(hsv(0, 255, 255), Packed::new(255, 0, 0, 0));
//!
//! // Packed converts to the channel types the encodings use
//! let red: RGB8 = Packed::new(255, 0, 0, 0).into();
//! assert_eq!(red, RGB8::new(255, 0, 0));
//! ```

use rgb::RGB8;

use crate::gamma::GAMMA8;

/// A packed WRGB color, laid out `0xWWRRGGBB`
///
/// This is the working currency of [`hsv`] and [`gamma32`]: a plain `u32`
/// that is cheap to store, compare, and shift apart on constrained targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Packed(pub u32);

impl Packed {
    /// All channels off
    pub const BLACK: Self = Self(0);

    /// Pack individual channels
    ///
    /// ## Example
    ///
    /// ```
    /// use pixelbus::color::Packed;
    ///
    /// assert_eq!(Packed::new(0x11, 0x22, 0x33, 0x44).0, 0x4411_2233);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self(((w as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// White channel
    pub const fn w(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl From<RGB8> for Packed {
    fn from(c: RGB8) -> Self {
        Self::new(c.r, c.g, c.b, 0)
    }
}

impl From<Packed> for RGB8 {
    fn from(c: Packed) -> Self {
        Self::new(c.r(), c.g(), c.b())
    }
}

impl From<Rgbw> for Packed {
    fn from(c: Rgbw) -> Self {
        Self::new(c.r, c.g, c.b, c.w)
    }
}

impl From<Packed> for Rgbw {
    fn from(c: Packed) -> Self {
        Self::new(c.r(), c.g(), c.b(), c.w())
    }
}

/// A four-channel color for strips with a dedicated white emitter
///
/// SK6812 RGBW and similar parts drive the white die separately from the
/// color dies; the `w` channel maps straight to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgbw {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// White channel
    pub w: u8,
}

impl Rgbw {
    /// Create a color from individual channels
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }
}

impl From<RGB8> for Rgbw {
    fn from(c: RGB8) -> Self {
        Self::new(c.r, c.g, c.b, 0)
    }
}

impl From<Rgbw> for RGB8 {
    fn from(c: Rgbw) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

/// Convert a hue/saturation/value triple to a packed RGB color
///
/// Hue spans the full `u16` range so a color wheel can simply let it wrap in
/// either direction. Internally it is remapped to 1530 distinct hue steps
/// (six 255-wide bands) with `(hue * 1530 + 32768) / 65536`; the `+32768`
/// centers pure red on the rollover point, so hue 0 and hue 65535 both land
/// at (or within one step of) pure red. There are 1530 steps rather than
/// 6*256 because the last element of each band equals the first element of
/// the next; keeping both would put small discontinuities in the wheel.
///
/// Band selection uses nested comparisons instead of divide/modulo, and
/// saturation/value are applied as fixed-point multiplies with scale factors
/// in `1..=256` so an 8-bit shift replaces division by 255. Both choices
/// matter on cores without hardware divide.
///
/// The white byte of the result is always zero.
///
/// ## Example
///
/// ```
/// use pixelbus::color::{hsv, Packed};
///
/// assert_eq!(hsv(0, 255, 255), Packed::new(255, 0, 0, 0));
/// // One third of the way around the wheel is pure green
/// assert_eq!(hsv(21845, 255, 255), Packed::new(0, 255, 0, 0));
/// // Zero saturation is white at the given value
/// assert_eq!(hsv(0, 0, 255), Packed::new(255, 255, 255, 0));
/// ```
pub fn hsv(hue: u16, sat: u8, val: u8) -> Packed {
    // 0..=65535 -> 0..=1530; 1530 is the same point as 0 and handled as the
    // final arm below rather than with a modulo.
    let hue = (u32::from(hue) * 1530 + 32768) / 65536;

    let (r, g, b): (u8, u8, u8) = if hue < 510 {
        // Red to green-1
        if hue < 255 {
            (255, hue as u8, 0)
        } else {
            ((510 - hue) as u8, 255, 0)
        }
    } else if hue < 1020 {
        // Green to blue-1
        if hue < 765 {
            (0, 255, (hue - 510) as u8)
        } else {
            (0, (1020 - hue) as u8, 255)
        }
    } else if hue < 1530 {
        // Blue to red-1
        if hue < 1275 {
            ((hue - 1020) as u8, 0, 255)
        } else {
            (255, 0, (1530 - hue) as u8)
        }
    } else {
        // The last half step of red
        (255, 0, 0)
    };

    // Scale factors in 1..=256 allow >>8 instead of /255.
    let v1 = u32::from(val) + 1;
    let s1 = u32::from(sat) + 1;
    let s2 = u32::from(255 - sat);

    let r = (((u32::from(r) * s1) >> 8) + s2) * v1;
    let g = (((u32::from(g) * s1) >> 8) + s2) * v1;
    let b = (((u32::from(b) * s1) >> 8) + s2) * v1;

    Packed(((r & 0xff00) << 8) | (g & 0xff00) | (b >> 8))
}

/// Apply gamma correction to one 8-bit channel
///
/// Table lookup over the fixed curve in [`crate::gamma`]; endpoints are
/// preserved and the mapping is monotonically non-decreasing.
///
/// ## Example
///
/// ```
/// use pixelbus::color::gamma8;
///
/// assert_eq!(gamma8(0), 0);
/// assert_eq!(gamma8(255), 255);
/// assert!(gamma8(128) < 128);
/// ```
pub fn gamma8(x: u8) -> u8 {
    GAMMA8[x as usize]
}

/// Apply gamma correction to every byte of a packed color
///
/// All four bytes are filtered, including the white byte even when the color
/// came from a plain RGB source. Treating the pack as raw bytes avoids
/// branching on channel semantics; a caller storing unrelated data in the
/// unused byte must mask it around this call.
///
/// ## Example
///
/// ```
/// use pixelbus::color::{gamma32, Packed};
///
/// assert_eq!(gamma32(Packed::new(255, 0, 255, 0)), Packed::new(255, 0, 255, 0));
/// ```
pub fn gamma32(color: Packed) -> Packed {
    let [w, r, g, b] = color.0.to_be_bytes();
    Packed(u32::from_be_bytes([
        gamma8(w),
        gamma8(r),
        gamma8(g),
        gamma8(b),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_channel_accessors() {
        let c = Packed::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.r(), 0x11);
        assert_eq!(c.g(), 0x22);
        assert_eq!(c.b(), 0x33);
        assert_eq!(c.w(), 0x44);
    }

    #[test]
    fn test_packed_default_is_black() {
        assert_eq!(Packed::default(), Packed::BLACK);
    }

    #[test]
    fn test_packed_rgb8_round_trip() {
        let c = RGB8::new(10, 20, 30);
        assert_eq!(RGB8::from(Packed::from(c)), c);
    }

    #[test]
    fn test_rgbw_from_rgb8_clears_white() {
        let c = Rgbw::from(RGB8::new(1, 2, 3));
        assert_eq!(c, Rgbw::new(1, 2, 3, 0));
    }

    #[test]
    fn test_hsv_zero_hue_is_pure_red() {
        assert_eq!(hsv(0, 255, 255), Packed::new(255, 0, 0, 0));
    }

    #[test]
    fn test_hsv_max_hue_wraps_to_pure_red() {
        // 65535 maps into the final half step of red; exact within 1 LSB.
        let c = hsv(65535, 255, 255);
        assert_eq!(c.r(), 255);
        assert!(c.g() <= 1);
        assert!(c.b() <= 1);
    }

    #[test]
    fn test_hsv_one_third_is_pure_green() {
        assert_eq!(hsv(21845, 255, 255), Packed::new(0, 255, 0, 0));
    }

    #[test]
    fn test_hsv_two_thirds_is_pure_blue() {
        assert_eq!(hsv(43690, 255, 255), Packed::new(0, 0, 255, 0));
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray_at_value() {
        assert_eq!(hsv(12345, 0, 255), Packed::new(255, 255, 255, 0));
        assert_eq!(hsv(12345, 0, 128), Packed::new(128, 128, 128, 0));
    }

    #[test]
    fn test_hsv_zero_value_is_black() {
        for hue in [0u16, 10000, 30000, 65535] {
            assert_eq!(hsv(hue, 255, 0), Packed::BLACK);
        }
    }

    #[test]
    fn test_hsv_white_byte_always_zero() {
        for hue in (0..=65535u16).step_by(997) {
            assert_eq!(hsv(hue, 200, 200).w(), 0);
        }
    }

    #[test]
    fn test_hsv_wheel_has_no_large_jumps() {
        // Adjacent hues at full sat/val should differ by at most a few steps
        // per channel; the wheel is continuous across the rollover.
        let mut prev = hsv(65535, 255, 255);
        for hue in (0..=65535u16).step_by(16) {
            let cur = hsv(hue, 255, 255);
            let dr = (i16::from(cur.r()) - i16::from(prev.r())).abs();
            let dg = (i16::from(cur.g()) - i16::from(prev.g())).abs();
            let db = (i16::from(cur.b()) - i16::from(prev.b())).abs();
            assert!(dr <= 2 && dg <= 2 && db <= 2, "jump at hue {hue}");
            prev = cur;
        }
    }

    #[test]
    fn test_gamma8_endpoints() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(255), 255);
    }

    #[test]
    fn test_gamma32_filters_all_four_bytes() {
        // 128 gamma-corrects below itself; the white byte is filtered too.
        let c = gamma32(Packed::new(128, 128, 128, 128));
        let expected = gamma8(128);
        assert_eq!(c, Packed::new(expected, expected, expected, expected));
    }

    #[test]
    fn test_gamma32_black_and_white_fixed_points() {
        assert_eq!(gamma32(Packed::BLACK), Packed::BLACK);
        assert_eq!(gamma32(Packed(0xFFFF_FFFF)), Packed(0xFFFF_FFFF));
    }
}
