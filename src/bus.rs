//! Core pixel buffer engine
//!
//! [`PixelBus`] owns the logical view of a strip's per-pixel color data. It
//! is generic over a [`ColorEncoding`] (how a pixel looks on the wire) and a
//! [`TransmitMethod`] (which hardware owns the bytes and pushes them out),
//! both resolved at compile time so the per-pixel path has no dispatch cost.
//!
//! Every mutation goes through the encoding policy into memory owned by the
//! transmit method and flags the engine dirty; [`show`](PixelBus::show)
//! pushes to hardware only while dirty, so redundant calls are free.
//!
//! ## Bounds behavior
//!
//! Out-of-range indices and invalid windows are silent no-ops, and
//! out-of-range reads return the encoding's black value. Callers in a tight
//! control loop are expected to guard their own ranges; a cheap branch here
//! beats propagating a fault nobody above the loop can handle.
//!
//! ## Example
//!
//! ```
//! use pixelbus::bus::PixelBus;
//! use pixelbus::encoding::Grb;
//! use pixelbus::transmit::TransmitMethod;
//! use rgb::RGB8;
//!
//! # #[derive(Debug)]
//! # struct Memory([u8; 24]);
//! # impl TransmitMethod for Memory {
//! #     type Error = core::convert::Infallible;
//! #     fn initialize(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn buffer(&self) -> &[u8] { &self.0 }
//! #     fn buffer_mut(&mut self) -> &mut [u8] { &mut self.0 }
//! #     fn update(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_ready(&self) -> bool { true }
//! # }
//! // 8 pixels of 3 bytes each
//! let mut bus = PixelBus::<Grb, _>::new(Memory([0; 24]));
//! bus.begin()?;
//!
//! bus.set_pixel_color(0, RGB8::new(255, 0, 0));
//! assert_eq!(bus.pixel_color(0), RGB8::new(255, 0, 0));
//!
//! if bus.can_show() {
//!     bus.show()?;
//! }
//! assert!(!bus.is_dirty());
//! # Ok::<(), pixelbus::Error<Memory>>(())
//! ```

use core::marker::PhantomData;

use log::{debug, trace};

use crate::encoding::ColorEncoding;
use crate::error::Error;
use crate::transmit::TransmitMethod;

/// Pixel buffer engine for one LED strip or array
///
/// The pixel count is derived from the transmit method's buffer length at
/// construction and never changes. Trailing bytes that do not make up a
/// whole pixel are ignored.
pub struct PixelBus<E, M>
where
    E: ColorEncoding,
    M: TransmitMethod,
{
    /// Hardware transmit method; owns the backing buffer
    method: M,
    /// Number of addressable pixels, fixed at construction
    count_pixels: usize,
    /// Whether the buffer has changes not yet pushed to hardware
    dirty: bool,
    _encoding: PhantomData<E>,
}

impl<E, M> PixelBus<E, M>
where
    E: ColorEncoding,
    M: TransmitMethod,
{
    /// Create an engine over the given transmit method
    ///
    /// The engine starts clean; [`begin`](Self::begin) marks it dirty so the
    /// first [`show`](Self::show) always transmits.
    pub fn new(method: M) -> Self {
        let count_pixels = method.buffer().len() / E::PIXEL_SIZE;
        Self {
            method,
            count_pixels,
            dirty: false,
            _encoding: PhantomData,
        }
    }

    /// Initialize the transmit method and force the next show to transmit
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transmit`] if the hardware cannot be set up.
    pub fn begin(&mut self) -> Result<(), Error<M>> {
        debug!("begin: {} pixels of {} bytes", self.count_pixels, E::PIXEL_SIZE);
        self.method.initialize().map_err(Error::Transmit)?;
        self.dirty();
        Ok(())
    }

    /// Push the buffer to the LEDs if it has unflushed changes
    ///
    /// Does nothing while clean, guarding against redundant hardware writes.
    /// The dirty flag is cleared only when the transmit method reports
    /// success.
    ///
    /// This does not wait for readiness; poll [`can_show`](Self::can_show)
    /// first when the method transmits asynchronously.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transmit`] if the hardware write fails; the engine
    /// stays dirty so a later call retries.
    pub fn show(&mut self) -> Result<(), Error<M>> {
        if !self.is_dirty() {
            return Ok(());
        }

        trace!("show: transmitting {} pixels", self.count_pixels);
        self.method.update().map_err(Error::Transmit)?;

        self.reset_dirty();
        Ok(())
    }

    /// Whether a new transmission may be started
    ///
    /// Forwards the transmit method's readiness signal; false while a
    /// previous asynchronous transfer is still in flight.
    pub fn can_show(&self) -> bool {
        self.method.is_ready()
    }

    /// Whether the buffer has changes not yet pushed to hardware
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as having unflushed changes
    pub fn dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag without transmitting
    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Number of addressable pixels
    pub fn pixel_count(&self) -> usize {
        self.count_pixels
    }

    /// Byte width of one encoded pixel
    pub fn pixel_size(&self) -> usize {
        E::PIXEL_SIZE
    }

    /// Shared view of the raw backing bytes
    pub fn pixels(&self) -> &[u8] {
        self.method.buffer()
    }

    /// Mutable view of the raw backing bytes
    ///
    /// Writes through this view are invisible to the engine, so obtaining it
    /// unconditionally marks the engine dirty.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.dirty();
        self.method.buffer_mut()
    }

    /// Set the color of one pixel
    ///
    /// Out-of-range indices are a silent no-op.
    pub fn set_pixel_color(&mut self, index: usize, color: E::Color) {
        if index < self.count_pixels {
            E::write(self.method.buffer_mut(), index, color);
            self.dirty();
        }
    }

    /// Get the color of one pixel
    ///
    /// Out-of-range indices return the encoding's zero (black) value. Never
    /// mutates and never marks dirty.
    pub fn pixel_color(&self, index: usize) -> E::Color {
        if index < self.count_pixels {
            E::read(self.method.buffer(), index)
        } else {
            E::Color::default()
        }
    }

    /// Exchange the colors of two pixels
    ///
    /// Composed from reads and writes, so each index inherits their bounds
    /// behavior independently.
    pub fn swap_pixel_colors(&mut self, one: usize, two: usize) {
        let color_one = self.pixel_color(one);
        let color_two = self.pixel_color(two);

        self.set_pixel_color(one, color_two);
        self.set_pixel_color(two, color_one);
    }

    /// Set every pixel to the same color
    ///
    /// The color is encoded once and the byte pattern replicated, rather
    /// than re-encoding per pixel.
    pub fn clear_to(&mut self, color: E::Color) {
        let pattern = E::encode(color);
        E::replicate(
            self.method.buffer_mut(),
            0,
            self.count_pixels,
            pattern.as_ref(),
        );
        self.dirty();
    }

    /// Set every pixel in the inclusive window `[first, last]` to `color`
    ///
    /// Invalid windows (`first > last`, or either end out of range) are a
    /// silent no-op.
    pub fn clear_to_range(&mut self, color: E::Color, first: usize, last: usize) {
        if first < self.count_pixels && last < self.count_pixels && first <= last {
            let pattern = E::encode(color);
            E::replicate(
                self.method.buffer_mut(),
                first,
                last - first + 1,
                pattern.as_ref(),
            );
            self.dirty();
        }
    }

    /// Rotate the whole buffer toward lower indices by `count` pixels
    ///
    /// Circular and lossless: pixels falling off the front reappear at the
    /// back. A `count` exceeding `pixel_count() - 1` is a silent no-op.
    pub fn rotate_left(&mut self, count: usize) {
        let Some(last) = self.count_pixels.checked_sub(1) else {
            return;
        };
        if count <= last {
            self.rotate_left_raw(count, 0, last);
        }
    }

    /// Rotate the window `[first, last]` toward lower indices by `count`
    ///
    /// Silently no-ops unless `first < last < pixel_count()` and the window
    /// is strictly longer than `count`.
    pub fn rotate_left_range(&mut self, count: usize, first: usize, last: usize) {
        if first < self.count_pixels
            && last < self.count_pixels
            && first < last
            && last - first >= count
        {
            self.rotate_left_raw(count, first, last);
        }
    }

    /// Rotate the whole buffer toward higher indices by `count` pixels
    ///
    /// Dual of [`rotate_left`](Self::rotate_left), with the same guards.
    pub fn rotate_right(&mut self, count: usize) {
        let Some(last) = self.count_pixels.checked_sub(1) else {
            return;
        };
        if count <= last {
            self.rotate_right_raw(count, 0, last);
        }
    }

    /// Rotate the window `[first, last]` toward higher indices by `count`
    pub fn rotate_right_range(&mut self, count: usize, first: usize, last: usize) {
        if first < self.count_pixels
            && last < self.count_pixels
            && first < last
            && last - first >= count
        {
            self.rotate_right_raw(count, first, last);
        }
    }

    /// Shift the whole buffer toward lower indices by `count` pixels
    ///
    /// Not circular: the `count` slots at the back keep their prior, now
    /// stale, contents. Follow with [`clear_to_range`](Self::clear_to_range)
    /// to blank them. A `count` exceeding `pixel_count() - 1` is a silent
    /// no-op.
    pub fn shift_left(&mut self, count: usize) {
        let Some(last) = self.count_pixels.checked_sub(1) else {
            return;
        };
        if count <= last {
            self.shift_left_raw(count, 0, last);
            self.dirty();
        }
    }

    /// Shift the window `[first, last]` toward lower indices by `count`
    ///
    /// Same guards as [`rotate_left_range`](Self::rotate_left_range); the
    /// vacated slots at the high end of the window keep stale contents.
    pub fn shift_left_range(&mut self, count: usize, first: usize, last: usize) {
        if first < self.count_pixels
            && last < self.count_pixels
            && first < last
            && last - first >= count
        {
            self.shift_left_raw(count, first, last);
            self.dirty();
        }
    }

    /// Shift the whole buffer toward higher indices by `count` pixels
    ///
    /// Dual of [`shift_left`](Self::shift_left); the vacated slots at the
    /// front keep stale contents.
    pub fn shift_right(&mut self, count: usize) {
        let Some(last) = self.count_pixels.checked_sub(1) else {
            return;
        };
        if count <= last {
            self.shift_right_raw(count, 0, last);
            self.dirty();
        }
    }

    /// Shift the window `[first, last]` toward higher indices by `count`
    pub fn shift_right_range(&mut self, count: usize, first: usize, last: usize) {
        if first < self.count_pixels
            && last < self.count_pixels
            && first < last
            && last - first >= count
        {
            self.shift_right_raw(count, first, last);
            self.dirty();
        }
    }

    /// Rotate the window's byte range in place
    ///
    /// `core::slice::rotate_left` is O(window) time and O(1) space, so no
    /// scratch buffer is needed. Preconditions (`first <= last < count`,
    /// `count <= last - first + 1`) are enforced by the public entry points.
    fn rotate_left_raw(&mut self, count: usize, first: usize, last: usize) {
        let start = E::offset(first);
        let end = E::offset(last + 1);
        self.method.buffer_mut()[start..end].rotate_left(count * E::PIXEL_SIZE);
        self.dirty();
    }

    fn rotate_right_raw(&mut self, count: usize, first: usize, last: usize) {
        let start = E::offset(first);
        let end = E::offset(last + 1);
        self.method.buffer_mut()[start..end].rotate_right(count * E::PIXEL_SIZE);
        self.dirty();
    }

    /// Move the window contents down without touching the dirty flag
    ///
    /// The rotate and shift entry points flag dirty themselves.
    fn shift_left_raw(&mut self, count: usize, first: usize, last: usize) {
        let front = first + count;
        let run = last - front + 1;
        E::move_forward(self.method.buffer_mut(), first, front, run);
    }

    fn shift_right_raw(&mut self, count: usize, first: usize, last: usize) {
        let front = first + count;
        let run = last - front + 1;
        E::move_backward(self.method.buffer_mut(), front, first, run);
    }
}
