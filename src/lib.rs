//! Pixel Buffer Engine for Addressable LED Strips
//!
//! An in-memory pixel-buffer engine for addressable LEDs (WS2812/NeoPixel,
//! SK6812 RGBW, DotStar/APA102). It owns the logical view of per-pixel color
//! data, tracks unflushed changes, and provides bounds-checked transforms
//! plus color-space utilities, while hardware specifics stay behind two
//! compile-time parameters: a wire color encoding and a transmit method.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Multiple wire color formats (GRB, RGB, GRBW, DotStar) behind one engine
//! - Dirty tracking: [`PixelBus::show`] only touches hardware after changes
//! - Windowed clear/rotate/shift with overlap-safe in-place moves
//! - Integer-only HSV conversion and gamma correction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use pixelbus::{color, DotStarBgr, PixelBus, SpiTransmit};
//! use rgb::RGB8;
//!
//! # #[derive(Debug)]
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let spi = MockSpi;
//! // 30 DotStar pixels, 4 bytes each
//! let transmit = SpiTransmit::<_, { 30 * 4 }>::new(spi);
//! let mut strip = PixelBus::<DotStarBgr, _>::new(transmit);
//!
//! strip.begin()?;
//!
//! for i in 0..strip.pixel_count() {
//!     let hue = (i * 65536 / strip.pixel_count()) as u16;
//!     strip.set_pixel_color(i, RGB8::from(color::hsv(hue, 255, 255)));
//! }
//!
//! if strip.can_show() {
//!     strip.show()?;
//! }
//! # Ok::<(), pixelbus::Error<SpiTransmit<MockSpi, { 30 * 4 }>>>(())
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Core pixel buffer engine
pub mod bus;
/// Color types and color-space utilities (HSV, gamma)
pub mod color;
/// Wire color-format encoding policies
pub mod encoding;
/// Error types for the engine lifecycle
pub mod error;
/// Gamma correction lookup table
pub mod gamma;
/// Hardware transmission abstraction
pub mod transmit;

pub use bus::PixelBus;
pub use color::{Packed, Rgbw, gamma8, gamma32, hsv};
pub use encoding::{ColorEncoding, DotStarBgr, Grb, Grbw, Rgb};
pub use error::Error;
pub use transmit::{SpiTransmit, TransmitMethod};
