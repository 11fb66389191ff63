//! Hardware transmission abstraction
//!
//! This module provides the [`TransmitMethod`] trait the
//! [`PixelBus`](crate::bus::PixelBus) engine drives, and [`SpiTransmit`], a
//! blocking implementation for clocked strips over an embedded-hal SPI bus.
//!
//! The transmit method owns the raw backing memory for the strip. The engine
//! borrows it for every mutation and never copies or reallocates it; pushing
//! those bytes onto the wire is entirely the method's business. A method
//! backed by an asynchronous engine (DMA, I2S, RMT) reports an in-flight
//! transfer through [`is_ready`](TransmitMethod::is_ready).
//!
//! ## Example
//!
//! ```rust,no_run
//! use pixelbus::transmit::{SpiTransmit, TransmitMethod};
//! # use core::convert::Infallible;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! // 8 DotStar pixels, 4 bytes each
//! let mut transmit = SpiTransmit::<_, 32>::new(MockSpi);
//!
//! transmit.buffer_mut()[0] = 0xFF;
//! let _ = transmit.update();
//! ```

use core::fmt::Debug;

use embedded_hal::spi::SpiDevice;

/// Hardware push contract consumed by the engine
///
/// Implementations own the strip's backing byte buffer for their whole
/// lifetime and know how to clock it out to the physical LEDs. The buffer
/// length is fixed at construction; the engine derives its pixel count from
/// it and relies on it never changing.
pub trait TransmitMethod {
    /// Error type for hardware operations
    type Error: Debug;

    /// Prepare hardware resources (pins, timers, DMA channels)
    ///
    /// Called once from [`PixelBus::begin`](crate::bus::PixelBus::begin)
    /// before the first transmission.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying peripheral cannot be set up.
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Shared view of the backing buffer
    fn buffer(&self) -> &[u8];

    /// Mutable view of the backing buffer
    ///
    /// The engine encodes pixel data directly into this memory.
    fn buffer_mut(&mut self) -> &mut [u8];

    /// Transmit the current buffer contents to the LEDs
    ///
    /// May start an asynchronous transfer and return before it completes;
    /// [`is_ready`](Self::is_ready) reports completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the hardware write fails.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Whether a new transmission may be started
    ///
    /// `false` while a previous transfer is still in flight. Advisory only;
    /// [`update`](Self::update) does not block on it.
    fn is_ready(&self) -> bool;
}

/// Start-of-frame marker for clocked DotStar/APA102 strips
const START_FRAME: [u8; 4] = [0x00; 4];

/// Blocking transmit method for clocked strips over SPI
///
/// Drives DotStar/APA102-style strips, which take data and clock lines
/// instead of a single timed data line and therefore work over any plain SPI
/// bus. `N` is the backing buffer length in bytes (pixel count times the
/// encoding's pixel size; 4 for [`DotStarBgr`](crate::encoding::DotStarBgr)).
///
/// The wire framing is: four `0x00` start bytes, the pixel payload, then one
/// `0xFF` end byte per 16 pixels (rounded up) to supply the extra clock
/// pulses the last pixels in the chain need to latch.
///
/// Transfers are blocking, so [`is_ready`](TransmitMethod::is_ready) is
/// always true once `update` returns.
#[derive(Debug)]
pub struct SpiTransmit<SPI, const N: usize> {
    /// SPI device for communication
    spi: SPI,
    /// Backing pixel buffer, owned for the lifetime of the method
    data: [u8; N],
}

impl<SPI, const N: usize> SpiTransmit<SPI, N>
where
    SPI: SpiDevice,
{
    /// Create a transmit method over the given SPI device
    ///
    /// The buffer starts zeroed.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            data: [0; N],
        }
    }

    /// Consume the method and give the SPI device back
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, const N: usize> TransmitMethod for SpiTransmit<SPI, N>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        // The SPI bus needs no setup beyond what its HAL did already.
        Ok(())
    }

    fn buffer(&self) -> &[u8] {
        &self.data
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        self.spi.write(&START_FRAME)?;
        self.spi.write(&self.data)?;

        // One end byte per 16 pixels, at least one.
        let end_bytes = (N / 4).div_ceil(16).max(1);
        for _ in 0..end_bytes {
            self.spi.write(&[0xFF])?;
        }

        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingSpi {
        writes: Vec<Vec<u8>>,
    }

    impl embedded_hal::spi::ErrorType for RecordingSpi {
        type Error = core::convert::Infallible;
    }

    impl SpiDevice for RecordingSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.writes.push(bytes.to_vec());
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_buffer_len_matches_const_param() {
        let transmit = SpiTransmit::<_, 32>::new(RecordingSpi::default());
        assert_eq!(transmit.buffer().len(), 32);
    }

    #[test]
    fn test_buffer_starts_zeroed() {
        let transmit = SpiTransmit::<_, 16>::new(RecordingSpi::default());
        assert!(transmit.buffer().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_update_frames_the_payload() {
        // 8 pixels -> one end byte
        let mut transmit = SpiTransmit::<_, 32>::new(RecordingSpi::default());
        transmit.buffer_mut()[0] = 0xAB;
        transmit.update().unwrap();

        let spi = transmit.release();
        assert_eq!(spi.writes[0], START_FRAME.to_vec());
        assert_eq!(spi.writes[1].len(), 32);
        assert_eq!(spi.writes[1][0], 0xAB);
        assert_eq!(&spi.writes[2..], &[alloc::vec![0xFF]]);
    }

    #[test]
    fn test_update_end_frame_scales_with_pixel_count() {
        // 40 pixels -> ceil(40 / 16) = 3 end bytes
        let mut transmit = SpiTransmit::<_, 160>::new(RecordingSpi::default());
        transmit.update().unwrap();

        let spi = transmit.release();
        assert_eq!(spi.writes.len(), 2 + 3);
    }

    #[test]
    fn test_always_ready() {
        let transmit = SpiTransmit::<_, 4>::new(RecordingSpi::default());
        assert!(transmit.is_ready());
    }
}
