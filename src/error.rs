//! Error types for the engine lifecycle
//!
//! The pixel-manipulation core raises nothing: out-of-range indices and
//! invalid windows are silent no-ops by design, because the intended context
//! is a bare control loop with no supervising handler above the caller.
//! Only the hardware-facing lifecycle operations ([`begin`] and [`show`])
//! are fallible, and their failures come from the transmit method.
//!
//! [`begin`]: crate::bus::PixelBus::begin
//! [`show`]: crate::bus::PixelBus::show

use crate::transmit::TransmitMethod;

/// Errors that can occur when driving the strip hardware
///
/// Generic over the transmit method to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware
/// error.
#[derive(Debug)]
pub enum Error<M: TransmitMethod> {
    /// Hardware transmission error
    ///
    /// Wraps the underlying error from the [`TransmitMethod`] implementation.
    Transmit(M::Error),
}

impl<M: TransmitMethod> core::fmt::Display for Error<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transmit(e) => write!(f, "Transmit error: {e:?}"),
        }
    }
}

impl<M: TransmitMethod + core::fmt::Debug> core::error::Error for Error<M> {}
