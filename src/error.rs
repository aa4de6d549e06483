//! Strip error types.

use core::fmt;

/// Errors reported by buffer, configuration and transmission paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Pixel index (or an entire requested range) outside `[0, len)`.
    IndexOutOfRange,

    /// Color tuple arity does not match the configured color mode.
    ColorArityMismatch,

    /// Bad construction parameters: capacity, order string, mode/order
    /// disagreement or insufficient driver capability.
    InvalidConfiguration,

    /// `show()` called while the driver reports a transfer in flight.
    TransmissionBusy,

    /// Driver-reported hardware fault. Surfaced to the caller, never
    /// retried internally.
    TransmissionFailure,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::IndexOutOfRange => {
                write!(f, "pixel index outside strip bounds")
            }
            StripError::ColorArityMismatch => {
                write!(f, "color arity does not match strip color mode")
            }
            StripError::InvalidConfiguration => {
                write!(f, "invalid strip configuration")
            }
            StripError::TransmissionBusy => {
                write!(f, "previous transmission still in flight")
            }
            StripError::TransmissionFailure => {
                write!(f, "transmission failed")
            }
        }
    }
}

impl core::error::Error for StripError {}
