//! Error type shared by every fallible operation of the crate.

/// Errors reported by pixel buffer, transform and transfer operations.
///
/// Every check runs before any state is touched, so a returned error means
/// nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Index or span end lies outside the pixel buffer.
    IndexOutOfRange,
    /// Span with `low > high`.
    InvalidRange,
    /// Instance was never initialized or has been torn down.
    NotInitialized,
    /// Instance is already initialized.
    AlreadyInitialized,
    /// LED count of zero.
    InvalidLedCount,
    /// Pixel capacity or timing storage is too small for the LED count.
    AllocationFailure,
    /// The transfer collaborator rejected the start request.
    TransferStartFailed,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IndexOutOfRange => write!(f, "index out of range"),
            Error::InvalidRange => write!(f, "span lower bound is above upper bound"),
            Error::NotInitialized => write!(f, "instance is not initialized"),
            Error::AlreadyInitialized => write!(f, "instance is already initialized"),
            Error::InvalidLedCount => write!(f, "LED count must be non-zero"),
            Error::AllocationFailure => {
                write!(f, "buffer storage is too small for the LED count")
            }
            Error::TransferStartFailed => write!(f, "transfer could not be started"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
