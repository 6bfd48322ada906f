use core::ops::RangeInclusive;

use crate::Rgb;
use crate::error::{Error, Result};

/// Inclusive span of LED indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpanBounds {
    pub low: usize,
    pub high: usize,
}

impl SpanBounds {
    pub const fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Validate the span against a buffer of `len` LEDs.
    ///
    /// Out of range ends are reported before inverted ones.
    pub fn validate(self, len: usize) -> Result<RangeInclusive<usize>> {
        if self.low >= len || self.high >= len {
            return Err(Error::IndexOutOfRange);
        }
        if self.low > self.high {
            return Err(Error::InvalidRange);
        }
        Ok(self.low..=self.high)
    }
}

/// Get a slice of the LEDs within the span
pub(crate) fn bounded(leds: &mut [Rgb], span: SpanBounds) -> Result<&mut [Rgb]> {
    let range = span.validate(leds.len())?;
    leds.get_mut(range).ok_or(Error::IndexOutOfRange)
}
