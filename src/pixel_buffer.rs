//! Logical LED string state.

use heapless::Vec;

use crate::bounds::{SpanBounds, bounded};
use crate::color::{BLACK, Hsv, Rgb, hsv2rgb};
use crate::error::{Error, Result};
use crate::transform;

/// Fixed-length, bounds-checked sequence of pixel colors.
///
/// `MAX_LEDS` is the storage capacity; the length is chosen at construction
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const MAX_LEDS: usize> {
    leds: Vec<Rgb, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer of `len` black pixels.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidLedCount);
        }
        let mut leds = Vec::new();
        leds.resize(len, BLACK).map_err(|()| Error::AllocationFailure)?;
        Ok(Self { leds })
    }

    /// Number of LEDs
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Always false: a buffer holds at least one LED
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.leds.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.leds
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.leds.iter().copied()
    }

    /// Set the color of one LED
    pub fn set_one(&mut self, index: usize, color: Rgb) -> Result<()> {
        let led = self.leds.get_mut(index).ok_or(Error::IndexOutOfRange)?;
        *led = color;
        Ok(())
    }

    pub fn set_one_hsv(&mut self, index: usize, color: Hsv) -> Result<()> {
        self.set_one(index, hsv2rgb(color))
    }

    /// Set every LED to one color
    pub fn set_all(&mut self, color: Rgb) {
        self.leds.fill(color);
    }

    pub fn set_all_hsv(&mut self, color: Hsv) {
        self.set_all(hsv2rgb(color));
    }

    /// Set LEDs `low..=high` to one color.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if either end is past the
    /// buffer, or [`Error::InvalidRange`] if `low > high`.
    pub fn set_span(&mut self, low: usize, high: usize, color: Rgb) -> Result<()> {
        bounded(&mut self.leds, SpanBounds::new(low, high))?.fill(color);
        Ok(())
    }

    pub fn set_span_hsv(&mut self, low: usize, high: usize, color: Hsv) -> Result<()> {
        self.set_span(low, high, hsv2rgb(color))
    }

    /// Set every LED to black
    pub fn clear(&mut self) {
        self.set_all(BLACK);
    }

    /// Copy colors from an iterator, starting at LED 0.
    ///
    /// Surplus items are ignored; LEDs past the end of the iterator keep
    /// their color.
    pub fn fill_from<T, I>(&mut self, colors: T)
    where
        T: IntoIterator<Item = I>,
        I: Into<Rgb>,
    {
        for (led, color) in self.leds.iter_mut().zip(colors) {
            *led = color.into();
        }
    }

    pub fn shift_left(&mut self, amount: usize) {
        transform::shift_left(&mut self.leds, amount);
    }

    pub fn shift_right(&mut self, amount: usize) {
        transform::shift_right(&mut self.leds, amount);
    }

    /// Rotate left; `amount` is taken modulo the LED count
    pub fn rotate_left(&mut self, amount: usize) {
        transform::rotate_left(&mut self.leds, amount);
    }

    /// Rotate right; `amount` is taken modulo the LED count
    pub fn rotate_right(&mut self, amount: usize) {
        transform::rotate_right(&mut self.leds, amount);
    }
}
