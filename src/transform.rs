//! Whole-buffer shift and rotate algorithms.
//!
//! Shifts move colors toward one end and fill the vacated end with black.
//! Rotates treat the strip as a ring and never lose a color. All of them run
//! in place in O(len) time without a scratch buffer.

use crate::color::{BLACK, Rgb};

/// Shift left by `amount`: LED `i` takes the color of LED `i + amount`.
///
/// The top `min(amount, len)` LEDs become black.
pub fn shift_left(leds: &mut [Rgb], amount: usize) {
    let len = leds.len();
    if amount >= len {
        leds.fill(BLACK);
        return;
    }
    leds.copy_within(amount.., 0);
    leds[len - amount..].fill(BLACK);
}

/// Shift right by `amount`: LED `i` takes the color of LED `i - amount`.
///
/// The bottom `min(amount, len)` LEDs become black.
pub fn shift_right(leds: &mut [Rgb], amount: usize) {
    let len = leds.len();
    if amount >= len {
        leds.fill(BLACK);
        return;
    }
    leds.copy_within(..len - amount, amount);
    leds[..amount].fill(BLACK);
}

/// Rotate left by `amount`: LED `i` takes the color of LED
/// `(i + amount) % len`.
///
/// Amounts of a full turn or more are reduced modulo `len`.
pub fn rotate_left(leds: &mut [Rgb], amount: usize) {
    if leds.is_empty() {
        return;
    }
    let amount = amount % leds.len();
    leds.rotate_left(amount);
}

/// Rotate right by `amount`, the inverse of [`rotate_left`].
pub fn rotate_right(leds: &mut [Rgb], amount: usize) {
    if leds.is_empty() {
        return;
    }
    let amount = amount % leds.len();
    leds.rotate_right(amount);
}
