//! Pixel colors to PWM compare values.

use crate::color::Rgb;
use crate::timing::{BITS_PER_LED, OFF, TimingConfig};

/// Converts pixel colors into the WS2812 waveform, one timer count per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoder {
    timing: TimingConfig,
}

impl Encoder {
    pub const fn new(timing: TimingConfig) -> Self {
        Self { timing }
    }

    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Number of slots [`Encoder::encode`] writes for `led_count` LEDs
    pub const fn encoded_len(&self, led_count: usize) -> usize {
        self.timing.buffer_len(led_count)
    }

    /// Encode `leds` into `out` and return the number of slots written.
    ///
    /// Each LED takes 24 slots, green first, then red, then blue, most
    /// significant bit first. The reset gap follows as [`OFF`] slots. With
    /// `disabled` set every slot is [`OFF`], whatever the colors.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than [`Encoder::encoded_len`] slots.
    pub fn encode(&self, leds: &[Rgb], disabled: bool, out: &mut [u16]) -> usize {
        let len = self.encoded_len(leds.len());
        let out = &mut out[..len];

        if disabled {
            out.fill(OFF);
            return len;
        }

        let (data, reset) = out.split_at_mut(leds.len() * BITS_PER_LED);
        for (led, slots) in leds.iter().zip(data.chunks_exact_mut(BITS_PER_LED)) {
            let color = grb(*led);
            for (i, slot) in slots.iter_mut().enumerate() {
                let bit = (color >> (BITS_PER_LED - i - 1)) & 1;
                *slot = self.timing.bit(bit == 1);
            }
        }
        reset.fill(OFF);

        len
    }

    /// Recover one LED color from its 24 slots.
    ///
    /// Returns `None` if `slots` is not 24 long or holds a count that is
    /// neither bit value.
    pub fn decode(&self, slots: &[u16]) -> Option<Rgb> {
        if slots.len() != BITS_PER_LED {
            return None;
        }
        let mut color = 0u32;
        for &slot in slots {
            let bit = match slot {
                s if s == self.timing.one_high => 1,
                s if s == self.timing.zero_high => 0,
                _ => return None,
            };
            color = (color << 1) | bit;
        }
        Some(from_grb(color))
    }
}

/// Pack a color in wire order
#[inline(always)]
fn grb(color: Rgb) -> u32 {
    (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b)
}

#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
fn from_grb(color: u32) -> Rgb {
    Rgb {
        r: (color >> 8) as u8,
        g: (color >> 16) as u8,
        b: color as u8,
    }
}
