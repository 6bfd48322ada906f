//! WS2812 symbol timing expressed in PWM timer counts.
//!
//! Each transmitted bit is one PWM period; the compare value selects how long
//! the line stays high. Counts follow the auto-reload convention: a period of
//! `n` ticks is written as `n - 1`.

use embassy_time::Duration;

/// Number of timing slots per LED (8 bits each for G, R, B)
pub const BITS_PER_LED: usize = 24;
/// Default number of low periods sent after the data as a latch signal
pub const RESET_SLOTS: usize = 48;
/// Timer count that keeps the line low for a whole period
pub const OFF: u16 = 0;

/// Symbol period in ns.
const SYMBOL_NS: u32 = 1300;
/// The symbol is split in 13 parts of 100 ns: T0H takes 4, T1H takes 7.
const SYMBOL_PARTS: u32 = 13;
const T0H_PARTS: u32 = 4;
const T1H_PARTS: u32 = 7;

/// Convert nanoseconds to timer ticks at `clock_mhz`, rounding.
const fn to_ticks(ns: u32, clock_mhz: u32) -> u32 {
    ns.saturating_mul(clock_mhz).saturating_add(500) / 1000
}

/// Share `parts / SYMBOL_PARTS` of `ticks`, rounding.
const fn share_of(ticks: u32, parts: u32) -> u32 {
    (ticks * parts + SYMBOL_PARTS / 2) / SYMBOL_PARTS
}

/// Turn a tick count into an auto-reload style count, saturating at both ends.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn to_count(ticks: u32) -> u16 {
    let count = ticks.saturating_sub(1);
    if count > u16::MAX as u32 { u16::MAX } else { count as u16 }
}

/// Timer counts for one target clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Auto-reload value of the PWM timer (one symbol)
    pub period: u16,
    /// Compare value for a 0 bit
    pub zero_high: u16,
    /// Compare value for a 1 bit
    pub one_high: u16,
    /// Low periods appended after the pixel data
    pub reset_slots: usize,
    /// Duration of one symbol in ns
    pub symbol_ns: u32,
}

impl TimingConfig {
    /// 72 MHz timer clock, 1.3 µs symbol.
    ///
    /// 94 ticks per symbol; T0H = 4/13 of it (29 ticks), T1H = 7/13 (51 ticks).
    pub const STM32_72MHZ: Self = Self {
        period: 93,
        zero_high: 28,
        one_high: 50,
        reset_slots: RESET_SLOTS,
        symbol_ns: 1300,
    };

    /// Derive counts for a 1.3 µs symbol from the timer clock in MHz.
    ///
    /// The symbol is rounded to whole ticks first and the high times are
    /// 4/13 and 7/13 of it, so `from_timer_clock(72)` equals
    /// [`TimingConfig::STM32_72MHZ`]. Meant for `const` items so the table is
    /// fixed at build time.
    ///
    /// Clocks below 1 MHz give all-zero counts, and counts that would not fit
    /// a 16-bit timer saturate at `u16::MAX`. Neither is a usable waveform.
    pub const fn from_timer_clock(clock_mhz: u32) -> Self {
        let symbol = to_ticks(SYMBOL_NS, clock_mhz);
        Self {
            period: to_count(symbol),
            zero_high: to_count(share_of(symbol, T0H_PARTS)),
            one_high: to_count(share_of(symbol, T1H_PARTS)),
            reset_slots: RESET_SLOTS,
            symbol_ns: SYMBOL_NS,
        }
    }

    #[must_use]
    pub const fn with_reset_slots(mut self, reset_slots: usize) -> Self {
        self.reset_slots = reset_slots;
        self
    }

    /// Timer count for one data bit
    #[inline(always)]
    pub const fn bit(&self, set: bool) -> u16 {
        if set { self.one_high } else { self.zero_high }
    }

    /// Number of timing slots needed for `led_count` LEDs
    pub const fn buffer_len(&self, led_count: usize) -> usize {
        led_count * BITS_PER_LED + self.reset_slots
    }

    /// Time the line is busy for a full frame of `led_count` LEDs,
    /// reset gap included, rounded up to whole microseconds.
    #[allow(clippy::cast_lossless)]
    pub const fn frame_duration(&self, led_count: usize) -> Duration {
        let total_ns = self.buffer_len(led_count) as u64 * self.symbol_ns as u64;
        Duration::from_micros(total_ns.div_ceil(1000))
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::STM32_72MHZ
    }
}

/// Timing storage length for `led_count` LEDs with the default reset gap.
///
/// Use it to size a static buffer: `[u16; timing_buffer_len(8)]`.
pub const fn timing_buffer_len(led_count: usize) -> usize {
    led_count * BITS_PER_LED + RESET_SLOTS
}
