//! One LED string: pixel buffer, encoder and transfer handoff bound to a
//! single transfer collaborator.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::color::{Hsv, Rgb};
use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::pixel_buffer::PixelBuffer;
use crate::timing::{OFF, TimingConfig};
use crate::transfer::{TransferSignal, TransferStart, TransferState};

/// Lifecycle of an [`Instance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Created, buffers not acquired yet
    Uninitialized,
    /// Buffers acquired, updates allowed
    Ready,
    /// Buffers released; every operation fails from now on
    TornDown,
}

/// WS2812 string driven through a DMA-fed PWM sequence.
///
/// `MAX_LEDS` bounds the pixel storage. The timing storage is borrowed from
/// the caller so that its address stays fixed while a DMA transfer reads it;
/// size it with [`crate::timing_buffer_len`].
///
/// # Usage
///
/// ```ignore
/// static SIGNAL: TransferSignal = TransferSignal::new();
/// static SLOTS: StaticCell<[u16; timing_buffer_len(8)]> = StaticCell::new();
///
/// let mut strip: Instance<'_, _, 8> = Instance::new(dma, &SIGNAL, TimingConfig::STM32_72MHZ);
/// strip.init(8, SLOTS.init([0; timing_buffer_len(8)]))?;
///
/// // DMA transfer-complete interrupt:
/// SIGNAL.completer().notify_complete();
///
/// strip.set_one(0, Rgb::new(255, 0, 0))?;
/// strip.request_update()?;
/// ```
///
/// Updates must come from one context; `request_update` takes `&mut self`,
/// so the borrow checker enforces that within safe code.
pub struct Instance<'a, D: TransferStart, const MAX_LEDS: usize> {
    // External dependencies and configuration
    driver: D,
    signal: &'a TransferSignal,
    encoder: Encoder,

    // Internal state
    lifecycle: Lifecycle,
    led_count: usize,
    disabled: bool,
    pixels: Option<PixelBuffer<MAX_LEDS>>,
    slots: Option<&'a mut [u16]>,
}

impl<'a, D: TransferStart, const MAX_LEDS: usize> Instance<'a, D, MAX_LEDS> {
    /// Create an uninitialized instance bound to `driver` and `signal`.
    pub const fn new(driver: D, signal: &'a TransferSignal, timing: TimingConfig) -> Self {
        Self {
            driver,
            signal,
            encoder: Encoder::new(timing),
            lifecycle: Lifecycle::Uninitialized,
            led_count: 0,
            disabled: false,
            pixels: None,
            slots: None,
        }
    }

    /// Acquire the pixel buffer and timing storage for `led_count` LEDs.
    ///
    /// On failure the instance stays uninitialized and the storage comes back
    /// inside the [`InitError`], so the same buffer can be retried.
    pub fn init(
        &mut self,
        led_count: usize,
        slots: &'a mut [u16],
    ) -> core::result::Result<(), InitError<'a>> {
        let (pixels, needed) = match self.check_init(led_count, slots.len()) {
            Ok(checked) => checked,
            Err(error) => return Err(InitError { error, slots }),
        };
        slots[..needed].fill(OFF);

        #[cfg(feature = "esp32-log")]
        println!("[neopixel] init: {} LEDs, {} slots", led_count, needed);

        self.pixels = Some(pixels);
        self.slots = Some(slots);
        self.led_count = led_count;
        self.lifecycle = Lifecycle::Ready;
        Ok(())
    }

    /// Run every `init` check without touching the instance or the storage.
    ///
    /// Returns the new pixel buffer and the number of timing slots it needs.
    fn check_init(
        &self,
        led_count: usize,
        available: usize,
    ) -> Result<(PixelBuffer<MAX_LEDS>, usize)> {
        match self.lifecycle {
            Lifecycle::Uninitialized => {}
            Lifecycle::Ready => return Err(Error::AlreadyInitialized),
            Lifecycle::TornDown => return Err(Error::NotInitialized),
        }

        let pixels = PixelBuffer::new(led_count).inspect_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[neopixel] init of {} LEDs failed: {}", led_count, _err);
        })?;

        // Bounded by MAX_LEDS from here on
        let needed = self.encoder.encoded_len(led_count);
        if available < needed {
            #[cfg(feature = "esp32-log")]
            println!(
                "[neopixel] timing storage holds {} slots, {} needed",
                available, needed
            );
            return Err(Error::AllocationFailure);
        }

        Ok((pixels, needed))
    }

    /// Release both buffers and make the instance permanently unusable.
    ///
    /// Waits for an outstanding transfer first, so the timing storage is
    /// never handed back while a DMA channel still reads it.
    pub fn deinit(&mut self) {
        if self.lifecycle == Lifecycle::Ready {
            while self.signal.is_busy() {
                core::hint::spin_loop();
            }
            #[cfg(feature = "esp32-log")]
            println!("[neopixel] deinit: {} LEDs released", self.led_count);
        }

        self.pixels = None;
        self.slots = None;
        self.led_count = 0;
        self.lifecycle = Lifecycle::TornDown;
    }

    /// Encode the current pixels and hand them to the transfer collaborator.
    ///
    /// Blocks while the previous transfer is outstanding. The colors used are
    /// the ones present once the wait is over, not at the time of the call.
    /// If the collaborator rejects the start the signal goes back to idle and
    /// the call may be retried.
    pub fn request_update(&mut self) -> Result<()> {
        let (Some(pixels), Some(slots)) = (&self.pixels, self.slots.as_deref_mut()) else {
            return Err(Error::NotInitialized);
        };

        self.signal.wait_and_begin();

        let len = self.encoder.encode(pixels.as_slice(), self.disabled, slots);
        if let Err(_err) = self.driver.start_transfer(&slots[..len]) {
            #[cfg(feature = "esp32-log")]
            println!("[neopixel] transfer start rejected: {:?}", _err);
            self.signal.abort();
            return Err(Error::TransferStartFailed);
        }

        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Number of LEDs; zero unless initialized
    pub fn led_count(&self) -> usize {
        self.led_count
    }

    pub fn transfer_state(&self) -> TransferState {
        self.signal.state()
    }

    /// Check whether [`Instance::request_update`] would block right now
    pub fn is_busy(&self) -> bool {
        self.signal.is_busy()
    }

    /// Blackout: while set, updates send all-off slots and the pixel
    /// buffer is left untouched.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn timing(&self) -> &TimingConfig {
        self.encoder.timing()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn pixels(&self) -> Result<&PixelBuffer<MAX_LEDS>> {
        self.pixels.as_ref().ok_or(Error::NotInitialized)
    }

    /// Mutable pixel access, allowed while a transfer is outstanding
    pub fn pixels_mut(&mut self) -> Result<&mut PixelBuffer<MAX_LEDS>> {
        self.pixels.as_mut().ok_or(Error::NotInitialized)
    }

    /// Slots produced by the last update
    pub fn timing_slots(&self) -> Result<&[u16]> {
        let slots = self.slots.as_deref().ok_or(Error::NotInitialized)?;
        Ok(&slots[..self.encoder.encoded_len(self.led_count)])
    }

    pub fn set_one(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.pixels_mut()?.set_one(index, color)
    }

    pub fn set_one_hsv(&mut self, index: usize, color: Hsv) -> Result<()> {
        self.pixels_mut()?.set_one_hsv(index, color)
    }

    pub fn set_all(&mut self, color: Rgb) -> Result<()> {
        self.pixels_mut()?.set_all(color);
        Ok(())
    }

    pub fn set_all_hsv(&mut self, color: Hsv) -> Result<()> {
        self.pixels_mut()?.set_all_hsv(color);
        Ok(())
    }

    pub fn set_span(&mut self, low: usize, high: usize, color: Rgb) -> Result<()> {
        self.pixels_mut()?.set_span(low, high, color)
    }

    pub fn set_span_hsv(&mut self, low: usize, high: usize, color: Hsv) -> Result<()> {
        self.pixels_mut()?.set_span_hsv(low, high, color)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.pixels_mut()?.clear();
        Ok(())
    }

    pub fn shift_left(&mut self, amount: usize) -> Result<()> {
        self.pixels_mut()?.shift_left(amount);
        Ok(())
    }

    pub fn shift_right(&mut self, amount: usize) -> Result<()> {
        self.pixels_mut()?.shift_right(amount);
        Ok(())
    }

    pub fn rotate_left(&mut self, amount: usize) -> Result<()> {
        self.pixels_mut()?.rotate_left(amount);
        Ok(())
    }

    pub fn rotate_right(&mut self, amount: usize) -> Result<()> {
        self.pixels_mut()?.rotate_right(amount);
        Ok(())
    }
}

/// Failed [`Instance::init`], carrying the timing storage back to the caller.
pub struct InitError<'a> {
    error: Error,
    slots: &'a mut [u16],
}

impl<'a> InitError<'a> {
    pub fn error(&self) -> Error {
        self.error
    }

    /// Take back the timing storage passed to `init`
    pub fn into_slots(self) -> &'a mut [u16] {
        self.slots
    }
}

impl core::fmt::Debug for InitError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InitError")
            .field("error", &self.error)
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl core::fmt::Display for InitError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "init failed: {}", self.error)
    }
}

impl core::error::Error for InitError<'_> {}

impl From<InitError<'_>> for Error {
    fn from(err: InitError<'_>) -> Self {
        err.error
    }
}

impl<D: TransferStart, const MAX_LEDS: usize> Drop for Instance<'_, D, MAX_LEDS> {
    fn drop(&mut self) {
        self.deinit();
    }
}

impl<D: TransferStart, const MAX_LEDS: usize> SmartLedsWrite for Instance<'_, D, MAX_LEDS> {
    type Error = Error;
    type Color = Rgb;

    /// Copy the colors into the pixel buffer, then update the strip
    fn write<T, I>(&mut self, iterator: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.pixels_mut()?.fill_from(iterator);
        self.request_update()
    }
}
