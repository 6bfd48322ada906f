//! WS2812 LED string driver core.
//!
//! Keeps a logical pixel buffer, encodes it into PWM compare values for a
//! DMA-fed timer, and guards the timing buffer while a transfer is in
//! flight. Timer, PWM and DMA setup stay outside: plug them in through
//! [`TransferStart`] and report completion with [`TransferCompleter`].
#![no_std]

pub mod bounds;
pub mod color;
pub mod encoder;
pub mod error;
pub mod instance;
pub mod pixel_buffer;
pub mod timing;
pub mod transfer;
pub mod transform;

pub use bounds::SpanBounds;
pub use color::{BLACK, Hsv, Rgb, hsv2rgb};
pub use embassy_time::Duration;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use instance::{InitError, Instance, Lifecycle};
pub use pixel_buffer::PixelBuffer;
pub use timing::{BITS_PER_LED, RESET_SLOTS, TimingConfig, timing_buffer_len};
pub use transfer::{TransferCompleter, TransferSignal, TransferStart, TransferState};
