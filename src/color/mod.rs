mod hsv;

use smart_leds::RGB8;

pub use hsv::{HUE_MAX, Hsv, PERCENT_MAX, hsv2rgb};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
