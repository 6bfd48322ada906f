use crate::color::Rgb;

/// Largest hue in degrees
pub const HUE_MAX: u16 = 359;
/// Largest saturation and value, in percent
pub const PERCENT_MAX: u8 = 100;

/// Sector slope: 255 / 60 degrees, scaled by 100 for integer math
const SECTOR_SLOPE: u16 = 425;

/// HSV color with integer hue degrees and percentage saturation/value.
///
/// Out of range components are clamped on conversion, so any value of this
/// type converts to a valid [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue in degrees (0-359)
    pub hue: u16,
    /// Saturation in percent (0-100)
    pub sat: u8,
    /// Value in percent (0-100)
    pub val: u8,
}

impl Hsv {
    /// Create a new HSV color, clamping each component into range
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }.clamped()
    }

    /// Returns a copy with every component clamped into range
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            hue: if self.hue > HUE_MAX { HUE_MAX } else { self.hue },
            sat: if self.sat > PERCENT_MAX { PERCENT_MAX } else { self.sat },
            val: if self.val > PERCENT_MAX { PERCENT_MAX } else { self.val },
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv2rgb(hsv)
    }
}

/// Linear ramp inside one 60 degree hue sector
#[inline]
const fn ramp(delta: u16) -> u16 {
    // Truncating; reaches exactly 255 at a 60 degree delta
    (SECTOR_SLOPE * delta) / 100
}

/// Convert HSV to RGB.
///
/// Hue picks one of six sectors where two channels sit at 0 or 255 and the
/// third follows [`ramp`]. Saturation then blends each channel toward white
/// and value scales all channels.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn hsv2rgb(hsv: Hsv) -> Rgb {
    let hsv = hsv.clamped();
    let hue = hsv.hue;

    let (r, g, b): (u16, u16, u16) = if hue < 61 {
        (255, ramp(hue), 0)
    } else if hue < 121 {
        (255 - ramp(hue - 60), 255, 0)
    } else if hue < 181 {
        (0, 255, ramp(hue - 120))
    } else if hue < 241 {
        (0, 255 - ramp(hue - 180), 255)
    } else if hue < 301 {
        (ramp(hue - 240), 0, 255)
    } else {
        (255, 0, 255 - ramp(hue - 300))
    };

    let whiteness = (PERCENT_MAX - hsv.sat) as u16;
    let r = desaturate(r, whiteness);
    let g = desaturate(g, whiteness);
    let b = desaturate(b, whiteness);

    let val = hsv.val as u16;
    Rgb {
        r: ((r * val) / 100) as u8,
        g: ((g * val) / 100) as u8,
        b: ((b * val) / 100) as u8,
    }
}

/// Blend one channel toward 255 by `whiteness` percent
#[inline]
const fn desaturate(channel: u16, whiteness: u16) -> u16 {
    channel + ((255 - channel) * whiteness) / 100
}
