//! Color types and integer color math.
//!
//! All conversions use integer-only arithmetic so results are identical
//! across targets with and without an FPU.

use smart_leds::RGB8;

/// RGB color type shared with the `smart-leds` ecosystem.
pub type Rgb = RGB8;

/// A caller-supplied color, tagged with its channel arity.
///
/// The variant must match the strip's [`ColorMode`](crate::ColorMode):
/// writing an `Rgb` color into an RGBW strip (or the reverse) is rejected
/// with [`ColorArityMismatch`](crate::StripError::ColorArityMismatch)
/// instead of silently defaulting the white channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Three-channel color.
    Rgb(Rgb),
    /// Four-channel color with a dedicated white LED.
    Rgbw(Rgb, u8),
}

impl Color {
    /// All channels off.
    pub const OFF: Color = Color::Rgb(Rgb { r: 0, g: 0, b: 0 });

    /// The RGB part of the color.
    pub const fn rgb(self) -> Rgb {
        match self {
            Color::Rgb(rgb) | Color::Rgbw(rgb, _) => rgb,
        }
    }

    /// The white channel, if the color carries one.
    pub const fn white(self) -> Option<u8> {
        match self {
            Color::Rgb(_) => None,
            Color::Rgbw(_, w) => Some(w),
        }
    }

    /// Number of channels (3 or 4).
    pub const fn channels(self) -> usize {
        match self {
            Color::Rgb(_) => 3,
            Color::Rgbw(_, _) => 4,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(Rgb { r, g, b })
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Color::Rgbw(Rgb { r, g, b }, w)
    }
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Interpolate between two 8-bit values at the fraction `num / den`.
///
/// Rounds half away from zero, so `num = 0` reproduces `a` exactly and
/// `num = den` reproduces `b` exactly. `den = 0` is treated as fraction 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn lerp8(a: u8, b: u8, num: u32, den: u32) -> u8 {
    if den == 0 || num == 0 {
        return a;
    }
    if num >= den {
        return b;
    }
    let delta = b as i64 - a as i64;
    let half = if delta < 0 { -(den as i64) } else { den as i64 };
    let rounded = (2 * delta * num as i64 + half) / (2 * den as i64);
    (a as i64 + rounded) as u8
}

/// Per-channel linear interpolation between two colors at `num / den`.
///
/// The white channel is interpolated only when both endpoints carry one;
/// otherwise the result is a plain RGB color.
pub fn lerp_color(start: Color, end: Color, num: u32, den: u32) -> Color {
    let a = start.rgb();
    let b = end.rgb();
    let rgb = Rgb {
        r: lerp8(a.r, b.r, num, den),
        g: lerp8(a.g, b.g, num, den),
        b: lerp8(a.b, b.b, num, den),
    };
    match (start.white(), end.white()) {
        (Some(w0), Some(w1)) => Color::Rgbw(rgb, lerp8(w0, w1, num, den)),
        _ => Color::Rgb(rgb),
    }
}

/// Convert a 16-bit-hue HSV color to RGB.
///
/// `hue` spans the full color wheel over 0..=65535 and wraps inherently;
/// red sits at 0, green near 21845 and blue near 43690. `sat = 0` yields
/// the grayscale `(val, val, val)`, `sat = 255` the pure hue at full
/// saturation. Uses the Adafruit integer formulation: the hue is mapped
/// onto a 0..=1530 ladder of six 255-wide sectors, then saturation and
/// value are applied as `(((c * (1 + sat)) >> 8) + (255 - sat)) * (1 + val) >> 8`
/// per channel, keeping every result within `[0, 255]`.
#[allow(clippy::cast_possible_truncation)]
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> Rgb {
    let h = (u32::from(hue) * 1530 + 32_768) >> 16;

    let (r, g, b): (u32, u32, u32) = if h < 510 {
        // red -> green
        if h < 255 {
            (255, h, 0)
        } else {
            (510 - h, 255, 0)
        }
    } else if h < 1020 {
        // green -> blue
        if h < 765 {
            (0, 255, h - 510)
        } else {
            (0, 1020 - h, 255)
        }
    } else if h < 1530 {
        // blue -> red
        if h < 1275 {
            (h - 1020, 0, 255)
        } else {
            (255, 0, 1530 - h)
        }
    } else {
        (255, 0, 0)
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);

    Rgb {
        r: (((((r * s1) >> 8) + s2) * v1) >> 8) as u8,
        g: (((((g * s1) >> 8) + s2) * v1) >> 8) as u8,
        b: (((((b * s1) >> 8) + s2) * v1) >> 8) as u8,
    }
}
