//! Color mode and wire channel order.
//!
//! Strip hardware defines the byte sequence in which a pixel's channels
//! are transmitted (neopixels are usually GRB). [`ChannelOrder`] is a
//! bijective mapping from the logical R/G/B/(W) channels to their wire
//! positions, fixed at construction and shared by every buffer operation.

use crate::color::{Color, Rgb};
use crate::error::StripError;

/// Channel arity of a strip, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Three channels per pixel (WS2812 family).
    Rgb,
    /// Four channels per pixel with dedicated white (SK6812 RGBW family).
    Rgbw,
}

impl ColorMode {
    /// Number of channels per pixel.
    pub const fn channels(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgbw => 4,
        }
    }

    /// The identity channel order for this mode.
    pub const fn default_order(self) -> ChannelOrder {
        match self {
            ColorMode::Rgb => ChannelOrder::RGB,
            ColorMode::Rgbw => ChannelOrder::RGBW,
        }
    }
}

/// A validated permutation of logical channels onto wire positions.
///
/// Each pixel is stored as one packed `u32` word with the first wire byte
/// in the most significant used position, so the per-channel bit shift is
/// `(channels - 1 - wire_pos) * 8`. Encoding then reduces to a
/// shift-and-mask walk over the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    mode: ColorMode,
    // Bit shift of R, G, B, W inside the packed word. W is unused in RGB mode.
    shifts: [u8; 4],
}

impl ChannelOrder {
    /// Logical order, three channels.
    pub const RGB: ChannelOrder = ChannelOrder {
        mode: ColorMode::Rgb,
        shifts: [16, 8, 0, 0],
    };

    /// The usual WS2812 wire order.
    pub const GRB: ChannelOrder = ChannelOrder {
        mode: ColorMode::Rgb,
        shifts: [8, 16, 0, 0],
    };

    /// Logical order, four channels.
    pub const RGBW: ChannelOrder = ChannelOrder {
        mode: ColorMode::Rgbw,
        shifts: [24, 16, 8, 0],
    };

    /// The usual SK6812 RGBW wire order.
    pub const GRBW: ChannelOrder = ChannelOrder {
        mode: ColorMode::Rgbw,
        shifts: [16, 24, 8, 0],
    };

    /// White-first wire order found on some RGBW strips.
    pub const WRGB: ChannelOrder = ChannelOrder {
        mode: ColorMode::Rgbw,
        shifts: [16, 8, 0, 24],
    };

    /// Parse an order string such as `"GRB"` or `"WRGB"`.
    ///
    /// The string must be a permutation of `RGB` (three-channel mode) or
    /// `RGBW` (four-channel mode); anything else fails with
    /// [`StripError::InvalidConfiguration`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(order: &str) -> Result<Self, StripError> {
        let letters = order.as_bytes();
        let mode = match letters.len() {
            3 => ColorMode::Rgb,
            4 => ColorMode::Rgbw,
            _ => return Err(StripError::InvalidConfiguration),
        };

        let mut shifts = [0u8; 4];
        let mut seen = [false; 4];
        let last = letters.len() - 1;
        for (pos, &letter) in letters.iter().enumerate() {
            let channel = match letter {
                b'R' => 0,
                b'G' => 1,
                b'B' => 2,
                b'W' if mode == ColorMode::Rgbw => 3,
                _ => return Err(StripError::InvalidConfiguration),
            };
            if seen[channel] {
                return Err(StripError::InvalidConfiguration);
            }
            seen[channel] = true;
            shifts[channel] = ((last - pos) * 8) as u8;
        }

        Ok(Self { mode, shifts })
    }

    /// Color mode this order belongs to.
    pub const fn mode(self) -> ColorMode {
        self.mode
    }

    /// Number of channels per pixel.
    pub const fn channels(self) -> usize {
        self.mode.channels()
    }

    /// Pack a color into its wire-ordered word.
    ///
    /// The color's arity must already have been validated against the mode.
    pub(crate) fn pack(self, color: Color) -> u32 {
        let rgb = color.rgb();
        let mut word = (u32::from(rgb.r) << self.shifts[0])
            | (u32::from(rgb.g) << self.shifts[1])
            | (u32::from(rgb.b) << self.shifts[2]);
        if let Some(white) = color.white() {
            word |= u32::from(white) << self.shifts[3];
        }
        word
    }

    /// Recover the logical color from a packed word.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn unpack(self, word: u32) -> Color {
        let rgb = Rgb {
            r: ((word >> self.shifts[0]) & 0xFF) as u8,
            g: ((word >> self.shifts[1]) & 0xFF) as u8,
            b: ((word >> self.shifts[2]) & 0xFF) as u8,
        };
        match self.mode {
            ColorMode::Rgb => Color::Rgb(rgb),
            ColorMode::Rgbw => {
                Color::Rgbw(rgb, ((word >> self.shifts[3]) & 0xFF) as u8)
            }
        }
    }
}
