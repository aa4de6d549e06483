//! Wire encoding for the WS2812/SK6812 single-wire protocol.
//!
//! A frame is transmitted as pixels in index order, each pixel as its
//! channels in wire order, each byte MSB-first. Every bit occupies the
//! same slot time on the line; a `1` holds the line high longer than a
//! `0`. After the last bit the line must stay low for the latch gap to
//! commit the frame.
//!
//! The encoder is independent of the transmission mechanism: it yields
//! either the raw wire byte stream (for FIFO/DMA/SPI-style drivers that
//! do their own bit expansion) or pre-expanded per-bit [`Pulse`] symbols
//! (for bit-banging and PWM drivers).

use embassy_time::Duration;

use crate::buffer::PixelBuffer;
use crate::color::scale8;
use crate::order::ColorMode;

/// Supported LED strip protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// WS2812/WS2812B, the common three-channel strips.
    Ws2812,
    /// SK6812, typically the four-channel RGBW strips.
    Sk6812,
}

impl Protocol {
    /// The protocol conventionally paired with a color mode.
    pub const fn for_mode(mode: ColorMode) -> Protocol {
        match mode {
            ColorMode::Rgb => Protocol::Ws2812,
            ColorMode::Rgbw => Protocol::Sk6812,
        }
    }

    /// Datasheet timing table for this protocol.
    pub const fn timing(self) -> Timing {
        match self {
            Protocol::Ws2812 => WS2812_TIMING,
            Protocol::Sk6812 => SK6812_TIMING,
        }
    }
}

/// Pulse widths of a protocol, tolerances typically +/- 150 ns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// High time of a `1` bit, in nanoseconds.
    pub t1h: u16,
    /// Low time of a `1` bit, in nanoseconds.
    pub t1l: u16,
    /// High time of a `0` bit, in nanoseconds.
    pub t0h: u16,
    /// Low time of a `0` bit, in nanoseconds.
    pub t0l: u16,
    /// Minimum low time after the last bit that latches the frame.
    pub latch: Duration,
}

/// WS2812B timing. The 300 us latch covers the later revisions, which
/// need considerably more than the original 50 us.
pub const WS2812_TIMING: Timing = Timing {
    t1h: 800,
    t1l: 450,
    t0h: 400,
    t0l: 850,
    latch: Duration::from_micros(300),
};

/// SK6812 timing.
pub const SK6812_TIMING: Timing = Timing {
    t1h: 600,
    t1l: 600,
    t0h: 300,
    t0l: 900,
    latch: Duration::from_micros(80),
};

/// One bit on the wire: hold high, then hold low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// High duration in nanoseconds.
    pub high_ns: u16,
    /// Low duration in nanoseconds.
    pub low_ns: u16,
}

/// Serializes a [`PixelBuffer`] into the transmission format.
#[derive(Debug, Clone, Copy)]
pub struct StripEncoder {
    timing: Timing,
}

impl StripEncoder {
    /// Create an encoder for the given protocol.
    pub const fn new(protocol: Protocol) -> Self {
        Self {
            timing: protocol.timing(),
        }
    }

    /// The timing table in effect, including the latch gap the driver
    /// must honor after the byte stream ends.
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// The wire byte stream for one frame.
    ///
    /// Pixels in index order, channels in wire order, each byte scaled by
    /// `brightness` (255 passes values through unchanged). Yields exactly
    /// `len * channels` bytes. Stored pixel values are not mutated.
    #[allow(clippy::unused_self, clippy::cast_possible_truncation)]
    pub fn bytes<'a, const CAP: usize>(
        &self,
        buffer: &'a PixelBuffer<CAP>,
        brightness: u8,
    ) -> impl Iterator<Item = u8> + use<'a, CAP> {
        let channels = buffer.order().channels();
        buffer.words().iter().flat_map(move |&word| {
            (0..channels).map(move |pos| {
                let byte = ((word >> ((channels - 1 - pos) * 8)) & 0xFF) as u8;
                scale8(byte, brightness)
            })
        })
    }

    /// The per-bit pulse symbol stream for one frame, MSB-first per byte.
    ///
    /// Yields `len * channels * 8` pulses. The driver must keep the line
    /// low for [`Timing::latch`] after the last pulse.
    pub fn pulses<'a, const CAP: usize>(
        &self,
        buffer: &'a PixelBuffer<CAP>,
        brightness: u8,
    ) -> impl Iterator<Item = Pulse> + use<'a, CAP> {
        let timing = self.timing;
        self.bytes(buffer, brightness).flat_map(move |byte| {
            (0..8u8).map(move |bit| {
                if byte & (0x80 >> bit) == 0 {
                    Pulse {
                        high_ns: timing.t0h,
                        low_ns: timing.t0l,
                    }
                } else {
                    Pulse {
                        high_ns: timing.t1h,
                        low_ns: timing.t1l,
                    }
                }
            })
        })
    }
}
