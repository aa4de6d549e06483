#![no_std]

//! Pixel buffer and wire encoder for WS2812/SK6812 ("neopixel") strips.
//!
//! The crate owns the logical side of driving an addressable LED strip:
//! per-LED channel storage in a configurable wire order, single-pixel and
//! range addressing, linear gradients, 16-bit-hue HSV conversion, and
//! encoding into the exact byte/bit stream the strip protocol expects.
//! The precisely-timed transmission itself is delegated to a
//! [`StripDriver`] implementation (PIO, DMA, SPI, bit-banged -- the
//! encoder does not care which).

pub mod buffer;
pub mod color;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod order;
pub mod strip;

pub use buffer::PixelBuffer;
pub use color::{Color, Rgb, color_hsv, lerp_color, lerp8, scale8};
pub use driver::BusyFlag;
pub use encoder::{Protocol, Pulse, SK6812_TIMING, StripEncoder, Timing, WS2812_TIMING};
pub use error::StripError;
pub use order::{ChannelOrder, ColorMode};
pub use strip::{Strip, StripConfig};

pub use embassy_time::Duration;

/// Abstract transmission driver trait
///
/// Implement this trait to support different hardware platforms. The
/// strip is generic over this trait and only needs three things from it:
/// a channels-per-pixel capability query, an in-flight query, and a
/// "send this frame now" write.
pub trait StripDriver {
    /// Driver-specific transmission error.
    type Error;

    /// Channels per pixel the hardware path supports (3 or 4).
    fn channels(&self) -> usize;

    /// Whether a previously armed transfer is still in flight.
    ///
    /// Synchronous drivers that complete inside [`write`](StripDriver::write)
    /// can keep the default.
    fn is_busy(&self) -> bool {
        false
    }

    /// Transmit one frame given as the wire byte stream.
    ///
    /// The driver either completes the transfer before returning or arms
    /// it and reports completion through [`is_busy`](StripDriver::is_busy).
    /// Implementations should document their maximum transfer latency and
    /// must keep the line low for the protocol latch gap after the last
    /// byte before accepting the next frame.
    fn write<I>(&mut self, bytes: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u8>;
}
