//! The strip facade: buffer, encoder and driver behind one handle.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::buffer::PixelBuffer;
use crate::color::{Color, Rgb, color_hsv};
use crate::encoder::{Protocol, StripEncoder};
use crate::error::StripError;
use crate::order::{ChannelOrder, ColorMode};

/// Configuration for a strip.
#[derive(Debug, Clone)]
pub struct StripConfig<'a> {
    /// Number of LEDs on the strip. May be zero; must fit the `CAP`
    /// capacity of the [`Strip`].
    pub pixel_count: usize,
    /// Channel arity of the strip hardware.
    pub mode: ColorMode,
    /// Explicit wire order string such as `"GRB"` or `"WRGB"`. Defaults
    /// to the identity order of `mode`. Must agree with `mode` in arity.
    pub order: Option<&'a str>,
    /// Protocol timing override. Defaults to the protocol conventionally
    /// paired with `mode` (WS2812 for RGB, SK6812 for RGBW).
    pub protocol: Option<Protocol>,
    /// Initial global brightness, 255 = full.
    pub brightness: u8,
}

impl Default for StripConfig<'_> {
    fn default() -> Self {
        Self {
            pixel_count: 0,
            mode: ColorMode::Rgb,
            order: None,
            protocol: None,
            brightness: 255,
        }
    }
}

/// A single addressable LED strip.
///
/// Owns the pixel buffer, the wire encoder and the transmission driver.
/// All mutation is in-memory and non-blocking; nothing reaches the
/// physical strip until [`show()`](Strip::show) hands a freshly encoded
/// frame to the driver.
pub struct Strip<D: StripDriver, const CAP: usize> {
    buffer: PixelBuffer<CAP>,
    encoder: StripEncoder,
    driver: D,
    brightness: u8,
}

impl<D: StripDriver, const CAP: usize> Strip<D, CAP> {
    /// Create a strip from a driver and configuration.
    ///
    /// Fails with [`StripError::InvalidConfiguration`] when the pixel
    /// count exceeds `CAP`, the order string disagrees with the mode, or
    /// the driver supports fewer channels per pixel than the mode needs.
    pub fn new(driver: D, config: &StripConfig<'_>) -> Result<Self, StripError> {
        let order = match config.order {
            Some(order) => ChannelOrder::parse(order)?,
            None => config.mode.default_order(),
        };
        if order.mode() != config.mode {
            return Err(StripError::InvalidConfiguration);
        }
        if driver.channels() < config.mode.channels() {
            return Err(StripError::InvalidConfiguration);
        }
        let buffer = PixelBuffer::new(config.pixel_count, order)?;
        let protocol = config
            .protocol
            .unwrap_or_else(|| Protocol::for_mode(config.mode));
        Ok(Self {
            buffer,
            encoder: StripEncoder::new(protocol),
            driver,
            brightness: config.brightness,
        })
    }

    /// Number of LEDs on the strip.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the strip has zero LEDs.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The channel order in effect.
    pub const fn order(&self) -> ChannelOrder {
        self.buffer.order()
    }

    /// Set a single pixel. See [`PixelBuffer::set_pixel`].
    pub fn set_pixel(
        &mut self,
        index: usize,
        color: impl Into<Color>,
    ) -> Result<(), StripError> {
        self.buffer.set_pixel(index, color.into())
    }

    /// Read a pixel back. See [`PixelBuffer::get_pixel`].
    pub fn get_pixel(&self, index: usize) -> Result<Color, StripError> {
        self.buffer.get_pixel(index)
    }

    /// Set an inclusive pixel range. See [`PixelBuffer::set_pixel_line`].
    pub fn set_pixel_line(
        &mut self,
        p1: usize,
        p2: usize,
        color: impl Into<Color>,
    ) -> Result<(), StripError> {
        self.buffer.set_pixel_line(p1, p2, color.into())
    }

    /// Write a linear gradient across an inclusive pixel range.
    /// See [`PixelBuffer::set_pixel_line_gradient`].
    pub fn set_pixel_line_gradient(
        &mut self,
        p1: usize,
        p2: usize,
        start: impl Into<Color>,
        end: impl Into<Color>,
    ) -> Result<(), StripError> {
        self.buffer
            .set_pixel_line_gradient(p1, p2, start.into(), end.into())
    }

    /// Set the whole strip to one color. See [`PixelBuffer::fill`].
    pub fn fill(&mut self, color: impl Into<Color>) -> Result<(), StripError> {
        self.buffer.fill(color.into())
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Rotate all pixels toward index 0, wrapping around.
    pub fn rotate_left(&mut self, n: usize) {
        self.buffer.rotate_left(n);
    }

    /// Rotate all pixels away from index 0, wrapping around.
    pub fn rotate_right(&mut self, n: usize) {
        self.buffer.rotate_right(n);
    }

    /// Global brightness currently applied at encode time.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the global brightness scale, 255 = full.
    ///
    /// Applied to every channel while encoding; stored pixel values are
    /// never mutated, so reads via [`get_pixel`](Strip::get_pixel) and
    /// later brightness changes stay exact.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Convert a 16-bit-hue HSV color to RGB.
    /// See [`color_hsv`](crate::color::color_hsv).
    #[allow(clippy::unused_self)]
    pub fn color_hsv(&self, hue: u16, sat: u8, val: u8) -> Rgb {
        color_hsv(hue, sat, val)
    }

    /// Encode the current buffer and hand the frame to the driver.
    ///
    /// This is the single state-publishing operation: no mutation is
    /// visible on the physical strip until it completes. Fails with
    /// [`StripError::TransmissionBusy`] while the driver still reports a
    /// prior transfer in flight, and with
    /// [`StripError::TransmissionFailure`] when the driver rejects the
    /// write; neither case touches the pixel buffer, so the caller may
    /// simply retry.
    pub fn show(&mut self) -> Result<(), StripError> {
        if self.driver.is_busy() {
            return Err(StripError::TransmissionBusy);
        }
        let bytes = self.encoder.bytes(&self.buffer, self.brightness);
        self.driver.write(bytes).map_err(|_| {
            #[cfg(feature = "esp32-log")]
            println!("strip: transmission failed");
            StripError::TransmissionFailure
        })
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the underlying driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the strip, returning the driver.
    pub fn release(self) -> D {
        self.driver
    }
}
