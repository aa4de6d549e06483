//! Per-LED pixel storage with range and gradient addressing.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Color, lerp_color};
use crate::error::StripError;
use crate::order::ChannelOrder;

/// An ordered sequence of pixels, one packed word per LED.
///
/// `CAP` is the compile-time capacity; the actual strip length is fixed at
/// construction and may be anything up to `CAP`, including zero. Channel
/// values are stored in wire order via the buffer's [`ChannelOrder`], so a
/// stored value never needs re-permutation at encode time.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const CAP: usize> {
    words: Vec<u32, CAP>,
    order: ChannelOrder,
}

impl<const CAP: usize> PixelBuffer<CAP> {
    /// Create a buffer of `len` pixels, all channels off.
    ///
    /// Fails with [`StripError::InvalidConfiguration`] when `len` exceeds
    /// the compile-time capacity.
    pub fn new(len: usize, order: ChannelOrder) -> Result<Self, StripError> {
        let mut words = Vec::new();
        words
            .resize(len, 0)
            .map_err(|()| StripError::InvalidConfiguration)?;
        Ok(Self { words, order })
    }

    /// Number of pixels in the strip.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the strip has zero pixels.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The channel order shared by all operations.
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Packed wire-ordered words, one per pixel, in index order.
    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }

    fn check_arity(&self, color: Color) -> Result<(), StripError> {
        if color.channels() == self.order.channels() {
            Ok(())
        } else {
            Err(StripError::ColorArityMismatch)
        }
    }

    /// Set a single pixel.
    pub fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), StripError> {
        self.check_arity(color)?;
        let word = self
            .words
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange)?;
        *word = self.order.pack(color);
        Ok(())
    }

    /// Read a single pixel back as its logical color.
    pub fn get_pixel(&self, index: usize) -> Result<Color, StripError> {
        let word = self.words.get(index).ok_or(StripError::IndexOutOfRange)?;
        Ok(self.order.unpack(*word))
    }

    /// Set every pixel in the inclusive range `[p1, p2]` to `color`.
    ///
    /// The endpoints may be given in either order. A range that partially
    /// overhangs the strip is clipped to the valid bounds and succeeds;
    /// this leniency tolerates callers written against a longer strip.
    /// Only a range that misses the strip entirely fails with
    /// [`StripError::IndexOutOfRange`].
    pub fn set_pixel_line(
        &mut self,
        p1: usize,
        p2: usize,
        color: Color,
    ) -> Result<(), StripError> {
        self.check_arity(color)?;
        let (lo, hi) = self.clip_range(p1, p2)?;
        let word = self.order.pack(color);
        for slot in &mut self.words[lo..=hi] {
            *slot = word;
        }
        Ok(())
    }

    /// Write a linear gradient from `start` to `end` across `[p1, p2]`.
    ///
    /// Pixel `min(p1, p2)` receives exactly `start` and `max(p1, p2)`
    /// exactly `end`; in between, every channel is interpolated at the
    /// fraction `(i - lo) / (hi - lo)`. When `p1 == p2` the single pixel
    /// receives `start`. Clipping follows [`set_pixel_line`], with
    /// fractions still computed against the requested endpoints so a
    /// clipped gradient keeps its colors.
    ///
    /// [`set_pixel_line`]: PixelBuffer::set_pixel_line
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_pixel_line_gradient(
        &mut self,
        p1: usize,
        p2: usize,
        start: Color,
        end: Color,
    ) -> Result<(), StripError> {
        self.check_arity(start)?;
        self.check_arity(end)?;
        let (lo_requested, span) = {
            let lo = p1.min(p2);
            (lo, p1.max(p2) - lo)
        };
        let (lo, hi) = self.clip_range(p1, p2)?;
        for i in lo..=hi {
            let color =
                lerp_color(start, end, (i - lo_requested) as u32, span as u32);
            self.words[i] = self.order.pack(color);
        }
        Ok(())
    }

    /// Set the whole strip to `color`. A no-op on an empty strip.
    pub fn fill(&mut self, color: Color) -> Result<(), StripError> {
        self.check_arity(color)?;
        if self.is_empty() {
            return Ok(());
        }
        let last = self.words.len() - 1;
        self.set_pixel_line(0, last, color)
    }

    /// Turn every channel of every pixel off.
    pub fn clear(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }

    /// Rotate all pixels `n` positions toward index 0, wrapping around.
    pub fn rotate_left(&mut self, n: usize) {
        let len = self.words.len();
        if len > 0 {
            self.words.rotate_left(n % len);
        }
    }

    /// Rotate all pixels `n` positions away from index 0, wrapping around.
    pub fn rotate_right(&mut self, n: usize) {
        let len = self.words.len();
        if len > 0 {
            self.words.rotate_right(n % len);
        }
    }

    /// Normalize `[p1, p2]` to ordered bounds clipped to the strip.
    fn clip_range(&self, p1: usize, p2: usize) -> Result<(usize, usize), StripError> {
        let lo = p1.min(p2);
        let hi = p1.max(p2);
        if lo >= self.words.len() {
            return Err(StripError::IndexOutOfRange);
        }
        let clipped = hi.min(self.words.len() - 1);
        #[cfg(feature = "esp32-log")]
        if clipped != hi {
            println!("pixel range [{p1}, {p2}] clipped to strip length {}", self.words.len());
        }
        Ok((lo, clipped))
    }
}
