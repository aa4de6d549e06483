//! Driver-side helpers.
//!
//! The [`StripDriver`](crate::StripDriver) trait itself lives at the
//! crate root; this module carries building blocks for implementing it.

use core::cell::Cell;

use critical_section::Mutex;

/// ISR-safe in-flight latch for DMA-driven drivers.
///
/// A driver arming a transfer sets the flag from `write()` and clears it
/// from its transfer-complete interrupt; `is_busy()` then simply reads
/// it. Access goes through critical sections, so the flag can be shared
/// between the main context and an interrupt handler as a `static`.
pub struct BusyFlag {
    inner: Mutex<Cell<bool>>,
}

impl BusyFlag {
    /// Create a cleared flag.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark a transfer as in flight.
    pub fn set(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(true));
    }

    /// Mark the transfer as complete.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(false));
    }

    /// Whether a transfer is currently in flight.
    pub fn is_set(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}
