//! Bit-addressable indicator buffer.
//!
//! Provides [`OutputBuffer`], which holds one bit per indicator and writes the
//! whole buffer to its [`ShiftRegister`] after every single-indicator change.

use crate::shift_register::ShiftRegister;
use crate::types::{Indicator, LedState};

/// One bit per indicator, mirrored to a shift register.
///
/// Bit `i` is set iff the most recent `set_led` for indicator `i` turned it
/// on. Only the main context touches the buffer; the button interrupt never
/// does.
pub struct OutputBuffer<R: ShiftRegister> {
    register: R,
    bits: u8,
}

impl<R: ShiftRegister> OutputBuffer<R> {
    /// Creates an all-off buffer. Nothing is transmitted until the first change.
    pub fn new(register: R) -> Self {
        Self { register, bits: 0 }
    }

    /// Sets one indicator and transmits the full buffer.
    pub fn set_led(&mut self, indicator: Indicator, state: LedState) {
        self.bits &= !indicator.mask();
        if state == LedState::On {
            self.bits |= indicator.mask();
        }
        self.transmit(self.bits);
    }

    /// Turns every indicator off, one `set_led` per indicator in ascending order.
    pub fn clear_all(&mut self) {
        for indicator in Indicator::ALL {
            self.set_led(indicator, LedState::Off);
        }
    }

    /// Writes `value` to the shift register without touching the buffer.
    pub fn transmit(&mut self, value: u8) {
        self.register.transmit(value);
    }

    /// Returns the buffered indicator bits.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Returns true if the indicator is buffered as on.
    #[inline]
    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.bits & indicator.mask() != 0
    }

    /// Returns a reference to the shift register.
    pub fn register(&self) -> &R {
        &self.register
    }

    /// Returns the shift register.
    pub fn release(self) -> R {
        self.register
    }
}
