//! Serial-to-parallel shift register output.
//!
//! Defines the [`ShiftRegister`] trait used by the output buffer and a
//! bit-banged implementation over three `embedded-hal` output pins.

use embedded_hal::digital::OutputPin;

/// Trait for abstracting the shift register hardware.
///
/// Implement this for your output hardware (GPIO bit-bang, SPI, ...) to let
/// the output buffer drive it.
pub trait ShiftRegister {
    /// Makes `value` visible on the parallel outputs.
    ///
    /// Bit `i` of `value` drives output `i`. Handle any hardware errors
    /// internally - this method cannot fail.
    fn transmit(&mut self, value: u8);
}

/// Shift register driven by data, clock and latch pins.
///
/// Each transmission drops the latch, shifts 8 bits most significant first
/// (data set up, then a rising then falling clock edge per bit) and raises the
/// latch to present all outputs at once.
pub struct PinShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
}

impl<DATA, CLOCK, LATCH> PinShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    /// Creates a new shift register driver.
    ///
    /// The clock is driven low so the first shifted bit sees a clean rising
    /// edge.
    pub fn new(data: DATA, mut clock: CLOCK, latch: LATCH) -> Self {
        let _ = clock.set_low();

        Self { data, clock, latch }
    }

    /// Returns the pins.
    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    fn shift_bit(&mut self, high: bool) {
        let _ = self.data.set_state(high.into());
        let _ = self.clock.set_high();
        let _ = self.clock.set_low();
    }
}

impl<DATA, CLOCK, LATCH> ShiftRegister for PinShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin,
    CLOCK: OutputPin,
    LATCH: OutputPin,
{
    fn transmit(&mut self, value: u8) {
        let _ = self.latch.set_low();

        for bit in (0..8).rev() {
            self.shift_bit(value & (1 << bit) != 0);
        }

        let _ = self.latch.set_high();
    }
}
