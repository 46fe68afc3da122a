//! Core types for indicator control and animation steps.

use crate::time::TimeDuration;
use crate::{BLINK_REPEATS, LED_COUNT, STEP_HOLD_MS};

/// On/off state of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Indicator lit.
    On,

    /// Indicator dark.
    Off,
}

impl LedState {
    /// Returns the opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LedState::On => LedState::Off,
            LedState::Off => LedState::On,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// A validated indicator position.
///
/// Indicator `i` drives shift-register output `i`, which is bit `i` of the
/// output buffer. Construction rejects indices outside `0..LED_COUNT`, so
/// every `Indicator` is a valid bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator(u8);

impl Indicator {
    /// All indicators in ascending order.
    pub const ALL: [Indicator; LED_COUNT] = [
        Indicator(0),
        Indicator(1),
        Indicator(2),
        Indicator(3),
        Indicator(4),
        Indicator(5),
        Indicator(6),
        Indicator(7),
    ];

    /// Creates an indicator from a raw index.
    ///
    /// # Errors
    /// * `OutOfRange` - `index` is not below `LED_COUNT`
    pub const fn new(index: usize) -> Result<Self, IndicatorError> {
        if index < LED_COUNT {
            Ok(Indicator(index as u8))
        } else {
            Err(IndicatorError::OutOfRange { index })
        }
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the single-bit mask for this indicator.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<usize> for Indicator {
    type Error = IndicatorError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Indicator::new(index)
    }
}

impl From<Indicator> for usize {
    fn from(indicator: Indicator) -> Self {
        indicator.index()
    }
}

/// Indicator construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Index is not a valid indicator position.
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
}

impl core::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndicatorError::OutOfRange { index } => {
                write!(
                    f,
                    "indicator index {} out of range (expected 0..{})",
                    index, LED_COUNT
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndicatorError {}

/// The running animation was cancelled by an accepted button press.
///
/// Returned from every step once the cancellation flag is observed, so an
/// animation unwinds with `?` back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cancelled;

impl core::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "animation cancelled")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Cancelled {}

/// A primitive animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<D: TimeDuration> {
    /// Set one indicator and transmit the buffer.
    Set {
        /// Target indicator.
        indicator: Indicator,
        /// New state.
        state: LedState,
    },

    /// Hold the current output.
    Hold(D),
}

impl<D: TimeDuration> Step<D> {
    /// Creates a set step.
    #[inline]
    pub fn set(indicator: Indicator, state: LedState) -> Self {
        Step::Set { indicator, state }
    }
}

/// Timing parameters shared by every catalog animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing<D: TimeDuration> {
    /// Hold between steps.
    pub hold: D,

    /// On/off cycles performed by the blinking animations.
    pub blink_repeats: u8,
}

impl<D: TimeDuration> Timing<D> {
    /// Creates timing parameters.
    pub fn new(hold: D, blink_repeats: u8) -> Self {
        Self {
            hold,
            blink_repeats,
        }
    }

    /// 50 ms holds, 10 blink cycles.
    pub fn standard() -> Self {
        Self::new(D::from_millis(STEP_HOLD_MS), BLINK_REPEATS)
    }
}

impl<D: TimeDuration> Default for Timing<D> {
    fn default() -> Self {
        Self::standard()
    }
}
