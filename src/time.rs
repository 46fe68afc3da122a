//! Time abstraction traits for platform-agnostic timing.

use embedded_hal::delay::DelayNs;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter should use wrapping
    /// subtraction so the debounce window keeps working across a wrap.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Blocking hold between animation steps.
///
/// The hold runs in the main context and may be preempted by the button
/// interrupt at any point. It does not need to observe cancellation itself.
pub trait Hold<D: TimeDuration> {
    /// Blocks for `duration`.
    fn hold(&mut self, duration: D);
}

/// [`Hold`] implementation for any `embedded-hal` delay provider.
pub struct DelayHold<T: DelayNs> {
    delay: T,
}

impl<T: DelayNs> DelayHold<T> {
    /// Wraps a delay provider.
    pub fn new(delay: T) -> Self {
        Self { delay }
    }

    /// Returns the wrapped delay provider.
    pub fn release(self) -> T {
        self.delay
    }
}

impl<T: DelayNs, D: TimeDuration> Hold<D> for DelayHold<T> {
    fn hold(&mut self, duration: D) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(millis);
    }
}
