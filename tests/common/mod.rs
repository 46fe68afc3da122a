//! Shared test infrastructure for shift-led-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use shift_led_animator::{
    Hold, NUM_ANIMATIONS, ShiftRegister, SharedContext, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

pub type TestContext = SharedContext<TestInstant>;

/// Context sized for the full catalog with the 200ms bounce window
pub fn new_context() -> TestContext {
    SharedContext::new(NUM_ANIMATIONS, TestDuration(200))
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Shift Register
// ============================================================================

/// Mock shift register that records every transmitted byte
///
/// Optionally presses the button right after the n-th transmission (1-based),
/// standing in for an interrupt that lands between two steps.
pub struct MockShiftRegister<'c> {
    history: heapless::Vec<u8, 4096>,
    press_after: Option<(usize, &'c TestContext, TestInstant)>,
}

impl<'c> MockShiftRegister<'c> {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
            press_after: None,
        }
    }

    pub fn pressing_after(transmits: usize, context: &'c TestContext, at: TestInstant) -> Self {
        Self {
            history: heapless::Vec::new(),
            press_after: Some((transmits, context, at)),
        }
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn last(&self) -> Option<u8> {
        self.history.last().copied()
    }
}

impl ShiftRegister for MockShiftRegister<'_> {
    fn transmit(&mut self, value: u8) {
        self.history.push(value).expect("transmit history overflow");

        if let Some((n, context, at)) = self.press_after {
            if self.history.len() == n {
                context.on_trigger(at);
            }
        }
    }
}

// ============================================================================
// Mock Hold
// ============================================================================

/// Mock hold that advances the mock clock instead of blocking
///
/// Optionally presses the button while inside the n-th hold (1-based).
pub struct MockHold<'t, 'c> {
    time_source: &'t MockTimeSource,
    count: usize,
    press_during: Option<(usize, &'c TestContext)>,
}

impl<'t, 'c> MockHold<'t, 'c> {
    pub fn new(time_source: &'t MockTimeSource) -> Self {
        Self {
            time_source,
            count: 0,
            press_during: None,
        }
    }

    pub fn pressing_during(time_source: &'t MockTimeSource, hold: usize, context: &'c TestContext) -> Self {
        Self {
            time_source,
            count: 0,
            press_during: Some((hold, context)),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Hold<TestDuration> for MockHold<'_, '_> {
    fn hold(&mut self, duration: TestDuration) {
        self.count += 1;

        if let Some((n, context)) = self.press_during {
            if self.count == n {
                context.on_trigger(self.time_source.now());
            }
        }

        self.time_source.advance(duration);
    }
}
