//! Animation execution against the output buffer.
//!
//! Provides [`AnimationRunner`], the [`StepSink`] that drives real hardware,
//! and [`StepRecorder`], a fixed-capacity sink for inspecting a catalog entry
//! without hardware.

use heapless::Vec;

use crate::buffer::OutputBuffer;
use crate::catalog::{Animation, StepSink};
use crate::context::SharedContext;
use crate::shift_register::ShiftRegister;
use crate::time::{Hold, TimeDuration, TimeInstant};
use crate::types::{Cancelled, Step, Timing};

/// Applies animation steps to an [`OutputBuffer`].
///
/// The cancellation flag is checked before every primitive step. Once it is
/// observed the runner returns `Err(Cancelled)` without touching the buffer or
/// holding, and the flag stays raised for the controller to consume.
pub struct AnimationRunner<'a, I, R, H>
where
    I: TimeInstant,
    R: ShiftRegister,
    H: Hold<I::Duration>,
{
    buffer: &'a mut OutputBuffer<R>,
    hold: &'a mut H,
    context: &'a SharedContext<I>,
}

impl<'a, I, R, H> AnimationRunner<'a, I, R, H>
where
    I: TimeInstant,
    R: ShiftRegister,
    H: Hold<I::Duration>,
{
    /// Creates a runner borrowing the buffer, the hold primitive and the shared context.
    pub fn new(
        buffer: &'a mut OutputBuffer<R>,
        hold: &'a mut H,
        context: &'a SharedContext<I>,
    ) -> Self {
        Self {
            buffer,
            hold,
            context,
        }
    }

    /// Runs `animation` to completion or until cancelled.
    ///
    /// # Errors
    /// Returns `Cancelled` if the cancellation flag was raised before the last step.
    pub fn run(
        &mut self,
        animation: Animation,
        timing: &Timing<I::Duration>,
    ) -> Result<(), Cancelled> {
        animation.run(timing, self)
    }
}

impl<I, R, H> StepSink<I::Duration> for AnimationRunner<'_, I, R, H>
where
    I: TimeInstant,
    R: ShiftRegister,
    H: Hold<I::Duration>,
{
    fn apply(&mut self, step: Step<I::Duration>) -> Result<(), Cancelled> {
        if self.context.is_cancel_requested() {
            return Err(Cancelled);
        }

        match step {
            Step::Set { indicator, state } => self.buffer.set_led(indicator, state),
            Step::Hold(duration) => self.hold.hold(duration),
        }
        Ok(())
    }
}

/// Records up to `N` steps of an animation.
///
/// Steps past the capacity are dropped and [`StepRecorder::is_truncated`]
/// reports it; the animation itself still runs to completion.
#[derive(Debug, Clone)]
pub struct StepRecorder<D: TimeDuration, const N: usize> {
    steps: Vec<Step<D>, N>,
    truncated: bool,
}

impl<D: TimeDuration, const N: usize> StepRecorder<D, N> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            truncated: false,
        }
    }

    /// Records every step of one uncancelled run of `animation`.
    pub fn record(animation: Animation, timing: &Timing<D>) -> Self {
        let mut recorder = Self::new();
        let _ = animation.run(timing, &mut recorder);
        recorder
    }

    /// Returns the recorded steps.
    pub fn steps(&self) -> &[Step<D>] {
        &self.steps
    }

    /// Returns true if steps were dropped for lack of capacity.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<D: TimeDuration, const N: usize> Default for StepRecorder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: TimeDuration, const N: usize> StepSink<D> for StepRecorder<D, N> {
    fn apply(&mut self, step: Step<D>) -> Result<(), Cancelled> {
        if self.steps.push(step).is_err() {
            self.truncated = true;
        }
        Ok(())
    }
}
