//! Top-level control loop.
//!
//! Provides [`Controller`], which repeatedly clears the indicators and runs
//! the selected catalog entry. A button press cancels the running entry; the
//! controller then starts over with whatever entry the press selected.

use crate::buffer::OutputBuffer;
use crate::catalog::{Animation, catalog};
use crate::context::SharedContext;
use crate::runner::AnimationRunner;
use crate::shift_register::ShiftRegister;
use crate::time::{Hold, TimeInstant};
use crate::types::Timing;

/// How one controller iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// The animation ran to its last step.
    Completed(Animation),

    /// A button press cut the animation short.
    Cancelled(Animation),
}

impl RunOutcome {
    /// Returns the animation that was dispatched.
    pub fn animation(&self) -> Animation {
        match self {
            RunOutcome::Completed(animation) | RunOutcome::Cancelled(animation) => *animation,
        }
    }

    /// Returns true if the run was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunOutcome::Cancelled(_))
    }
}

/// Drives the animation catalog from the main context.
///
/// # Type Parameters
/// * `'c` - Lifetime of the shared context reference
/// * `I` - Time instant type used by the button interrupt
/// * `R` - Shift register implementation type
/// * `H` - Hold implementation type
pub struct Controller<'c, I, R, H>
where
    I: TimeInstant,
    R: ShiftRegister,
    H: Hold<I::Duration>,
{
    buffer: OutputBuffer<R>,
    hold: H,
    context: &'c SharedContext<I>,
    timing: Timing<I::Duration>,
}

impl<'c, I, R, H> Controller<'c, I, R, H>
where
    I: TimeInstant,
    R: ShiftRegister,
    H: Hold<I::Duration>,
{
    /// Creates a controller. Nothing is transmitted until the first iteration.
    ///
    /// # Panics
    /// Panics if the context was not created for the full catalog.
    pub fn new(
        buffer: OutputBuffer<R>,
        hold: H,
        context: &'c SharedContext<I>,
        timing: Timing<I::Duration>,
    ) -> Self {
        assert_eq!(
            context.count(),
            catalog().len(),
            "context selection count must match the catalog"
        );

        Self {
            buffer,
            hold,
            context,
            timing,
        }
    }

    /// Runs one iteration: consume any pending cancellation, turn every
    /// indicator off, then run the selected entry until it completes or is
    /// cancelled.
    ///
    /// The cancellation is consumed before the selection is read. A press
    /// landing between the two re-raises the flag, so the dispatched entry
    /// stops at its first step and the next iteration picks up the new
    /// selection.
    pub fn run_once(&mut self) -> RunOutcome {
        self.context.take_cancel();
        self.buffer.clear_all();

        let animation = catalog()[self.context.selection()];

        #[cfg(feature = "defmt")]
        defmt::debug!("dispatching {}", animation.name());

        let mut runner = AnimationRunner::new(&mut self.buffer, &mut self.hold, self.context);
        match runner.run(animation, &self.timing) {
            Ok(()) => RunOutcome::Completed(animation),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::info!("{} cancelled", animation.name());

                RunOutcome::Cancelled(animation)
            }
        }
    }

    /// Runs the control loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Returns the output buffer.
    pub fn buffer(&self) -> &OutputBuffer<R> {
        &self.buffer
    }

    /// Returns the timing applied to every animation.
    pub fn timing(&self) -> &Timing<I::Duration> {
        &self.timing
    }

    /// Returns the output buffer and hold primitive.
    pub fn release(self) -> (OutputBuffer<R>, H) {
        (self.buffer, self.hold)
    }
}
