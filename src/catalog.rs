//! The fixed animation catalog.
//!
//! Each [`Animation`] is a deterministic, finite sequence of primitive
//! [`Step`]s. An animation does not touch hardware itself: it emits its steps
//! into a [`StepSink`], and the sink decides what a step means (drive the
//! buffer, record it, count it). A sink that returns [`Cancelled`] stops the
//! animation at that step, and the error propagates through every nested
//! routine with `?`.

use crate::time::TimeDuration;
use crate::types::{Cancelled, Indicator, LedState, Step, Timing};

/// Number of catalog entries, including the composite.
pub const NUM_ANIMATIONS: usize = 8;

/// Animations in selection order. The composite entry comes last.
pub const CATALOG: [Animation; NUM_ANIMATIONS] = [
    Animation::SweepForward,
    Animation::SweepBackward,
    Animation::Bounce,
    Animation::AccumulateRelease,
    Animation::BlinkInPlace,
    Animation::BlinkAll,
    Animation::AccumulateReleaseBackward,
    Animation::Composite,
];

const _: () = assert!(matches!(CATALOG[NUM_ANIMATIONS - 1], Animation::Composite));

/// Returns the catalog as a slice.
#[inline]
pub fn catalog() -> &'static [Animation] {
    &CATALOG
}

/// Receives the primitive steps of a running animation.
pub trait StepSink<D: TimeDuration> {
    /// Applies one step.
    ///
    /// Returning `Err(Cancelled)` aborts the animation; no further steps are
    /// emitted.
    fn apply(&mut self, step: Step<D>) -> Result<(), Cancelled>;
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// Each indicator 0 to 7 in turn: on, hold, off.
    SweepForward,

    /// Each indicator 7 to 0 in turn: on, hold, off.
    SweepBackward,

    /// A forward sweep followed by a backward sweep.
    Bounce,

    /// Indicators 0 to 7 turned on with a hold after each, then turned off 0
    /// to 7 with a hold after each.
    AccumulateRelease,

    /// Each indicator in turn blinks on/off `blink_repeats` times.
    BlinkInPlace,

    /// All indicators on, hold, all off, hold, `blink_repeats` times.
    BlinkAll,

    /// [`Animation::AccumulateRelease`] walking from indicator 7 down to 0.
    AccumulateReleaseBackward,

    /// Every other catalog entry once, in catalog order.
    Composite,
}

impl Animation {
    /// Short human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Animation::SweepForward => "sweep forward",
            Animation::SweepBackward => "sweep backward",
            Animation::Bounce => "bounce",
            Animation::AccumulateRelease => "accumulate/release",
            Animation::BlinkInPlace => "blink in place",
            Animation::BlinkAll => "blink all",
            Animation::AccumulateReleaseBackward => "accumulate/release backward",
            Animation::Composite => "all together",
        }
    }

    /// Returns true for the entry that replays the rest of the catalog.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Animation::Composite)
    }

    /// Emits this animation's steps into `sink`.
    ///
    /// # Errors
    /// Returns `Cancelled` as soon as the sink rejects a step.
    pub fn run<D, S>(&self, timing: &Timing<D>, sink: &mut S) -> Result<(), Cancelled>
    where
        D: TimeDuration,
        S: StepSink<D> + ?Sized,
    {
        let forward = Indicator::ALL.into_iter();
        let backward = Indicator::ALL.into_iter().rev();

        match self {
            Animation::SweepForward => sweep(forward, timing, sink),
            Animation::SweepBackward => sweep(backward, timing, sink),
            Animation::Bounce => {
                sweep(forward, timing, sink)?;
                sweep(backward, timing, sink)
            }
            Animation::AccumulateRelease => accumulate_release(forward, timing, sink),
            Animation::BlinkInPlace => {
                for indicator in forward {
                    for _ in 0..timing.blink_repeats {
                        sink.apply(Step::set(indicator, LedState::On))?;
                        sink.apply(Step::Hold(timing.hold))?;
                        sink.apply(Step::set(indicator, LedState::Off))?;
                        sink.apply(Step::Hold(timing.hold))?;
                    }
                }
                Ok(())
            }
            Animation::BlinkAll => {
                for _ in 0..timing.blink_repeats {
                    set_all(LedState::On, sink)?;
                    sink.apply(Step::Hold(timing.hold))?;
                    set_all(LedState::Off, sink)?;
                    sink.apply(Step::Hold(timing.hold))?;
                }
                Ok(())
            }
            Animation::AccumulateReleaseBackward => accumulate_release(backward, timing, sink),
            Animation::Composite => {
                for entry in CATALOG.iter().filter(|entry| !entry.is_composite()) {
                    entry.run(timing, sink)?;
                }
                Ok(())
            }
        }
    }

    /// Number of primitive steps one uncancelled run emits.
    pub fn step_count<D: TimeDuration>(&self, timing: &Timing<D>) -> usize {
        let mut counter = StepCounter(0);
        let _ = self.run(timing, &mut counter);
        counter.0
    }
}

struct StepCounter(usize);

impl<D: TimeDuration> StepSink<D> for StepCounter {
    fn apply(&mut self, _step: Step<D>) -> Result<(), Cancelled> {
        self.0 += 1;
        Ok(())
    }
}

fn sweep<D, S>(
    order: impl Iterator<Item = Indicator>,
    timing: &Timing<D>,
    sink: &mut S,
) -> Result<(), Cancelled>
where
    D: TimeDuration,
    S: StepSink<D> + ?Sized,
{
    for indicator in order {
        sink.apply(Step::set(indicator, LedState::On))?;
        sink.apply(Step::Hold(timing.hold))?;
        sink.apply(Step::set(indicator, LedState::Off))?;
    }
    Ok(())
}

fn accumulate_release<D, S>(
    order: impl Iterator<Item = Indicator> + Clone,
    timing: &Timing<D>,
    sink: &mut S,
) -> Result<(), Cancelled>
where
    D: TimeDuration,
    S: StepSink<D> + ?Sized,
{
    for state in [LedState::On, LedState::Off] {
        for indicator in order.clone() {
            sink.apply(Step::set(indicator, state))?;
            sink.apply(Step::Hold(timing.hold))?;
        }
    }
    Ok(())
}

fn set_all<D, S>(state: LedState, sink: &mut S) -> Result<(), Cancelled>
where
    D: TimeDuration,
    S: StepSink<D> + ?Sized,
{
    for indicator in Indicator::ALL {
        sink.apply(Step::set(indicator, state))?;
    }
    Ok(())
}
