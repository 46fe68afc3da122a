//! State shared between the button interrupt and the main loop.
//!
//! [`SharedContext`] owns the selection index, the debouncer and the
//! cancellation flag. The interrupt side writes selection, debounce time and
//! raises the flag; the main side reads the selection and clears the flag.
//! Selection and debounce time change together inside one critical section;
//! the flag is a plain atomic so polling it between animation steps stays
//! cheap. Only atomic loads and stores are used, which every Cortex-M core
//! supports.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

use crate::debounce::Debouncer;
use crate::time::TimeInstant;

#[derive(Clone, Copy)]
struct Selection<I: TimeInstant> {
    index: usize,
    debouncer: Debouncer<I>,
}

/// Selection, debounce and cancellation state for one button.
///
/// Meant to live in a `static` so both the interrupt handler and the
/// controller can reach it:
///
/// ```ignore
/// static CONTEXT: SharedContext<HalInstant> =
///     SharedContext::new(NUM_ANIMATIONS, HalDuration(BOUNCE_WINDOW_MS));
///
/// #[interrupt]
/// fn EXTI4_15() {
///     CONTEXT.on_trigger(HalTimeSource.now());
/// }
/// ```
pub struct SharedContext<I: TimeInstant> {
    selection: Mutex<Cell<Selection<I>>>,
    cancel: AtomicBool,
    count: usize,
}

impl<I: TimeInstant> SharedContext<I> {
    /// Creates a context starting at selection 0 with no pending cancellation.
    ///
    /// # Panics
    /// Panics if `count` is zero.
    pub const fn new(count: usize, window: I::Duration) -> Self {
        assert!(count > 0, "selection count must be non-zero");

        Self {
            selection: Mutex::new(Cell::new(Selection {
                index: 0,
                debouncer: Debouncer::new(window),
            })),
            cancel: AtomicBool::new(false),
            count,
        }
    }

    /// Handles a raw button trigger at `now`. Call from the interrupt handler.
    ///
    /// An accepted trigger advances the selection (wrapping at `count`) and
    /// raises the cancellation flag. Returns true if the trigger was accepted.
    pub fn on_trigger(&self, now: I) -> bool {
        critical_section::with(|cs| {
            let cell = self.selection.borrow(cs);
            let mut selection = cell.get();

            if !selection.debouncer.accept(now) {
                return false;
            }

            selection.index = (selection.index + 1) % self.count;
            cell.set(selection);
            self.cancel.store(true, Ordering::Release);

            #[cfg(feature = "defmt")]
            defmt::trace!("button accepted, selection -> {}", selection.index);

            true
        })
    }

    /// Returns the current selection, always below `count`.
    pub fn selection(&self) -> usize {
        critical_section::with(|cs| self.selection.borrow(cs).get().index)
    }

    /// Returns the number of selectable entries.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the time of the last accepted trigger.
    pub fn last_accepted(&self) -> Option<I> {
        critical_section::with(|cs| self.selection.borrow(cs).get().debouncer.last_accepted())
    }

    /// Returns true if a cancellation is pending.
    #[inline]
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    /// Clears a pending cancellation, returning whether one was pending.
    ///
    /// Call only from the main context, before reading the selection, so a
    /// trigger accepted in between re-raises the flag for the next run.
    pub fn take_cancel(&self) -> bool {
        let pending = self.cancel.load(Ordering::Acquire);
        if pending {
            self.cancel.store(false, Ordering::Release);
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeDuration;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Ms(u64);

    impl TimeDuration for Ms {
        const ZERO: Self = Ms(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            Ms(millis)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct At(u64);

    impl TimeInstant for At {
        type Duration = Ms;

        fn duration_since(&self, earlier: Self) -> Ms {
            Ms(self.0.saturating_sub(earlier.0))
        }
    }

    static STATIC_CONTEXT: SharedContext<At> = SharedContext::new(3, Ms(200));

    #[test]
    fn starts_at_zero_without_cancellation() {
        let ctx = SharedContext::<At>::new(8, Ms(200));
        assert_eq!(ctx.selection(), 0);
        assert!(!ctx.is_cancel_requested());
        assert_eq!(ctx.last_accepted(), None);
    }

    #[test]
    fn accepted_trigger_advances_and_raises_cancel() {
        let ctx = SharedContext::<At>::new(8, Ms(200));

        assert!(ctx.on_trigger(At(0)));
        assert_eq!(ctx.selection(), 1);
        assert!(ctx.is_cancel_requested());

        assert!(!ctx.on_trigger(At(50)));
        assert_eq!(ctx.selection(), 1);

        assert!(ctx.on_trigger(At(300)));
        assert_eq!(ctx.selection(), 2);
        assert_eq!(ctx.last_accepted(), Some(At(300)));
    }

    #[test]
    fn rejected_trigger_leaves_cancel_clear() {
        let ctx = SharedContext::<At>::new(8, Ms(200));
        ctx.on_trigger(At(0));
        assert!(ctx.take_cancel());

        assert!(!ctx.on_trigger(At(100)));
        assert!(!ctx.is_cancel_requested());
    }

    #[test]
    fn take_cancel_consumes_flag() {
        let ctx = SharedContext::<At>::new(8, Ms(200));
        assert!(!ctx.take_cancel());

        ctx.on_trigger(At(0));
        assert!(ctx.take_cancel());
        assert!(!ctx.take_cancel());
        assert!(!ctx.is_cancel_requested());
    }

    #[test]
    fn selection_wraps_at_count() {
        assert_eq!(STATIC_CONTEXT.count(), 3);
        for (i, expected) in [1, 2, 0, 1].into_iter().enumerate() {
            assert!(STATIC_CONTEXT.on_trigger(At(1_000 * (i as u64 + 1))));
            assert_eq!(STATIC_CONTEXT.selection(), expected);
        }
    }
}
