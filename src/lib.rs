#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`OutputBuffer`**: One bit per indicator, written through to a `ShiftRegister` on every change
//! - **`ShiftRegister`**: Trait to implement for your serial-to-parallel output hardware
//! - **`PinShiftRegister`**: Bit-banged `ShiftRegister` over three `embedded-hal` output pins
//! - **`SharedContext`**: Selection index, debounce timestamp and cancellation flag shared with the button interrupt
//! - **`Debouncer`**: Decides which raw button triggers are real
//! - **`Animation`**: One entry of the fixed animation `CATALOG`
//! - **`AnimationRunner`**: Applies an animation's steps to the buffer, stopping at the first cancellation check that fires
//! - **`Controller`**: The top-level loop: clear, dispatch, restart
//! - **`Hold`**: Trait to implement for your blocking delay
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Cancellation is cooperative. The interrupt handler only calls
//! [`SharedContext::on_trigger`]; the runner polls the flag before every
//! primitive step and unwinds with [`Cancelled`] through ordinary `?` returns.

pub mod buffer;
pub mod catalog;
pub mod context;
pub mod controller;
pub mod debounce;
pub mod runner;
pub mod shift_register;
pub mod time;
pub mod types;

pub use buffer::OutputBuffer;
pub use catalog::{Animation, CATALOG, NUM_ANIMATIONS, StepSink, catalog};
pub use context::SharedContext;
pub use controller::{Controller, RunOutcome};
pub use debounce::Debouncer;
pub use runner::{AnimationRunner, StepRecorder};
pub use shift_register::{PinShiftRegister, ShiftRegister};
pub use time::{DelayHold, Hold, TimeDuration, TimeInstant, TimeSource};
pub use types::{Cancelled, Indicator, IndicatorError, LedState, Step, Timing};

/// Number of indicators driven by one 8-bit shift register.
pub const LED_COUNT: usize = 8;

/// Minimum spacing between two accepted button triggers.
pub const BOUNCE_WINDOW_MS: u64 = 200;

/// Hold used between animation steps.
pub const STEP_HOLD_MS: u64 = 50;

/// How many on/off cycles the blinking animations perform.
pub const BLINK_REPEATS: u8 = 10;
