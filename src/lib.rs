#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`NixieClock`**: Owns the peripherals and runs one non-blocking pass per `service()` call
//! - **`ClockState`**: Display mode, alarm and hour format, changed by `Button` clicks
//! - **`DisplayMode`**: `Clock`, `Temperature`, `Alarm` or `Animation`
//! - **`AlarmConfig`**: The single alarm, with wraparound hour/minute editing
//! - **`AlarmMonitor`**: Sounds the `Buzzer` for a fixed time when the alarm matches
//! - **`Animation`**: Frames shown in a loop at a fixed interval
//! - **`NixieDisplay`**, **`WallClock`**, **`Thermometer`**, **`Buzzer`**: Traits to implement for your board
//! - **`TimeSource`**: Trait to implement for your monotonic timer
//! - **`ClockAction`**: Commands that can be sent to control the clock
//!
//! Every pass rewrites all four tubes, so the display never keeps digits from a
//! previous mode and a dropped write is repaired on the next pass.

#[macro_use]
mod fmt;

pub mod alarm;
pub mod animation;
pub mod clock;
pub mod command;
pub mod config;
pub mod display;
pub mod state;
pub mod time;
pub mod types;

pub use alarm::{AlarmConfig, AlarmMonitor, AlarmPolicy, AlarmStatus, Buzzer};
pub use animation::{Animation, AnimationBuilder, AnimationDriver, PLACEHOLDER_FRAMES};
pub use clock::{ClockError, NixieClock, Peripherals, Thermometer};
pub use command::ClockAction;
pub use config::ClockConfig;
pub use display::{
    BLANK_FRAME, Frame, Glyph, NixieDisplay, TUBE_COUNT, render_alarm, render_temperature,
    render_time, split_digits,
};
pub use state::ClockState;
pub use time::{TimeDuration, TimeInstant, TimeSource, WallClock, WallTime};
pub use types::{AnimationError, Button, DisplayMode, HourFormat, RangeError};
