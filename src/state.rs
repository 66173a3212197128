//! The display-mode state machine.
//!
//! ```text
//!            A                 B
//!  Temperature ◄──── Clock ────► Alarm
//!       │      ────►   ▲ │        A: hour + 1
//!       └─────A────────┘ │ C      B: toggle alarm
//!                        ▼        C: minute + 1
//!                   12h / 24h
//!
//!  Animation: entered and left only through enter/exit operations;
//!             all buttons are ignored.
//! ```

use crate::alarm::AlarmConfig;
use crate::types::{Button, DisplayMode, HourFormat};

/// Everything the buttons can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    mode: DisplayMode,
    alarm: AlarmConfig,
    hour_format: HourFormat,
}

impl ClockState {
    /// Creates a state in clock mode.
    pub fn new(alarm: AlarmConfig, hour_format: HourFormat) -> Self {
        Self {
            mode: DisplayMode::Clock,
            alarm,
            hour_format,
        }
    }

    /// Applies one button click according to the current mode.
    pub fn press(&mut self, button: Button) {
        let before = self.mode;

        match (self.mode, button) {
            (DisplayMode::Clock, Button::A) => self.mode = DisplayMode::Temperature,
            (DisplayMode::Clock, Button::B) => self.mode = DisplayMode::Alarm,
            (DisplayMode::Clock, Button::C) => self.hour_format = self.hour_format.toggled(),

            (DisplayMode::Temperature, Button::A) => self.mode = DisplayMode::Clock,
            (DisplayMode::Temperature, Button::B | Button::C) => {}

            (DisplayMode::Alarm, Button::A) => self.alarm.increment_hour(),
            (DisplayMode::Alarm, Button::B) => self.alarm.toggle_enabled(),
            (DisplayMode::Alarm, Button::C) => self.alarm.increment_minute(),

            // Reserved
            (DisplayMode::Animation, _) => {}
        }

        if self.mode != before {
            debug!("mode {} -> {}", before, self.mode);
        }
    }

    /// Switches directly to `mode`.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            debug!("mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Replaces the alarm configuration.
    pub fn set_alarm(&mut self, alarm: AlarmConfig) {
        self.alarm = alarm;
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the alarm configuration.
    pub fn alarm(&self) -> &AlarmConfig {
        &self.alarm
    }

    /// Returns the clock-mode hour format.
    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(mode: DisplayMode) -> ClockState {
        let mut state = ClockState::default();
        state.set_mode(mode);
        state
    }

    #[test]
    fn clock_a_goes_to_temperature_and_leaves_alarm_alone() {
        let mut state = ClockState::default();
        let alarm_before = *state.alarm();

        state.press(Button::A);

        assert_eq!(state.mode(), DisplayMode::Temperature);
        assert_eq!(*state.alarm(), alarm_before);
    }

    #[test]
    fn clock_b_goes_to_alarm() {
        let mut state = ClockState::default();
        state.press(Button::B);
        assert_eq!(state.mode(), DisplayMode::Alarm);
    }

    #[test]
    fn clock_c_toggles_hour_format_only() {
        let mut state = ClockState::default();
        state.press(Button::C);
        assert_eq!(state.mode(), DisplayMode::Clock);
        assert_eq!(state.hour_format(), HourFormat::Twelve);
        state.press(Button::C);
        assert_eq!(state.hour_format(), HourFormat::TwentyFour);
    }

    #[test]
    fn temperature_a_returns_to_clock_and_other_buttons_are_ignored() {
        let mut state = state_in(DisplayMode::Temperature);
        let before = state;

        state.press(Button::B);
        state.press(Button::C);
        assert_eq!(state, before);

        state.press(Button::A);
        assert_eq!(state.mode(), DisplayMode::Clock);
    }

    #[test]
    fn alarm_buttons_edit_alarm_without_leaving_mode() {
        let mut state = ClockState::new(AlarmConfig::new(23, 59).unwrap(), HourFormat::TwentyFour);
        state.set_mode(DisplayMode::Alarm);

        state.press(Button::B);
        assert!(state.alarm().is_enabled());
        assert_eq!(state.mode(), DisplayMode::Alarm);

        state.press(Button::A);
        state.press(Button::C);
        assert_eq!((state.alarm().hour(), state.alarm().minute()), (0, 0));
        assert_eq!(state.mode(), DisplayMode::Alarm);
    }

    #[test]
    fn animation_ignores_every_button() {
        let mut state = state_in(DisplayMode::Animation);
        let before = state;

        state.press(Button::A);
        state.press(Button::B);
        state.press(Button::C);

        assert_eq!(state, before);
    }
}
