//! Command-based control for the clock.

use crate::alarm::AlarmConfig;
use crate::types::Button;

/// Actions for controlling a [`NixieClock`](crate::NixieClock), e.g. when
/// button and remote inputs arrive through a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockAction {
    /// A debounced button click.
    Press(Button),
    /// Start the animation.
    EnterAnimation,
    /// Stop the animation and show the time.
    ExitAnimation,
    /// Return to clock mode from temperature or alarm mode.
    ShowClock,
    /// Replace the alarm configuration.
    SetAlarm(AlarmConfig),
    /// Switch off a sounding buzzer.
    Silence,
}

impl From<Button> for ClockAction {
    fn from(button: Button) -> Self {
        ClockAction::Press(button)
    }
}
