//! The clock controller: state machine, renderer, alarm and animation wired
//! to the peripherals.
//!
//! Provides [`NixieClock`], which owns the peripherals and runs one
//! non-blocking pass per [`service`](NixieClock::service) call, and the
//! [`Thermometer`] trait for temperature sensors.

use crate::alarm::{AlarmConfig, AlarmMonitor, Buzzer};
use crate::animation::AnimationDriver;
use crate::command::ClockAction;
use crate::config::ClockConfig;
use crate::display::{
    BLANK_FRAME, Frame, NixieDisplay, render_alarm, render_temperature, render_time,
};
use crate::state::ClockState;
use crate::time::{TimeInstant, TimeSource, WallClock, WallTime, min_duration};
use crate::types::{Button, DisplayMode, HourFormat};

/// Trait for abstracting the temperature sensor.
pub trait Thermometer {
    /// Reads the temperature in degrees Celsius.
    ///
    /// Return `None` if the sensor is missing or the conversion failed.
    /// Implementations may also pass through the sensor's own error values
    /// (e.g. -127 for a disconnected DS18B20); those render blank.
    fn read_celsius(&mut self) -> Option<f32>;
}

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Operation called from a mode that does not allow it.
    InvalidMode {
        /// Human-readable description of the allowed mode(s)
        expected: &'static str,
        /// The actual current mode
        actual: DisplayMode,
    },
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::InvalidMode { expected, actual } => {
                write!(
                    f,
                    "invalid mode: expected {}, but clock is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// The hardware a clock drives.
#[derive(Debug)]
pub struct Peripherals<D, B, R, S> {
    /// Tube driver.
    pub display: D,
    /// Alarm output.
    pub buzzer: B,
    /// Real-time clock.
    pub wall_clock: R,
    /// Temperature sensor.
    pub thermometer: S,
}

impl<D, B, R, S> Peripherals<D, B, R, S> {
    /// Bundles the peripherals.
    pub fn new(display: D, buzzer: B, wall_clock: R, thermometer: S) -> Self {
        Self {
            display,
            buzzer,
            wall_clock,
            thermometer,
        }
    }
}

/// A four-tube Nixie clock.
///
/// Owns the peripherals and all mutable state. Button clicks go in through
/// [`press`](Self::press) (or [`handle_action`](Self::handle_action)); each
/// [`service`](Self::service) call reads the clock, rewrites all four tubes,
/// checks the alarm and returns how long the caller may sleep.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Monotonic time instant type
/// * `T` - Time source implementation type
/// * `D` - Tube display implementation type
/// * `B` - Buzzer implementation type
/// * `R` - Wall clock implementation type
/// * `S` - Thermometer implementation type
/// * `N` - Maximum number of animation frames
pub struct NixieClock<'t, I, T, D, B, R, S, const N: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    D: NixieDisplay,
    B: Buzzer,
    R: WallClock,
    S: Thermometer,
{
    peripherals: Peripherals<D, B, R, S>,
    time_source: &'t T,
    state: ClockState,
    animation: AnimationDriver<I, N>,
    alarm_monitor: AlarmMonitor<I>,
    refresh_interval: I::Duration,
    last_time: Option<WallTime>,
    displayed: Frame,
}

impl<'t, I, T, D, B, R, S, const N: usize> NixieClock<'t, I, T, D, B, R, S, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    D: NixieDisplay,
    B: Buzzer,
    R: WallClock,
    S: Thermometer,
{
    /// Creates a clock in clock mode with the tubes cleared and the buzzer off.
    pub fn new(
        mut peripherals: Peripherals<D, B, R, S>,
        time_source: &'t T,
        config: ClockConfig<I::Duration, N>,
    ) -> Self {
        peripherals.display.clear();
        peripherals.buzzer.set_active(false);

        Self {
            peripherals,
            time_source,
            state: ClockState::new(config.alarm, config.hour_format),
            animation: AnimationDriver::new(config.animation),
            alarm_monitor: AlarmMonitor::new(config.alarm_policy, config.alarm_duration),
            refresh_interval: config.refresh_interval,
            last_time: None,
            displayed: BLANK_FRAME,
        }
    }

    /// Handles a clock action by dispatching to the appropriate method.
    pub fn handle_action(&mut self, action: ClockAction) -> Result<(), ClockError> {
        match action {
            ClockAction::Press(button) => {
                self.press(button);
                Ok(())
            }
            ClockAction::EnterAnimation => self.enter_animation(),
            ClockAction::ExitAnimation => self.exit_animation(),
            ClockAction::ShowClock => self.show_clock(),
            ClockAction::SetAlarm(alarm) => {
                self.set_alarm(alarm);
                Ok(())
            }
            ClockAction::Silence => {
                self.silence();
                Ok(())
            }
        }
    }

    /// Applies a button click. Takes effect on the tubes at the next
    /// [`service`](Self::service).
    pub fn press(&mut self, button: Button) {
        self.state.press(button);
    }

    /// Starts the animation from its first frame and shows that frame.
    ///
    /// Must be called outside `Animation` mode.
    pub fn enter_animation(&mut self) -> Result<(), ClockError> {
        if self.state.mode() == DisplayMode::Animation {
            return Err(ClockError::InvalidMode {
                expected: "Clock, Temperature, or Alarm",
                actual: self.state.mode(),
            });
        }

        let now = self.time_source.now();
        self.state.set_mode(DisplayMode::Animation);
        self.animation.start(now);
        if let Some(frame) = self.animation.poll(now) {
            self.write_frame(frame);
        }
        Ok(())
    }

    /// Stops the animation, clears the tubes and shows the current time.
    ///
    /// Must be called from `Animation` mode.
    pub fn exit_animation(&mut self) -> Result<(), ClockError> {
        if self.state.mode() != DisplayMode::Animation {
            return Err(ClockError::InvalidMode {
                expected: "Animation",
                actual: self.state.mode(),
            });
        }

        self.animation.stop();
        self.peripherals.display.clear();
        self.displayed = BLANK_FRAME;
        self.state.set_mode(DisplayMode::Clock);

        self.read_wall_time();
        let frame = self.clock_frame();
        self.write_frame(frame);
        Ok(())
    }

    /// Returns to clock mode from temperature or alarm mode.
    ///
    /// Must be called outside `Animation` mode; use
    /// [`exit_animation`](Self::exit_animation) there.
    pub fn show_clock(&mut self) -> Result<(), ClockError> {
        if self.state.mode() == DisplayMode::Animation {
            return Err(ClockError::InvalidMode {
                expected: "Clock, Temperature, or Alarm",
                actual: self.state.mode(),
            });
        }

        self.state.set_mode(DisplayMode::Clock);
        Ok(())
    }

    /// Replaces the alarm configuration.
    pub fn set_alarm(&mut self, alarm: AlarmConfig) {
        self.state.set_alarm(alarm);
    }

    /// Switches off a sounding buzzer right away.
    pub fn silence(&mut self) {
        self.alarm_monitor.silence(&mut self.peripherals.buzzer);
    }

    /// Runs one pass: read the time, rewrite all tubes, check the alarm.
    ///
    /// Returns the time until the next pass is needed: the next animation
    /// frame, the end of the alarm sound, or the refresh interval, whichever
    /// comes first.
    pub fn service(&mut self) -> I::Duration {
        let now = self.time_source.now();
        let time = self.read_wall_time();

        let frame = match self.state.mode() {
            DisplayMode::Clock => self.clock_frame(),
            DisplayMode::Temperature => {
                let reading = self.peripherals.thermometer.read_celsius();
                if reading.is_none() {
                    warn!("thermometer unavailable");
                }
                render_temperature(reading)
            }
            DisplayMode::Alarm => render_alarm(self.state.alarm()),
            DisplayMode::Animation => self.animation.poll(now).unwrap_or(BLANK_FRAME),
        };
        self.write_frame(frame);

        self.alarm_monitor.service(
            self.state.alarm(),
            time.as_ref(),
            now,
            &mut self.peripherals.buzzer,
        );

        self.next_service(now)
    }

    fn read_wall_time(&mut self) -> Option<WallTime> {
        let time = self.peripherals.wall_clock.now();
        match time {
            Some(time) => self.last_time = Some(time),
            None => warn!("wall clock unavailable"),
        }
        time
    }

    fn clock_frame(&self) -> Frame {
        match &self.last_time {
            Some(time) => render_time(time, self.state.hour_format()),
            None => BLANK_FRAME,
        }
    }

    fn write_frame(&mut self, frame: Frame) {
        for (position, glyph) in frame.iter().enumerate() {
            self.peripherals.display.set_glyph(position, *glyph);
        }
        self.displayed = frame;
    }

    fn next_service(&self, now: I) -> I::Duration {
        let mut delay = self.refresh_interval;
        if let Some(frame_due) = self.animation.until_next_frame(now) {
            delay = min_duration(delay, frame_due);
        }
        if let Some(sound_left) = self.alarm_monitor.remaining(now) {
            delay = min_duration(delay, sound_left);
        }
        delay
    }

    /// Returns the current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    /// Returns the button-controlled state.
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Returns the alarm configuration.
    pub fn alarm(&self) -> &AlarmConfig {
        self.state.alarm()
    }

    /// Returns the clock-mode hour format.
    pub fn hour_format(&self) -> HourFormat {
        self.state.hour_format()
    }

    /// Returns the frame most recently written to the tubes.
    pub fn displayed(&self) -> Frame {
        self.displayed
    }

    /// Returns the last wall time read successfully.
    pub fn last_wall_time(&self) -> Option<WallTime> {
        self.last_time
    }

    /// Returns true while the buzzer is sounding.
    pub fn is_alarm_sounding(&self) -> bool {
        self.alarm_monitor.is_sounding()
    }

    /// Index of the animation frame on the tubes (0 outside animation mode).
    pub fn animation_frame_index(&self) -> usize {
        self.animation.frame_index()
    }

    /// Returns the peripherals.
    pub fn peripherals(&self) -> &Peripherals<D, B, R, S> {
        &self.peripherals
    }

    /// Returns the peripherals mutably, e.g. to set a board RTC.
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<D, B, R, S> {
        &mut self.peripherals
    }

    /// Consumes the clock and hands back the peripherals.
    pub fn release(self) -> Peripherals<D, B, R, S> {
        self.peripherals
    }
}
