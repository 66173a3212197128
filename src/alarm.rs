//! Alarm configuration and the monitor that drives the buzzer.
//!
//! The monitor never blocks. When the alarm matches, it switches the buzzer on
//! and remembers when; a later [`AlarmMonitor::service`] switches it off once
//! the configured duration has passed.

use crate::time::{TimeDuration, TimeInstant, WallTime};
use crate::types::RangeError;

/// Trait for abstracting the buzzer output.
///
/// Handle any hardware errors internally - this method cannot fail.
pub trait Buzzer {
    /// Drives the buzzer on (`true`) or off (`false`).
    fn set_active(&mut self, active: bool);
}

/// The single alarm: a time of day and an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmConfig {
    enabled: bool,
    hour: u8,
    minute: u8,
}

impl AlarmConfig {
    /// Creates a disabled alarm at `hour:minute`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, RangeError> {
        if hour > 23 {
            return Err(RangeError::Hour(hour));
        }
        if minute > 59 {
            return Err(RangeError::Minute(minute));
        }

        Ok(Self {
            enabled: false,
            hour,
            minute,
        })
    }

    /// Returns this alarm with the switch set to `enabled`.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Advances the hour, wrapping 23 to 0.
    pub fn increment_hour(&mut self) {
        self.hour = (self.hour + 1) % 24;
    }

    /// Advances the minute, wrapping 59 to 0. The hour is left alone.
    pub fn increment_minute(&mut self) {
        self.minute = (self.minute + 1) % 60;
    }

    /// Flips the alarm switch.
    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Returns true if the alarm is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Alarm hour, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Alarm minute, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns true if the alarm is enabled and `time` falls in its minute.
    pub fn matches(&self, time: &WallTime) -> bool {
        self.enabled && time.hour() == self.hour && time.minute() == self.minute
    }
}

impl Default for AlarmConfig {
    /// 07:30, disabled.
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 7,
            minute: 30,
        }
    }
}

/// When a matching minute sounds the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmPolicy {
    /// Sound once per matching minute.
    #[default]
    OncePerMatch,

    /// Sound again every time the buzzer falls silent while the minute still
    /// matches.
    WhileMatching,
}

/// What the monitor did during a service pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmStatus {
    /// Buzzer off, nothing happened.
    Idle,

    /// Buzzer was just switched on.
    Triggered,

    /// Buzzer still on.
    Sounding,

    /// Buzzer was just switched off.
    Finished,
}

/// Watches the alarm and runs the buzzer for a fixed duration.
#[derive(Debug)]
pub struct AlarmMonitor<I: TimeInstant> {
    policy: AlarmPolicy,
    duration: I::Duration,
    sounding_since: Option<I>,
    fired_at: Option<(u8, u8)>,
}

impl<I: TimeInstant> AlarmMonitor<I> {
    /// Creates an idle monitor that sounds for `duration` per trigger.
    pub fn new(policy: AlarmPolicy, duration: I::Duration) -> Self {
        Self {
            policy,
            duration,
            sounding_since: None,
            fired_at: None,
        }
    }

    /// Runs one monitor pass.
    ///
    /// `time` is the wall time read during this pass, or `None` if the read
    /// failed. A pass without wall time never triggers but still ends a sound
    /// whose duration has run out. Disabling the alarm silences it.
    pub fn service<B: Buzzer>(
        &mut self,
        alarm: &AlarmConfig,
        time: Option<&WallTime>,
        now: I,
        buzzer: &mut B,
    ) -> AlarmStatus {
        let mut finished = false;

        if let Some(since) = self.sounding_since {
            let elapsed = now.duration_since(since);
            if !alarm.is_enabled() || elapsed.as_millis() >= self.duration.as_millis() {
                buzzer.set_active(false);
                self.sounding_since = None;
                finished = true;
                debug!("alarm silenced");
            } else {
                return AlarmStatus::Sounding;
            }
        }

        let Some(time) = time else {
            return if finished {
                AlarmStatus::Finished
            } else {
                AlarmStatus::Idle
            };
        };

        // Re-arm only once the minute has passed; toggling the switch does not
        if (time.hour(), time.minute()) != (alarm.hour(), alarm.minute()) {
            self.fired_at = None;
        }

        if !alarm.matches(time) {
            return if finished {
                AlarmStatus::Finished
            } else {
                AlarmStatus::Idle
            };
        }

        let minute = (time.hour(), time.minute());
        if self.policy == AlarmPolicy::OncePerMatch && self.fired_at == Some(minute) {
            return if finished {
                AlarmStatus::Finished
            } else {
                AlarmStatus::Idle
            };
        }

        buzzer.set_active(true);
        self.sounding_since = Some(now);
        self.fired_at = Some(minute);
        debug!("alarm triggered at {}:{}", minute.0, minute.1);
        AlarmStatus::Triggered
    }

    /// Returns true while the buzzer is on.
    pub fn is_sounding(&self) -> bool {
        self.sounding_since.is_some()
    }

    /// Time left before the buzzer switches off, if it is on.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.sounding_since
            .map(|since| self.duration.saturating_sub(now.duration_since(since)))
    }

    /// Switches the buzzer off immediately.
    ///
    /// Under [`AlarmPolicy::OncePerMatch`] the silenced minute stays spent.
    pub fn silence<B: Buzzer>(&mut self, buzzer: &mut B) {
        buzzer.set_active(false);
        self.sounding_since = None;
    }
}
