//! Startup values and timing constants.

use crate::alarm::{AlarmConfig, AlarmPolicy};
use crate::animation::Animation;
use crate::time::TimeDuration;
use crate::types::HourFormat;

/// How long the buzzer sounds per trigger, in milliseconds.
pub const DEFAULT_ALARM_DURATION_MS: u64 = 5000;

/// Longest sleep `service` asks for, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 250;

/// Configuration consumed by [`NixieClock::new`](crate::NixieClock::new).
#[derive(Debug, Clone)]
pub struct ClockConfig<D: TimeDuration, const N: usize> {
    /// Alarm at startup.
    pub alarm: AlarmConfig,
    /// Clock-mode hour format at startup.
    pub hour_format: HourFormat,
    /// Whether a matching minute sounds once or repeatedly.
    pub alarm_policy: AlarmPolicy,
    /// Buzzer on-time per trigger.
    pub alarm_duration: D,
    /// Upper bound on the delay returned by `service`.
    pub refresh_interval: D,
    /// Animation played in animation mode.
    pub animation: Animation<D, N>,
}

impl<D: TimeDuration, const N: usize> ClockConfig<D, N> {
    /// Creates a configuration with default values around `animation`.
    pub fn new(animation: Animation<D, N>) -> Self {
        Self {
            alarm: AlarmConfig::default(),
            hour_format: HourFormat::default(),
            alarm_policy: AlarmPolicy::default(),
            alarm_duration: D::from_millis(DEFAULT_ALARM_DURATION_MS),
            refresh_interval: D::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            animation,
        }
    }

    pub fn with_alarm(mut self, alarm: AlarmConfig) -> Self {
        self.alarm = alarm;
        self
    }

    pub fn with_hour_format(mut self, hour_format: HourFormat) -> Self {
        self.hour_format = hour_format;
        self
    }

    pub fn with_alarm_policy(mut self, policy: AlarmPolicy) -> Self {
        self.alarm_policy = policy;
        self
    }

    /// Sets the buzzer on-time. Zero is raised to one millisecond.
    pub fn with_alarm_duration(mut self, duration: D) -> Self {
        self.alarm_duration = at_least_one_milli(duration);
        self
    }

    /// Sets the refresh interval. Zero is raised to one millisecond.
    pub fn with_refresh_interval(mut self, interval: D) -> Self {
        self.refresh_interval = at_least_one_milli(interval);
        self
    }
}

fn at_least_one_milli<D: TimeDuration>(duration: D) -> D {
    if duration.as_millis() == 0 {
        D::from_millis(1)
    } else {
        duration
    }
}
