//! Time abstractions: monotonic time for scheduling, wall time for display.

use crate::types::RangeError;

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns zero on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Returns the shorter of two durations.
#[inline]
pub(crate) fn min_duration<D: TimeDuration>(a: D, b: D) -> D {
    if b.as_millis() < a.as_millis() { b } else { a }
}

/// Time of day as read from a real-time clock.
///
/// Fields are validated on construction, so an hour is always `0..=23`
/// and minutes and seconds are always `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    /// Creates a wall time, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, RangeError> {
        if hour > 23 {
            return Err(RangeError::Hour(hour));
        }
        if minute > 59 {
            return Err(RangeError::Minute(minute));
        }
        if second > 59 {
            return Err(RangeError::Second(second));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour of the day, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute, `0..=59`.
    pub fn second(&self) -> u8 {
        self.second
    }
}

/// Trait for abstracting the real-time clock.
///
/// Implement this for your RTC, GPS receiver or any other wall-time source.
pub trait WallClock {
    /// Reads the current time of day.
    ///
    /// Returns `None` when the source is unavailable or not yet synchronized.
    /// The controller keeps showing the last good reading in that case.
    fn now(&mut self) -> Option<WallTime>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_time_accepts_bounds() {
        let t = WallTime::new(23, 59, 59).unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
        assert!(WallTime::new(0, 0, 0).is_ok());
    }

    #[test]
    fn wall_time_rejects_out_of_range_fields() {
        assert_eq!(WallTime::new(24, 0, 0), Err(RangeError::Hour(24)));
        assert_eq!(WallTime::new(0, 60, 0), Err(RangeError::Minute(60)));
        assert_eq!(WallTime::new(0, 0, 60), Err(RangeError::Second(60)));
    }
}
