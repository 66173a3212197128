use nixie_clock::{TimeInstant, TimeSource, WallClock, WallTime};

use crate::time_source::{HalInstant, HalTimeSource};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Wall clock kept in software from the SysTick counter.
///
/// Stands in for a battery-backed RTC on boards without one. The counter
/// wraps after ~49.7 days, after which the time jumps; resync with
/// [`set`](Self::set) before then.
pub struct SoftRtc<'t> {
    time_source: &'t HalTimeSource,
    base_seconds: u64,
    base_instant: HalInstant,
}

impl<'t> SoftRtc<'t> {
    /// Starts counting from `time`.
    pub fn starting_at(time: WallTime, time_source: &'t HalTimeSource) -> Self {
        Self {
            time_source,
            base_seconds: seconds_of_day(&time),
            base_instant: time_source.now(),
        }
    }

    /// Resets the clock to `time`.
    pub fn set(&mut self, time: WallTime) {
        self.base_seconds = seconds_of_day(&time);
        self.base_instant = self.time_source.now();
    }
}

fn seconds_of_day(time: &WallTime) -> u64 {
    time.hour() as u64 * 3600 + time.minute() as u64 * 60 + time.second() as u64
}

impl WallClock for SoftRtc<'_> {
    fn now(&mut self) -> Option<WallTime> {
        let elapsed = self.time_source.now().duration_since(self.base_instant);
        let seconds = (self.base_seconds + elapsed.0 / 1000) % SECONDS_PER_DAY;

        WallTime::new(
            (seconds / 3600) as u8,
            ((seconds / 60) % 60) as u8,
            (seconds % 60) as u8,
        )
        .ok()
    }
}
