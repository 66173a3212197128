//! Shared test infrastructure for nixie-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use nixie_clock::{
    Animation, BLANK_FRAME, Buzzer, ClockConfig, Frame, Glyph, NixieClock, NixieDisplay,
    Peripherals, TUBE_COUNT, Thermometer, TimeDuration, TimeInstant, TimeSource, WallClock,
    WallTime,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Peripherals
// ============================================================================

/// What a display received, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWrite {
    Glyph(usize, Glyph),
    Clear,
}

/// Mock tube display that records every write
pub struct MockDisplay {
    tubes: Frame,
    history: heapless::Vec<DisplayWrite, 256>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            tubes: BLANK_FRAME,
            history: heapless::Vec::new(),
        }
    }

    pub fn tubes(&self) -> Frame {
        self.tubes
    }

    pub fn history(&self) -> &[DisplayWrite] {
        &self.history
    }

    pub fn clear_count(&self) -> usize {
        self.history
            .iter()
            .filter(|w| **w == DisplayWrite::Clear)
            .count()
    }
}

impl NixieDisplay for MockDisplay {
    fn set_glyph(&mut self, position: usize, glyph: Glyph) {
        if position < TUBE_COUNT {
            self.tubes[position] = glyph;
        }
        let _ = self.history.push(DisplayWrite::Glyph(position, glyph));
    }

    fn clear(&mut self) {
        self.tubes = BLANK_FRAME;
        let _ = self.history.push(DisplayWrite::Clear);
    }
}

/// Mock buzzer that records every output change
pub struct MockBuzzer {
    active: bool,
    history: heapless::Vec<bool, 32>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self {
            active: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }

    pub fn activations(&self) -> usize {
        self.history.iter().filter(|on| **on).count()
    }
}

impl Buzzer for MockBuzzer {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        let _ = self.history.push(active);
    }
}

/// Mock RTC returning whatever the test sets
pub struct MockWallClock {
    pub time: Option<WallTime>,
    pub reads: usize,
}

impl MockWallClock {
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            time: Some(WallTime::new(hour, minute, second).unwrap()),
            reads: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            time: None,
            reads: 0,
        }
    }

    pub fn set(&mut self, hour: u8, minute: u8, second: u8) {
        self.time = Some(WallTime::new(hour, minute, second).unwrap());
    }
}

impl WallClock for MockWallClock {
    fn now(&mut self) -> Option<WallTime> {
        self.reads += 1;
        self.time
    }
}

/// Mock temperature sensor counting its reads
pub struct MockThermometer {
    pub celsius: Option<f32>,
    pub reads: usize,
}

impl MockThermometer {
    pub fn reading(celsius: f32) -> Self {
        Self {
            celsius: Some(celsius),
            reads: 0,
        }
    }
}

impl Thermometer for MockThermometer {
    fn read_celsius(&mut self) -> Option<f32> {
        self.reads += 1;
        self.celsius
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestClock<'t> = NixieClock<
    't,
    TestInstant,
    MockTimeSource,
    MockDisplay,
    MockBuzzer,
    MockWallClock,
    MockThermometer,
    4,
>;

pub fn test_config() -> ClockConfig<TestDuration, 4> {
    ClockConfig::new(Animation::placeholder().unwrap())
}

/// Clock at 12:34:56 reading 21.5 degrees, default configuration
pub fn new_clock(timer: &MockTimeSource) -> TestClock<'_> {
    new_clock_with(timer, test_config())
}

pub fn new_clock_with(timer: &MockTimeSource, config: ClockConfig<TestDuration, 4>) -> TestClock<'_> {
    let peripherals = Peripherals::new(
        MockDisplay::new(),
        MockBuzzer::new(),
        MockWallClock::at(12, 34, 56),
        MockThermometer::reading(21.5),
    );
    TestClock::new(peripherals, timer, config)
}

pub fn digits(a: u8, b: u8, c: u8, d: u8) -> Frame {
    [
        Glyph::Digit(a),
        Glyph::Digit(b),
        Glyph::Digit(c),
        Glyph::Digit(d),
    ]
}
