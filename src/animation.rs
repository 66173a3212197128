//! Frame animations for animation mode.
//!
//! An [`Animation`] is a validated list of frames and a frame interval;
//! [`AnimationDriver`] plays it against a monotonic clock.

use crate::display::{Frame, Glyph};
use crate::time::{TimeDuration, TimeInstant};
use crate::types::AnimationError;
use heapless::Vec;

/// Frame interval of the placeholder animation, in milliseconds.
pub const PLACEHOLDER_INTERVAL_MS: u64 = 1000;

/// The two frames of the placeholder animation.
pub const PLACEHOLDER_FRAMES: [Frame; 2] = [
    [Glyph::Digit(0), Glyph::Digit(1), Glyph::Digit(2), Glyph::Digit(3)],
    [Glyph::Digit(4), Glyph::Digit(5), Glyph::Digit(6), Glyph::Digit(7)],
];

/// A looping sequence of tube frames shown at a fixed cadence.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of frames this animation can hold
#[derive(Debug, Clone)]
pub struct Animation<D: TimeDuration, const N: usize> {
    frames: Vec<Frame, N>,
    interval: D,
}

impl<D: TimeDuration, const N: usize> Animation<D, N> {
    /// Creates a new animation builder.
    pub fn builder() -> AnimationBuilder<D, N> {
        AnimationBuilder::new()
    }

    /// Builds the placeholder two-frame animation with one-second frames.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is smaller than 2
    pub fn placeholder() -> Result<Self, AnimationError> {
        let mut builder = Self::builder().interval(D::from_millis(PLACEHOLDER_INTERVAL_MS));
        for frame in PLACEHOLDER_FRAMES {
            builder = builder.frame(frame)?;
        }
        builder.build()
    }

    /// Returns the index of the frame shown `elapsed` after the start.
    pub fn frame_index_at(&self, elapsed: D) -> usize {
        let step = elapsed.as_millis() / self.interval.as_millis();
        (step % self.frames.len() as u64) as usize
    }

    /// Returns the frame shown `elapsed` after the start.
    pub fn frame_at(&self, elapsed: D) -> Frame {
        self.frames[self.frame_index_at(elapsed)]
    }

    /// Time from `elapsed` until the next frame change.
    pub fn until_next_frame(&self, elapsed: D) -> D {
        let interval = self.interval.as_millis();
        D::from_millis(interval - elapsed.as_millis() % interval)
    }

    /// Returns the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the interval between frames.
    pub fn interval(&self) -> D {
        self.interval
    }

    /// Returns the frame at the given index.
    pub fn get_frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

/// Builder for constructing validated animations.
#[derive(Debug)]
pub struct AnimationBuilder<D: TimeDuration, const N: usize> {
    frames: Vec<Frame, N>,
    interval: D,
}

impl<D: TimeDuration, const N: usize> AnimationBuilder<D, N> {
    /// Creates a new empty builder with the placeholder interval.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            interval: D::from_millis(PLACEHOLDER_INTERVAL_MS),
        }
    }

    /// Appends a frame.
    ///
    /// # Errors
    /// * `CapacityExceeded` - the animation already holds `N` frames
    pub fn frame(mut self, frame: Frame) -> Result<Self, AnimationError> {
        self.frames
            .push(frame)
            .map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets how long each frame stays on the tubes.
    pub fn interval(mut self, interval: D) -> Self {
        self.interval = interval;
        self
    }

    /// Builds and validates the animation.
    ///
    /// # Errors
    /// * `EmptyAnimation` - No frames were added
    /// * `ZeroInterval` - The frame interval is zero
    pub fn build(self) -> Result<Animation<D, N>, AnimationError> {
        if self.frames.is_empty() {
            return Err(AnimationError::EmptyAnimation);
        }

        if self.interval.as_millis() == 0 {
            return Err(AnimationError::ZeroInterval);
        }

        Ok(Animation {
            frames: self.frames,
            interval: self.interval,
        })
    }
}

impl<D: TimeDuration, const N: usize> Default for AnimationBuilder<D, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays an [`Animation`] against a monotonic clock.
///
/// The frame shown is derived from the time since [`start`](Self::start), so a
/// late service pass lands on the right frame instead of drifting.
#[derive(Debug)]
pub struct AnimationDriver<I: TimeInstant, const N: usize> {
    animation: Animation<I::Duration, N>,
    started_at: Option<I>,
    frame_index: usize,
}

impl<I: TimeInstant, const N: usize> AnimationDriver<I, N> {
    /// Creates a stopped driver.
    pub fn new(animation: Animation<I::Duration, N>) -> Self {
        Self {
            animation,
            started_at: None,
            frame_index: 0,
        }
    }

    /// Starts playing from the first frame.
    pub fn start(&mut self, now: I) {
        self.started_at = Some(now);
        self.frame_index = 0;
    }

    /// Stops playing and rewinds to the first frame.
    pub fn stop(&mut self) {
        self.started_at = None;
        self.frame_index = 0;
    }

    /// Returns the frame due at `now`, or `None` if the driver is stopped.
    pub fn poll(&mut self, now: I) -> Option<Frame> {
        let started_at = self.started_at?;
        let elapsed = now.duration_since(started_at);
        self.frame_index = self.animation.frame_index_at(elapsed);
        Some(self.animation.frame_at(elapsed))
    }

    /// Time until the next frame is due, or `None` if stopped.
    pub fn until_next_frame(&self, now: I) -> Option<I::Duration> {
        self.started_at
            .map(|started_at| self.animation.until_next_frame(now.duration_since(started_at)))
    }

    /// Returns true while playing.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Index of the frame most recently returned by [`poll`](Self::poll).
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Returns the animation being played.
    pub fn animation(&self) -> &Animation<I::Duration, N> {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestDuration(u64);

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

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }
    }

    const BLANKS: Frame = [Glyph::Blank; 4];

    #[test]
    fn placeholder_has_two_one_second_frames() {
        let animation = Animation::<TestDuration, 4>::placeholder().unwrap();
        assert_eq!(animation.frame_count(), 2);
        assert_eq!(animation.interval(), TestDuration(1000));
        assert_eq!(animation.get_frame(0), Some(&PLACEHOLDER_FRAMES[0]));
        assert_eq!(animation.get_frame(1), Some(&PLACEHOLDER_FRAMES[1]));
    }

    #[test]
    fn placeholder_needs_room_for_two_frames() {
        let result = Animation::<TestDuration, 1>::placeholder();
        assert_eq!(result.unwrap_err(), AnimationError::CapacityExceeded);
    }

    #[test]
    fn builder_rejects_empty_animation() {
        let result = Animation::<TestDuration, 4>::builder().build();
        assert_eq!(result.unwrap_err(), AnimationError::EmptyAnimation);
    }

    #[test]
    fn builder_rejects_zero_interval() {
        let result = Animation::<TestDuration, 4>::builder()
            .frame(BLANKS)
            .unwrap()
            .interval(TestDuration(0))
            .build();
        assert_eq!(result.unwrap_err(), AnimationError::ZeroInterval);
    }

    #[test]
    fn frames_alternate_every_interval() {
        let animation = Animation::<TestDuration, 4>::placeholder().unwrap();

        assert_eq!(animation.frame_at(TestDuration(0)), PLACEHOLDER_FRAMES[0]);
        assert_eq!(animation.frame_at(TestDuration(999)), PLACEHOLDER_FRAMES[0]);
        assert_eq!(animation.frame_at(TestDuration(1000)), PLACEHOLDER_FRAMES[1]);
        assert_eq!(animation.frame_at(TestDuration(1999)), PLACEHOLDER_FRAMES[1]);
        assert_eq!(animation.frame_at(TestDuration(2000)), PLACEHOLDER_FRAMES[0]);
        assert_eq!(animation.frame_at(TestDuration(7500)), PLACEHOLDER_FRAMES[1]);
    }

    #[test]
    fn until_next_frame_counts_down_to_boundary() {
        let animation = Animation::<TestDuration, 4>::placeholder().unwrap();
        assert_eq!(animation.until_next_frame(TestDuration(0)), TestDuration(1000));
        assert_eq!(animation.until_next_frame(TestDuration(250)), TestDuration(750));
        assert_eq!(animation.until_next_frame(TestDuration(1999)), TestDuration(1));
    }

    #[test]
    fn driver_is_silent_until_started_and_rewinds_on_stop() {
        let animation = Animation::<TestDuration, 4>::placeholder().unwrap();
        let mut driver = AnimationDriver::<TestInstant, 4>::new(animation);

        assert_eq!(driver.poll(TestInstant(0)), None);
        assert!(!driver.is_running());

        driver.start(TestInstant(500));
        assert_eq!(driver.poll(TestInstant(500)), Some(PLACEHOLDER_FRAMES[0]));
        assert_eq!(driver.poll(TestInstant(1500)), Some(PLACEHOLDER_FRAMES[1]));
        assert_eq!(driver.frame_index(), 1);
        assert_eq!(driver.until_next_frame(TestInstant(1600)), Some(TestDuration(900)));

        driver.stop();
        assert_eq!(driver.frame_index(), 0);
        assert_eq!(driver.poll(TestInstant(2000)), None);
        assert_eq!(driver.until_next_frame(TestInstant(2000)), None);
    }
}
