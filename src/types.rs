//! Core types shared across the controller.

/// The active top-level display context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Current time of day.
    #[default]
    Clock,

    /// Current temperature.
    Temperature,

    /// Alarm setting screen.
    Alarm,

    /// Free-running frame animation.
    Animation,
}

/// A logical front-panel button.
///
/// Clicks arrive already debounced; what each button does depends on the
/// current [`DisplayMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Mode switch between clock and temperature; alarm hour in alarm mode.
    A,

    /// Opens the alarm screen; toggles the alarm in alarm mode.
    B,

    /// Toggles 12/24 hour display; alarm minute in alarm mode.
    C,
}

/// How hours are shown in clock mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// `00`-`23`.
    #[default]
    TwentyFour,

    /// ` 1`-`12`, leading zero blanked.
    Twelve,
}

impl HourFormat {
    /// Returns the other format.
    pub fn toggled(self) -> Self {
        match self {
            HourFormat::TwentyFour => HourFormat::Twelve,
            HourFormat::Twelve => HourFormat::TwentyFour,
        }
    }
}

/// A time field outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// Hour greater than 23.
    Hour(u8),

    /// Minute greater than 59.
    Minute(u8),

    /// Second greater than 59.
    Second(u8),
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeError::Hour(h) => write!(f, "hour {} out of range 0-23", h),
            RangeError::Minute(m) => write!(f, "minute {} out of range 0-59", m),
            RangeError::Second(s) => write!(f, "second {} out of range 0-59", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// Animation validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// No frames provided.
    EmptyAnimation,

    /// Frame interval of zero.
    ZeroInterval,

    /// Frame capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::EmptyAnimation => {
                write!(f, "animation must have at least one frame")
            }
            AnimationError::ZeroInterval => {
                write!(f, "animation frame interval must be non-zero")
            }
            AnimationError::CapacityExceeded => {
                write!(f, "animation capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}
