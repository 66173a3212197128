//! Tube display abstraction and per-mode rendering.
//!
//! Rendering is split from output: the `render_*` functions compute a complete
//! [`Frame`] from plain data, and the controller writes every position of that
//! frame to the [`NixieDisplay`] on each pass.

use crate::alarm::AlarmConfig;
use crate::time::WallTime;
use crate::types::HourFormat;

/// Number of tubes on the display.
pub const TUBE_COUNT: usize = 4;

/// What a single tube shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// A numeral cathode, `0..=9`.
    Digit(u8),

    /// All cathodes off.
    Blank,
}

/// One glyph per tube, left to right.
pub type Frame = [Glyph; TUBE_COUNT];

/// A frame with every tube dark.
pub const BLANK_FRAME: Frame = [Glyph::Blank; TUBE_COUNT];

/// Trait for abstracting the tube driver hardware.
///
/// Implement this for your driver (HV5812 shift registers, K155ID1 decoders,
/// ...). Writes cannot fail: handle hardware errors internally. The controller
/// rewrites the whole frame on every pass, so a dropped write heals itself.
pub trait NixieDisplay {
    /// Lights `glyph` on the tube at `position` (`0..TUBE_COUNT`).
    ///
    /// A `Glyph::Digit` above 9 should be shown as blank.
    fn set_glyph(&mut self, position: usize, glyph: Glyph);

    /// Turns every tube off.
    fn clear(&mut self);
}

/// Splits `value` (`0..=99`) into its tens and units digits.
#[inline]
pub fn split_digits(value: u8) -> (u8, u8) {
    (value / 10, value % 10)
}

fn two_digit_pair(left: u8, right: u8) -> Frame {
    let (lt, lu) = split_digits(left);
    let (rt, ru) = split_digits(right);
    [
        Glyph::Digit(lt),
        Glyph::Digit(lu),
        Glyph::Digit(rt),
        Glyph::Digit(ru),
    ]
}

/// Renders hours on tubes 0-1 and minutes on tubes 2-3.
///
/// Seconds are not shown. In 12-hour format midnight and noon read as 12 and a
/// leading zero is blanked.
pub fn render_time(time: &WallTime, format: HourFormat) -> Frame {
    match format {
        HourFormat::TwentyFour => two_digit_pair(time.hour(), time.minute()),
        HourFormat::Twelve => {
            let hour = match time.hour() % 12 {
                0 => 12,
                h => h,
            };
            let mut frame = two_digit_pair(hour, time.minute());
            if frame[0] == Glyph::Digit(0) {
                frame[0] = Glyph::Blank;
            }
            frame
        }
    }
}

/// Nudge added before truncating, so 21.3 (212.999... in `f32`) keeps its
/// tenth.
const TENTHS_EPSILON: f32 = 1e-3;

/// Renders a temperature as `II.FF`: integer part on tubes 0-1 and the tenths
/// digit, split into tens and units, on tubes 2-3.
///
/// Digits past the first decimal are truncated, not rounded. Missing, NaN,
/// negative or three-digit readings render blank rather than as misleading
/// digits.
pub fn render_temperature(celsius: Option<f32>) -> Frame {
    let Some(celsius) = celsius else {
        return BLANK_FRAME;
    };
    if celsius.is_nan() {
        return BLANK_FRAME;
    }

    let tenths = libm::floorf(celsius * 10.0 + TENTHS_EPSILON);
    if !(0.0..1000.0).contains(&tenths) {
        return BLANK_FRAME;
    }

    let tenths = tenths as u16;
    let integer = (tenths / 10) as u8;
    let fraction = (tenths % 10) as u8;
    two_digit_pair(integer, fraction)
}

/// Renders the configured alarm time, hours on tubes 0-1 and minutes on 2-3.
pub fn render_alarm(alarm: &AlarmConfig) -> Frame {
    two_digit_pair(alarm.hour(), alarm.minute())
}
