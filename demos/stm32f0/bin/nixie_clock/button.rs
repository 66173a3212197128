/// Debounce time for a level change to be accepted, in milliseconds
const DEBOUNCE_MS: u32 = 50;

/// Hold time after which a press counts as a long press, in milliseconds
const LONG_PRESS_MS: u32 = 800;

/// A debounced gesture on one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Pressed and released before the long-press time
    Click,
    /// Held past the long-press time; no click follows on release
    LongPress,
}

/// Turns the raw level of an active-low button into click and long-press
/// events.
///
/// A click is reported on release, so a press that turns into a long press
/// never also counts as a click.
pub struct ButtonWatcher {
    raw_low: bool,
    raw_since: u32,
    pressed_at: Option<u32>,
    long_press_sent: bool,
}

impl ButtonWatcher {
    pub fn new() -> Self {
        Self {
            raw_low: false,
            raw_since: 0,
            pressed_at: None,
            long_press_sent: false,
        }
    }

    /// Feeds the current pin level and returns the gesture completed by it,
    /// if any.
    ///
    /// # Arguments
    /// * `is_low` - Current state of the button (true if pressed)
    /// * `now_ms` - Current time in milliseconds
    pub fn poll(&mut self, is_low: bool, now_ms: u32) -> Option<ButtonEvent> {
        if is_low != self.raw_low {
            self.raw_low = is_low;
            self.raw_since = now_ms;
        }

        let stable = now_ms.wrapping_sub(self.raw_since) >= DEBOUNCE_MS;

        match self.pressed_at {
            None if stable && self.raw_low => {
                self.pressed_at = Some(now_ms);
                self.long_press_sent = false;
                None
            }
            Some(_) if stable && !self.raw_low => {
                self.pressed_at = None;
                (!self.long_press_sent).then_some(ButtonEvent::Click)
            }
            Some(pressed_at)
                if !self.long_press_sent
                    && now_ms.wrapping_sub(pressed_at) >= LONG_PRESS_MS =>
            {
                self.long_press_sent = true;
                Some(ButtonEvent::LongPress)
            }
            _ => None,
        }
    }
}
