use embedded_hal::digital::v2::InputPin;
use rtt_target::rprintln;

use nixie_clock::{
    Animation, Button, ClockAction, ClockConfig, DisplayMode, NixieClock, Peripherals,
    TimeDuration, TimeInstant, TimeSource, WallTime,
};
use stm32f0_nixie::soft_rtc::SoftRtc;
use stm32f0_nixie::thermometer::InternalThermometer;
use stm32f0_nixie::time_source::{HalDuration, HalInstant, HalTimeSource};

use crate::button::{ButtonEvent, ButtonWatcher};
use crate::hardware_setup::{AlarmBuzzer, ButtonA, ButtonB, ButtonC, HardwareContext, Tubes};

/// Animation frame capacity
const FRAMES: usize = 4;

/// How long the top-of-hour animation runs
const HOURLY_ANIMATION_MS: u64 = 10_000;

type Clock<'a> = NixieClock<
    'a,
    HalInstant,
    HalTimeSource,
    Tubes,
    AlarmBuzzer,
    SoftRtc<'a>,
    InternalThermometer,
    FRAMES,
>;

/// Application state containing all runtime data
pub struct AppState<'a> {
    clock: Clock<'a>,
    button_a: ButtonA,
    button_b: ButtonB,
    button_c: ButtonC,
    watchers: [ButtonWatcher; 3],
    time_source: &'a HalTimeSource,
    animation_started: Option<HalInstant>,
}

impl<'a> AppState<'a> {
    /// Initialize the application with hardware and start time
    pub fn new(hw: HardwareContext, time_source: &'a HalTimeSource, start: WallTime) -> Self {
        let rtc = SoftRtc::starting_at(start, time_source);
        let animation = Animation::placeholder().unwrap();
        let peripherals = Peripherals::new(hw.tubes, hw.buzzer, rtc, hw.thermometer);

        let clock = NixieClock::new(peripherals, time_source, ClockConfig::new(animation));

        Self {
            clock,
            button_a: hw.button_a,
            button_b: hw.button_b,
            button_c: hw.button_c,
            watchers: [ButtonWatcher::new(), ButtonWatcher::new(), ButtonWatcher::new()],
            time_source,
            animation_started: None,
        }
    }

    /// Poll all three buttons and forward their gestures to the clock
    ///
    /// Clicks go through the mode table. Long-pressing A returns to the time
    /// from the temperature or alarm screen; long-pressing B stops a sounding
    /// alarm.
    fn poll_buttons(&mut self) {
        let now_ms = self.time_source.now().as_millis();
        let levels = [
            (Button::A, self.button_a.is_low().unwrap_or(false)),
            (Button::B, self.button_b.is_low().unwrap_or(false)),
            (Button::C, self.button_c.is_low().unwrap_or(false)),
        ];

        for ((button, is_low), watcher) in levels.into_iter().zip(self.watchers.iter_mut()) {
            let action = match (watcher.poll(is_low, now_ms), button) {
                (Some(ButtonEvent::Click), _) => ClockAction::Press(button),
                (Some(ButtonEvent::LongPress), Button::A) => ClockAction::ShowClock,
                (Some(ButtonEvent::LongPress), Button::B) => ClockAction::Silence,
                _ => continue,
            };

            rprintln!("{:?}: {:?}", button, action);
            if let Err(e) = self.clock.handle_action(action) {
                rprintln!("Ignored: {}", e);
            }
        }
    }

    /// Run the animation for a few seconds at the top of every hour
    fn hourly_animation(&mut self) {
        let now = self.time_source.now();

        match (self.clock.mode(), self.animation_started) {
            (DisplayMode::Clock, None) => {
                let on_the_hour = self
                    .clock
                    .last_wall_time()
                    .is_some_and(|t| t.minute() == 0 && t.second() == 0);
                if on_the_hour && self.clock.enter_animation().is_ok() {
                    rprintln!("Hourly animation started");
                    self.animation_started = Some(now);
                }
            }
            (DisplayMode::Animation, Some(started)) => {
                if now.duration_since(started).as_millis() >= HOURLY_ANIMATION_MS {
                    if let Err(e) = self.clock.exit_animation() {
                        rprintln!("Leaving animation failed: {}", e);
                    }
                }
            }
            (_, Some(_)) => {
                // Keeps the hour's second 0 from restarting the animation
                let past_second = self
                    .clock
                    .last_wall_time()
                    .is_some_and(|t| t.second() != 0);
                if past_second {
                    self.animation_started = None;
                }
            }
            _ => {}
        }
    }

    /// Sleep until the clock needs servicing or a button interrupt wakes us
    fn sleep_for(&self, delay: HalDuration) {
        let start = self.time_source.now();
        loop {
            cortex_m::asm::wfi();
            let elapsed = self.time_source.now().duration_since(start);
            // SysTick wakes us every millisecond; return early so buttons stay snappy
            if elapsed.as_millis() >= delay.as_millis().min(10) {
                break;
            }
        }
    }

    /// Run the main application loop
    pub fn run(&mut self) -> ! {
        loop {
            self.poll_buttons();
            self.hourly_animation();

            let delay = self.clock.service();

            self.sleep_for(delay);
        }
    }
}
