use embedded_hal::digital::v2::OutputPin;
use nixie_clock::Buzzer;

/// Active buzzer (or driver transistor) on a push-pull pin.
pub struct PinBuzzer<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> PinBuzzer<P> {
    /// Creates the buzzer, switched off.
    pub fn new(mut pin: P) -> Self {
        pin.set_low().ok();
        Self { pin }
    }
}

impl<P: OutputPin> Buzzer for PinBuzzer<P> {
    fn set_active(&mut self, active: bool) {
        // A stuck pin is retried on the next state change
        if active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }
}
