use nixie_clock::Thermometer;
use stm32f0xx_hal::adc::{Adc, VTemp};

/// The MCU's internal temperature sensor.
///
/// Reads a few degrees above ambient because of die self-heating; fine for a
/// demo, swap in a DS18B20 for a real clock.
pub struct InternalThermometer {
    adc: Adc,
    sensor: VTemp,
}

impl InternalThermometer {
    /// Enables the sensor channel on `adc`.
    pub fn new(mut adc: Adc) -> Self {
        let mut sensor = VTemp::new();
        sensor.enable(&mut adc);

        Self { adc, sensor }
    }
}

impl Thermometer for InternalThermometer {
    fn read_celsius(&mut self) -> Option<f32> {
        if !self.sensor.is_enabled() {
            return None;
        }

        // Tenths of a degree
        let tenths = VTemp::read(&mut self.adc, None);
        Some(tenths as f32 / 10.0)
    }
}
