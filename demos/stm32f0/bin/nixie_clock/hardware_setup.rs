use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    adc::Adc,
    gpio::{Floating, Input, Output, PullUp, PushPull, gpioa, gpiob, gpioc},
    pac,
    prelude::*,
};

use stm32f0_nixie::buzzer::PinBuzzer;
use stm32f0_nixie::nixie_tubes::ShiftRegisterTubes;
use stm32f0_nixie::thermometer::InternalThermometer;

/// Tube driver on PB5 (data), PB3 (clock), PB4 (latch)
pub type Tubes = ShiftRegisterTubes<
    gpiob::PB5<Output<PushPull>>,
    gpiob::PB3<Output<PushPull>>,
    gpiob::PB4<Output<PushPull>>,
>;

/// Buzzer on PA8
pub type AlarmBuzzer = PinBuzzer<gpioa::PA8<Output<PushPull>>>;

/// Button A: user button on PC13
pub type ButtonA = gpioc::PC13<Input<PullUp>>;

/// Button B on PA0
pub type ButtonB = gpioa::PA0<Input<PullUp>>;

/// Button C on PA1
pub type ButtonC = gpioa::PA1<Input<PullUp>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub tubes: Tubes,
    pub buzzer: AlarmBuzzer,
    pub thermometer: InternalThermometer,
    pub button_a: ButtonA,
    pub button_b: ButtonB,
    pub button_c: ButtonC,
}

/// Initialize all hardware peripherals
///
/// - System clock and SysTick (1ms interrupts)
/// - Shift register pins for the tubes
/// - Buzzer output
/// - ADC with the internal temperature sensor
/// - Three pull-up buttons
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let tubes = setup_tubes(gpiob.pb5, gpiob.pb3, gpiob.pb4);
    let buzzer = setup_buzzer(gpioa.pa8);

    let thermometer = InternalThermometer::new(Adc::new(dp.ADC, &mut rcc));
    rprintln!("Internal temperature sensor enabled");

    let (button_a, button_b, button_c) = cortex_m::interrupt::free(|cs| {
        (
            gpioc.pc13.into_pull_up_input(cs),
            gpioa.pa0.into_pull_up_input(cs),
            gpioa.pa1.into_pull_up_input(cs),
        )
    });
    rprintln!("Buttons configured on PC13, PA0, PA1");

    HardwareContext {
        tubes,
        buzzer,
        thermometer,
        button_a,
        button_b,
        button_c,
    }
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure the shift register chain driving the tubes
fn setup_tubes(
    pb5: gpiob::PB5<Input<Floating>>,
    pb3: gpiob::PB3<Input<Floating>>,
    pb4: gpiob::PB4<Input<Floating>>,
) -> Tubes {
    let (data, clock, latch) = cortex_m::interrupt::free(|cs| {
        (
            pb5.into_push_pull_output(cs),
            pb3.into_push_pull_output(cs),
            pb4.into_push_pull_output(cs),
        )
    });

    rprintln!("Tube shift registers configured on PB5/PB3/PB4");
    ShiftRegisterTubes::new(data, clock, latch)
}

/// Configure the buzzer output
fn setup_buzzer(pa8: gpioa::PA8<Input<Floating>>) -> AlarmBuzzer {
    let pin = cortex_m::interrupt::free(|cs| pa8.into_push_pull_output(cs));

    rprintln!("Buzzer configured on PA8");
    PinBuzzer::new(pin)
}
