use embedded_hal::digital::v2::OutputPin;
use nixie_clock::{BLANK_FRAME, Frame, Glyph, NixieDisplay, TUBE_COUNT};

/// Cathodes per tube.
const CATHODES: u8 = 10;

/// Four tubes behind a chain of HV5812-style high-voltage shift registers.
///
/// Each tube owns ten consecutive outputs (cathodes 0-9), tube 0 at the end of
/// the chain. Every write shifts out all 40 bits and pulses the latch, so the
/// chain always matches the frame buffer.
pub struct ShiftRegisterTubes<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    data: DATA,
    clock: CLK,
    latch: LATCH,
    frame: Frame,
}

impl<DATA, CLK, LATCH> ShiftRegisterTubes<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    /// Creates the driver with all tubes dark.
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        let mut tubes = Self {
            data,
            clock,
            latch,
            frame: BLANK_FRAME,
        };
        tubes.flush();
        tubes
    }

    /// Shifts the frame buffer into the chain and latches it.
    ///
    /// Pin errors are ignored; the next write resends the whole chain.
    fn flush(&mut self) {
        self.latch.set_low().ok();

        for glyph in self.frame.iter().rev() {
            for cathode in (0..CATHODES).rev() {
                let lit = *glyph == Glyph::Digit(cathode);
                if lit {
                    self.data.set_high().ok();
                } else {
                    self.data.set_low().ok();
                }
                self.clock.set_high().ok();
                self.clock.set_low().ok();
            }
        }

        self.latch.set_high().ok();
        self.latch.set_low().ok();
    }
}

impl<DATA, CLK, LATCH> NixieDisplay for ShiftRegisterTubes<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    fn set_glyph(&mut self, position: usize, glyph: Glyph) {
        if position >= TUBE_COUNT || self.frame[position] == glyph {
            return;
        }
        self.frame[position] = glyph;
        self.flush();
    }

    fn clear(&mut self) {
        self.frame = BLANK_FRAME;
        self.flush();
    }
}
