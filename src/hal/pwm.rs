//! Grayscale clock and BLANK pulse generation for the TLC5940 chain.
//!
//! Timer2 runs GSCLK on OC2B (D3) at F_CPU / 2. Timer1 in phase and frequency
//! correct mode with ICR1 = 4096 has a period of 8192 CPU cycles, exactly one
//! 4096 step grayscale cycle, and pulses BLANK on OC1B (D10) at the start of
//! each one. Once OC1B is connected the BLANK writes of the serial driver no
//! longer reach the pin.

use avr_device::atmega328p::{TC1, TC2};

const GRAYSCALE_PERIOD: u16 = 4096;

/// Owns both timers while they drive the TLC5940 pins
pub struct TlcClock {
    _tc1: TC1,
    _tc2: TC2,
}

impl TlcClock {
    /// GSCLK and BLANK pins must already be outputs
    pub fn start(tc1: TC1, tc2: TC2) -> Self {
        unsafe {
            // Timer1: OC1B clear on up-count match, mode 8 (TOP = ICR1)
            tc1.tccr1a.write(|w| w.bits(0x20));
            tc1.tccr1b.write(|w| w.bits(0x10));
            tc1.ocr1b.write(|w| w.bits(2));
            tc1.icr1.write(|w| w.bits(GRAYSCALE_PERIOD));

            // Timer2: OC2B non-inverting, fast PWM with TOP = OCR2A
            tc2.tccr2a.write(|w| w.bits(0x23));
            tc2.tccr2b.write(|w| w.bits(0x08));
            tc2.ocr2a.write(|w| w.bits(1));
            tc2.ocr2b.write(|w| w.bits(0));

            // Start both without prescaler
            tc1.tccr1b.modify(|r, w| w.bits(r.bits() | 0x01));
            tc2.tccr2b.modify(|r, w| w.bits(r.bits() | 0x01));
        }

        Self { _tc1: tc1, _tc2: tc2 }
    }
}
