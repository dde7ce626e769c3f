//! Millisecond system clock on Timer0 and the delays built on it

use avr_device::atmega328p::TC0;
use avr_device::interrupt::Mutex;
use core::cell::Cell;
use embedded_hal::blocking::delay::DelayMs;
use reaction_duel::drivers::Clock;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Handle to the running millisecond counter
#[derive(Clone, Copy)]
pub struct Millis {
    _private: (),
}

impl Millis {
    /// Configure Timer0 for a 1 ms compare interrupt. Interrupts still need
    /// to be enabled globally for the counter to advance.
    pub fn start(tc0: TC0) -> Self {
        unsafe {
            // CTC mode, 16MHz / 64 = 250kHz, 250 ticks = 1ms
            tc0.tccr0a.write(|w| w.bits(0x02));
            tc0.ocr0a.write(|w| w.bits(249));
            tc0.tccr0b.write(|w| w.bits(0x03));
            tc0.timsk0.write(|w| w.bits(0x02));
        }

        avr_device::interrupt::free(|cs| MILLIS.borrow(cs).set(0));

        Self { _private: () }
    }

    pub fn delay(&self) -> MillisDelay {
        MillisDelay { millis: *self }
    }
}

impl Clock for Millis {
    fn millis(&self) -> u32 {
        avr_device::interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

/// Busy-wait delay on the millisecond counter
pub struct MillisDelay {
    millis: Millis,
}

impl DelayMs<u16> for MillisDelay {
    fn delay_ms(&mut self, ms: u16) {
        let start = self.millis.millis();
        while self.millis.elapsed_since(start) < u32::from(ms) {}
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    avr_device::interrupt::free(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}
