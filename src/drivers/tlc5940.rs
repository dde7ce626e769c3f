//! Bit-banged driver for a chain of TLC5940 16 channel LED drivers.
//!
//! The grayscale clock and the periodic BLANK pulse that restarts each PWM
//! cycle are hardware timers set up by the board; this driver only owns the
//! serial data path. VPRG is expected to be tied low (grayscale mode).

use crate::config::{CHANNEL_COUNT, MAX_INTENSITY};
use crate::drivers::ChannelDriver;
use embedded_hal::digital::v2::OutputPin;

const GRAYSCALE_BITS: u8 = 12;

pub struct Tlc5940<SIN, SCLK, XLAT, BLANK> {
    sin: SIN,
    sclk: SCLK,
    xlat: XLAT,
    blank: BLANK,
    grayscale: [u16; CHANNEL_COUNT],
}

impl<SIN, SCLK, XLAT, BLANK> Tlc5940<SIN, SCLK, XLAT, BLANK>
where
    SIN: OutputPin,
    SCLK: OutputPin,
    XLAT: OutputPin,
    BLANK: OutputPin,
{
    pub fn new(sin: SIN, sclk: SCLK, xlat: XLAT, blank: BLANK) -> Self {
        Self {
            sin,
            sclk,
            xlat,
            blank,
            grayscale: [0; CHANNEL_COUNT],
        }
    }

    /// Put the chain in a known state with every channel at `value`
    pub fn init(&mut self, value: u16) {
        self.sclk.set_low().ok();
        self.xlat.set_low().ok();
        self.blank.set_high().ok();

        let value = value.min(MAX_INTENSITY);
        self.grayscale.iter_mut().for_each(|gs| *gs = value);
        self.update();
    }

    /// Buffered value of `channel`, not necessarily latched yet
    pub fn get(&self, channel: u8) -> u16 {
        self.grayscale.get(usize::from(channel)).copied().unwrap_or(0)
    }

    // The last chip in the chain receives the first bits, so the highest
    // channel goes out first, MSB first.
    fn shift_out(&mut self) {
        for channel in (0..CHANNEL_COUNT).rev() {
            let value = self.grayscale[channel];
            for bit in (0..GRAYSCALE_BITS).rev() {
                if (value >> bit) & 1 == 1 {
                    self.sin.set_high().ok();
                } else {
                    self.sin.set_low().ok();
                }
                self.sclk.set_high().ok();
                self.sclk.set_low().ok();
            }
        }
    }

    // XLAT is pulsed from software at an arbitrary point of the grayscale
    // cycle, not inside the Timer1 BLANK pulse, so the first cycle after an
    // update can show a partial frame. Harmless for a game that redraws on
    // button events; syncing would mean latching from the Timer1 overflow.
    fn latch(&mut self) {
        self.blank.set_high().ok();
        self.xlat.set_high().ok();
        self.xlat.set_low().ok();
        self.blank.set_low().ok();
    }
}

impl<SIN, SCLK, XLAT, BLANK> ChannelDriver for Tlc5940<SIN, SCLK, XLAT, BLANK>
where
    SIN: OutputPin,
    SCLK: OutputPin,
    XLAT: OutputPin,
    BLANK: OutputPin,
{
    fn set(&mut self, channel: u8, value: u16) {
        if let Some(gs) = self.grayscale.get_mut(usize::from(channel)) {
            *gs = value.min(MAX_INTENSITY);
        }
    }

    fn update(&mut self) {
        self.shift_out();
        self.latch();
    }
}
