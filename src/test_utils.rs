use crate::config::{CHANNEL_COUNT, MAX_INTENSITY, SEGMENT_COUNT};
use crate::drivers::{ChannelDriver, Clock};
use crate::game::display::{DigitPosition, DIGIT_PATTERNS};
use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

/// Channel driver that keeps both the buffered and the flushed frame
pub struct RecordingChannels {
    pub pending: [u16; CHANNEL_COUNT],
    pub committed: [u16; CHANNEL_COUNT],
    pub writes: Vec<(u8, u16)>,
    pub flushes: usize,
}

impl RecordingChannels {
    pub fn new() -> Self {
        Self {
            pending: [0; CHANNEL_COUNT],
            committed: [0; CHANNEL_COUNT],
            writes: Vec::new(),
            flushes: 0,
        }
    }
}

impl ChannelDriver for RecordingChannels {
    fn set(&mut self, channel: u8, value: u16) {
        self.writes.push((channel, value));
        self.pending[usize::from(channel)] = value.min(MAX_INTENSITY);
    }

    fn update(&mut self) {
        self.committed = self.pending;
        self.flushes += 1;
    }
}

/// True if the flushed frame shows `digit` at `position`
pub fn shows_digit(frame: &[u16; CHANNEL_COUNT], position: DigitPosition, digit: u8) -> bool {
    let base = usize::from(position.base_channel());
    let pattern = DIGIT_PATTERNS[usize::from(digit)];

    (0..usize::from(SEGMENT_COUNT)).all(|segment| {
        let off = pattern & (1 << segment) != 0;
        let level = frame[base + segment];
        if off {
            level == 0
        } else {
            level == MAX_INTENSITY
        }
    })
}

/// Shared simulated millisecond clock
#[derive(Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<u32>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// A delay that moves this clock forward instead of sleeping
    pub fn delay(&self) -> SimDelay {
        SimDelay {
            now: self.now.clone(),
        }
    }
}

impl Clock for SimClock {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}

pub struct SimDelay {
    now: Rc<Cell<u32>>,
}

impl DelayMs<u16> for SimDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.now.set(self.now.get().wrapping_add(u32::from(ms)));
    }
}

/// Pull-up input whose level the test flips
#[derive(Clone, Default)]
pub struct SimPin {
    low: Rc<Cell<bool>>,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self) {
        self.low.set(true);
    }

    pub fn release(&self) {
        self.low.set(false);
    }
}

impl InputPin for SimPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.low.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.low.get())
    }
}

/// Collects `ufmt` output
#[derive(Default)]
pub struct TextSink(String);

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ufmt::uWrite for TextSink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}
