use crate::config::DEBOUNCE_MS;
use crate::error::Error;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// Active-low push button or switch confirmed by a second sample.
pub struct DebouncedButton<P> {
    pin: P,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Sample the pin; a low level must still be low after `DEBOUNCE_MS`
    /// to count as a press. Blocks for the debounce period only when the
    /// first sample is low.
    pub fn is_pressed<D: DelayMs<u16>>(&self, delay: &mut D) -> Result<bool, Error> {
        if self.is_low()? {
            delay.delay_ms(DEBOUNCE_MS);
            return self.is_low();
        }

        Ok(false)
    }

    fn is_low(&self) -> Result<bool, Error> {
        self.pin.is_low().map_err(|_| Error::Input)
    }
}
