use avr_device::atmega328p::{PORTB, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Floating;
pub struct PullUpInput;
pub struct Output;
impl PinMode for Floating {}
impl PinMode for PullUpInput {}
impl PinMode for Output {}

pub struct Pin<PORT, const P: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

// Pins come out of reset as floating inputs
impl<PORT, const P: u8> Default for Pin<PORT, P, Floating> {
    fn default() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $pin:ident, $ddr:ident, $port:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }

            pub fn into_pull_up_input(self) -> Pin<$PORT, P, PullUpInput> {
                // Clear DDRx bit and enable pull-up
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, PullUpInput> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Self::Error> {
                Ok(unsafe { (*$PORT::ptr()).$pin.read().bits() } & (1 << P) != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Self::Error> {
                self.is_high().map(|high| !high)
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Self::Error> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Self::Error> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Ok(())
            }
        }
    };
}

impl_port!(PORTB, pinb, ddrb, portb);
impl_port!(PORTD, pind, ddrd, portd);

// Uno pin definitions
pub mod board {
    use super::*;

    // Buttons and the start switch short to ground (D6, D7, D2)
    pub type Player1Button = Pin<PORTD, 6, Floating>;
    pub type Player2Button = Pin<PORTD, 7, Floating>;
    pub type StartSwitch = Pin<PORTD, 2, Floating>;

    // TLC5940 chain (D11, D13, D9, D10, D3)
    pub type TlcSin = Pin<PORTB, 3, Floating>;
    pub type TlcSclk = Pin<PORTB, 5, Floating>;
    pub type TlcXlat = Pin<PORTB, 1, Floating>;
    pub type TlcBlank = Pin<PORTB, 2, Floating>;
    pub type TlcGsclk = Pin<PORTD, 3, Floating>;
}
