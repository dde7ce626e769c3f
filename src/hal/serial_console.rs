use super::uart::Uart;
use avr_device::atmega328p::USART0;
use core::convert::Infallible;

/// Line oriented log output, written with `ufmt::uwriteln!`
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(usart: USART0) -> Self {
        Self {
            uart: Uart::new(usart),
        }
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            if byte == b'\n' {
                nb::block!(self.uart.write_byte(b'\r'))?;
            }
            nb::block!(self.uart.write_byte(byte))?;
        }
        Ok(())
    }
}
