use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use reaction_duel::config::{CPU_FREQ_HZ, UART_BAUD};

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UDRE0: u8 = 1 << 5;
const TXEN0: u8 = 1 << 3;

/// Transmit-only USART0
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            // Set baud rate
            usart.ubrr0.write(|w| w.bits(UBRR));
            // 8 data bits, no parity, 1 stop bit
            usart.ucsr0c.write(|w| w.bits(0x06));
            // Enable TX
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }

        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.usart.ucsr0a.read().bits() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }

        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }
}
