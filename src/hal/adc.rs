use avr_device::atmega328p::ADC;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
}

pub struct Adc {
    adc: ADC,
}

impl Adc {
    pub fn new(adc: ADC) -> Self {
        unsafe {
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            adc.adcsra.write(|w| w.bits(0x87));
            // Reference voltage = AVCC
            adc.admux.write(|w| w.bits(0x40));
        }
        Self { adc }
    }

    pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
        unsafe {
            // Select channel
            self.adc
                .admux
                .modify(|r, w| w.bits((r.bits() & 0xF0) | (channel as u8)));

            // Start conversion
            self.adc.adcsra.modify(|r, w| w.bits(r.bits() | 0x40));
        }

        // Wait for completion
        while self.adc.adcsra.read().bits() & 0x40 != 0 {}

        self.adc.adc.read().bits()
    }

    /// Fold the noise of an unconnected input into a generator seed
    pub fn noise_seed(&mut self, channel: AdcChannel) -> u32 {
        (0..16).fold(0u32, |seed, _| {
            seed.rotate_left(5) ^ u32::from(self.read_channel(channel))
        })
    }
}
