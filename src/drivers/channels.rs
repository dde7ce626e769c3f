use core::ops::Range;

/// A linear array of buffered grayscale outputs.
///
/// Writes through `set` are only visible on the outputs after `update`.
pub trait ChannelDriver {
    /// Buffer a new intensity for `channel`; values above 4095 are clamped
    fn set(&mut self, channel: u8, value: u16);

    /// Commit every buffered write to the outputs
    fn update(&mut self);
}

impl<T: ChannelDriver + ?Sized> ChannelDriver for &mut T {
    fn set(&mut self, channel: u8, value: u16) {
        T::set(self, channel, value)
    }

    fn update(&mut self) {
        T::update(self)
    }
}

/// Drive every channel in `region` to zero and flush once
pub fn blank_region<D: ChannelDriver + ?Sized>(driver: &mut D, region: Range<u8>) {
    for channel in region {
        driver.set(channel, 0);
    }
    driver.update();
}
