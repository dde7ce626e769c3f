/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since start-up, wrapping at `u32::MAX`
    fn millis(&self) -> u32;

    /// Milliseconds elapsed since `timestamp`, tolerant of wrap-around
    fn elapsed_since(&self, timestamp: u32) -> u32 {
        self.millis().wrapping_sub(timestamp)
    }
}
