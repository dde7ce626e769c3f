pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod serial_console;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel};
pub use gpio::board;
pub use pwm::TlcClock;
pub use serial_console::SerialConsole;
pub use timer::{Millis, MillisDelay};
