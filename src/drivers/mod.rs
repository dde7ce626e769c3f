pub mod button_handler;
pub mod channels;
pub mod clock;
pub mod tlc5940;

pub use button_handler::DebouncedButton;
pub use channels::{blank_region, ChannelDriver};
pub use clock::Clock;
pub use tlc5940::Tlc5940;
