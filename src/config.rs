//! Configuration constants for the reaction duel firmware

use core::ops::Range;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Output channels per TLC5940
pub const TLC_PIN_COUNT: u8 = 16;

/// Number of chained TLC5940s
pub const TLC_COUNT: u8 = 3;

/// Total number of addressable output channels
pub const CHANNEL_COUNT: usize = (TLC_COUNT * TLC_PIN_COUNT) as usize;

/// Full scale grayscale value of a channel
pub const MAX_INTENSITY: u16 = 4095;

/// 1-based index of the chip that drives the button LEDs
pub const BUTTON_TLC_ID: u8 = 3;

pub const BUTTON_REGION_END: u8 = BUTTON_TLC_ID * TLC_PIN_COUNT;
pub const BUTTON_REGION_START: u8 = BUTTON_REGION_END - TLC_PIN_COUNT;

/// Channels of the button/display region, blanked as a whole
pub const BUTTON_REGION: Range<u8> = BUTTON_REGION_START..BUTTON_REGION_END;

/// Buttons owned by each player inside the button region
pub const PLAYER_BUTTON_COUNT: u8 = 8;

pub const PLAYER1_BUTTONS: Range<u8> = BUTTON_REGION_START..BUTTON_REGION_START + PLAYER_BUTTON_COUNT;
pub const PLAYER2_BUTTONS: Range<u8> = BUTTON_REGION_START + PLAYER_BUTTON_COUNT..BUTTON_REGION_END;

/// Channels per seven segment digit
pub const SEGMENT_COUNT: u8 = 7;

/// First channel of each digit, indexed by position 1..=4 (0 aliases 1)
pub const DIGIT_OFFSETS: [u8; 5] = [0, 0, 7, 16, 23];

/// Rounds per session; the game ends when the round counter reaches it
pub const TOTAL_ROUNDS: u8 = 10;

/// Press confirmation and post-hit settle time in milliseconds
pub const DEBOUNCE_MS: u16 = 10;

/// Inactivity period after which a running game is abandoned
pub const ROUND_TIMEOUT_MS: u32 = 50_000;

/// Time the final state is held before returning to idle
pub const FINAL_HOLD_MS: u32 = 10_000;

/// Seed used when the analog noise sample happens to be zero
pub const FALLBACK_SEED: u32 = 0x2545_F491;
