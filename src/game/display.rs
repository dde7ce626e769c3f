//! Seven segment score display rendered onto the first two driver chips.

use crate::config::{DIGIT_OFFSETS, MAX_INTENSITY, SEGMENT_COUNT};
use crate::drivers::ChannelDriver;

/// Segment patterns for 0-9, segment `n` is bit `n` (read right to left).
/// A set bit switches the segment off.
pub const DIGIT_PATTERNS: [u8; 10] = [
    0b0111_1110,
    0b0000_1100,
    0b1011_0110,
    0b1001_1110,
    0b1100_1100,
    0b1101_1010,
    0b1111_1010,
    0b0000_1110,
    0b1111_1110,
    0b1101_1110,
];

/// Digit slots, left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DigitPosition {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl DigitPosition {
    /// Channel driving segment 0 of this digit
    pub fn base_channel(self) -> u8 {
        DIGIT_OFFSETS[self as usize]
    }
}

pub fn tens(score: u8) -> u8 {
    (score - units(score)) / 10
}

pub fn units(score: u8) -> u8 {
    score % 10
}

/// Buffer the segments of `digit` (0-9) at `position`. Does not flush.
pub fn display_digit<D: ChannelDriver + ?Sized>(driver: &mut D, digit: u8, position: DigitPosition) {
    debug_assert!(digit <= 9, "digit out of range");

    let mut pattern = DIGIT_PATTERNS[usize::from(digit)];
    let base = position.base_channel();

    for channel in base..base + SEGMENT_COUNT {
        let level = if pattern & 1 == 1 { 0 } else { MAX_INTENSITY };
        driver.set(channel, level);
        pattern >>= 1;
    }
}

/// Show both scores (each 0-99) as "P2 P2 P1 P1" and flush once.
pub fn display_score<D: ChannelDriver + ?Sized>(driver: &mut D, player1: u8, player2: u8) {
    display_digit(driver, tens(player2), DigitPosition::First);
    display_digit(driver, units(player2), DigitPosition::Second);
    display_digit(driver, tens(player1), DigitPosition::Third);
    display_digit(driver, units(player1), DigitPosition::Fourth);
    driver.update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{shows_digit, RecordingChannels};

    const POSITIONS: [DigitPosition; 4] = [
        DigitPosition::First,
        DigitPosition::Second,
        DigitPosition::Third,
        DigitPosition::Fourth,
    ];

    #[test]
    fn every_digit_writes_seven_inverted_segments() {
        for digit in 0..=9u8 {
            let mut channels = RecordingChannels::new();
            display_digit(&mut channels, digit, DigitPosition::Third);

            assert_eq!(channels.writes.len(), 7);
            assert_eq!(channels.flushes, 0);

            for (segment, &(channel, level)) in channels.writes.iter().enumerate() {
                assert_eq!(channel, 16 + segment as u8);
                let off = DIGIT_PATTERNS[usize::from(digit)] & (1 << segment) != 0;
                assert_eq!(level, if off { 0 } else { MAX_INTENSITY });
            }
        }
    }

    // Only seven bits of each pattern reach the display, so 0 and 8 share a shape
    #[test]
    fn eight_lights_only_segment_zero() {
        let mut channels = RecordingChannels::new();
        display_digit(&mut channels, 8, DigitPosition::First);

        let lit: Vec<u8> = channels
            .writes
            .iter()
            .filter(|&&(_, level)| level == MAX_INTENSITY)
            .map(|&(channel, _)| channel)
            .collect();
        assert_eq!(lit, [0]);
    }

    #[test]
    fn positions_map_to_fixed_offsets() {
        let bases: Vec<u8> = POSITIONS.iter().map(|p| p.base_channel()).collect();
        assert_eq!(bases, [0, 7, 16, 23]);
    }

    #[test]
    fn tens_and_units_cover_two_digit_scores() {
        for score in 0..=99u8 {
            assert_eq!(tens(score), (score - score % 10) / 10);
            assert_eq!(units(score), score % 10);
            assert_eq!(tens(score) * 10 + units(score), score);
        }
        assert_eq!(tens(47), 4);
        assert_eq!(units(47), 7);
    }

    #[test]
    fn score_renders_second_player_on_the_left() {
        let mut channels = RecordingChannels::new();
        display_score(&mut channels, 1, 42);

        assert_eq!(channels.flushes, 1);
        assert_eq!(channels.writes.len(), 28);

        for (&position, digit) in POSITIONS.iter().zip([4, 2, 0, 1]) {
            assert!(shows_digit(&channels.committed, position, digit));
        }
        assert!(!shows_digit(&channels.committed, DigitPosition::Fourth, 2));
    }

    #[test]
    fn score_leaves_button_region_alone() {
        let mut channels = RecordingChannels::new();
        display_score(&mut channels, 99, 99);

        assert!(channels.writes.iter().all(|&(channel, _)| channel < 30));
    }
}
