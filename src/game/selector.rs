use crate::config::{BUTTON_REGION, MAX_INTENSITY, PLAYER1_BUTTONS, PLAYER2_BUTTONS};
use crate::drivers::{blank_region, ChannelDriver};
use crate::random::random_range;
use rand_core::RngCore;
use ufmt::{uDisplay, uWrite, Formatter};

/// Channels lit as targets in one round, one per player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub player1: u8,
    pub player2: u8,
}

impl Selection {
    /// Before the first round; channel 0 is outside both button ranges
    pub const NONE: Selection = Selection {
        player1: 0,
        player2: 0,
    };

    /// True when neither player gets the same button as in `previous`
    pub fn differs_from(&self, previous: &Selection) -> bool {
        self.player1 != previous.player1 && self.player2 != previous.player2
    }
}

impl uDisplay for Selection {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        ufmt::uwrite!(f, "P1@{} P2@{}", self.player1, self.player2)
    }
}

/// Pick and light a new target for each player.
///
/// Redraws both picks until each differs from that player's previous target.
/// The button region is blanked and flushed before the two targets are lit.
pub fn select_targets<D, R>(driver: &mut D, rng: &mut R, previous: Selection) -> Selection
where
    D: ChannelDriver + ?Sized,
    R: RngCore + ?Sized,
{
    let selection = loop {
        let candidate = Selection {
            player1: random_range(rng, PLAYER1_BUTTONS.start, PLAYER1_BUTTONS.end),
            player2: random_range(rng, PLAYER2_BUTTONS.start, PLAYER2_BUTTONS.end),
        };
        if candidate.differs_from(&previous) {
            break candidate;
        }
    };

    blank_region(driver, BUTTON_REGION);
    driver.set(selection.player1, MAX_INTENSITY);
    driver.set(selection.player2, MAX_INTENSITY);
    driver.update();

    selection
}
