//! Game core: session state and the components the controller drives.

pub mod display;
pub mod selector;
pub mod tracker;

use crate::drivers::ChannelDriver;
use ufmt::{uDisplay, uWrite, Formatter};

pub use display::{display_digit, display_score, DigitPosition};
pub use selector::{select_targets, Selection};
pub use tracker::register_hit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Game,
    Final,
}

impl uDisplay for GameState {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            GameState::Idle => "IDLE",
            GameState::Game => "GAME",
            GameState::Final => "FINAL",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl uDisplay for Player {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            Player::One => "P1",
            Player::Two => "P2",
        })
    }
}

/// Everything that changes while the game runs
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) state: GameState,
    pub(crate) current_round: u8,
    pub(crate) round_in_progress: bool,
    pub(crate) player1_score: u8,
    pub(crate) player2_score: u8,
    /// Timestamp of the last round activity, for the inactivity timeout
    pub(crate) round_timer: u32,
    /// Timestamp of entering the final state
    pub(crate) idle_timer: u32,
    /// Start switch position as last seen by the toggle check
    pub(crate) switch_on: bool,
    pub(crate) last_selection: Selection,
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            state: GameState::Idle,
            current_round: 1,
            round_in_progress: false,
            player1_score: 0,
            player2_score: 0,
            round_timer: 0,
            idle_timer: 0,
            switch_on: false,
            last_selection: Selection::NONE,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    pub fn is_round_in_progress(&self) -> bool {
        self.round_in_progress
    }

    pub fn score(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    pub fn last_selection(&self) -> Selection {
        self.last_selection
    }

    pub fn is_switch_on(&self) -> bool {
        self.switch_on
    }

    /// Back to round 1 with zero scores, shown on the display.
    /// Timers, the switch flag and the last selection are kept.
    pub fn reset<D: ChannelDriver + ?Sized>(&mut self, channels: &mut D) {
        self.current_round = 1;
        self.round_in_progress = false;
        self.player1_score = 0;
        self.player2_score = 0;
        display_score(channels, 0, 0);
    }

    pub fn show_scores<D: ChannelDriver + ?Sized>(&self, channels: &mut D) {
        display_score(channels, self.player1_score, self.player2_score);
    }

    pub(crate) fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player1_score += 1,
            Player::Two => self.player2_score += 1,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
