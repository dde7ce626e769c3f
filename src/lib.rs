//! Reaction duel game core.
//!
//! Two players race to hit the button lit for them; the first confirmed hit
//! scores the round. Button LEDs and the four digit score display share one
//! chain of TLC5940 LED drivers. Everything here is hardware agnostic and
//! driven through `embedded-hal` traits plus the small capability traits in
//! [`drivers`] and [`random`].

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod game;
pub mod random;

#[cfg(test)]
mod test_utils;

pub use application::{Board, Game, TickReport, Transition};
pub use error::Error;
pub use game::{GameSession, GameState, Player, Selection};
