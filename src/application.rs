//! Top level game controller.
//!
//! `Game::tick` is called from the main loop forever. Each call first runs the
//! start switch toggle check and then the state specific step, in that order.
//! Both may react to the same switch position within one tick.

use crate::config::{BUTTON_REGION, FINAL_HOLD_MS, ROUND_TIMEOUT_MS, TOTAL_ROUNDS};
use crate::drivers::{blank_region, ChannelDriver, Clock, DebouncedButton};
use crate::error::Error;
use crate::game::{register_hit, select_targets, GameSession, GameState, Player, Selection};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;
use rand_core::RngCore;
use ufmt::{uDisplay, uWrite, Formatter};

/// Named state changes, reported by `tick`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Switch turned on: straight to the game, nothing is reset
    ForceGameFromToggle,
    /// Switch turned off: back to idle with a full reset and blank buttons
    ForceIdleFromToggle,
    /// Start seen while idle: reset and restart the round timer
    EnterGameFromIdleCase,
    /// No hit for `ROUND_TIMEOUT_MS`; scores are kept
    RoundTimeout,
    /// Last round played
    GameFinished,
    /// `FINAL_HOLD_MS` spent in the final state
    FinalHoldElapsed,
}

impl Transition {
    pub fn target(self) -> GameState {
        match self {
            Transition::ForceGameFromToggle | Transition::EnterGameFromIdleCase => GameState::Game,
            Transition::GameFinished => GameState::Final,
            Transition::ForceIdleFromToggle
            | Transition::RoundTimeout
            | Transition::FinalHoldElapsed => GameState::Idle,
        }
    }
}

impl uDisplay for Transition {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let name = match self {
            Transition::ForceGameFromToggle => "switch on",
            Transition::ForceIdleFromToggle => "switch off",
            Transition::EnterGameFromIdleCase => "start",
            Transition::RoundTimeout => "round timeout",
            Transition::GameFinished => "game finished",
            Transition::FinalHoldElapsed => "final hold elapsed",
        };
        ufmt::uwrite!(f, "{} -> {}", name, self.target())
    }
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub toggle: Option<Transition>,
    pub step: Option<Transition>,
    pub hit: Option<Player>,
    pub armed: Option<Selection>,
}

impl TickReport {
    pub fn is_quiet(&self) -> bool {
        self.toggle.is_none() && self.step.is_none() && self.hit.is_none() && self.armed.is_none()
    }
}

/// Collaborators the controller polls and drives
pub struct Board<P1, P2, S, CH, CLK, DL, R> {
    pub player1: DebouncedButton<P1>,
    pub player2: DebouncedButton<P2>,
    pub start: DebouncedButton<S>,
    pub channels: CH,
    pub clock: CLK,
    pub delay: DL,
    pub rng: R,
}

pub struct Game<P1, P2, S, CH, CLK, DL, R> {
    session: GameSession,
    board: Board<P1, P2, S, CH, CLK, DL, R>,
}

impl<P1, P2, S, CH, CLK, DL, R> Game<P1, P2, S, CH, CLK, DL, R>
where
    P1: InputPin,
    P2: InputPin,
    S: InputPin,
    CH: ChannelDriver,
    CLK: Clock,
    DL: DelayMs<u16>,
    R: RngCore,
{
    pub fn new(board: Board<P1, P2, S, CH, CLK, DL, R>) -> Self {
        Self {
            session: GameSession::new(),
            board,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn board(&self) -> &Board<P1, P2, S, CH, CLK, DL, R> {
        &self.board
    }

    /// Run one pass of the control loop
    pub fn tick(&mut self) -> Result<TickReport, Error> {
        let mut report = TickReport {
            toggle: self.check_toggle()?,
            ..TickReport::default()
        };

        match self.session.state {
            GameState::Idle => {
                if self.start_pressed()? {
                    report.step = Some(self.enter_game_from_idle_case());
                }
            }
            GameState::Game => self.step_game(&mut report)?,
            GameState::Final => {
                blank_region(&mut self.board.channels, BUTTON_REGION);

                if self.board.clock.elapsed_since(self.session.idle_timer) > FINAL_HOLD_MS {
                    self.session.state = GameState::Idle;
                    report.step = Some(Transition::FinalHoldElapsed);
                }
            }
        }

        Ok(report)
    }

    // Edge detection on the start switch. The switch is sampled again for
    // the release check whenever the press check does not fire.
    fn check_toggle(&mut self) -> Result<Option<Transition>, Error> {
        if self.start_pressed()? && !self.session.switch_on {
            return Ok(Some(self.force_game_from_toggle()));
        }

        if !self.start_pressed()? && self.session.switch_on {
            return Ok(Some(self.force_idle_from_toggle()));
        }

        Ok(None)
    }

    fn force_game_from_toggle(&mut self) -> Transition {
        self.session.state = GameState::Game;
        self.session.switch_on = true;
        Transition::ForceGameFromToggle
    }

    fn force_idle_from_toggle(&mut self) -> Transition {
        self.session.state = GameState::Idle;
        self.session.reset(&mut self.board.channels);
        blank_region(&mut self.board.channels, BUTTON_REGION);
        self.session.switch_on = false;
        Transition::ForceIdleFromToggle
    }

    fn enter_game_from_idle_case(&mut self) -> Transition {
        self.session.state = GameState::Game;
        self.session.round_timer = self.board.clock.millis();
        self.session.reset(&mut self.board.channels);
        Transition::EnterGameFromIdleCase
    }

    fn step_game(&mut self, report: &mut TickReport) -> Result<(), Error> {
        if self.session.current_round >= TOTAL_ROUNDS {
            self.session.state = GameState::Final;
            blank_region(&mut self.board.channels, BUTTON_REGION);
            self.session.idle_timer = self.board.clock.millis();
            report.step = Some(Transition::GameFinished);
            return Ok(());
        }

        if self.board.clock.elapsed_since(self.session.round_timer) > ROUND_TIMEOUT_MS {
            self.session.state = GameState::Idle;
            blank_region(&mut self.board.channels, BUTTON_REGION);
            report.step = Some(Transition::RoundTimeout);
            return Ok(());
        }

        if self.session.round_in_progress {
            let board = &mut self.board;
            report.hit = register_hit(
                &mut self.session,
                &board.player1,
                &board.player2,
                &mut board.delay,
                &mut board.channels,
            )?;
            if report.hit.is_some() {
                self.session.round_timer = self.board.clock.millis();
            }
        } else {
            self.session.round_timer = self.board.clock.millis();
            let selection = select_targets(
                &mut self.board.channels,
                &mut self.board.rng,
                self.session.last_selection,
            );
            self.session.last_selection = selection;
            self.session.round_in_progress = true;
            report.armed = Some(selection);
        }

        Ok(())
    }

    fn start_pressed(&mut self) -> Result<bool, Error> {
        self.board.start.is_pressed(&mut self.board.delay)
    }
}
