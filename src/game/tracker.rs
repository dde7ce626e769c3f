use super::{GameSession, Player};
use crate::config::DEBOUNCE_MS;
use crate::drivers::{ChannelDriver, DebouncedButton};
use crate::error::Error;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// Check both player buttons and score the round if either was hit.
///
/// Player one is sampled first and wins a simultaneous press; player two
/// is not even sampled then. A hit settles for `DEBOUNCE_MS`, closes the
/// round, advances the round counter and redraws the score.
pub fn register_hit<P1, P2, D, CH>(
    session: &mut GameSession,
    player1: &DebouncedButton<P1>,
    player2: &DebouncedButton<P2>,
    delay: &mut D,
    channels: &mut CH,
) -> Result<Option<Player>, Error>
where
    P1: InputPin,
    P2: InputPin,
    D: DelayMs<u16>,
    CH: ChannelDriver + ?Sized,
{
    let hit = if player1.is_pressed(delay)? {
        Some(Player::One)
    } else if player2.is_pressed(delay)? {
        Some(Player::Two)
    } else {
        None
    };

    if let Some(player) = hit {
        session.award(player);
        delay.delay_ms(DEBOUNCE_MS);
        session.round_in_progress = false;
        session.current_round += 1;
        session.show_scores(channels);
    }

    Ok(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DigitPosition;
    use crate::test_utils::{shows_digit, RecordingChannels};
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    fn armed_session() -> GameSession {
        let mut session = GameSession::new();
        session.round_in_progress = true;
        session
    }

    #[test]
    fn player_one_wins_simultaneous_press() {
        let mut p1 = PinMock::new(&[
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
        ]);
        let never_sampled: [PinTransaction; 0] = [];
        let mut p2 = PinMock::new(&never_sampled);
        let mut channels = RecordingChannels::new();
        let mut session = armed_session();

        let hit = register_hit(
            &mut session,
            &DebouncedButton::new(p1.clone()),
            &DebouncedButton::new(p2.clone()),
            &mut MockNoop::new(),
            &mut channels,
        );

        assert_eq!(hit, Ok(Some(Player::One)));
        assert_eq!(session.score(Player::One), 1);
        assert_eq!(session.score(Player::Two), 0);
        p1.done();
        p2.done();
    }

    #[test]
    fn player_two_scores_when_player_one_is_idle() {
        let mut p1 = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let mut p2 = PinMock::new(&[
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::Low),
        ]);
        let mut channels = RecordingChannels::new();
        let mut session = armed_session();

        let hit = register_hit(
            &mut session,
            &DebouncedButton::new(p1.clone()),
            &DebouncedButton::new(p2.clone()),
            &mut MockNoop::new(),
            &mut channels,
        );

        assert_eq!(hit, Ok(Some(Player::Two)));
        assert_eq!(session.score(Player::Two), 1);
        assert_eq!(session.current_round(), 2);
        assert!(!session.is_round_in_progress());
        assert_eq!(channels.flushes, 1);
        assert!(shows_digit(&channels.committed, DigitPosition::Second, 1));
        assert!(shows_digit(&channels.committed, DigitPosition::Fourth, 0));
        p1.done();
        p2.done();
    }

    #[test]
    fn no_press_leaves_state_untouched() {
        let mut p1 = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let mut p2 = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let mut channels = RecordingChannels::new();
        let mut session = armed_session();

        let hit = register_hit(
            &mut session,
            &DebouncedButton::new(p1.clone()),
            &DebouncedButton::new(p2.clone()),
            &mut MockNoop::new(),
            &mut channels,
        );

        assert_eq!(hit, Ok(None));
        assert_eq!(session.current_round(), 1);
        assert!(session.is_round_in_progress());
        assert_eq!(channels.flushes, 0);
        p1.done();
        p2.done();
    }

    #[test]
    fn hit_settles_before_returning() {
        use crate::test_utils::{SimClock, SimPin};

        let clock = SimClock::new();
        let p1 = SimPin::new();
        let p2 = SimPin::new();
        p1.press();
        let mut channels = RecordingChannels::new();
        let mut session = armed_session();

        let hit = register_hit(
            &mut session,
            &DebouncedButton::new(p1),
            &DebouncedButton::new(p2),
            &mut clock.delay(),
            &mut channels,
        );

        assert_eq!(hit, Ok(Some(Player::One)));
        // Confirmation delay plus settle delay
        assert_eq!(clock.now(), 2 * u32::from(DEBOUNCE_MS));
    }
}
