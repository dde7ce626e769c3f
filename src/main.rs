#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod hal;

#[cfg(target_arch = "avr")]
mod firmware {
    use crate::hal::board::{
        Player1Button, Player2Button, StartSwitch, TlcBlank, TlcGsclk, TlcSclk, TlcSin, TlcXlat,
    };
    use crate::hal::{Adc, AdcChannel, Millis, SerialConsole, TlcClock};
    use avr_device::atmega328p::Peripherals;
    use panic_halt as _;
    use rand_core::SeedableRng;
    use reaction_duel::drivers::{DebouncedButton, Tlc5940};
    use reaction_duel::random::XorShift32;
    use reaction_duel::{Board, Game, GameSession, Player, TickReport};
    use ufmt::uwriteln;

    pub fn run() -> ! {
        let dp = Peripherals::take().unwrap();

        let mut console = SerialConsole::new(dp.USART0);
        let millis = Millis::start(dp.TC0);

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        let seed = Adc::new(dp.ADC).noise_seed(AdcChannel::Adc0);

        let mut tlc = Tlc5940::new(
            TlcSin::default().into_output(),
            TlcSclk::default().into_output(),
            TlcXlat::default().into_output(),
            TlcBlank::default().into_output(),
        );
        tlc.init(0);
        let _gsclk = TlcGsclk::default().into_output();
        let _clock = TlcClock::start(dp.TC1, dp.TC2);

        let mut game = Game::new(Board {
            player1: DebouncedButton::new(Player1Button::default().into_pull_up_input()),
            player2: DebouncedButton::new(Player2Button::default().into_pull_up_input()),
            start: DebouncedButton::new(StartSwitch::default().into_pull_up_input()),
            channels: tlc,
            clock: millis,
            delay: millis.delay(),
            rng: XorShift32::from_seed(seed.to_le_bytes()),
        });

        uwriteln!(console, "Reaction duel v0.1.0 (seed {})", seed).ok();
        uwriteln!(console, "Ready...").ok();

        loop {
            match game.tick() {
                Ok(report) => log_report(&mut console, &report, game.session()),
                Err(err) => {
                    uwriteln!(console, "[ERR] {:?}", err).ok();
                }
            }
        }
    }

    fn log_report(console: &mut SerialConsole, report: &TickReport, session: &GameSession) {
        if report.is_quiet() {
            return;
        }

        if let Some(transition) = report.toggle {
            uwriteln!(console, "[GAME] {}", transition).ok();
        }
        if let Some(transition) = report.step {
            uwriteln!(console, "[GAME] {}", transition).ok();
        }
        if let Some(player) = report.hit {
            uwriteln!(
                console,
                "[GAME] {} hit, score {}:{}, round {}",
                player,
                session.score(Player::One),
                session.score(Player::Two),
                session.current_round()
            )
            .ok();
        }

        #[cfg(feature = "debug")]
        if let Some(selection) = report.armed {
            uwriteln!(console, "[DBG] armed {}", selection).ok();
        }
    }
}

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    firmware::run()
}

// Host builds only exist so the library tests can run
#[cfg(not(target_arch = "avr"))]
fn main() {}
