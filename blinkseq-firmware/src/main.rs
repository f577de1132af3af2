//! blinkseq - Push-button LED Sequencer Firmware
//!
//! Main firmware binary for the ATmega168PB Xplained Mini. Pressing the
//! board button blinks the LED on/off/on for 10 s each; otherwise the LED
//! stays off. Everything runs in one polled loop, no interrupts.

#![no_std]
#![no_main]

use panic_halt as _;
use ufmt::uwriteln;

use blinkseq_core::config::{BoardConfig, TimerConfig};
use blinkseq_core::delay::{CounterTick, Delay};
use blinkseq_core::ioport::IoPort;
use blinkseq_core::sequencer::Sequencer;
use blinkseq_core::state::ControlState;
use blinkseq_hal_atmega::gpio::AtmegaPorts;
use blinkseq_hal_atmega::pac;
use blinkseq_hal_atmega::timer::Timer0;
use blinkseq_hal_atmega::uart::{UartConfig, Usart0};

mod console;

/// Board wiring (LED PB5, button PB7, 1000-tick phases)
const BOARD: BoardConfig = BoardConfig::XPLAINED_MINI;

/// Tick timer clocking (16 MHz, ÷1024)
const TIMER: TimerConfig = TimerConfig::XPLAINED_MINI;

/// Main entry point
#[avr_device::entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    let mut log = Usart0::new(
        dp.USART0,
        UartConfig {
            cpu_hz: TIMER.cpu_hz,
            ..UartConfig::default()
        },
    );
    uwriteln!(&mut log, "blinkseq starting...").ok();

    let tick = match BOARD
        .validate()
        .and(CounterTick::new(Timer0::new(dp.TC0), TIMER))
    {
        Ok(tick) => tick,
        Err(e) => {
            console::config_error(&mut log, e);
            // Pins untouched: LED pin stays an input, LED off
            loop {}
        }
    };
    console::config_summary(&mut log, &BOARD, &TIMER);

    let io = IoPort::new(AtmegaPorts::new(dp.PORTB, dp.PORTC, dp.PORTD, dp.PORTE));
    let delay = Delay::new(tick);
    let mut sequencer = Sequencer::new(io, delay, BOARD);
    uwriteln!(&mut log, "pins configured, polling button").ok();

    let mut last = None;
    sequencer.run(|state| {
        match state {
            ControlState::Triggered => {
                uwriteln!(&mut log, "{}: sequence complete", state.as_str()).ok();
            }
            ControlState::Idle if last != Some(ControlState::Idle) => {
                uwriteln!(&mut log, "{}", state.as_str()).ok();
            }
            ControlState::Idle => {}
        }
        last = Some(state);
    })
}
