//! Control loop
//!
//! The sequencer is the single owner of the port registers and the tick
//! source. Each loop iteration samples the button once:
//!
//! - released: LED forced off, loop continues immediately
//! - pressed: LED on/off/on with a blocking wait after each step
//!
//! The button is not looked at while the sequence runs. Releasing it
//! mid-sequence has no effect; the next sample happens after the last
//! phase completes.

use blinkseq_hal::PortRegisters;

use super::phase::{blink_sequence, BlinkPhase, PHASE_COUNT};
use crate::config::BoardConfig;
use crate::delay::Delay;
use crate::ioport::IoPort;
use crate::state::{ButtonState, ControlState};
use crate::traits::TickSource;

/// Button-to-LED sequencer
pub struct Sequencer<R, T> {
    io: IoPort<R>,
    delay: Delay<T>,
    board: BoardConfig,
    phases: [BlinkPhase; PHASE_COUNT],
}

impl<R: PortRegisters, T: TickSource> Sequencer<R, T> {
    /// Create the sequencer and configure the LED and button pins
    pub fn new(mut io: IoPort<R>, delay: Delay<T>, board: BoardConfig) -> Self {
        io.configure_as_output(board.led.port, board.led.pin);
        io.configure_as_input(board.button.port, board.button.pin);

        Self {
            io,
            delay,
            board,
            phases: blink_sequence(board.phase_ticks),
        }
    }

    /// Current button state
    pub fn button_state(&self) -> ButtonState {
        ButtonState::from_active_low(self.io.read_level(self.board.button.port, self.board.button.pin))
    }

    /// Turn the LED on
    pub fn led_on(&mut self) {
        self.io.set_high(self.board.led.port, self.board.led.pin);
    }

    /// Turn the LED off
    pub fn led_off(&mut self) {
        self.io.set_low(self.board.led.port, self.board.led.pin);
    }

    /// Run one loop iteration and report which branch was taken
    pub fn poll(&mut self) -> ControlState {
        let state = ControlState::sample(self.button_state());

        match state {
            ControlState::Idle => self.led_off(),
            ControlState::Triggered => self.run_sequence(),
        }

        state
    }

    /// Run the full blink sequence, blocking until the last phase ends
    pub fn run_sequence(&mut self) {
        for phase in self.phases {
            if phase.led_on {
                self.led_on();
            } else {
                self.led_off();
            }
            self.delay.wait_ticks(phase.ticks);
        }
    }

    /// Loop forever, calling `on_sample` after every iteration
    pub fn run<F: FnMut(ControlState)>(&mut self, mut on_sample: F) -> ! {
        loop {
            let state = self.poll();
            on_sample(state);
        }
    }

    /// The blink phases this sequencer runs
    pub fn phases(&self) -> &[BlinkPhase; PHASE_COUNT] {
        &self.phases
    }

    /// Board wiring in use
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Access the port layer
    pub fn io(&self) -> &IoPort<R> {
        &self.io
    }

    /// Take the port layer and delay back
    pub fn release(self) -> (IoPort<R>, Delay<T>) {
        (self.io, self.delay)
    }
}
