//! Simulated board for host-side testing
//!
//! [`SimBoard`] holds a register file for every port plus a tick counter.
//! [`SimPorts`] and [`SimClock`] are lightweight handles borrowing the
//! board, so the sequencer can own its hardware handles while a test
//! keeps inspecting the same state.
//!
//! The input register behaves like AVR PINx: output pins read back what
//! was last driven, input pins read the externally applied level. All
//! external levels start high (pull-ups).

use core::cell::{Cell, RefCell};

use blinkseq_hal::{Port, PortRegister, PortRegisters};
use heapless::Vec;

use crate::traits::TickSource;

/// Number of output-register changes kept in the trace
pub const TRACE_CAPACITY: usize = 64;

/// An output register change, stamped with the tick count at the time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputChange {
    /// Ticks elapsed when the write happened
    pub tick: u32,
    /// Port whose output register changed
    pub port: Port,
    /// New output register value
    pub value: u8,
}

impl OutputChange {
    /// Level of one pin after this change
    pub fn pin_high(&self, pin: u8) -> bool {
        self.value & (1 << pin) != 0
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledInput {
    at_tick: u32,
    port: Port,
    pin: u8,
    high: bool,
}

/// Simulated port registers and clock
pub struct SimBoard {
    direction: [Cell<u8>; Port::COUNT],
    output: [Cell<u8>; Port::COUNT],
    external: [Cell<u8>; Port::COUNT],
    ticks: Cell<u32>,
    writes: Cell<u32>,
    trace: RefCell<Vec<OutputChange, TRACE_CAPACITY>>,
    truncated: Cell<bool>,
    scheduled: Cell<Option<ScheduledInput>>,
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBoard {
    /// Create a board with all pins as inputs, outputs low, inputs pulled high
    pub fn new() -> Self {
        Self {
            direction: Default::default(),
            output: Default::default(),
            external: [
                Cell::new(0xFF),
                Cell::new(0xFF),
                Cell::new(0xFF),
                Cell::new(0xFF),
            ],
            ticks: Cell::new(0),
            writes: Cell::new(0),
            trace: RefCell::new(Vec::new()),
            truncated: Cell::new(false),
            scheduled: Cell::new(None),
        }
    }

    /// Handle to the port registers
    pub fn ports(&self) -> SimPorts<'_> {
        SimPorts { board: self }
    }

    /// Handle to the tick clock
    pub fn clock(&self) -> SimClock<'_> {
        SimClock { board: self }
    }

    /// Drive a pin from outside the chip
    ///
    /// Only visible in the input register while the pin is an input.
    /// Pins the port does not have are ignored.
    pub fn set_external(&self, port: Port, pin: u8, high: bool) {
        if !port.contains(pin) {
            return;
        }
        let cell = &self.external[port.index()];
        let mask = 1u8 << pin;
        if high {
            cell.set(cell.get() | mask);
        } else {
            cell.set(cell.get() & !mask);
        }
    }

    /// Change an external level once the clock reaches `at_tick`
    pub fn schedule_external(&self, at_tick: u32, port: Port, pin: u8, high: bool) {
        self.scheduled.set(Some(ScheduledInput {
            at_tick,
            port,
            pin,
            high,
        }));
    }

    /// Raw register value
    pub fn register(&self, port: Port, register: PortRegister) -> u8 {
        let i = port.index();
        match register {
            PortRegister::Direction => self.direction[i].get(),
            PortRegister::Output => self.output[i].get(),
            PortRegister::Input => {
                let ddr = self.direction[i].get();
                (self.output[i].get() & ddr) | (self.external[i].get() & !ddr)
            }
        }
    }

    /// Ticks elapsed so far
    pub fn ticks(&self) -> u32 {
        self.ticks.get()
    }

    /// Number of register writes issued through [`SimPorts`]
    pub fn write_count(&self) -> u32 {
        self.writes.get()
    }

    /// Output register changes in order
    pub fn output_changes(&self) -> Vec<OutputChange, TRACE_CAPACITY> {
        self.trace.borrow().clone()
    }

    /// Whether output changes were dropped because the trace was full
    pub fn trace_truncated(&self) -> bool {
        self.truncated.get()
    }

    /// Forget recorded output changes
    pub fn clear_trace(&self) {
        self.trace.borrow_mut().clear();
        self.truncated.set(false);
    }

    fn write(&self, port: Port, register: PortRegister, value: u8) {
        let i = port.index();
        self.writes.set(self.writes.get() + 1);
        match register {
            PortRegister::Direction => self.direction[i].set(value),
            PortRegister::Output => {
                if self.output[i].get() != value {
                    let change = OutputChange {
                        tick: self.ticks.get(),
                        port,
                        value,
                    };
                    if self.trace.borrow_mut().push(change).is_err() {
                        self.truncated.set(true);
                    }
                }
                self.output[i].set(value);
            }
            PortRegister::Input => {}
        }
    }

    fn tick(&self) {
        let now = self.ticks.get() + 1;
        self.ticks.set(now);

        if let Some(input) = self.scheduled.get() {
            if now >= input.at_tick {
                self.set_external(input.port, input.pin, input.high);
                self.scheduled.set(None);
            }
        }
    }
}

/// Port register handle for a [`SimBoard`]
#[derive(Clone, Copy)]
pub struct SimPorts<'a> {
    board: &'a SimBoard,
}

impl PortRegisters for SimPorts<'_> {
    fn read(&self, port: Port, register: PortRegister) -> u8 {
        self.board.register(port, register)
    }

    fn write(&mut self, port: Port, register: PortRegister, value: u8) {
        self.board.write(port, register, value);
    }
}

/// Tick handle for a [`SimBoard`]; each wait advances the board clock by one
#[derive(Clone, Copy)]
pub struct SimClock<'a> {
    board: &'a SimBoard,
}

impl TickSource for SimClock<'_> {
    fn wait_one_tick(&mut self) {
        self.board.tick();
    }
}
