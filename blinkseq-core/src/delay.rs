//! Blocking delays in 10 ms ticks
//!
//! [`CounterTick`] produces one tick from a hardware overflow counter by
//! busy-waiting on the overflow flag. [`Delay`] composes ticks into longer
//! waits. Nothing here yields or can be cancelled; a wait always runs to
//! completion.

use blinkseq_hal::OverflowCounter;

use crate::config::{ConfigError, TimerConfig};
use crate::traits::TickSource;

/// Length of one tick in milliseconds
pub const TICK_PERIOD_MS: u32 = 10;

/// Number of ticks to wait
pub type TickCount = u16;

/// Longest possible single delay (≈655.35 s)
pub const MAX_DELAY_MS: u32 = TickCount::MAX as u32 * TICK_PERIOD_MS;

/// Convert a tick count to milliseconds
pub const fn ticks_to_millis(ticks: TickCount) -> u32 {
    ticks as u32 * TICK_PERIOD_MS
}

/// One tick from a free-running 8-bit overflow counter
pub struct CounterTick<C> {
    counter: C,
    clock_select: u8,
    preload: u8,
}

impl<C: OverflowCounter> CounterTick<C> {
    /// Create a tick source for the given counter and clocking
    ///
    /// Fails if one tick does not fit the 8-bit counter.
    pub fn new(counter: C, config: TimerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            counter,
            clock_select: config.prescaler.clock_select(),
            preload: config.preload(),
        })
    }

    /// Give the counter back
    pub fn release(self) -> C {
        self.counter
    }
}

impl<C: OverflowCounter> TickSource for CounterTick<C> {
    fn wait_one_tick(&mut self) {
        self.counter.start(self.clock_select);
        self.counter.set_count(self.preload);

        while !self.counter.overflowed() {}

        self.counter.clear_overflow();
    }
}

/// Multi-tick blocking delay
pub struct Delay<T> {
    ticks: T,
}

impl<T: TickSource> Delay<T> {
    /// Create a delay from a tick source
    pub fn new(ticks: T) -> Self {
        Self { ticks }
    }

    /// Block for `n` ticks (`n` × 10 ms); zero returns immediately
    pub fn wait_ticks(&mut self, n: TickCount) {
        let mut elapsed: TickCount = 0;
        while elapsed != n {
            self.ticks.wait_one_tick();
            elapsed += 1;
        }
    }

    /// Access the tick source
    pub fn tick_source(&self) -> &T {
        &self.ticks
    }

    /// Give the tick source back
    pub fn release(self) -> T {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Prescaler;
    use core::cell::Cell;

    /// Counts tick waits
    struct CountingTicks {
        count: u32,
    }

    impl TickSource for CountingTicks {
        fn wait_one_tick(&mut self) {
            self.count += 1;
        }
    }

    /// Counter that overflows after a fixed number of flag polls
    struct MockCounter {
        clock_select: Option<u8>,
        count: Option<u8>,
        polls_until_overflow: u32,
        polls: Cell<u32>,
        total_polls: Cell<u32>,
        flag_cleared: u32,
        cleared_early: bool,
    }

    impl MockCounter {
        fn new(polls_until_overflow: u32) -> Self {
            Self {
                clock_select: None,
                count: None,
                polls_until_overflow,
                polls: Cell::new(0),
                total_polls: Cell::new(0),
                flag_cleared: 0,
                cleared_early: false,
            }
        }
    }

    impl OverflowCounter for MockCounter {
        fn start(&mut self, clock_select: u8) {
            self.clock_select = Some(clock_select);
        }

        fn set_count(&mut self, value: u8) {
            self.count = Some(value);
        }

        fn overflowed(&self) -> bool {
            let polls = self.polls.get() + 1;
            self.polls.set(polls);
            self.total_polls.set(self.total_polls.get() + 1);
            polls >= self.polls_until_overflow
        }

        fn clear_overflow(&mut self) {
            if self.polls.get() < self.polls_until_overflow {
                self.cleared_early = true;
            }
            self.polls.set(0);
            self.flag_cleared += 1;
        }
    }

    #[test]
    fn test_wait_ticks_exact_count() {
        for n in [1u16, 2, 7, 1000] {
            let mut delay = Delay::new(CountingTicks { count: 0 });
            delay.wait_ticks(n);
            assert_eq!(delay.release().count, n as u32);
        }
    }

    #[test]
    fn test_wait_zero_ticks() {
        let mut delay = Delay::new(CountingTicks { count: 0 });
        delay.wait_ticks(0);
        assert_eq!(delay.tick_source().count, 0);
    }

    #[test]
    fn test_wait_max_ticks() {
        let mut delay = Delay::new(CountingTicks { count: 0 });
        delay.wait_ticks(TickCount::MAX);
        assert_eq!(delay.tick_source().count, 65_535);
    }

    #[test]
    fn test_counter_tick_programs_timer() {
        let mut tick = CounterTick::new(MockCounter::new(5), TimerConfig::XPLAINED_MINI).unwrap();
        tick.wait_one_tick();

        let counter = tick.release();
        assert_eq!(counter.clock_select, Some(0x05));
        assert_eq!(counter.count, Some(0x64));
        assert_eq!(counter.flag_cleared, 1);
    }

    #[test]
    fn test_counter_tick_busy_waits_until_overflow() {
        let mut tick = CounterTick::new(MockCounter::new(40), TimerConfig::XPLAINED_MINI).unwrap();
        tick.wait_one_tick();
        assert_eq!(tick.counter.total_polls.get(), 40);
        tick.wait_one_tick();

        let counter = tick.release();
        // Each tick polls until the flag sets, then clears it
        assert_eq!(counter.total_polls.get(), 80);
        assert!(!counter.cleared_early);
        assert_eq!(counter.flag_cleared, 2);
        assert_eq!(counter.polls.get(), 0);
    }

    #[test]
    fn test_counter_tick_rejects_oversized_tick() {
        // 16 MHz / 64 needs 2500 counts per tick
        let config = TimerConfig {
            cpu_hz: 16_000_000,
            prescaler: Prescaler::Div64,
        };
        assert_eq!(
            CounterTick::new(MockCounter::new(1), config).err(),
            Some(ConfigError::TickOutOfRange { counts: 2500 })
        );

        let config = TimerConfig {
            cpu_hz: 50,
            prescaler: Prescaler::Div1024,
        };
        assert_eq!(
            CounterTick::new(MockCounter::new(1), config).err(),
            Some(ConfigError::TickOutOfRange { counts: 0 })
        );
    }

    #[test]
    fn test_counter_tick_uses_config() {
        let config = TimerConfig {
            cpu_hz: 1_000_000,
            prescaler: Prescaler::Div64,
        };
        let mut tick = CounterTick::new(MockCounter::new(1), config).unwrap();
        tick.wait_one_tick();

        let counter = tick.release();
        assert_eq!(counter.clock_select, Some(0x03));
        assert_eq!(counter.count, Some(100));
    }

    #[test]
    fn test_delay_over_counter() {
        let tick = CounterTick::new(MockCounter::new(3), TimerConfig::XPLAINED_MINI).unwrap();
        let mut delay = Delay::new(tick);
        delay.wait_ticks(12);

        let counter = delay.release().release();
        assert_eq!(counter.flag_cleared, 12);
        assert_eq!(counter.total_polls.get(), 36);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ticks_to_millis(1000), 10_000);
        assert_eq!(MAX_DELAY_MS, 655_350);
    }
}
