//! Tick source trait

/// Something that can block for exactly one tick (10 ms)
///
/// Implementations busy-wait; control does not return until the full
/// tick has elapsed. There is no cancellation.
pub trait TickSource {
    /// Block for one tick
    fn wait_one_tick(&mut self);
}

