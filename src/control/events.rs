//! Cycle-boundary event sink.
//!
//! The engine pushes one event per completed cycle (and one per explicit
//! reset), synchronously with sample production. Sinks run on the audio
//! thread, so implementations must never block or allocate.

#[cfg(feature = "rtrb")]
use rtrb::Producer;

/// Marker pushed through a ring buffer for every cycle boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CycleEvent;

/// Receives the engine's cycle-boundary notifications.
pub trait CycleSink {
    fn on_cycle(&mut self);
}

/// Counts cycle events. Handy for tests and for hosts that only need a
/// cycle tally rather than per-event delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleCounter {
    count: u64,
}

impl CycleCounter {
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl CycleSink for CycleCounter {
    fn on_cycle(&mut self) {
        self.count += 1;
    }
}

/// Discards events, for hosts that only want samples.
impl CycleSink for () {
    fn on_cycle(&mut self) {}
}

/// Forward events to a consumer on another thread. A full ring drops the
/// event: losing a notification is acceptable on the render path, stalling
/// it is not.
#[cfg(feature = "rtrb")]
impl CycleSink for Producer<CycleEvent> {
    fn on_cycle(&mut self) {
        let _ = self.push(CycleEvent);
    }
}
