//! Normalized phase accumulator with cycle-wrap detection.

use crate::DEFAULT_SAMPLE_RATE;

/*
Phase Accumulation
==================

The accumulator owns the oscillator's position within one cycle as a
normalized phase in [0, 1). Every sample it adds a fixed increment:

    increment = frequency / sample_rate

and when the phase crosses 1.0 it subtracts exactly 1.0 instead of
snapping back to zero. Subtracting keeps the fractional overshoot, so a
1.3 Hz LFO stays a 1.3 Hz LFO instead of drifting flat by a fraction of a
sample per cycle.

Invariants:

  - phase is always in [0, 1) after an advance
  - increment == 0 exactly when frequency == 0 (the stopped sentinel)

A frequency of zero is a legal operating state, not an error: the engine
uses it to mean "idle" and skips the accumulator entirely.

Above-rate edge case: when the increment reaches 1.0 or more (frequency at
or above the sample rate), each advance still reports at most one wrap and
one subtraction. Multiple wraps inside a single sample are not modeled;
phase simply lands wherever repeated subtraction-by-one would not put it.
That keeps the per-sample cost fixed, and an LFO run that hot is already
outside its useful range.
*/

#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: f32,
    frequency: f32,
    sample_rate: f32,
    increment: f32,
}

impl PhaseAccumulator {
    /// New accumulator at phase zero. Non-positive frequencies are clamped
    /// to the stopped sentinel (0 Hz). The sample rate starts at the crate
    /// placeholder until the host configures the real one.
    pub fn new(frequency: f32) -> Self {
        let mut acc = Self {
            phase: 0.0,
            frequency: frequency.max(0.0),
            sample_rate: DEFAULT_SAMPLE_RATE,
            increment: 0.0,
        };
        acc.recompute_increment();
        acc
    }

    /// Current phase in `[0, 1)`.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Current frequency in Hz (0 means stopped).
    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Per-sample phase increment.
    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Set the frequency in Hz. Negative values clamp to 0 (stopped).
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency.max(0.0);
        self.recompute_increment();
    }

    /// Adopt a new sample rate and recompute the increment. Non-positive
    /// rates are ignored; the accumulator must always divide by something
    /// meaningful.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate > 0.0 {
            self.sample_rate = sample_rate;
            self.recompute_increment();
        }
    }

    /// Snap the phase back to the start of the cycle. Frequency and
    /// increment are untouched; the engine's idle branch also uses this to
    /// hold a stopped voice at phase zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Advance by one sample. Returns `true` when the phase wrapped past
    /// the end of the cycle. At most one wrap is reported per sample.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
            true
        } else {
            false
        }
    }

    fn recompute_increment(&mut self) {
        self.increment = if self.frequency > 0.0 {
            self.frequency / self.sample_rate
        } else {
            0.0
        };
    }
}
