//! The closed set of LFO waveform evaluators.

use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::shape::shaped_ramp;

/*
LFO Waveforms
=============

Each waveform is a pure function of the current phase in [0, 1) plus a small
set of shaping parameters. Keeping the evaluators pure means two calls with
the same inputs always produce the same output, which is what makes the
engine's per-sample loop trivially restartable between blocks.

  SINE          sin(2*pi*phase). The shape parameter deliberately has no
                effect here: bending a sine through the ramp curve would
                change its spectrum, not its feel, and the smooth waveform
                needs no help avoiding clicks.

  RAMP UP       2*shaped(phase) - 1, a rising sweep with an instant reset.
  RAMP DOWN     1 - 2*shaped(phase), the mirror image.

  TRIANGLE      Two back-to-back ramps, each fed through the shape curve
                independently. The shape discontinuity at the midpoint is
                intentional: each half-cycle gets its own bend.

  SQUARE        +1 while phase < pulse_width, else -1. The comparison is
                strictly less-than, so a phase landing exactly on the pulse
                width reads as the low half. Hard edges are the point of a
                square LFO; the output smoother is the mitigation for
                clicks, not the evaluator.

  RANDOM HOLD   Sample-and-hold. The evaluator ignores phase entirely and
                returns whatever value the engine drew at the last cycle
                wrap, so the output is a staircase with one step per cycle.

These are control-rate generators. No anti-aliasing is attempted for the
discontinuous shapes; run one at audio rate and it will alias, which is
sometimes exactly the effect you want.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    RampUp,
    RampDown,
    Triangle,
    Square,
    RandomHold,
}

impl Waveform {
    /// Map a host-facing selector index (0..=5) to a waveform.
    ///
    /// Out-of-range indices return `None`; the engine treats that as
    /// "leave the current waveform alone" rather than an error.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Waveform::Sine),
            1 => Some(Waveform::RampUp),
            2 => Some(Waveform::RampDown),
            3 => Some(Waveform::Triangle),
            4 => Some(Waveform::Square),
            5 => Some(Waveform::RandomHold),
            _ => None,
        }
    }

    /// Evaluate this waveform at `phase` in `[0, 1)`.
    ///
    /// `shape` bends the ramp family, `pulse_width` sets the square's duty
    /// cycle, and `held` is the engine's current sample-and-hold value
    /// (only read by `RandomHold`). Output is bipolar in `[-1, 1]`.
    #[inline]
    pub fn eval(self, phase: f32, shape: f32, pulse_width: f32, held: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::RampUp => 2.0 * shaped_ramp(phase, shape) - 1.0,
            Waveform::RampDown => 1.0 - 2.0 * shaped_ramp(phase, shape),
            Waveform::Triangle => {
                let p = phase * 2.0;
                if p < 1.0 {
                    2.0 * shaped_ramp(p, shape) - 1.0
                } else {
                    1.0 - 2.0 * shaped_ramp(p - 1.0, shape)
                }
            }
            Waveform::Square => {
                if phase < pulse_width {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::RandomHold => held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluators_are_deterministic() {
        // Same inputs, same outputs - no hidden state in the evaluator set.
        let waves = [
            Waveform::Sine,
            Waveform::RampUp,
            Waveform::RampDown,
            Waveform::Triangle,
            Waveform::Square,
        ];
        for wave in waves {
            for i in 0..100 {
                let phase = i as f32 / 100.0;
                let a = wave.eval(phase, 0.3, 0.5, 0.0);
                let b = wave.eval(phase, 0.3, 0.5, 0.0);
                assert_eq!(a, b, "{:?} drifted at phase {}", wave, phase);
            }
        }
    }

    #[test]
    fn sine_hits_known_points() {
        assert!(Waveform::Sine.eval(0.0, 0.0, 0.5, 0.0).abs() < 1e-6);
        assert!((Waveform::Sine.eval(0.25, 0.0, 0.5, 0.0) - 1.0).abs() < 1e-6);
        assert!(Waveform::Sine.eval(0.5, 0.0, 0.5, 0.0).abs() < 1e-5);
        assert!((Waveform::Sine.eval(0.75, 0.0, 0.5, 0.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn sine_ignores_shape() {
        for i in 0..100 {
            let phase = i as f32 / 100.0;
            assert_eq!(
                Waveform::Sine.eval(phase, 0.0, 0.5, 0.0),
                Waveform::Sine.eval(phase, 0.9, 0.5, 0.0),
            );
        }
    }

    #[test]
    fn ramps_span_bipolar_range() {
        assert!((Waveform::RampUp.eval(0.0, 0.0, 0.5, 0.0) + 1.0).abs() < 1e-6);
        // Just below the wrap the ramp is close to +1.
        assert!(Waveform::RampUp.eval(0.999, 0.0, 0.5, 0.0) > 0.99);

        assert!((Waveform::RampDown.eval(0.0, 0.0, 0.5, 0.0) - 1.0).abs() < 1e-6);
        assert!(Waveform::RampDown.eval(0.999, 0.0, 0.5, 0.0) < -0.99);
    }

    #[test]
    fn ramp_down_mirrors_ramp_up() {
        for i in 0..100 {
            let phase = i as f32 / 100.0;
            let up = Waveform::RampUp.eval(phase, 0.4, 0.5, 0.0);
            let down = Waveform::RampDown.eval(phase, 0.4, 0.5, 0.0);
            assert!(
                (up + down).abs() < 1e-6,
                "mirror broke at phase {}: {} vs {}",
                phase,
                up,
                down
            );
        }
    }

    #[test]
    fn triangle_peaks_at_midpoint() {
        assert!((Waveform::Triangle.eval(0.0, 0.0, 0.5, 0.0) + 1.0).abs() < 1e-6);
        // Just below the midpoint the rising half approaches +1.
        assert!(Waveform::Triangle.eval(0.4999, 0.0, 0.5, 0.0) > 0.999);
        // The falling half starts back at the top.
        assert!((Waveform::Triangle.eval(0.5, 0.0, 0.5, 0.0) - 1.0).abs() < 1e-6);
        assert!(Waveform::Triangle.eval(0.9999, 0.0, 0.5, 0.0) < -0.999);
    }

    #[test]
    fn square_boundary_is_strictly_less_than() {
        // Exactly at the pulse width the output is already low.
        assert_eq!(Waveform::Square.eval(0.5, 0.0, 0.5, 0.0), -1.0);
        assert_eq!(Waveform::Square.eval(0.499, 0.0, 0.5, 0.0), 1.0);
    }

    #[test]
    fn square_respects_pulse_width() {
        assert_eq!(Waveform::Square.eval(0.05, 0.0, 0.1, 0.0), 1.0);
        assert_eq!(Waveform::Square.eval(0.15, 0.0, 0.1, 0.0), -1.0);
        assert_eq!(Waveform::Square.eval(0.85, 0.0, 0.9, 0.0), 1.0);
        assert_eq!(Waveform::Square.eval(0.95, 0.0, 0.9, 0.0), -1.0);
    }

    #[test]
    fn random_hold_returns_held_value() {
        for i in 0..10 {
            let phase = i as f32 / 10.0;
            assert_eq!(Waveform::RandomHold.eval(phase, 0.7, 0.2, 0.42), 0.42);
        }
    }

    #[test]
    fn index_mapping_covers_all_six() {
        assert_eq!(Waveform::from_index(0), Some(Waveform::Sine));
        assert_eq!(Waveform::from_index(1), Some(Waveform::RampUp));
        assert_eq!(Waveform::from_index(2), Some(Waveform::RampDown));
        assert_eq!(Waveform::from_index(3), Some(Waveform::Triangle));
        assert_eq!(Waveform::from_index(4), Some(Waveform::Square));
        assert_eq!(Waveform::from_index(5), Some(Waveform::RandomHold));
    }

    #[test]
    fn index_mapping_rejects_out_of_range() {
        assert_eq!(Waveform::from_index(-1), None);
        assert_eq!(Waveform::from_index(6), None);
        assert_eq!(Waveform::from_index(99), None);
    }
}
