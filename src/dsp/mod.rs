//! Low-level DSP primitives used by the oscillator engine.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside the voice struct. They intentionally stay focused on
//! the signal-processing math so the engine and control layers can layer on
//! parameter handling and event dispatch.

/// Normalized phase accumulator with cycle-wrap detection.
pub mod phase;
/// Convex/concave remapping curve for the ramp-family waveforms.
pub mod shape;
/// One-pole exponential output smoother.
pub mod smoother;
/// The closed set of LFO waveform evaluators.
pub mod waveform;

pub use waveform::Waveform;
