pub mod control; // Message-driven host glue and wrap events
pub mod dsp;
pub mod lfo; // The single-voice oscillator engine

pub use dsp::waveform::Waveform;
pub use lfo::Lfo;

/// Placeholder rate used until the host calls `configure_sample_rate`.
pub(crate) const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
