//! The single-voice LFO engine: state, setters, and the per-block loop.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    control::events::CycleSink,
    dsp::{phase::PhaseAccumulator, smoother::OnePoleSmoother, waveform::Waveform},
};

/*
The Synthesis Loop
==================

One `Lfo` is one voice. All mutable state lives inside the struct and is
touched from exactly two places: the parameter setters (between blocks)
and the render loop (inside a block). Nothing is shared, nothing locks,
and the loop allocates nothing.

Per sample, in strict order:

    1. evaluate the active waveform at the current phase
    2. scale: target = raw * depth + offset
    3. smooth: output = one-pole step toward target
    4. write the output sample
    5. advance the phase
    6. on wrap: redraw the held random value (random-hold only),
       then push one cycle event into the sink

Evaluating before advancing means a freshly constructed voice emits the
waveform's phase-zero value as its very first sample.

Idle state: a frequency of 0 is the documented "stopped" mode, not an
error. While stopped the engine emits the idle output level for the whole
block, parks the phase at zero, and emits no cycle events. The idle level
is a hard override - it bypasses the smoother rather than being a target
the smoother approaches, so restarting the voice later behaves the same
whether or not smoothing is active.

Cycle events fire synchronously, one per wrap, in sample order. An
explicit `reset` also fires one, whether or not a natural wrap was near;
hosts use the event to clock downstream logic, and a reset is a cycle
boundary by definition.
*/

pub struct Lfo {
    phase: PhaseAccumulator,
    waveform: Waveform,
    shape: f32,
    pulse_width: f32,
    depth: f32,
    offset: f32,
    held: f32,
    smoother: OnePoleSmoother,
    idle_level: f32,
    rng: SmallRng,
}

impl Lfo {
    /// New voice at the given frequency. Non-positive frequencies fall
    /// back to 1 Hz so a bare `Lfo::new(0.0)` still oscillates; use
    /// `set_frequency(0.0)` afterwards if you really want it stopped.
    ///
    /// Defaults: sine waveform, depth 1, offset 0, shape 0, pulse width
    /// 0.5, smoothing off, idle level 0.
    pub fn new(frequency: f32) -> Self {
        let frequency = if frequency > 0.0 { frequency } else { 1.0 };
        Self {
            phase: PhaseAccumulator::new(frequency),
            waveform: Waveform::Sine,
            shape: 0.0,
            pulse_width: 0.5,
            depth: 1.0,
            offset: 0.0,
            held: 0.0,
            smoother: OnePoleSmoother::new(),
            idle_level: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Sample value emitted while the voice is stopped (frequency 0).
    pub fn with_idle_level(mut self, level: f32) -> Self {
        self.idle_level = level;
        self
    }

    /// Seed the voice's random-hold generator for reproducible runs.
    ///
    /// The value sequence is not a stable contract across crate versions;
    /// seeding only guarantees two identically seeded voices agree with
    /// each other.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Start from a waveform other than the default sine.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Adopt the host's block-processing sample rate. Must be called
    /// before the first render for correct pitch; non-positive rates are
    /// ignored.
    pub fn configure_sample_rate(&mut self, sample_rate: f32) {
        self.phase.set_sample_rate(sample_rate);
    }

    /// Set the frequency in Hz. Negative values clamp to 0, which stops
    /// the voice.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.phase.set_frequency(frequency);
    }

    /// Select a waveform directly.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    /// Select a waveform by host index (0..=5). Out-of-range indices are
    /// silently ignored: no error, no change.
    pub fn set_waveform_index(&mut self, index: i32) {
        if let Some(waveform) = Waveform::from_index(index) {
            self.waveform = waveform;
        }
    }

    /// Additive bias applied after depth scaling.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Linear scale applied to the raw waveform.
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
    }

    /// Convex/concave bend for the ramp-family waveforms.
    pub fn set_shape(&mut self, shape: f32) {
        self.shape = shape;
    }

    /// Square-wave duty cycle, clamped to `[0.01, 0.99]`.
    pub fn set_pulse_width(&mut self, pulse_width: f32) {
        self.pulse_width = pulse_width.clamp(0.01, 0.99);
    }

    /// Output smoothing amount in `[0, 1]` (clamped): 0 disables the
    /// smoother, 1 is maximal.
    pub fn set_smoothing(&mut self, amount: f32) {
        self.smoother.set_amount(amount);
    }

    /// Snap the phase to the start of the cycle and emit one cycle event,
    /// whether or not a natural wrap was due. Smoothing memory is kept so
    /// the reset itself cannot click.
    pub fn reset(&mut self, sink: &mut impl CycleSink) {
        self.phase.reset();
        sink.on_cycle();
    }

    /// Current phase in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase.phase()
    }

    /// Current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase.frequency()
    }

    /// The active waveform.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Render one block of control samples into `out`, pushing one event
    /// into `sink` per completed cycle. Restartable: all state persists
    /// between calls.
    pub fn render_block(&mut self, out: &mut [f32], sink: &mut impl CycleSink) {
        if self.phase.frequency() <= 0.0 {
            self.phase.reset();
            out.fill(self.idle_level);
            return;
        }

        for sample in out.iter_mut() {
            // Above the sample rate the accumulator can leave phase >= 1
            // between wraps; the shape curve needs its input in [0, 1] or
            // a negative shape turns into powf on a negative base (NaN).
            let phase = self.phase.phase().min(1.0);
            let raw = self
                .waveform
                .eval(phase, self.shape, self.pulse_width, self.held);
            let target = raw * self.depth + self.offset;
            *sample = self.smoother.next(target);

            if self.phase.advance() {
                if self.waveform == Waveform::RandomHold {
                    self.held = self.rng.gen_range(-1.0..=1.0);
                }
                sink.on_cycle();
            }
        }
    }
}
