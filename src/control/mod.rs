// Purpose: host-facing glue around one engine voice.
// Parameter changes cross the control/audio boundary as messages drained
// at block start, so setters never race an in-flight render.

pub mod events;
pub mod message;

use crate::{
    control::{
        events::CycleSink,
        message::{LfoMessage, MessageReceiver},
    },
    lfo::Lfo,
};

/// Owns one voice, a message receiver, and a cycle-event sink, and drives
/// them once per block from the host's audio callback.
pub struct LfoController<R: MessageReceiver, S: CycleSink> {
    lfo: Lfo,
    rx: R,
    sink: S,
}

impl<R: MessageReceiver, S: CycleSink> LfoController<R, S> {
    pub fn new(lfo: Lfo, rx: R, sink: S) -> Self {
        Self { lfo, rx, sink }
    }

    /// Forward the host's sample rate to the voice.
    pub fn configure_sample_rate(&mut self, sample_rate: f32) {
        self.lfo.configure_sample_rate(sample_rate);
    }

    /// Drain pending control messages, then render one block.
    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                LfoMessage::SetFrequency(f) => self.lfo.set_frequency(f),
                LfoMessage::SetWaveform(index) => self.lfo.set_waveform_index(index),
                LfoMessage::SetOffset(offset) => self.lfo.set_offset(offset),
                LfoMessage::SetDepth(depth) => self.lfo.set_depth(depth),
                LfoMessage::SetShape(shape) => self.lfo.set_shape(shape),
                LfoMessage::SetPulseWidth(pw) => self.lfo.set_pulse_width(pw),
                LfoMessage::SetSmoothing(amount) => self.lfo.set_smoothing(amount),
                LfoMessage::Reset => self.lfo.reset(&mut self.sink),
            }
        }

        self.lfo.render_block(out, &mut self.sink);
    }

    /// Read access to the underlying voice (visualization, inspection).
    pub fn voice(&self) -> &Lfo {
        &self.lfo
    }
}
