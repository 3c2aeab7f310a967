#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Parameter changes sent from the host's control thread. Values arrive
/// unvalidated; the engine's setters clamp or ignore as each parameter
/// specifies.
#[derive(Debug, Copy, Clone)]
pub enum LfoMessage {
    SetFrequency(f32),
    SetWaveform(i32),
    SetOffset(f32),
    SetDepth(f32),
    SetShape(f32),
    SetPulseWidth(f32),
    SetSmoothing(f32),
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<LfoMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<LfoMessage> {
    fn pop(&mut self) -> Option<LfoMessage> {
        Consumer::pop(self).ok()
    }
}
