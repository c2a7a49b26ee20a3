//! Named cue contract between the simulation and whatever plays sound.
//! The core fires cues and only ever reads back the `is_playing` flag that
//! keeps the sirens from being restarted every tick.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AudioCue {
    CollectibleEaten,
    GhostEaten,
    Death,
    AliveSiren,
    ScaredSiren,
}

pub trait AudioSink {
    fn play_once(&mut self, cue: AudioCue);
    fn play_loop(&mut self, cue: AudioCue);
    fn stop(&mut self, cue: AudioCue);
    fn stop_all(&mut self);
    fn is_playing(&self, cue: AudioCue) -> bool;
}

/// Sink for headless callers.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_once(&mut self, _cue: AudioCue) {}
    fn play_loop(&mut self, _cue: AudioCue) {}
    fn stop(&mut self, _cue: AudioCue) {}
    fn stop_all(&mut self) {}
    fn is_playing(&self, _cue: AudioCue) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueCall {
    Once(AudioCue),
    Loop(AudioCue),
    Stop(AudioCue),
    StopAll,
}

/// Records every cue call and models the looping flags, so tests can assert
/// on exact audio traffic.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<CueCall>,
    looping: BTreeSet<AudioCue>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn once_count(&self, cue: AudioCue) -> usize {
        self.calls.iter().filter(|c| **c == CueCall::Once(cue)).count()
    }

    pub fn loop_count(&self, cue: AudioCue) -> usize {
        self.calls.iter().filter(|c| **c == CueCall::Loop(cue)).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play_once(&mut self, cue: AudioCue) {
        self.calls.push(CueCall::Once(cue));
    }

    fn play_loop(&mut self, cue: AudioCue) {
        self.calls.push(CueCall::Loop(cue));
        self.looping.insert(cue);
    }

    fn stop(&mut self, cue: AudioCue) {
        self.calls.push(CueCall::Stop(cue));
        self.looping.remove(&cue);
    }

    fn stop_all(&mut self) {
        self.calls.push(CueCall::StopAll);
        self.looping.clear();
    }

    fn is_playing(&self, cue: AudioCue) -> bool {
        self.looping.contains(&cue)
    }
}
