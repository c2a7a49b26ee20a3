//! Audio sink backed by no real mixer. The board tracks which cues are
//! looping and what fired most recently so the renderer can surface audio
//! state on screen; swapping in a real mixer only means implementing
//! `AudioSink` over actual sounds.

use std::collections::BTreeSet;

use core::{AudioCue, AudioSink};

#[derive(Debug, Default)]
pub struct CueBoard {
    looping: BTreeSet<AudioCue>,
    last_one_shot: Option<AudioCue>,
    one_shots_fired: u64,
}

impl CueBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn looping_cues(&self) -> impl Iterator<Item = AudioCue> + '_ {
        self.looping.iter().copied()
    }

    pub fn last_one_shot(&self) -> Option<AudioCue> {
        self.last_one_shot
    }

    pub fn one_shots_fired(&self) -> u64 {
        self.one_shots_fired
    }
}

impl AudioSink for CueBoard {
    fn play_once(&mut self, cue: AudioCue) {
        self.last_one_shot = Some(cue);
        self.one_shots_fired += 1;
    }

    fn play_loop(&mut self, cue: AudioCue) {
        self.looping.insert(cue);
    }

    fn stop(&mut self, cue: AudioCue) {
        self.looping.remove(&cue);
    }

    fn stop_all(&mut self) {
        self.looping.clear();
    }

    fn is_playing(&self, cue: AudioCue) -> bool {
        self.looping.contains(&cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_mirrors_loop_state() {
        let mut board = CueBoard::new();
        board.play_loop(AudioCue::AliveSiren);
        assert!(board.is_playing(AudioCue::AliveSiren));
        board.stop(AudioCue::AliveSiren);
        assert!(!board.is_playing(AudioCue::AliveSiren));
    }

    #[test]
    fn one_shots_are_counted_not_looped() {
        let mut board = CueBoard::new();
        board.play_once(AudioCue::GhostEaten);
        board.play_once(AudioCue::Death);
        assert_eq!(board.one_shots_fired(), 2);
        assert_eq!(board.last_one_shot(), Some(AudioCue::Death));
        assert!(!board.is_playing(AudioCue::GhostEaten));
    }

    #[test]
    fn stop_all_silences_everything() {
        let mut board = CueBoard::new();
        board.play_loop(AudioCue::AliveSiren);
        board.play_loop(AudioCue::ScaredSiren);
        board.stop_all();
        assert_eq!(board.looping_cues().count(), 0);
    }
}
