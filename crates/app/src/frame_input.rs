//! Keyboard input collection for one rendered frame.

use core::Intent;
use macroquad::prelude::{KeyCode, is_key_pressed};

const BINDINGS: [(KeyCode, Intent); 11] = [
    (KeyCode::Up, Intent::Up),
    (KeyCode::Down, Intent::Down),
    (KeyCode::Left, Intent::Left),
    (KeyCode::Right, Intent::Right),
    (KeyCode::W, Intent::W),
    (KeyCode::A, Intent::A),
    (KeyCode::S, Intent::S),
    (KeyCode::D, Intent::D),
    (KeyCode::Enter, Intent::Select),
    (KeyCode::Space, Intent::Select),
    (KeyCode::Escape, Intent::Quit),
];

pub fn capture_frame_input() -> Vec<KeyCode> {
    BINDINGS
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| is_key_pressed(*key))
        .collect()
}

/// Pure half of input handling, split out so it can be tested without a
/// window.
pub fn intents_from_keys(keys: &[KeyCode]) -> Vec<Intent> {
    keys.iter()
        .filter_map(|key| {
            BINDINGS
                .iter()
                .find(|(bound, _)| bound == key)
                .map(|(_, intent)| *intent)
        })
        .collect()
}
