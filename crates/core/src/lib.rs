//! Deterministic maze-chase simulation core. Everything here is headless:
//! the shell feeds intents in, renders the arena out, and routes audio cues
//! through [`audio::AudioSink`]. One [`game::Session`] per process.

pub mod audio;
pub mod game;
pub mod maploader;
pub mod state;
pub mod test_support;
pub mod types;

pub use audio::{AudioCue, AudioSink, NullAudio};
pub use game::Session;
pub use game::phase::Phase;
pub use maploader::{MapError, load_map, parse_map};
pub use state::Arena;
pub use types::{GameEvent, Intent, RoundOutcome};
