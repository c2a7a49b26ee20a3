mod frame_input;
mod render;
mod window_config;

use app::app_loop::{FrameOutcome, advance_frame, discover_maps};
use app::cue_board::CueBoard;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::settings_file::SettingsFile;
use core::Session;
use macroquad::prelude::next_frame;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn window_conf() -> macroquad::window::Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let maps = discover_maps(Path::new("maps"));
    let mut session = Session::new(seed, maps);
    let mut cues = CueBoard::new();
    let mut persisted_map = None;

    loop {
        let keys = frame_input::capture_frame_input();
        let intents = frame_input::intents_from_keys(&keys);
        match advance_frame(&mut session, &intents, &mut cues) {
            Ok(FrameOutcome::Continue) => {}
            Ok(FrameOutcome::Exit) => break,
            Err(err) => {
                eprintln!("map load failed: {err}");
                break;
            }
        }

        if session.current_map() != persisted_map {
            persisted_map = session.current_map();
            if let Some(index) = persisted_map {
                persist_settings(index, seed);
            }
        }

        render::draw(&session, &cues);
        next_frame().await;
    }
}

/// Best effort; losing the settings file is not worth interrupting play.
fn persist_settings(last_map_index: usize, last_seed: u64) {
    let Some(path) = SettingsFile::get_default_path() else {
        return;
    };
    let updated_at_unix_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis() as u64);
    let settings =
        SettingsFile { format_version: 1, last_map_index, last_seed, updated_at_unix_ms };
    if let Err(err) = settings.write_atomic(&path) {
        eprintln!("could not persist settings: {err}");
    }
}
