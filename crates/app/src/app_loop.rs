//! Per-frame glue between captured input and the session. Kept free of
//! macroquad calls so the whole frame step is testable headless.

use core::{AudioSink, Intent, MapError, Session};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether the outer render loop should keep going after this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Advance the session by one frame. A map-load failure is fatal and
/// bubbles up so the caller can report it and quit.
pub fn advance_frame(
    session: &mut Session,
    intents: &[Intent],
    audio: &mut dyn AudioSink,
) -> Result<FrameOutcome, MapError> {
    session.tick(intents, audio)?;
    if session.exit_requested() {
        Ok(FrameOutcome::Exit)
    } else {
        Ok(FrameOutcome::Continue)
    }
}

/// Selectable maps: every `.txt` under `dir`, sorted by file name so the
/// menu order is stable across platforms.
pub fn discover_maps(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut maps: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    maps.sort();
    maps
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::NullAudio;
    use std::io::Write as _;

    #[test]
    fn exit_from_the_main_menu_ends_the_loop() {
        let mut session = Session::new(1, Vec::new());
        let mut audio = NullAudio;
        let outcome = advance_frame(&mut session, &[Intent::Down], &mut audio).unwrap();
        assert_eq!(outcome, FrameOutcome::Continue);
        let outcome = advance_frame(&mut session, &[Intent::Select], &mut audio).unwrap();
        assert_eq!(outcome, FrameOutcome::Exit);
    }

    #[test]
    fn map_load_failure_is_surfaced_not_swallowed() {
        let mut session = Session::new(1, vec![PathBuf::from("/nonexistent/x.txt")]);
        let mut audio = NullAudio;
        advance_frame(&mut session, &[Intent::Select], &mut audio).unwrap();
        let err = advance_frame(&mut session, &[Intent::Select], &mut audio).unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[test]
    fn discovery_finds_only_txt_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "notes.md"] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            writeln!(file, "WPW").unwrap();
        }
        let maps = discover_maps(dir.path());
        assert_eq!(maps.len(), 2);
        assert!(maps[0].ends_with("a.txt"));
        assert!(maps[1].ends_with("b.txt"));
    }

    #[test]
    fn discovery_of_a_missing_directory_is_empty() {
        assert!(discover_maps(Path::new("/nonexistent/maps")).is_empty());
    }
}
