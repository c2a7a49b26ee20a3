use app::app_loop::{FrameOutcome, advance_frame, discover_maps};
use app::cue_board::CueBoard;
use core::test_support::DEMO_MAP;
use core::types::GameEvent;
use core::{Intent, Phase, Session};
use std::fs;
use std::io::Write as _;

fn write_demo_map(dir: &std::path::Path) {
    let mut file = fs::File::create(dir.join("demo.txt")).unwrap();
    write!(file, "{DEMO_MAP}").unwrap();
}

#[test]
fn menu_to_round_to_pause_full_flow() {
    let dir = tempfile::tempdir().unwrap();
    write_demo_map(dir.path());

    let maps = discover_maps(dir.path());
    assert_eq!(maps.len(), 1);

    let mut session = Session::new(7, maps);
    let mut cues = CueBoard::new();

    // Main menu: confirm Play, then confirm the only map.
    advance_frame(&mut session, &[Intent::Select], &mut cues).unwrap();
    advance_frame(&mut session, &[Intent::Select], &mut cues).unwrap();
    assert_eq!(session.phase(), Phase::Playing);
    assert!(session
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::MapLoaded { .. })));
    assert_eq!(session.current_map(), Some(0));

    // A few frames of play start the ambient siren on the cue board.
    for _ in 0..5 {
        advance_frame(&mut session, &[], &mut cues).unwrap();
    }
    assert_eq!(cues.looping_cues().count(), 1);

    // Escape pauses and silences; a second escape resumes.
    advance_frame(&mut session, &[Intent::Quit], &mut cues).unwrap();
    assert!(matches!(session.phase(), Phase::Paused { .. }));
    assert_eq!(cues.looping_cues().count(), 0);
    advance_frame(&mut session, &[Intent::Quit], &mut cues).unwrap();
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn steering_across_the_demo_board_scores_a_pickup() {
    let dir = tempfile::tempdir().unwrap();
    write_demo_map(dir.path());

    let mut session = Session::new(7, discover_maps(dir.path()));
    let mut cues = CueBoard::new();
    advance_frame(&mut session, &[Intent::Select], &mut cues).unwrap();
    advance_frame(&mut session, &[Intent::Select], &mut cues).unwrap();

    // Hold right long enough to cross the coin two cells over.
    for _ in 0..40 {
        advance_frame(&mut session, &[Intent::Right], &mut cues).unwrap();
        if session
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::CollectiblePicked { .. }))
        {
            break;
        }
    }
    let arena = session.arena().unwrap();
    assert!(arena.score > 0, "no pickup after 40 frames of moving right");
}

#[test]
fn exit_request_reaches_the_frame_loop() {
    let mut session = Session::new(7, Vec::new());
    let mut cues = CueBoard::new();
    advance_frame(&mut session, &[Intent::Down], &mut cues).unwrap();
    let outcome = advance_frame(&mut session, &[Intent::Select], &mut cues).unwrap();
    assert_eq!(outcome, FrameOutcome::Exit);
}
