//! Phase-based drawing. Everything here is fire-and-forget macroquad calls;
//! the layout math lives in `app::view` where it can be tested.

use app::cue_board::CueBoard;
use app::format_score_line;
use app::view::board_layout;
use core::types::{CollectibleKind, GhostKind, GhostState};
use core::{Arena, AudioCue, Phase, RoundOutcome, Session};
use macroquad::prelude::*;

pub fn draw(session: &Session, cues: &CueBoard) {
    clear_background(BLACK);
    match session.phase() {
        Phase::MainMenu { cursor } => draw_menu("PACMAN", &["Play", "Quit"], cursor),
        Phase::MapSelection { cursor } => draw_map_selection(session, cursor),
        Phase::Playing | Phase::Dying { .. } => {
            if let Some(arena) = session.arena() {
                draw_board(arena, cues);
            }
        }
        Phase::Paused { cursor } => {
            if let Some(arena) = session.arena() {
                draw_board(arena, cues);
            }
            draw_menu("PAUSED", &["Resume", "Main menu"], cursor);
        }
        Phase::Alert { outcome, cursor } => {
            let banner = match outcome {
                RoundOutcome::Won => "YOU WIN",
                RoundOutcome::GameOver => "GAME OVER",
            };
            draw_menu(banner, &["Play again", "Main menu"], cursor);
        }
    }
}

fn draw_menu(title: &str, entries: &[&str], cursor: usize) {
    let x = screen_width() / 2.0 - 120.0;
    draw_text(title, x, 160.0, 48.0, YELLOW);
    for (index, entry) in entries.iter().enumerate() {
        let marker = if index == cursor { "> " } else { "  " };
        let y = 240.0 + index as f32 * 40.0;
        draw_text(&format!("{marker}{entry}"), x, y, 32.0, WHITE);
    }
}

fn draw_map_selection(session: &Session, cursor: usize) {
    let x = screen_width() / 2.0 - 120.0;
    draw_text("SELECT MAP", x, 160.0, 48.0, YELLOW);
    if session.maps().is_empty() {
        draw_text("no maps found", x, 240.0, 32.0, GRAY);
        return;
    }
    for (index, map) in session.maps().iter().enumerate() {
        let marker = if index == cursor { "> " } else { "  " };
        let name = map
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("map {index}"));
        let y = 240.0 + index as f32 * 40.0;
        draw_text(&format!("{marker}{name}"), x, y, 32.0, WHITE);
    }
}

fn draw_board(arena: &Arena, cues: &CueBoard) {
    let layout = board_layout(screen_width(), screen_height(), arena.width(), arena.height());
    let cell = layout.cell;

    for wall in arena.walls() {
        let (x, y) = layout.cell_to_screen(wall.x() as f32, wall.y() as f32);
        draw_rectangle(x, y, cell, cell, DARKBLUE);
    }
    let (gx, gy) = layout.cell_to_screen(arena.gate().x() as f32, arena.gate().y() as f32);
    draw_rectangle(gx, gy + cell * 0.4, cell, cell * 0.2, PINK);

    for collectible in arena.collectibles.values() {
        let (x, y) = layout.cell_to_screen(
            collectible.pos.x() as f32 + 0.5,
            collectible.pos.y() as f32 + 0.5,
        );
        let (radius, color) = match collectible.kind {
            CollectibleKind::Coin => (cell * 0.1, GOLD),
            CollectibleKind::PowerUp => (cell * 0.3, WHITE),
            CollectibleKind::Cherry => (cell * 0.2, RED),
            CollectibleKind::Orange => (cell * 0.2, ORANGE),
            CollectibleKind::Apple => (cell * 0.2, GREEN),
            CollectibleKind::Strawberry => (cell * 0.2, MAROON),
            CollectibleKind::Key => (cell * 0.2, SKYBLUE),
        };
        draw_circle(x, y, radius, color);
    }

    for ghost in arena.ghosts.values() {
        let (fx, fy) = ghost.mobile.real_position();
        let (x, y) = layout.cell_to_screen(fx, fy);
        let color = match ghost.state {
            GhostState::Scared => BLUE,
            GhostState::Dead => GRAY,
            GhostState::Alive => match ghost.kind {
                GhostKind::Blinky => RED,
                GhostKind::Pinky => PINK,
                GhostKind::Inky => SKYBLUE,
                GhostKind::Clyde => ORANGE,
            },
        };
        draw_rectangle(x + cell * 0.1, y + cell * 0.1, cell * 0.8, cell * 0.8, color);
    }

    for pacman in &arena.pacmen {
        let (fx, fy) = pacman.mobile.real_position();
        let (x, y) = layout.cell_to_screen(fx + 0.5, fy + 0.5);
        let color = if pacman.dying { DARKGRAY } else { YELLOW };
        draw_circle(x, y, cell * 0.4, color);
    }

    let lives: Vec<u32> = arena.pacmen.iter().map(|p| p.lives).collect();
    draw_text(&format_score_line(arena.score, &lives), 20.0, 28.0, 30.0, WHITE);
    if let Some(label) = siren_label(cues) {
        draw_text(label, screen_width() - 160.0, 28.0, 24.0, GRAY);
    }
}

fn siren_label(cues: &CueBoard) -> Option<&'static str> {
    if cues.looping_cues().any(|cue| cue == AudioCue::ScaredSiren) {
        Some("~ scared")
    } else if cues.looping_cues().any(|cue| cue == AudioCue::AliveSiren) {
        Some("~ siren")
    } else {
        None
    }
}
