//! Session phases and menu navigation as pure data. The session owns a
//! `Phase` and feeds menu intents through `apply_menu_intent`; the returned
//! action tells it what side effect to perform.

use crate::types::{Intent, RoundOutcome};

/// Fixed respawn-or-gameover delay once a round enters the dying sequence.
pub const DYING_DELAY_TICKS: u32 = 110;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    MainMenu { cursor: usize },
    MapSelection { cursor: usize },
    Playing,
    Dying { ticks_left: u32 },
    Paused { cursor: usize },
    Alert { outcome: RoundOutcome, cursor: usize },
}

impl Phase {
    pub fn main_menu() -> Self {
        Self::MainMenu { cursor: 0 }
    }
}

/// Side effect a menu selection asks the session to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    LoadMap(usize),
    Resume,
    LeaveForMainMenu,
    ExitApp,
}

const MAIN_MENU_ENTRIES: usize = 2; // Play, Quit
const PAUSE_ENTRIES: usize = 2; // Resume, MainMenu
const ALERT_ENTRIES: usize = 2; // PlayAgain, MainMenu

/// Advance a menu phase by one intent. Total over all inputs: anything that
/// does not navigate or select leaves the phase untouched. Playing and
/// Dying are not menu phases and pass through unchanged.
pub fn apply_menu_intent(
    phase: Phase,
    intent: Intent,
    map_count: usize,
) -> (Phase, Option<MenuAction>) {
    match phase {
        Phase::MainMenu { cursor } => match intent {
            Intent::Up | Intent::W => (Phase::MainMenu { cursor: up(cursor) }, None),
            Intent::Down | Intent::S => {
                (Phase::MainMenu { cursor: down(cursor, MAIN_MENU_ENTRIES) }, None)
            }
            Intent::Select => match cursor {
                0 => (Phase::MapSelection { cursor: 0 }, None),
                _ => (phase, Some(MenuAction::ExitApp)),
            },
            _ => (phase, None),
        },
        Phase::MapSelection { cursor } => match intent {
            Intent::Up | Intent::W => (Phase::MapSelection { cursor: up(cursor) }, None),
            Intent::Down | Intent::S => {
                (Phase::MapSelection { cursor: down(cursor, map_count.max(1)) }, None)
            }
            Intent::Select if map_count > 0 => {
                (Phase::Playing, Some(MenuAction::LoadMap(cursor)))
            }
            Intent::Quit => (Phase::main_menu(), None),
            _ => (phase, None),
        },
        Phase::Paused { cursor } => match intent {
            Intent::Up | Intent::W => (Phase::Paused { cursor: up(cursor) }, None),
            Intent::Down | Intent::S => {
                (Phase::Paused { cursor: down(cursor, PAUSE_ENTRIES) }, None)
            }
            // Quit toggles straight back into play.
            Intent::Quit => (Phase::Playing, Some(MenuAction::Resume)),
            Intent::Select => match cursor {
                0 => (Phase::Playing, Some(MenuAction::Resume)),
                _ => (Phase::main_menu(), Some(MenuAction::LeaveForMainMenu)),
            },
            _ => (phase, None),
        },
        Phase::Alert { outcome, cursor } => match intent {
            Intent::Up | Intent::W => (Phase::Alert { outcome, cursor: up(cursor) }, None),
            Intent::Down | Intent::S => {
                (Phase::Alert { outcome, cursor: down(cursor, ALERT_ENTRIES) }, None)
            }
            Intent::Select => match cursor {
                0 => (Phase::MapSelection { cursor: 0 }, Some(MenuAction::LeaveForMainMenu)),
                _ => (Phase::main_menu(), Some(MenuAction::LeaveForMainMenu)),
            },
            _ => (phase, None),
        },
        Phase::Playing | Phase::Dying { .. } => (phase, None),
    }
}

fn up(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

fn down(cursor: usize, entries: usize) -> usize {
    (cursor + 1).min(entries - 1)
}
