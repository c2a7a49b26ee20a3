//! Text map format. One character per cell:
//!
//! `W` wall, `P` pacman spawn (first two honored), `o` coin, `O` orange,
//! `A` apple, `C` cherry, `K` key, `S` strawberry, `u` power-up,
//! `b`/`p`/`i`/`c` Blinky/Pinky/Inky/Clyde, `D` ghost gate (last one wins),
//! space or anything else is a blank cell.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::state::{Arena, Collectible, Ghost, Pacman};
use crate::types::{CollectibleKind, GhostKind, Pos};

#[derive(Debug)]
pub enum MapError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read map: {err}"),
            Self::Empty => write!(f, "map has no cells"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty => None,
        }
    }
}

/// Build a fresh arena from a map file. Any failure is fatal to the caller;
/// there is no partial-arena fallback.
pub fn load_map(path: &Path) -> Result<Arena, MapError> {
    let text = fs::read_to_string(path).map_err(MapError::Io)?;
    parse_map(&text)
}

pub fn parse_map(text: &str) -> Result<Arena, MapError> {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len() as i32;
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32;
    if width == 0 || height == 0 {
        return Err(MapError::Empty);
    }

    let mut arena = Arena::new(width, height);
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            match ch {
                'W' => arena.add_wall(pos),
                'P' => {
                    arena.add_pacman(Pacman::new(pos));
                }
                'D' => arena.set_gate(pos),
                'b' => {
                    arena.add_ghost(Ghost::new(GhostKind::Blinky, pos));
                }
                'p' => {
                    arena.add_ghost(Ghost::new(GhostKind::Pinky, pos));
                }
                'i' => {
                    arena.add_ghost(Ghost::new(GhostKind::Inky, pos));
                }
                'c' => {
                    arena.add_ghost(Ghost::new(GhostKind::Clyde, pos));
                }
                _ => match collectible_kind(ch) {
                    Some(kind) => {
                        arena.add_collectible(Collectible::new(kind, pos));
                    }
                    None => arena.add_blank(pos),
                },
            }
        }
    }
    Ok(arena)
}

fn collectible_kind(ch: char) -> Option<CollectibleKind> {
    match ch {
        'o' => Some(CollectibleKind::Coin),
        'O' => Some(CollectibleKind::Orange),
        'A' => Some(CollectibleKind::Apple),
        'C' => Some(CollectibleKind::Cherry),
        'K' => Some(CollectibleKind::Key),
        'S' => Some(CollectibleKind::Strawberry),
        'u' => Some(CollectibleKind::PowerUp),
        _ => None,
    }
}
