//! Per-personality target selection. Pure in everything except the scared
//! wander, which draws from the session's seeded RNG.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::state::{Arena, Ghost, Pacman};
use crate::types::{Direction, GhostKind, GhostState, Pos};

/// Where `ghost` wants to head this tick. Dead ghosts path home to the
/// gate; scared ghosts wander to a fresh uniform cell unless they are still
/// inside the pen and need the alive policy to escape.
pub fn target_position(
    ghost: &Ghost,
    arena: &Arena,
    focused: &Pacman,
    chase_mode: bool,
    rng: &mut ChaCha8Rng,
) -> Pos {
    match ghost.state {
        GhostState::Alive => alive_target(ghost, arena, focused, chase_mode),
        GhostState::Dead => arena.gate(),
        GhostState::Scared => {
            if ghost.inside_gate {
                alive_target(ghost, arena, focused, chase_mode)
            } else {
                random_cell(arena, rng)
            }
        }
    }
}

/// Independent draw per axis, per call; deliberately not a fixed walk.
fn random_cell(arena: &Arena, rng: &mut ChaCha8Rng) -> Pos {
    let x = (rng.next_u64() % arena.width() as u64) as i32;
    let y = (rng.next_u64() % arena.height() as u64) as i32;
    Pos::new(x, y)
}

fn alive_target(ghost: &Ghost, arena: &Arena, focused: &Pacman, chase_mode: bool) -> Pos {
    match ghost.kind {
        GhostKind::Blinky => blinky_target(ghost, arena, focused, chase_mode),
        GhostKind::Pinky => pinky_target(ghost, arena, focused, chase_mode),
        GhostKind::Inky => inky_target(ghost, arena, focused, chase_mode),
        GhostKind::Clyde => clyde_target(ghost, arena, focused, chase_mode),
    }
}

/// Direct pursuit: the focused pacman's cell, top-right corner in scatter.
fn blinky_target(ghost: &Ghost, arena: &Arena, focused: &Pacman, chase_mode: bool) -> Pos {
    if ghost.inside_gate {
        return arena.gate();
    }
    if !chase_mode {
        return Pos::new(arena.width(), 0);
    }
    focused.pos()
}

/// Ambusher: aims 3 cells ahead of the pacman's heading, clamped to the
/// arena, top-left corner in scatter.
fn pinky_target(ghost: &Ghost, arena: &Arena, focused: &Pacman, chase_mode: bool) -> Pos {
    if ghost.inside_gate {
        return arena.gate();
    }
    if !chase_mode {
        return Pos::new(0, 0);
    }
    let p = focused.pos();
    match focused.mobile.dir {
        Direction::Up => Pos::new(p.x(), (p.y() - 3).max(0)),
        Direction::Down => Pos::new(p.x(), (p.y() + 3).min(arena.height())),
        Direction::Left => Pos::new((p.x() - 3).max(0), p.y()),
        Direction::Right => Pos::new((p.x() + 3).min(arena.width()), p.y()),
    }
}

/// Flanker: reflects the pacman's next cell through Blinky to pinch from
/// the far side. Holds the (8,11) corner until 25 pickups.
fn inky_target(ghost: &Ghost, arena: &Arena, focused: &Pacman, chase_mode: bool) -> Pos {
    if arena.collected() < 25 {
        return Pos::new(8, 11);
    }
    if ghost.inside_gate {
        return arena.gate();
    }
    if !chase_mode {
        return Pos::new(arena.width(), arena.height());
    }
    let next = focused.next_cell();
    let Some(blinky) = arena.first_ghost_of(GhostKind::Blinky) else {
        // No Blinky to reflect through; chase the next cell directly.
        return next;
    };
    let anchor = blinky.pos();
    let x = (2 * next.x() - anchor.x()).clamp(0, arena.width());
    let y = (2 * next.y() - anchor.y()).clamp(0, arena.height());
    Pos::new(x, y)
}

/// Coward: chases from afar, breaks off to the bottom-left corner inside a
/// squared distance of 36. Holds the (10,11) corner until 60 pickups.
fn clyde_target(ghost: &Ghost, arena: &Arena, focused: &Pacman, chase_mode: bool) -> Pos {
    if arena.collected() < 60 {
        return Pos::new(10, 11);
    }
    if ghost.inside_gate {
        return arena.gate();
    }
    let corner = Pos::new(0, arena.height());
    if !chase_mode {
        return corner;
    }
    if ghost.pos().squared_distance(focused.pos()) >= 36 {
        focused.pos()
    } else {
        corner
    }
}
