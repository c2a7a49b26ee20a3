//! Ghost movement. Owns the chase/scatter clock and the focused-pacman
//! rotation; per-ghost steering delegates to the pursuit policies.

use rand_chacha::ChaCha8Rng;

use crate::game::ghost_policy::target_position;
use crate::state::{Arena, GHOST_NORMAL_SPEED, Ghost};
use crate::types::{Direction, GhostState, Pos};

/// Frames at which the chase/scatter mode flips. Chase runs on
/// [450, 2700) and [3200, onward); scatter fills the rest.
const MODE_FLIP_FRAMES: [u64; 3] = [450, 2700, 3200];
const FOCUS_SWAP_INTERVAL: u64 = 2000;

#[derive(Debug)]
pub struct GhostController {
    frame_count: u64,
    focused: usize,
}

impl Default for GhostController {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostController {
    pub fn new() -> Self {
        Self { frame_count: 0, focused: 0 }
    }

    /// Back to frame zero, used whenever a round starts or restarts.
    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.focused = 0;
    }

    pub fn chase_mode(&self) -> bool {
        matches!(self.frame_count, 450..2700 | 3200..)
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn step(&mut self, arena: &mut Arena, tick: u64, rng: &mut ChaCha8Rng) {
        let Some(&focused) = arena.pacmen.first() else {
            return;
        };
        self.rotate_focus(arena);
        let flip = MODE_FLIP_FRAMES.contains(&self.frame_count);
        let chase = self.chase_mode();
        let focused = *arena.pacmen.get(self.focused).unwrap_or(&focused);
        let gate = arena.gate();

        let ids: Vec<_> = arena.ghosts.keys().collect();
        for id in ids {
            let ghost = arena.ghosts[id];
            if flip && ghost.pos() != gate {
                // The mode flip turns the ghost around outright; no normal
                // steering happens on this frame.
                arena.ghosts[id].mobile.reverse();
                continue;
            }
            if tick % ghost.mobile.speed as u64 == 1 {
                continue;
            }
            if ghost.mobile.counter > 0 {
                arena.ghosts[id].mobile.tick_down();
                continue;
            }

            let target = target_position(&ghost, arena, &focused, chase, rng);
            match steer(&ghost, arena, target) {
                Some((dir, dest)) => {
                    let ghost = &mut arena.ghosts[id];
                    ghost.mobile.dir = dir;
                    if dest == gate {
                        if ghost.is_dead() {
                            ghost.state = GhostState::Alive;
                            ghost.inside_gate = true;
                            ghost.mobile.speed = GHOST_NORMAL_SPEED;
                        } else {
                            ghost.inside_gate = false;
                        }
                    }
                    ghost.mobile.advance_to(dest);
                }
                // Boxed in: face up and wait for the maze to open.
                None => arena.ghosts[id].mobile.dir = Direction::Up,
            }
        }
        self.frame_count += 1;
    }

    /// Every 2000 frames the ghosts gang up on the other player, but never
    /// on one that is mid-death.
    fn rotate_focus(&mut self, arena: &Arena) {
        if arena.pacmen.len() < 2 || self.frame_count % FOCUS_SWAP_INTERVAL != 0 {
            return;
        }
        let candidate = (self.focused + 1) % arena.pacmen.len();
        if !arena.pacmen[candidate].dying {
            self.focused = candidate;
        }
    }
}

/// Pick the legal direction that gets closest to `target`. Rejects the
/// about-turn, walls, and the gate cell (unless the ghost is inside the pen
/// or dead and homing). Ties go to the first match in Up, Left, Down, Right
/// order.
fn steer(ghost: &Ghost, arena: &Arena, target: Pos) -> Option<(Direction, Pos)> {
    let mut best: Option<(Direction, Pos, i64)> = None;
    for dir in Direction::ALL {
        if dir == ghost.mobile.dir.opposite() {
            continue;
        }
        let Some(dest) = ghost.pos().step(dir) else {
            continue;
        };
        if arena.is_wall(dest) {
            continue;
        }
        if dest == arena.gate() && !ghost.inside_gate && !ghost.is_dead() {
            continue;
        }
        let dist = dest.squared_distance(target);
        if best.is_none_or(|(_, _, d)| dist < d) {
            best = Some((dir, dest, dist));
        }
    }
    best.map(|(dir, dest, _)| (dir, dest))
}
