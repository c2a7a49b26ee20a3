//! Pacman movement. Keeps one desired-direction slot per player, fed from
//! the frame's intents, and resolves it against walls, the gate, and the
//! other player.

use crate::state::{Arena, MAX_PACMEN};
use crate::types::{Direction, Intent, Pos};

#[derive(Debug, Default)]
pub struct PacmanController {
    desired: [Option<Direction>; MAX_PACMEN],
}

impl PacmanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.desired = [None; MAX_PACMEN];
    }

    /// Fold this frame's intents into the per-player slots. A later intent
    /// for the same player overwrites an earlier one.
    pub fn absorb_intents(&mut self, intents: &[Intent]) {
        for intent in intents {
            match intent {
                Intent::Up => self.desired[0] = Some(Direction::Up),
                Intent::Down => self.desired[0] = Some(Direction::Down),
                Intent::Left => self.desired[0] = Some(Direction::Left),
                Intent::Right => self.desired[0] = Some(Direction::Right),
                Intent::W => self.desired[1] = Some(Direction::Up),
                Intent::S => self.desired[1] = Some(Direction::Down),
                Intent::A => self.desired[1] = Some(Direction::Left),
                Intent::D => self.desired[1] = Some(Direction::Right),
                Intent::Select | Intent::Quit => {}
            }
        }
    }

    pub fn step(&mut self, arena: &mut Arena, tick: u64) {
        for index in 0..arena.pacmen.len() {
            let pacman = arena.pacmen[index];
            if pacman.dying || tick % pacman.mobile.speed as u64 == 1 {
                continue;
            }

            // An about-turn is always legal and takes effect immediately,
            // even mid-charge.
            if let Some(desired) = self.desired[index]
                && desired == pacman.mobile.dir.opposite()
            {
                arena.pacmen[index].mobile.reverse();
                self.desired[index] = None;
                continue;
            }

            if pacman.mobile.counter > 0 {
                arena.pacmen[index].mobile.tick_down();
                continue;
            }

            if let Some(desired) = self.desired[index]
                && let Some(dest) = self.walkable(arena, index, desired)
            {
                let pacman = &mut arena.pacmen[index];
                pacman.mobile.dir = desired;
                pacman.mobile.advance_to(dest);
                self.desired[index] = None;
                continue;
            }

            // Desired absent or blocked: keep rolling on the current
            // heading, or stand still. An illegal desire stays queued.
            if let Some(dest) = self.walkable(arena, index, pacman.mobile.dir) {
                arena.pacmen[index].mobile.advance_to(dest);
            }
        }
    }

    /// Destination cell if `dir` is legal for pacman `index`: in bounds, not
    /// a wall, not the gate, not under another living pacman.
    fn walkable(&self, arena: &Arena, index: usize, dir: Direction) -> Option<Pos> {
        let dest = arena.pacmen[index].pos().step(dir)?;
        if arena.is_wall(dest) || dest == arena.gate() {
            return None;
        }
        let blocked = arena
            .pacmen
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && !other.dying && other.pos() == dest);
        if blocked { None } else { Some(dest) }
    }
}
