//! Contact resolution, run after both movement controllers. Handles ghost
//! catches, pickups, power mode, and the scared-mode countdown, and fires
//! the audio cues tied to each.

use crate::audio::{AudioCue, AudioSink};
use crate::state::{
    Arena, GHOST_DEAD_SPEED, GHOST_NORMAL_SPEED, GHOST_SCARED_SPEED,
    PACMAN_BOOSTED_SPEED, PACMAN_NORMAL_SPEED,
};
use crate::types::{CollectibleKind, GameEvent, GhostState};

pub const SCARED_MODE_TICKS: u32 = 300;
pub const DEAD_PACMAN_DELAY_TICKS: u32 = 110;
pub const GHOST_EATEN_BASE_SCORE: u64 = 200;

/// What the session must do after this tick's collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionVerdict {
    Continue,
    /// A pacman was caught with no revival path; the round enters the
    /// dying sequence.
    EnterDying,
}

#[derive(Debug, Default)]
pub struct CollisionController {
    scared_ticks_left: u32,
    ghosts_eaten: u32,
    /// Per-pacman revival countdowns for multiplayer catches.
    dead_pacman_ticks: [u32; 2],
}

impl CollisionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn power_mode_active(&self) -> bool {
        self.scared_ticks_left > 0
    }

    pub fn step(
        &mut self,
        arena: &mut Arena,
        audio: &mut dyn AudioSink,
        events: &mut Vec<GameEvent>,
    ) -> CollisionVerdict {
        // Timers run first so a catch this tick waits the full delay.
        let mut verdict = self.dead_pacman_timers(arena);
        if self.agent_collisions(arena, audio, events) == CollisionVerdict::EnterDying {
            verdict = CollisionVerdict::EnterDying;
        }
        self.pickups(arena, audio, events);
        self.scared_countdown(arena, audio, events);
        verdict
    }

    fn agent_collisions(
        &mut self,
        arena: &mut Arena,
        audio: &mut dyn AudioSink,
        events: &mut Vec<GameEvent>,
    ) -> CollisionVerdict {
        let multiplayer = arena.pacmen.len() > 1;
        let mut verdict = CollisionVerdict::Continue;
        let ghost_ids: Vec<_> = arena.ghosts.keys().collect();

        for index in 0..arena.pacmen.len() {
            if arena.pacmen[index].dying {
                continue;
            }
            for &gid in &ghost_ids {
                let ghost = arena.ghosts[gid];
                if ghost.pos() != arena.pacmen[index].pos() {
                    continue;
                }
                match ghost.state {
                    GhostState::Alive => {
                        let pacman = &mut arena.pacmen[index];
                        pacman.lose_life();
                        pacman.dying = true;
                        pacman.mobile.speed = PACMAN_NORMAL_SPEED;
                        events.push(GameEvent::PacmanCaught { player: index });
                        // With another player still on the board the round
                        // keeps going; whether this pacman comes back is
                        // decided when its timer runs out.
                        if multiplayer {
                            self.dead_pacman_ticks[index] = DEAD_PACMAN_DELAY_TICKS;
                        } else {
                            verdict = CollisionVerdict::EnterDying;
                        }
                        break;
                    }
                    GhostState::Scared => {
                        let awarded = GHOST_EATEN_BASE_SCORE << self.ghosts_eaten;
                        self.ghosts_eaten += 1;
                        arena.score += awarded;
                        let ghost = &mut arena.ghosts[gid];
                        ghost.state = GhostState::Dead;
                        ghost.mobile.speed = GHOST_DEAD_SPEED;
                        audio.play_once(AudioCue::GhostEaten);
                        events.push(GameEvent::GhostEaten { awarded });
                        // Once the whole pack is dead the scared siren has
                        // nothing left to announce.
                        if arena.ghosts.values().all(|g| !g.is_scared()) {
                            audio.stop(AudioCue::ScaredSiren);
                            audio.play_loop(AudioCue::AliveSiren);
                        }
                    }
                    GhostState::Dead => {}
                }
            }
        }
        verdict
    }

    /// Multiplayer revival: a caught pacman sits out a fixed delay, then
    /// comes back at its spawn if it still has lives.
    fn dead_pacman_timers(&mut self, arena: &mut Arena) -> CollisionVerdict {
        let mut verdict = CollisionVerdict::Continue;
        for index in 0..arena.pacmen.len().min(self.dead_pacman_ticks.len()) {
            let ticks = &mut self.dead_pacman_ticks[index];
            if *ticks == 0 {
                continue;
            }
            *ticks -= 1;
            if *ticks > 0 {
                continue;
            }
            if arena.pacmen[index].lives > 0 {
                arena.pacmen[index].respawn_in_place();
            } else {
                verdict = CollisionVerdict::EnterDying;
            }
        }
        verdict
    }

    fn pickups(
        &mut self,
        arena: &mut Arena,
        audio: &mut dyn AudioSink,
        events: &mut Vec<GameEvent>,
    ) {
        for index in 0..arena.pacmen.len() {
            if arena.pacmen[index].dying {
                continue;
            }
            let pos = arena.pacmen[index].pos();
            let Some(id) = arena.collectible_at(pos) else {
                continue;
            };
            let Some(collectible) = arena.collectibles.remove(id) else {
                continue;
            };
            arena.score += collectible.value();
            arena.record_collected();
            arena.add_blank(pos);
            audio.play_once(AudioCue::CollectibleEaten);
            events.push(GameEvent::CollectiblePicked {
                kind: collectible.kind,
                value: collectible.value(),
            });
            if collectible.kind == CollectibleKind::PowerUp {
                self.start_power_mode(arena, audio, events);
            }
        }
    }

    fn start_power_mode(
        &mut self,
        arena: &mut Arena,
        audio: &mut dyn AudioSink,
        events: &mut Vec<GameEvent>,
    ) {
        let gate = arena.gate();
        for ghost in arena.ghosts.values_mut() {
            if ghost.state == GhostState::Alive {
                ghost.state = GhostState::Scared;
                ghost.mobile.speed = GHOST_SCARED_SPEED;
            }
            if ghost.pos() != gate {
                ghost.mobile.reverse();
            }
        }
        for pacman in &mut arena.pacmen {
            pacman.mobile.speed = PACMAN_BOOSTED_SPEED;
        }
        self.scared_ticks_left = SCARED_MODE_TICKS;
        self.ghosts_eaten = 0;
        audio.stop(AudioCue::AliveSiren);
        audio.play_loop(AudioCue::ScaredSiren);
        events.push(GameEvent::PowerModeStarted);
    }

    fn scared_countdown(
        &mut self,
        arena: &mut Arena,
        audio: &mut dyn AudioSink,
        events: &mut Vec<GameEvent>,
    ) {
        if self.scared_ticks_left == 0 {
            // Steady state: keep the ambient siren alive without
            // restarting it every tick.
            if !audio.is_playing(AudioCue::AliveSiren) {
                audio.play_loop(AudioCue::AliveSiren);
            }
            return;
        }
        self.scared_ticks_left -= 1;
        if self.scared_ticks_left > 0 {
            return;
        }
        for ghost in arena.ghosts.values_mut() {
            if ghost.is_scared() {
                ghost.state = GhostState::Alive;
                ghost.mobile.speed = GHOST_NORMAL_SPEED;
            }
        }
        for pacman in &mut arena.pacmen {
            pacman.mobile.speed = PACMAN_NORMAL_SPEED;
        }
        audio.stop(AudioCue::ScaredSiren);
        audio.play_loop(AudioCue::AliveSiren);
        events.push(GameEvent::PowerModeEnded);
    }
}
