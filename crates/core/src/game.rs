//! The session: one arena, three controllers, a phase machine, and the
//! structured event log. The shell calls [`Session::tick`] once per frame
//! with that frame's intents and an audio sink.

pub mod collisions;
pub mod ghost_policy;
pub mod ghosts;
pub mod pacmen;
pub mod phase;

use std::path::PathBuf;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::audio::{AudioCue, AudioSink};
use crate::game::collisions::{CollisionController, CollisionVerdict};
use crate::game::ghosts::GhostController;
use crate::game::pacmen::PacmanController;
use crate::game::phase::{DYING_DELAY_TICKS, MenuAction, Phase, apply_menu_intent};
use crate::maploader::{MapError, load_map};
use crate::state::{Arena, PACMAN_NORMAL_SPEED};
use crate::types::{GameEvent, Intent, RoundOutcome};

pub struct Session {
    phase: Phase,
    maps: Vec<PathBuf>,
    arena: Option<Arena>,
    pacman_ctl: PacmanController,
    ghost_ctl: GhostController,
    collision_ctl: CollisionController,
    rng: ChaCha8Rng,
    tick: u64,
    exit_requested: bool,
    current_map: Option<usize>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Fresh session at the main menu. `maps` is the selectable map list,
    /// in display order.
    pub fn new(seed: u64, maps: Vec<PathBuf>) -> Self {
        Self {
            phase: Phase::main_menu(),
            maps,
            arena: None,
            pacman_ctl: PacmanController::new(),
            ghost_ctl: GhostController::new(),
            collision_ctl: CollisionController::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            tick: 0,
            exit_requested: false,
            current_map: None,
            events: Vec::new(),
        }
    }

    /// Session dropped straight into play on a prebuilt arena. Headless
    /// callers and tests use this to skip the menus.
    pub fn with_arena(seed: u64, arena: Arena) -> Self {
        let mut session = Self::new(seed, Vec::new());
        session.events.push(GameEvent::MapLoaded {
            width: arena.width(),
            height: arena.height(),
        });
        session.arena = Some(arena);
        session.phase = Phase::Playing;
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    pub fn maps(&self) -> &[PathBuf] {
        &self.maps
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Index into [`Self::maps`] of the round currently loaded, if any.
    pub fn current_map(&self) -> Option<usize> {
        self.current_map
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one frame. The only fallible path is loading a newly
    /// selected map, which is fatal to the round.
    pub fn tick(
        &mut self,
        intents: &[Intent],
        audio: &mut dyn AudioSink,
    ) -> Result<(), MapError> {
        match self.phase {
            Phase::Playing => {
                self.tick_playing(intents, audio);
                Ok(())
            }
            Phase::Dying { ticks_left } => {
                self.tick_dying(ticks_left, audio);
                Ok(())
            }
            _ => self.tick_menu(intents, audio),
        }
    }

    fn tick_playing(&mut self, intents: &[Intent], audio: &mut dyn AudioSink) {
        if intents.contains(&Intent::Quit) {
            audio.stop_all();
            self.phase = Phase::Paused { cursor: 0 };
            return;
        }
        let Some(arena) = self.arena.as_mut() else {
            return;
        };

        // Win check runs before the controllers so the frame that empties
        // the board ends the round without moving anything.
        if arena.collectibles.is_empty() {
            self.events.push(GameEvent::RoundWon { score: arena.score });
            audio.stop_all();
            self.phase = Phase::Alert { outcome: RoundOutcome::Won, cursor: 0 };
            return;
        }

        self.pacman_ctl.absorb_intents(intents);
        self.pacman_ctl.step(arena, self.tick);
        self.ghost_ctl.step(arena, self.tick, &mut self.rng);
        let verdict = self.collision_ctl.step(arena, audio, &mut self.events);
        if verdict == CollisionVerdict::EnterDying {
            audio.stop_all();
            audio.play_once(AudioCue::Death);
            self.phase = Phase::Dying { ticks_left: DYING_DELAY_TICKS };
        }
        self.tick += 1;
    }

    fn tick_dying(&mut self, ticks_left: u32, audio: &mut dyn AudioSink) {
        self.tick += 1;
        let ticks_left = ticks_left.saturating_sub(1);
        if ticks_left > 0 {
            self.phase = Phase::Dying { ticks_left };
            return;
        }
        let Some(arena) = self.arena.as_mut() else {
            self.phase = Phase::main_menu();
            return;
        };
        if arena.pacmen.iter().any(|p| p.lives > 0) {
            for pacman in &mut arena.pacmen {
                if pacman.lives > 0 {
                    pacman.respawn_in_place();
                    pacman.mobile.speed = PACMAN_NORMAL_SPEED;
                }
            }
            for ghost in arena.ghosts.values_mut() {
                ghost.reset();
            }
            self.pacman_ctl.reset();
            self.ghost_ctl.reset();
            self.collision_ctl.reset();
            self.phase = Phase::Playing;
        } else {
            self.events.push(GameEvent::GameOver { score: arena.score });
            audio.stop_all();
            self.phase = Phase::Alert { outcome: RoundOutcome::GameOver, cursor: 0 };
        }
    }

    fn tick_menu(
        &mut self,
        intents: &[Intent],
        audio: &mut dyn AudioSink,
    ) -> Result<(), MapError> {
        for &intent in intents {
            let (next, action) = apply_menu_intent(self.phase, intent, self.maps.len());
            self.phase = next;
            match action {
                Some(MenuAction::LoadMap(index)) => self.load_round(index)?,
                Some(MenuAction::Resume) => {}
                Some(MenuAction::LeaveForMainMenu) => {
                    self.arena = None;
                    audio.stop_all();
                }
                Some(MenuAction::ExitApp) => self.exit_requested = true,
                None => {}
            }
        }
        Ok(())
    }

    /// Build a fresh round from the selected map. Failure propagates; the
    /// caller treats it as fatal.
    fn load_round(&mut self, index: usize) -> Result<(), MapError> {
        let arena = load_map(&self.maps[index])?;
        self.events.push(GameEvent::MapLoaded {
            width: arena.width(),
            height: arena.height(),
        });
        self.arena = Some(arena);
        self.current_map = Some(index);
        self.pacman_ctl.reset();
        self.ghost_ctl.reset();
        self.collision_ctl.reset();
        self.tick = 0;
        Ok(())
    }
}
