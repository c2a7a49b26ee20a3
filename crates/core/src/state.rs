//! The mutable world: walls, collectibles, ghosts, pacmen, the ghost gate,
//! score and collection counters. One arena lives per round, owned by the
//! session and mutated in place by the controllers.

use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::types::*;

/// Speeds are ticks per grid step, so larger is slower.
pub const PACMAN_NORMAL_SPEED: u32 = 4;
pub const PACMAN_BOOSTED_SPEED: u32 = 3;
pub const GHOST_NORMAL_SPEED: u32 = 3;
pub const GHOST_SCARED_SPEED: u32 = 6;
pub const GHOST_DEAD_SPEED: u32 = 2;

pub const STARTING_LIVES: u32 = 3;
pub const MAX_PACMEN: usize = 2;

/// Movement bookkeeping shared by pacmen and ghosts. A grid step fires only
/// when `counter` is 0; the counter then rearms to `speed - 1` and every
/// other movement tick just counts it back down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mobile {
    pub pos: Pos,
    pub dir: Direction,
    pub speed: u32,
    pub counter: u32,
}

impl Mobile {
    pub fn new(pos: Pos, dir: Direction, speed: u32) -> Self {
        Self { pos, dir, speed, counter: 0 }
    }

    /// Commit the step this mobile has been charging. `dest` must already
    /// have passed the caller's legality checks.
    pub fn advance_to(&mut self, dest: Pos) {
        self.pos = dest;
        self.counter = self.speed - 1;
    }

    /// One tick of counter rundown between grid steps.
    pub fn tick_down(&mut self) {
        debug_assert!(self.counter > 0);
        self.counter -= 1;
    }

    pub fn reverse(&mut self) {
        self.dir = self.dir.opposite();
    }

    /// Sub-cell position for the renderer, interpolating the step that is
    /// currently charging. The simulation itself only ever reads `pos`.
    pub fn real_position(&self) -> (f32, f32) {
        let (dx, dy) = self.dir.offset();
        let back = self.counter as f32 / self.speed as f32;
        (
            self.pos.x() as f32 - dx as f32 * back,
            self.pos.y() as f32 - dy as f32 * back,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacman {
    pub mobile: Mobile,
    pub lives: u32,
    pub dying: bool,
    pub respawn: Pos,
}

impl Pacman {
    pub fn new(pos: Pos) -> Self {
        Self {
            mobile: Mobile::new(pos, Direction::Right, PACMAN_NORMAL_SPEED),
            lives: STARTING_LIVES,
            dying: false,
            respawn: pos,
        }
    }

    pub fn pos(&self) -> Pos {
        self.mobile.pos
    }

    /// The cell in front of the current heading; stays put at a grid edge.
    pub fn next_cell(&self) -> Pos {
        self.mobile.pos.step(self.mobile.dir).unwrap_or(self.mobile.pos)
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Reset to the spawn cell with a cleared step counter and the dying
    /// flag dropped. Speed is the caller's business.
    pub fn respawn_in_place(&mut self) {
        self.mobile.pos = self.respawn;
        self.mobile.counter = 0;
        self.dying = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ghost {
    pub mobile: Mobile,
    pub kind: GhostKind,
    pub state: GhostState,
    pub inside_gate: bool,
    pub respawn: Pos,
}

impl Ghost {
    pub fn new(kind: GhostKind, pos: Pos) -> Self {
        Self {
            mobile: Mobile::new(pos, Direction::Up, GHOST_NORMAL_SPEED),
            kind,
            state: GhostState::Alive,
            inside_gate: true,
            respawn: pos,
        }
    }

    pub fn pos(&self) -> Pos {
        self.mobile.pos
    }

    pub fn is_dead(&self) -> bool {
        self.state == GhostState::Dead
    }

    pub fn is_scared(&self) -> bool {
        self.state == GhostState::Scared
    }

    /// Full reset back into the pen, used when play resumes after a death.
    pub fn reset(&mut self) {
        self.state = GhostState::Alive;
        self.mobile.speed = GHOST_NORMAL_SPEED;
        self.mobile.pos = self.respawn;
        self.mobile.counter = 0;
        self.inside_gate = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collectible {
    pub pos: Pos,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, pos: Pos) -> Self {
        Self { pos, kind }
    }

    pub fn value(&self) -> u64 {
        self.kind.value()
    }
}

#[derive(Clone, Debug)]
pub struct Arena {
    width: i32,
    height: i32,
    walls: BTreeSet<Pos>,
    pub collectibles: SlotMap<CollectibleId, Collectible>,
    pub ghosts: SlotMap<GhostId, Ghost>,
    pub pacmen: Vec<Pacman>,
    gate: Pos,
    pub score: u64,
    collected: u32,
    blank: BTreeSet<Pos>,
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "degenerate arena {width}x{height}");
        Self {
            width,
            height,
            walls: BTreeSet::new(),
            collectibles: SlotMap::with_key(),
            ghosts: SlotMap::with_key(),
            pacmen: Vec::new(),
            gate: Pos::new(0, 0),
            score: 0,
            collected: 0,
            blank: BTreeSet::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn gate(&self) -> Pos {
        self.gate
    }

    pub fn set_gate(&mut self, pos: Pos) {
        self.gate = pos;
    }

    pub fn add_wall(&mut self, pos: Pos) {
        self.walls.insert(pos);
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.contains(&pos)
    }

    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.walls.iter().copied()
    }

    /// Whether a pacman spawn was actually taken; spawns past the limit are
    /// ignored, matching the map format contract.
    pub fn add_pacman(&mut self, pacman: Pacman) -> bool {
        if self.pacmen.len() >= MAX_PACMEN {
            return false;
        }
        self.pacmen.push(pacman);
        true
    }

    pub fn add_ghost(&mut self, ghost: Ghost) -> GhostId {
        self.ghosts.insert(ghost)
    }

    pub fn add_collectible(&mut self, collectible: Collectible) -> CollectibleId {
        self.collectibles.insert(collectible)
    }

    pub fn collectible_at(&self, pos: Pos) -> Option<CollectibleId> {
        self.collectibles.iter().find(|(_, c)| c.pos == pos).map(|(id, _)| id)
    }

    /// Cumulative pickups this round; thresholds in the Inky and Clyde
    /// policies key off it.
    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn record_collected(&mut self) {
        self.collected += 1;
    }

    pub fn add_blank(&mut self, pos: Pos) {
        self.blank.insert(pos);
    }

    pub fn is_blank(&self, pos: Pos) -> bool {
        self.blank.contains(&pos)
    }

    pub fn first_ghost_of(&self, kind: GhostKind) -> Option<&Ghost> {
        self.ghosts.values().find(|g| g.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_step_fires_only_at_zero_counter() {
        let mut mobile = Mobile::new(Pos::new(5, 5), Direction::Right, 4);
        assert_eq!(mobile.counter, 0);
        mobile.advance_to(Pos::new(6, 5));
        assert_eq!(mobile.pos, Pos::new(6, 5));
        assert_eq!(mobile.counter, 3);
        mobile.tick_down();
        mobile.tick_down();
        mobile.tick_down();
        assert_eq!(mobile.counter, 0);
        assert_eq!(mobile.pos, Pos::new(6, 5));
    }

    #[test]
    fn real_position_interpolates_behind_the_grid_cell() {
        let mut mobile = Mobile::new(Pos::new(3, 3), Direction::Right, 4);
        mobile.advance_to(Pos::new(4, 3));
        let (x, y) = mobile.real_position();
        assert!(x > 3.0 && x < 4.0, "still between the cells, got {x}");
        assert_eq!(y, 3.0);
        mobile.counter = 0;
        assert_eq!(mobile.real_position(), (4.0, 3.0));
    }

    #[test]
    fn pacman_starts_with_three_lives_and_never_goes_negative() {
        let mut pacman = Pacman::new(Pos::new(1, 1));
        assert_eq!(pacman.lives, STARTING_LIVES);
        for _ in 0..5 {
            pacman.lose_life();
        }
        assert_eq!(pacman.lives, 0);
    }

    #[test]
    fn respawn_in_place_clears_dying_and_counter() {
        let mut pacman = Pacman::new(Pos::new(2, 2));
        pacman.mobile.advance_to(Pos::new(3, 2));
        pacman.dying = true;
        pacman.respawn_in_place();
        assert_eq!(pacman.pos(), Pos::new(2, 2));
        assert_eq!(pacman.mobile.counter, 0);
        assert!(!pacman.dying);
    }

    #[test]
    fn ghost_reset_returns_it_to_the_pen() {
        let mut ghost = Ghost::new(GhostKind::Pinky, Pos::new(6, 6));
        ghost.state = GhostState::Dead;
        ghost.mobile.speed = GHOST_DEAD_SPEED;
        ghost.mobile.pos = Pos::new(1, 1);
        ghost.inside_gate = false;
        ghost.reset();
        assert_eq!(ghost.state, GhostState::Alive);
        assert_eq!(ghost.mobile.speed, GHOST_NORMAL_SPEED);
        assert_eq!(ghost.pos(), Pos::new(6, 6));
        assert!(ghost.inside_gate);
    }

    #[test]
    fn arena_caps_pacman_spawns_at_two() {
        let mut arena = Arena::new(10, 10);
        assert!(arena.add_pacman(Pacman::new(Pos::new(1, 1))));
        assert!(arena.add_pacman(Pacman::new(Pos::new(2, 2))));
        assert!(!arena.add_pacman(Pacman::new(Pos::new(3, 3))));
        assert_eq!(arena.pacmen.len(), 2);
    }

    #[test]
    fn collectible_lookup_is_by_cell() {
        let mut arena = Arena::new(10, 10);
        let id = arena.add_collectible(Collectible::new(CollectibleKind::Coin, Pos::new(4, 4)));
        assert_eq!(arena.collectible_at(Pos::new(4, 4)), Some(id));
        assert_eq!(arena.collectible_at(Pos::new(4, 5)), None);
    }

    #[test]
    fn first_blinky_wins_lookup() {
        let mut arena = Arena::new(10, 10);
        let first = arena.add_ghost(Ghost::new(GhostKind::Blinky, Pos::new(2, 2)));
        arena.add_ghost(Ghost::new(GhostKind::Blinky, Pos::new(7, 7)));
        let found = arena.first_ghost_of(GhostKind::Blinky).expect("blinky present");
        assert_eq!(found.pos(), arena.ghosts[first].pos());
    }
}
