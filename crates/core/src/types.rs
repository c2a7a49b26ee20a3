use slotmap::new_key_type;

new_key_type! {
    pub struct GhostId;
    pub struct CollectibleId;
}

/// Grid cell coordinate. Coordinates are never negative: `new` rejects
/// negative components outright and `step` refuses to walk off the low edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    x: i32,
    y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        assert!(x >= 0 && y >= 0, "negative coordinate ({x}, {y})");
        Self { x, y }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    pub fn y(self) -> i32 {
        self.y
    }

    /// The cell one step over in `dir`, or `None` when that would leave the
    /// non-negative quadrant.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        let x = self.x + dx;
        let y = self.y + dy;
        if x < 0 || y < 0 { None } else { Some(Self { x, y }) }
    }

    /// Squared Euclidean distance. Only ever compared, never square-rooted.
    pub fn squared_distance(self, other: Self) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Enumeration order is load-bearing: distance ties during ghost
    /// direction selection are broken by first match in this order, so Up
    /// wins exact ties.
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
        }
    }
}

/// Abstract input produced by the shell once per frame. Arrow intents steer
/// player 1, the WASD intents steer player 2, `Select` confirms menu choices
/// and `Quit` pauses or backs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Select,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GhostKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostState {
    Alive,
    Scared,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectibleKind {
    Coin,
    Orange,
    Apple,
    Cherry,
    Key,
    Strawberry,
    PowerUp,
}

impl CollectibleKind {
    pub fn value(self) -> u64 {
        match self {
            Self::Coin => 10,
            Self::Orange => 500,
            Self::Apple => 700,
            Self::Cherry => 100,
            Self::Key => 5000,
            Self::Strawberry => 300,
            Self::PowerUp => 50,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    GameOver,
}

/// Structured record of what happened during a tick. Drained by the shell
/// and the headless tool; tests assert on it instead of scraping output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MapLoaded { width: i32, height: i32 },
    CollectiblePicked { kind: CollectibleKind, value: u64 },
    PowerModeStarted,
    PowerModeEnded,
    GhostEaten { awarded: u64 },
    PacmanCaught { player: usize },
    RoundWon { score: u64 },
    GameOver { score: u64 },
}
