//! Shared fixtures for unit and integration tests. Not part of the public
//! API surface proper, but kept compiled-in so downstream test crates can
//! reuse the same boards.

use crate::maploader::parse_map;
use crate::state::Arena;

/// Small wall-bounded board: one pacman, one Blinky in the pen, a gate,
/// coins and one power-up.
pub const DEMO_MAP: &str = "\
WWWWWWWWWW
WP o   o W
W WW WWW W
W o WDW uW
W   WbW  W
W WW W W W
W o    o W
WWWWWWWWWW";

pub fn demo_arena() -> Arena {
    match parse_map(DEMO_MAP) {
        Ok(arena) => arena,
        Err(err) => panic!("demo map must parse: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    #[test]
    fn demo_board_has_the_advertised_furniture() {
        let arena = demo_arena();
        assert_eq!(arena.pacmen.len(), 1);
        assert_eq!(arena.ghosts.len(), 1);
        assert_eq!(arena.gate(), Pos::new(5, 3));
        assert!(arena.collectibles.len() >= 5);
        assert!(arena.is_wall(Pos::new(0, 0)));
    }
}
