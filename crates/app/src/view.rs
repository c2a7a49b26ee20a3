//! Pure board-to-screen layout math. The renderer is thin macroquad glue
//! over these numbers.

/// How the arena grid maps onto the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub cell: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Top margin reserved for the score line.
pub const HUD_HEIGHT: f32 = 40.0;

/// Fit an `arena_w` x `arena_h` grid into the window, centered, with square
/// cells and the HUD strip left free at the top.
pub fn board_layout(screen_w: f32, screen_h: f32, arena_w: i32, arena_h: i32) -> BoardLayout {
    let usable_h = (screen_h - HUD_HEIGHT).max(1.0);
    let cell = (screen_w / arena_w as f32).min(usable_h / arena_h as f32).floor().max(1.0);
    let board_w = cell * arena_w as f32;
    let board_h = cell * arena_h as f32;
    BoardLayout {
        cell,
        origin_x: (screen_w - board_w) / 2.0,
        origin_y: HUD_HEIGHT + (usable_h - board_h) / 2.0,
    }
}

impl BoardLayout {
    /// Screen coordinates of a (possibly fractional) cell's top-left corner.
    pub fn cell_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.cell, self.origin_y + y * self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fits_the_board_inside_the_window() {
        let layout = board_layout(1000.0, 750.0, 29, 16);
        assert!(layout.cell >= 1.0);
        assert!(layout.origin_x >= 0.0);
        assert!(layout.origin_y >= HUD_HEIGHT);
        let (right, bottom) = layout.cell_to_screen(29.0, 16.0);
        assert!(right <= 1000.0);
        assert!(bottom <= 750.0);
    }

    #[test]
    fn tall_boards_are_height_limited() {
        let wide = board_layout(1000.0, 750.0, 10, 10);
        let tall = board_layout(1000.0, 750.0, 10, 40);
        assert!(tall.cell < wide.cell);
    }

    #[test]
    fn cell_mapping_is_affine() {
        let layout = BoardLayout { cell: 20.0, origin_x: 100.0, origin_y: 40.0 };
        assert_eq!(layout.cell_to_screen(0.0, 0.0), (100.0, 40.0));
        assert_eq!(layout.cell_to_screen(2.5, 1.0), (150.0, 60.0));
    }

    #[test]
    fn degenerate_windows_still_produce_positive_cells() {
        let layout = board_layout(5.0, 5.0, 29, 16);
        assert!(layout.cell >= 1.0);
    }
}
