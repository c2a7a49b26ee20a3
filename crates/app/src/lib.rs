pub mod app_loop;
pub mod cue_board;
pub mod seed;
pub mod settings_file;
pub mod view;

pub const APP_NAME: &str = "Pacman";

/// Score line shown above the board while a round is active.
pub fn format_score_line(score: u64, lives: &[u32]) -> String {
    let lives = lives
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("SCORE {score}  LIVES {lives}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_line_covers_one_and_two_players() {
        assert_eq!(format_score_line(0, &[3]), "SCORE 0  LIVES 3");
        assert_eq!(format_score_line(1250, &[2, 3]), "SCORE 1250  LIVES 2/3");
    }
}
