use crate::error::MoveError;
use crate::game::{GameState, MoveReport, Phase};

/// Footer text for the current phase.
pub fn status_line(state: &GameState) -> String {
    match state.phase() {
        Phase::AwaitingMove => format!("{} player's turn", state.current_player().color()),
        Phase::Won { winner, .. } => format!("The {} player won!", state.player(winner).color()),
        Phase::Tied => "Player 1 and 2 have Tied!".to_string(),
    }
}

/// Footer text after a move was submitted. `state` is the state after the
/// move.
pub fn report_message(state: &GameState, report: &MoveReport) -> String {
    match report {
        MoveReport::Continue(_) | MoveReport::Win(_) | MoveReport::Tie => status_line(state),
        MoveReport::Rejected(MoveError::ColumnFull) => "Column is full!".to_string(),
        MoveReport::Rejected(MoveError::OutOfRange { .. }) => "Invalid column!".to_string(),
        MoveReport::Rejected(MoveError::GameOver) => {
            "Game over! Press 'r' to restart.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig};

    #[test]
    fn test_turn_messages() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(status_line(game.state()), "red player's turn");

        let report = game.submit(0);
        assert_eq!(report_message(game.state(), &report), "yellow player's turn");
    }

    #[test]
    fn test_win_message() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        for col in [0, 1, 0, 1, 0, 1] {
            game.submit(col);
        }
        let report = game.submit(0);
        assert_eq!(report_message(game.state(), &report), "The red player won!");

        let report = game.submit(0);
        assert_eq!(
            report_message(game.state(), &report),
            "Game over! Press 'r' to restart."
        );
    }

    #[test]
    fn test_rejection_messages() {
        let mut game = Game::new(GameConfig {
            height: 1,
            ..GameConfig::default()
        })
        .unwrap();
        game.submit(0);
        let report = game.submit(0);
        assert_eq!(report_message(game.state(), &report), "Column is full!");

        let report = game.submit(12);
        assert_eq!(report_message(game.state(), &report), "Invalid column!");
    }
}
