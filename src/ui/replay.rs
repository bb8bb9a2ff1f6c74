//! Headless front end: feeds a scripted list of columns to a game and
//! writes each notification plus the final board as plain text.

use std::io::{self, Write};

use crate::game::{Game, MoveReport};

use super::messages::status_line;

/// Play `moves` in order. Rejected moves are reported and skipped; moves
/// after the game ends are reported as rejected too.
pub fn replay<W: Write>(game: &mut Game, moves: &[usize], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", status_line(game.state()))?;
    for (turn, &column) in moves.iter().enumerate() {
        let report = game.submit(column);
        let line = match &report {
            MoveReport::Rejected(err) => format!("rejected: {err}"),
            _ => status_line(game.state()),
        };
        writeln!(out, "{:>3}. column {}: {}", turn + 1, column, line)?;
    }
    writeln!(out)?;
    write!(out, "{}", game.state().board())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Phase};

    fn replay_to_string(game: &mut Game, moves: &[usize]) -> String {
        let mut out = Vec::new();
        replay(game, moves, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replay_reports_each_move() {
        let mut game = Game::new(GameConfig {
            height: 2,
            width: 3,
            ..GameConfig::default()
        })
        .unwrap();
        let output = replay_to_string(&mut game, &[0, 0, 0, 5]);

        let expected = "\
red player's turn
  1. column 0: yellow player's turn
  2. column 0: red player's turn
  3. column 0: rejected: column is full
  4. column 5: rejected: column 5 is out of range (board has 3 columns)

2 . .
1 . .
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_replay_stops_accepting_after_win() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let output = replay_to_string(&mut game, &[0, 1, 0, 1, 0, 1, 0, 2]);

        assert!(output.contains("  7. column 0: The red player won!"));
        assert!(output.contains("  8. column 2: rejected: game is over"));
        assert!(matches!(game.state().phase(), Phase::Won { .. }));
    }
}
