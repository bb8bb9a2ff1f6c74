use crate::game::{Game, MoveReport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::messages::{report_message, status_line};

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: String,
}

impl App {
    pub fn new(game: Game) -> Self {
        let message = status_line(game.state());
        let selected_column = game.state().board().width() / 2;
        App {
            game,
            selected_column, // Start in middle
            should_quit: false,
            message,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Translate a key press into a column selection, a drop, or a command.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let width = self.game.state().board().width();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                // Keys past the last column are swallowed here
                if column < width {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = width / 2;
                self.message = status_line(self.game.state());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let report = self.game.submit(self.selected_column);
        if let MoveReport::Rejected(err) = &report {
            debug!(column = self.selected_column, error = %err, "drop ignored");
        }
        self.message = report_message(self.game.state(), &report);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self.game.state(), self.selected_column, &self.message);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig, PlayerId};

    fn app() -> App {
        App::new(Game::new(GameConfig::default()).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = app();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.message(), "red player's turn");
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().state().cell(5, 2), Cell::Occupied(PlayerId::P1));
        assert_eq!(app.message(), "yellow player's turn");
    }

    #[test]
    fn test_digit_keys_drop_directly() {
        let mut app = app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.selected_column(), 6);
        assert_eq!(app.game().state().cell(5, 6), Cell::Occupied(PlayerId::P1));

        // Column 8 does not exist on a 7-wide board
        press(&mut app, KeyCode::Char('8'));
        assert_eq!(app.game().state().moves_played(), 1);
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app();
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.message(), "The red player won!");

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.message(), "Game over! Press 'r' to restart.");

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game().state().is_terminal());
        assert_eq!(app.game().state().moves_played(), 0);
        assert_eq!(app.message(), "red player's turn");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
