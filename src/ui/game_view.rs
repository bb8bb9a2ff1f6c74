use crate::game::{Board, Cell, CssColors, GameState, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game_state: &GameState, selected_column: usize, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                      // Header
            Constraint::Min(game_state.board().height() as u16 + 4), // Board
            Constraint::Length(3),                                      // Message
            Constraint::Length(3),                                      // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal color for a player's color token.
pub fn player_color(player: &Player) -> Color {
    CssColors::rgb(player.color())
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.winner() {
        Some(winner) => (format!("Game Over  |  {} wins", winner), player_color(winner)),
        None if game_state.is_terminal() => ("Game Over  |  Tie".to_string(), Color::White),
        None => {
            let current = game_state.current_player();
            (format!("Current Player: {}", current), player_color(current))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = game_state.board();
    let winning_run = game_state.winning_run();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column && !game_state.is_terminal() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(id) => {
                    let mut style = Style::default().fg(player_color(game_state.player(id)));
                    let pos = Position::new(row, col);
                    if winning_run.is_some_and(|run| run.contains(&pos)) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column && !game_state.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &str, area: Rect) {
    let msg_widget = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_player_color_resolves_css_names() {
        let game = Game::new(GameConfig {
            p1_color: "#00ff00".to_string(),
            ..GameConfig::default()
        })
        .unwrap();
        let state = game.state();
        assert_eq!(player_color(&state.players()[0]), Color::Rgb(0, 255, 0));
        assert_eq!(player_color(&state.players()[1]), Color::Rgb(255, 255, 0));
    }

    #[test]
    fn test_render_shows_turn_and_message() {
        let game = Game::new(GameConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|f| render(f, game.state(), 3, "red player's turn"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Current Player: Player 1 (red)"));
        assert!(text.contains("red player's turn"));
    }

    #[test]
    fn test_render_after_win() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.submit(col);
        }
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|f| render(f, game.state(), 0, "The red player won!"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Game Over  |  Player 1 (red) wins"));
    }
}
