use tracing::{debug, info, warn};

use super::board::{Board, Cell, DropError, Position, Run, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::color::{normalize, ColorValidator, CssColors};
use super::player::{Player, PlayerId};
use crate::error::{ConfigError, MoveError};

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub p1_color: String,
    pub p2_color: String,
    pub height: usize,
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            p1_color: "red".to_string(),
            p2_color: "yellow".to_string(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    Won { winner: PlayerId, run: Run },
    Tied,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::AwaitingMove)
    }
}

/// Result of a move that was applied. `placed` is where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { placed: Position, next: PlayerId },
    Win { placed: Position, winner: PlayerId, run: Run },
    Tie { placed: Position },
}

impl MoveOutcome {
    pub fn placed(&self) -> Position {
        match *self {
            MoveOutcome::Continue { placed, .. }
            | MoveOutcome::Win { placed, .. }
            | MoveOutcome::Tie { placed } => placed,
        }
    }
}

/// What the presentation layer is told after every submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReport {
    Continue(PlayerId),
    Win(PlayerId),
    Tie,
    Rejected(MoveError),
}

impl From<Result<MoveOutcome, MoveError>> for MoveReport {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(MoveOutcome::Continue { next, .. }) => MoveReport::Continue(next),
            Ok(MoveOutcome::Win { winner, .. }) => MoveReport::Win(winner),
            Ok(MoveOutcome::Tie { .. }) => MoveReport::Tie,
            Err(err) => MoveReport::Rejected(err),
        }
    }
}

/// Snapshot of a session: grid, both players, whose turn it is, and phase.
/// Only [`Game`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current_player: PlayerId,
    phase: Phase,
}

impl GameState {
    fn new(players: [Player; 2], height: usize, width: usize) -> Self {
        GameState {
            board: Board::new(height, width),
            players,
            current_player: PlayerId::P1,
            phase: Phase::AwaitingMove,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::P1 => &self.players[0],
            PlayerId::P2 => &self.players[1],
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::Won { winner, .. } => Some(self.player(winner)),
            _ => None,
        }
    }

    /// Coordinates of the winning line, if the game was won
    pub fn winning_run(&self) -> Option<Run> {
        match self.phase {
            Phase::Won { run, .. } => Some(run),
            _ => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub fn moves_played(&self) -> usize {
        self.board.piece_count()
    }
}

/// The board engine: owns one session's [`GameState`] and applies moves
/// to it.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a session, validating colors against CSS color names.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_validator(config, &CssColors)
    }

    /// Start a session with a custom color rule.
    pub fn with_validator(
        config: GameConfig,
        validator: &dyn ColorValidator,
    ) -> Result<Self, ConfigError> {
        let players = validate_players(&config, validator).inspect_err(|err| {
            warn!(error = %err, "rejected game configuration");
        })?;
        info!(
            p1 = players[0].color(),
            p2 = players[1].color(),
            height = config.height,
            width = config.width,
            "new game"
        );
        Ok(Game {
            state: GameState::new(players, config.height, config.width),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error nothing changes: the same player keeps the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.state.is_terminal() {
            debug!(column, "move after game over");
            return Err(MoveError::GameOver);
        }

        let mover = self.state.current_player;
        let row = self
            .state
            .board
            .drop_piece(column, mover)
            .map_err(|e| match e {
                DropError::ColumnFull => MoveError::ColumnFull,
                DropError::InvalidColumn => MoveError::OutOfRange {
                    column,
                    width: self.state.board.width(),
                },
            })
            .inspect_err(|err| debug!(column, error = %err, "move rejected"))?;
        let placed = Position::new(row, column);
        debug!(player = %mover, %placed, "piece dropped");

        if let Some(run) = self.state.board.find_winning_run(mover) {
            self.state.phase = Phase::Won { winner: mover, run };
            info!(winner = %self.state.player(mover), "game won");
            return Ok(MoveOutcome::Win {
                placed,
                winner: mover,
                run,
            });
        }

        if self.state.board.is_full() {
            self.state.phase = Phase::Tied;
            info!("game tied");
            return Ok(MoveOutcome::Tie { placed });
        }

        self.state.current_player = mover.other();
        Ok(MoveOutcome::Continue {
            placed,
            next: self.state.current_player,
        })
    }

    /// [`Game::apply_move`] folded into the notification handed to a
    /// front end.
    pub fn submit(&mut self, column: usize) -> MoveReport {
        self.apply_move(column).into()
    }

    /// Discard the current session and start over with the same players and
    /// board size.
    pub fn reset(&mut self) {
        let (height, width) = (self.state.board.height(), self.state.board.width());
        self.state = GameState::new(self.state.players.clone(), height, width);
        info!("game reset");
    }
}

fn validate_players(
    config: &GameConfig,
    validator: &dyn ColorValidator,
) -> Result<[Player; 2], ConfigError> {
    if config.height == 0 || config.width == 0 {
        return Err(ConfigError::InvalidDimensions {
            height: config.height,
            width: config.width,
        });
    }

    let p1 = normalize(&config.p1_color);
    let p2 = normalize(&config.p2_color);
    for (player, color) in [(PlayerId::P1, &p1), (PlayerId::P2, &p2)] {
        if color.is_empty() || !validator.is_valid(color) {
            return Err(ConfigError::InvalidColor {
                player,
                color: color.clone(),
            });
        }
    }
    if p1 == p2 {
        return Err(ConfigError::DuplicateColor(p1));
    }

    Ok([Player::new(PlayerId::P1, p1), Player::new(PlayerId::P2, p2)])
}
