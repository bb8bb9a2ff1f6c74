//! Core Connect Four game logic: board, players, color validation, and the
//! game state machine.

mod board;
mod color;
mod player;
mod state;

pub use board::{Board, Cell, DropError, Position, Run, DEFAULT_HEIGHT, DEFAULT_WIDTH, RUN_LENGTH};
pub use color::{normalize, ColorValidator, CssColors, Palette};
pub use player::{Player, PlayerId};
pub use state::{Game, GameConfig, GameState, MoveOutcome, MoveReport, Phase};
