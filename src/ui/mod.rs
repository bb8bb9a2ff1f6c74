//! Front ends for the game engine: an interactive terminal UI and a
//! scripted replay driver. Both only talk to the engine through column
//! indices and [`MoveReport`](crate::game::MoveReport)s.

mod app;
pub mod game_view;
pub mod messages;
pub mod replay;

pub use app::App;
