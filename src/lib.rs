//! # Connect Four
//!
//! Rules engine and turn state machine for two-player Connect Four on a
//! board of any size, with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, color validation, state machine
//! - [`ui`] — Terminal UI and headless replay front ends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
