//! # Gridmind
//!
//! A terminal arcade of two-player, perfect-information grid games with a
//! minimax opponent. Tic-Tac-Toe is searched exhaustively; Connect Four uses
//! depth-bounded alpha-beta search with a static window evaluator.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`engine`] — Adversarial search: config, heuristic, minimax driver
//! - [`ai`] — Agent trait, minimax and random agents
//! - [`ui`] — Terminal UI: menu and play view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;
