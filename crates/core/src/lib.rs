//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering or input devices, making it:
//!
//! - **Deterministic**: Same seed (or scripted kind sequence) produces identical games
//! - **Testable**: Every rule is a plain function or method call
//! - **Portable**: Can run behind a terminal, a GUI, or headless
//!
//! # Module Structure
//!
//! - [`catalog`]: The seven piece kinds, their colors and rotation matrices
//! - [`board`]: 10x20 grid with placement legality, merge and line clearing
//! - [`piece`]: Active piece movement and rotation with horizontal kicks
//! - [`scoring`]: Line clear points, leveling and gravity interval
//! - [`rng`]: Injectable piece kind source (seeded LCG by default)
//! - [`scheduler`]: The single gravity timer
//! - [`game_state`]: The session state machine and its commands
//! - [`snapshot`]: Read-only export for renderers
//!
//! # Game Rules
//!
//! - **Uniform draws**: Every piece kind is equally likely, independently
//! - **Simple kicks**: Rotation tries horizontal offsets 0, -1, +1, -2, +2
//! - **No lock delay**: A piece locks on the first gravity step it cannot take
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the current level
//! - **Leveling**: One level per 10 lines, starting at level 1
//!
//! # Example
//!
//! ```
//! use testris_core::GameState;
//! use testris_core::types::Command;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! assert!(game.apply(Command::Start));
//!
//! // Apply commands
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! assert!(game.apply(Command::HardDrop));
//!
//! // Feed host time: one gravity tick per second at level 1
//! assert_eq!(game.advance(1000), 1);
//! assert!(game.running());
//! ```
//!
//! # Timing
//!
//! The host owns the clock and calls
//! [`GameState::advance`](game_state::GameState::advance) with elapsed milliseconds.
//! Gravity fires every `max(1000 - (level - 1) * 80, 120)` ms while running.

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use testris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{color_of, get_matrix, shape, RotationState, ShapeDef};
pub use game_state::{GameState, LockEvent};
pub use piece::{Piece, KICK_OFFSETS};
pub use rng::{KindSource, ScriptedKinds, SimpleRng};
pub use scheduler::GravityTimer;
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, score_for_lines};
pub use snapshot::{compose_grid, preview_matrix, GameSnapshot, Grid, Preview};
