//! Input module - key identifiers to game commands.
//!
//! Two front doors share one command vocabulary: browser-style key names
//! (`"ArrowLeft"`, `"Space"`, ...) and `crossterm` key events for the terminal
//! runner. One press maps to at most one command; there is no auto-repeat.

pub mod map;

pub use testris_types as types;

pub use map::{handle_key_event, key_name_to_command, should_quit};
