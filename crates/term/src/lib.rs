//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a snapshot is drawn into a plain
//! framebuffer, and the renderer flushes only the cells that changed since the
//! previous frame. No widget toolkit is involved, which keeps precise control
//! over the aspect ratio (2 columns per board cell by default).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use testris_core as core;
pub use testris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
