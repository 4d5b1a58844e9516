//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, key mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: column 3, row 0, rotation 0 for every piece
//!
//! # Gravity
//!
//! The drop interval shrinks by 80ms per level above 1 and never goes below
//! the 120ms floor:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 920ms |
//! | 5 | 680ms |
//! | 10 | 280ms |
//! | 12+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use testris_types::{Cell, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Parse a command by its camelCase name
//! let command = Command::from_str("hardDrop").unwrap();
//! assert_eq!(command, Command::HardDrop);
//!
//! assert!(Cell::Empty.is_empty());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for every new active piece (top-left of its matrix)
pub const SPAWN_X: i8 = 3;

/// Spawn row for every new active piece
pub const SPAWN_Y: i8 = 0;

/// Side length of the square next-piece preview window
pub const PREVIEW_SIZE: usize = 4;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 80;

/// Fastest gravity interval (120ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Lines needed per level-up
pub const LINES_PER_LEVEL: u32 = 10;

/// Default host loop step in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Line clear scoring table
///
/// Base points for clearing N lines with one lock:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the level the lock happened at.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **J**: Blue, J-shaped
/// - **L**: Amber, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Violet, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use testris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used in logs and the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit display color of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A cell on the game board
///
/// Locked cells remember the color of the piece that locked there, not its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// Abstract user commands consumed by the game state machine
///
/// Input layers (keyboard, buttons) translate their events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row, locking it if it cannot descend
    SoftDrop,
    /// Rotate piece to its next rotation state, with wall kicks
    Rotate,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Begin or resume play (resets first after game over)
    Start,
    /// Pause a running game
    Pause,
    /// Discard the session and return to a fresh idle game
    Reset,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use testris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "harddrop" => Some(Command::HardDrop),
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Reset => "reset",
        }
    }
}

/// Lifecycle phase of a game session
///
/// `Idle → Running ⇄ Paused`, `Running → GameOver`; reset returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    /// Started and not over (paused games still count as running).
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::Paused)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }

    /// Only this phase accepts piece commands and gravity.
    pub fn is_playable(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_and_scoring_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 80);
        assert_eq!(DROP_INTERVAL_FLOOR_MS, 120);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn command_names_round_trip() {
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::HardDrop,
            Command::Start,
            Command::Pause,
            Command::Reset,
        ] {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
    }

    #[test]
    fn color_hex_formatting() {
        let cyan = Color::from_hex(0x22d3ee);
        assert_eq!(cyan, Color::new(0x22, 0xd3, 0xee));
        assert_eq!(cyan.to_string(), "#22d3ee");
    }

    #[test]
    fn phase_flags() {
        assert!(!Phase::Idle.is_running());
        assert!(Phase::Running.is_playable());
        assert!(Phase::Paused.is_running());
        assert!(!Phase::Paused.is_playable());
        assert!(Phase::GameOver.is_game_over());
        assert!(!Phase::GameOver.is_running());
    }
}
