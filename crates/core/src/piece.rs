//! Piece module - the active falling piece and its movement rules
//!
//! Every move is checked with [`Board::is_placement_legal`]; an illegal move is
//! simply not applied. Rotation walks a fixed list of horizontal kicks instead of
//! full SRS tables.

use crate::board::Board;
use crate::catalog::{color_of, get_matrix, shape, RotationState};
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// Horizontal offsets tried, in order, when a rotation does not fit in place
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Index into the kind's rotation list
    pub rotation: usize,
    /// Column of the matrix's top-left corner
    pub x: i8,
    /// Row of the matrix's top-left corner (negative above the board)
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn matrix(&self) -> &'static RotationState {
        get_matrix(self.kind, self.rotation)
    }

    pub fn color(&self) -> Color {
        color_of(self.kind)
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.matrix().cells().map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// The piece shifted by (dx, dy), if that position is legal
    pub fn translated(&self, board: &Board, dx: i8, dy: i8) -> Option<Piece> {
        let moved = Piece {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        board.fits(&moved).then_some(moved)
    }

    /// The piece at its next rotation state, kicked sideways if needed
    ///
    /// Tries [`KICK_OFFSETS`] in order on the same row and takes the first
    /// legal placement. `None` when every offset collides.
    pub fn rotated(&self, board: &Board) -> Option<Piece> {
        let next_rotation = (self.rotation + 1) % shape(self.kind).rotation_count();
        KICK_OFFSETS.iter().find_map(|&dx| {
            let candidate = Piece {
                rotation: next_rotation,
                x: self.x + dx,
                ..*self
            };
            board.fits(&candidate).then_some(candidate)
        })
    }

    /// The piece moved down as far as it legally goes
    pub fn dropped(&self, board: &Board) -> Piece {
        let mut resting = *self;
        while let Some(lower) = resting.translated(board, 0, 1) {
            resting = lower;
        }
        resting
    }
}
