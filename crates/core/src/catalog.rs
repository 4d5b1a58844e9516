//! Shape catalog - static tetromino definitions
//!
//! Every kind has a display color and an ordered list of rotation states.
//! A rotation state is an occupancy matrix; all states of one kind share the
//! same dimensions. Rotation counts follow each piece's symmetry: O has one
//! state, I/S/Z have two, J/L/T have four.

use crate::types::{Color, PieceKind};

const X: bool = true;
const E: bool = false;

/// One orientation of a piece: a rectangular occupancy matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    rows: &'static [&'static [bool]],
}

impl RotationState {
    const fn new(rows: &'static [&'static [bool]]) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix cell at (column, row) is occupied
    pub fn is_occupied(&self, dx: usize, dy: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.get(dx))
            .copied()
            .unwrap_or(false)
    }

    /// Offsets of every occupied cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    pub fn rows(&self) -> &'static [&'static [bool]] {
        self.rows
    }
}

/// Static definition of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub color: Color,
    pub rotations: &'static [RotationState],
}

impl ShapeDef {
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Rotation state at `index`, wrapping past the last state
    pub fn rotation(&self, index: usize) -> &'static RotationState {
        &self.rotations[index % self.rotations.len()]
    }
}

const I_ROTATIONS: [RotationState; 2] = [
    RotationState::new(&[&[E, E, E, E], &[X, X, X, X], &[E, E, E, E], &[E, E, E, E]]),
    RotationState::new(&[&[E, X, E, E], &[E, X, E, E], &[E, X, E, E], &[E, X, E, E]]),
];

const J_ROTATIONS: [RotationState; 4] = [
    RotationState::new(&[&[X, E, E], &[X, X, X], &[E, E, E]]),
    RotationState::new(&[&[E, X, X], &[E, X, E], &[E, X, E]]),
    RotationState::new(&[&[E, E, E], &[X, X, X], &[E, E, X]]),
    RotationState::new(&[&[E, X, E], &[E, X, E], &[X, X, E]]),
];

const L_ROTATIONS: [RotationState; 4] = [
    RotationState::new(&[&[E, E, X], &[X, X, X], &[E, E, E]]),
    RotationState::new(&[&[E, X, E], &[E, X, E], &[E, X, X]]),
    RotationState::new(&[&[E, E, E], &[X, X, X], &[X, E, E]]),
    RotationState::new(&[&[X, X, E], &[E, X, E], &[E, X, E]]),
];

const O_ROTATIONS: [RotationState; 1] = [RotationState::new(&[&[X, X], &[X, X]])];

const S_ROTATIONS: [RotationState; 2] = [
    RotationState::new(&[&[E, X, X], &[X, X, E], &[E, E, E]]),
    RotationState::new(&[&[E, X, E], &[E, X, X], &[E, E, X]]),
];

const T_ROTATIONS: [RotationState; 4] = [
    RotationState::new(&[&[E, X, E], &[X, X, X], &[E, E, E]]),
    RotationState::new(&[&[E, X, E], &[E, X, X], &[E, X, E]]),
    RotationState::new(&[&[E, E, E], &[X, X, X], &[E, X, E]]),
    RotationState::new(&[&[E, X, E], &[X, X, E], &[E, X, E]]),
];

const Z_ROTATIONS: [RotationState; 2] = [
    RotationState::new(&[&[X, X, E], &[E, X, X], &[E, E, E]]),
    RotationState::new(&[&[E, E, X], &[E, X, X], &[E, X, E]]),
];

static SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        color: Color::from_hex(0x22d3ee),
        rotations: &I_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::J,
        color: Color::from_hex(0x60a5fa),
        rotations: &J_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::L,
        color: Color::from_hex(0xf59e0b),
        rotations: &L_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::O,
        color: Color::from_hex(0xfbbf24),
        rotations: &O_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::S,
        color: Color::from_hex(0x34d399),
        rotations: &S_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::T,
        color: Color::from_hex(0xa78bfa),
        rotations: &T_ROTATIONS,
    },
    ShapeDef {
        kind: PieceKind::Z,
        color: Color::from_hex(0xef4444),
        rotations: &Z_ROTATIONS,
    },
];

/// Look up the definition of a piece kind
pub fn shape(kind: PieceKind) -> &'static ShapeDef {
    &SHAPES[kind.index()]
}

/// Rotation state of `kind` at `rotation` (wrapping)
pub fn get_matrix(kind: PieceKind, rotation: usize) -> &'static RotationState {
    shape(kind).rotation(rotation)
}

/// Display color of `kind`
pub fn color_of(kind: PieceKind) -> Color {
    shape(kind).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).kind, kind);
        }
    }

    #[test]
    fn rotation_counts_follow_symmetry() {
        assert_eq!(shape(PieceKind::O).rotation_count(), 1);
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            assert_eq!(shape(kind).rotation_count(), 2, "{kind}");
        }
        for kind in [PieceKind::J, PieceKind::L, PieceKind::T] {
            assert_eq!(shape(kind).rotation_count(), 4, "{kind}");
        }
    }

    #[test]
    fn every_rotation_has_four_cells_and_shared_dimensions() {
        for kind in PieceKind::ALL {
            let def = shape(kind);
            let first = def.rotation(0);
            for state in def.rotations {
                assert_eq!(state.cells().count(), 4, "{kind}");
                assert_eq!(state.width(), first.width(), "{kind}");
                assert_eq!(state.height(), first.height(), "{kind}");
                assert!(state.rows().iter().all(|row| row.len() == first.width()));
            }
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(get_matrix(PieceKind::T, 4), get_matrix(PieceKind::T, 0));
        assert_eq!(get_matrix(PieceKind::O, 3), get_matrix(PieceKind::O, 0));
    }

    #[test]
    fn cells_are_row_major_offsets() {
        let t = get_matrix(PieceKind::T, 0);
        assert_eq!(t.cells().collect::<Vec<_>>(), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(t.is_occupied(1, 0));
        assert!(!t.is_occupied(0, 0));
        assert!(!t.is_occupied(9, 9));
    }
}
