//! Read-only view of a session for renderers.

use crate::board::Board;
use crate::catalog::shape;
use crate::piece::Piece;
use crate::types::{Cell, Command, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

/// Visible board rows, top to bottom
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Next-piece preview window
pub type Preview = [[Cell; PREVIEW_SIZE]; PREVIEW_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece drawn over them
    pub grid: Grid,
    pub next: PieceKind,
    /// Next piece centered in a 4x4 window
    pub preview: Preview,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub revision: u32,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn playable(&self) -> bool {
        self.phase.is_playable()
    }

    /// Command behind the primary HUD button
    pub fn primary_command(&self) -> Command {
        if self.playable() {
            Command::Pause
        } else {
            Command::Start
        }
    }

    /// Label of the primary HUD button
    pub fn primary_label(&self) -> &'static str {
        match self.phase {
            Phase::Running => "Pause",
            Phase::Paused => "Resume",
            Phase::Idle | Phase::GameOver => "Start",
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: PieceKind::I,
            preview: [[Cell::Empty; PREVIEW_SIZE]; PREVIEW_SIZE],
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Idle,
            revision: 0,
        }
    }
}

/// Copy `board` into `out` and paint the visible cells of `active` over it
pub fn compose_grid(board: &Board, active: Option<&Piece>, out: &mut Grid) {
    for (dst, src) in out.iter_mut().zip(board.rows()) {
        dst.copy_from_slice(src);
    }

    let Some(piece) = active else {
        return;
    };
    let cell = Cell::Occupied(piece.color());
    for (x, y) in piece.cells() {
        if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
            out[y as usize][x as usize] = cell;
        }
    }
}

/// Spawn rotation of `kind` centered in the preview window
pub fn preview_matrix(kind: PieceKind) -> Preview {
    let def = shape(kind);
    let matrix = def.rotation(0);
    let offset_y = PREVIEW_SIZE.saturating_sub(matrix.height()) / 2;
    let offset_x = PREVIEW_SIZE.saturating_sub(matrix.width()) / 2;

    let mut preview = [[Cell::Empty; PREVIEW_SIZE]; PREVIEW_SIZE];
    for (dx, dy) in matrix.cells() {
        let x = offset_x + dx as usize;
        let y = offset_y + dy as usize;
        if x < PREVIEW_SIZE && y < PREVIEW_SIZE {
            preview[y][x] = Cell::Occupied(def.color);
        }
    }
    preview
}
