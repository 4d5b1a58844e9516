//! Board tests - placement rules, merge and line clearing

use testris::core::{Board, Piece};
use testris::types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const RED: Cell = Cell::Occupied(Color::from_hex(0xef4444));
const BLUE: Cell = Cell::Occupied(Color::from_hex(0x60a5fa));

fn fill_row(board: &mut Board, y: i8, cell: Cell) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, cell);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "cell ({x}, {y})");
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, RED));
    assert_eq!(board.get(5, 10), Some(RED));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 0, RED));
    assert!(!board.set(0, -1, RED));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_placement_rejects_walls_and_floor() {
    let board = Board::new();

    // Horizontal I occupies matrix row 1, columns 0..4
    assert!(board.is_placement_legal(PieceKind::I, 0, 0, 0));
    assert!(board.is_placement_legal(PieceKind::I, 0, 6, 0));
    assert!(!board.is_placement_legal(PieceKind::I, 0, -1, 0));
    assert!(!board.is_placement_legal(PieceKind::I, 0, 7, 0));

    // O is two rows tall
    assert!(board.is_placement_legal(PieceKind::O, 0, 0, 18));
    assert!(!board.is_placement_legal(PieceKind::O, 0, 0, 19));
}

#[test]
fn test_placement_allows_rows_above_board() {
    let mut board = Board::new();
    fill_row(&mut board, 0, RED);

    // Vertical I with three cells above the top and one inside row 0
    assert!(!board.is_placement_legal(PieceKind::I, 1, 0, -3));
    // Entirely above the board: only the column check applies
    assert!(board.is_placement_legal(PieceKind::I, 1, 0, -4));
    // Columns still count above the board
    assert!(!board.is_placement_legal(PieceKind::I, 1, 9, -4));
}

#[test]
fn test_placement_rejects_overlap() {
    let mut board = Board::new();
    board.set(4, 1, RED);

    // T at spawn covers (4,0), (3,1), (4,1), (5,1)
    assert!(!board.is_placement_legal(PieceKind::T, 0, 3, 0));
    assert!(board.is_placement_legal(PieceKind::T, 0, 5, 0));
}

#[test]
fn test_merge_leaves_input_untouched() {
    let board = Board::new();
    let piece = Piece {
        kind: PieceKind::S,
        rotation: 0,
        x: 2,
        y: 17,
    };

    let merged = board.merge(&piece);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(merged.filled_count(), 4);

    let color = Cell::Occupied(piece.color());
    for (x, y) in piece.cells() {
        assert_eq!(merged.get(x, y), Some(color));
    }
}

#[test]
fn test_merge_drops_cells_above_board() {
    let board = Board::new();
    let piece = Piece {
        kind: PieceKind::I,
        rotation: 1,
        x: 0,
        y: -2,
    };

    let merged = board.merge(&piece);
    assert_eq!(merged.filled_count(), 2);
    assert!(merged.is_occupied(1, 0));
    assert!(merged.is_occupied(1, 1));
}

#[test]
fn test_clear_full_rows_keeps_survivor_order() {
    let mut board = Board::new();
    board.set(0, 15, BLUE);
    fill_row(&mut board, 16, RED);
    board.set(1, 17, BLUE);
    fill_row(&mut board, 18, RED);
    board.set(2, 19, BLUE);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 18]);

    assert_eq!(board.filled_count(), 3);
    assert!(board.is_occupied(2, 19));
    assert!(board.is_occupied(1, 18));
    assert!(board.is_occupied(0, 17));
    assert!(board.row(16).unwrap().iter().all(Cell::is_empty));
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, RED);
    }
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_cleared_is_pure() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, RED);
    }
    board.set(3, 15, BLUE);

    let (next, count) = board.cleared();
    assert_eq!(count, 4);
    assert_eq!(board.filled_count(), 41);
    assert_eq!(next.filled_count(), 1);
    assert_eq!(next.get(3, 19), Some(BLUE));
    assert_eq!(next.height(), BOARD_HEIGHT);
}
