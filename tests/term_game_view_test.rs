use testris::core::{GameSnapshot, GameState};
use testris::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use testris::types::{Cell, Color, Command, Phase};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10*2 by 20*1 board pixels plus the border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    let cyan = Color::from_hex(0x22d3ee);
    snap.grid[19][0] = Cell::Occupied(cyan);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1)
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(cyan));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_honors_cell_width() {
    let mut snap = GameSnapshot::default();
    snap.grid[0][1] = Cell::Occupied(Color::from_hex(0xa78bfa));

    let fb = GameView::new(3, 1).render(&snap, Viewport::new(32, 22));
    assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(3, 1).unwrap().ch, '·');
    assert_eq!(fb.get(4, 1).unwrap().ch, '█');
    assert_eq!(fb.get(6, 1).unwrap().ch, '█');
    assert_eq!(fb.get(7, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_from_snapshot() {
    let mut gs = GameState::new(1);
    gs.apply(Command::Start);
    let snap = gs.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let painted = (1..21u16)
        .flat_map(|y| (1..21u16).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
        .count();
    // Four cells, two columns each
    assert_eq!(painted, 8);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.apply(Command::Start);
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("P Pause"));
    assert!(all.contains("R Reset"));
    assert!(all.contains("Hard drop"));
}

#[test]
fn term_view_primary_control_follows_phase() {
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(60, 22);

    assert!(screen_text(&view.render(&snap, vp)).contains("Enter Start"));
    snap.phase = Phase::Paused;
    assert!(screen_text(&view.render(&snap, vp)).contains("P Resume"));
}

#[test]
fn term_view_draws_next_preview() {
    let gs = GameState::new(1);
    let snap = gs.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));

    // Panel starts two columns right of the 22-wide frame, which is centered
    let panel_x = (60 - 22) / 2 + 22 + 2;
    let preview_top = 8;
    let mut painted = 0;
    for y in preview_top..preview_top + 4 {
        for x in panel_x..panel_x + 8 {
            if fb.get(x, y).unwrap().ch == '█' {
                painted += 1;
            }
        }
    }
    assert_eq!(painted, 8);
}

#[test]
fn term_view_pause_overlay() {
    let mut gs = GameState::new(1);
    gs.apply(Command::Start);
    gs.apply(Command::Pause);

    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("PAUSED"));
}

#[test]
fn term_view_game_over_overlay() {
    let snap = GameSnapshot {
        phase: Phase::GameOver,
        score: 2400,
        level: 3,
        ..GameSnapshot::default()
    };

    let fb = GameView::default().render(&snap, Viewport::new(40, 22));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Score 2400 • Level 3"));
    assert!(all.contains("Press Enter"));
    assert!(all.contains("to play again"));
}

#[test]
fn term_view_game_over_overlay_keeps_border_and_panel() {
    let snap = GameSnapshot {
        phase: Phase::GameOver,
        score: 2400,
        level: 3,
        ..GameSnapshot::default()
    };

    // Frame spans columns 19..=40, panel starts at 43
    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    for y in [9, 11, 13, 14] {
        assert_eq!(fb.get(19, y).unwrap().ch, '│', "left border, row {y}");
        assert_eq!(fb.get(40, y).unwrap().ch, '│', "right border, row {y}");
    }
    assert!(fb.row_text(13).contains("Press Enter"));
    assert!(fb.row_text(13).contains("Enter Start"));
    assert!(fb.row_text(14).contains("to play again"));
    assert!(fb.row_text(14).contains("R Reset"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    // start_y = (30 - 22) / 2 = 4
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
