//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, Cell as FbCell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS_HELP: [(&str, &str); 5] = [
    ("←/→", "Move"),
    ("↓", "Soft drop"),
    ("↑", "Rotate"),
    ("Space", "Hard drop"),
    ("Q", "Quit"),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal layout for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

/// Top-left corner and outer size of the bordered board.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size (columns, rows) of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(FbCell::default());

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_board_cell(fb, frame, x as u16, y as u16, *cell);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Paused => draw_overlay_line(fb, frame, frame.h / 2, "PAUSED"),
            Phase::GameOver => draw_game_over(fb, frame, snap),
            Phase::Idle | Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, cell: Cell) {
        let (ch, style) = match cell {
            Cell::Occupied(color) => ('█', CellStyle::new(color.into(), PLAYFIELD_BG).bold()),
            Cell::Empty => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim()),
        };
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = frame.y;
        for (name, stat) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, stat, value);
            y += 2;
        }

        y += 1;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for (dy, row) in snap.preview.iter().enumerate() {
            for (dx, cell) in row.iter().enumerate() {
                let px = panel_x + dx as u16 * self.cell_w;
                let py = y + dy as u16;
                match cell {
                    Cell::Occupied(color) => {
                        let style = CellStyle::new((*color).into(), SCREEN_BG).bold();
                        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                    }
                    Cell::Empty => fb.fill_rect(px, py, self.cell_w, 1, ' ', value),
                }
            }
        }
        y += PREVIEW_SIZE as u16 + 1;

        let primary_key = if snap.playable() || snap.paused() {
            "P"
        } else {
            "Enter"
        };
        let x = fb.put_str(panel_x, y, primary_key, label);
        fb.put_str(x + 1, y, snap.primary_label(), value);
        y += 1;
        let x = fb.put_str(panel_x, y, "R", label);
        fb.put_str(x + 1, y, "Reset", value);
        y += 2;

        for (key, action) in CONTROLS_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, hint);
            fb.put_str(panel_x + 6, y, action, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}

/// Inner columns `[left, right)` of the frame; overlays never touch the border.
fn inner_span(frame: Frame) -> (u16, u16) {
    (frame.x + 1, frame.x + frame.w - 1)
}

/// Column that centers `text_w` columns between the borders.
fn centered_x(frame: Frame, text_w: u16) -> u16 {
    let (left, right) = inner_span(frame);
    left + (right - left).saturating_sub(text_w) / 2
}

/// Blank the inner row `dy` of the frame, then center `text` on it.
fn draw_overlay_line(fb: &mut FrameBuffer, frame: Frame, dy: u16, text: &str) {
    let y = frame.y.saturating_add(dy);
    let style = overlay_style();
    let (left, right) = inner_span(frame);
    fb.fill_rect(left, y, right - left, 1, ' ', style);
    let x = centered_x(frame, text.chars().count() as u16);
    fb.put_str_until(x, y, text, right, style);
}

fn draw_game_over(fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot) {
    let mid = frame.h / 2;
    draw_overlay_line(fb, frame, mid - 2, "GAME OVER");

    // "Score N • Level L", written piecewise to stay allocation-free.
    let style = overlay_style();
    let y = frame.y + mid;
    let (left, right) = inner_span(frame);
    fb.fill_rect(left, y, right - left, 1, ' ', style);
    let text_w = 6 + digit_count(snap.score) + 9 + digit_count(snap.level);
    let x = centered_x(frame, text_w);
    let x = fb.put_str_until(x, y, "Score ", right, style);
    let x = fb.put_u32_until(x, y, snap.score, right, style);
    let x = fb.put_str_until(x, y, " • Level ", right, style);
    fb.put_u32_until(x, y, snap.level, right, style);

    draw_overlay_line(fb, frame, mid + 2, "Press Enter");
    draw_overlay_line(fb, frame, mid + 3, "to play again");
}
