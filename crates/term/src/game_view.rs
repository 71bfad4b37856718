//! GameView: maps a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. Everything here is covered by unit tests.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const BOARD_BG: Rgb = Rgb::new(24, 24, 32);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Values shown next to the board that do not live in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudInfo {
    pub high_score: u32,
    /// The finished game beat the stored high score.
    pub new_record: bool,
}

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let cols = snap.board.width() as u16;
        let rows = snap.board.height() as u16;
        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows + 2;
        let origin_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(70, 70, 84), BOARD_BG);
        for (y, row) in snap.board.rows().enumerate() {
            let py = origin_y + 1 + y as u16;
            for (x, cell) in row.iter().enumerate() {
                let px = origin_x + 1 + x as u16 * self.cell_w;
                match cell {
                    Some(kind) => self.draw_block(fb, px, py, *kind),
                    None => fb.fill_rect(px, py, self.cell_w, 1, ' ', empty),
                }
            }
        }

        self.draw_side_panel(fb, snap, hud, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            let mut lines = vec!["GAME OVER"];
            if hud.new_record {
                lines.push("NEW RECORD");
            }
            lines.push("r: restart");
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &lines);
        } else if snap.paused {
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, &["PAUSED"]);
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, hud: &HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, kind: PieceKind) {
        let style = CellStyle::new(Rgb::of_piece(kind), BOARD_BG);
        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudInfo,
        x: u16,
        top: u16,
    ) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("HIGH", hud.high_score.max(snap.score)),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        let shape = Shape::of(snap.next);
        for (dx, dy) in shape.minos() {
            let px = x + dx as u16 * self.cell_w;
            let style = CellStyle::new(Rgb::of_piece(snap.next), PANEL_BG);
            fb.fill_rect(px, y + 1 + dy as u16, self.cell_w, 1, '█', style);
        }
    }
}

/// Columns reserved for the side panel when centering.
const PANEL_WIDTH: u16 = 14;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
}

/// Centered text lines over the board.
fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let first = (y + h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, first + i as u16, text, style);
    }
}
