// Everything around the canvas: header, caption, button bar, and the
// notice dialog drawn over the whole window.
//
//   +------------------------------------------+
//   | - "an eggsample of ..."                  |  header
//   | Illustration of an "egg" :               |
//   |   +----------------------------------+   |
//   |   |              canvas              |   |
//   |   +----------------------------------+   |
//   | [E - adds 'e'] [G - adds 'gg'] [R] [D]   |  buttons
//   +------------------------------------------+

use crate::draw::{self, GLYPH_ADVANCE, GLYPH_HEIGHT};
use crate::input::Command;
use crate::session::Session;
use crate::types::{Bounds, FrameBuffer, BLACK, WHITE};

pub const TITLE: &str = "EGGS";
const HEADER: &str = "- \"an eggsample of how i lose my time on earth\"";
const LOADING: &str = "loading...";

const PAD: i32 = 16;
const HEADER_H: i32 = 40;
const FOOTER_H: i32 = 40;
const BUTTON_H: i32 = 20;
const BUTTON_GAP: i32 = 8;
const LINE_H: i32 = GLYPH_HEIGHT + 5;

const DIALOG_W: i32 = 400;
/// 75 % of each channel survives under the dialog backdrop.
const DIALOG_DIM: u32 = 192;

const BACKDROP: u32 = 0x00_F4_F1_EA;
const HIGHLIGHT: u32 = 0x00_FF_D2_1F;
const GREY: u32 = 0x00_80_80_80;

const BUTTONS: [(Command, &str); 4] = [
    (Command::AddE, "E - adds 'e'"),
    (Command::AddGg, "G - adds 'gg'"),
    (Command::Reset, "R - resets"),
    (Command::Export, "D - download"),
];

/// Window geometry, fixed once from the canvas bounds.
pub struct Chrome {
    pub width: usize,
    pub height: usize,
    canvas_x: i32,
    canvas_y: i32,
    canvas: Bounds,
}

impl Chrome {
    pub fn new(canvas: Bounds) -> Self {
        let buttons_w: i32 = BUTTONS.iter().map(|(_, label)| button_width(label) + BUTTON_GAP).sum();
        let content_w = canvas.width.max(buttons_w).max(draw::text_width(HEADER));
        let width = content_w + 2 * PAD;
        let height = HEADER_H + canvas.height + FOOTER_H;
        Self {
            width: width as usize,
            height: height as usize,
            canvas_x: (width - canvas.width) / 2,
            canvas_y: HEADER_H,
            canvas,
        }
    }

    /// A screen buffer of the right size.
    pub fn frame(&self) -> FrameBuffer {
        FrameBuffer::new(self.width, self.height, BACKDROP)
    }

    /// Paint the whole window for this frame.
    pub fn compose(&self, screen: &mut FrameBuffer, session: &Session, held: Option<Command>, export_enabled: bool) {
        screen.fill(BACKDROP);

        draw::draw_text_5x7(screen, PAD, 10, HEADER, BLACK);
        if let Some(caption) = session.caption() {
            draw::draw_text_5x7(screen, PAD, 24, &caption, BLACK);
        }

        draw::stroke_rect(
            screen,
            self.canvas_x - 1,
            self.canvas_y - 1,
            self.canvas.width + 2,
            self.canvas.height + 2,
            1,
            BLACK,
        );
        draw::blit_frame(screen, session.canvas(), self.canvas_x, self.canvas_y);
        if !session.is_ready() {
            let x = self.canvas_x + (self.canvas.width - draw::text_width(LOADING)) / 2;
            let y = self.canvas_y + (self.canvas.height - GLYPH_HEIGHT) / 2;
            draw::draw_text_5x7(screen, x, y, LOADING, GREY);
        }

        self.draw_buttons(screen, session, held, export_enabled);

        if let Some(notice) = session.dialog() {
            draw_dialog(screen, notice.title(), notice.body());
        }
    }

    fn draw_buttons(&self, screen: &mut FrameBuffer, session: &Session, held: Option<Command>, export_enabled: bool) {
        let y = self.canvas_y + self.canvas.height + (FOOTER_H - BUTTON_H) / 2;
        let mut x = PAD;
        for (command, label) in BUTTONS {
            // Download only shows up once there is something to download.
            if command == Command::Export && (!export_enabled || session.is_empty()) {
                continue;
            }
            let w = button_width(label);
            let fill = if held == Some(command) { HIGHLIGHT } else { WHITE };
            draw::fill_rect(screen, x, y, w, BUTTON_H, fill);
            draw::stroke_rect(screen, x, y, w, BUTTON_H, 1, BLACK);
            draw::draw_text_5x7(screen, x + GLYPH_ADVANCE, y + (BUTTON_H - GLYPH_HEIGHT) / 2, label, BLACK);
            x += w + BUTTON_GAP;
        }
    }
}

fn button_width(label: &str) -> i32 {
    draw::text_width(label) + 2 * GLYPH_ADVANCE
}

/// Dim the window, then a white box with a 2 px border: title, blank line, body.
fn draw_dialog(screen: &mut FrameBuffer, title: &str, body: &str) {
    draw::dim(screen, DIALOG_DIM);

    let w = DIALOG_W.min(screen.width as i32 - 2 * PAD);
    let inner = w - 2 * PAD;
    let max_chars = (inner / GLYPH_ADVANCE).max(1) as usize;
    let title_lines = draw::wrap_text(title, max_chars);
    let body_lines = draw::wrap_text(body, max_chars);

    let h = 2 * PAD + (title_lines.len() + 1 + body_lines.len()) as i32 * LINE_H;
    let x = (screen.width as i32 - w) / 2;
    let y = (screen.height as i32 - h) / 2;

    draw::fill_rect(screen, x, y, w, h, WHITE);
    draw::stroke_rect(screen, x, y, w, h, 2, BLACK);

    let mut line_y = y + PAD;
    for line in &title_lines {
        draw::draw_text_5x7(screen, x + PAD, line_y, line, BLACK);
        line_y += LINE_H;
    }
    line_y += LINE_H;
    for line in &body_lines {
        draw::draw_text_5x7(screen, x + PAD, line_y, line, BLACK);
        line_y += LINE_H;
    }
}
