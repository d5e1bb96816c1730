// Window + software drawing utilities.
// 1) A window that shows the composed frame and hands out key commands.
// 2) Pixel primitives: rects, frame copies, alpha-blended sprites, dimming.
// 3) A tiny 5x7 bitmap font for the header, buttons and dialog text.

use crate::error::Error;
use crate::input::Command;
use crate::types::{FrameBuffer, Sprite};
use minifb::{KeyRepeat, Window, WindowOptions};

/// Pixels per glyph cell, including the 1-pixel gap.
pub const GLYPH_ADVANCE: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 7;

/// Owns the native window. Keyboard input lives and dies with it.
pub struct Drawer {
    window: Window,
    export_enabled: bool,
}

impl Drawer {
    /// Create a window of the given size, refreshed at most 60 times a second.
    pub fn new(title: &str, width: usize, height: usize, export_enabled: bool) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, export_enabled })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Commands whose key went down since the last frame, in key order.
    pub fn commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(|key| Command::from_key(key, self.export_enabled))
            .collect()
    }

    /// A command whose key is held right now; its button is drawn highlighted.
    pub fn held(&self) -> Option<Command> {
        self.window
            .get_keys()
            .into_iter()
            .find_map(|key| Command::from_key(key, self.export_enabled))
    }
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Rectangle outline `thickness` pixels wide, drawn inside (x, y, w, h).
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: u32) {
    fill_rect(fb, x, y, w, thickness, color);
    fill_rect(fb, x, y + h - thickness, w, thickness, color);
    fill_rect(fb, x, y, thickness, h, color);
    fill_rect(fb, x + w - thickness, y, thickness, h, color);
}

/// Copy a whole frame (the canvas) into `dst` with its top-left at (x, y).
pub fn blit_frame(dst: &mut FrameBuffer, src: &FrameBuffer, x: i32, y: i32) {
    for sy in 0..src.height {
        let row = &src.pixels[sy * src.width..(sy + 1) * src.width];
        for (sx, &px) in row.iter().enumerate() {
            put_pixel(dst, x + sx as i32, y + sy as i32, px);
        }
    }
}

/// Draw a sprite with its top-left at (x, y), alpha-blended and clipped.
pub fn blit_sprite(fb: &mut FrameBuffer, sprite: &Sprite, x: i32, y: i32) {
    for sy in 0..sprite.height as i32 {
        let py = y + sy;
        if py < 0 || py as usize >= fb.height {
            continue;
        }
        for sx in 0..sprite.width as i32 {
            let px = x + sx;
            if px < 0 || px as usize >= fb.width {
                continue;
            }
            let src = sprite.pixels[(sy as u32 * sprite.width + sx as u32) as usize];
            let alpha = src >> 24;
            if alpha == 0 {
                continue;
            }
            let idx = py as usize * fb.width + px as usize;
            fb.pixels[idx] = if alpha == 0xFF { src & 0x00_FF_FF_FF } else { blend(fb.pixels[idx], src, alpha) };
        }
    }
}

/// Straight alpha "over" per channel, 0..=255 weights.
#[inline]
fn blend(dst: u32, src: u32, alpha: u32) -> u32 {
    let mix = |shift: u32| {
        let s = (src >> shift) & 0xFF;
        let d = (dst >> shift) & 0xFF;
        ((s * alpha + d * (255 - alpha)) / 255) << shift
    };
    mix(16) | mix(8) | mix(0)
}

/// Multiply every channel by `keep / 256`. Used for the dialog overlay.
pub fn dim(fb: &mut FrameBuffer, keep: u32) {
    for px in &mut fb.pixels {
        let r = ((*px >> 16) & 0xFF) * keep >> 8;
        let g = ((*px >> 8) & 0xFF) * keep >> 8;
        let b = (*px & 0xFF) * keep >> 8;
        *px = (r << 16) | (g << 8) | b;
    }
}

/* ---------- 5x7 bitmap font (letters and the punctuation we print) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b10001,0b01010,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b01100,0b00100,0b01000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '?' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100),
        '\'' => g!(0b00100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),
        '"' => g!(0b01010,0b01010,0b01010,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y). Unknown characters draw nothing.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, one glyph cell per char.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += GLYPH_ADVANCE;
    }
}

pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE
}

/// Greedy word wrap to at most `max_chars` per line. Longer words get a line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
