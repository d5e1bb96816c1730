// Core types shared by the layout engine, the session and the drawing code.
use std::fmt;

/// Opaque white, the colour of an empty canvas.
pub const WHITE: u32 = 0x00_FF_FF_FF;
pub const BLACK: u32 = 0x00_00_00_00;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the buffer is on screen (pixels)
    pub height: usize,     // how tall the buffer is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// Top-left pixel offset on the canvas. Can be negative (the initial cursor
/// sits one stride left of column 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Canvas dimensions, fixed for the whole session.
pub type Bounds = Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// The "e" sprite (white egg). Subject to the insufficient-space rule.
    Narrow,
    /// The "gg" sprite (yolks).
    Wide,
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteKind::Narrow => f.write_str("narrow"),
            SpriteKind::Wide => f.write_str("wide"),
        }
    }
}

/// A loaded sprite. Pixels are 0xAARRGGBB so transparent corners stay transparent.
pub struct Sprite {
    pub kind: SpriteKind,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,  // length = width * height
}

impl Sprite {
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }
}

/// Just the dimensions of both sprite kinds; all the layout engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub narrow: Size,
    pub wide: Size,
}

impl SpriteSizes {
    pub fn of(&self, kind: SpriteKind) -> Size {
        match kind {
            SpriteKind::Narrow => self.narrow,
            SpriteKind::Wide => self.wide,
        }
    }
}
