// Flow layout: decides where the next sprite lands on the canvas.
// Sprites fill a row left to right in fixed strides, then wrap to the next row.
// Pure functions only; the session owns the cursor and applies the result.

use crate::types::{Bounds, Point, SpriteKind, SpriteSizes};

/// Horizontal advance per placement. A grid unit, not the sprite width.
pub const STRIDE: i32 = 10;
/// Vertical advance on a row wrap.
pub const ROW_HEIGHT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRules {
    pub stride: i32,
    pub row_height: i32,
    /// Subtracted from the canvas width in the horizontal overflow test.
    pub margin: i32,
    /// Keep the last bit of space for wide sprites: a narrow request that
    /// does not fit while a wide one still would gets its own notice.
    pub reserve_wide: bool,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self { stride: STRIDE, row_height: ROW_HEIGHT, margin: 0, reserve_wide: true }
    }
}

impl LayoutRules {
    /// Cursor before the first placement: one stride left of column 0.
    pub fn start(&self) -> Point {
        Point::new(-self.stride, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Paint the sprite at `position`; it also becomes the new cursor.
    Placed { position: Point },
    /// A narrow sprite was refused while a wide one would still fit.
    InsufficientSpaceForNarrow,
    /// No wrap possible: the canvas is done.
    CanvasFull,
    /// Vertical overflow without a wrap. Nothing happens, nothing is shown.
    Refused,
}

enum Axis {
    Horizontal,
    Vertical,
}

pub fn place(
    kind: SpriteKind,
    cursor: Point,
    bounds: Bounds,
    sizes: &SpriteSizes,
    rules: &LayoutRules,
) -> Placement {
    let size = sizes.of(kind);
    let right = bounds.width - rules.margin;

    let reach_x = cursor.x + size.width;
    let reach_y = cursor.y + size.height;
    let mut next = Point::new(cursor.x + rules.stride, cursor.y);

    if reach_x > right {
        // The wrapped sprite must still end above the bottom edge.
        if reach_y + rules.row_height <= bounds.height {
            next = Point::new(0, cursor.y + rules.row_height);
        } else if reserved_for_wide(kind, cursor, bounds, sizes, rules, Axis::Horizontal) {
            return Placement::InsufficientSpaceForNarrow;
        } else {
            return Placement::CanvasFull;
        }
    }

    if reach_y > bounds.height {
        if reserved_for_wide(kind, cursor, bounds, sizes, rules, Axis::Vertical) {
            return Placement::InsufficientSpaceForNarrow;
        }
        return Placement::Refused;
    }

    Placement::Placed { position: next }
}

/// Only ever true for narrow requests. Wide requests are never held back.
fn reserved_for_wide(
    kind: SpriteKind,
    cursor: Point,
    bounds: Bounds,
    sizes: &SpriteSizes,
    rules: &LayoutRules,
    axis: Axis,
) -> bool {
    if !rules.reserve_wide || kind != SpriteKind::Narrow {
        return false;
    }
    match axis {
        Axis::Horizontal => cursor.x + sizes.wide.width <= bounds.width - rules.margin,
        Axis::Vertical => cursor.y + sizes.wide.height <= bounds.height,
    }
}
