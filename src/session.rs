// One drawing session: cursor, the "egg" string built so far, the canvas
// pixels, and which notice (if any) the dialog shows.
//
// Every command runs to completion in the frame that received it.

use std::path::Path;

use log::{debug, info};

use crate::catalog::SpriteCatalog;
use crate::draw;
use crate::error::Error;
use crate::export;
use crate::layout::{self, LayoutRules, Placement};
use crate::notice::Notice;
use crate::types::{Bounds, FrameBuffer, Point, SpriteKind, WHITE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    E,
    Gg,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::E => "e",
            Symbol::Gg => "gg",
        }
    }
}

impl From<SpriteKind> for Symbol {
    fn from(kind: SpriteKind) -> Self {
        match kind {
            SpriteKind::Narrow => Symbol::E,
            SpriteKind::Wide => Symbol::Gg,
        }
    }
}

/// What a placement command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Sprites are still loading; the request was dropped.
    NotReady,
    /// The dialog is open and does not let this command through.
    Blocked,
    Placed(Point),
    /// Nothing placed; the dialog now shows this notice.
    Noticed(Notice),
    /// Nothing placed, nothing shown.
    Refused,
}

pub struct Session {
    bounds: Bounds,
    rules: LayoutRules,
    catalog: Option<SpriteCatalog>,
    canvas: FrameBuffer,
    cursor: Point,
    sequence: Vec<Symbol>,
    filled: bool,
    notice: Option<Notice>,
    dialog_open: bool,
}

impl Session {
    pub fn new(bounds: Bounds, rules: LayoutRules) -> Self {
        Self {
            bounds,
            rules,
            catalog: None,
            canvas: FrameBuffer::new(bounds.width as usize, bounds.height as usize, WHITE),
            cursor: rules.start(),
            sequence: Vec::new(),
            filled: false,
            notice: None,
            dialog_open: false,
        }
    }

    /// Both sprites are in; placements are accepted from now on.
    pub fn attach(&mut self, catalog: SpriteCatalog) {
        self.catalog = Some(catalog);
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    /// `E`: place a narrow sprite. Ignored while the dialog is open.
    pub fn add_e(&mut self) -> Outcome {
        if self.dialog_open {
            return Outcome::Blocked;
        }
        self.place(SpriteKind::Narrow)
    }

    /// `G`: place a wide sprite. The "only yellows" dialog lets it through
    /// (and closes); any other open dialog blocks it.
    pub fn add_gg(&mut self) -> Outcome {
        if self.dialog_open {
            if self.notice != Some(Notice::NoSpaceForE) {
                return Outcome::Blocked;
            }
            self.dialog_open = false;
        }
        self.place(SpriteKind::Wide)
    }

    fn place(&mut self, kind: SpriteKind) -> Outcome {
        let Some(catalog) = self.catalog.as_ref() else {
            debug!("{kind} request dropped: sprites not loaded yet");
            return Outcome::NotReady;
        };

        if self.filled {
            self.dialog_open = true;
        }

        match layout::place(kind, self.cursor, self.bounds, &catalog.sizes(), &self.rules) {
            Placement::Placed { position } => {
                draw::blit_sprite(&mut self.canvas, catalog.sprite(kind), position.x, position.y);
                self.cursor = position;
                self.sequence.push(Symbol::from(kind));
                if !self.dialog_open {
                    self.notice = None;
                }
                debug!("{kind} placed at ({}, {})", position.x, position.y);
                Outcome::Placed(position)
            }
            Placement::InsufficientSpaceForNarrow => self.show(Notice::NoSpaceForE),
            Placement::CanvasFull => {
                self.filled = true;
                self.show(Notice::Filled)
            }
            Placement::Refused => {
                debug!("{kind} refused at ({}, {})", self.cursor.x, self.cursor.y);
                Outcome::Refused
            }
        }
    }

    fn show(&mut self, notice: Notice) -> Outcome {
        info!("{}", notice.title());
        self.notice = Some(notice);
        self.dialog_open = true;
        Outcome::Noticed(notice)
    }

    /// `R`: back to an empty white canvas. Safe to call any number of times.
    pub fn reset(&mut self) {
        self.canvas.fill(WHITE);
        self.cursor = self.rules.start();
        self.sequence.clear();
        self.filled = false;
        self.notice = None;
        self.dialog_open = false;
    }

    /// `Esc`: hide the dialog. The notice stays remembered.
    pub fn dismiss(&mut self) {
        self.dialog_open = false;
    }

    /// `D`: write the canvas to `path`. Returns `false` (and writes nothing)
    /// while nothing has been placed.
    pub fn export(&self, path: &Path) -> Result<bool, Error> {
        if self.sequence.is_empty() {
            return Ok(false);
        }
        export::save_png(&self.canvas, path)?;
        info!("canvas exported to {}", path.display());
        Ok(true)
    }

    pub fn egg(&self) -> String {
        self.sequence.iter().map(|s| s.as_str()).collect()
    }

    /// `Illustration of an "egg" :` once something has been placed.
    pub fn caption(&self) -> Option<String> {
        let article = match self.sequence.first()? {
            Symbol::E => "an",
            Symbol::Gg => "a",
        };
        Some(format!("Illustration of {article} \"{}\" :", self.egg()))
    }

    /// The notice on screen, if the dialog is open.
    pub fn dialog(&self) -> Option<Notice> {
        if self.dialog_open { self.notice } else { None }
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::solid_sprite;
    use crate::types::Size;

    const YOLK: u32 = 0xFF_D2_1F;
    const ALBUMEN: u32 = 0xEE_EE_EE;

    fn session(bounds: Bounds, narrow: (u32, u32), wide: (u32, u32)) -> Session {
        let mut s = Session::new(bounds, LayoutRules::default());
        s.attach(SpriteCatalog::new(
            solid_sprite(SpriteKind::Narrow, narrow.0, narrow.1, ALBUMEN),
            solid_sprite(SpriteKind::Wide, wide.0, wide.1, YOLK),
        ));
        s
    }

    fn square(bounds: Bounds) -> Session {
        session(bounds, (20, 20), (40, 40))
    }

    #[test]
    fn placements_are_dropped_until_sprites_arrive() {
        let mut s = Session::new(Size::new(400, 400), LayoutRules::default());
        assert_eq!(s.add_gg(), Outcome::NotReady);
        assert_eq!(s.add_e(), Outcome::NotReady);
        assert!(s.is_empty());
        assert_eq!(s.cursor(), Point::new(-10, 0));
        assert!(s.dialog().is_none());
    }

    #[test]
    fn first_gg_lands_at_origin() {
        let mut s = square(Size::new(400, 400));
        assert_eq!(s.add_gg(), Outcome::Placed(Point::new(0, 0)));
        assert_eq!(s.egg(), "gg");
        assert_eq!(s.canvas().get(5, 5), YOLK);
        assert_eq!(s.add_gg(), Outcome::Placed(Point::new(10, 0)));
        assert_eq!(s.egg(), "gggg");
    }

    #[test]
    fn one_symbol_per_successful_placement() {
        let mut s = square(Size::new(400, 400));
        s.add_e();
        s.add_gg();
        s.add_gg();
        s.add_e();
        assert_eq!(s.egg(), "egggge");
        assert_eq!(s.cursor(), Point::new(30, 0));
    }

    #[test]
    fn reset_is_idempotent_and_restores_initial_state() {
        let mut s = square(Size::new(100, 100));
        while let Outcome::Placed(_) = s.add_gg() {}
        assert!(s.is_filled());
        assert!(s.dialog().is_some());

        s.reset();
        let cursor = s.cursor();
        s.reset();
        assert_eq!(s.cursor(), cursor);
        assert_eq!(cursor, Point::new(-10, 0));
        assert!(s.is_empty());
        assert!(!s.is_filled());
        assert!(s.dialog().is_none());
        assert!(s.canvas().pixels.iter().all(|&p| p == WHITE));
        assert!(s.caption().is_none());
    }

    #[test]
    fn full_canvas_opens_dialog_and_blocks_until_dismissed() {
        let mut s = square(Size::new(100, 100));
        let mut placed = 0;
        let last = loop {
            match s.add_gg() {
                Outcome::Placed(_) => placed += 1,
                other => break other,
            }
        };
        // Two rows of eight.
        assert_eq!(placed, 16);
        assert_eq!(last, Outcome::Noticed(Notice::Filled));
        assert_eq!(s.dialog(), Some(Notice::Filled));
        assert_eq!(Notice::Filled.title(), "Eggselent, the canvas is filled.");

        assert_eq!(s.add_e(), Outcome::Blocked);
        assert_eq!(s.add_gg(), Outcome::Blocked);

        s.dismiss();
        assert!(s.dialog().is_none());
        assert_eq!(s.add_gg(), Outcome::Noticed(Notice::Filled));
        assert_eq!(s.egg().len(), 32);
    }

    #[test]
    fn only_yellows_notice_then_gg_goes_through() {
        // Tall egg, short yolk; second row is the last one.
        let mut s = session(Size::new(100, 80), (20, 40), (40, 20));
        while s.cursor().y == 0 {
            assert!(matches!(s.add_gg(), Outcome::Placed(_)));
        }
        assert_eq!(s.cursor(), Point::new(0, 50));

        assert_eq!(s.add_e(), Outcome::Noticed(Notice::NoSpaceForE));
        assert_eq!(s.dialog().map(Notice::title), Some("Only yellows, please."));
        assert!(!s.is_filled());
        assert_eq!(s.add_e(), Outcome::Blocked);

        let before = s.egg();
        assert_eq!(s.add_gg(), Outcome::Placed(Point::new(10, 50)));
        assert!(s.dialog().is_none());
        assert_eq!(s.egg(), before + "gg");

        // Still room for yolks, so the egg is turned away again.
        assert_eq!(s.add_e(), Outcome::Noticed(Notice::NoSpaceForE));
    }

    #[test]
    fn wide_vertical_overflow_is_silent() {
        // Short eggs wrap to a row the yolk is too tall for.
        let mut s = session(Size::new(100, 80), (20, 10), (40, 40));
        while s.cursor().y == 0 {
            assert!(matches!(s.add_e(), Outcome::Placed(_)));
        }
        assert_eq!(s.cursor(), Point::new(0, 50));
        assert_eq!(s.add_gg(), Outcome::Refused);
        assert!(s.dialog().is_none());
        assert!(!s.is_filled());
        assert_eq!(s.cursor(), Point::new(0, 50));
    }

    #[test]
    fn caption_uses_matching_article() {
        let mut s = square(Size::new(400, 400));
        s.add_e();
        s.add_gg();
        assert_eq!(s.caption().as_deref(), Some("Illustration of an \"egg\" :"));

        s.reset();
        s.add_gg();
        assert_eq!(s.caption().as_deref(), Some("Illustration of a \"gg\" :"));
    }

    #[test]
    fn export_with_nothing_placed_is_a_no_op() {
        let s = square(Size::new(50, 50));
        let path = std::env::temp_dir().join(format!("eggs-empty-export-{}.png", std::process::id()));
        let _ = std::fs::remove_file(&path);
        assert!(!s.export(&path).expect("no-op export"));
        assert!(!path.exists());
    }

    #[test]
    fn export_writes_canvas_once_something_is_placed() {
        let mut s = square(Size::new(50, 60));
        s.add_gg();
        let path = std::env::temp_dir().join(format!("eggs-session-export-{}.png", std::process::id()));
        assert!(s.export(&path).expect("export"));
        let img = image::open(&path).expect("reopen").to_rgb8();
        assert_eq!(img.dimensions(), (50, 60));
        let _ = std::fs::remove_file(path);
    }
}
