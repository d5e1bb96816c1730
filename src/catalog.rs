// The two sprites: where they come from, how they are loaded, and the
// readiness join that gates the session.
//
// Both sprites load on their own worker thread. Their completions arrive on one
// channel; the catalog becomes available only once both have arrived.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use image::imageops::{self, FilterType};
use log::debug;

use crate::error::Error;
use crate::types::{Size, Sprite, SpriteKind, SpriteSizes};

/// Natural size of the painted sprites, before any size divider.
const BUILTIN_NARROW: Size = Size::new(20, 40);
const BUILTIN_WIDE: Size = Size::new(40, 30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteSource {
    /// Painted in code: a white egg (narrow) or a yolk (wide).
    Builtin,
    /// Any image file the `image` crate can decode.
    File(PathBuf),
}

impl SpriteSource {
    /// Load and scale down by `divider` (1 = natural size).
    pub fn load(&self, kind: SpriteKind, divider: u32) -> Result<Sprite, Error> {
        let divider = divider.max(1);
        match self {
            SpriteSource::Builtin => Ok(paint_builtin(kind, divider)),
            SpriteSource::File(path) => {
                let img = image::open(path)
                    .map_err(|source| Error::SpriteLoad { path: path.clone(), source })?
                    .to_rgba8();

                let width = (img.width() / divider).max(1);
                let height = (img.height() / divider).max(1);
                let img = if divider > 1 {
                    imageops::resize(&img, width, height, FilterType::Triangle)
                } else {
                    img
                };

                // Pack RGBA as 0xAARRGGBB.
                let pixels = img
                    .pixels()
                    .map(|p| {
                        let [r, g, b, a] = p.0;
                        ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
                    })
                    .collect();

                Ok(Sprite { kind, width, height, pixels })
            }
        }
    }
}

/// Paint one of the default sprites as a soft-edged oval.
pub fn paint_builtin(kind: SpriteKind, divider: u32) -> Sprite {
    let (natural, fill, outline, taper) = match kind {
        // Egg: white with a grey rim, narrower at the top.
        SpriteKind::Narrow => (BUILTIN_NARROW, 0xFF_FF_FF_FF, 0xFF_8C_8C_8C, 0.25),
        // Yolk: yellow with an orange rim, symmetric.
        SpriteKind::Wide => (BUILTIN_WIDE, 0xFF_FF_D2_1F, 0xFF_E0_8A_00, 0.0),
    };
    let divider = divider.max(1) as i32;
    let width = (natural.width / divider).max(1) as u32;
    let height = (natural.height / divider).max(1) as u32;

    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let nx = (x as f32 + 0.5 - rx) / rx;
            let ny = (y as f32 + 0.5 - ry) / ry;
            // Taper shrinks the half-width towards the top (ny < 0).
            let squeeze = 1.0 + taper * ny;
            let d = (nx / squeeze).powi(2) + ny.powi(2);
            let rim = 1.0 - 2.0 / rx.min(ry).max(1.0);
            let px = if d > 1.0 {
                0 // transparent
            } else if d > rim * rim {
                outline
            } else {
                fill
            };
            pixels.push(px);
        }
    }

    Sprite { kind, width, height, pixels }
}

pub struct SpriteCatalog {
    narrow: Sprite,
    wide: Sprite,
}

impl SpriteCatalog {
    pub fn new(narrow: Sprite, wide: Sprite) -> Self {
        Self { narrow, wide }
    }

    pub fn sprite(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Narrow => &self.narrow,
            SpriteKind::Wide => &self.wide,
        }
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes { narrow: self.narrow.size(), wide: self.wide.size() }
    }
}

type LoadResult = (SpriteKind, Result<Sprite, Error>);

/// Fire-and-forget loading of both sprites, joined into one ready signal.
pub struct SpriteLoader {
    rx: Receiver<LoadResult>,
    narrow: Option<Sprite>,
    wide: Option<Sprite>,
    delivered: bool,
}

impl SpriteLoader {
    pub fn spawn(narrow: SpriteSource, wide: SpriteSource, divider: u32) -> Self {
        let (tx, rx) = mpsc::channel();
        for (kind, source) in [(SpriteKind::Narrow, narrow), (SpriteKind::Wide, wide)] {
            let tx = tx.clone();
            thread::spawn(move || {
                // The receiver may be gone if the window closed first.
                let _ = tx.send((kind, source.load(kind, divider)));
            });
        }
        Self { rx, narrow: None, wide: None, delivered: false }
    }

    /// Non-blocking. `Ok(Some(_))` exactly once, when the second sprite lands.
    pub fn poll(&mut self) -> Result<Option<SpriteCatalog>, Error> {
        if self.delivered {
            return Ok(None);
        }
        loop {
            match self.rx.try_recv() {
                Ok(done) => self.store(done)?,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if let Some(kind) = self.missing() {
                        return Err(Error::SpriteLoaderGone(kind));
                    }
                    break;
                }
            }
        }
        Ok(self.take_ready())
    }

    /// Blocking variant of [`poll`](Self::poll).
    #[cfg(test)]
    pub fn wait(mut self) -> Result<SpriteCatalog, Error> {
        while let Some(kind) = self.missing() {
            let done = self.rx.recv().map_err(|_| Error::SpriteLoaderGone(kind))?;
            self.store(done)?;
        }
        self.take_ready().ok_or(Error::SpriteLoaderGone(SpriteKind::Narrow))
    }

    fn store(&mut self, (kind, result): LoadResult) -> Result<(), Error> {
        let sprite = result?;
        debug!("{kind} sprite loaded ({}x{})", sprite.width, sprite.height);
        match kind {
            SpriteKind::Narrow => self.narrow = Some(sprite),
            SpriteKind::Wide => self.wide = Some(sprite),
        }
        Ok(())
    }

    fn missing(&self) -> Option<SpriteKind> {
        if self.narrow.is_none() {
            Some(SpriteKind::Narrow)
        } else if self.wide.is_none() {
            Some(SpriteKind::Wide)
        } else {
            None
        }
    }

    fn take_ready(&mut self) -> Option<SpriteCatalog> {
        if self.narrow.is_some() && self.wide.is_some() {
            let narrow = self.narrow.take()?;
            let wide = self.wide.take()?;
            self.delivered = true;
            return Some(SpriteCatalog::new(narrow, wide));
        }
        None
    }
}

/// Opaque single-colour sprite for tests.
#[cfg(test)]
pub fn solid_sprite(kind: SpriteKind, width: u32, height: u32, rgb: u32) -> Sprite {
    Sprite { kind, width, height, pixels: vec![0xFF_00_00_00 | rgb; (width * height) as usize] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn builtin_sprites_have_natural_sizes() {
        let narrow = paint_builtin(SpriteKind::Narrow, 1);
        let wide = paint_builtin(SpriteKind::Wide, 1);
        assert_eq!(narrow.size(), BUILTIN_NARROW);
        assert_eq!(wide.size(), BUILTIN_WIDE);
        assert_eq!(narrow.pixels.len(), 20 * 40);

        // Corners are transparent, the centre is opaque fill.
        assert_eq!(narrow.pixels[0] >> 24, 0);
        let centre = narrow.pixels[(20 * 20 + 10) as usize];
        assert_eq!(centre, 0xFF_FF_FF_FF);
    }

    #[test]
    fn divider_halves_builtin_sprites() {
        let wide = paint_builtin(SpriteKind::Wide, 2);
        assert_eq!(wide.size(), Size::new(20, 15));
    }

    #[test]
    fn loader_joins_both_sprites() {
        let catalog = SpriteLoader::spawn(SpriteSource::Builtin, SpriteSource::Builtin, 1)
            .wait()
            .expect("builtin sprites load");
        assert_eq!(catalog.sizes(), SpriteSizes { narrow: BUILTIN_NARROW, wide: BUILTIN_WIDE });
        assert_eq!(catalog.sprite(SpriteKind::Wide).kind, SpriteKind::Wide);
    }

    #[test]
    fn poll_reports_ready_once() {
        let mut loader = SpriteLoader::spawn(SpriteSource::Builtin, SpriteSource::Builtin, 2);
        let deadline = Instant::now() + Duration::from_secs(5);
        let catalog = loop {
            if let Some(catalog) = loader.poll().expect("poll") {
                break catalog;
            }
            assert!(Instant::now() < deadline, "sprites never became ready");
            thread::sleep(Duration::from_millis(5));
        };
        assert_eq!(catalog.sizes().narrow, Size::new(10, 20));
        assert!(loader.poll().expect("second poll").is_none());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let path = std::env::temp_dir().join("eggs-test-no-such-sprite.png");
        let loader = SpriteLoader::spawn(SpriteSource::File(path), SpriteSource::Builtin, 1);
        match loader.wait() {
            Err(Error::SpriteLoad { .. }) => {}
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("missing file should not load"),
        }
    }

    #[test]
    fn file_sprite_is_scaled_by_divider() {
        let path = std::env::temp_dir().join(format!(
            "eggs-test-sprite-{}-{:?}.png",
            std::process::id(),
            thread::current().id()
        ));
        image::RgbaImage::from_pixel(30, 16, image::Rgba([255, 200, 0, 255]))
            .save(&path)
            .expect("write test sprite");

        let sprite = SpriteSource::File(path.clone()).load(SpriteKind::Wide, 2).expect("load");
        assert_eq!(sprite.size(), Size::new(15, 8));
        assert_eq!(sprite.pixels[0], 0xFF_FF_C8_00);
        let _ = std::fs::remove_file(path);
    }
}
