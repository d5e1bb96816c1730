// Command-line configuration. Each flag picks one of the variants of the
// toy: canvas size policy, export on/off, the "only yellows" notice on/off.
use std::path::PathBuf;

use clap::Parser;

use crate::catalog::SpriteSource;
use crate::error::Error;
use crate::export::EXPORT_FILE;
use crate::layout::LayoutRules;
use crate::types::Bounds;

/// Canvases this wide or narrower get half-size sprites under `--responsive`.
const SMALL_CANVAS_WIDTH: u32 = 600;

#[derive(Parser, Debug, Clone)]
#[command(name = "eggs", version, about = "E adds 'e', G adds 'gg', R resets, D downloads")]
pub struct Config {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,
    /// Canvas height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,
    /// Halve sprite sizes on small canvases
    #[arg(long)]
    pub responsive: bool,
    /// Right margin kept free when deciding a row wrap
    #[arg(long, default_value_t = 0)]
    pub margin: u32,
    /// Disable the D (download) command
    #[arg(long)]
    pub no_export: bool,
    /// Never hold back the narrow sprite to keep room for wide ones
    #[arg(long)]
    pub no_reserve: bool,
    /// Image file for the narrow "e" sprite (built-in egg if omitted)
    #[arg(long)]
    pub narrow_sprite: Option<PathBuf>,
    /// Image file for the wide "gg" sprite (built-in yolk if omitted)
    #[arg(long)]
    pub wide_sprite: Option<PathBuf>,
    /// Where D writes the canvas
    #[arg(long, default_value = EXPORT_FILE)]
    pub output: PathBuf,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "canvas must not be empty (got {}x{})",
                self.width, self.height
            )));
        }
        if self.margin >= self.width {
            return Err(Error::Config(format!(
                "margin {} leaves no room on a {} px wide canvas",
                self.margin, self.width
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width as i32, self.height as i32)
    }

    pub fn layout_rules(&self) -> LayoutRules {
        LayoutRules {
            margin: self.margin as i32,
            reserve_wide: !self.no_reserve,
            ..LayoutRules::default()
        }
    }

    pub fn export_enabled(&self) -> bool {
        !self.no_export
    }

    /// 1 = natural sprite size, 2 = half size.
    pub fn size_divider(&self) -> u32 {
        if self.responsive && self.width <= SMALL_CANVAS_WIDTH { 2 } else { 1 }
    }

    pub fn narrow_source(&self) -> SpriteSource {
        source(&self.narrow_sprite)
    }

    pub fn wide_source(&self) -> SpriteSource {
        source(&self.wide_sprite)
    }
}

fn source(path: &Option<PathBuf>) -> SpriteSource {
    match path {
        Some(path) => SpriteSource::File(path.clone()),
        None => SpriteSource::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["eggs"]).expect("parse");
        config.validate().expect("valid");
        assert_eq!(config.bounds(), Bounds::new(600, 400));
        assert_eq!(config.layout_rules(), LayoutRules::default());
        assert!(config.export_enabled());
        assert_eq!(config.size_divider(), 1);
        assert_eq!(config.output, PathBuf::from("egg.png"));
        assert_eq!(config.narrow_source(), SpriteSource::Builtin);
    }

    #[test]
    fn variant_flags() {
        let config = Config::try_parse_from([
            "eggs",
            "--width",
            "400",
            "--responsive",
            "--no-export",
            "--no-reserve",
            "--wide-sprite",
            "yellow.png",
        ])
        .expect("parse");
        assert_eq!(config.size_divider(), 2);
        assert!(!config.export_enabled());
        assert!(!config.layout_rules().reserve_wide);
        assert_eq!(config.wide_source(), SpriteSource::File(PathBuf::from("yellow.png")));
    }

    #[test]
    fn responsive_keeps_full_size_on_wide_canvas() {
        let config = Config::try_parse_from(["eggs", "--width", "800", "--responsive"]).expect("parse");
        assert_eq!(config.size_divider(), 1);
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let config = Config::try_parse_from(["eggs", "--height", "0"]).expect("parse");
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = Config::try_parse_from(["eggs", "--width", "50", "--margin", "50"]).expect("parse");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
