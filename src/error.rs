// One error type for the whole program.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::SpriteKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Sprite load error ({}): {source}", .path.display())]
    SpriteLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Sprite loader stopped before the {0} sprite arrived")]
    SpriteLoaderGone(SpriteKind),
    #[error("Export error ({}): {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Config error: {0}")]
    Config(String),
}
