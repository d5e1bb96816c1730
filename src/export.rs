// Canvas -> PNG file.
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Default file name for `D`.
pub const EXPORT_FILE: &str = "egg.png";

/// Write the framebuffer as an 8-bit RGB PNG, no metadata.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let img = RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.get(x as usize, y as usize);
        Rgb([(px >> 16) as u8, (px >> 8) as u8, px as u8])
    });
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Export { path: path.to_path_buf(), source })
}
