use std::path::Path;

use anyhow::Context;

use crate::foundation::error::MockupResult;

/// Decode an image file and flatten it to opaque RGB8.
///
/// Alpha is dropped without compositing, the same as converting an RGBA template to RGB.
pub fn load_rgb_image(path: &Path) -> MockupResult<image::RgbImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_rgb(&bytes).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

pub fn decode_rgb(bytes: &[u8]) -> anyhow::Result<image::RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgb8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
