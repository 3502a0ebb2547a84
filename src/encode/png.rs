use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;

use crate::foundation::error::{MockupError, MockupResult};

const METERS_PER_INCH: f64 = 0.0254;

/// Convert dots-per-inch to the pixels-per-meter stored in a PNG `pHYs` chunk.
pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Create parent directories of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> MockupResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `image` as an 8-bit RGB PNG with a `pHYs` DPI tag, best compression and adaptive
/// row filtering.
pub fn save_png(image: &image::RgbImage, path: &Path, dpi: u32) -> MockupResult<()> {
    if dpi == 0 {
        return Err(MockupError::validation("png dpi must be > 0"));
    }
    ensure_parent_dir(path)?;

    let file =
        File::create(path).with_context(|| format!("create png '{}'", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);
    encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
    let ppm = dpi_to_ppm(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("write png header '{}'", path.display()))?;
    writer
        .write_image_data(image.as_raw())
        .with_context(|| format!("write png data '{}'", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("finish png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
