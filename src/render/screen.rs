use std::path::Path;

use kurbo::Shape as _;

use crate::{
    assets::decode::load_rgb_image,
    foundation::error::{MockupError, MockupResult},
    layout::MockupLayout,
    render::composite::paste_masked,
};

/// Binary rounded-rectangle mask: 255 where the pixel center lies inside the rounded rect
/// covering the whole `width x height` area, 0 elsewhere.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> MockupResult<image::GrayImage> {
    if width == 0 || height == 0 {
        return Err(MockupError::validation("mask width and height must be > 0"));
    }
    let radius = radius.min(width / 2).min(height / 2);
    let shape = kurbo::RoundedRect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
        f64::from(radius),
    );

    Ok(image::GrayImage::from_fn(width, height, |x, y| {
        let in_straight_band =
            (x >= radius && x < width - radius) || (y >= radius && y < height - radius);
        let inside = in_straight_band
            || shape.contains(kurbo::Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5));
        image::Luma([if inside { 255 } else { 0 }])
    }))
}

/// Resize `screenshot` into the layout's screen rect and paste it through the rounded mask.
pub fn paste_screenshot_image(
    image: &mut image::RgbImage,
    screenshot: &image::RgbImage,
    layout: &MockupLayout,
) -> MockupResult<()> {
    let screen = layout.screen;
    let resized = image::imageops::resize(
        screenshot,
        screen.width,
        screen.height,
        image::imageops::FilterType::Lanczos3,
    );
    let mask = rounded_rect_mask(screen.width, screen.height, layout.screen_radius)?;
    paste_masked(image, &resized, &mask, screen.x, screen.y)
}

pub fn paste_screenshot(
    image: &mut image::RgbImage,
    screenshot_path: &Path,
    layout: &MockupLayout,
) -> MockupResult<()> {
    let screenshot = load_rgb_image(screenshot_path)?;
    tracing::debug!(
        width = screenshot.width(),
        height = screenshot.height(),
        "loaded screenshot"
    );
    paste_screenshot_image(image, &screenshot, layout)
}

#[cfg(test)]
#[path = "../../tests/unit/render/screen.rs"]
mod tests;
