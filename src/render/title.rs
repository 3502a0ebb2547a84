use crate::{
    foundation::error::{MockupError, MockupResult},
    layout::MockupLayout,
    render::composite::over_premul_at,
    text::{
        layout::{TextMeasure, wrap_text},
        raster::LineRenderer,
    },
};

/// Repaint each row of the title band with the color found at `title_sample_x` in that row.
///
/// Only erases text cleanly when the background is uniform along each row.
pub fn clear_title_area(image: &mut image::RgbImage, layout: &MockupLayout) -> MockupResult<()> {
    if layout.title_sample_x >= image.width() {
        return Err(MockupError::validation(format!(
            "title_sample_x {} is outside a {}px wide image",
            layout.title_sample_x,
            image.width()
        )));
    }

    let rows = layout.title_clear_bottom.min(image.height());
    for y in 0..rows {
        let color = *image.get_pixel(layout.title_sample_x, y);
        for x in 0..image.width() {
            image.put_pixel(x, y, color);
        }
    }
    Ok(())
}

/// A wrapped headline line with its measured extent.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: f32,
    pub height: f32,
}

/// Wrap `text` and position each line: the block is vertically centered in the title band and
/// every line is horizontally centered on its own.
pub fn place_title_lines<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    image_width: u32,
    layout: &MockupLayout,
) -> MockupResult<Vec<PlacedLine>> {
    let lines = wrap_text(measure, text, layout.title_max_width)?;
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let mut extents = Vec::with_capacity(lines.len());
    for line in &lines {
        extents.push(measure.measure(line)?);
    }

    let spacing = i64::from(layout.title_line_spacing);
    let total_height: i64 = extents.iter().map(|e| e.height as i64).sum::<i64>()
        + spacing * (lines.len() as i64 - 1);
    let mut y = i64::from(layout.title_top)
        + (i64::from(layout.title_band_height) - total_height).div_euclid(2);

    let mut placed = Vec::with_capacity(lines.len());
    for (text, extent) in lines.into_iter().zip(extents) {
        let x = (i64::from(image_width) - extent.width as i64).div_euclid(2);
        placed.push(PlacedLine {
            text,
            x,
            y,
            width: extent.width,
            height: extent.height,
        });
        y += extent.height as i64 + spacing;
    }
    Ok(placed)
}

/// Draw the wrapped, centered headline onto `image`. Each line's raster is placed with its
/// top-left corner at the line's `(x, y)`.
pub fn draw_title<R: LineRenderer + ?Sized>(
    image: &mut image::RgbImage,
    renderer: &mut R,
    text: &str,
    layout: &MockupLayout,
) -> MockupResult<()> {
    let placed = place_title_lines(renderer, text, image.width(), layout)?;
    tracing::debug!(lines = placed.len(), "drawing title");

    for line in &placed {
        let Some(raster) = renderer.rasterize_line(&line.text)? else {
            continue;
        };
        over_premul_at(
            image,
            &raster.rgba8_premul,
            raster.width,
            raster.height,
            line.x,
            line.y,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/title.rs"]
mod tests;
