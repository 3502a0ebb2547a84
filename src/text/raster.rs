use crate::{foundation::error::MockupResult, text::layout::TextMeasure};

/// One headline line rendered to premultiplied RGBA8, origin at the line's ascent-anchored
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRaster {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl LineRaster {
    /// First and last row (inclusive) holding any non-transparent pixel.
    pub fn ink_rows(&self) -> Option<(u32, u32)> {
        if self.width == 0 {
            return None;
        }
        let stride = self.width as usize * 4;
        let mut rows = self
            .rgba8_premul
            .chunks_exact(stride)
            .enumerate()
            .filter(|(_, row)| row.chunks_exact(4).any(|px| px[3] != 0))
            .map(|(y, _)| y as u32);
        let top = rows.next()?;
        let bottom = rows.last().unwrap_or(top);
        Some((top, bottom))
    }

    /// Height of the inked rows, 0 when nothing was drawn.
    pub fn ink_height(&self) -> u32 {
        self.ink_rows()
            .map(|(top, bottom)| bottom - top + 1)
            .unwrap_or(0)
    }
}

/// A title face that can both measure and draw single lines.
pub trait LineRenderer: TextMeasure {
    /// `None` when the line has no drawable extent.
    fn rasterize_line(&mut self, text: &str) -> MockupResult<Option<LineRaster>>;

    /// One-line description for diagnostics.
    fn describe(&self) -> String;
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
