//! Built-in 8x8 bitmap face used when no outline font can be resolved.

use font8x8::UnicodeFonts as _;

use crate::{
    foundation::{
        core::Rgb8,
        error::{MockupError, MockupResult},
    },
    render::composite::premul_rgb,
    text::{
        layout::{TextExtent, TextMeasure},
        raster::{LineRaster, LineRenderer},
    },
};

const CELL: u32 = 8;

/// Fixed-advance bitmap face scaled by an integer factor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
    color: Rgb8,
}

impl BitmapFace {
    /// Scale is the nearest integer multiple of the 8px cell to `size_px` (at least 1).
    pub fn new(size_px: f32, color: Rgb8) -> MockupResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MockupError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let scale = (size_px / CELL as f32).round().max(1.0) as u32;
        Ok(Self { scale, color })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn advance(&self) -> u32 {
        CELL * self.scale
    }

    fn line_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.advance()
    }
}

// Unknown characters render as '?'.
fn glyph_rows(c: char) -> [u8; 8] {
    font8x8::BASIC_FONTS
        .get(c)
        .or_else(|| font8x8::LATIN_FONTS.get(c))
        .or_else(|| font8x8::BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

impl TextMeasure for BitmapFace {
    fn measure(&mut self, text: &str) -> MockupResult<TextExtent> {
        let height = self
            .rasterize_line(text)?
            .map(|r| r.ink_height())
            .unwrap_or(0);
        Ok(TextExtent {
            width: self.line_width(text) as f32,
            height: height as f32,
        })
    }

    fn measure_width(&mut self, text: &str) -> MockupResult<f32> {
        Ok(self.line_width(text) as f32)
    }
}

impl LineRenderer for BitmapFace {
    fn rasterize_line(&mut self, text: &str) -> MockupResult<Option<LineRaster>> {
        let width = self.line_width(text);
        if width == 0 {
            return Ok(None);
        }
        let height = self.advance();
        let ink = premul_rgb([self.color.r, self.color.g, self.color.b], 255);

        let mut rgba8_premul = vec![0u8; width as usize * height as usize * 4];
        for (i, c) in text.chars().enumerate() {
            let origin_x = i as u32 * self.advance();
            for (row, bits) in glyph_rows(c).iter().enumerate() {
                for col in 0..CELL {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    for dy in 0..self.scale {
                        let y = row as u32 * self.scale + dy;
                        let x0 = origin_x + col * self.scale;
                        let start = (y as usize * width as usize + x0 as usize) * 4;
                        for px in rgba8_premul[start..start + self.scale as usize * 4]
                            .chunks_exact_mut(4)
                        {
                            px.copy_from_slice(&ink);
                        }
                    }
                }
            }
        }

        Ok(Some(LineRaster {
            width,
            height,
            rgba8_premul,
        }))
    }

    fn describe(&self) -> String {
        format!("built-in 8x8 bitmap face (scale {})", self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
