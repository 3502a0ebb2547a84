//! Fixed geometry of a device-frame template.
//!
//! Every constant the renderer needs lives in [`MockupLayout`]. The default is the iPad Pro 13"
//! template set; a job manifest may override any subset of fields.

use crate::foundation::{
    core::{PixelRect, Rgb8},
    error::{MockupError, MockupResult},
};

/// Pixel geometry shared by every template of one device family.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MockupLayout {
    /// Where the resized screenshot lands inside the template.
    pub screen: PixelRect,
    pub screen_radius: u32,
    /// Rows `0..title_clear_bottom` are repainted before drawing the headline.
    pub title_clear_bottom: u32,
    /// Column sampled for each cleared row's fill color.
    pub title_sample_x: u32,
    pub title_top: i32,
    /// Height of the band the headline block is vertically centered in.
    pub title_band_height: i32,
    pub title_max_width: f32,
    pub title_color: Rgb8,
    pub title_size_px: f32,
    pub title_line_spacing: i32,
    pub output_dpi: u32,
}

impl Default for MockupLayout {
    fn default() -> Self {
        Self::ipad_pro_13()
    }
}

impl MockupLayout {
    pub fn ipad_pro_13() -> Self {
        Self {
            screen: PixelRect {
                x: 231,
                y: 463,
                width: 1602,
                height: 2136,
            },
            screen_radius: 56,
            title_clear_bottom: 380,
            title_sample_x: 10,
            title_top: 32,
            title_band_height: 300,
            title_max_width: 1820.0,
            title_color: Rgb8::new(35, 42, 52),
            title_size_px: 68.0,
            title_line_spacing: 8,
            output_dpi: 144,
        }
    }

    pub fn validate(&self) -> MockupResult<()> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(MockupError::validation(
                "layout screen width and height must be > 0",
            ));
        }
        if u64::from(self.screen_radius) * 2 > u64::from(self.screen.min_side()) {
            return Err(MockupError::validation(format!(
                "layout screen_radius {} exceeds half the screen's shorter side ({})",
                self.screen_radius,
                self.screen.min_side()
            )));
        }
        if !self.title_size_px.is_finite() || self.title_size_px <= 0.0 {
            return Err(MockupError::validation(
                "layout title_size_px must be finite and > 0",
            ));
        }
        if !self.title_max_width.is_finite() || self.title_max_width <= 0.0 {
            return Err(MockupError::validation(
                "layout title_max_width must be finite and > 0",
            ));
        }
        if self.title_band_height < 0 || self.title_line_spacing < 0 {
            return Err(MockupError::validation(
                "layout title_band_height and title_line_spacing must be >= 0",
            ));
        }
        if self.output_dpi == 0 {
            return Err(MockupError::validation("layout output_dpi must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
