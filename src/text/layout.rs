use std::collections::HashMap;

use crate::{
    foundation::{
        core::Rgb8,
        error::{MockupError, MockupResult},
    },
    text::{
        font::TitleFont,
        raster::{LineRaster, LineRenderer},
    },
};

/// Measured size of a single line of text, in pixels. `height` is the ink box: the rows the
/// line actually paints, not ascent plus descent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Anything that can measure a single unwrapped line.
pub trait TextMeasure {
    fn measure(&mut self, text: &str) -> MockupResult<TextExtent>;

    /// Advance width only. Wrapping calls this for every trial line.
    fn measure_width(&mut self, text: &str) -> MockupResult<f32> {
        self.measure(text).map(|e| e.width)
    }
}

/// Greedy word wrap by measured width.
///
/// A word is appended to the current line when the joined trial line fits `max_width`, or when
/// the current line is empty, so a single word wider than `max_width` still gets its own line.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    max_width: f32,
) -> MockupResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        let trial = current.join(" ");
        if current.len() == 1 || measure.measure_width(&trial)? <= max_width {
            continue;
        }
        current.pop();
        lines.push(current.join(" "));
        current.clear();
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    Ok(lines)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Stateful helper for shaping single headline lines with one registered title font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font: TitleFont,
    family_name: String,
    size_px: f32,
    brush: TextBrushRgba8,
    glyph_fonts: HashMap<u32, vello_cpu::peniko::FontData>,
}

impl TextLayoutEngine {
    pub fn new(font: TitleFont, size_px: f32, color: Rgb8) -> MockupResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MockupError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let family_id = families
            .iter()
            .find(|(_, faces)| faces.iter().any(|f| f.index() == font.index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| MockupError::font(format!("no font families in {}", font.source)))?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MockupError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font,
            family_name,
            size_px,
            brush: color.into(),
            glyph_fonts: HashMap::new(),
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn font(&self) -> &TitleFont {
        &self.font
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Shape `text` as one unbroken, bold line.
    pub fn layout_line(&mut self, text: &str) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(self.brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        layout
    }

    /// Rasterize a shaped layout with vello_cpu. The raster's origin is the layout box's top-left
    /// corner, so glyphs sit on the first line's baseline at `ascent` rows down.
    pub fn rasterize_layout(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
    ) -> MockupResult<Option<LineRaster>> {
        let w = layout.width().ceil();
        let h = layout.height().ceil();
        if w < 1.0 || h < 1.0 {
            return Ok(None);
        }
        let width: u16 = (w as u32)
            .try_into()
            .map_err(|_| MockupError::validation("title line width exceeds u16"))?;
        let height: u16 = (h as u32)
            .try_into()
            .map_err(|_| MockupError::validation("title line height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let index = run.run().font().index;
                let bytes = &self.font.bytes;
                let font = self
                    .glyph_fonts
                    .entry(index)
                    .or_insert_with(|| {
                        vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(bytes.to_vec()),
                            index,
                        )
                    })
                    .clone();

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(Some(LineRaster {
            width: u32::from(width),
            height: u32::from(height),
            rgba8_premul: pixmap.data_as_u8_slice().to_vec(),
        }))
    }
}

impl TextMeasure for TextLayoutEngine {
    fn measure(&mut self, text: &str) -> MockupResult<TextExtent> {
        let layout = self.layout_line(text);
        let ink = self
            .rasterize_layout(&layout)?
            .map(|r| r.ink_height())
            .unwrap_or(0);
        Ok(TextExtent {
            width: layout.width(),
            height: ink as f32,
        })
    }

    fn measure_width(&mut self, text: &str) -> MockupResult<f32> {
        Ok(self.layout_line(text).width())
    }
}

impl LineRenderer for TextLayoutEngine {
    fn rasterize_line(&mut self, text: &str) -> MockupResult<Option<LineRaster>> {
        let layout = self.layout_line(text);
        self.rasterize_layout(&layout)
    }

    fn describe(&self) -> String {
        format!(
            "{} (face {}, {}) at {}px",
            self.family_name, self.font.index, self.font.source, self.size_px
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
