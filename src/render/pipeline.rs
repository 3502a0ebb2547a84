use std::path::{Path, PathBuf};

use crate::{
    assets::decode::load_rgb_image,
    encode::png::save_png,
    foundation::error::{MockupError, MockupResult},
    jobs::model::{Job, ResolvedJob, SourceDirs},
    layout::MockupLayout,
    render::{
        screen::paste_screenshot,
        title::{clear_title_area, draw_title},
    },
    text::{bitmap::BitmapFace, font::TitleFont, layout::TextLayoutEngine, raster::LineRenderer},
};

/// Renders jobs one at a time against a fixed layout and title face.
pub struct MockupRenderer {
    layout: MockupLayout,
    text: Box<dyn LineRenderer>,
}

impl MockupRenderer {
    pub fn new(layout: MockupLayout, font: TitleFont) -> MockupResult<Self> {
        layout.validate()?;
        let text = TextLayoutEngine::new(font, layout.title_size_px, layout.title_color)?;
        Ok(Self::with_renderer(layout, Box::new(text)))
    }

    /// Use the built-in bitmap face. Needs no font files.
    pub fn with_bitmap_font(layout: MockupLayout) -> MockupResult<Self> {
        layout.validate()?;
        let face = BitmapFace::new(layout.title_size_px, layout.title_color)?;
        Ok(Self::with_renderer(layout, Box::new(face)))
    }

    /// Resolve the title font from the candidate files and system fonts, falling back to the
    /// built-in bitmap face when none of them loads.
    pub fn with_default_font(layout: MockupLayout) -> MockupResult<Self> {
        layout.validate()?;
        let outline = TitleFont::load().and_then(|font| {
            TextLayoutEngine::new(font, layout.title_size_px, layout.title_color)
        });
        match outline {
            Ok(engine) => Ok(Self::with_renderer(layout, Box::new(engine))),
            Err(err) => {
                tracing::warn!(%err, "no usable title font, using built-in bitmap face");
                Self::with_bitmap_font(layout)
            }
        }
    }

    fn with_renderer(layout: MockupLayout, text: Box<dyn LineRenderer>) -> Self {
        tracing::debug!(face = %text.describe(), "title face ready");
        Self { layout, text }
    }

    pub fn layout(&self) -> &MockupLayout {
        &self.layout
    }

    /// Diagnostic description of the face drawing titles.
    pub fn title_face(&self) -> String {
        self.text.describe()
    }

    /// Render one job to its output PNG and return the written path.
    #[tracing::instrument(skip_all, fields(out = %job.out_path.display()))]
    pub fn render_one(&mut self, job: &ResolvedJob) -> MockupResult<PathBuf> {
        ensure_inputs_exist(job)?;

        let mut image = load_rgb_image(&job.base_path)?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            "loaded base template"
        );

        clear_title_area(&mut image, &self.layout)?;
        paste_screenshot(&mut image, &job.screenshot_path, &self.layout)?;
        draw_title(&mut image, self.text.as_mut(), &job.headline, &self.layout)?;

        save_png(&image, &job.out_path, self.layout.output_dpi)?;
        println!("Created {}", job.out_path.display());
        tracing::info!("wrote mockup");
        Ok(job.out_path.clone())
    }

    /// Render `jobs` in order, stopping at the first failure.
    pub fn render_all(&mut self, jobs: &[Job], dirs: &SourceDirs) -> MockupResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(jobs.len());
        for job in jobs {
            written.push(self.render_one(&job.resolve(dirs))?);
        }
        Ok(written)
    }
}

/// Base template first, then screenshot.
pub fn ensure_inputs_exist(job: &ResolvedJob) -> MockupResult<()> {
    if !job.base_path.exists() {
        return Err(MockupError::not_found("base mockup", &job.base_path));
    }
    if !job.screenshot_path.exists() {
        return Err(MockupError::not_found("screenshot", &job.screenshot_path));
    }
    Ok(())
}

/// Every missing input across `jobs`, in job order, without stopping at the first.
pub fn missing_inputs(jobs: &[Job], dirs: &SourceDirs) -> Vec<MockupError> {
    let mut missing = Vec::new();
    for job in jobs {
        let r = job.resolve(dirs);
        for (what, path) in [
            ("base mockup", r.base_path.as_path()),
            ("screenshot", r.screenshot_path.as_path()),
        ] {
            if !path.exists() && !already_reported(&missing, path) {
                missing.push(MockupError::not_found(what, path));
            }
        }
    }
    missing
}

fn already_reported(missing: &[MockupError], path: &Path) -> bool {
    missing.iter().any(|e| e.missing_path() == Some(path))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
