//! storeframe composites localized App Store screenshot mockups.
//!
//! Each [`Job`] names a device-frame template, a simulator screenshot, a headline and an output
//! file. Rendering a job is a single linear pass over one RGB buffer:
//!
//! 1. **Clear** the title band row by row ([`clear_title_area`])
//! 2. **Paste** the resized screenshot through a rounded-rect mask ([`paste_screenshot`])
//! 3. **Draw** the wrapped, centered headline ([`draw_title`])
//! 4. **Save** an optimized PNG tagged with the layout's DPI ([`save_png`])
//!
//! Every fixed coordinate lives in [`MockupLayout`]; the built-in job list is
//! [`JobManifest::spanish_ipad`].
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod jobs;
mod layout;
mod render;
mod text;

pub use assets::decode::{decode_rgb, load_rgb_image};
pub use encode::png::{dpi_to_ppm, ensure_parent_dir, save_png};
pub use foundation::core::{PixelRect, Rgb8};
pub use foundation::error::{MockupError, MockupResult};
pub use jobs::catalog::{SPANISH_SUFFIX, spanish_ipad_jobs};
pub use jobs::model::{Job, JobManifest, ResolvedJob, SourceDirs};
pub use layout::MockupLayout;
pub use render::composite::{PremulRgba8, over_opaque, over_premul_at, paste_masked, premul_rgb};
pub use render::pipeline::{MockupRenderer, ensure_inputs_exist, missing_inputs};
pub use render::screen::{paste_screenshot, paste_screenshot_image, rounded_rect_mask};
pub use render::title::{PlacedLine, clear_title_area, draw_title, place_title_lines};
pub use text::bitmap::BitmapFace;
pub use text::font::{FontSource, TITLE_FONT_CANDIDATES, TitleFont};
pub use text::layout::{TextBrushRgba8, TextExtent, TextLayoutEngine, TextMeasure, wrap_text};
pub use text::raster::{LineRaster, LineRenderer};
