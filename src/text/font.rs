use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::error::{MockupError, MockupResult};

/// Title font files tried in order; the first one that exists wins.
pub const TITLE_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from an explicit font file.
    File(PathBuf),
    /// Picked from the system font database.
    System { family: String },
    /// Caller-provided bytes.
    Memory,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "file {}", p.display()),
            Self::System { family } => write!(f, "system font '{family}'"),
            Self::Memory => f.write_str("in-memory font"),
        }
    }
}

/// Raw font bytes plus the face index inside them (non-zero for collections).
#[derive(Clone)]
pub struct TitleFont {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
    pub source: FontSource,
}

impl std::fmt::Debug for TitleFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("source", &self.source)
            .finish()
    }
}

impl TitleFont {
    pub fn from_bytes(bytes: Vec<u8>, index: u32) -> MockupResult<Self> {
        if bytes.is_empty() {
            return Err(MockupError::font("font data is empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
            index,
            source: FontSource::Memory,
        })
    }

    pub fn from_file(path: &Path) -> MockupResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let mut font = Self::from_bytes(bytes, 0)?;
        font.source = FontSource::File(path.to_path_buf());
        Ok(font)
    }

    /// Resolve the title font from [`TITLE_FONT_CANDIDATES`], falling back to the system font
    /// database.
    pub fn load() -> MockupResult<Self> {
        let candidates: Vec<PathBuf> = TITLE_FONT_CANDIDATES.iter().map(PathBuf::from).collect();
        Self::load_from(&candidates)
    }

    pub fn load_from(candidates: &[PathBuf]) -> MockupResult<Self> {
        if let Some(path) = candidates.iter().find(|p| p.is_file()) {
            tracing::debug!(path = %path.display(), "using title font file");
            return Self::from_file(path);
        }

        tracing::warn!("no title font candidate exists, falling back to system fonts");
        Self::from_system().ok_or_else(|| {
            MockupError::font(format!(
                "no title font found (tried {} candidate files and the system font database)",
                candidates.len()
            ))
        })
    }

    /// Best bold sans-serif face in the system font database, if any.
    pub fn from_system() -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        let families = [usvg::fontdb::Family::SansSerif];
        let query = usvg::fontdb::Query {
            families: &families,
            weight: usvg::fontdb::Weight::BOLD,
            stretch: usvg::fontdb::Stretch::Normal,
            style: usvg::fontdb::Style::Normal,
        };

        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|f| f.id))?;
        let family = db
            .face(id)
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;

        Some(Self {
            bytes: Arc::new(bytes),
            index,
            source: FontSource::System { family },
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
