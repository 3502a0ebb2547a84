use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::error::{MockupError, MockupResult},
    layout::MockupLayout,
};

/// One mockup to render. Paths are file names relative to [`SourceDirs`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Job {
    /// Device-frame template, inside the assets directory.
    pub base: String,
    /// Source screenshot, inside the screenshots directory.
    pub screenshot: String,
    pub headline: String,
    /// Output file, written into the assets directory.
    pub out: String,
}

/// Directories jobs are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDirs {
    pub assets_dir: PathBuf,
    pub screenshots_dir: PathBuf,
}

impl SourceDirs {
    pub const DEFAULT_ASSETS_DIR: &'static str = "assets/AppStore-Mockups-iPad";

    /// `assets/AppStore-Mockups-iPad` under the working directory, screenshots from
    /// `$HOME/Desktop`.
    pub fn default_for_user() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            assets_dir: PathBuf::from(Self::DEFAULT_ASSETS_DIR),
            screenshots_dir: home.join("Desktop"),
        }
    }
}

/// A [`Job`] with absolute-or-relative filesystem paths filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedJob {
    pub base_path: PathBuf,
    pub screenshot_path: PathBuf,
    pub headline: String,
    pub out_path: PathBuf,
}

impl Job {
    pub fn new(
        base: impl Into<String>,
        screenshot: impl Into<String>,
        headline: impl Into<String>,
        out: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            screenshot: screenshot.into(),
            headline: headline.into(),
            out: out.into(),
        }
    }

    pub fn resolve(&self, dirs: &SourceDirs) -> ResolvedJob {
        ResolvedJob {
            base_path: dirs.assets_dir.join(&self.base),
            screenshot_path: dirs.screenshots_dir.join(&self.screenshot),
            headline: self.headline.clone(),
            out_path: dirs.assets_dir.join(&self.out),
        }
    }

    pub fn validate(&self) -> MockupResult<()> {
        for (field, value) in [
            ("base", &self.base),
            ("screenshot", &self.screenshot),
            ("out", &self.out),
        ] {
            if value.trim().is_empty() {
                return Err(MockupError::validation(format!(
                    "job {field} must be non-empty"
                )));
            }
        }
        if same_file_name(&self.out, &self.base) {
            return Err(MockupError::validation(format!(
                "job output '{}' would overwrite its base template",
                self.out
            )));
        }
        Ok(())
    }
}

/// Lexical form of a job path: `.` segments and redundant separators are dropped.
fn normalize(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn same_file_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// A layout plus the jobs rendered with it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobManifest {
    #[serde(default)]
    pub layout: MockupLayout,
    pub jobs: Vec<Job>,
}

impl JobManifest {
    pub fn validate(&self) -> MockupResult<()> {
        self.layout.validate()?;
        if self.jobs.is_empty() {
            return Err(MockupError::validation("manifest has no jobs"));
        }
        for (i, job) in self.jobs.iter().enumerate() {
            job.validate().map_err(|e| match e {
                MockupError::Validation(msg) => {
                    MockupError::validation(format!("jobs[{i}]: {msg}"))
                }
                other => other,
            })?;
        }

        let bases: Vec<PathBuf> = self.jobs.iter().map(|j| normalize(&j.base)).collect();
        for (i, job) in self.jobs.iter().enumerate() {
            let out = normalize(&job.out);
            if let Some(j) = bases.iter().position(|b| *b == out) {
                return Err(MockupError::validation(format!(
                    "jobs[{i}]: output '{}' would overwrite the base template of jobs[{j}]",
                    job.out
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> MockupResult<Self> {
        let manifest: Self =
            serde_json::from_str(s).map_err(|e| MockupError::serde(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_json_file(path: &Path) -> MockupResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> MockupResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MockupError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jobs/model.rs"]
mod tests;
