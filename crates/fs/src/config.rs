use std::path::{Path, PathBuf};

use crate::{error::FilterError, pattern::MatchOptions};

/// Walk root used when no target directory is configured.
pub const DEFAULT_TARGET_DIR: &str = ".";

/// Inputs for one [`filter`](crate::filter) run.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Directory to search; the current directory when `None`.
    pub target_dir: Option<PathBuf>,

    /// Include pattern (required)
    pub include: String,

    /// Exclude pattern; empty excludes nothing
    pub exclude: String,

    pub options: MatchOptions,
}

impl FilterConfig {
    pub fn new(include: impl Into<String>) -> Self {
        FilterConfig {
            include: include.into(),
            ..FilterConfig::default()
        }
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = exclude.into();
        self
    }

    #[must_use]
    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target_dir(&self) -> &Path {
        match &self.target_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new(DEFAULT_TARGET_DIR),
        }
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.include.is_empty() {
            return Err(FilterError::Configuration("filter is empty".to_owned()));
        }
        Ok(())
    }
}
