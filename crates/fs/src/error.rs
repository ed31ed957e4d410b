use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The filesystem operation that was in progress when a walk failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStep {
    ResolveRoot,
    ReadDir,
    ReadEntry,
    ReadMetadata,
}

impl fmt::Display for TraversalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TraversalStep::ResolveRoot => "resolve root",
            TraversalStep::ReadDir => "read directory",
            TraversalStep::ReadEntry => "read entry in",
            TraversalStep::ReadMetadata => "read metadata of",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid arguments, reported before the filesystem is touched.
    #[error("{0}")]
    Configuration(String),

    #[error("failed to {step} {}: {source}", .path.display())]
    Traversal {
        step: TraversalStep,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilterError {
    /// Adapter for `map_err`; the path is only copied when an error occurs.
    pub(crate) fn traversal(step: TraversalStep, path: &Path) -> impl FnOnce(io::Error) -> Self {
        move |source| FilterError::Traversal {
            step,
            path: path.to_path_buf(),
            source,
        }
    }

    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, FilterError::Configuration(_))
    }
}
