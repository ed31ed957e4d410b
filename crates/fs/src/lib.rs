mod config;
mod error;
pub mod pattern;
mod record;
mod walker;

pub use config::{DEFAULT_TARGET_DIR, FilterConfig};
pub use error::{FilterError, TraversalStep};
pub use pattern::{Anchoring, MatchOptions, Pattern, matches};
pub use record::FileRecord;
pub use walker::filter;
