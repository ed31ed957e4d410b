pub const PROGRAM_NAME: &str = "fileglob";

/// Log threshold: error, warn, info, debug or trace.
pub const PROGRAM_LOG_LEVEL: &str = "PLUGIN_LOG_LEVEL";

/// Ant-style include pattern (required).
pub const FILTER_ENV: &str = "PLUGIN_FILTER";

/// Exclude pattern (optional, default none).
pub const EXCLUDES_ENV: &str = "PLUGIN_EXCLUDES";

/// Directory to search; the current directory when unset.
pub const TARGET_DIR_ENV: &str = "PLUGIN_DIR";

/// `true` to fold case when matching.
pub const IGNORE_CASE_ENV: &str = "PLUGIN_IGNORE_CASE";

/// File the pipeline reads step outputs from, one `KEY=value` per line.
pub const OUTPUT_FILE_ENV: &str = "DRONE_OUTPUT";

/// Key under which the JSON list of matches is published.
pub const FILES_INFO_KEY: &str = "FILES_INFO";
