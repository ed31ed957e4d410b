mod config;
pub mod logging;
pub mod output;

pub use config::{
    EXCLUDES_ENV, FILES_INFO_KEY, FILTER_ENV, IGNORE_CASE_ENV, OUTPUT_FILE_ENV, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME, TARGET_DIR_ENV,
};

pub use logging::init;
pub use output::OutputFile;
