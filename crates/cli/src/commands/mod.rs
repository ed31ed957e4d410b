pub mod search;

pub use search::SearchArgs;

/// Exit code for invalid arguments.
pub const EXIT_CONFIG: u8 = 1;

/// Exit code for traversal or output failures.
pub const EXIT_FAILURE: u8 = 2;
