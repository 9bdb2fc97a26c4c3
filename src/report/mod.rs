pub mod html;
pub mod results;

pub use html::html_escape;
pub use results::{format_results, results_to_string, ResultCounts};

/// Default number of lines a formatted result list keeps before the
/// low-count tail is skipped.
pub const DEFAULT_LIMIT: usize = 5;

/// Default separator between the parts of a result key.
pub const DEFAULT_SEP: &str = "::";
