pub mod clean_report;
pub mod paths;

pub use clean_report::render_clean_report;
pub use paths::{run_timestamp, timestamped_sibling};
