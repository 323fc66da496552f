pub mod string;

// Re-export common utilities
pub use string::{strip_line_ending, truncate_to_bound};
