// UI and formatting module

pub mod formatters;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes_human, format_definition, format_reading_lines, format_value};
pub use prompts::{dimmed, error, success, warn};
