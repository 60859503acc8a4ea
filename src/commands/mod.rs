// Command handlers module
pub mod cli;
pub mod common;
pub mod completions;
pub mod config;
pub mod convert;
pub mod eval;
pub mod registry;
pub mod version;

// Re-exports for cleaner imports
pub use cli::build_cli;
pub use common::GlobalOptions;
pub use version::execute as version;
