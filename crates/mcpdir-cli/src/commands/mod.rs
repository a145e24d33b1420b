//! Command implementations for mcpdir-cli

pub mod completions;
pub mod list;
pub mod platforms;
pub mod show;
pub mod verify;

pub use completions::run_completions;
pub use list::{run_categories, run_featured, run_list};
pub use platforms::run_platforms;
pub use show::{run_show, run_snippet};
pub use verify::run_verify;
