//! User interface module - console output for the bump workflow.

pub mod formatter;

pub use formatter::{
    display_branch, display_dry_run, display_error, display_status, display_success,
    display_version_change, display_warning,
};
