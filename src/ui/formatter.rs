//! Pure formatting functions for UI output.
//!
//! Everything, errors included, goes to stdout so the progress lines and the
//! final failure read as one sequence.

use console::style;
use std::path::Path;

use crate::domain::BranchCategory;
use crate::warnings::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    println!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning.
pub fn display_warning(warning: &BumpWarning) {
    println!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Show the branch and the category it was classified as.
pub fn display_branch(branch: &str, category: BranchCategory) {
    println!(
        "{} {} ({} branch)",
        style("Branch:").bold(),
        branch,
        category
    );
}

/// Show the version change.
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!("{}", style("Version Change:").bold());
    println!("  From: {}", style(old_version).red());
    println!("  To:   {}", style(new_version).green());
}

/// List files a dry run would have rewritten.
pub fn display_dry_run(files: &[&Path], commit_message: Option<&str>) {
    display_status("Dry run, no files were changed:");
    for file in files {
        println!("  would update {}", file.display());
    }
    if let Some(message) = commit_message {
        println!("  would commit with message '{}'", message);
    }
}
