//! Main workflow orchestration logic
//!
//! Keeps the bump sequence out of `main.rs` so it can run against any
//! [Repository] and any working directory.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::{bump_version, BranchCategory};
use crate::error::{BumpError, Result};
use crate::git::Repository;
use crate::manifest;
use crate::ui;
use crate::warnings::BumpWarning;

/// Arguments for the bump workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// Directory holding the manifest and lockfiles
    pub root: PathBuf,

    /// Stage and commit the rewritten files
    pub commit: bool,

    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl Default for BumpArgs {
    fn default() -> Self {
        BumpArgs {
            root: PathBuf::from("."),
            commit: false,
            dry_run: false,
        }
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub branch: String,
    pub category: BranchCategory,
    pub previous_version: String,
    pub new_version: String,

    /// Files rewritten, or that would be rewritten on a dry run
    pub files: Vec<PathBuf>,

    /// Id of the version commit, when one was created
    pub commit_id: Option<String>,

    pub warnings: Vec<BumpWarning>,
    pub dry_run: bool,
}

/// Main bump workflow
///
/// 1. Read the current branch and classify it
/// 2. Read the manifest version and compute the next one
/// 3. Patch the manifest and every lockfile in memory
/// 4. Write the files in order (manifest first)
/// 5. Optionally stage the files and commit
///
/// Nothing is written until every target file has been read and patched,
/// so a missing file or version field aborts before any change. The writes
/// themselves are plain sequential overwrites: if a later write fails, the
/// files already written keep the new version.
pub fn run_bump_workflow<R: Repository>(
    args: &BumpArgs,
    config: &Config,
    repo: &R,
) -> Result<BumpOutcome> {
    ui::display_status("Reading current git branch...");
    let branch = repo.current_branch()?;
    let category = config.branches.classify(&branch);
    debug!("branch '{}' classified as {}", branch, category);

    let commit_message = config
        .commit
        .message_for(category)
        .ok_or_else(|| BumpError::UnsupportedBranch {
            branch: branch.clone(),
        })?;
    ui::display_branch(&branch, category);

    let targets = config.files.targets(&args.root);
    let manifest_path = &targets[0];
    let previous_version = manifest::read_current_version(manifest_path)?;
    let new_version = bump_version(&previous_version, category);
    debug!(
        "{}: {} -> {}",
        manifest_path.display(),
        previous_version,
        new_version
    );

    let mut warnings = Vec::new();
    if new_version == previous_version {
        warnings.push(BumpWarning::VersionUnchanged {
            version: previous_version.clone(),
        });
    }

    let patches = targets
        .iter()
        .map(|path| manifest::prepare_patch(path, &new_version))
        .collect::<Result<Vec<_>>>()?;

    for patch in patches.iter().skip(1) {
        if patch.previous_version != previous_version {
            warnings.push(BumpWarning::LockfileMismatch {
                path: patch.path.clone(),
                lockfile_version: patch.previous_version.clone(),
                manifest_version: previous_version.clone(),
            });
        }
    }

    ui::display_version_change(&previous_version, &new_version);
    for warning in &warnings {
        ui::display_warning(warning);
    }

    let mut outcome = BumpOutcome {
        branch,
        category,
        previous_version,
        new_version,
        files: targets.clone(),
        commit_id: None,
        warnings,
        dry_run: args.dry_run,
    };

    let paths: Vec<&Path> = targets.iter().map(PathBuf::as_path).collect();

    if args.dry_run {
        ui::display_dry_run(&paths, args.commit.then_some(commit_message));
        return Ok(outcome);
    }

    for patch in &patches {
        ui::display_status(&format!("Updating {}", patch.path.display()));
        patch.write()?;
    }
    ui::display_success("Version updated successfully!");

    if args.commit {
        repo.stage(&paths)?;
        let commit_id = repo.commit(commit_message)?;
        debug!("committed {} as {}", commit_message, commit_id);
        ui::display_success("Changes committed successfully!");
        outcome.commit_id = Some(commit_id);
    }

    Ok(outcome)
}
