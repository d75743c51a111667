//! Git operations abstraction layer
//!
//! The bump workflow only needs three things from version control: the
//! name of the checked-out branch, staging a set of files, and recording a
//! commit. The [Repository] trait captures exactly that.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use branch_bump::git::Repository;
//! # use std::path::Path;
//! # fn example<R: Repository>(repo: &R) -> branch_bump::Result<()> {
//! let branch = repo.current_branch()?;
//! repo.stage(&[Path::new("package.json")])?;
//! let id = repo.commit("fix: upgrade version")?;
//! println!("{} -> {}", branch, id);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Version control operations used by the bump workflow.
///
/// Implementations map their underlying failures to
/// [BumpError::BranchLookup](crate::error::BumpError::BranchLookup) for
/// [current_branch](Repository::current_branch) and to
/// [BumpError::Commit](crate::error::BumpError::Commit) for staging and
/// committing.
pub trait Repository {
    /// Name of the checked-out branch, without trailing whitespace.
    ///
    /// A detached HEAD yields an empty string.
    fn current_branch(&self) -> Result<String>;

    /// Add the given files to the index
    ///
    /// Paths may be absolute or relative to the current directory; they must
    /// resolve to files inside the repository's working tree.
    fn stage(&self, paths: &[&Path]) -> Result<()>;

    /// Commit the index on top of HEAD and return the new commit id.
    ///
    /// Commit hooks are not run.
    fn commit(&self, message: &str) -> Result<String>;
}
