use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    branch: Option<String>,
    fail_commit: bool,
    staged: RefCell<Vec<PathBuf>>,
    commits: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a mock repository checked out on `branch`
    pub fn new(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: Some(branch.into()),
            ..Default::default()
        }
    }

    /// Create a mock repository whose branch lookup fails
    pub fn without_branch() -> Self {
        MockRepository::default()
    }

    /// Make every subsequent commit fail
    pub fn fail_commits(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Files staged so far
    pub fn staged(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }

    /// Messages of commits created so far
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        self.branch
            .as_deref()
            .map(|name| name.trim().to_string())
            .ok_or_else(|| BumpError::branch_lookup("not a git repository"))
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        self.staged
            .borrow_mut()
            .extend(paths.iter().map(|p| p.to_path_buf()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        if self.fail_commit {
            return Err(BumpError::commit("commit rejected"));
        }

        let mut commits = self.commits.borrow_mut();
        commits.push(message.to_string());
        Ok(format!("{:040x}", commits.len()))
    }
}
