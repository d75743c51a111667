use crate::error::{BumpError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use log::debug;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            BumpError::branch_lookup(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| BumpError::commit("Repository has no working directory"))
    }

    /// Express a path relative to the working directory, as the index expects.
    ///
    /// Relative input is resolved against the current directory, so `./x`,
    /// `../x` and paths from a subdirectory all land on the right entry.
    fn index_path(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .workdir()?
            .canonicalize()
            .map_err(|e| BumpError::commit(format!("Cannot resolve working directory: {}", e)))?;
        let absolute = path.canonicalize().map_err(|e| {
            BumpError::commit(format!("Cannot resolve {}: {}", path.display(), e))
        })?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                BumpError::commit(format!(
                    "{} is outside the repository at {}",
                    path.display(),
                    workdir.display()
                ))
            })
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        if self
            .repo
            .head_detached()
            .map_err(|e| BumpError::branch_lookup(e.message()))?
        {
            debug!("HEAD is detached");
            return Ok(String::new());
        }

        match self.repo.head() {
            Ok(head) => Ok(head.shorthand().unwrap_or_default().trim().to_string()),
            // A fresh repository has no commits yet, but HEAD still names a branch.
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .map_err(|e| BumpError::branch_lookup(e.message()))?;
                let target = head.symbolic_target().unwrap_or_default();
                Ok(target.trim_start_matches("refs/heads/").trim().to_string())
            }
            Err(e) => Err(BumpError::branch_lookup(e.message())),
        }
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self
            .repo
            .index()
            .map_err(|e| BumpError::commit(format!("Cannot open index: {}", e.message())))?;

        for path in paths {
            let relative = self.index_path(path)?;
            debug!("staging {}", relative.display());
            index.add_path(&relative).map_err(|e| {
                BumpError::commit(format!(
                    "Error adding {} to staging area: {}",
                    relative.display(),
                    e.message()
                ))
            })?;
        }

        index
            .write()
            .map_err(|e| BumpError::commit(format!("Cannot write index: {}", e.message())))
    }

    fn commit(&self, message: &str) -> Result<String> {
        let git_err = |e: git2::Error| BumpError::commit(e.message().to_string());

        let mut index = self.repo.index().map_err(git_err)?;
        let tree_id = index.write_tree().map_err(git_err)?;
        let tree = self.repo.find_tree(tree_id).map_err(git_err)?;
        let signature = self.repo.signature().map_err(|e| {
            BumpError::commit(format!("No commit author configured: {}", e.message()))
        })?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit().map_err(git_err)?),
            Err(e) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(git_err(e)),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .map_err(git_err)?;

        debug!("created commit {}", oid);
        Ok(oid.to_string())
    }
}
