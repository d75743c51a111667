use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{BranchCategory, BranchRules};
use crate::error::{BumpError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "branchbump.toml";

/// Represents the complete configuration for branch-bump.
///
/// Every section is optional; the defaults bump `package.json` and
/// `package-lock.json` on `feature`/`fix` branches.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub branches: BranchRules,

    #[serde(default)]
    pub commit: CommitConfig,
}

/// Files whose version field is rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    /// Holds the authoritative version
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Mirror the manifest version
    #[serde(default = "default_lockfiles")]
    pub lockfiles: Vec<String>,
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_lockfiles() -> Vec<String> {
    vec!["package-lock.json".to_string()]
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            lockfiles: default_lockfiles(),
        }
    }
}

impl FilesConfig {
    /// Manifest first, then lockfiles, resolved against `root`
    pub fn targets(&self, root: &Path) -> Vec<PathBuf> {
        std::iter::once(&self.manifest)
            .chain(self.lockfiles.iter())
            .map(|file| root.join(file))
            .collect()
    }
}

/// Commit messages used with `--commit`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitConfig {
    #[serde(default = "default_feature_message")]
    pub feature_message: String,

    #[serde(default = "default_fix_message")]
    pub fix_message: String,
}

fn default_feature_message() -> String {
    "feat: upgrade version".to_string()
}

fn default_fix_message() -> String {
    "fix: upgrade version".to_string()
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            feature_message: default_feature_message(),
            fix_message: default_fix_message(),
        }
    }
}

impl CommitConfig {
    /// Message for a category, `None` for unsupported branches
    pub fn message_for(&self, category: BranchCategory) -> Option<&str> {
        match category {
            BranchCategory::Feature => Some(self.feature_message.as_str()),
            BranchCategory::Fix => Some(self.fix_message.as_str()),
            BranchCategory::Unsupported => None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchbump.toml` in `root`
/// 3. `.branchbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config(root) {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path)
        .map_err(|e| BumpError::config(format!("Cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("Invalid {}: {}", path.display(), e)))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
