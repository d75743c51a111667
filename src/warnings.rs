use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions noticed while bumping.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// The manifest version is not `major.minor.patch`, so it is left as is
    VersionUnchanged { version: String },
    /// A lockfile carried a different version than the manifest before patching
    LockfileMismatch {
        path: PathBuf,
        lockfile_version: String,
        manifest_version: String,
    },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::VersionUnchanged { version } => {
                write!(
                    f,
                    "Version '{}' is not in major.minor.patch form and was left unchanged",
                    version
                )
            }
            BumpWarning::LockfileMismatch {
                path,
                lockfile_version,
                manifest_version,
            } => {
                write!(
                    f,
                    "{} was at version {} while the manifest was at {}",
                    path.display(),
                    lockfile_version,
                    manifest_version
                )
            }
        }
    }
}
