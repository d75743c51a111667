use crate::domain::BranchCategory;
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the first three dot-separated components of a version string.
    ///
    /// Returns `None` when fewer than three components exist or any of the
    /// first three is not an unsigned integer. Anything after the third
    /// component is ignored.
    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = version.split('.');

        let major = parts.next()?.parse::<u64>().ok()?;
        let minor = parts.next()?.parse::<u64>().ok()?;
        let patch = parts.next()?.parse::<u64>().ok()?;

        Some(Version::new(major, minor, patch))
    }

    /// Bump version according to the branch category.
    ///
    /// Returns `None` for `Unsupported` and on overflow.
    pub fn bump(self, category: BranchCategory) -> Option<Self> {
        match category {
            BranchCategory::Feature => Some(Version {
                major: self.major,
                minor: self.minor.checked_add(1)?,
                patch: 0,
            }),
            BranchCategory::Fix => Some(Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1)?,
            }),
            BranchCategory::Unsupported => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compute the next version string for a branch category.
///
/// Malformed input is returned unchanged rather than partially rewritten:
///
/// ```
/// use branch_bump::domain::{bump_version, BranchCategory};
///
/// assert_eq!(bump_version("2.3.9", BranchCategory::Feature), "2.4.0");
/// assert_eq!(bump_version("1.2.3", BranchCategory::Fix), "1.2.4");
/// assert_eq!(bump_version("1.2", BranchCategory::Fix), "1.2");
/// ```
pub fn bump_version(current: &str, category: BranchCategory) -> String {
    Version::parse(current)
        .and_then(|version| version.bump(category))
        .map(|version| version.to_string())
        .unwrap_or_else(|| current.to_string())
}
