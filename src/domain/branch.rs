use serde::{Deserialize, Serialize};
use std::fmt;

/// Bump category derived from a branch name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    Feature,
    Fix,
    Unsupported,
}

impl BranchCategory {
    /// Conventional commit type used in the version commit message
    pub fn commit_prefix(&self) -> Option<&'static str> {
        match self {
            BranchCategory::Feature => Some("feat"),
            BranchCategory::Fix => Some("fix"),
            BranchCategory::Unsupported => None,
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BranchCategory::Feature => "feature",
            BranchCategory::Fix => "fix",
            BranchCategory::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Keywords searched for in branch names.
///
/// Matching is case-sensitive substring containment; the feature keyword
/// is checked first, so `hotfix-and-feature` is a feature branch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BranchRules {
    #[serde(default = "default_feature_keyword")]
    pub feature: String,

    #[serde(default = "default_fix_keyword")]
    pub fix: String,
}

fn default_feature_keyword() -> String {
    "feature".to_string()
}

fn default_fix_keyword() -> String {
    "fix".to_string()
}

impl Default for BranchRules {
    fn default() -> Self {
        BranchRules {
            feature: default_feature_keyword(),
            fix: default_fix_keyword(),
        }
    }
}

impl BranchRules {
    /// Classify a branch name against these keywords
    pub fn classify(&self, branch_name: &str) -> BranchCategory {
        if contains_keyword(branch_name, &self.feature) {
            BranchCategory::Feature
        } else if contains_keyword(branch_name, &self.fix) {
            BranchCategory::Fix
        } else {
            BranchCategory::Unsupported
        }
    }
}

// An empty keyword would match every branch.
fn contains_keyword(branch_name: &str, keyword: &str) -> bool {
    !keyword.is_empty() && branch_name.contains(keyword)
}

/// Classify a branch name with the default `feature` / `fix` keywords
pub fn classify(branch_name: &str) -> BranchCategory {
    BranchRules::default().classify(branch_name)
}
