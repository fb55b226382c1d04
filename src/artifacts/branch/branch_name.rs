use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::Error;
use std::sync::LazyLock;

const REF_PREFIX: &str = "refs/";

static INVALID_BRANCH_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name regex is valid")
});

/// Path of a ref relative to the repository directory, as stored in HEAD
/// (e.g. `refs/master`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

impl From<&BranchName> for SymRefName {
    fn from(branch_name: &BranchName) -> Self {
        Self(format!("{REF_PREFIX}{branch_name}"))
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> crate::Result<Self> {
        if name.is_empty() || INVALID_BRANCH_NAME.is_match(&name) {
            return Err(Error::InvalidBranchName { name });
        }

        Ok(Self(name))
    }

    /// Recover the branch name from the contents of HEAD.
    pub fn try_parse_sym_ref_name(raw: &str) -> crate::Result<Self> {
        let name = raw
            .trim()
            .strip_prefix(REF_PREFIX)
            .ok_or_else(|| Error::RefUnresolvable {
                name: raw.trim().to_string(),
            })?;

        Self::try_parse(name.to_string()).map_err(|_| Error::RefUnresolvable {
            name: raw.trim().to_string(),
        })
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
