use anyhow::Context;

/// Default name of the repository directory under the working root
pub const DEFAULT_REPOSITORY_DIR: &str = ".mygit";

const REPOSITORY_DIR_VAR: &str = "MYGIT_DIR";
const COMMIT_DATE_VAR: &str = "MYGIT_COMMIT_DATE";

/// Repository configuration
///
/// Mirrors how git reads `GIT_DIR` and `GIT_AUTHOR_DATE`: everything comes
/// from the environment, with defaults when a variable is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory name holding objects, refs, HEAD and the index
    pub repository_dir: String,
    /// Fixed commit date in epoch seconds; `None` means "now"
    pub commit_date: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository_dir: DEFAULT_REPOSITORY_DIR.to_string(),
            commit_date: None,
        }
    }
}

impl Config {
    /// Load configuration from `MYGIT_DIR` and `MYGIT_COMMIT_DATE`.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let repository_dir = std::env::var(REPOSITORY_DIR_VAR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPOSITORY_DIR.to_string());

        let commit_date = std::env::var(COMMIT_DATE_VAR)
            .ok()
            .map(|date| {
                date.trim()
                    .parse::<i64>()
                    .with_context(|| format!("{COMMIT_DATE_VAR} must be epoch seconds, got {date}"))
            })
            .transpose()?;

        Ok(Config {
            repository_dir,
            commit_date,
        })
    }

    pub fn with_commit_date(self, commit_date: i64) -> Self {
        Config {
            commit_date: Some(commit_date),
            ..self
        }
    }

    /// Date to record on the next commit
    pub fn commit_timestamp(&self) -> i64 {
        self.commit_date
            .unwrap_or_else(|| chrono::Utc::now().timestamp())
    }
}
