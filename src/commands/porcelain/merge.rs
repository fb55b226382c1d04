use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::fast_forward::{MergeOutcome, plan_merge};

impl Repository {
    /// Fast-forward the current branch to `source`.
    ///
    /// Only the current branch's ref can change; the source ref is never
    /// written. Diverged histories fail with `NotImplemented` and leave both
    /// refs as they were.
    pub fn merge(&self, source: &str) -> crate::Result<MergeOutcome> {
        let source_name = BranchName::try_parse(source.to_string())?;

        let _lock = self.lock()?;

        let source_oid = self.refs().read_ref(&source_name)?;
        let current_name = self.refs().read_head()?;
        let current_oid = self.refs().read_head_oid()?;

        let outcome = plan_merge(self.database(), current_oid.as_ref(), source_oid.as_ref())?;

        if let MergeOutcome::FastForward { to, .. } = &outcome {
            self.refs().write_ref(&current_name, to)?;
            tracing::info!(
                branch = %current_name,
                source = %source_name,
                to = %to,
                "fast-forwarded"
            );
        }

        Ok(outcome)
    }
}
