use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;

/// A branch as listed by `list_branches`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: BranchName,
    pub oid: Option<ObjectId>,
    pub is_current: bool,
}

impl Repository {
    /// Create a branch at the current branch's commit (empty if it has none).
    pub fn create_branch(&self, branch_name: &str) -> crate::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let _lock = self.lock()?;

        let source_oid = self.refs().read_head_oid()?;
        self.refs().create_branch(&branch_name, source_oid.as_ref())
    }

    pub fn current_branch(&self) -> crate::Result<BranchName> {
        self.refs().read_head()
    }

    pub fn list_branches(&self) -> crate::Result<Vec<BranchInfo>> {
        let current = self.refs().read_head().ok();

        Ok(self
            .refs()
            .list_branches()?
            .into_iter()
            .map(|(name, oid)| BranchInfo {
                is_current: current.as_ref() == Some(&name),
                name,
                oid,
            })
            .collect())
    }
}
