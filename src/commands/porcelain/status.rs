use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;

/// Snapshot of HEAD and the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub branch: Option<BranchName>,
    pub head: Option<ObjectId>,
    pub staged: Vec<IndexEntry>,
}

impl Repository {
    /// Staged entries in staging order.
    pub fn list_staged(&self) -> crate::Result<Vec<IndexEntry>> {
        self.index().read_all()
    }

    /// Current branch, its commit and the staged entries.
    ///
    /// Missing HEAD or refs read as `None` instead of failing.
    pub fn status(&self) -> crate::Result<StatusInfo> {
        let branch = self.refs().read_head().ok();
        let head = match &branch {
            Some(_) => self.refs().read_head_oid().ok().flatten(),
            None => None,
        };

        Ok(StatusInfo {
            branch,
            head,
            staged: self.list_staged()?,
        })
    }
}
