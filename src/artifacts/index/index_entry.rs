use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// A staged `(blob id, path)` pair
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub oid: ObjectId,
    pub path: PathBuf,
}

impl IndexEntry {
    /// Render the entry as a single index line (without the newline).
    pub fn to_line(&self) -> String {
        format!("{} {}", self.oid, self.path.to_string_lossy())
    }

    /// Parse one index line.
    ///
    /// The path is everything after the first space, so paths may contain
    /// spaces. Lines with a missing path or a bad id yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (oid, path) = line.split_once(' ')?;
        if path.is_empty() {
            return None;
        }

        let oid = ObjectId::try_parse(oid.to_string()).ok()?;
        Some(Self::new(oid, PathBuf::from(path)))
    }
}
