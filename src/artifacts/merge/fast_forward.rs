use crate::areas::database::Database;
use crate::artifacts::log::rev_list::is_ancestor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;

/// What a fast-forward-only merge will do to the current branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The current branch already contains the source history; nothing moves.
    AlreadyUpToDate,
    /// The current branch moves from `from` to `to`.
    FastForward {
        from: Option<ObjectId>,
        to: ObjectId,
    },
}

/// Decide how to merge `source` into `current`.
///
/// - equal tips, or an empty source: already up to date
/// - empty current branch: fast-forward to the source
/// - current is an ancestor of source: fast-forward
/// - source is an ancestor of current: already up to date
/// - anything else needs a two-parent commit and fails with `NotImplemented`
pub fn plan_merge(
    database: &Database,
    current: Option<&ObjectId>,
    source: Option<&ObjectId>,
) -> crate::Result<MergeOutcome> {
    match (current, source) {
        (current, source) if current == source => Ok(MergeOutcome::AlreadyUpToDate),
        (_, None) => Ok(MergeOutcome::AlreadyUpToDate),
        (None, Some(source)) => Ok(MergeOutcome::FastForward {
            from: None,
            to: source.clone(),
        }),
        (Some(current), Some(source)) => {
            if is_ancestor(database, current, source)? {
                Ok(MergeOutcome::FastForward {
                    from: Some(current.clone()),
                    to: source.clone(),
                })
            } else if is_ancestor(database, source, current)? {
                Ok(MergeOutcome::AlreadyUpToDate)
            } else {
                Err(Error::NotImplemented(format!(
                    "{} and {} have diverged; merge commits are not supported",
                    current.to_short_oid(),
                    source.to_short_oid()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit::Commit;
    use crate::artifacts::objects::tree::Tree;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    struct Graph {
        _dir: TempDir,
        database: Database,
    }

    impl Graph {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let database = Database::new(dir.path().join("objects").into_boxed_path());
            Graph {
                _dir: dir,
                database,
            }
        }

        fn commit(&self, parent: Option<&ObjectId>, message: &str) -> ObjectId {
            let tree_oid = self.database.store(&Tree::new(vec![])).unwrap();
            self.database
                .store(&Commit::new(parent.cloned(), tree_oid, 0, message.to_string()))
                .unwrap()
        }
    }

    #[test]
    fn both_empty_is_up_to_date() {
        let graph = Graph::new();

        assert_eq!(
            plan_merge(&graph.database, None, None).unwrap(),
            MergeOutcome::AlreadyUpToDate
        );
    }

    #[test]
    fn empty_current_adopts_source() {
        let graph = Graph::new();
        let source = graph.commit(None, "a");

        assert_eq!(
            plan_merge(&graph.database, None, Some(&source)).unwrap(),
            MergeOutcome::FastForward {
                from: None,
                to: source
            }
        );
    }

    #[test]
    fn empty_source_changes_nothing() {
        let graph = Graph::new();
        let current = graph.commit(None, "a");

        assert_eq!(
            plan_merge(&graph.database, Some(&current), None).unwrap(),
            MergeOutcome::AlreadyUpToDate
        );
    }

    #[test]
    fn ancestor_current_fast_forwards() {
        let graph = Graph::new();
        let base = graph.commit(None, "base");
        let tip = graph.commit(Some(&base), "tip");

        assert_eq!(
            plan_merge(&graph.database, Some(&base), Some(&tip)).unwrap(),
            MergeOutcome::FastForward {
                from: Some(base.clone()),
                to: tip.clone()
            }
        );
        assert_eq!(
            plan_merge(&graph.database, Some(&tip), Some(&base)).unwrap(),
            MergeOutcome::AlreadyUpToDate
        );
    }

    #[test]
    fn diverged_histories_are_not_implemented() {
        let graph = Graph::new();
        let base = graph.commit(None, "base");
        let left = graph.commit(Some(&base), "left");
        let right = graph.commit(Some(&base), "right");

        assert!(matches!(
            plan_merge(&graph.database, Some(&left), Some(&right)),
            Err(Error::NotImplemented(_))
        ));
    }

    #[test]
    fn independent_roots_are_not_implemented() {
        let graph = Graph::new();
        let left = graph.commit(None, "left");
        let right = graph.commit(None, "right");

        assert!(matches!(
            plan_merge(&graph.database, Some(&left), Some(&right)),
            Err(Error::NotImplemented(_))
        ));
    }
}
