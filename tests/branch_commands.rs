use crate::common::command::{commit_random_file, repository, stage};
use assert_fs::TempDir;
use mygit::artifacts::branch::branch_name::BranchName;
use mygit::commands::porcelain::branch::BranchInfo;
use mygit::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

fn branch(name: &str) -> BranchName {
    BranchName::try_parse(name.to_string()).unwrap()
}

fn branch_names(repository: &Repository) -> Vec<String> {
    repository
        .list_branches()
        .unwrap()
        .into_iter()
        .map(|branch| branch.name.to_string())
        .collect()
}

#[rstest]
fn branches_diverge_after_checkout(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    stage(&repository, &dir, "a.txt", "hello");
    let first = repository.commit_staged("first").unwrap();

    repository.create_branch("dev").unwrap();
    repository.checkout("dev").unwrap();
    stage(&repository, &dir, "b.txt", "second file");
    let second = repository.commit_staged("second").unwrap();

    let dev_log = repository.log("dev").unwrap();
    assert_eq!(dev_log.len(), 2);
    assert_eq!(dev_log[0].oid, second);
    assert_eq!(dev_log[0].parent, Some(first.clone()));

    let master_log = repository.log("master").unwrap();
    assert_eq!(master_log.len(), 1);
    assert_eq!(master_log[0].oid, first);
    assert_eq!(master_log[0].message, "first");
}

#[rstest]
fn new_branch_copies_current_commit(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    let head = commit_random_file(&repository, &dir, "a.txt", "first");

    repository.create_branch("feature/login").unwrap();

    assert_eq!(
        repository
            .refs()
            .read_ref(&branch("feature/login"))
            .unwrap(),
        Some(head)
    );
}

#[rstest]
fn branch_created_before_any_commit_is_empty(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;

    repository.create_branch("dev").unwrap();

    assert!(repository.log("dev").unwrap().is_empty());
    assert_eq!(
        std::fs::read_to_string(repository.path().join("refs").join("dev")).unwrap(),
        ""
    );
}

#[rstest]
fn creating_an_existing_branch_fails(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;
    repository.create_branch("dev").unwrap();

    assert!(matches!(
        repository.create_branch("dev"),
        Err(Error::BranchExists { name }) if name == "dev"
    ));
    assert!(matches!(
        repository.create_branch("master"),
        Err(Error::BranchExists { .. })
    ));
}

#[rstest]
#[case("")]
#[case("../escape")]
#[case("has space")]
#[case("ends.lock")]
fn invalid_branch_names_are_rejected(repository: (TempDir, Repository), #[case] name: &str) {
    let (_dir, repository) = repository;

    assert!(matches!(
        repository.create_branch(name),
        Err(Error::InvalidBranchName { .. })
    ));
    assert_eq!(branch_names(&repository), vec!["master"]);
}

#[rstest]
fn checkout_of_missing_branch_fails(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;

    assert!(matches!(
        repository.checkout("ghost"),
        Err(Error::BranchNotFound { name }) if name == "ghost"
    ));
    assert_eq!(repository.current_branch().unwrap().as_ref(), "master");
}

#[rstest]
fn checkout_with_staged_entries_fails(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    repository.create_branch("dev").unwrap();
    stage(&repository, &dir, "a.txt", "pending");

    assert!(matches!(
        repository.checkout("dev"),
        Err(Error::DirtyIndex { count: 1 })
    ));
    assert_eq!(repository.current_branch().unwrap().as_ref(), "master");
}

#[rstest]
fn checkout_rewrites_head_file(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;
    repository.create_branch("dev").unwrap();

    repository.checkout("dev").unwrap();

    assert_eq!(
        std::fs::read_to_string(repository.path().join("HEAD")).unwrap(),
        "refs/dev"
    );
}

#[rstest]
fn list_branches_marks_current(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    let head = commit_random_file(&repository, &dir, "a.txt", "first");
    repository.create_branch("dev").unwrap();
    repository.checkout("dev").unwrap();

    let branches = repository.list_branches().unwrap();

    assert_eq!(
        branches
            .iter()
            .map(|BranchInfo { name, oid, is_current }| {
                (name.to_string(), oid.clone(), *is_current)
            })
            .collect::<Vec<_>>(),
        vec![
            ("dev".to_string(), Some(head.clone()), true),
            ("master".to_string(), Some(head), false),
        ]
    );
}

#[rstest]
fn status_reports_branch_head_and_staged(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    let status = repository.status().unwrap();
    assert_eq!(status.branch.unwrap().as_ref(), "master");
    assert_eq!(status.head, None);
    assert!(status.staged.is_empty());

    let head = commit_random_file(&repository, &dir, "a.txt", "first");
    stage(&repository, &dir, "b.txt", "pending");

    let status = repository.status().unwrap();
    assert_eq!(status.head, Some(head));
    assert_eq!(status.staged.len(), 1);
}

#[rstest]
fn status_without_head_degrades_gracefully(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;
    std::fs::remove_file(repository.path().join("HEAD")).unwrap();

    let status = repository.status().unwrap();

    assert_eq!(status.branch, None);
    assert_eq!(status.head, None);
}
