use crate::common::command::{repository, stage};
use assert_fs::TempDir;
use mygit::artifacts::index::index_entry::IndexEntry;
use mygit::artifacts::objects::object_id::ObjectId;
use mygit::{Error, Repository};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

mod common;

#[rstest]
fn staging_identical_content_stores_one_object(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;

    let first = stage(&repository, &dir, "a.txt", "hello");
    let second = stage(&repository, &dir, "b.txt", "hello");

    assert_eq!(first, second);
    assert_eq!(first, ObjectId::hash(b"hello"));
    assert_eq!(repository.database().list_objects().unwrap(), vec![first]);
}

#[rstest]
fn cat_file_returns_original_bytes(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    let oid = stage(&repository, &dir, "notes.md", "# title\n\nbody\n");

    let content = repository.cat_file(oid.as_ref()).unwrap();

    assert_eq!(&content[..], b"# title\n\nbody\n");
}

#[rstest]
fn cat_file_returns_large_repetitive_files(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    let content = "hello world\n".repeat(100);
    let oid = stage(&repository, &dir, "greeting.txt", &content);

    let commit_id = repository.commit_staged("greeting").unwrap();

    assert_eq!(&repository.cat_file(oid.as_ref()).unwrap()[..], content.as_bytes());
    assert_eq!(repository.ls_tree(&commit_id).unwrap(), vec![oid]);
}

#[rstest]
fn staging_a_path_with_a_newline_is_rejected(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    std::fs::write(dir.path().join("we\nird.txt"), "weird").unwrap();

    assert!(matches!(
        repository.stage_file(dir.path().join("we\nird.txt")),
        Err(Error::InvalidPath { .. })
    ));
    assert!(repository.list_staged().unwrap().is_empty());
}

#[rstest]
fn cat_file_of_unknown_id_is_not_found(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;
    let unknown = ObjectId::hash(b"unknown");

    assert!(matches!(
        repository.cat_file(unknown.as_ref()),
        Err(Error::ObjectNotFound { .. })
    ));
    assert!(matches!(
        repository.cat_file("xyz"),
        Err(Error::InvalidObjectId { .. })
    ));
}

#[rstest]
fn hash_object_without_write_stores_nothing(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();

    let oid = repository.hash_object("a.txt", false).unwrap();
    assert_eq!(oid, ObjectId::hash(b"hello"));
    assert!(!repository.database().contains(&oid));

    repository.hash_object("a.txt", true).unwrap();
    assert!(repository.database().contains(&oid));
}

#[rstest]
fn staged_entries_round_trip_until_commit(repository: (TempDir, Repository)) {
    let (dir, repository) = repository;
    assert!(repository.list_staged().unwrap().is_empty());

    let first = stage(&repository, &dir, "a.txt", "one");
    let second = stage(&repository, &dir, "nested/b.txt", "two");
    let again = stage(&repository, &dir, "a.txt", "one, edited");

    assert_eq!(
        repository.list_staged().unwrap(),
        vec![
            IndexEntry::new(first, PathBuf::from("a.txt")),
            IndexEntry::new(second, PathBuf::from("nested/b.txt")),
            IndexEntry::new(again, PathBuf::from("a.txt")),
        ]
    );

    repository.commit_staged("snapshot").unwrap();

    assert!(repository.list_staged().unwrap().is_empty());
}

#[rstest]
fn staging_a_missing_file_fails_without_touching_the_index(repository: (TempDir, Repository)) {
    let (_dir, repository) = repository;

    assert!(matches!(
        repository.stage_file("does-not-exist.txt"),
        Err(Error::Io(_))
    ));
    assert!(repository.list_staged().unwrap().is_empty());
}
