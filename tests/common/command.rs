use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use mygit::artifacts::objects::object_id::ObjectId;
use mygit::{Config, Repository};
use rstest::fixture;
use std::path::Path;

/// Fixed commit date so digests are reproducible across runs
pub const COMMIT_DATE: i64 = 1_700_000_000;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn repository(repository_dir: TempDir) -> (TempDir, Repository) {
    let config = Config::default().with_commit_date(COMMIT_DATE);
    let repository =
        Repository::init_repo(repository_dir.path(), config).expect("Failed to init repository");

    (repository_dir, repository)
}

/// Write `content` to `name` inside the workspace and stage it.
pub fn stage(repository: &Repository, dir: &TempDir, name: &str, content: &str) -> ObjectId {
    write_file(FileSpec::new(dir.path().join(name), content.to_string()));

    repository
        .stage_file(dir.path().join(name))
        .expect("Failed to stage file")
}

/// Stage a file with random content and commit it.
pub fn commit_random_file(
    repository: &Repository,
    dir: &TempDir,
    name: &str,
    message: &str,
) -> ObjectId {
    let content = Words(3..8).fake::<Vec<String>>().join(" ");
    stage(repository, dir, name, &content);

    repository
        .commit_staged(message)
        .expect("Failed to commit")
}

pub fn run_mygit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mygit").expect("Failed to find mygit binary");
    cmd.current_dir(dir)
        .env("MYGIT_COMMIT_DATE", COMMIT_DATE.to_string())
        .env_remove("MYGIT_DIR")
        .args(args);

    cmd
}
