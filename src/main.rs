use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mygit::artifacts::log::rev_list::CommitRecord;
use mygit::artifacts::merge::fast_forward::MergeOutcome;
use mygit::{Config, Repository};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_VAR: &str = "MYGIT_LOG";

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "A minimal content-addressed version control store",
    long_about = "Stores files as compressed, content-addressed blobs, commits them into \
    singly-parented chains and moves branches with fast-forward-only merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "add", about = "Stage files for the next commit")]
    Add {
        #[arg(index = 1, required = true, help = "Files to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command commits every staged blob on the current branch and clears the index."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the history of a branch")]
    Log {
        #[arg(index = 1, help = "Branch to show (defaults to the current branch)")]
        branch: Option<String>,
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "branch",
        about = "List branches, or create one at the current commit"
    )]
    Branch {
        #[arg(index = 1, help = "Name of the branch to create")]
        name: Option<String>,
    },
    #[command(name = "checkout", about = "Switch to another branch")]
    Checkout {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Fast-forward the current branch to another branch"
    )]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "status", about = "Show the current branch and staged files")]
    Status,
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "cat-file", about = "Print the raw content of an object")]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(name = "ls-tree", about = "List the blobs recorded by a commit")]
    LsTree {
        #[arg(index = 1)]
        sha: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository(config: Config) -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Repository::open_with_config(&pwd, config).context("failed to open repository")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load_from_env()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init { path } => {
            let root = match path {
                Some(path) => {
                    std::fs::create_dir_all(&path)?;
                    path.canonicalize()?
                }
                None => std::env::current_dir()?,
            };

            let repository = Repository::init_repo(&root, config)?;
            writeln!(
                stdout,
                "Initialized empty repository in {}",
                repository.path().display()
            )?;
        }
        Commands::Add { paths } => {
            let repository = open_repository(config)?;

            for path in paths {
                repository
                    .stage_file(&path)
                    .with_context(|| format!("failed to stage {}", path.display()))?;
            }
        }
        Commands::Commit { message } => {
            let repository = open_repository(config)?;

            let commit_id = repository.commit_staged(&message)?;
            let record = repository.read_commit(&commit_id)?;
            let branch = repository.current_branch()?;
            let is_root = if record.parent.is_none() { "(root-commit) " } else { "" };

            writeln!(
                stdout,
                "[{} {}{}] {}",
                branch,
                is_root,
                record.oid.to_short_oid(),
                record.short_message()
            )?;
        }
        Commands::Log { branch, oneline } => {
            let repository = open_repository(config)?;
            let branch = match branch {
                Some(branch) => branch,
                None => repository.current_branch()?.to_string(),
            };

            let records = repository.log(&branch)?;
            if records.is_empty() {
                writeln!(stdout, "branch '{branch}' does not have any commits yet")?;
            }

            for (position, record) in records.iter().enumerate() {
                if oneline {
                    show_commit_oneline(&mut stdout, record)?;
                } else {
                    if position > 0 {
                        writeln!(stdout)?;
                    }
                    show_commit_medium(&mut stdout, record)?;
                }
            }
        }
        Commands::Branch { name } => {
            let repository = open_repository(config)?;

            match name {
                Some(name) => repository.create_branch(&name)?,
                None => {
                    for branch in repository.list_branches()? {
                        let marker = if branch.is_current { "*" } else { " " };
                        let name = if branch.is_current {
                            branch.name.to_string().green().to_string()
                        } else {
                            branch.name.to_string()
                        };
                        writeln!(stdout, "{marker} {name}")?;
                    }
                }
            }
        }
        Commands::Checkout { name } => {
            let repository = open_repository(config)?;

            repository.checkout(&name)?;
            writeln!(stdout, "Switched to branch '{name}'")?;
        }
        Commands::Merge { branch } => {
            let repository = open_repository(config)?;

            match repository.merge(&branch)? {
                MergeOutcome::AlreadyUpToDate => writeln!(stdout, "Already up to date.")?,
                MergeOutcome::FastForward { from, to } => {
                    let from = from
                        .map(|oid| oid.to_short_oid())
                        .unwrap_or_else(|| "(empty)".to_string());
                    writeln!(stdout, "Updating {from}..{}", to.to_short_oid())?;
                    writeln!(stdout, "Fast-forward")?;
                }
            }
        }
        Commands::Status => {
            let repository = open_repository(config)?;
            let status = repository.status()?;

            match &status.branch {
                Some(branch) => writeln!(stdout, "On branch {branch}")?,
                None => writeln!(stdout, "HEAD is not set")?,
            }
            if status.head.is_none() {
                writeln!(stdout, "\nNo commits yet")?;
            }

            if status.staged.is_empty() {
                writeln!(stdout, "\nnothing staged")?;
            } else {
                writeln!(stdout, "\nChanges to be committed:")?;
                for entry in &status.staged {
                    writeln!(
                        stdout,
                        "\t{} {}",
                        entry.oid.to_short_oid().green(),
                        entry.path.display()
                    )?;
                }
            }
        }
        Commands::HashObject { write, file } => {
            let repository = if write {
                open_repository(config)?
            } else {
                Repository::new(std::env::current_dir()?, config)
            };

            let object_id = repository.hash_object(&file, write)?;
            writeln!(stdout, "{object_id}")?;
        }
        Commands::CatFile { sha } => {
            let repository = open_repository(config)?;

            let content = repository.cat_file(&sha)?;
            stdout.write_all(&content)?;
        }
        Commands::LsTree { sha } => {
            let repository = open_repository(config)?;
            let commit_id = mygit::artifacts::objects::object_id::ObjectId::try_parse(sha)?;

            for blob_id in repository.ls_tree(&commit_id)? {
                writeln!(stdout, "{blob_id}")?;
            }
        }
    }

    Ok(())
}

fn show_commit_oneline(writer: &mut impl Write, record: &CommitRecord) -> Result<()> {
    writeln!(
        writer,
        "{} {}",
        record.oid.to_short_oid().yellow(),
        record.short_message()
    )?;

    Ok(())
}

fn show_commit_medium(writer: &mut impl Write, record: &CommitRecord) -> Result<()> {
    writeln!(writer, "{}", format!("commit {}", record.oid).yellow())?;

    let date = record
        .timestamp()
        .map(|date| date.format("%a %b %-d %H:%M:%S %Y %z").to_string())
        .unwrap_or_else(|| record.date.to_string());
    writeln!(writer, "Date:   {date}")?;
    writeln!(writer)?;

    for message_line in record.message.lines() {
        writeln!(writer, "    {message_line}")?;
    }

    Ok(())
}
