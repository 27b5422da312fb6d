//! lipasto - browse bare git repositories from the command line
//!
//! # Usage
//! ```bash
//! lipasto --root /srv/git repos                 # List repositories
//! lipasto --root /srv/git log project.git -p 2  # Second page of history
//! lipasto --root /srv/git show project.git v1.0 # One commit
//! lipasto --root /srv/git refs project.git      # Branches and tags
//! lipasto --root /srv/git owner project.git     # gitweb.owner
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lipasto::git::engine;
use lipasto::{AppError, BareRepo, Commit, EngineOptions, Page, Reference};

/// Read-only browser for a directory of bare git repositories
#[derive(Parser)]
#[command(name = "lipasto")]
#[command(about = "Browse bare git repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the bare repositories
    #[arg(short, long, env = "LIPASTO_ROOT", default_value = ".")]
    root: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Maximum number of pack files kept mapped at once
    #[arg(long, value_name = "N")]
    mwindow_file_limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bare repositories under the root
    Repos {
        /// Stop after this many repositories
        #[arg(short, long, default_value = "100")]
        max: usize,
    },
    /// Show one page of history
    Log {
        /// Repository directory name
        repo: String,

        /// Reference or revision to start from
        #[arg(short = 'r', long = "ref", default_value = "HEAD")]
        start_ref: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Commits per page
        #[arg(long, default_value = "50")]
        per_page: usize,
    },
    /// Show a single commit
    Show {
        /// Repository directory name
        repo: String,

        /// Hash, abbreviated hash or reference name
        revision: String,
    },
    /// List branches and tags
    Refs {
        /// Repository directory name
        repo: String,
    },
    /// Print the repository owner
    Owner {
        /// Repository directory name
        repo: String,
    },
}

#[derive(Serialize)]
struct LogOutput<'a> {
    page: Page,
    has_more: bool,
    commits: &'a [Commit],
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_repos(repos: &[BareRepo]) {
    if repos.is_empty() {
        println!("No repositories found");
        return;
    }
    for repo in repos {
        println!("{:<32} {}", repo.name, repo.path.display());
    }
}

fn print_log(commits: &[Commit], page: Page) {
    for commit in commits {
        println!(
            "{}  {:<20}  {:>16}  {}",
            &commit.hash[..7],
            commit.author.name,
            commit.relative_time(),
            commit.summary()
        );
    }
    if commits.is_empty() {
        println!("No commits on page {}", page.number);
    } else if !page.is_last(commits.len()) {
        println!();
        println!("  More: --page {}", page.number + 1);
    }
}

fn print_commit(commit: &Commit) {
    println!("commit    {}", commit.hash);
    println!("tree      {}", commit.tree_id);
    for parent in &commit.parents {
        println!("parent    {}", parent);
    }
    println!("author    {} <{}>", commit.author.name, commit.author.email);
    println!("committer {} <{}>", commit.committer.name, commit.committer.email);
    match commit.time() {
        Some(time) => println!("date      {} ({})", time.to_rfc2822(), commit.relative_time()),
        None => println!("date      {}", commit.timestamp),
    }
    println!();
    for line in commit.message.lines() {
        println!("    {}", line);
    }
}

fn print_refs(references: &[Reference]) {
    for reference in references {
        let kind = if reference.is_branch() {
            "branch"
        } else if reference.is_tag() {
            "tag"
        } else {
            "other"
        };
        println!("{}  {:<6}  {}", &reference.hash[..7], kind, reference.shorthand);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let json = cli.json;
    let repo_path = |name: &str| lipasto::resolve_repo_path(&cli.root, name);

    match &cli.command {
        Commands::Repos { max } => {
            let repos = lipasto::list_bare_repos(&cli.root, *max)?;
            if json {
                print_json(&repos)?;
            } else {
                print_repos(&repos);
            }
        }
        Commands::Log {
            repo,
            start_ref,
            page,
            per_page,
        } => {
            let page = Page::new(*page, *per_page);
            let path = repo_path(repo.as_str())?;
            let commits = lipasto::get_commits(&path, start_ref, page.size, page.skip())?;
            if json {
                print_json(&LogOutput {
                    page,
                    has_more: !page.is_last(commits.len()),
                    commits: &commits,
                })?;
            } else {
                print_log(&commits, page);
            }
        }
        Commands::Show { repo, revision } => {
            let path = repo_path(repo.as_str())?;
            let commit = lipasto::get_commit(&path, revision)?;
            if json {
                print_json(&commit)?;
            } else {
                print_commit(&commit);
            }
        }
        Commands::Refs { repo } => {
            let path = repo_path(repo.as_str())?;
            let references = lipasto::get_references(&path)?;
            if json {
                print_json(&references)?;
            } else {
                print_refs(&references);
            }
        }
        Commands::Owner { repo } => {
            let path = repo_path(repo.as_str())?;
            let owner = lipasto::get_repo_owner(&path)?;
            if json {
                print_json(&serde_json::json!({ "owner": owner }))?;
            } else {
                println!("{}", owner);
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = EngineOptions {
        mwindow_file_limit: cli.mwindow_file_limit,
    };
    engine::init(&options)?;

    let result = run(&cli);
    engine::shutdown();

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        let code = match e.downcast_ref::<AppError>() {
            Some(err) if err.is_not_found() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }

    Ok(())
}
