//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::adapters::live::issues::GITHUB_API_URL;
use crate::ports::Repo;

/// Top-level CLI parser for `ghicli`.
#[derive(Debug, Parser)]
#[command(name = "ghicli", version, about = "Search and create GitHub issues")]
pub struct Cli {
    /// Repository to work on, as owner/name.
    #[arg(long, global = true, env = "GHICLI_REPO", default_value = "golang/go")]
    pub repo: Repo,

    /// Path to a file containing a GitHub personal access token.
    #[arg(long = "ghtoken", global = true, env = "GHICLI_TOKEN_FILE", value_name = "PATH")]
    pub token_file: Option<PathBuf>,

    /// API root to send requests to.
    #[arg(long, global = true, env = "GHICLI_API_URL", default_value = GITHUB_API_URL)]
    pub url: String,

    /// Record every port interaction into cassettes under this directory.
    #[arg(long, global = true, env = "GHICLI_RECORD", value_name = "DIR", hide = true)]
    pub record: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search issues in the repository.
    List {
        /// Free-text search terms and qualifiers (e.g. `is:open label:bug`).
        /// Negated qualifiers such as `-label:wontfix` go after `--`.
        terms: Vec<String>,
    },
    /// Write a new issue in an editor and open it.
    Create {
        /// Editor to run; defaults to $VISUAL, then $EDITOR, then a prompt.
        #[arg(long)]
        editor: Option<String>,
    },
    /// Show a single issue.
    Fetch {
        /// Issue number.
        number: u64,
    },
    /// Change an issue's title and body in an editor.
    Edit {
        /// Issue number.
        number: u64,
        /// Editor to run; defaults to $VISUAL, then $EDITOR, then a prompt.
        #[arg(long)]
        editor: Option<String>,
    },
    /// Close an issue.
    Close {
        /// Issue number.
        number: u64,
    },
    /// Reopen a closed issue.
    Reopen {
        /// Issue number.
        number: u64,
    },
    /// Delete an issue (not offered by the GitHub API).
    Delete {
        /// Issue number.
        number: u64,
    },
}
