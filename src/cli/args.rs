//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--no-interactive`: Disable prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Quire - sync documents between a remote content store and a local Markdown tree
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Interactive unless `--no-interactive` or `--quiet` was set or
    /// stdin is not a TTY.
    pub fn interactive(&self) -> bool {
        if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull documents from the store into a local directory
    #[command(
        name = "pull",
        long_about = "Pull documents from the store into a local directory.\n\n\
            Fetches every document in the workspace (optionally narrowed by a \
            search query) and writes each one as a Markdown file whose name \
            encodes the document's category, tags, id, revision, and WIP \
            status. Category paths become nested directories.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Pull the whole workspace into ./notes
    quire pull --dir notes

    # Pull only documents matching a search query
    quire pull --query 'category:ops' --dir notes

FILE NAMES:
    notes/ops/runbooks/oncall rotation [id:42] [rev:7].md
          ^category            ^name    ^id    ^revision"
    )]
    Pull {
        /// Search query understood by the store
        #[arg(long)]
        query: Option<String>,

        /// Directory for pulled files (default: config default_dir, else .)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Workspace name (overrides QUIRE_WORKSPACE and config)
        #[arg(short, long)]
        workspace: Option<String>,

        /// API token (overrides QUIRE_TOKEN and the stored token)
        #[arg(short = 'a', long)]
        token: Option<String>,

        /// API base URL (overrides config)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Push local files to the store
    #[command(
        name = "push",
        long_about = "Push local files to the store.\n\n\
            Each file name is decoded back into document metadata. A file \
            without an [id:N] mark creates a new document; one with an id \
            updates the existing document. After the push, each file is \
            renamed to the canonical name returned by the store, which is \
            how a new file picks up its assigned id.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Push one file (path relative to --dir)
    quire push --dir notes 'ops/oncall rotation [id:42] [rev:7].md'

    # Create a new document from a fresh file
    echo '# Postmortem' > 'notes/ops/postmortem [WIP].md'
    quire push --dir notes 'ops/postmortem [WIP].md'

NOTE:
    A failing file is reported and skipped; remaining files still push."
    )]
    Push {
        /// Files to push, relative to --dir
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Directory the file paths are relative to (default: config default_dir, else .)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Workspace name (overrides QUIRE_WORKSPACE and config)
        #[arg(short, long)]
        workspace: Option<String>,

        /// API token (overrides QUIRE_TOKEN and the stored token)
        #[arg(short = 'a', long)]
        token: Option<String>,

        /// API base URL (overrides config)
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Store credentials for the remote store
    #[command(
        name = "auth",
        long_about = "Store credentials for the remote store.\n\n\
            The token is kept in the secret store and never printed. With no \
            flags, prompts for the token interactively with masked input.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Interactive (prompts for token)
    quire auth

    # Non-interactive
    quire auth --token tok_xxxx

    # Check status / remove stored token
    quire auth --status
    quire auth --logout"
    )]
    Auth {
        /// API token (will prompt if omitted)
        #[arg(long)]
        token: Option<String>,

        /// Show authentication status instead of storing
        #[arg(long)]
        status: bool,

        /// Remove the stored token
        #[arg(long)]
        logout: bool,
    },

    /// Get and set configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for quire \
            commands.",
        after_help = "\
SETUP:
    # Bash
    quire completion bash >> ~/.bashrc

    # Zsh
    quire completion zsh >> ~/.zshrc

    # Fish
    quire completion fish > ~/.config/fish/completions/quire.fish

    # PowerShell
    quire completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (workspace, api_base, default_dir)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key (workspace, api_base, default_dir)
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
