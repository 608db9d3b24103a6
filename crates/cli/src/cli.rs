use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    create_command, discover_command, init_command, run_command, tree_command, watch_command,
};
use crate::utils::resolve_root;

#[derive(Parser, Debug)]
#[command(name = "art-explorer")]
#[command(version, about = "Browse and run the webpack entries of an art project", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug        Enable debug logging\n    PROJECT_ROOT=<dir>    Default workspace root\n    ART_EXPLORER_TOOL     Tool invoked for serve/build/create (default: art)\n    ART_EXPLORER_SHELL    Shell used to run commands (default: sh)")]
pub struct Cli {
    /// Workspace root (defaults to $PROJECT_ROOT, then the current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the module tree
    #[command(visible_alias = "t")]
    Tree {
        /// Print nodes and their display items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run serve or build for a module
    #[command(visible_alias = "r")]
    Run {
        /// Action to run (serve or build)
        action: String,

        /// Module label as shown by `tree` (e.g. app/index.js)
        module: String,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Print the tree and re-print it whenever the config file changes
    #[command(visible_alias = "w")]
    Watch,
    /// Scaffold a project or a module
    Create {
        #[command(subcommand)]
        target: CreateTarget,

        /// Print the command without executing it
        #[arg(short, long, global = true)]
        dry_run: bool,
    },
    /// Write a starter art.config.json
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,

        /// Write art.config.toml instead of JSON
        #[arg(long)]
        toml: bool,

        /// Scaffold type recorded as projectType
        #[arg(short = 't', long = "type", default_value = "spa-react")]
        kind: String,
    },
    /// List every art project below a directory
    Discover {
        /// Directory to search (defaults to the workspace root)
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateTarget {
    /// Create a new project from a template
    Project {
        /// SPA-React, SPA-Vue, SSR-React, SSR-Vue or Miniprogram
        #[arg(short = 't', long = "type")]
        kind: String,
    },
    /// Add a module to the current project
    Module {
        /// Module name
        name: String,

        /// Template; defaults to the config's projectType
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
}

impl Cli {
    /// Execute the parsed command against the resolved workspace root
    pub fn execute(self) -> Result<()> {
        let root = resolve_root(self.root)?;

        match self.command {
            Commands::Tree { json } => tree_command(&root, json),
            Commands::Run {
                action,
                module,
                dry_run,
            } => run_command(&root, &action, &module, dry_run),
            Commands::Watch => watch_command(&root),
            Commands::Create { target, dry_run } => create_command(&root, target, dry_run),
            Commands::Init { force, toml, kind } => init_command(&root, force, toml, &kind),
            Commands::Discover { dir } => {
                discover_command(dir.as_deref().unwrap_or(root.as_path()))
            }
        }
    }
}
