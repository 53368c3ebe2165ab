//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Story presets - Inspect how presets resolve for a project
#[derive(Parser, Debug)]
#[command(name = "story")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    /// Directory holding the global presets.toml
    #[arg(long, global = true, env = "STORY_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Framework whose docs preset is installed ("none" to skip)
    #[arg(long, global = true, default_value = "vue3")]
    pub framework: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a preset and print its value as JSON
    ///
    /// Examples:
    ///   story resolve addons --default '[]'
    ///   story resolve parameters
    Resolve {
        /// Name of the preset
        name: String,

        /// JSON value the first handler receives (defaults to null)
        #[arg(long)]
        default: Option<String>,
    },

    /// List every preset with its handlers in application order
    List,

    /// Print the options the MDX plugin would pass to the compiler
    MdxOptions {
        /// Module id, e.g. src/Button.stories.mdx
        id: String,
    },
}
