//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Lands publish pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: lands.toml)
    #[arg(short = 'C', long, default_value = "lands.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a workspace with a starter project and theme
    #[command(visible_alias = "i")]
    Init {
        /// Workspace directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render projects and push them to the edge store
    #[command(visible_alias = "p")]
    Publish {
        #[command(flatten)]
        args: PublishArgs,
    },

    /// Take a published project offline
    #[command(visible_alias = "u")]
    Unpublish {
        /// Project slug
        slug: String,

        #[command(flatten)]
        caller: CallerArgs,
    },

    /// Serve a published blob locally
    #[command(visible_alias = "s")]
    Preview {
        /// Slug (or custom domain) of the blob to serve
        slug: String,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Publish command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PublishArgs {
    /// Project slugs to publish
    #[arg(value_name = "SLUG", required_unless_present = "all")]
    pub slugs: Vec<String>,

    /// Publish every project in the store
    #[arg(short, long)]
    pub all: bool,

    /// Plaintext password for password-gated projects
    #[arg(long)]
    pub password: Option<String>,

    /// Minify the published HTML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    #[command(flatten)]
    pub caller: CallerArgs,
}

/// Caller identity, shared by publish and unpublish.
#[derive(clap::Args, Debug, Clone)]
pub struct CallerArgs {
    /// Act as this user id
    #[arg(long, default_value = "local")]
    pub user: String,

    /// Skip the ownership check
    #[arg(long)]
    pub admin: bool,
}

impl CallerArgs {
    pub fn caller(&self) -> crate::publish::Caller {
        if self.admin {
            crate::publish::Caller::admin(self.user.as_str())
        } else {
            crate::publish::Caller::user(self.user.as_str())
        }
    }
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_publish(&self) -> bool {
        matches!(self.command, Commands::Publish { .. })
    }
    pub const fn is_preview(&self) -> bool {
        matches!(self.command, Commands::Preview { .. })
    }
}
