//! Command-line interface module.

mod args;
pub mod init;
pub mod preview;
pub mod publish;

pub use args::{CallerArgs, Cli, Commands, PublishArgs};
