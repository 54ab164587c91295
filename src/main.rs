//! Lands - a publish pipeline for visually built landing pages.

#![allow(dead_code)]

mod cli;
mod config;
mod error;
mod generator;
mod logger;
mod publish;
mod section;
mod style;
mod tailwind;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init runs before any config exists
    let config = AppConfig::load(&cli.config, cli.is_init())?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_workspace(name.as_deref()),
        Commands::Publish { args } => cli::publish::run_publish(args, &config),
        Commands::Unpublish { slug, caller } => cli::publish::run_unpublish(slug, caller, &config),
        Commands::Preview {
            slug,
            interface,
            port,
        } => cli::preview::run_preview(slug, *interface, *port, &config),
    }
}
