//! Studymate CLI Application
//!
//! Command-line front end for the studymate stream core: replay model
//! responses through the streaming pipeline and track progress on started
//! studyplans.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Studymate started");

    match command {
        Parse(args) => cli.parse(args).await,
        Progress(args) => cli.progress(args),
        Complete(args) => cli.complete(args),
        Start(args) => cli.start(args),
        Prompt(args) => cli.prompt(args),
    }
}
