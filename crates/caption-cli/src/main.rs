mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use caption::{default_registry, load_file, CalendarConfig, OverlayConfig, Renderer, Snapshot};
use clap::Parser;

use crate::cli::{Cli, Command, RenderArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render(args),
        Command::Tags => {
            for name in default_registry().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let snapshot: Snapshot = load_file(&args.snapshot).context("failed to load snapshot")?;

    let calendar = match &args.calendar {
        Some(path) => load_file::<CalendarConfig>(path).context("failed to load calendar")?,
        None => CalendarConfig::default(),
    };

    let mut overlay = match &args.overlay {
        Some(path) => OverlayConfig::from_file(path).context("failed to load overlay settings")?,
        None => OverlayConfig::default(),
    };
    if let Some(template) = args.template {
        overlay.template = template;
    }

    tracing::info!(ut = snapshot.ut, template = %overlay.template, "rendering caption");
    let renderer = Renderer::new(calendar, overlay);
    println!("{}", renderer.render(&snapshot));
    Ok(())
}
