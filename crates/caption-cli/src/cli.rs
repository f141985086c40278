use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Renders overlay captions from game snapshots.
#[derive(Parser)]
#[command(name = "caption", version, about = "Render overlay caption templates")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a caption for one snapshot.
    Render(RenderArgs),
    /// List the built-in tag names.
    Tags,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Snapshot file (.yaml, .yml or .json).
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Calendar file. Defaults to the built-in calendar.
    #[arg(short, long)]
    pub calendar: Option<PathBuf>,

    /// Overlay settings file holding the template and custom text.
    #[arg(short, long)]
    pub overlay: Option<PathBuf>,

    /// Template text; replaces the overlay file's template.
    #[arg(short, long)]
    pub template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render() {
        let cli = Cli::parse_from([
            "caption", "-vv", "render", "--snapshot", "s.json", "--template", "<UT>",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.snapshot, PathBuf::from("s.json"));
                assert_eq!(args.template.as_deref(), Some("<UT>"));
                assert!(args.calendar.is_none());
            }
            Command::Tags => panic!("expected render"),
        }
    }

    #[test]
    fn snapshot_is_required() {
        assert!(Cli::try_parse_from(["caption", "render"]).is_err());
    }
}
