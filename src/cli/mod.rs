//! Command-line interface implementation
//!
//! With a command file the tool runs in batch mode; without one it starts an
//! interactive prompt.

mod batch;
mod interactive;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{self, CliOverrides};
use crate::source::{DefaultFetcher, MojangClient};

pub use interactive::{run_prompt, SessionEnd};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Skinmash - combine parts of several Minecraft skins into one
#[derive(Parser)]
#[command(name = "skinmash")]
#[command(about = "Skinmash - combine parts of several Minecraft skins into one 64x64 skin")]
#[command(version)]
pub struct Cli {
    /// Command file with one `<region> <skin>` per line.
    /// If omitted, commands are read from an interactive prompt.
    pub config: Option<PathBuf>,

    /// Output image file (default: output.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settings file (default: nearest skinmash.toml, if any)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

fn init_logging(verbose: bool, no_color: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let mut settings = match config::load_config(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    config::merge_cli_overrides(&mut settings, &CliOverrides { output: cli.output });

    let fetcher = match MojangClient::new(&settings.api) {
        Ok(client) => DefaultFetcher::new(client),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("ERROR: cannot start runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let output = settings.output.path;
    let code = match cli.config {
        Some(commands) => runtime.block_on(batch::run_batch(&commands, &output, fetcher)),
        None => runtime.block_on(interactive::run_interactive(
            &output,
            &settings.interactive.prompt,
            fetcher,
        )),
    };

    // A stdin read left pending by Ctrl+C cannot be cancelled
    runtime.shutdown_background();
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["skinmash"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_config_and_output() {
        let cli = Cli::try_parse_from(["skinmash", "mash.txt", "-o", "out.png"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("mash.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));

        let cli = Cli::try_parse_from(["skinmash", "--output", "x.png", "mash.txt"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("x.png")));
        assert_eq!(cli.config, Some(PathBuf::from("mash.txt")));
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        assert!(Cli::try_parse_from(["skinmash", "a.txt", "b.txt"]).is_err());
    }
}
