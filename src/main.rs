//! Skinmash - Command-line tool for combining Minecraft skins

use std::process::ExitCode;

use skinmash::cli;

fn main() -> ExitCode {
    cli::run()
}
