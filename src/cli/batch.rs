//! Batch mode: run a command file and write the result once

use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::SkinmashError;
use crate::output::save_png;
use crate::session::compose_file;
use crate::source::SkinFetcher;

async fn compose_and_save<F: SkinFetcher>(
    commands: &Path,
    output: &Path,
    fetcher: F,
) -> Result<(), SkinmashError> {
    let canvas = compose_file(commands, fetcher).await?;
    save_png(canvas.image(), output)?;
    Ok(())
}

/// Run every command in `commands`; write `output` only if all succeed.
pub async fn run_batch<F: SkinFetcher>(commands: &Path, output: &Path, fetcher: F) -> ExitCode {
    match compose_and_save(commands, output, fetcher).await {
        Ok(()) => {
            info!(path = %output.display(), "saved skin");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
