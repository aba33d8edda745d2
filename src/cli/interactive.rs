//! Interactive mode: read commands from a prompt until exit or Ctrl+C

use std::future::Future;
use std::io::{self, Write};
use std::path::Path;
use std::pin::Pin;
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::output::save_png;
use crate::session::Session;
use crate::source::SkinFetcher;

/// Why an interactive session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` or `quit` was entered
    Exit,
    /// Input was closed
    EndOfInput,
    /// The interrupt future fired (Ctrl+C)
    Interrupted,
}

/// Prompt for commands on `input` and apply them to `session`.
///
/// Per-line errors are written to `out` and the loop continues. `exit` and
/// `quit` must match the whole line exactly. `interrupt` is watched both while
/// waiting for input and while a command runs, so a stalled skin download can
/// still be cut short. If it resolves with an error it is ignored from then on.
pub async fn run_prompt<F, R, W, I>(
    session: &mut Session<F>,
    input: R,
    out: &mut W,
    prompt: &str,
    interrupt: I,
) -> io::Result<SessionEnd>
where
    F: SkinFetcher,
    R: AsyncBufRead + Unpin,
    W: Write,
    I: Future<Output = io::Result<()>>,
{
    let mut lines = input.lines();
    tokio::pin!(interrupt);
    let mut watching = true;

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = until_interrupted(lines.next_line(), &mut interrupt, &mut watching).await
        else {
            writeln!(out)?;
            return Ok(SessionEnd::Interrupted);
        };
        let Some(line) = line? else {
            writeln!(out)?;
            return Ok(SessionEnd::EndOfInput);
        };
        if line == "exit" || line == "quit" {
            return Ok(SessionEnd::Exit);
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(applied) =
            until_interrupted(session.apply_line(&line), &mut interrupt, &mut watching).await
        else {
            writeln!(out)?;
            return Ok(SessionEnd::Interrupted);
        };
        if let Err(e) = applied {
            warn!(error = ?e, "command failed");
            writeln!(out, "ERROR: {}", e)?;
        }
    }
}

/// Drive `work` to completion unless `interrupt` fires first (`None`).
async fn until_interrupted<T, I>(
    work: impl Future<Output = T>,
    interrupt: &mut Pin<&mut I>,
    watching: &mut bool,
) -> Option<T>
where
    I: Future<Output = io::Result<()>>,
{
    tokio::pin!(work);
    loop {
        tokio::select! {
            done = &mut work => return Some(done),
            signal = interrupt.as_mut(), if *watching => match signal {
                Ok(()) => return None,
                Err(e) => {
                    warn!(error = %e, "cannot listen for Ctrl+C");
                    *watching = false;
                }
            },
        }
    }
}

/// Run the prompt on stdin/stdout, then save the canvas however it ended.
pub async fn run_interactive<F: SkinFetcher>(output: &Path, prompt: &str, fetcher: F) -> ExitCode {
    let mut session = Session::new(fetcher);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    let ended = run_prompt(&mut session, stdin, &mut stdout, prompt, tokio::signal::ctrl_c()).await;
    let code = match ended {
        Ok(end) => {
            debug!(?end, "session ended");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            EXIT_ERROR
        }
    };

    if let Err(e) = save_png(session.canvas().image(), output) {
        eprintln!("ERROR: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    info!(path = %output.display(), "saved skin");
    ExitCode::from(code)
}
