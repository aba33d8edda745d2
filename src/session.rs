//! Compositing session: one skin cache and one canvas per run

use std::path::Path;

use tracing::debug;

use crate::canvas::Canvas;
use crate::command::interpret;
use crate::error::SkinmashError;
use crate::region::Region;
use crate::source::{SkinCache, SkinFetcher};

/// Owns the resolved-skin cache and the canvas commands are applied to.
#[derive(Debug)]
pub struct Session<F> {
    cache: SkinCache<F>,
    canvas: Canvas,
}

impl<F: SkinFetcher> Session<F> {
    pub fn new(fetcher: F) -> Self {
        Self { cache: SkinCache::new(fetcher), canvas: Canvas::new() }
    }

    /// Interpret one command line and apply it to the canvas.
    ///
    /// On error the canvas is left untouched.
    pub async fn apply_line(&mut self, line: &str) -> Result<&'static Region, SkinmashError> {
        let command = interpret(line, &mut self.cache).await?;
        self.canvas.apply(&command);
        debug!(
            region = command.region.name,
            fallback = command.uses_fallback(),
            "applied command"
        );
        Ok(command.region)
    }

    /// Apply every non-blank line of `script` in order, stopping at the
    /// first error. Returns the number of commands applied.
    pub async fn run_script(&mut self, script: &str) -> Result<usize, SkinmashError> {
        let mut applied = 0;
        for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
            self.apply_line(line).await?;
            applied += 1;
        }
        Ok(applied)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cache(&self) -> &SkinCache<F> {
        &self.cache
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Run a whole command file and return the finished canvas.
///
/// Any error aborts the run; the partially built canvas is discarded.
pub async fn compose_file<F: SkinFetcher>(path: &Path, fetcher: F) -> Result<Canvas, SkinmashError> {
    let script = std::fs::read_to_string(path).map_err(|source| SkinmashError::ReadCommands {
        path: path.display().to_string(),
        source,
    })?;

    let mut session = Session::new(fetcher);
    let applied = session.run_script(&script).await?;
    debug!(applied, path = %path.display(), "command file done");
    Ok(session.into_canvas())
}
