//! Command line interpretation
//!
//! A command is `<region> <skin>`: copy `region` out of `skin` into the same
//! region of the output canvas. Tokens after the second are ignored.

use std::rc::Rc;

use crate::error::SkinmashError;
use crate::region::{self, Rect, Region};
use crate::skin::SkinImage;
use crate::source::{SkinCache, SkinFetcher};

/// The two meaningful tokens of a command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedLine<'a> {
    pub region: &'static Region,
    pub reference: &'a str,
}

/// Split a line into region and skin reference and look up the region.
pub fn parse_line(line: &str) -> Result<ParsedLine<'_>, SkinmashError> {
    let mut tokens = line.split_whitespace();
    let (Some(name), Some(reference)) = (tokens.next(), tokens.next()) else {
        return Err(SkinmashError::MalformedLine { line: line.to_string() });
    };

    Ok(ParsedLine { region: region::lookup(name)?, reference })
}

/// A fully resolved copy operation.
#[derive(Debug, Clone)]
pub struct Command {
    pub region: &'static Region,
    pub skin: Rc<SkinImage>,
    /// Rectangle read from `skin`
    pub source: Rect,
    /// Rectangle written in the canvas
    pub dest: Rect,
}

impl Command {
    /// True when a legacy fallback region is read instead of `region`.
    pub fn uses_fallback(&self) -> bool {
        self.source != self.dest
    }
}

/// Parse `line`, resolve its skin through `cache` and pick the rectangles.
///
/// # Arguments
///
/// * `line` - One command line, `<region> <skin>`
/// * `cache` - Skin cache shared by every line of the session
///
/// # Returns
///
/// * `Ok(Command)` ready to be applied to a canvas
/// * `Err(SkinmashError)` with the first failure: parsing, region lookup,
///   skin resolution, or a region the skin's layout cannot supply
///
/// # Example
/// ```ignore
/// let command = interpret("larm steve.png", &mut cache).await?;
/// canvas.apply(&command);
/// ```
pub async fn interpret<F: SkinFetcher>(
    line: &str,
    cache: &mut SkinCache<F>,
) -> Result<Command, SkinmashError> {
    let parsed = parse_line(line)?;
    let skin = cache.resolve(parsed.reference).await?;
    let rects = region::resolve_rects(parsed.region, skin.layout()).map_err(|_| {
        SkinmashError::UnsupportedRegionForLayout {
            region: parsed.region.name.to_string(),
            reference: parsed.reference.to_string(),
        }
    })?;

    Ok(Command { region: parsed.region, skin, source: rects.source, dest: rects.dest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::FakeFetcher;
    use image::RgbaImage;

    #[test]
    fn test_parse_line() {
        let parsed = parse_line("head steve.png").unwrap();
        assert_eq!(parsed.region.name, "head");
        assert_eq!(parsed.reference, "steve.png");
    }

    #[test]
    fn test_parse_line_ignores_extra_tokens() {
        let parsed = parse_line("  Body\tNotch   trailing junk ").unwrap();
        assert_eq!(parsed.region.name, "body");
        assert_eq!(parsed.reference, "Notch");
    }

    #[test]
    fn test_parse_line_too_few_tokens() {
        for line in ["", "   ", "head"] {
            assert!(
                matches!(parse_line(line), Err(SkinmashError::MalformedLine { .. })),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_line_unknown_region() {
        assert!(matches!(
            parse_line("bogus player1.png"),
            Err(SkinmashError::UnknownRegion { .. })
        ));
    }

    fn cache() -> SkinCache<FakeFetcher> {
        SkinCache::new(
            FakeFetcher::default()
                .with("full.png", &RgbaImage::new(64, 64))
                .with("legacy.png", &RgbaImage::new(64, 32)),
        )
    }

    #[tokio::test]
    async fn test_interpret_full_layout() {
        let mut cache = cache();
        let command = interpret("larm full.png", &mut cache).await.unwrap();
        assert_eq!(command.source, Rect::new(48, 32, 16, 16));
        assert_eq!(command.dest, command.source);
        assert!(!command.uses_fallback());
    }

    #[tokio::test]
    async fn test_interpret_legacy_fallback() {
        let mut cache = cache();
        let command = interpret("larm_front legacy.png", &mut cache).await.unwrap();
        assert_eq!(command.source, Rect::new(20, 44, 12, 4));
        assert_eq!(command.dest, Rect::new(52, 36, 12, 4));
        assert!(command.uses_fallback());
    }

    #[tokio::test]
    async fn test_interpret_legacy_without_fallback() {
        let mut cache = cache();
        match interpret("JACKET legacy.png", &mut cache).await {
            Err(SkinmashError::UnsupportedRegionForLayout { region, reference }) => {
                assert_eq!(region, "jacket");
                assert_eq!(reference, "legacy.png");
            }
            other => panic!("expected UnsupportedRegionForLayout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_interpret_unknown_region_skips_fetch() {
        let mut cache = cache();
        let err = interpret("tail full.png", &mut cache).await.unwrap_err();
        assert!(matches!(err, SkinmashError::UnknownRegion { .. }));
        assert_eq!(cache.fetcher().fetches.get(), 0);
    }
}
