//! Region table for the standard skin layout
//!
//! Maps a region name (e.g. `head`, `larm_front`) to its pixel rectangle in a
//! 64x64 skin, whether the region only exists in the full layout, and which
//! region stands in for it when the source skin uses the legacy 64x32 layout.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::SkinmashError;
use crate::skin::Layout;

/// A pixel rectangle in `(row, col, height, width)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub row: u32,
    pub col: u32,
    pub height: u32,
    pub width: u32,
}

impl Rect {
    pub const fn new(row: u32, col: u32, height: u32, width: u32) -> Self {
        Self { row, col, height, width }
    }

    /// One past the last row covered by this rectangle.
    pub fn bottom(&self) -> u32 {
        self.row + self.height
    }

    /// One past the last column covered by this rectangle.
    pub fn right(&self) -> u32 {
        self.col + self.width
    }

    /// Check if the rectangle lies entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// A named region of the skin layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub rect: Rect,
    /// True if the region only exists in the full 64x64 layout
    pub full_layout_only: bool,
    /// Region read instead when the source skin is legacy layout
    pub legacy_fallback: Option<&'static str>,
}

/// Region present in both layouts.
const fn shared(name: &'static str, row: u32, col: u32, height: u32, width: u32) -> Region {
    Region {
        name,
        rect: Rect::new(row, col, height, width),
        full_layout_only: false,
        legacy_fallback: None,
    }
}

/// Region present only in the full layout, with an optional legacy stand-in.
const fn full_only(
    name: &'static str,
    row: u32,
    col: u32,
    height: u32,
    width: u32,
    legacy_fallback: Option<&'static str>,
) -> Region {
    Region {
        name,
        rect: Rect::new(row, col, height, width),
        full_layout_only: true,
        legacy_fallback,
    }
}

/// Every region known to skinmash.
///
/// The `2` suffix marks the second (overlay) layer of a limb, `jacket` is the
/// overlay of `body` and `hat` the overlay of `head`. Left limbs and all limb
/// overlays were introduced with the 64x64 layout.
pub static REGIONS: &[Region] = &[
    // Whole skin
    full_only("all", 0, 0, 64, 64, Some("all32")),
    shared("all32", 0, 0, 32, 64),
    // Body parts
    shared("head", 0, 0, 16, 32),
    shared("hat", 0, 32, 16, 32),
    shared("rleg", 16, 0, 16, 16),
    shared("body", 16, 16, 16, 24),
    shared("rarm", 16, 40, 16, 16),
    full_only("rleg2", 32, 0, 16, 16, None),
    full_only("jacket", 32, 16, 16, 24, None),
    full_only("rarm2", 32, 40, 16, 16, None),
    full_only("lleg2", 48, 0, 16, 16, None),
    full_only("lleg", 48, 16, 16, 16, Some("rleg")),
    full_only("larm", 48, 32, 16, 16, Some("rarm")),
    full_only("larm2", 48, 48, 16, 16, None),
    // Head and hat faces
    shared("head_top", 0, 8, 8, 8),
    shared("head_bottom", 0, 16, 8, 8),
    shared("head_right", 8, 0, 8, 8),
    shared("head_front", 8, 8, 8, 8),
    shared("head_left", 8, 16, 8, 8),
    shared("head_back", 8, 24, 8, 8),
    shared("hat_top", 0, 40, 8, 8),
    shared("hat_bottom", 0, 48, 8, 8),
    shared("hat_right", 8, 32, 8, 8),
    shared("hat_front", 8, 40, 8, 8),
    shared("hat_left", 8, 48, 8, 8),
    shared("hat_back", 8, 56, 8, 8),
    // First layer: right leg, body, right arm
    shared("rleg_top", 16, 4, 4, 4),
    shared("rleg_bottom", 16, 8, 4, 4),
    shared("body_top", 16, 20, 4, 8),
    shared("body_bottom", 16, 28, 4, 8),
    shared("rarm_top", 16, 44, 4, 4),
    shared("rarm_bottom", 16, 48, 4, 4),
    shared("rleg_right", 20, 0, 12, 4),
    shared("rleg_front", 20, 4, 12, 4),
    shared("rleg_left", 20, 8, 12, 4),
    shared("rleg_back", 20, 12, 12, 4),
    shared("body_right", 20, 16, 12, 4),
    shared("body_front", 20, 20, 12, 8),
    shared("body_back", 20, 28, 12, 8),
    shared("body_left", 20, 36, 12, 4),
    shared("rarm_right", 20, 40, 12, 4),
    shared("rarm_front", 20, 44, 12, 4),
    shared("rarm_left", 20, 48, 12, 4),
    shared("rarm_back", 20, 52, 12, 4),
    // Second layer: right leg, jacket, right arm
    full_only("rleg2_top", 32, 4, 4, 4, None),
    full_only("rleg2_bottom", 32, 8, 4, 4, None),
    full_only("jacket_top", 32, 20, 4, 8, None),
    full_only("jacket_bottom", 32, 28, 4, 8, None),
    full_only("rarm2_top", 32, 44, 4, 4, None),
    full_only("rarm2_bottom", 32, 48, 4, 4, None),
    full_only("rleg2_right", 36, 0, 12, 4, None),
    full_only("rleg2_front", 36, 4, 12, 4, None),
    full_only("rleg2_left", 36, 8, 12, 4, None),
    full_only("rleg2_back", 36, 12, 12, 4, None),
    full_only("jacket_right", 36, 16, 12, 4, None),
    full_only("jacket_front", 36, 20, 12, 8, None),
    full_only("jacket_back", 36, 28, 12, 8, None),
    full_only("jacket_left", 36, 36, 12, 4, None),
    full_only("rarm2_right", 36, 40, 12, 4, None),
    full_only("rarm2_front", 36, 44, 12, 4, None),
    full_only("rarm2_left", 36, 48, 12, 4, None),
    full_only("rarm2_back", 36, 52, 12, 4, None),
    // Left limbs, both layers
    full_only("lleg2_top", 48, 4, 4, 4, None),
    full_only("lleg2_bottom", 48, 8, 4, 4, None),
    full_only("lleg_top", 48, 20, 4, 4, Some("rleg_top")),
    full_only("lleg_bottom", 48, 24, 4, 4, Some("rleg_bottom")),
    full_only("larm_top", 48, 36, 4, 4, Some("rarm_top")),
    full_only("larm_bottom", 48, 40, 4, 4, Some("rarm_bottom")),
    full_only("larm2_top", 48, 52, 4, 4, None),
    full_only("larm2_bottom", 48, 56, 4, 4, None),
    full_only("lleg2_right", 52, 0, 12, 4, None),
    full_only("lleg2_front", 52, 4, 12, 4, None),
    full_only("lleg2_left", 52, 8, 12, 4, None),
    full_only("lleg2_back", 52, 12, 12, 4, None),
    full_only("lleg_right", 52, 16, 12, 4, Some("rleg_right")),
    full_only("lleg_front", 52, 20, 12, 4, Some("rleg_front")),
    full_only("lleg_left", 52, 24, 12, 4, Some("rleg_left")),
    full_only("lleg_back", 52, 28, 12, 4, Some("rleg_back")),
    full_only("larm_right", 52, 32, 12, 4, Some("rarm_right")),
    full_only("larm_front", 52, 36, 12, 4, Some("rarm_front")),
    full_only("larm_left", 52, 40, 12, 4, Some("rarm_left")),
    full_only("larm_back", 52, 44, 12, 4, Some("rarm_back")),
    full_only("larm2_right", 52, 48, 12, 4, None),
    full_only("larm2_front", 52, 52, 12, 4, None),
    full_only("larm2_left", 52, 56, 12, 4, None),
    full_only("larm2_back", 52, 60, 12, 4, None),
];

fn index() -> &'static HashMap<&'static str, &'static Region> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Region>> = OnceLock::new();
    INDEX.get_or_init(|| REGIONS.iter().map(|region| (region.name, region)).collect())
}

/// Canonical form of a region name: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Look up a region by name, ignoring case.
pub fn lookup(name: &str) -> Result<&'static Region, SkinmashError> {
    let key = normalize_name(name);
    index()
        .get(key.as_str())
        .copied()
        .ok_or(SkinmashError::UnknownRegion { name: key })
}

/// Source and destination rectangles for copying `region` out of a skin
/// with the given layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectPair {
    /// Where pixels are read from in the source skin
    pub source: Rect,
    /// Where pixels are written to in the output canvas
    pub dest: Rect,
}

/// Failure to map a region onto a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMismatch {
    /// The region only exists in the full layout and has no legacy stand-in
    NoFallback,
}

/// Resolve the rectangles for copying `region` from a skin of `layout`.
///
/// Legacy skins read a full-layout-only region from its fallback. The
/// fallback is followed exactly once, its own flags are not re-examined.
///
/// # Arguments
///
/// * `region` - The region named on the command line
/// * `layout` - Layout of the skin the pixels are read from
///
/// # Returns
///
/// * `Ok(RectPair)` with the source rectangle and the canvas rectangle
/// * `Err(LayoutMismatch::NoFallback)` for a full-only region with no legacy stand-in
///
/// # Example
/// ```
/// use skinmash::region::{lookup, resolve_rects};
/// use skinmash::skin::Layout;
///
/// let larm = lookup("larm").unwrap();
/// let rects = resolve_rects(larm, Layout::Legacy).unwrap();
/// assert_eq!(rects.source, lookup("rarm").unwrap().rect);
/// assert_eq!(rects.dest, larm.rect);
/// ```
pub fn resolve_rects(region: &Region, layout: Layout) -> Result<RectPair, LayoutMismatch> {
    let dest = region.rect;
    if layout == Layout::Full || !region.full_layout_only {
        return Ok(RectPair { source: dest, dest });
    }

    let fallback = region
        .legacy_fallback
        .and_then(|name| index().get(name).copied())
        .ok_or(LayoutMismatch::NoFallback)?;
    Ok(RectPair { source: fallback.rect, dest })
}
