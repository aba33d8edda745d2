//! Skin source resolution
//!
//! A skin reference is either a local `.png` path or a player name looked up
//! through the Mojang API. Resolved skins are memoized per reference for the
//! lifetime of a [`SkinCache`]; failures are not cached.

pub mod mojang;

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;

use crate::error::{SkinmashError, SourceError};
use crate::skin::SkinImage;

pub use mojang::MojangClient;

/// File suffix that marks a reference as a local path.
pub const FILE_SUFFIX: &str = ".png";

/// Where a skin comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinRef {
    /// Local image file
    File(PathBuf),
    /// Player name resolved through the Mojang API
    Player(String),
}

impl SkinRef {
    /// Classify a textual reference. Only a literal `.png` suffix selects a file.
    pub fn parse(reference: &str) -> Self {
        if reference.ends_with(FILE_SUFFIX) {
            SkinRef::File(PathBuf::from(reference))
        } else {
            SkinRef::Player(reference.to_string())
        }
    }
}

/// Produces raw image bytes for a skin reference.
#[allow(async_fn_in_trait)]
pub trait SkinFetcher {
    async fn fetch(&self, reference: &SkinRef) -> Result<Vec<u8>, SourceError>;
}

/// Reads local files from disk and fetches player skins over HTTP.
#[derive(Debug, Clone)]
pub struct DefaultFetcher {
    mojang: MojangClient,
}

impl DefaultFetcher {
    pub fn new(mojang: MojangClient) -> Self {
        Self { mojang }
    }
}

impl SkinFetcher for DefaultFetcher {
    async fn fetch(&self, reference: &SkinRef) -> Result<Vec<u8>, SourceError> {
        match reference {
            SkinRef::File(path) => Ok(std::fs::read(path)?),
            SkinRef::Player(name) => self.mojang.skin_bytes(name).await,
        }
    }
}

/// Memoizing resolver from reference strings to skins.
#[derive(Debug)]
pub struct SkinCache<F> {
    fetcher: F,
    skins: HashMap<String, Rc<SkinImage>>,
}

impl<F: SkinFetcher> SkinCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher, skins: HashMap::new() }
    }

    /// Return the cached skin for `reference`, fetching and decoding it on
    /// first use.
    ///
    /// Fetch and decode failures become [`SkinmashError::SourceResolution`];
    /// a decoded image with the wrong size is
    /// [`SkinmashError::InvalidSkinDimensions`]. Neither is cached.
    ///
    /// # Arguments
    ///
    /// * `reference` - A `.png` path or a player name, exactly as written
    ///
    /// # Returns
    ///
    /// The shared skin; repeated calls with the same reference return the
    /// same `Rc`.
    ///
    /// # Example
    /// ```ignore
    /// let mut cache = SkinCache::new(DefaultFetcher::new(client));
    /// let steve = cache.resolve("skins/steve.png").await?;
    /// let notch = cache.resolve("Notch").await?;
    /// ```
    pub async fn resolve(&mut self, reference: &str) -> Result<Rc<SkinImage>, SkinmashError> {
        if let Some(skin) = self.skins.get(reference) {
            debug!(reference, "skin cache hit");
            return Ok(Rc::clone(skin));
        }

        debug!(reference, "skin cache miss");
        let unresolved = |cause: SourceError| SkinmashError::SourceResolution {
            reference: reference.to_string(),
            cause,
        };
        let bytes = self.fetcher.fetch(&SkinRef::parse(reference)).await.map_err(unresolved)?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| unresolved(e.into()))?;
        let skin = Rc::new(SkinImage::from_dynamic(decoded)?);

        self.skins.insert(reference.to_string(), Rc::clone(&skin));
        Ok(skin)
    }

    /// Check if a reference has already been resolved.
    pub fn contains(&self, reference: &str) -> bool {
        self.skins.contains_key(reference)
    }

    /// Number of cached skins.
    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
