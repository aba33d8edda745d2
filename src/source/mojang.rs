//! Player skin lookup through the Mojang API
//!
//! Three requests resolve a player name to skin bytes:
//! name -> profile id, profile id -> session profile whose `textures`
//! property is base64 JSON holding the skin URL, then the skin URL itself.

use std::time::Duration;

use base64::engine::general_purpose;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct PlayerProfile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SessionProfile {
    #[serde(default)]
    properties: Vec<ProfileProperty>,
}

#[derive(Debug, Deserialize)]
struct ProfileProperty {
    value: String,
}

#[derive(Debug, Deserialize)]
struct TexturesPayload {
    textures: Textures,
}

#[derive(Debug, Deserialize)]
struct Textures {
    #[serde(rename = "SKIN")]
    skin: Option<TextureRef>,
}

#[derive(Debug, Deserialize)]
struct TextureRef {
    url: String,
}

/// HTTP client for the Mojang profile and session servers.
#[derive(Debug, Clone)]
pub struct MojangClient {
    http: reqwest::Client,
    profile_url: String,
    session_url: String,
}

impl MojangClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            profile_url: config.profile_url.clone(),
            session_url: config.session_url.clone(),
        })
    }

    /// Fetch the raw skin image bytes for a player name.
    pub async fn skin_bytes(&self, username: &str) -> Result<Vec<u8>, SourceError> {
        let profile: PlayerProfile =
            self.get_json(&format!("{}{}", self.profile_url, username)).await?;
        debug!(username, id = %profile.id, "resolved player id");

        let session: SessionProfile =
            self.get_json(&format!("{}{}", self.session_url, profile.id)).await?;
        let property = session
            .properties
            .first()
            .ok_or_else(|| SourceError::Profile("profile has no properties".to_string()))?;

        let url = texture_url_from_property(&property.value)?;
        debug!(username, %url, "fetching skin texture");
        self.get_bytes(&url).await
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, SourceError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        Ok(self.send(url).await?.json::<T>().await?)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        Ok(self.send(url).await?.bytes().await?.to_vec())
    }
}

/// Extract the skin URL from a base64-encoded `textures` property value.
pub fn texture_url_from_property(value: &str) -> Result<String, SourceError> {
    let decoded = general_purpose::STANDARD
        .decode(value.trim())
        .map_err(|e| SourceError::Profile(format!("invalid base64 in textures: {}", e)))?;
    let payload: TexturesPayload = serde_json::from_slice(&decoded)
        .map_err(|e| SourceError::Profile(format!("invalid textures JSON: {}", e)))?;
    payload
        .textures
        .skin
        .map(|skin| skin.url)
        .ok_or_else(|| SourceError::Profile("player has no skin texture".to_string()))
}
