use std::sync::Arc;
use std::time::Duration;

use showcase_gifs::{GifSearchError, TenorApi};

use crate::config::ServerConfig;
use crate::storage::ArtifactStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Filtered image artifacts on disk.
    pub artifacts: Arc<ArtifactStore>,
    /// GIF search client; `None` when no API key is configured.
    pub gifs: Option<Arc<TenorApi>>,
}

impl AppState {
    /// Build state from configuration: opens the artifact directory and, if
    /// a key is present, the GIF search client.
    pub fn from_config(config: ServerConfig) -> Result<Self, StateError> {
        let artifacts = ArtifactStore::open(&config.artifact_dir)?;

        let gifs = match &config.gifs.api_key {
            Some(key) => Some(Arc::new(TenorApi::new(
                config.gifs.base_url.clone(),
                key.clone(),
                Duration::from_secs(config.gifs.timeout_secs),
            )?)),
            None => {
                tracing::warn!("TENOR_API_KEY is not set; GIF search will return no results");
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            artifacts: Arc::new(artifacts),
            gifs,
        })
    }
}

/// Failures while assembling [`AppState`] at startup.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to open artifact directory: {0}")]
    Artifacts(#[from] std::io::Error),

    #[error("failed to build GIF search client: {0}")]
    Gifs(#[from] GifSearchError),
}
