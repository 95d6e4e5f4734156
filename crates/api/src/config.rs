use std::path::PathBuf;

use showcase_gifs::api::DEFAULT_BASE_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory filtered images are written to and served from.
    pub artifact_dir: PathBuf,
    /// Largest accepted request body, in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// GIF search settings.
    pub gifs: GifConfig,
}

/// Settings for the outbound GIF search API.
#[derive(Clone)]
pub struct GifConfig {
    /// API credential. `None` disables outbound searches.
    pub api_key: Option<String>,
    /// Search endpoint URL.
    pub base_url: String,
    /// Outbound request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

// Keep the credential out of logs.
impl std::fmt::Debug for GifConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `3000`                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                              |
    /// | `ARTIFACT_DIR`         | `static/images`                   |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                        |
    /// | `TENOR_API_KEY`        | unset (GIF search disabled)       |
    /// | `TENOR_BASE_URL`       | `https://api.tenor.com/v1/search` |
    /// | `TENOR_TIMEOUT_SECS`   | `10`                              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let artifact_dir = std::env::var("ARTIFACT_DIR")
            .unwrap_or_else(|_| "static/images".into())
            .into();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            artifact_dir,
            max_upload_bytes,
            gifs: GifConfig::from_env(),
        }
    }
}

impl GifConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("TENOR_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url =
            std::env::var("TENOR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("TENOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("TENOR_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let config = GifConfig {
            api_key: Some("super-secret".into()),
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: 10,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
