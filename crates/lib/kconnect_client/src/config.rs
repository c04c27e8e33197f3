//! Client configuration.

use std::path::PathBuf;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/kconnect";

/// Configuration for the KConnect client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub base_url: String,
    /// File holding the persisted `token` cookie.
    pub cookie_jar: PathBuf,
}

impl ClientConfig {
    /// Build a configuration, validating the base URL.
    pub fn new(base_url: &str, cookie_jar: PathBuf) -> ClientResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base url {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported scheme in base url: {}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cookie_jar,
        })
    }

    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable              | Default                            |
    /// |-----------------------|------------------------------------|
    /// | `KCONNECT_API_URL`    | `http://localhost:8080/kconnect`   |
    /// | `KCONNECT_COOKIE_JAR` | `<data dir>/kconnect/cookies`      |
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("KCONNECT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let cookie_jar = std::env::var_os("KCONNECT_COOKIE_JAR")
            .map(PathBuf::from)
            .unwrap_or_else(default_cookie_jar);
        Self::new(&base_url, cookie_jar)
    }

    /// Absolute URL for an endpoint path such as `/departments/3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// `<data dir>/kconnect/cookies`, falling back to the working directory.
pub fn default_cookie_jar() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kconnect")
        .join("cookies")
}
