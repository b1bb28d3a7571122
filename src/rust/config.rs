use std::env;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the remote generative model.
///
/// `Debug` is implemented by hand so the API key never ends up in logs.
#[derive(Clone)]
pub struct DetectorConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    /// `None` leaves the request unbounded.
    pub timeout: Option<Duration>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl fmt::Debug for DetectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl DetectorConfig {
    /// Reads the API key from `GOOGLE_API_KEY`.
    ///
    /// A missing key is not an error here: the request goes out with an
    /// empty key and the API rejects it, which surfaces as an analysis failure.
    pub fn from_env() -> Self {
        let api_key = match env::var(API_KEY_ENV) {
            Ok(key) => key,
            Err(_) => {
                log::warn!("{} is not set, requests will be rejected by the API", API_KEY_ENV);
                String::new()
            }
        };

        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Trailing slashes are dropped so endpoint paths can be appended directly.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
