use std::sync::Arc;

use log::{error, info};

use super::detector::Detector;
use super::error::DetectorError;
use crate::client::{GeminiClient, GenerativeModel};
use crate::config::DetectorConfig;

/// A builder for constructing a Detector with a fluent interface.
#[derive(Default)]
pub struct DetectorBuilder {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl DetectorBuilder {
    /// Creates a new empty DetectorBuilder
    ///
    /// # Example
    /// ```
    /// use bullyguard::DetectorBuilder;
    ///
    /// let builder = DetectorBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self { model: None }
    }

    /// Talks to Gemini using the given configuration
    ///
    /// # Returns
    /// * `Result<Self, DetectorError>` - The builder instance if successful, or an error if:
    ///   - A client is already set
    ///   - The HTTP client could not be created
    ///
    /// # Example
    /// ```
    /// use bullyguard::{DetectorBuilder, DetectorConfig};
    ///
    /// let builder = DetectorBuilder::new()
    ///     .with_config(DetectorConfig::default().with_api_key("key"));
    /// assert!(builder.is_ok());
    /// ```
    pub fn with_config(self, config: DetectorConfig) -> Result<Self, DetectorError> {
        if self.model.is_some() {
            return Err(DetectorError::BuildError("Model client already set".to_string()));
        }
        if config.model.trim().is_empty() {
            return Err(DetectorError::BuildError("Model name cannot be empty".to_string()));
        }

        let client = GeminiClient::new(&config).map_err(|e| {
            error!("Failed to create Gemini client: {}", e);
            DetectorError::BuildError(format!("Failed to create HTTP client: {}", e))
        })?;
        info!("Using model {} at {}", config.model, config.api_base_url);

        self.with_client(Arc::new(client))
    }

    /// Uses any [`GenerativeModel`] implementation, e.g. a local stub
    pub fn with_client(mut self, client: Arc<dyn GenerativeModel>) -> Result<Self, DetectorError> {
        if self.model.is_some() {
            return Err(DetectorError::BuildError("Model client already set".to_string()));
        }
        self.model = Some(client);
        Ok(self)
    }

    /// Builds the detector
    pub fn build(self) -> Result<Detector, DetectorError> {
        let model = self.model.ok_or_else(|| {
            DetectorError::BuildError("No model client configured".to_string())
        })?;
        Ok(Detector { model })
    }
}
