use std::sync::Arc;

use super::error::DetectorError;
use super::extract::extract_result;
use super::prompt::build_prompt;
use super::result::AnalysisResult;
use crate::client::GenerativeModel;

/// Sends text to a generative model and turns its reply into a verdict.
///
/// The detector holds no per-request state, so one instance can be shared
/// across tasks behind an `Arc`:
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use bullyguard::{Detector, DetectorConfig};
///
/// let detector = Detector::builder()
///     .with_config(DetectorConfig::from_env())?
///     .build()?;
///
/// let result = detector.analyze("Nobody likes you, just leave.").await?;
/// println!("{} ({}%)", result.verdict_label(), result.confidence_percent());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Detector {
    pub(crate) model: Arc<dyn GenerativeModel>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Detector>();
    }
};

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("model", &self.model.model_name())
            .finish()
    }
}

impl Detector {
    /// Creates a new DetectorBuilder for fluent construction
    pub fn builder() -> super::builder::DetectorBuilder {
        super::builder::DetectorBuilder::new()
    }

    /// Returns information about the detector's configuration
    pub fn info(&self) -> super::DetectorInfo {
        super::DetectorInfo {
            model: self.model.model_name().to_string(),
        }
    }

    /// Classifies `text` with a single call to the remote model.
    ///
    /// # Errors
    /// * `ValidationError` if the text is empty or whitespace only; the model
    ///   is not called.
    /// * `AnalysisFailed` if the remote call fails for any reason. There is
    ///   no retry.
    ///
    /// A reply that cannot be parsed is not an error: the keyword fallback
    /// produces a result with confidence `0.5`.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, DetectorError> {
        if text.trim().is_empty() {
            return Err(DetectorError::ValidationError("Input text cannot be empty".into()));
        }

        let prompt = build_prompt(text);
        log::debug!("Analyzing {} chars with {}", text.chars().count(), self.model.model_name());

        let reply = self.model.generate(&prompt).await.map_err(|e| {
            log::error!("Error in cyberbullying detection: {}", e);
            DetectorError::from(e)
        })?;

        let extraction = extract_result(&reply);
        log::info!(
            "Verdict: cyberbullying={} confidence={} (via {:?})",
            extraction.result.is_cyberbullying,
            extraction.result.confidence,
            extraction.source
        );
        Ok(extraction.result)
    }
}
