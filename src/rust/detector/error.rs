use crate::client::ClientError;

/// Represents the different types of errors that can occur in the detector.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// The remote call failed. The message stays generic; the cause is kept
    /// as the error source for logging.
    #[error("Failed to analyze text for cyberbullying")]
    AnalysisFailed {
        #[source]
        source: ClientError,
    },
}

impl From<ClientError> for DetectorError {
    fn from(err: ClientError) -> Self {
        DetectorError::AnalysisFailed { source: err }
    }
}
