mod error;
mod detector;
pub mod builder;
pub mod extract;
pub mod prompt;
mod result;

pub use error::DetectorError;
pub use detector::Detector;
pub use builder::DetectorBuilder;
pub use extract::{Extraction, ExtractionSource};
pub use result::AnalysisResult;

/// Information about a detector's configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorInfo {
    /// Identifier of the remote model, e.g. `gemini-2.0-flash`
    pub model: String,
}
