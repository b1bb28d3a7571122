//! Cyberbullying detection backed by a large language model.
//!
//! The text is wrapped in a fixed prompt, sent to the model once, and the
//! reply is turned into an [`AnalysisResult`]: a verdict, a short
//! explanation and the model's self-reported confidence.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bullyguard::{Detector, DetectorConfig};
//!
//! let detector = Detector::builder()
//!     .with_config(DetectorConfig::from_env())?
//!     .build()?;
//!
//! let result = detector.analyze("You're so dumb, nobody wants you here.").await?;
//! println!("{}: {}", result.verdict_label(), result.explanation);
//! # Ok(())
//! # }
//! ```
//!
//! # Parsing the reply
//!
//! Replies are free text. A ```` ```json ```` fenced block is preferred, then
//! the first brace-delimited object. When neither parses, a keyword check
//! decides the verdict and the confidence is reported as `0.5`:
//!
//! ```rust
//! use bullyguard::extract::{extract_result, ExtractionSource};
//!
//! let extraction = extract_result("Yes, that message is hostile.");
//! assert_eq!(extraction.source, ExtractionSource::KeywordFallback);
//! assert!(extraction.result.is_cyberbullying);
//! assert_eq!(extraction.result.confidence, 0.5);
//! ```

pub mod client;
pub mod config;
pub mod detector;
pub mod ui;

pub use client::{ClientError, GeminiClient, GenerativeModel};
pub use config::DetectorConfig;
pub use detector::{extract, prompt};
pub use detector::{AnalysisResult, Detector, DetectorBuilder, DetectorError, DetectorInfo};

pub fn init_logger() {
    env_logger::init();
}
