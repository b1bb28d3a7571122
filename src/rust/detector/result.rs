use serde::{Deserialize, Serialize};

/// The verdict for one submission.
///
/// Field names follow the JSON shape the model is asked to return
/// (`isCyberbullying`, `explanation`, `confidence`). `confidence` is whatever
/// the model reported; it is not checked against `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_cyberbullying: bool,
    pub explanation: String,
    pub confidence: f64,
}

impl AnalysisResult {
    pub fn new(is_cyberbullying: bool, explanation: impl Into<String>, confidence: f64) -> Self {
        Self {
            is_cyberbullying,
            explanation: explanation.into(),
            confidence,
        }
    }

    /// Headline shown above the explanation.
    pub fn verdict_label(&self) -> &'static str {
        if self.is_cyberbullying {
            "Cyberbullying Detected"
        } else {
            "No Cyberbullying Detected"
        }
    }

    /// Confidence as a rounded percentage, e.g. `0.876` -> `88`.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}
