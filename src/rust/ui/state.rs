use super::theme::Theme;
use crate::{AnalysisResult, Detector, DetectorError};

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent: the text was blank or a request was in flight.
    Skipped,
    /// A result is now available.
    Completed,
    /// The request failed; the form is idle again with no result.
    Failed,
}

/// Transient state of the form.
///
/// Everything here lives only as long as the session; a new submission
/// discards the previous result.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub text: String,
    result: Option<AnalysisResult>,
    analyzing: bool,
    pub theme: Theme,
}

impl FormState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Mirrors the submit control: disabled while blank or busy.
    pub fn can_submit(&self) -> bool {
        !self.analyzing && !self.text.trim().is_empty()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    /// Enters the analyzing state and returns the text to send, or `None`
    /// when a submission is not allowed right now.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.analyzing = true;
        self.result = None;
        Some(self.text.clone())
    }

    /// Leaves the analyzing state. Failures are logged, not shown.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult, DetectorError>) -> SubmitOutcome {
        self.analyzing = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                SubmitOutcome::Completed
            }
            Err(e) => {
                log::error!("Error analyzing text: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, detector: &Detector) -> SubmitOutcome {
        let Some(text) = self.begin_submit() else {
            return SubmitOutcome::Skipped;
        };
        let outcome = detector.analyze(&text).await;
        self.finish_submit(outcome)
    }
}
