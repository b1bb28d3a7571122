use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bullyguard::ui::{FormState, SubmitOutcome, Theme};
use bullyguard::{AnalysisResult, ClientError, Detector, GenerativeModel};
use env_logger::{Builder, Env};

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// Replies with a fixed text, or fails, and counts every call.
struct ScriptedModel {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn model_name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or(ClientError::Api {
            status: 500,
            message: "internal error".into(),
        })
    }
}

fn detector(model: Arc<ScriptedModel>) -> Detector {
    Detector::builder()
        .with_client(model)
        .expect("client")
        .build()
        .expect("detector")
}

#[tokio::test]
async fn test_blank_text_makes_no_remote_call() {
    init();
    let model = ScriptedModel::replying("{}");
    let detector = detector(Arc::clone(&model));
    let mut state = FormState::new(Theme::Dark);

    for text in ["", "   ", "\n\n\t "] {
        state.set_text(text);
        assert!(!state.can_submit());
        assert_eq!(state.submit(&detector).await, SubmitOutcome::Skipped);
    }

    assert_eq!(model.calls(), 0);
    assert!(state.result().is_none());
    assert!(!state.is_analyzing());
}

#[tokio::test]
async fn test_successful_submission_shows_result() {
    init();
    let model = ScriptedModel::replying(
        "{\"isCyberbullying\": false, \"explanation\": \"Polite disagreement.\", \"confidence\": 0.81}",
    );
    let detector = detector(Arc::clone(&model));
    let mut state = FormState::default();

    state.set_text("I don't agree with your point, but thanks for sharing.");
    assert_eq!(state.submit(&detector).await, SubmitOutcome::Completed);

    assert_eq!(
        state.result(),
        Some(&AnalysisResult::new(false, "Polite disagreement.", 0.81))
    );
    assert!(!state.is_analyzing());
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_remote_failure_returns_to_idle() {
    init();
    let model = ScriptedModel::failing();
    let detector = detector(Arc::clone(&model));
    let mut state = FormState::default();

    state.set_text("anything");
    assert_eq!(state.submit(&detector).await, SubmitOutcome::Failed);

    // No stuck spinner, no result, and the form accepts another submission.
    assert!(!state.is_analyzing());
    assert!(state.result().is_none());
    assert!(state.can_submit());
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_failure_discards_previous_result() {
    init();
    let ok = detector(ScriptedModel::replying("No. Nothing hostile here."));
    let broken = detector(ScriptedModel::failing());
    let mut state = FormState::default();

    state.set_text("hello there");
    assert_eq!(state.submit(&ok).await, SubmitOutcome::Completed);
    let first = state.result().cloned().expect("result");
    assert!(!first.is_cyberbullying);
    assert_eq!(first.confidence, 0.5);

    assert_eq!(state.submit(&broken).await, SubmitOutcome::Failed);
    assert!(state.result().is_none());
}

#[tokio::test]
async fn test_detector_is_shareable_across_tasks() {
    init();
    let model = ScriptedModel::replying("true");
    let detector = Arc::new(detector(Arc::clone(&model)));

    let mut handles = vec![];
    for i in 0..3 {
        let detector = Arc::clone(&detector);
        handles.push(tokio::spawn(async move {
            detector.analyze(&format!("message {i}")).await
        }));
    }
    for handle in handles {
        let result = handle.await.expect("task").expect("analysis");
        assert!(result.is_cyberbullying);
    }
    assert_eq!(model.calls(), 3);
}
