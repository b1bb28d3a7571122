use lazy_static::lazy_static;
use regex::Regex;

use super::result::AnalysisResult;

/// Explanation used when the model's reply could not be parsed.
pub const FALLBACK_EXPLANATION: &str = "Unable to parse detailed explanation from AI response.";

/// Confidence used when the model's reply could not be parsed.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

lazy_static! {
    // Lazy, so the block ends at the first closing fence.
    static ref FENCED_JSON: Regex =
        Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("valid fenced block pattern");
    // Greedy: first `{` to last `}`.
    static ref BARE_OBJECT: Regex = Regex::new(r"\{[\s\S]*\}").expect("valid object pattern");
}

/// Which step of the extraction produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// A ```` ```json ```` fenced block.
    FencedBlock,
    /// A brace-delimited object found anywhere in the reply.
    BareObject,
    /// The reply parsed as JSON on its own.
    WholeReply,
    /// Nothing parsed; the keyword heuristic was used.
    KeywordFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub result: AnalysisResult,
    pub source: ExtractionSource,
}

/// Picks the JSON candidate out of a reply.
///
/// Only one candidate is ever chosen: a fenced block wins over a bare object,
/// and the whole reply is used when neither is present.
pub fn json_candidate(reply: &str) -> (&str, ExtractionSource) {
    if let Some(block) = FENCED_JSON.captures(reply).and_then(|c| c.get(1)) {
        return (block.as_str(), ExtractionSource::FencedBlock);
    }
    if let Some(object) = BARE_OBJECT.find(reply) {
        return (object.as_str(), ExtractionSource::BareObject);
    }
    (reply, ExtractionSource::WholeReply)
}

/// Recovers an [`AnalysisResult`] from the model's raw reply.
///
/// Never fails: a candidate that does not parse into the expected shape
/// (bad JSON, missing or mistyped fields) falls back to [`keyword_fallback`].
pub fn extract_result(reply: &str) -> Extraction {
    let (candidate, source) = json_candidate(reply);

    match serde_json::from_str::<AnalysisResult>(candidate) {
        Ok(result) => {
            log::debug!("Extracted result from {:?}", source);
            Extraction { result, source }
        }
        Err(e) => {
            log::error!("Error parsing JSON response: {}", e);
            Extraction {
                result: keyword_fallback(reply),
                source: ExtractionSource::KeywordFallback,
            }
        }
    }
}

/// Heuristic verdict for replies that carry no usable JSON.
pub fn keyword_fallback(reply: &str) -> AnalysisResult {
    let lowered = reply.to_lowercase();
    AnalysisResult {
        is_cyberbullying: lowered.contains("yes") || lowered.contains("true"),
        explanation: FALLBACK_EXPLANATION.to_string(),
        confidence: FALLBACK_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block() {
        let reply = "Here you go:\n```json\n{\"isCyberbullying\": true, \"explanation\": \"Direct insult.\", \"confidence\": 0.92}\n```\nAnything else?";
        let extraction = extract_result(reply);
        assert_eq!(extraction.source, ExtractionSource::FencedBlock);
        assert_eq!(
            extraction.result,
            AnalysisResult::new(true, "Direct insult.", 0.92)
        );
    }

    #[test]
    fn test_bare_object() {
        let reply = "Sure. {\"isCyberbullying\": false, \"explanation\": \"Friendly.\", \"confidence\": 0.8} Hope that helps.";
        let extraction = extract_result(reply);
        assert_eq!(extraction.source, ExtractionSource::BareObject);
        assert_eq!(extraction.result, AnalysisResult::new(false, "Friendly.", 0.8));
    }

    #[test]
    fn test_bare_object_spans_lines() {
        let reply = "{\n  \"isCyberbullying\": false,\n  \"explanation\": \"Neutral {statement}.\",\n  \"confidence\": 1\n}";
        let extraction = extract_result(reply);
        assert_eq!(extraction.source, ExtractionSource::BareObject);
        assert_eq!(extraction.result.explanation, "Neutral {statement}.");
        assert_eq!(extraction.result.confidence, 1.0);
    }

    #[test]
    fn test_fence_wins_over_earlier_object() {
        let reply = "{not json} then ```json\n{\"isCyberbullying\": true, \"explanation\": \"x\", \"confidence\": 0.7}\n```";
        let (candidate, source) = json_candidate(reply);
        assert_eq!(source, ExtractionSource::FencedBlock);
        assert!(candidate.starts_with('{'));
        assert!(candidate.ends_with('}'));
    }

    #[test]
    fn test_broken_fence_does_not_retry_bare_object() {
        // The fenced candidate is invalid; the later object is never tried.
        let reply = "```json\n{broken\n```\n{\"isCyberbullying\": false, \"explanation\": \"x\", \"confidence\": 0.9}";
        let extraction = extract_result(reply);
        assert_eq!(extraction.source, ExtractionSource::KeywordFallback);
        assert_eq!(extraction.result.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn test_missing_field_falls_back() {
        let reply = "{\"isCyberbullying\": true, \"confidence\": 0.9}";
        let extraction = extract_result(reply);
        assert_eq!(extraction.source, ExtractionSource::KeywordFallback);
        // "true" appears in the raw reply.
        assert!(extraction.result.is_cyberbullying);
        assert_eq!(extraction.result.explanation, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_fallback_yes() {
        let extraction = extract_result("YES, this is harassment.");
        assert_eq!(extraction.source, ExtractionSource::KeywordFallback);
        assert!(extraction.result.is_cyberbullying);
        assert_eq!(extraction.result.confidence, 0.5);
    }

    #[test]
    fn test_fallback_true() {
        assert!(keyword_fallback("Verdict: True").is_cyberbullying);
    }

    #[test]
    fn test_fallback_negative() {
        let extraction = extract_result("No, this looks like a friendly message.");
        assert!(!extraction.result.is_cyberbullying);
        assert_eq!(extraction.result.confidence, 0.5);
        assert_eq!(extraction.result.explanation, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_fallback_matches_substrings() {
        // "eyes" contains "yes"; the heuristic is a plain substring check.
        assert!(keyword_fallback("Keep your eyes open").is_cyberbullying);
    }

    #[test]
    fn test_whole_reply_candidate() {
        let (candidate, source) = json_candidate("no braces here");
        assert_eq!(source, ExtractionSource::WholeReply);
        assert_eq!(candidate, "no braces here");
    }

    #[test]
    fn test_confidence_not_clamped() {
        let reply = "{\"isCyberbullying\": true, \"explanation\": \"x\", \"confidence\": 3.5}";
        assert_eq!(extract_result(reply).result.confidence, 3.5);
    }
}
