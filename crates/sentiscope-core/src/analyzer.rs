use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    classifier::Classifier,
    error::{CoreError, CoreResult},
    prompt::SYSTEM_PROMPT,
    sentiment::SentimentResponse,
};

/// Validates comments, asks the provider for a verdict and checks its shape.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    classifier: Arc<dyn Classifier>,
}

impl SentimentAnalyzer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn provider(&self) -> &str {
        self.classifier.name()
    }

    /// Classify one comment.
    ///
    /// A comment that is empty after trimming fails with
    /// [`CoreError::EmptyComment`] before the provider is contacted. Otherwise
    /// exactly one provider call is made, with the comment passed untrimmed.
    pub async fn analyze(&self, comment: &str) -> CoreResult<SentimentResponse> {
        if comment.trim().is_empty() {
            return Err(CoreError::EmptyComment);
        }

        let raw = self.classifier.classify(SYSTEM_PROMPT, comment).await?;
        debug!(provider = self.classifier.name(), raw = %raw, "Received completion");

        let verdict = SentimentResponse::from_completion(&raw)?;
        if !verdict.is_consistent() {
            warn!(
                sentiment = %verdict.sentiment,
                rating = verdict.rating,
                "Provider returned a rating that disagrees with its sentiment label"
            );
        }
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::sentiment::Sentiment;

    /// Replays a canned completion and records what it was asked.
    struct StubClassifier {
        reply: fn() -> CoreResult<String>,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl StubClassifier {
        fn new(reply: fn() -> CoreResult<String>) -> Arc<Self> {
            Arc::new(Self { reply, calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl Classifier for StubClassifier {
        fn name(&self) -> &str {
            "stub"
        }

        async fn classify(&self, system: &str, text: &str) -> CoreResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((system.to_string(), text.to_string()));
            (self.reply)()
        }
    }

    #[tokio::test]
    async fn test_analyze_returns_verdict() {
        let stub = StubClassifier::new(|| Ok(r#"{"sentiment":"positive","rating":5}"#.to_string()));
        let analyzer = SentimentAnalyzer::new(stub.clone());

        let v = analyzer.analyze("I love this!").await.unwrap();
        assert_eq!(v, SentimentResponse { sentiment: Sentiment::Positive, rating: 5 });
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_analyze_sends_prompt_and_untrimmed_comment() {
        let stub = StubClassifier::new(|| Ok(r#"{"sentiment":"neutral","rating":3}"#.to_string()));
        let analyzer = SentimentAnalyzer::new(stub.clone());

        analyzer.analyze("  meh  ").await.unwrap();
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0].0, SYSTEM_PROMPT);
        assert_eq!(seen[0].1, "  meh  ");
    }

    #[tokio::test]
    async fn test_blank_comment_skips_provider() {
        let stub = StubClassifier::new(|| Ok(r#"{"sentiment":"neutral","rating":3}"#.to_string()));
        let analyzer = SentimentAnalyzer::new(stub.clone());

        for comment in ["", "   ", "\n\t "] {
            let err = analyzer.analyze(comment).await.unwrap_err();
            assert!(matches!(err, CoreError::EmptyComment));
        }
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let stub = StubClassifier::new(|| {
            Err(CoreError::Http { status: 429, body: "rate limited".to_string() })
        });
        let analyzer = SentimentAnalyzer::new(stub);

        let err = analyzer.analyze("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 429: rate limited");
    }

    #[tokio::test]
    async fn test_malformed_completion_is_json_error() {
        let stub = StubClassifier::new(|| Ok("not json".to_string()));
        let analyzer = SentimentAnalyzer::new(stub);

        let err = analyzer.analyze("It's fine.").await.unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[tokio::test]
    async fn test_inconsistent_verdict_is_returned() {
        let stub = StubClassifier::new(|| Ok(r#"{"sentiment":"positive","rating":1}"#.to_string()));
        let analyzer = SentimentAnalyzer::new(stub);

        let v = analyzer.analyze("hmm").await.unwrap();
        assert_eq!(v.sentiment, Sentiment::Positive);
        assert_eq!(v.rating, 1);
    }
}
