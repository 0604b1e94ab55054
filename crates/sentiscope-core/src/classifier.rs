use async_trait::async_trait;

use crate::error::CoreResult;

/// Port to a text-completion provider.
///
/// Implementors own transport and vendor wire details. Given a system
/// instruction and the user's text, return the raw completion text (expected,
/// but not guaranteed, to be JSON).
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    async fn classify(&self, system: &str, text: &str) -> CoreResult<String>;
}
