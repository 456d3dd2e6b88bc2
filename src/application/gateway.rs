//! CDN gateway facade.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{ClassifiedBatch, Receipt};
use crate::domain::errors::CdnError;
use crate::domain::ports::CdnApiPort;
use crate::domain::services::UrlNormalizer;

/// Single point of contact with the vendor CDN control API.
///
/// Holds only the immutable authenticated port, so one instance can be
/// shared read-only across concurrent command invocations. Configuration
/// changes replace the whole instance rather than mutating it.
pub struct CdnGateway {
    api: Arc<dyn CdnApiPort>,
}

impl CdnGateway {
    /// Creates a gateway over the given vendor API port.
    #[must_use]
    pub fn new(api: Arc<dyn CdnApiPort>) -> Self {
        Self { api }
    }

    /// Purges cache for a classified batch.
    ///
    /// File targets and path targets go out as two independent vendor
    /// calls, files first. The combined receipt counts both partitions and
    /// joins the request ids with `+`. The operation is not transactional:
    /// when the path call fails after the file call succeeded, the error
    /// says so and the file purge stays applied.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty batch, or the vendor error
    /// of the failing call.
    pub async fn purge(&self, batch: &ClassifiedBatch) -> Result<Receipt, CdnError> {
        if batch.is_empty() {
            return Err(CdnError::invalid_argument("no URLs supplied"));
        }

        debug!(
            files = batch.files().len(),
            paths = batch.paths().len(),
            "Submitting cache purge"
        );

        let mut request_ids = Vec::new();

        if !batch.files().is_empty() {
            let request_id = self.api.purge_urls(batch.files()).await.map_err(|e| {
                warn!(error = %e, "File purge failed");
                e
            })?;
            request_ids.push(request_id);
        }

        if !batch.paths().is_empty() {
            match self.api.purge_paths(batch.paths()).await {
                Ok(request_id) => request_ids.push(request_id),
                Err(e) => {
                    warn!(error = %e, "Path purge failed");
                    return Err(if request_ids.is_empty() {
                        e
                    } else {
                        note_file_purge_applied(e)
                    });
                }
            }
        }

        let receipt = Receipt::new(batch.total(), request_ids.join("+"));
        info!(
            count = receipt.count,
            request_id = %receipt.request_id,
            "Cache purge submitted"
        );

        Ok(receipt)
    }

    /// Preheats a list of URLs, normalized as file targets.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty list, or the vendor error.
    pub async fn preheat<S: AsRef<str>>(&self, urls: &[S]) -> Result<Receipt, CdnError> {
        if urls.is_empty() {
            return Err(CdnError::invalid_argument("no URLs supplied"));
        }

        let normalized: Vec<String> = urls
            .iter()
            .map(|url| UrlNormalizer::normalize_file(url.as_ref()))
            .collect();

        debug!(count = normalized.len(), "Submitting cache preheat");

        let request_id = self.api.push_urls(&normalized).await.map_err(|e| {
            warn!(error = %e, "Preheat failed");
            e
        })?;

        let receipt = Receipt::new(normalized.len(), request_id);
        info!(
            count = receipt.count,
            request_id = %receipt.request_id,
            "Cache preheat submitted"
        );

        Ok(receipt)
    }
}

/// Marks a purge error as partial: the file call already went through.
fn note_file_purge_applied(error: CdnError) -> CdnError {
    let note = "the file purge was already submitted";
    match error {
        CdnError::Upstream { message } => CdnError::upstream(format!("{message} ({note})")),
        CdnError::Network { message } => CdnError::network(format!("{message} ({note})")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::RecordingCdnApi;
    use crate::domain::services::RequestClassifier;

    fn make_gateway() -> (CdnGateway, Arc<RecordingCdnApi>) {
        let api = Arc::new(RecordingCdnApi::new());
        (CdnGateway::new(api.clone()), api)
    }

    #[tokio::test]
    async fn test_purge_empty_batch_is_invalid() {
        let (gateway, api) = make_gateway();

        let result = gateway.purge(&ClassifiedBatch::default()).await;

        assert!(matches!(result, Err(CdnError::InvalidArgument { .. })));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_purge_files_only_issues_one_call() {
        let (gateway, api) = make_gateway();
        let batch = RequestClassifier::classify(&["example.com/a.jpg"]);

        let receipt = gateway.purge(&batch).await.unwrap();

        assert_eq!(receipt.count, 1);
        assert_eq!(receipt.request_id, "mock-1");
        assert_eq!(api.calls().len(), 1);
        assert_eq!(api.calls()[0].operation, "purge_urls");
        assert_eq!(api.calls()[0].urls, ["https://example.com/a.jpg"]);
    }

    #[tokio::test]
    async fn test_purge_mixed_batch_issues_both_calls() {
        let (gateway, api) = make_gateway();
        let batch =
            RequestClassifier::classify(&["example.com/a.jpg", "example.com/dir/"]);

        let receipt = gateway.purge(&batch).await.unwrap();

        assert_eq!(receipt.count, 2);
        assert_eq!(receipt.request_id, "mock-1+mock-2");

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].operation, "purge_urls");
        assert_eq!(calls[1].operation, "purge_paths");
        assert_eq!(calls[1].urls, ["https://example.com/dir/"]);
    }

    #[tokio::test]
    async fn test_purge_file_failure_propagates() {
        let (gateway, api) = make_gateway();
        api.fail_purge_urls();
        let batch = RequestClassifier::classify(&["example.com/a.jpg"]);

        let error = gateway.purge(&batch).await.unwrap_err();

        assert!(matches!(error, CdnError::Upstream { .. }));
        assert!(error.is_upstream());
        assert!(!error.to_string().contains("already submitted"));
    }

    #[tokio::test]
    async fn test_partial_purge_failure_names_applied_call() {
        let (gateway, api) = make_gateway();
        api.fail_purge_paths();
        let batch =
            RequestClassifier::classify(&["example.com/a.jpg", "example.com/dir/"]);

        let error = gateway.purge(&batch).await.unwrap_err();

        assert!(error.to_string().contains("the file purge was already submitted"));
        // The file call went out before the path call failed.
        assert_eq!(api.calls_for("purge_urls").len(), 1);
    }

    #[tokio::test]
    async fn test_preheat_empty_is_invalid() {
        let (gateway, api) = make_gateway();

        let result = gateway.preheat::<&str>(&[]).await;

        assert!(matches!(result, Err(CdnError::InvalidArgument { .. })));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_preheat_normalizes_as_file_targets() {
        let (gateway, api) = make_gateway();

        let receipt = gateway.preheat(&["a.com/x"]).await.unwrap();

        assert_eq!(receipt.count, 1);
        assert_eq!(api.calls()[0].operation, "push_urls");
        assert_eq!(api.calls()[0].urls, ["https://a.com/x"]);
    }

    #[tokio::test]
    async fn test_preheat_failure_propagates() {
        let (gateway, api) = make_gateway();
        api.fail_push();

        let result = gateway.preheat(&["a.com/x"]).await;

        assert!(matches!(result, Err(CdnError::Upstream { .. })));
    }
}
