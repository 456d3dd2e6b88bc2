//! Vendor CDN control API port definition.

use async_trait::async_trait;

use crate::domain::errors::CdnError;

/// Port for the vendor's CDN cache control operations.
///
/// Implementations own the authenticated transport; every method issues
/// exactly one outbound call and returns the vendor request id.
#[async_trait]
pub trait CdnApiPort: Send + Sync {
    /// Purges cache for a set of file URLs.
    async fn purge_urls(&self, urls: &[String]) -> Result<String, CdnError>;

    /// Purges cache for a set of path prefixes with "delete" flush mode.
    async fn purge_paths(&self, paths: &[String]) -> Result<String, CdnError>;

    /// Pushes (preheats) a set of URLs into the edge cache.
    async fn push_urls(&self, urls: &[String]) -> Result<String, CdnError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;

    /// One recorded vendor call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        /// Operation name: `purge_urls`, `purge_paths` or `push_urls`.
        pub operation: &'static str,
        /// URLs submitted with the call.
        pub urls: Vec<String>,
    }

    /// Recording CDN API mock for testing.
    #[derive(Default)]
    pub struct RecordingCdnApi {
        calls: Mutex<Vec<RecordedCall>>,
        request_counter: AtomicUsize,
        fail_purge_urls: AtomicBool,
        fail_purge_paths: AtomicBool,
        fail_push: AtomicBool,
        fail_push_containing: Mutex<Option<String>>,
    }

    impl RecordingCdnApi {
        /// Creates a mock where every call succeeds.
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes `purge_urls` calls fail.
        pub fn fail_purge_urls(&self) {
            self.fail_purge_urls.store(true, Ordering::SeqCst);
        }

        /// Makes `purge_paths` calls fail.
        pub fn fail_purge_paths(&self) {
            self.fail_purge_paths.store(true, Ordering::SeqCst);
        }

        /// Makes `push_urls` calls fail.
        pub fn fail_push(&self) {
            self.fail_push.store(true, Ordering::SeqCst);
        }

        /// Makes `push_urls` fail only when a submitted URL contains `needle`.
        pub fn fail_push_containing(&self, needle: impl Into<String>) {
            *self.fail_push_containing.lock() = Some(needle.into());
        }

        /// Returns every call recorded so far.
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().clone()
        }

        /// Returns the calls recorded for one operation.
        pub fn calls_for(&self, operation: &str) -> Vec<RecordedCall> {
            self.calls
                .lock()
                .iter()
                .filter(|call| call.operation == operation)
                .cloned()
                .collect()
        }

        fn record(&self, operation: &'static str, urls: &[String]) {
            self.calls.lock().push(RecordedCall {
                operation,
                urls: urls.to_vec(),
            });
        }

        fn next_request_id(&self) -> String {
            let n = self.request_counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("mock-{n}")
        }
    }

    #[async_trait]
    impl CdnApiPort for RecordingCdnApi {
        async fn purge_urls(&self, urls: &[String]) -> Result<String, CdnError> {
            self.record("purge_urls", urls);
            if self.fail_purge_urls.load(Ordering::SeqCst) {
                return Err(CdnError::upstream("mock purge_urls rejection"));
            }
            Ok(self.next_request_id())
        }

        async fn purge_paths(&self, paths: &[String]) -> Result<String, CdnError> {
            self.record("purge_paths", paths);
            if self.fail_purge_paths.load(Ordering::SeqCst) {
                return Err(CdnError::upstream("mock purge_paths rejection"));
            }
            Ok(self.next_request_id())
        }

        async fn push_urls(&self, urls: &[String]) -> Result<String, CdnError> {
            self.record("push_urls", urls);
            if self.fail_push.load(Ordering::SeqCst) {
                return Err(CdnError::upstream("mock push rejection"));
            }
            if let Some(needle) = self.fail_push_containing.lock().as_deref() {
                if urls.iter().any(|url| url.contains(needle)) {
                    return Err(CdnError::upstream("mock push rejection"));
                }
            }
            Ok(self.next_request_id())
        }
    }
}
