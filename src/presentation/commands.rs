//! `/cdn` command parsing, dispatch and response rendering.

use std::sync::Arc;

use crate::application::{BackgroundPreheatQueue, CdnGateway};
use crate::domain::errors::CdnError;
use crate::domain::services::RequestClassifier;

const USAGE: &str = "❌ Usage: /cdn <url> [url ...] [--preheat]";
const NOT_INITIALIZED: &str =
    "❌ CDN manager is not initialized; check the plugin configuration";
const PREHEAT_FLAG: &str = "--preheat";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedCommand {
    urls: Vec<String>,
    preheat: bool,
}

/// Parses "command name + arguments" in one pass: `--` tokens are flags,
/// everything else is a candidate URL. Only `--preheat` is recognized.
fn parse(line: &str) -> Result<ParsedCommand, String> {
    let mut tokens = line.split_whitespace();
    // First token is the command name itself.
    let _ = tokens.next();

    let mut urls = Vec::new();
    let mut preheat = false;

    for token in tokens {
        if token.starts_with("--") {
            if token == PREHEAT_FLAG {
                preheat = true;
            } else {
                return Err(format!("❌ Unknown flag {token}. Usage: /cdn <url> [url ...] [--preheat]"));
            }
        } else {
            urls.push(token.to_string());
        }
    }

    Ok(ParsedCommand { urls, preheat })
}

/// Boundary between the host's command representation and the gateway.
///
/// Every gateway error is rendered here as a single response line; nothing
/// propagates to the host uncaught.
pub struct CommandDispatcher {
    gateway: Option<Arc<CdnGateway>>,
    queue: Arc<BackgroundPreheatQueue>,
}

impl CommandDispatcher {
    /// Creates a dispatcher over the currently active gateway, if any.
    #[must_use]
    pub fn new(gateway: Option<Arc<CdnGateway>>, queue: Arc<BackgroundPreheatQueue>) -> Self {
        Self { gateway, queue }
    }

    /// Handles one command line and returns the response messages to
    /// render, in order (always exactly one here).
    pub async fn dispatch(&self, line: &str) -> Vec<String> {
        let parsed = match parse(line) {
            Ok(parsed) => parsed,
            Err(rendered) => return vec![rendered],
        };

        if parsed.urls.is_empty() {
            return vec![USAGE.to_string()];
        }

        let Some(gateway) = self.gateway.as_ref() else {
            return vec![NOT_INITIALIZED.to_string()];
        };

        let reply = if parsed.preheat {
            match gateway.preheat(&parsed.urls).await {
                Ok(receipt) => {
                    let reply = format!(
                        "🔥 Preheated {} URL(s) (request ID: {})",
                        receipt.count, receipt.request_id
                    );
                    // Fire-and-forget; the user already has their answer.
                    self.queue.enqueue(Arc::clone(gateway), parsed.urls);
                    reply
                }
                Err(e) => render_error(&e),
            }
        } else {
            let batch = RequestClassifier::classify(&parsed.urls);
            match gateway.purge(&batch).await {
                Ok(receipt) => format!(
                    "🔄 Purged {} URL(s) (request ID: {})",
                    receipt.count, receipt.request_id
                ),
                Err(e) => render_error(&e),
            }
        };

        vec![reply]
    }
}

fn render_error(error: &CdnError) -> String {
    format!("❌ Error: {error}")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::ports::mocks::RecordingCdnApi;

    fn make_dispatcher() -> (CommandDispatcher, Arc<RecordingCdnApi>) {
        let api = Arc::new(RecordingCdnApi::new());
        let gateway = Arc::new(CdnGateway::new(api.clone()));
        let queue = Arc::new(BackgroundPreheatQueue::new(Duration::from_millis(1)));
        (CommandDispatcher::new(Some(gateway), queue), api)
    }

    fn make_uninitialized_dispatcher() -> CommandDispatcher {
        let queue = Arc::new(BackgroundPreheatQueue::new(Duration::from_millis(1)));
        CommandDispatcher::new(None, queue)
    }

    #[test]
    fn test_parse_flag_anywhere() {
        let parsed = parse("cdn --preheat a.com/x b.com/y").unwrap();

        assert!(parsed.preheat);
        assert_eq!(parsed.urls, ["a.com/x", "b.com/y"]);
    }

    #[test]
    fn test_parse_unknown_flag_is_rejected() {
        let rendered = parse("cdn --force a.com/x").unwrap_err();
        assert!(rendered.contains("Unknown flag --force"));
    }

    #[tokio::test]
    async fn test_no_urls_renders_usage() {
        let (dispatcher, api) = make_dispatcher();

        let replies = dispatcher.dispatch("cdn").await;

        assert_eq!(replies, [USAGE]);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_uninitialized_gateway_renders_init_error() {
        let dispatcher = make_uninitialized_dispatcher();

        let replies = dispatcher.dispatch("cdn example.com/a.jpg").await;

        assert_eq!(replies, [NOT_INITIALIZED]);
    }

    #[tokio::test]
    async fn test_purge_renders_success() {
        let (dispatcher, api) = make_dispatcher();

        let replies = dispatcher.dispatch("cdn example.com/img.png").await;

        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0], "🔄 Purged 1 URL(s) (request ID: mock-1)");
        assert_eq!(api.calls_for("purge_urls").len(), 1);
    }

    #[tokio::test]
    async fn test_purge_mixed_batch_counts_both_calls() {
        let (dispatcher, _api) = make_dispatcher();

        let replies = dispatcher
            .dispatch("cdn example.com/a.jpg example.com/dir/")
            .await;

        assert_eq!(replies[0], "🔄 Purged 2 URL(s) (request ID: mock-1+mock-2)");
    }

    #[tokio::test]
    async fn test_preheat_renders_success_and_enqueues_drain() {
        let (dispatcher, api) = make_dispatcher();

        let replies = dispatcher.dispatch("cdn a.com/x --preheat").await;

        assert_eq!(replies, ["🔥 Preheated 1 URL(s) (request ID: mock-1)"]);

        // The synchronous submission went out immediately; the background
        // drain re-submits the same URL shortly after.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(api.calls_for("push_urls").len(), 2);
    }

    #[tokio::test]
    async fn test_gateway_error_renders_single_line() {
        let (dispatcher, api) = make_dispatcher();
        api.fail_purge_urls();

        let replies = dispatcher.dispatch("cdn example.com/a.jpg").await;

        assert_eq!(replies.len(), 1);
        assert!(replies[0].starts_with("❌ Error:"));
        assert!(replies[0].contains("mock purge_urls rejection"));
    }

    #[tokio::test]
    async fn test_preheat_error_skips_background_drain() {
        let (dispatcher, api) = make_dispatcher();
        api.fail_push();

        let replies = dispatcher.dispatch("cdn a.com/x --preheat").await;

        assert!(replies[0].starts_with("❌ Error:"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        // Only the failed synchronous attempt, nothing enqueued.
        assert_eq!(api.calls_for("push_urls").len(), 1);
    }
}
