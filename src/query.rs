//! Query submission client
//!
//! Drives one analysis request end to end: validate the query text, toggle
//! the loading state, POST to the backend, format the response and write it
//! into the view. The disabled submit control is advisory only; nothing
//! stops a second programmatic submission from racing the first.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::FinancialApi;
use crate::format::format_response;
use crate::session::SessionId;
use crate::view::DashboardView;

pub struct QueryClient {
    api: Arc<dyn FinancialApi>,
    view: Arc<dyn DashboardView>,
    session: SessionId,
}

impl QueryClient {
    pub fn new(api: Arc<dyn FinancialApi>, view: Arc<dyn DashboardView>, session: SessionId) -> Self {
        Self { api, view, session }
    }

    /// Submit the view's current query text.
    ///
    /// Loading is hidden and the submit control re-enabled on every exit
    /// path except the empty-query bail-out, which never touched them.
    pub async fn submit(&self) {
        let query = self.view.query_text().trim().to_string();

        if query.is_empty() {
            self.view.notify("Please enter a query");
            return;
        }

        self.view.set_loading_visible(true);
        self.view.set_results_visible(false);
        self.view.set_submit_enabled(false);

        info!(session = %self.session, "submitting analysis query");

        match self.api.analyze(&query, self.session.as_str()).await {
            Ok(data) if data.success => {
                let html = format_response(data.response.as_deref().unwrap_or(""));
                self.view.set_response_html(&html);
                self.view
                    .set_agents_badge(&format!("{} agents invoked", data.agents_invoked_count()));
                self.view.set_results_visible(true);
            }
            Ok(data) => {
                let message = data
                    .error
                    .unwrap_or_else(|| "Unknown error occurred".to_string());
                warn!("analysis rejected by backend: {}", message);
                self.view.notify(&format!("Error: {}", message));
            }
            Err(e) => {
                warn!("analysis request failed: {}", e);
                self.view.notify(&format!("Error: {}", e));
            }
        }

        self.view.set_loading_visible(false);
        self.view.set_submit_enabled(true);
    }

    /// Reset the query text and hide the results area. Does not cancel an
    /// in-flight request.
    pub fn clear(&self) {
        self.view.set_query_text("");
        self.view.set_results_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::models::{
        AnalyzeResponse, ComplianceSnapshot, StockSnapshot, TransactionRecord,
    };
    use crate::view::recording::RecordingView;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted analyze endpoint; metrics fetches are never called here.
    struct ScriptedApi {
        outcome: crate::Result<AnalyzeResponse>,
        calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn success(response: &str, agents: &[&str]) -> Self {
            Self {
                outcome: Ok(AnalyzeResponse {
                    success: true,
                    response: Some(response.to_string()),
                    agents_invoked: Some(agents.iter().map(|a| a.to_string()).collect()),
                    error: None,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejection(error: Option<&str>) -> Self {
            Self {
                outcome: Ok(AnalyzeResponse {
                    success: false,
                    response: None,
                    agents_invoked: None,
                    error: error.map(|e| e.to_string()),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn transport_failure(message: &str) -> Self {
            Self {
                outcome: Err(DashboardError::BackendError(message.to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl FinancialApi for ScriptedApi {
        async fn fetch_stock(&self, _symbol: &str) -> crate::Result<StockSnapshot> {
            unimplemented!("not used by the query client")
        }

        async fn fetch_transactions(&self) -> crate::Result<Vec<TransactionRecord>> {
            unimplemented!("not used by the query client")
        }

        async fn fetch_compliance(&self) -> crate::Result<ComplianceSnapshot> {
            unimplemented!("not used by the query client")
        }

        async fn analyze(&self, _query: &str, _session_id: &str) -> crate::Result<AnalyzeResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(resp) => Ok(resp.clone()),
                Err(DashboardError::BackendError(m)) => {
                    Err(DashboardError::BackendError(m.clone()))
                }
                Err(_) => unreachable!(),
            }
        }
    }

    fn client_with(api: ScriptedApi) -> (QueryClient, Arc<ScriptedApi>, Arc<RecordingView>) {
        let api = Arc::new(api);
        let view = Arc::new(RecordingView::new());
        let client = QueryClient::new(api.clone(), view.clone(), SessionId::generate());
        (client, api, view)
    }

    #[tokio::test]
    async fn test_empty_query_sends_nothing() {
        let (client, api, view) = client_with(ScriptedApi::success("ok", &[]));
        view.set_query_text("   \n\t ");

        client.submit().await;

        assert_eq!(api.call_count(), 0);
        assert_eq!(view.notices(), vec!["Please enter a query".to_string()]);
        assert!(view.state().submit_enabled);
        assert!(!view.state().loading_visible);
    }

    #[tokio::test]
    async fn test_successful_query_renders_formatted_response() {
        let (client, api, view) = client_with(ScriptedApi::success(
            "## Findings\\n- **2** flagged transfers",
            &["fraud", "risk", "compliance"],
        ));
        view.set_query_text("any suspicious transfers today?");

        client.submit().await;

        assert_eq!(api.call_count(), 1);
        let state = view.state();
        assert_eq!(
            state.response_html.as_deref(),
            Some("<h2>Findings</h2><br><ul><li><strong>2</strong> flagged transfers</li></ul>")
        );
        assert_eq!(state.agents_badge.as_deref(), Some("3 agents invoked"));
        assert!(state.results_visible);
        assert!(!state.loading_visible);
        assert!(state.submit_enabled);
        assert!(view.notices().is_empty());
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_error() {
        let (client, _api, view) = client_with(ScriptedApi::rejection(Some("Query is required")));
        view.set_query_text("hello");

        client.submit().await;

        assert_eq!(view.notices(), vec!["Error: Query is required".to_string()]);
        assert!(!view.state().results_visible);
        assert!(!view.state().loading_visible);
        assert!(view.state().submit_enabled);
    }

    #[tokio::test]
    async fn test_backend_rejection_without_message_uses_fallback() {
        let (client, _api, view) = client_with(ScriptedApi::rejection(None));
        view.set_query_text("hello");

        client.submit().await;

        assert_eq!(
            view.notices(),
            vec!["Error: Unknown error occurred".to_string()]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_restores_controls() {
        let (client, _api, view) = client_with(ScriptedApi::transport_failure("timeout"));
        view.set_query_text("hello");

        client.submit().await;

        let notices = view.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("timeout"));
        assert!(!view.state().loading_visible);
        assert!(view.state().submit_enabled);
    }

    #[tokio::test]
    async fn test_clear_resets_query_and_results() {
        let (client, _api, view) = client_with(ScriptedApi::success("done", &[]));
        view.set_query_text("pending question");
        view.set_results_visible(true);

        client.clear();

        assert_eq!(view.state().query_text, "");
        assert!(!view.state().results_visible);
    }

    #[tokio::test]
    async fn test_success_without_agents_list() {
        let (client, _api, view) = client_with(ScriptedApi {
            outcome: Ok(AnalyzeResponse {
                success: true,
                response: Some("fine".to_string()),
                agents_invoked: None,
                error: None,
            }),
            calls: AtomicUsize::new(0),
        });
        view.set_query_text("status?");

        client.submit().await;

        assert_eq!(view.state().agents_badge.as_deref(), Some("0 agents invoked"));
        assert!(view.state().results_visible);
    }
}
