//! View seam for the dashboard
//!
//! The original UI reached into the page directly; here every displayed
//! field is a named setter so the poller and query client can be tested
//! against a fake view.

use crate::models::ChangeDirection;

/// Everything the dashboard renders into, one method per field.
pub trait DashboardView: Send + Sync {
    fn set_session_id(&self, token: &str);

    // Metrics panel
    fn set_stock_price(&self, text: &str);
    fn set_stock_change(&self, text: &str, direction: ChangeDirection);
    fn set_risk_count(&self, count: usize);
    fn set_compliance_score(&self, text: &str);
    fn set_alert_count(&self, count: u64);

    // Query panel
    fn query_text(&self) -> String;
    fn set_query_text(&self, text: &str);
    fn set_loading_visible(&self, visible: bool);
    fn set_results_visible(&self, visible: bool);
    fn set_response_html(&self, html: &str);
    fn set_agents_badge(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);

    /// Blocking user-facing notice (the original used alert()).
    fn notify(&self, message: &str);
}

pub mod recording {
    //! In-memory view double for tests and dry runs.

    use std::sync::Mutex;

    use super::DashboardView;
    use crate::models::ChangeDirection;

    /// Last value written to every field of the view.
    #[derive(Debug, Clone, Default)]
    pub struct ViewState {
        pub session_id: Option<String>,
        pub stock_price: Option<String>,
        pub stock_change: Option<String>,
        pub stock_direction: Option<ChangeDirection>,
        pub risk_count: Option<usize>,
        pub compliance_score: Option<String>,
        pub alert_count: Option<u64>,
        pub query_text: String,
        pub loading_visible: bool,
        pub results_visible: bool,
        pub response_html: Option<String>,
        pub agents_badge: Option<String>,
        pub submit_enabled: bool,
    }

    /// Records every write; reads return the recorded state.
    pub struct RecordingView {
        state: Mutex<ViewState>,
        notices: Mutex<Vec<String>>,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self {
                state: Mutex::new(ViewState {
                    submit_enabled: true,
                    ..ViewState::default()
                }),
                notices: Mutex::new(Vec::new()),
            }
        }

        pub fn state(&self) -> ViewState {
            self.state.lock().unwrap().clone()
        }

        pub fn notices(&self) -> Vec<String> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Default for RecordingView {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DashboardView for RecordingView {
        fn set_session_id(&self, token: &str) {
            self.state.lock().unwrap().session_id = Some(token.to_string());
        }

        fn set_stock_price(&self, text: &str) {
            self.state.lock().unwrap().stock_price = Some(text.to_string());
        }

        fn set_stock_change(&self, text: &str, direction: ChangeDirection) {
            let mut state = self.state.lock().unwrap();
            state.stock_change = Some(text.to_string());
            state.stock_direction = Some(direction);
        }

        fn set_risk_count(&self, count: usize) {
            self.state.lock().unwrap().risk_count = Some(count);
        }

        fn set_compliance_score(&self, text: &str) {
            self.state.lock().unwrap().compliance_score = Some(text.to_string());
        }

        fn set_alert_count(&self, count: u64) {
            self.state.lock().unwrap().alert_count = Some(count);
        }

        fn query_text(&self) -> String {
            self.state.lock().unwrap().query_text.clone()
        }

        fn set_query_text(&self, text: &str) {
            self.state.lock().unwrap().query_text = text.to_string();
        }

        fn set_loading_visible(&self, visible: bool) {
            self.state.lock().unwrap().loading_visible = visible;
        }

        fn set_results_visible(&self, visible: bool) {
            self.state.lock().unwrap().results_visible = visible;
        }

        fn set_response_html(&self, html: &str) {
            self.state.lock().unwrap().response_html = Some(html.to_string());
        }

        fn set_agents_badge(&self, text: &str) {
            self.state.lock().unwrap().agents_badge = Some(text.to_string());
        }

        fn set_submit_enabled(&self, enabled: bool) {
            self.state.lock().unwrap().submit_enabled = enabled;
        }

        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }
}
