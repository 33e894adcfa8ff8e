use std::sync::{Arc, Mutex};

use finops_dashboard_client::{
    api::HttpFinancialApi,
    config::DashboardConfig,
    models::ChangeDirection,
    poller::DashboardPoller,
    query::QueryClient,
    session::SessionId,
    view::DashboardView,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Console rendition of the dashboard page: every field update is printed
/// as a labeled line, and the query text is whatever was last typed.
struct ConsoleView {
    query_text: Mutex<String>,
}

impl ConsoleView {
    fn new() -> Self {
        Self {
            query_text: Mutex::new(String::new()),
        }
    }
}

impl DashboardView for ConsoleView {
    fn set_session_id(&self, token: &str) {
        println!("session        : {}", token);
    }

    fn set_stock_price(&self, text: &str) {
        println!("stock price    : {}", text);
    }

    fn set_stock_change(&self, text: &str, direction: ChangeDirection) {
        println!("stock change   : {} ({})", text, direction.as_class());
    }

    fn set_risk_count(&self, count: usize) {
        println!("high-risk txns : {}", count);
    }

    fn set_compliance_score(&self, text: &str) {
        println!("SOX compliance : {}", text);
    }

    fn set_alert_count(&self, count: u64) {
        println!("active alerts  : {}", count);
    }

    fn query_text(&self) -> String {
        self.query_text.lock().unwrap().clone()
    }

    fn set_query_text(&self, text: &str) {
        *self.query_text.lock().unwrap() = text.to_string();
    }

    fn set_loading_visible(&self, visible: bool) {
        if visible {
            println!("analyzing...");
        }
    }

    fn set_results_visible(&self, _visible: bool) {}

    fn set_response_html(&self, html: &str) {
        println!("\n=== ANALYSIS ===\n{}\n", html);
    }

    fn set_agents_badge(&self, text: &str) {
        println!("({})", text);
    }

    fn set_submit_enabled(&self, _enabled: bool) {}

    fn notify(&self, message: &str) {
        eprintln!("!! {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = DashboardConfig::from_env()?;
    info!("FinOps Dashboard Client");
    info!("Backend: {}", config.base_url);

    let session = SessionId::generate();
    let api = Arc::new(HttpFinancialApi::new(&config.base_url)?);
    let view: Arc<dyn DashboardView> = Arc::new(ConsoleView::new());

    view.set_session_id(session.as_str());

    // Recurring metrics poller; each tick runs independently.
    let poller = Arc::new(DashboardPoller::new(
        api.clone(),
        view.clone(),
        config.symbol.clone(),
    ));
    tokio::spawn(poller.run(config.poll_interval));

    let query_client = QueryClient::new(api, view.clone(), session);

    println!("Type a query and press Enter (/clear resets, Ctrl-D quits).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/clear" {
            query_client.clear();
            continue;
        }
        view.set_query_text(&line);
        query_client.submit().await;
    }

    Ok(())
}
