//! Dashboard metrics poller
//!
//! Refreshes the four displayed metrics from three independent backend
//! fetches. Any failure in a cycle is logged and the cycle ends; fields
//! already written stay on screen. Cycles are spawned per tick and are not
//! mutually excluded, so a slow cycle and the next one may overlap with
//! last-resolved-wins per field.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::FinancialApi;
use crate::models::ChangeDirection;
use crate::view::DashboardView;

pub struct DashboardPoller {
    api: Arc<dyn FinancialApi>,
    view: Arc<dyn DashboardView>,
    symbol: String,
}

impl DashboardPoller {
    pub fn new(api: Arc<dyn FinancialApi>, view: Arc<dyn DashboardView>, symbol: String) -> Self {
        Self { api, view, symbol }
    }

    /// One refresh cycle. Errors are swallowed here; partial updates stand.
    pub async fn refresh(&self) {
        if let Err(e) = self.refresh_inner().await {
            warn!("Error loading dashboard: {}", e);
        }
    }

    async fn refresh_inner(&self) -> crate::Result<()> {
        let stock = self.api.fetch_stock(&self.symbol).await?;
        self.view.set_stock_price(&format!("${:.2}", stock.price));
        self.view.set_stock_change(
            stock.change_percent.as_deref().unwrap_or("N/A"),
            ChangeDirection::from_change(stock.change),
        );

        let transactions = self.api.fetch_transactions().await?;
        let high_risk = transactions.iter().filter(|t| t.risk_score > 0.7).count();
        self.view.set_risk_count(high_risk);

        let compliance = self.api.fetch_compliance().await?;
        self.view.set_compliance_score(&format!(
            "{:.1}%",
            compliance.sox_compliance.compliance_score
        ));
        self.view
            .set_alert_count(compliance.aml_monitoring.suspicious_activities);

        debug!(symbol = %self.symbol, high_risk, "dashboard refreshed");
        Ok(())
    }

    /// Refresh immediately, then on a fixed timer. Each tick spawns its own
    /// task; a slow cycle does not delay or exclude the next one.
    pub async fn run(self: Arc<Self>, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let poller = Arc::clone(&self);
            tokio::spawn(async move {
                poller.refresh().await;
            });
        }
    }
}
