//! HTTP client for the dashboard backend
//!
//! One trait per the backend's surface so the poller and query client can be
//! exercised against a mock. Uses a long-lived reqwest::Client for
//! connection pooling.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::DashboardError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ComplianceSnapshot, StockSnapshot, TransactionRecord};
use crate::Result;

/// Backend surface the dashboard depends on.
#[async_trait::async_trait]
pub trait FinancialApi: Send + Sync {
    async fn fetch_stock(&self, symbol: &str) -> Result<StockSnapshot>;
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>>;
    async fn fetch_compliance(&self) -> Result<ComplianceSnapshot>;
    async fn analyze(&self, query: &str, session_id: &str) -> Result<AnalyzeResponse>;
}

/// Reusable backend client (connection-pooled)
pub struct HttpFinancialApi {
    client: Client,
    base_url: String,
}

impl HttpFinancialApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Dashboard API request failed for {}: {}", path_and_query, e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::BackendError(format!(
                "Dashboard API returned {} for {}: {}",
                status, path_and_query, body
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl FinancialApi for HttpFinancialApi {
    async fn fetch_stock(&self, symbol: &str) -> Result<StockSnapshot> {
        self.get_json(&format!("/api/financial-data?type=stock&symbol={}", symbol))
            .await
    }

    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>> {
        self.get_json("/api/financial-data?type=transactions").await
    }

    async fn fetch_compliance(&self) -> Result<ComplianceSnapshot> {
        self.get_json("/api/financial-data?type=compliance").await
    }

    async fn analyze(&self, query: &str, session_id: &str) -> Result<AnalyzeResponse> {
        let url = format!("{}/api/analyze", self.base_url);
        let body = AnalyzeRequest {
            query: query.to_string(),
            session_id: session_id.to_string(),
        };

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Analyze request failed: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::BackendError(format!(
                "Analyze endpoint returned {}: {}",
                status, body
            )));
        }

        Ok(response.json::<AnalyzeResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpFinancialApi::new("http://localhost:8080/").unwrap();
        assert_eq!(api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_analyze_request_serialization() {
        let body = AnalyzeRequest {
            query: "show high risk transactions".to_string(),
            session_id: "session-123".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"query\":\"show high risk transactions\""));
        assert!(json.contains("\"session_id\":\"session-123\""));
    }
}
