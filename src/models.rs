//! Core data models for the dashboard client

use serde::{Deserialize, Serialize};

//
// ================= Dashboard Metrics =================
//

/// Snapshot of a single stock quote.
///
/// The backend may omit fields or attach extras (volume, market cap, ...);
/// only price, change and change_percent are rendered, everything else is
/// ignored. Missing numbers default to 0 so a degraded backend still renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSnapshot {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: Option<String>,
}

/// A single transaction as reported by the backend.
///
/// The client only looks at risk_score; the rest of the record is opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub risk_score: f64,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Compliance metrics, nested the way the backend reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    #[serde(default)]
    pub sox_compliance: SoxCompliance,
    #[serde(default)]
    pub aml_monitoring: AmlMonitoring,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoxCompliance {
    #[serde(default)]
    pub compliance_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmlMonitoring {
    #[serde(default)]
    pub suspicious_activities: u64,
}

//
// ================= Analyze I/O =================
//

/// POST body for the analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
    pub session_id: String,
}

/// Structured response from the analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub agents_invoked: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    /// Number of agents the backend reports having invoked.
    pub fn agents_invoked_count(&self) -> usize {
        self.agents_invoked.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Direction of a stock price change, used as a style hint by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    /// Zero counts as positive, matching the dashboard's display rule.
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            ChangeDirection::Positive
        } else {
            ChangeDirection::Negative
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            ChangeDirection::Positive => "positive",
            ChangeDirection::Negative => "negative",
        }
    }
}
