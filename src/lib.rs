//! FinOps Dashboard Client
//!
//! A client for a FinOps analysis backend that:
//! - Polls stock, transaction and compliance metrics on a fixed interval
//! - Renders metrics through an injected view interface
//! - Submits free-text queries to the analysis endpoint
//! - Formats the markdown-subset response into an HTML fragment
//!
//! FLOW:
//! SESSION → POLL (recurring) and, per user action, QUERY → FORMAT → VIEW

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod poller;
pub mod query;
pub mod session;
pub mod view;

pub use error::Result;

// Re-export common types
pub use format::format_response;
pub use models::*;
pub use session::SessionId;
