//! Portfolio data transfer objects.
//!
//! Plain shapes mirrored from API responses. No consistency rules beyond
//! field presence; the backend owns the numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate portfolio numbers for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// Total portfolio value in USD.
    pub total_value_usd: f64,
    /// Percentage change over the last 24 hours.
    #[serde(default)]
    pub change_24h_pct: Option<f64>,
    /// Number of distinct assets held.
    #[serde(default)]
    pub asset_count: u32,
}

/// A position in a single DeFi protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolPosition {
    /// Protocol name (e.g. "Aave", "Uniswap").
    pub protocol: String,
    /// Chain the position lives on.
    #[serde(default)]
    pub chain: Option<String>,
    /// Value locked in this protocol, in USD.
    pub value_usd: f64,
}

/// DeFi key performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefiKpis {
    /// Total value locked across protocols, in USD.
    pub tvl_usd: f64,
    /// Per-protocol breakdown.
    #[serde(default)]
    pub positions: Vec<ProtocolPosition>,
}

/// A single balance snapshot from the timeline endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Total portfolio value at that moment, in USD.
    pub total_value_usd: f64,
}

/// A tracked wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Unique wallet identifier.
    pub id: Uuid,
    /// On-chain address.
    pub address: String,
    /// User-assigned label.
    #[serde(default)]
    pub label: Option<String>,
    /// Chain the wallet belongs to.
    pub chain: String,
    /// Current balance in USD.
    pub balance_usd: f64,
}

/// Timeline query range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimelineRange {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    #[default]
    Week,
    /// Last 30 days.
    Month,
    /// Last year.
    Year,
    /// Full history.
    All,
}

impl TimelineRange {
    /// Query-parameter value understood by the backend.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Year => "1y",
            Self::All => "all",
        }
    }
}
