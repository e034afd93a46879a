//! Typed portfolio data services.
//!
//! Thin fetches over the session client. The shapes are defined by the
//! backend; nothing here adds rules beyond decoding.

use std::sync::Arc;

use folio_domain::{
    DefiKpis, PortfolioOverview, TimelineRange, TimelineSeries, TimelineSnapshot, WalletSummary,
};

use crate::error::ApiResult;
use crate::ports::HttpTransport;
use crate::session::SessionClient;

const OVERVIEW_PATH: &str = "/portfolio/overview";
const DEFI_KPIS_PATH: &str = "/defi/kpis";
const TIMELINE_PATH: &str = "/portfolio/timeline";
const WALLETS_PATH: &str = "/wallets";

/// Portfolio data access for the dashboard.
pub struct PortfolioService<T: HttpTransport> {
    client: Arc<SessionClient<T>>,
}

impl<T: HttpTransport> PortfolioService<T> {
    /// Creates a service over the given session client.
    pub const fn new(client: Arc<SessionClient<T>>) -> Self {
        Self { client }
    }

    /// Aggregate portfolio numbers.
    ///
    /// # Errors
    ///
    /// Propagates session client errors.
    pub async fn overview(&self) -> ApiResult<PortfolioOverview> {
        self.client.get_json(OVERVIEW_PATH).await
    }

    /// DeFi TVL and protocol breakdown.
    ///
    /// # Errors
    ///
    /// Propagates session client errors.
    pub async fn defi_kpis(&self) -> ApiResult<DefiKpis> {
        self.client.get_json(DEFI_KPIS_PATH).await
    }

    /// Balance timeline for the given range, shaped for charting.
    ///
    /// # Errors
    ///
    /// Propagates session client errors.
    pub async fn timeline(&self, range: TimelineRange) -> ApiResult<TimelineSeries> {
        let path = format!("{TIMELINE_PATH}?range={}", range.as_query_value());
        let snapshots: Vec<TimelineSnapshot> = self.client.get_json(&path).await?;
        Ok(TimelineSeries::from_snapshots(snapshots))
    }

    /// The user's tracked wallets.
    ///
    /// # Errors
    ///
    /// Propagates session client errors.
    pub async fn wallets(&self) -> ApiResult<Vec<WalletSummary>> {
        self.client.get_json(WALLETS_PATH).await
    }
}

impl<T: HttpTransport> std::fmt::Debug for PortfolioService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioService").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::{MemoryTokenStorage, SessionExpiredHandler};
    use crate::session::SessionContext;
    use crate::test_support::{RecordingExpiredHandler, ScriptedTransport};
    use folio_domain::{ClientConfig, StoredSession};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn service_with(
        transport: Arc<ScriptedTransport>,
    ) -> PortfolioService<ScriptedTransport> {
        let storage = Arc::new(MemoryTokenStorage::with_session(StoredSession::with_token(
            "tok",
        )));
        let context = Arc::new(SessionContext::new(storage));
        context.restore().await.unwrap();
        let client = Arc::new(SessionClient::new(
            transport,
            context,
            ClientConfig::new("https://api.example.com").unwrap(),
            Arc::new(RecordingExpiredHandler::new()) as Arc<dyn SessionExpiredHandler>,
        ));
        PortfolioService::new(client)
    }

    #[tokio::test]
    async fn overview_decodes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            &json!({"total_value_usd": 12500.0, "change_24h_pct": -1.2, "asset_count": 7}),
        );
        let service = service_with(transport.clone()).await;

        let overview = service.overview().await.unwrap();
        assert_eq!(overview.total_value_usd, 12500.0);
        assert_eq!(overview.asset_count, 7);
        assert_eq!(transport.recorded()[0].path, OVERVIEW_PATH);
    }

    #[tokio::test]
    async fn timeline_is_shaped_for_charting() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            &json!([
                {"timestamp": "2026-02-03T00:00:00Z", "total_value_usd": 2.0},
                {"timestamp": "2026-02-01T00:00:00Z", "total_value_usd": 1.0},
                {"timestamp": "2026-02-02T00:00:00Z", "total_value_usd": 3.0}
            ]),
        );
        let service = service_with(transport.clone()).await;

        let series = service.timeline(TimelineRange::Week).await.unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.max_value(), Some(3.0));
        let first = series.points()[0];
        assert_eq!(first.total_value_usd, 1.0);
        assert_eq!(
            transport.recorded()[0].path,
            "/portfolio/timeline?range=7d"
        );
    }

    #[tokio::test]
    async fn wallets_decode_as_list() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            &json!([{
                "id": uuid::Uuid::now_v7(),
                "address": "0xabc",
                "label": "hot wallet",
                "chain": "ethereum",
                "balance_usd": 10.0
            }]),
        );
        let service = service_with(transport).await;

        let wallets = service.wallets().await.unwrap();
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].address, "0xabc");
    }

    #[tokio::test]
    async fn defi_kpis_decode() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            &json!({
                "tvl_usd": 900.0,
                "positions": [{"protocol": "Aave", "value_usd": 900.0}]
            }),
        );
        let service = service_with(transport).await;

        let kpis = service.defi_kpis().await.unwrap();
        assert_eq!(kpis.positions.len(), 1);
    }
}
