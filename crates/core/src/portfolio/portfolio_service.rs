//! Portfolio aggregation service.
//!
//! Builds sector-grouped views of the ledger by fanning out one market data
//! lookup per holding. Lookups go through the per-stock cache first; a
//! provider failure degrades that one holding to its ledger fields instead of
//! failing the whole request.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use stockfolio_market_data::{MarketDataError, StockDataProvider, StockDetails, TechnicalEntry};

use crate::cache::PortfolioCache;
use crate::errors::{Error, Result};
use crate::portfolio::portfolio_model::{
    PortfolioSummary, SectorHoldings, StockMetrics, StockSnapshot,
};
use crate::portfolio::portfolio_traits::PortfolioServiceTrait;
use crate::purchases::{
    StockPurchase, StockPurchaseRepositoryTrait, StockPurchaseServiceTrait,
};

pub struct PortfolioService {
    purchase_service: Arc<dyn StockPurchaseServiceTrait>,
    purchase_repository: Arc<dyn StockPurchaseRepositoryTrait>,
    details_provider: Arc<dyn StockDataProvider>,
    cache: Arc<PortfolioCache>,
}

impl PortfolioService {
    pub fn new(
        purchase_service: Arc<dyn StockPurchaseServiceTrait>,
        purchase_repository: Arc<dyn StockPurchaseRepositoryTrait>,
        details_provider: Arc<dyn StockDataProvider>,
        cache: Arc<PortfolioCache>,
    ) -> Self {
        Self {
            purchase_service,
            purchase_repository,
            details_provider,
            cache,
        }
    }

    /// Cache-aside lookup of the market data payload for one stock name.
    async fn load_details(&self, name: &str) -> std::result::Result<StockDetails, MarketDataError> {
        if let Some(details) = self.cache.get_stock_details(name).await {
            debug!("Serving market data for {} from cache", name);
            return Ok(details);
        }
        let details = self.details_provider.get_stock_details(name).await?;
        self.cache.set_stock_details(name, details.clone()).await;
        Ok(details)
    }

    /// Build the snapshot for one holding, degrading to ledger fields when
    /// the provider fails.
    async fn load_snapshot(&self, purchase: StockPurchase) -> StockSnapshot {
        match self.load_details(&purchase.name).await {
            Ok(details) => merge_snapshot(&purchase, Some(details)),
            Err(e) => {
                warn!("Market data lookup failed for {}: {}", purchase.name, e);
                merge_snapshot(&purchase, None)
            }
        }
    }
}

/// Pick the traded price matching the holding's exchange. NSE is the default.
fn select_price(details: &StockDetails, exchange: Option<&str>) -> Option<Decimal> {
    match exchange {
        Some("BSE") => details.price_bse,
        _ => details.price_nse,
    }
}

/// Render the first technical row as a display string.
fn format_latest_earnings(technical_data: &[TechnicalEntry]) -> Option<String> {
    let entry = technical_data.first()?;
    let days = entry
        .days
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let bse = entry.bse_price.as_deref().unwrap_or("N/A");
    let nse = entry.nse_price.as_deref().unwrap_or("N/A");
    Some(format!("{} days - BSE: {}, NSE: {}", days, bse, nse))
}

/// Merge a ledger entry with a provider payload into one snapshot.
///
/// Ledger fields always win where both sides carry a value; the provider
/// fills the market data fields and, when present, a more specific exchange
/// code. Passing `None` yields a ledger-only snapshot.
fn merge_snapshot(purchase: &StockPurchase, details: Option<StockDetails>) -> StockSnapshot {
    let exchange = purchase.stock_exchange.as_deref();
    let current_price = details.as_ref().and_then(|d| select_price(d, exchange));

    let StockDetails {
        industry,
        percent_change,
        exchange_code_bse,
        exchange_code_nse,
        recent_news,
        technical_data,
        ..
    } = details.unwrap_or_default();

    let stock_code = match exchange {
        Some("BSE") => exchange_code_bse,
        _ => exchange_code_nse,
    }
    .unwrap_or_else(|| purchase.stock_code.clone());

    let sector = if purchase.sector.trim().is_empty() {
        industry.unwrap_or_default()
    } else {
        purchase.sector.clone()
    };

    let latest_earnings = format_latest_earnings(&technical_data);
    let present_value = current_price.unwrap_or_default() * Decimal::from(purchase.quantity);

    StockSnapshot {
        id: purchase.id.clone(),
        name: purchase.name.clone(),
        sector,
        stock_code,
        stock_exchange: purchase.stock_exchange.clone(),
        purchase_price: purchase.purchase_price,
        quantity: purchase.quantity,
        current_price,
        pe_ratio: percent_change,
        recent_news,
        stock_technical_data: technical_data,
        latest_earnings,
        present_value,
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_sector_holdings(&self) -> Result<SectorHoldings> {
        let purchases = self.purchase_service.get_purchases().await?;
        if purchases.is_empty() {
            return Err(Error::NotFound("No stocks found in portfolio".to_string()));
        }

        let snapshots = join_all(
            purchases
                .into_iter()
                .map(|purchase| self.load_snapshot(purchase)),
        )
        .await;

        let mut groups: SectorHoldings = HashMap::new();
        for snapshot in snapshots {
            groups
                .entry(snapshot.sector.clone())
                .or_default()
                .push(snapshot);
        }

        Ok(groups)
    }

    fn get_portfolio_summary(&self) -> Result<PortfolioSummary> {
        let purchases = self.purchase_repository.load_purchases()?;

        let mut summary = PortfolioSummary::default();
        for purchase in &purchases {
            summary.total_investment += purchase.purchase_price;
            summary.total_quantity += i64::from(purchase.quantity);

            let totals = summary
                .sector_wise
                .entry(purchase.sector.clone())
                .or_default();
            totals.investment += purchase.purchase_price;
            totals.quantity += i64::from(purchase.quantity);
        }

        Ok(summary)
    }

    async fn get_stock_metrics(&self, stock_name: &str) -> Result<StockMetrics> {
        let purchases = self.purchase_service.get_purchases().await?;
        let holding = purchases
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(stock_name));

        // Held stocks reuse their cached payload; other names are keyed as given.
        let cache_name = holding
            .map(|p| p.name.clone())
            .unwrap_or_else(|| stock_name.to_string());
        let details = self.load_details(&cache_name).await?;

        let (exchange, quantity) = match holding {
            Some(purchase) => (purchase.stock_exchange.clone(), purchase.quantity),
            None => (None, 0),
        };

        let current_price = select_price(&details, exchange.as_deref());

        Ok(StockMetrics {
            name: stock_name.to_string(),
            pe_ratio: details.percent_change,
            current_price,
            latest_earnings: format_latest_earnings(&details.technical_data),
            present_value: current_price.unwrap_or_default() * Decimal::from(quantity),
        })
    }
}
