use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use stockfolio_core::{
    cache::PortfolioCache,
    chat::{ChatService, ChatServiceTrait},
    health::{HealthService, HealthServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    purchases::{StockPurchaseService, StockPurchaseServiceTrait},
};
use stockfolio_market_data::{
    IndianStockApiProvider, StockDataProvider, SymbolSearchProvider, YahooSearchProvider,
};
use stockfolio_storage_sqlite::{db, purchases::StockPurchaseRepository};

pub struct AppState {
    pub purchase_service: Arc<dyn StockPurchaseServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub chat_service: Arc<dyn ChatServiceTrait>,
    pub health_service: Arc<dyn HealthServiceTrait>,
    pub search_provider: Arc<dyn SymbolSearchProvider>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::write_actor::spawn_writer((*pool).clone());

    // One cache instance backs the purchase list and the per-stock payloads.
    let cache = Arc::new(PortfolioCache::new());

    let purchase_repository = Arc::new(StockPurchaseRepository::new(pool.clone(), writer));
    let purchase_service: Arc<dyn StockPurchaseServiceTrait> = Arc::new(
        StockPurchaseService::new(purchase_repository.clone(), cache.clone()),
    );

    let details_provider: Arc<dyn StockDataProvider> =
        Arc::new(IndianStockApiProvider::new(config.stock_api_key.clone()));
    let search_provider: Arc<dyn SymbolSearchProvider> = Arc::new(YahooSearchProvider::new());

    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        purchase_service.clone(),
        purchase_repository.clone(),
        details_provider,
        cache.clone(),
    ));

    let chat_service: Arc<dyn ChatServiceTrait> = Arc::new(ChatService::new());

    let health_service: Arc<dyn HealthServiceTrait> = Arc::new(HealthService::new(
        purchase_repository,
        cache,
        config.environment.clone(),
    ));

    Ok(Arc::new(AppState {
        purchase_service,
        portfolio_service,
        chat_service,
        health_service,
        search_provider,
        db_path,
    }))
}
