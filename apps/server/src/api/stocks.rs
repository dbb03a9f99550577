use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use stockfolio_core::portfolio::{PortfolioSummary, SectorHoldings, StockMetrics};
use stockfolio_core::purchases::{NewStockPurchase, StockPurchase, StockPurchaseUpdate};
use stockfolio_market_data::SearchResult;

async fn list_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<StockPurchase>>> {
    let purchases = state.purchase_service.get_purchases().await?;
    Ok(Json(purchases))
}

async fn create_stock(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStockPurchase>,
) -> ApiResult<(StatusCode, Json<StockPurchase>)> {
    let created = state.purchase_service.create_purchase(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_stock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StockPurchaseUpdate>,
) -> ApiResult<Json<StockPurchase>> {
    let updated = state.purchase_service.update_purchase(&id, payload).await?;
    Ok(Json(updated))
}

async fn delete_stock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StockPurchase>> {
    let deleted = state.purchase_service.delete_purchase(&id).await?;
    Ok(Json(deleted))
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search_symbols(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<SearchResult>>> {
    let query = params.query.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'query' is required".to_string(),
        ));
    }
    let results = state.search_provider.search(query).await?;
    Ok(Json(results))
}

async fn get_sector_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SectorHoldings>> {
    let holdings = state.portfolio_service.get_sector_holdings().await?;
    Ok(Json(holdings))
}

async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.portfolio_service.get_portfolio_summary()?;
    Ok(Json(summary))
}

async fn get_stock_metrics(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StockMetrics>> {
    let metrics = state.portfolio_service.get_stock_metrics(&name).await?;
    Ok(Json(metrics))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks).post(create_stock))
        .route("/stocks/search", get(search_symbols))
        .route("/stocks/sectors", get(get_sector_holdings))
        .route("/stocks/portfolio/summary", get(get_portfolio_summary))
        .route("/stocks/metrics/{name}", get(get_stock_metrics))
        .route("/stocks/{id}", put(update_stock).delete(delete_stock))
}
