use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use portfolio_tracker_core::Holding;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceResponse {
    total_balance: Decimal,
    last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped_symbols: Option<Vec<String>>,
}

async fn get_holdings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Holding>>> {
    let holdings = state.holdings_service.list_holdings(&user_id).await?;
    Ok(Json(holdings))
}

/// Last persisted snapshot, without recomputing anything.
async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<BalanceResponse>> {
    let user = state
        .store
        .get_user(&user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No document for user {user_id}")))?;

    match (user.total_balance, user.last_updated) {
        (Some(total_balance), Some(last_updated)) => Ok(Json(BalanceResponse {
            total_balance,
            last_updated,
            skipped_symbols: None,
        })),
        _ => Err(ApiError::NotFound(format!(
            "No balance snapshot for user {user_id}"
        ))),
    }
}

async fn recalculate(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<BalanceResponse>> {
    let report = state.balance_service.recalculate(&user_id).await?;
    Ok(Json(BalanceResponse {
        total_balance: report.snapshot.total_balance,
        last_updated: report.snapshot.last_updated,
        skipped_symbols: Some(report.skipped_symbols),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/{user_id}/holdings", get(get_holdings))
        .route("/portfolio/{user_id}/balance", get(get_balance))
        .route("/portfolio/{user_id}/recalculate", post(recalculate))
}
