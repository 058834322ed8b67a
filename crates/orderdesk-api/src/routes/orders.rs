//! Routes for the order lifecycle.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use orderdesk_core::order::{Order, OrderDraft};
use orderdesk_store::query::OrderQuery;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for PATCH /{id}/status.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    /// The proposed status value. Defaults to empty when absent so that
    /// the validator reports it rather than the deserializer.
    #[serde(default)]
    pub status: String,
}

/// Response body for GET / — one page of orders plus pagination metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    /// Orders on the requested page.
    pub content: Vec<Order>,
    /// The applied zero-indexed page.
    pub page: usize,
    /// The applied page size.
    pub size: usize,
    /// Total live orders in the store, unfiltered.
    pub total: usize,
    /// Page count over the unfiltered total.
    pub total_pages: usize,
}

/// POST /
#[instrument(skip(state, draft), fields(customer_id = %draft.customer_id))]
async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "handling create_order request");

    let order = state.store.create(draft).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /
async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Json<OrderListResponse> {
    let page = state.store.query(&query).await;
    let total = state.store.count().await;

    Json(OrderListResponse {
        content: page.orders,
        page: page.page,
        size: page.size,
        total,
        total_pages: total_pages(total, page.size),
    })
}

/// GET /{id}
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    match state.store.get(&id).await {
        Some(order) => Ok(Json(order)),
        None => Err(ApiError::OrderNotFound(id)),
    }
}

/// PATCH /{id}/status
#[instrument(skip(state, id, request), fields(id = %id, status = %request.status))]
async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Order>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "handling update_order_status request");

    match state.store.update_status(&id, &request.status).await? {
        Some(order) => Ok(Json(order)),
        None => Err(ApiError::OrderNotFound(id)),
    }
}

/// DELETE /{id}
#[instrument(skip(state, id), fields(id = %id))]
async fn delete_order(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "handling delete_order request");

    state.store.delete(&id).await;

    StatusCode::NO_CONTENT
}

/// Page count for the list metadata: `ceil(total / size)`, reported as 0
/// for a zero page size instead of dividing by zero.
fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 { 0 } else { total.div_ceil(size) }
}

/// Returns the router for the order lifecycle.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).delete(delete_order))
        .route("/{id}/status", patch(update_order_status))
}
