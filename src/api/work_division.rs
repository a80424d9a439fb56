//! `/work_division?action=...` endpoint family.

use crate::api::handlers::{parse_body, parse_query};
use crate::api::response::{ApiError, ApiResult, ok};
use crate::api::state::AppState;
use crate::core::work_division::WorkDivisionLogic;
use crate::models::work_division::WorkDivisionItem;
use crate::utils::serde_lenient::opt_number;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct WorkDivisionQuery {
    #[serde(default)]
    pub action: String,
}

pub async fn work_division_handler(
    State(state): State<AppState>,
    query: Result<Query<WorkDivisionQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let query = match parse_query(query) {
        Ok(q) => q,
        Err(e) => return e.into_response(),
    };

    let result = match query.action.as_str() {
        "list" => list(&state).await,
        "save_all" => save_all(&state, &body).await,
        "delete" => delete(&state, &body).await,
        other => {
            tracing::warn!(action = other, "unknown work division action");
            Err(ApiError::bad_request("UNKNOWN_ACTION"))
        }
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

async fn list(state: &AppState) -> ApiResult {
    let items = state
        .with_db(WorkDivisionLogic::list)
        .await
        .map_err(|e| ApiError::from_app(e, "LIST_FAILED"))?;
    Ok(ok(json!({ "items": items })))
}

#[derive(Debug, Default, Deserialize)]
struct SaveBody {
    #[serde(default)]
    items: Option<Vec<WorkDivisionItem>>,
}

async fn save_all(state: &AppState, body: &Bytes) -> ApiResult {
    let SaveBody { items } = parse_body(body)?;
    let items = items.ok_or_else(|| ApiError::bad_request("ITEMS_MISSING"))?;

    let saved = state
        .with_db(move |pool| WorkDivisionLogic::save_all(pool, &items))
        .await
        .map_err(|e| ApiError::from_app(e, "SAVE_FAILED"))?;

    tracing::info!(saved, "work division replaced");
    Ok(ok(json!({ "saved": saved })))
}

#[derive(Debug, Default, Deserialize)]
struct DeleteBody {
    #[serde(default, deserialize_with = "opt_number")]
    id: Option<i64>,
}

async fn delete(state: &AppState, body: &Bytes) -> ApiResult {
    let DeleteBody { id } = parse_body(body)?;
    let id = id.ok_or_else(|| ApiError::bad_request("MISSING_FIELDS"))?;

    state
        .with_db(move |pool| WorkDivisionLogic::delete(pool, id))
        .await
        .map_err(|e| ApiError::from_app(e, "DELETE_FAILED"))?;

    tracing::info!(id, "work division item deleted");
    Ok(ok(json!({})))
}
