//! `/api?action=...` endpoint family: entries, project configuration and login.

use crate::api::response::{ApiError, ApiResult, ok};
use crate::api::state::AppState;
use crate::core::auth;
use crate::core::entries::{EntriesLogic, EntryFilter};
use crate::core::projects::ProjectsLogic;
use crate::errors::AppError;
use crate::models::entry::EntryInput;
use crate::models::iso_week::{IsoWeek, MonthKey};
use crate::models::project::ProjectsConfig;
use crate::utils::date;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Debug, Default, Deserialize)]
pub struct ApiQuery {
    #[serde(default)]
    pub action: String,
    pub month: Option<String>,
    pub worker: Option<String>,
    pub week: Option<String>,
}

pub async fn api_handler(
    State(state): State<AppState>,
    query: Result<Query<ApiQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let query = match parse_query(query) {
        Ok(q) => q,
        Err(e) => return e.into_response(),
    };

    let result = match query.action.as_str() {
        "login" => login(&state, &body).await,
        "list_entries" => list_entries(&state, &query).await,
        "save_all_entries" => save_all_entries(&state, &body).await,
        "delete_entry" => delete_entry(&state, &body).await,
        "get_projects_config" => get_projects_config(&state).await,
        "save_projects_config" => save_projects_config(&state, &body).await,
        "delete_project" => delete_project(&state, &body).await,
        "projects_for_week" => projects_for_week(&state, &query).await,
        "month_summary" => month_summary(&state, &query).await,
        other => {
            tracing::warn!(action = other, "unknown api action");
            Err(ApiError::bad_request("UNKNOWN_ACTION"))
        }
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

/// Unwrap the query string, or answer `INVALID_QUERY` in the JSON contract.
pub(crate) fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query.map(|Query(q)| q).map_err(|e| {
        tracing::warn!(error = %e, "rejected query string");
        ApiError::bad_request("INVALID_QUERY")
    })
}

/// Decode a JSON body; an empty body reads as `{}`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body[..]
    };
    serde_json::from_slice(raw).map_err(|e| {
        tracing::warn!(error = %e, "rejected request body");
        ApiError::bad_request("INVALID_JSON")
    })
}

fn parse_opt<T: std::str::FromStr<Err = AppError>>(raw: &Option<String>) -> Result<Option<T>, ApiError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e| ApiError::from_app(e, "BAD_REQUEST")),
    }
}

// ---------------------------------------------------------------------------
// login
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct LoginBody {
    #[serde(default)]
    password: Option<String>,
}

async fn login(state: &AppState, body: &Bytes) -> ApiResult {
    let LoginBody { password } = parse_body(body)?;
    let password = password.unwrap_or_default();
    let hash = state.pass_hash().map(str::to_string);

    let verified = tokio::task::spawn_blocking(move || {
        auth::verify_password(&password, hash.as_deref())
    })
    .await
    .map_err(|e| ApiError::from_app(AppError::Server(e.to_string()), "LOGIN_FAILED"))?
    .map_err(|e| ApiError::from_app(e, "LOGIN_FAILED"))?;

    if verified {
        tracing::info!("login succeeded");
        Ok(ok(json!({})))
    } else {
        tracing::warn!("login rejected");
        Err(ApiError::new(StatusCode::UNAUTHORIZED, "INVALID_PASSWORD"))
    }
}

// ---------------------------------------------------------------------------
// entries
// ---------------------------------------------------------------------------

async fn list_entries(state: &AppState, query: &ApiQuery) -> ApiResult {
    let filter = EntryFilter {
        month: parse_opt::<MonthKey>(&query.month)?,
        worker: query
            .worker
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string),
    };

    let entries = state
        .with_db(move |pool| EntriesLogic::list(pool, &filter))
        .await
        .map_err(|e| ApiError::from_app(e, "LIST_FAILED"))?;

    Ok(ok(json!({ "entries": entries })))
}

#[derive(Debug, Default, Deserialize)]
struct SaveEntriesBody {
    #[serde(default)]
    entries: Option<Vec<EntryInput>>,
}

async fn save_all_entries(state: &AppState, body: &Bytes) -> ApiResult {
    let SaveEntriesBody { entries } = parse_body(body)?;
    let inputs = entries.ok_or_else(|| ApiError::bad_request("ENTRIES_MISSING"))?;

    let entries =
        EntriesLogic::validate(inputs).map_err(|e| ApiError::from_app(e, "SAVE_FAILED"))?;

    let saved = state
        .with_db(move |pool| EntriesLogic::save_all(pool, &entries))
        .await
        .map_err(|e| ApiError::from_app(e, "SAVE_FAILED"))?;

    tracing::info!(saved, "entries replaced");
    Ok(ok(json!({ "saved": saved })))
}

#[derive(Debug, Default, Deserialize)]
struct DeleteEntryBody {
    #[serde(default, deserialize_with = "crate::utils::serde_lenient::opt_text")]
    id: Option<String>,
}

async fn delete_entry(state: &AppState, body: &Bytes) -> ApiResult {
    let DeleteEntryBody { id } = parse_body(body)?;
    let id = id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("MISSING_FIELDS"))?;

    let target = id.clone();
    state
        .with_db(move |pool| EntriesLogic::delete(pool, &target))
        .await
        .map_err(|e| ApiError::from_app(e, "DELETE_FAILED"))?;

    tracing::info!(id = %id, "entry deleted");
    Ok(ok(json!({})))
}

async fn month_summary(state: &AppState, query: &ApiQuery) -> ApiResult {
    let month = parse_opt::<MonthKey>(&query.month)?.unwrap_or_else(date::current_month);

    let summary = state
        .with_db(move |pool| EntriesLogic::summary(pool, month))
        .await
        .map_err(|e| ApiError::from_app(e, "SUMMARY_FAILED"))?;

    Ok(ok(json!({
        "month": summary.month,
        "rows": summary.rows,
        "total": summary.total,
    })))
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

async fn get_projects_config(state: &AppState) -> ApiResult {
    let cfg = state
        .with_db(ProjectsLogic::load_config)
        .await
        .map_err(|e| ApiError::from_app(e, "LOAD_PROJECTS_FAILED"))?;

    Ok(ok(json!({
        "projectsByCompany": cfg.projects_by_company,
        "projectWorkers": cfg.project_workers,
    })))
}

/// Accepts the document the admin view sends: `projectsByCompany` must be an
/// object. Lists that are not arrays are skipped and a missing or malformed
/// `projectWorkers` counts as "no worker assignments".
fn projects_config_from_body(body: &Bytes) -> Result<ProjectsConfig, ApiError> {
    let value: Value = parse_body(body)?;
    let Value::Object(map) = &value else {
        return Err(ApiError::bad_request("INVALID_JSON"));
    };
    if !matches!(map.get("projectsByCompany"), Some(Value::Object(_))) {
        return Err(ApiError::bad_request("projectsByCompany missing"));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "malformed projects config");
        ApiError::bad_request("INVALID_JSON")
    })
}

async fn save_projects_config(state: &AppState, body: &Bytes) -> ApiResult {
    let cfg = projects_config_from_body(body)?;

    state
        .with_db(move |pool| ProjectsLogic::save_config(pool, &cfg))
        .await
        .map_err(|e| ApiError::from_app(e, "SAVE_PROJECTS_FAILED"))?;

    tracing::info!("projects config replaced");
    Ok(ok(json!({})))
}

#[derive(Debug, Default, Deserialize)]
struct DeleteProjectBody {
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    project: Option<String>,
}

async fn delete_project(state: &AppState, body: &Bytes) -> ApiResult {
    let DeleteProjectBody { company, project } = parse_body(body)?;
    let company = company.unwrap_or_default();
    let project = project.unwrap_or_default();

    let removed = state
        .with_db(move |pool| ProjectsLogic::delete(pool, &company, &project))
        .await
        .map_err(|e| ApiError::from_app(e, "DELETE_FAILED"))?;

    tracing::info!(entries_removed = removed, "project deleted");
    Ok(ok(json!({ "entriesRemoved": removed })))
}

async fn projects_for_week(state: &AppState, query: &ApiQuery) -> ApiResult {
    let week = parse_opt::<IsoWeek>(&query.week)?
        .ok_or_else(|| ApiError::bad_request("MISSING_FIELDS"))?;
    let worker = query.worker.clone();

    let projects = state
        .with_db(move |pool| ProjectsLogic::projects_for_week(pool, &week, worker.as_deref()))
        .await
        .map_err(|e| ApiError::from_app(e, "LOAD_PROJECTS_FAILED"))?;

    Ok(ok(json!({
        "week": week,
        "monday": week.monday(),
        "month": week.month_key(),
        "projects": projects,
    })))
}
