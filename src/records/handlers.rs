use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::{AdminUser, AuthUser},
    error::ApiResult,
    records::{
        dto::{RecordPayload, RecordResponse},
        repo_types::MedicationRecord,
    },
    state::AppState,
};

pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/medication-records", post(create_record).get(list_records))
        .route("/medication-records/recent", get(recent_records))
        .route("/medication-records/:id", put(update_record))
        .route("/admin/medication-records", get(list_all_records))
}

/// Log the doses taken on a given date.
#[utoipa::path(
    post,
    path = "/medication-records",
    request_body = RecordPayload,
    responses(
        (status = 201, description = "Record created", body = RecordResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "records"
)]
#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_record(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<RecordPayload>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let record = MedicationRecord::create(&state.db, user.id, &payload.into()).await?;
    info!(record_id = %record.id, date = %record.date, "record created");
    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))))
}

/// List every record owned by the acting user.
#[utoipa::path(
    get,
    path = "/medication-records",
    responses(
        (status = 200, description = "Acting user's records", body = [RecordResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "records"
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_records(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let records = MedicationRecord::list_by_user(&state.db, user.id).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// Records for today and the two preceding days, newest first.
#[utoipa::path(
    get,
    path = "/medication-records/recent",
    responses(
        (status = 200, description = "Records from the last three days", body = [RecordResponse]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "records"
)]
#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn recent_records(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let today = OffsetDateTime::now_utc().date();
    let records = MedicationRecord::list_recent(&state.db, user.id, today).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// Overwrite the flags and notes of an owned record.
#[utoipa::path(
    put,
    path = "/medication-records/{id}",
    params(("id" = Uuid, Path, description = "Record id")),
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Updated record", body = RecordResponse),
        (status = 404, description = "No such record owned by the acting user"),
    ),
    security(("bearer_auth" = [])),
    tag = "records"
)]
#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_record(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordPayload>,
) -> ApiResult<Json<RecordResponse>> {
    let record = MedicationRecord::update(&state.db, id, user.id, &payload.into()).await?;
    info!(record_id = %record.id, "record updated");
    Ok(Json(RecordResponse::from(record)))
}

/// Every record of every user. Admin only.
#[utoipa::path(
    get,
    path = "/admin/medication-records",
    responses(
        (status = 200, description = "All records", body = [RecordResponse]),
        (status = 403, description = "Admin access required"),
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
#[instrument(skip_all)]
pub async fn list_all_records(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let records = MedicationRecord::list_all(&state.db).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}
