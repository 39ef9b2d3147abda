use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::{
        CandidateForm, CandidateUpdateForm, DashboardResponse, FilterQuery, MessageResponse,
    },
    error::{Error, Result},
    models::candidate::{Candidate, CandidatePatch, NewCandidate},
    services::filter_service::{derive_options, derive_stats, filter_candidates, FilterCriteria},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("search" = Option<String>, Query, description = "Name or email contains (case-insensitive)"),
        ("role" = Option<String>, Query, description = "Exact role, or \"all\""),
        ("status" = Option<String>, Query, description = "New, Interviewing, Hired, Rejected, or \"all\""),
        ("location" = Option<String>, Query, description = "Location contains, or \"all\""),
        ("skills" = Option<String>, Query, description = "Any skill contains (case-insensitive)"),
        ("minExp" = Option<i32>, Query, description = "Minimum years of experience"),
        ("maxExp" = Option<i32>, Query, description = "Maximum years of experience"),
        ("minSal" = Option<i64>, Query, description = "Lower edge of the salary band"),
        ("maxSal" = Option<i64>, Query, description = "Upper edge of the salary band")
    ),
    responses(
        (status = 200, description = "Candidates matching the criteria", body = Json<Vec<Candidate>>),
        (status = 400, description = "Invalid criteria")
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    query: std::result::Result<Query<FilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let criteria = FilterCriteria::try_from(query)?;
    let candidates = state.candidate_service.list().await?;

    let visible: Vec<Candidate> = filter_candidates(&candidates, &criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(visible))
}

#[utoipa::path(
    get,
    path = "/api/candidates/dashboard",
    responses(
        (status = 200, description = "Filtered candidates with stats and filter options", body = Json<DashboardResponse>),
        (status = 400, description = "Invalid criteria")
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: std::result::Result<Query<FilterQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let criteria = FilterCriteria::try_from(query)?;
    let candidates = state.candidate_service.list().await?;

    let body = serde_json::to_value(DashboardResponse {
        candidates: filter_candidates(&candidates, &criteria),
        stats: derive_stats(&candidates),
        options: derive_options(&candidates),
    })?;
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CandidateForm,
    responses(
        (status = 201, description = "Candidate created", body = Json<Candidate>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CandidateForm>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(form) = payload?;
    let candidate = state
        .candidate_service
        .create(NewCandidate::from(form))
        .await
        .map_err(|e| {
            tracing::error!("Failed to create candidate: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    request_body = CandidateUpdateForm,
    responses(
        (status = 200, description = "Candidate updated", body = Json<Candidate>),
        (status = 400, description = "No data to update"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<CandidateUpdateForm>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(form) = payload?;
    let patch = CandidatePatch::from(form);
    if patch.is_empty() {
        return Err(Error::BadRequest("No data to update".into()));
    }
    let candidate = state.candidate_service.update(&id, patch).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate deleted", body = Json<MessageResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Candidate deleted successfully".to_string(),
    }))
}
