use axum::extract::{Path, State};
use axum::routing::{delete, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CreateJob, Job, UpdateJob};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs/", post(create_job).get(list_jobs))
        .route("/job/:job_id/", put(update_job))
        .route("/job/:job_id/apply", put(apply_job))
        .route("/jobs/:job_id/", delete(delete_job))
}

pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    info!("GET /jobs/ - Fetching all job postings");
    let jobs = services::job_service::fetch_all(&state.pool).await.map_err(|e| {
        error!("Failed to fetch jobs: {}", e);
        e
    })?;
    Ok(Json(jobs))
}

#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(data): Json<CreateJob>,
) -> Result<Json<Job>, AppError> {
    info!("POST /jobs/ - Creating new job posting");
    let job = services::job_service::create(&state.pool, data).await.map_err(|e| {
        error!("Failed to create job: {}", e);
        e
    })?;
    Ok(Json(job))
}

pub async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Json(data): Json<UpdateJob>,
) -> Result<Json<Job>, AppError> {
    info!("PUT /job/{}/ - Updating job posting", job_id);
    let job = services::job_service::update(&state.pool, job_id, data)
        .await
        .map_err(|e| {
            error!("Failed to update job {}: {}", job_id, e);
            e
        })?;
    Ok(Json(job))
}

pub async fn apply_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
    Json(data): Json<UpdateJob>,
) -> Result<Json<Job>, AppError> {
    info!("PUT /job/{}/apply - Applying to job posting", job_id);
    let job = services::job_service::apply(&state.pool, job_id, data)
        .await
        .map_err(|e| {
            error!("Failed to apply to job {}: {}", job_id, e);
            e
        })?;
    Ok(Json(job))
}

pub async fn delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    info!("DELETE /jobs/{}/ - Deleting job posting", job_id);
    match services::job_service::delete(&state.pool, job_id).await {
        Ok(_) => Ok(Json(json!({ "message": "Deleted successfully!" }))),
        Err(e) => {
            error!("Failed to delete job {}: {}", job_id, e);
            Err(e)
        }
    }
}
