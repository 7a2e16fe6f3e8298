//! Route handlers. Each one delegates to `TaskService` and wraps the result in
//! the response envelope.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use serde_json::{Value, json};
use tb_core::responses::{
    MessageResponse, StatsResponse, TaskListResponse, TaskResponse, TransactionHistoryResponse,
};

use crate::AppState;
use crate::caller::{Caller, caller_from_headers};
use crate::error::ApiError;
use crate::requests::{CreateTaskRequest, ListQuery, UpdateStatusRequest};

type ApiResult<T> = Result<Json<T>, ApiError>;

fn task_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(id)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "success": true, "message": "ok" }))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<TaskListResponse> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let tasks = state.service.list_tasks(&query.into_filter()?).await?;
    Ok(Json(TaskListResponse::new(tasks)))
}

/// The creator comes from the body when present, otherwise from the caller header.
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let creator = body
        .creator
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .or_else(|| caller_from_headers(&headers))
        .ok_or(ApiError::MissingCaller)?;

    let task = state
        .service
        .create_task(body.into_new_task()?, &creator)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskResponse::new("Task created successfully", task)),
    ))
}

pub async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<TaskResponse> {
    let task = state.service.get_task(task_id(path)?).await?;
    Ok(Json(TaskResponse::new("Task found", task)))
}

pub async fn accept_task(
    State(state): State<AppState>,
    Caller(caller): Caller,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<TaskResponse> {
    let task = state.service.accept_task(task_id(path)?, &caller).await?;
    Ok(Json(TaskResponse::new("Task accepted successfully", task)))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Caller(caller): Caller,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<TaskResponse> {
    let task = state.service.complete_task(task_id(path)?, &caller).await?;
    Ok(Json(TaskResponse::new("Task completed successfully", task)))
}

pub async fn update_status(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<TaskResponse> {
    let id = task_id(path)?;
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let task = state.service.update_status(id, body.status).await?;
    Ok(Json(TaskResponse::new("Task updated successfully", task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageResponse> {
    state.service.delete_task(task_id(path)?).await?;
    Ok(Json(MessageResponse::ok("Task deleted successfully")))
}

pub async fn task_stats(State(state): State<AppState>) -> ApiResult<StatsResponse> {
    let stats = state.service.task_stats().await?;
    Ok(Json(StatsResponse::new(stats)))
}

pub async fn transaction_history(
    State(state): State<AppState>,
) -> ApiResult<TransactionHistoryResponse> {
    let entries = state.service.transaction_history().await?;
    Ok(Json(TransactionHistoryResponse::new(entries)))
}
