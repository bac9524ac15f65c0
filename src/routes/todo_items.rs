use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    error::CrudOp,
    response::{ApiResult, created},
    routes::{
        extract::{AppJson, AppPath, record_id},
        payload::{TodoItemRequest, TodoItemResponse},
    },
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo_lists/{id}/todo_items", get(get_all).post(create))
        .route(
            "/todo_items/{id}",
            get(get_single).put(update).delete(delete),
        )
}

async fn get_all(
    State(state): State<Arc<AppState>>,
    AppPath(list_id): AppPath<u64>,
) -> ApiResult<Json<Vec<TodoItemResponse>>> {
    let items = state
        .services
        .todo_item()
        .get_all(record_id(list_id)?)
        .await
        .map_err(|err| CrudOp::List.map_error(err))?;
    Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
}

async fn get_single(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<Json<TodoItemResponse>> {
    let item = state
        .services
        .todo_item()
        .get_single(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Find.map_error(err))?;
    Ok(Json(item.into()))
}

async fn create(
    State(state): State<Arc<AppState>>,
    AppPath(list_id): AppPath<u64>,
    AppJson(body): AppJson<TodoItemRequest>,
) -> ApiResult<(StatusCode, Json<TodoItemResponse>)> {
    let item = state
        .services
        .todo_item()
        .create(record_id(list_id)?, body.into())
        .await
        .map_err(|err| CrudOp::Create.map_error(err))?;
    Ok(created(item.into()))
}

async fn update(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<TodoItemRequest>,
) -> ApiResult<Json<TodoItemResponse>> {
    let item = state
        .services
        .todo_item()
        .update(record_id(id)?, body.into())
        .await
        .map_err(|err| CrudOp::Update.map_error(err))?;
    Ok(Json(item.into()))
}

async fn delete(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<StatusCode> {
    state
        .services
        .todo_item()
        .delete(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Delete.map_error(err))?;
    Ok(StatusCode::NO_CONTENT)
}
