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
        payload::{TodoListRequest, TodoListResponse},
    },
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}/todo_lists", get(get_all).post(create))
        .route(
            "/todo_lists/{id}",
            get(get_single).put(update).delete(delete),
        )
}

async fn get_all(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> ApiResult<Json<Vec<TodoListResponse>>> {
    let lists = state
        .services
        .todo_list()
        .get_all(record_id(user_id)?)
        .await
        .map_err(|err| CrudOp::List.map_error(err))?;
    Ok(Json(lists.into_iter().map(TodoListResponse::from).collect()))
}

async fn get_single(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<Json<TodoListResponse>> {
    let list = state
        .services
        .todo_list()
        .get_single(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Find.map_error(err))?;
    Ok(Json(list.into()))
}

async fn create(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(body): AppJson<TodoListRequest>,
) -> ApiResult<(StatusCode, Json<TodoListResponse>)> {
    let list = state
        .services
        .todo_list()
        .create(record_id(user_id)?, body.into())
        .await
        .map_err(|err| CrudOp::Create.map_error(err))?;
    Ok(created(list.into()))
}

async fn update(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<TodoListRequest>,
) -> ApiResult<Json<TodoListResponse>> {
    let list = state
        .services
        .todo_list()
        .update(record_id(id)?, body.into())
        .await
        .map_err(|err| CrudOp::Update.map_error(err))?;
    Ok(Json(list.into()))
}

async fn delete(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<StatusCode> {
    state
        .services
        .todo_list()
        .delete(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Delete.map_error(err))?;
    Ok(StatusCode::NO_CONTENT)
}
