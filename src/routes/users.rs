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
        payload::{UserRequest, UserResponse},
    },
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(get_all).post(create))
        .route("/users/{id}", get(get_single).put(update).delete(delete))
}

async fn get_all(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .services
        .user()
        .get_all()
        .await
        .map_err(|err| CrudOp::List.map_error(err))?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

async fn get_single(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .services
        .user()
        .get_single(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Find.map_error(err))?;
    Ok(Json(user.into()))
}

async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<UserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .services
        .user()
        .create(body.into())
        .await
        .map_err(|err| CrudOp::Create.map_error(err))?;
    Ok(created(user.into()))
}

async fn update(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .services
        .user()
        .update(record_id(id)?, body.into())
        .await
        .map_err(|err| CrudOp::Update.map_error(err))?;
    Ok(Json(user.into()))
}

async fn delete(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<StatusCode> {
    state
        .services
        .user()
        .delete(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Delete.map_error(err))?;
    Ok(StatusCode::NO_CONTENT)
}
