use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete as delete_route, get},
};

use crate::{
    error::CrudOp,
    response::{ApiResult, created},
    routes::{
        extract::{AppJson, AppPath, record_id},
        payload::{TagRequest, TagResponse},
    },
    state::AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo_items/{id}/tags", get(get_all).post(create))
        .route("/todo_items/{id}/tags/{tag_id}", delete_route(remove))
        .route("/tags/{id}", get(get_single).put(update).delete(delete))
}

async fn get_all(
    State(state): State<Arc<AppState>>,
    AppPath(item_id): AppPath<u64>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let tags = state
        .services
        .tag()
        .get_all(record_id(item_id)?)
        .await
        .map_err(|err| CrudOp::List.map_error(err))?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

async fn get_single(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<Json<TagResponse>> {
    let tag = state
        .services
        .tag()
        .get_single(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Find.map_error(err))?;
    Ok(Json(tag.into()))
}

async fn create(
    State(state): State<Arc<AppState>>,
    AppPath(item_id): AppPath<u64>,
    AppJson(body): AppJson<TagRequest>,
) -> ApiResult<(StatusCode, Json<TagResponse>)> {
    let tag = state
        .services
        .tag()
        .create(record_id(item_id)?, body.into())
        .await
        .map_err(|err| CrudOp::Create.map_error(err))?;
    Ok(created(tag.into()))
}

async fn update(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
    AppJson(body): AppJson<TagRequest>,
) -> ApiResult<Json<TagResponse>> {
    let tag = state
        .services
        .tag()
        .update(record_id(id)?, body.into())
        .await
        .map_err(|err| CrudOp::Update.map_error(err))?;
    Ok(Json(tag.into()))
}

/// Detaches the tag from the item. The tag itself stays.
async fn remove(
    State(state): State<Arc<AppState>>,
    AppPath((item_id, tag_id)): AppPath<(u64, u64)>,
) -> ApiResult<StatusCode> {
    state
        .services
        .tag()
        .remove(record_id(item_id)?, record_id(tag_id)?)
        .await
        .map_err(|err| CrudOp::Remove.map_error(err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<u64>,
) -> ApiResult<StatusCode> {
    state
        .services
        .tag()
        .delete(record_id(id)?)
        .await
        .map_err(|err| CrudOp::Delete.map_error(err))?;
    Ok(StatusCode::NO_CONTENT)
}
