use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{tags, todo_items, todo_lists, users};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(users::router())
        .merge(todo_lists::router())
        .merge(todo_items::router())
        .merge(tags::router())
        .with_state(state)
}
