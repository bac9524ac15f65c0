//! Fixtures shared by unit and integration tests.

use std::sync::Arc;

use axum::{Router, middleware};
use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseConnection, prelude::DateTimeWithTimeZone};

use crate::{
    config::AppConfig,
    db::entities::{tag, todo_item, todo_item_tag, todo_list, user},
    routes::{catch_panic_layer, json_error_middleware, router},
    services::ServiceContext,
    state::AppState,
};

pub fn ts() -> DateTimeWithTimeZone {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub fn user_model(id: i64, username: &str) -> user::Model {
    user::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        deleted_at: None,
        username: username.to_string(),
    }
}

pub fn todo_list_model(id: i64, user_id: i64, name: &str) -> todo_list::Model {
    todo_list::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        deleted_at: None,
        name: name.to_string(),
        user_id,
    }
}

pub fn todo_item_model(id: i64, todo_list_id: i64, title: &str, description: &str) -> todo_item::Model {
    todo_item::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        deleted_at: None,
        title: title.to_string(),
        description: description.to_string(),
        todo_list_id,
    }
}

pub fn tag_model(id: i64, text: &str) -> tag::Model {
    tag::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        deleted_at: None,
        text: text.to_string(),
    }
}

pub fn link_model(todo_item_id: i64, tag_id: i64) -> todo_item_tag::Model {
    todo_item_tag::Model {
        todo_item_id,
        tag_id,
    }
}

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    let services = ServiceContext::new(&db);
    AppState::new(AppConfig::default(), services)
}

/// The full application router, error layers included.
pub fn test_router(db: DatabaseConnection) -> Router {
    router(test_state(db))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
