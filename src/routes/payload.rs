//! Wire shapes. Field names are PascalCase; request bodies also accept the
//! snake_case spelling.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::db::{
    entities::{tag, todo_item, todo_list, user},
    repository::{
        NewTag, NewTodoItem, NewTodoList, NewUser, TagPatch, TodoItemPatch, TodoItemWithRelations,
        TodoListPatch, TodoListWithItems, UserPatch, UserWithLists,
    },
};

/// Columns every record carries.
#[derive(Debug, Serialize)]
pub struct RecordFields {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTimeWithTimeZone,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTimeWithTimeZone,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

macro_rules! record_fields_from {
    ($($entity:ident),+ $(,)?) => {
        $(
            impl From<&$entity::Model> for RecordFields {
                fn from(model: &$entity::Model) -> Self {
                    Self {
                        id: model.id,
                        created_at: model.created_at,
                        updated_at: model.updated_at,
                        deleted_at: model.deleted_at,
                    }
                }
            }
        )+
    };
}

record_fields_from!(user, todo_list, todo_item, tag);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    #[serde(rename = "Username", alias = "username")]
    pub username: Option<String>,
}

impl From<UserRequest> for NewUser {
    fn from(body: UserRequest) -> Self {
        Self {
            username: body.username.unwrap_or_default(),
        }
    }
}

impl From<UserRequest> for UserPatch {
    fn from(body: UserRequest) -> Self {
        Self {
            username: body.username,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoListRequest {
    #[serde(rename = "Name", alias = "name")]
    pub name: Option<String>,
}

impl From<TodoListRequest> for NewTodoList {
    fn from(body: TodoListRequest) -> Self {
        Self {
            name: body.name.unwrap_or_default(),
        }
    }
}

impl From<TodoListRequest> for TodoListPatch {
    fn from(body: TodoListRequest) -> Self {
        Self { name: body.name }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoItemRequest {
    #[serde(rename = "Title", alias = "title")]
    pub title: Option<String>,
    #[serde(rename = "Description", alias = "description")]
    pub description: Option<String>,
}

impl From<TodoItemRequest> for NewTodoItem {
    fn from(body: TodoItemRequest) -> Self {
        Self {
            title: body.title.unwrap_or_default(),
            description: body.description.unwrap_or_default(),
        }
    }
}

impl From<TodoItemRequest> for TodoItemPatch {
    fn from(body: TodoItemRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TagRequest {
    #[serde(rename = "Text", alias = "text")]
    pub text: Option<String>,
}

impl From<TagRequest> for NewTag {
    fn from(body: TagRequest) -> Self {
        Self {
            text: body.text.unwrap_or_default(),
        }
    }
}

impl From<TagRequest> for TagPatch {
    fn from(body: TagRequest) -> Self {
        Self { text: body.text }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    #[serde(flatten)]
    pub record: RecordFields,
    pub username: String,
    pub todo_lists: Vec<TodoListResponse>,
}

impl From<UserWithLists> for UserResponse {
    fn from(value: UserWithLists) -> Self {
        Self {
            record: RecordFields::from(&value.user),
            username: value.user.username,
            todo_lists: value
                .todo_lists
                .into_iter()
                .map(TodoListResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TodoListResponse {
    #[serde(flatten)]
    pub record: RecordFields,
    pub name: String,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_items: Option<Vec<TodoItemResponse>>,
}

impl From<todo_list::Model> for TodoListResponse {
    fn from(model: todo_list::Model) -> Self {
        Self {
            record: RecordFields::from(&model),
            name: model.name,
            user_id: model.user_id,
            todo_items: None,
        }
    }
}

impl From<TodoListWithItems> for TodoListResponse {
    fn from(value: TodoListWithItems) -> Self {
        let items = value
            .todo_items
            .into_iter()
            .map(TodoItemResponse::from)
            .collect();
        Self {
            todo_items: Some(items),
            ..Self::from(value.todo_list)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TodoItemResponse {
    #[serde(flatten)]
    pub record: RecordFields,
    pub title: String,
    pub description: String,
    #[serde(rename = "TodoListID")]
    pub todo_list_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_list: Option<Box<TodoListResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagResponse>>,
}

impl From<todo_item::Model> for TodoItemResponse {
    fn from(model: todo_item::Model) -> Self {
        Self {
            record: RecordFields::from(&model),
            title: model.title,
            description: model.description,
            todo_list_id: model.todo_list_id,
            todo_list: None,
            tags: None,
        }
    }
}

impl From<TodoItemWithRelations> for TodoItemResponse {
    fn from(value: TodoItemWithRelations) -> Self {
        Self {
            todo_list: Some(Box::new(TodoListResponse::from(value.todo_list))),
            tags: Some(value.tags.into_iter().map(TagResponse::from).collect()),
            ..Self::from(value.todo_item)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResponse {
    #[serde(flatten)]
    pub record: RecordFields,
    pub text: String,
}

impl From<tag::Model> for TagResponse {
    fn from(model: tag::Model) -> Self {
        Self {
            record: RecordFields::from(&model),
            text: model.text,
        }
    }
}
