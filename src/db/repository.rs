//! Repository contracts consumed by the service layer.
//!
//! The sea-orm DAOs in [`crate::db::dao`] implement these; services only see
//! the traits so they can be driven by any store (or a fake in tests).

use async_trait::async_trait;

use super::dao::DaoResult;
use super::entities::{tag, todo_item, todo_list, user};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithLists {
    pub user: user::Model,
    pub todo_lists: Vec<todo_list::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListWithItems {
    pub todo_list: todo_list::Model,
    pub todo_items: Vec<todo_item::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemWithRelations {
    pub todo_item: todo_item::Model,
    pub todo_list: todo_list::Model,
    pub tags: Vec<tag::Model>,
}

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoList {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewTag {
    pub text: String,
}

/// Mutable user fields. `None` leaves the column untouched.
///
/// All patches write every present field: `Some("")` clears the column
/// rather than being skipped as a zero value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TodoListPatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TodoItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TagPatch {
    pub text: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> DaoResult<Vec<UserWithLists>>;
    async fn get_single(&self, id: i64) -> DaoResult<UserWithLists>;
    async fn create(&self, data: NewUser) -> DaoResult<UserWithLists>;
    async fn update(&self, id: i64, patch: UserPatch) -> DaoResult<UserWithLists>;
    async fn delete(&self, id: i64) -> DaoResult<()>;
}

#[async_trait]
pub trait TodoListRepository: Send + Sync {
    async fn get_all(&self, user_id: i64) -> DaoResult<Vec<todo_list::Model>>;
    async fn get_single(&self, id: i64) -> DaoResult<TodoListWithItems>;
    async fn create(&self, user_id: i64, data: NewTodoList) -> DaoResult<todo_list::Model>;
    async fn update(&self, id: i64, patch: TodoListPatch) -> DaoResult<TodoListWithItems>;
    async fn delete(&self, id: i64) -> DaoResult<()>;
}

#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    async fn get_all(&self, todo_list_id: i64) -> DaoResult<Vec<TodoItemWithRelations>>;
    async fn get_single(&self, id: i64) -> DaoResult<TodoItemWithRelations>;
    async fn create(&self, todo_list_id: i64, data: NewTodoItem) -> DaoResult<todo_item::Model>;
    async fn update(&self, id: i64, patch: TodoItemPatch) -> DaoResult<TodoItemWithRelations>;
    async fn delete(&self, id: i64) -> DaoResult<()>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_all(&self, todo_item: &todo_item::Model) -> DaoResult<Vec<tag::Model>>;
    async fn get_single(&self, id: i64) -> DaoResult<tag::Model>;
    async fn create(&self, todo_item: &todo_item::Model, data: NewTag) -> DaoResult<tag::Model>;
    async fn update(&self, id: i64, patch: TagPatch) -> DaoResult<tag::Model>;
    /// Detaches the tag from the item; the tag row itself is kept.
    async fn remove(&self, todo_item: &todo_item::Model, tag_id: i64) -> DaoResult<()>;
    async fn delete(&self, id: i64) -> DaoResult<()>;
}
