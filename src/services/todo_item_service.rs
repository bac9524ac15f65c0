use std::sync::Arc;

use crate::db::{
    dao::DaoResult,
    entities::todo_item,
    repository::{
        NewTodoItem, TodoItemPatch, TodoItemRepository, TodoItemWithRelations, TodoListRepository,
    },
};

#[derive(Clone)]
pub struct TodoItemService {
    todo_lists: Arc<dyn TodoListRepository>,
    todo_items: Arc<dyn TodoItemRepository>,
}

impl TodoItemService {
    pub fn new(
        todo_lists: Arc<dyn TodoListRepository>,
        todo_items: Arc<dyn TodoItemRepository>,
    ) -> Self {
        Self {
            todo_lists,
            todo_items,
        }
    }

    pub async fn get_all(&self, todo_list_id: i64) -> DaoResult<Vec<TodoItemWithRelations>> {
        self.todo_lists.get_single(todo_list_id).await?;
        self.todo_items.get_all(todo_list_id).await
    }

    pub async fn get_single(&self, id: i64) -> DaoResult<TodoItemWithRelations> {
        self.todo_items.get_single(id).await
    }

    /// The list is not looked up first; a missing list surfaces as the
    /// store's foreign-key error.
    pub async fn create(&self, todo_list_id: i64, data: NewTodoItem) -> DaoResult<todo_item::Model> {
        self.todo_items.create(todo_list_id, data).await
    }

    pub async fn update(&self, id: i64, patch: TodoItemPatch) -> DaoResult<TodoItemWithRelations> {
        self.todo_items.update(id, patch).await
    }

    pub async fn delete(&self, id: i64) -> DaoResult<()> {
        self.todo_items.delete(id).await
    }
}
