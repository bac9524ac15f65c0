use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    db::repository::{TagRepository, TodoItemRepository, TodoListRepository, UserRepository},
    services::{TagService, TodoItemService, TodoListService, UserService},
};

/// Composition root for the service layer. Every service handed out shares
/// the same repository instances.
#[derive(Clone)]
pub struct ServiceContext {
    users: Arc<dyn UserRepository>,
    todo_lists: Arc<dyn TodoListRepository>,
    todo_items: Arc<dyn TodoItemRepository>,
    tags: Arc<dyn TagRepository>,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        let daos = DaoContext::new(db);
        Self::from_repositories(
            Arc::new(daos.user()),
            Arc::new(daos.todo_list()),
            Arc::new(daos.todo_item()),
            Arc::new(daos.tag()),
        )
    }

    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        todo_lists: Arc<dyn TodoListRepository>,
        todo_items: Arc<dyn TodoItemRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            users,
            todo_lists,
            todo_items,
            tags,
        }
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.users.clone())
    }

    pub fn todo_list(&self) -> TodoListService {
        TodoListService::new(self.users.clone(), self.todo_lists.clone())
    }

    pub fn todo_item(&self) -> TodoItemService {
        TodoItemService::new(self.todo_lists.clone(), self.todo_items.clone())
    }

    pub fn tag(&self) -> TagService {
        TagService::new(self.todo_items.clone(), self.tags.clone())
    }
}
