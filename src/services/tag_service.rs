use std::sync::Arc;

use crate::db::{
    dao::DaoResult,
    entities::tag,
    repository::{NewTag, TagPatch, TagRepository, TodoItemRepository},
};

/// Item-scoped calls resolve the owning item first so a missing item is
/// reported as such instead of as an empty or failed tag query.
#[derive(Clone)]
pub struct TagService {
    todo_items: Arc<dyn TodoItemRepository>,
    tags: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(todo_items: Arc<dyn TodoItemRepository>, tags: Arc<dyn TagRepository>) -> Self {
        Self { todo_items, tags }
    }

    pub async fn get_all(&self, todo_item_id: i64) -> DaoResult<Vec<tag::Model>> {
        let item = self.todo_items.get_single(todo_item_id).await?;
        self.tags.get_all(&item.todo_item).await
    }

    pub async fn get_single(&self, id: i64) -> DaoResult<tag::Model> {
        self.tags.get_single(id).await
    }

    pub async fn create(&self, todo_item_id: i64, data: NewTag) -> DaoResult<tag::Model> {
        let item = self.todo_items.get_single(todo_item_id).await?;
        self.tags.create(&item.todo_item, data).await
    }

    pub async fn update(&self, id: i64, patch: TagPatch) -> DaoResult<tag::Model> {
        self.tags.update(id, patch).await
    }

    pub async fn remove(&self, todo_item_id: i64, tag_id: i64) -> DaoResult<()> {
        let item = self.todo_items.get_single(todo_item_id).await?;
        self.tags.remove(&item.todo_item, tag_id).await
    }

    pub async fn delete(&self, id: i64) -> DaoResult<()> {
        self.tags.delete(id).await
    }
}
