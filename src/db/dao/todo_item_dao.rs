use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoLayerError, DaoResult, TagDao, TodoListDao};
use crate::db::entities::{prelude::TodoItem, todo_item};
use crate::db::repository::{
    NewTodoItem, TodoItemPatch, TodoItemRepository, TodoItemWithRelations,
};

#[derive(Clone)]
pub struct TodoItemDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoItemDao {
    type Entity = TodoItem;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoItemDao {
    fn list_dao(&self) -> TodoListDao {
        TodoListDao::new(&self.db)
    }

    fn tag_dao(&self) -> TagDao {
        TagDao::new(&self.db)
    }

    /// Attaches the owning list and the tags to a loaded item. An item whose
    /// list is gone is reported as missing itself.
    async fn with_relations(&self, todo_item: todo_item::Model) -> DaoResult<TodoItemWithRelations> {
        let todo_list = match self.list_dao().find_by_id(todo_item.todo_list_id).await {
            Ok(todo_list) => todo_list,
            Err(err) if err.is_not_found() => {
                return Err(DaoLayerError::not_found(Self::entity_name(), todo_item.id));
            }
            Err(err) => return Err(err),
        };
        let tags = self
            .tag_dao()
            .tags_by_item(vec![todo_item.id])
            .await?
            .remove(&todo_item.id)
            .unwrap_or_default();
        Ok(TodoItemWithRelations {
            todo_item,
            todo_list,
            tags,
        })
    }
}

#[async_trait::async_trait]
impl TodoItemRepository for TodoItemDao {
    async fn get_all(&self, todo_list_id: i64) -> DaoResult<Vec<TodoItemWithRelations>> {
        let items = self
            .find_all(move |query| query.filter(todo_item::Column::TodoListId.eq(todo_list_id)))
            .await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let todo_list = self.list_dao().find_by_id(todo_list_id).await?;
        let item_ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        let mut tags_by_item = self.tag_dao().tags_by_item(item_ids).await?;

        Ok(items
            .into_iter()
            .map(|todo_item| {
                let tags = tags_by_item.remove(&todo_item.id).unwrap_or_default();
                TodoItemWithRelations {
                    todo_item,
                    todo_list: todo_list.clone(),
                    tags,
                }
            })
            .collect())
    }

    async fn get_single(&self, id: i64) -> DaoResult<TodoItemWithRelations> {
        let todo_item = self.find_by_id(id).await?;
        self.with_relations(todo_item).await
    }

    async fn create(&self, todo_list_id: i64, data: NewTodoItem) -> DaoResult<todo_item::Model> {
        let model = todo_item::ActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            todo_list_id: Set(todo_list_id),
            ..Default::default()
        };
        let todo_item = DaoBase::create(self, model).await?;
        tracing::debug!(todo_item_id = todo_item.id, todo_list_id, "todo item created");
        Ok(todo_item)
    }

    async fn update(&self, id: i64, patch: TodoItemPatch) -> DaoResult<TodoItemWithRelations> {
        let TodoItemWithRelations {
            todo_item,
            todo_list,
            tags,
        } = self.get_single(id).await?;
        let todo_item = self
            .update_model(todo_item, move |active| {
                if let Some(title) = patch.title {
                    active.title = Set(title);
                }
                if let Some(description) = patch.description {
                    active.description = Set(description);
                }
            })
            .await?;
        Ok(TodoItemWithRelations {
            todo_item,
            todo_list,
            tags,
        })
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        DaoBase::delete(self, id).await?;
        tracing::debug!(todo_item_id = id, "todo item deleted");
        Ok(())
    }
}
