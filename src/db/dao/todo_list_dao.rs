use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult, TodoItemDao};
use crate::db::entities::{prelude::TodoList, todo_item, todo_list};
use crate::db::repository::{NewTodoList, TodoListPatch, TodoListRepository, TodoListWithItems};

#[derive(Clone)]
pub struct TodoListDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoListDao {
    type Entity = TodoList;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoListDao {
    fn item_dao(&self) -> TodoItemDao {
        TodoItemDao::new(&self.db)
    }
}

#[async_trait::async_trait]
impl TodoListRepository for TodoListDao {
    async fn get_all(&self, user_id: i64) -> DaoResult<Vec<todo_list::Model>> {
        self.find_all(move |query| query.filter(todo_list::Column::UserId.eq(user_id)))
            .await
    }

    async fn get_single(&self, id: i64) -> DaoResult<TodoListWithItems> {
        let todo_list = self.find_by_id(id).await?;
        let todo_items = self
            .item_dao()
            .find_all(move |query| query.filter(todo_item::Column::TodoListId.eq(id)))
            .await?;
        Ok(TodoListWithItems {
            todo_list,
            todo_items,
        })
    }

    async fn create(&self, user_id: i64, data: NewTodoList) -> DaoResult<todo_list::Model> {
        let model = todo_list::ActiveModel {
            name: Set(data.name),
            user_id: Set(user_id),
            ..Default::default()
        };
        let todo_list = DaoBase::create(self, model).await?;
        tracing::debug!(todo_list_id = todo_list.id, user_id, "todo list created");
        Ok(todo_list)
    }

    async fn update(&self, id: i64, patch: TodoListPatch) -> DaoResult<TodoListWithItems> {
        let TodoListWithItems {
            todo_list,
            todo_items,
        } = self.get_single(id).await?;
        let todo_list = self
            .update_model(todo_list, move |active| {
                if let Some(name) = patch.name {
                    active.name = Set(name);
                }
            })
            .await?;
        Ok(TodoListWithItems {
            todo_list,
            todo_items,
        })
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        DaoBase::delete(self, id).await?;
        tracing::debug!(todo_list_id = id, "todo list deleted");
        Ok(())
    }
}
