use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult, TodoListDao};
use crate::db::entities::{prelude::User, todo_list, user};
use crate::db::repository::{NewUser, UserPatch, UserRepository, UserWithLists};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    fn list_dao(&self) -> TodoListDao {
        TodoListDao::new(&self.db)
    }

    async fn with_lists(&self, user: user::Model) -> DaoResult<UserWithLists> {
        let user_id = user.id;
        let todo_lists = self
            .list_dao()
            .find_all(move |query| query.filter(todo_list::Column::UserId.eq(user_id)))
            .await?;
        Ok(UserWithLists { user, todo_lists })
    }
}

#[async_trait::async_trait]
impl UserRepository for UserDao {
    async fn get_all(&self) -> DaoResult<Vec<UserWithLists>> {
        let users = self.find_all(|query| query).await?;
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = users.iter().map(|user| user.id).collect();
        let lists = self
            .list_dao()
            .find_all(move |query| query.filter(todo_list::Column::UserId.is_in(user_ids)))
            .await?;

        let mut lists_by_user: HashMap<i64, Vec<todo_list::Model>> = HashMap::new();
        for list in lists {
            lists_by_user.entry(list.user_id).or_default().push(list);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let todo_lists = lists_by_user.remove(&user.id).unwrap_or_default();
                UserWithLists { user, todo_lists }
            })
            .collect())
    }

    async fn get_single(&self, id: i64) -> DaoResult<UserWithLists> {
        let user = self.find_by_id(id).await?;
        self.with_lists(user).await
    }

    async fn create(&self, data: NewUser) -> DaoResult<UserWithLists> {
        let model = user::ActiveModel {
            username: Set(data.username),
            ..Default::default()
        };
        let user = DaoBase::create(self, model).await?;
        tracing::debug!(user_id = user.id, "user created");
        Ok(UserWithLists {
            user,
            todo_lists: Vec::new(),
        })
    }

    async fn update(&self, id: i64, patch: UserPatch) -> DaoResult<UserWithLists> {
        let UserWithLists { user, todo_lists } = self.get_single(id).await?;
        let user = self
            .update_model(user, move |active| {
                if let Some(username) = patch.username {
                    active.username = Set(username);
                }
            })
            .await?;
        Ok(UserWithLists { user, todo_lists })
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        DaoBase::delete(self, id).await?;
        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}
