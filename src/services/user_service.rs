use std::sync::Arc;

use crate::db::{
    dao::DaoResult,
    repository::{NewUser, UserPatch, UserRepository, UserWithLists},
};

/// Users have no parent, so every call goes straight to the repository.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_all(&self) -> DaoResult<Vec<UserWithLists>> {
        self.users.get_all().await
    }

    pub async fn get_single(&self, id: i64) -> DaoResult<UserWithLists> {
        self.users.get_single(id).await
    }

    pub async fn create(&self, data: NewUser) -> DaoResult<UserWithLists> {
        self.users.create(data).await
    }

    pub async fn update(&self, id: i64, patch: UserPatch) -> DaoResult<UserWithLists> {
        self.users.update(id, patch).await
    }

    pub async fn delete(&self, id: i64) -> DaoResult<()> {
        self.users.delete(id).await
    }
}
