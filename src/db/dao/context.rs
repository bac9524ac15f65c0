use sea_orm::DatabaseConnection;

use super::{DaoBase, TagDao, TodoItemDao, TodoListDao, UserDao};

/// Hands out DAOs that share one connection pool.
#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn todo_list(&self) -> TodoListDao {
        DaoBase::new(&self.db)
    }

    pub fn todo_item(&self) -> TodoItemDao {
        DaoBase::new(&self.db)
    }

    pub fn tag(&self) -> TagDao {
        DaoBase::new(&self.db)
    }
}
