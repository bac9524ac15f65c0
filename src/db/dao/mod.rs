pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod tag_dao;
pub mod todo_item_dao;
pub mod todo_list_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use base_traits::{SoftDeleteEntity, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use tag_dao::TagDao;
pub use todo_item_dao::TodoItemDao;
pub use todo_list_dao::TodoListDao;
pub use user_dao::UserDao;
