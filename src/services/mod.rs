pub mod context;
#[cfg(test)]
pub(crate) mod memory;
pub mod tag_service;
pub mod todo_item_service;
pub mod todo_list_service;
pub mod user_service;

pub use context::ServiceContext;
pub use tag_service::TagService;
pub use todo_item_service::TodoItemService;
pub use todo_list_service::TodoListService;
pub use user_service::UserService;
