mod entry;
pub mod extract;
pub mod payload;
pub mod tags;
pub mod todo_items;
pub mod todo_lists;
pub mod users;

pub use crate::middleware::{catch_panic_layer, json_error_middleware};
pub use entry::router;
