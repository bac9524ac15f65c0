#[allow(unused_imports)]
pub mod prelude {
    pub use super::tag::Entity as Tag;
    pub use super::todo_item::Entity as TodoItem;
    pub use super::todo_item_tag::Entity as TodoItemTag;
    pub use super::todo_list::Entity as TodoList;
    pub use super::user::Entity as User;
}

pub mod tag;
pub mod todo_item;
pub mod todo_item_tag;
pub mod todo_list;
pub mod user;
