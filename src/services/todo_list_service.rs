use std::sync::Arc;

use crate::db::{
    dao::DaoResult,
    entities::todo_list,
    repository::{NewTodoList, TodoListPatch, TodoListRepository, TodoListWithItems, UserRepository},
};

#[derive(Clone)]
pub struct TodoListService {
    users: Arc<dyn UserRepository>,
    todo_lists: Arc<dyn TodoListRepository>,
}

impl TodoListService {
    pub fn new(users: Arc<dyn UserRepository>, todo_lists: Arc<dyn TodoListRepository>) -> Self {
        Self { users, todo_lists }
    }

    pub async fn get_all(&self, user_id: i64) -> DaoResult<Vec<todo_list::Model>> {
        self.users.get_single(user_id).await?;
        self.todo_lists.get_all(user_id).await
    }

    pub async fn get_single(&self, id: i64) -> DaoResult<TodoListWithItems> {
        self.todo_lists.get_single(id).await
    }

    /// Fails with the owner's not-found error before any insert is attempted.
    pub async fn create(&self, user_id: i64, data: NewTodoList) -> DaoResult<todo_list::Model> {
        self.users.get_single(user_id).await?;
        self.todo_lists.create(user_id, data).await
    }

    pub async fn update(&self, id: i64, patch: TodoListPatch) -> DaoResult<TodoListWithItems> {
        self.todo_lists.update(id, patch).await
    }

    pub async fn delete(&self, id: i64) -> DaoResult<()> {
        self.todo_lists.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::db::dao::DaoLayerError;
    use crate::db::repository::{NewTodoList, NewUser, TodoListPatch};
    use crate::services::memory::MemoryStore;

    #[tokio::test]
    async fn create_for_missing_user_never_reaches_list_repository() {
        let store = MemoryStore::default();
        let service = store.services().todo_list();

        let err = service
            .create(42, NewTodoList::default())
            .await
            .expect_err("owner is missing");
        assert!(matches!(err, DaoLayerError::NotFound { entity: "users", id: 42 }));
        assert_eq!(store.calls(), ["users.get_single"]);
    }

    #[tokio::test]
    async fn get_all_for_missing_user_is_not_found() {
        let store = MemoryStore::default();

        let err = store
            .services()
            .todo_list()
            .get_all(42)
            .await
            .expect_err("owner is missing");
        assert!(err.is_not_found());
        assert!(!store.calls().contains(&"todo_lists.get_all"));
    }

    #[tokio::test]
    async fn update_replaces_name_only() {
        let store = MemoryStore::default();
        let services = store.services();
        let owner = services
            .user()
            .create(NewUser {
                username: "alice".to_string(),
            })
            .await
            .expect("create user");
        let created = services
            .todo_list()
            .create(
                owner.user.id,
                NewTodoList {
                    name: "groceries".to_string(),
                },
            )
            .await
            .expect("create list");

        services
            .todo_list()
            .update(
                created.id,
                TodoListPatch {
                    name: Some("shopping".to_string()),
                },
            )
            .await
            .expect("update list");
        let found = services
            .todo_list()
            .get_single(created.id)
            .await
            .expect("list should exist");
        assert_eq!(found.todo_list.name, "shopping");
        assert_eq!(found.todo_list.user_id, owner.user.id);
        assert_eq!(found.todo_list.created_at, created.created_at);
    }

    #[tokio::test]
    async fn deleting_user_cascades_to_lists_and_items() {
        let store = MemoryStore::default();
        let services = store.services();
        let owner = services
            .user()
            .create(NewUser::default())
            .await
            .expect("create user");
        let list = services
            .todo_list()
            .create(owner.user.id, NewTodoList::default())
            .await
            .expect("create list");
        let item = services
            .todo_item()
            .create(list.id, Default::default())
            .await
            .expect("create item");

        services
            .user()
            .delete(owner.user.id)
            .await
            .expect("delete user");
        assert!(
            services
                .todo_list()
                .get_single(list.id)
                .await
                .expect_err("list should be gone")
                .is_not_found()
        );
        assert!(
            services
                .todo_item()
                .get_single(item.id)
                .await
                .expect_err("item should be gone")
                .is_not_found()
        );
    }
}
