//! In-memory repositories for service tests. Foreign keys cascade the same
//! way the Postgres schema does.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::db::dao::{DaoLayerError, DaoResult};
use crate::db::entities::{tag, todo_item, todo_list, user};
use crate::db::repository::{
    NewTag, NewTodoItem, NewTodoList, NewUser, TagPatch, TagRepository, TodoItemPatch,
    TodoItemRepository, TodoItemWithRelations, TodoListPatch, TodoListRepository,
    TodoListWithItems, UserPatch, UserRepository, UserWithLists,
};
use crate::services::ServiceContext;
use crate::test_helpers::{tag_model, todo_item_model, todo_list_model, user_model};

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, user::Model>,
    todo_lists: BTreeMap<i64, todo_list::Model>,
    todo_items: BTreeMap<i64, todo_item::Model>,
    tags: BTreeMap<i64, tag::Model>,
    links: BTreeSet<(i64, i64)>,
    calls: Vec<&'static str>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn delete_todo_item(&mut self, id: i64) {
        self.todo_items.remove(&id);
        self.links.retain(|(item_id, _)| *item_id != id);
    }

    fn delete_todo_list(&mut self, id: i64) {
        self.todo_lists.remove(&id);
        let items: Vec<i64> = self
            .todo_items
            .values()
            .filter(|item| item.todo_list_id == id)
            .map(|item| item.id)
            .collect();
        for item_id in items {
            self.delete_todo_item(item_id);
        }
    }

    fn lists_of(&self, user_id: i64) -> Vec<todo_list::Model> {
        self.todo_lists
            .values()
            .filter(|list| list.user_id == user_id)
            .cloned()
            .collect()
    }

    fn tags_of(&self, item_id: i64) -> Vec<tag::Model> {
        self.links
            .iter()
            .filter(|(linked_item, _)| *linked_item == item_id)
            .filter_map(|(_, tag_id)| self.tags.get(tag_id).cloned())
            .collect()
    }

    fn item_with_relations(&self, item: todo_item::Model) -> DaoResult<TodoItemWithRelations> {
        let todo_list = self
            .todo_lists
            .get(&item.todo_list_id)
            .cloned()
            .ok_or_else(|| DaoLayerError::not_found("todo_items", item.id))?;
        let tags = self.tags_of(item.id);
        Ok(TodoItemWithRelations {
            todo_item: item,
            todo_list,
            tags,
        })
    }
}

fn missing(entity: &'static str, id: i64) -> DaoLayerError {
    DaoLayerError::not_found(entity, id)
}

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    fn lock(&self, call: &'static str) -> MutexGuard<'_, Tables> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        tables.calls.push(call);
        tables
    }

    pub(crate) fn services(&self) -> ServiceContext {
        ServiceContext::from_repositories(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    /// Repository calls made so far, as `"<table>.<operation>"`.
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.tables.lock().expect("store lock poisoned").calls.clone()
    }

    pub(crate) fn tag_count(&self) -> usize {
        self.tables.lock().expect("store lock poisoned").tags.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn get_all(&self) -> DaoResult<Vec<UserWithLists>> {
        let tables = self.lock("users.get_all");
        Ok(tables
            .users
            .values()
            .map(|user| UserWithLists {
                user: user.clone(),
                todo_lists: tables.lists_of(user.id),
            })
            .collect())
    }

    async fn get_single(&self, id: i64) -> DaoResult<UserWithLists> {
        let tables = self.lock("users.get_single");
        let user = tables.users.get(&id).cloned().ok_or_else(|| missing("users", id))?;
        let todo_lists = tables.lists_of(id);
        Ok(UserWithLists { user, todo_lists })
    }

    async fn create(&self, data: NewUser) -> DaoResult<UserWithLists> {
        let mut tables = self.lock("users.create");
        let id = tables.next_id();
        let user = user_model(id, &data.username);
        tables.users.insert(id, user.clone());
        Ok(UserWithLists {
            user,
            todo_lists: Vec::new(),
        })
    }

    async fn update(&self, id: i64, patch: UserPatch) -> DaoResult<UserWithLists> {
        let mut tables = self.lock("users.update");
        let user = tables.users.get_mut(&id).ok_or_else(|| missing("users", id))?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        let user = user.clone();
        let todo_lists = tables.lists_of(id);
        Ok(UserWithLists { user, todo_lists })
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        let mut tables = self.lock("users.delete");
        tables.users.remove(&id).ok_or_else(|| missing("users", id))?;
        let lists: Vec<i64> = tables.lists_of(id).iter().map(|list| list.id).collect();
        for list_id in lists {
            tables.delete_todo_list(list_id);
        }
        Ok(())
    }
}

#[async_trait]
impl TodoListRepository for MemoryStore {
    async fn get_all(&self, user_id: i64) -> DaoResult<Vec<todo_list::Model>> {
        Ok(self.lock("todo_lists.get_all").lists_of(user_id))
    }

    async fn get_single(&self, id: i64) -> DaoResult<TodoListWithItems> {
        let tables = self.lock("todo_lists.get_single");
        let todo_list = tables
            .todo_lists
            .get(&id)
            .cloned()
            .ok_or_else(|| missing("todo_lists", id))?;
        let todo_items = tables
            .todo_items
            .values()
            .filter(|item| item.todo_list_id == id)
            .cloned()
            .collect();
        Ok(TodoListWithItems {
            todo_list,
            todo_items,
        })
    }

    async fn create(&self, user_id: i64, data: NewTodoList) -> DaoResult<todo_list::Model> {
        let mut tables = self.lock("todo_lists.create");
        if !tables.users.contains_key(&user_id) {
            return Err(DaoLayerError::Db(sea_orm::DbErr::Custom(
                "violates foreign key constraint on todo_lists.user_id".to_string(),
            )));
        }
        let id = tables.next_id();
        let todo_list = todo_list_model(id, user_id, &data.name);
        tables.todo_lists.insert(id, todo_list.clone());
        Ok(todo_list)
    }

    async fn update(&self, id: i64, patch: TodoListPatch) -> DaoResult<TodoListWithItems> {
        {
            let mut tables = self.lock("todo_lists.update");
            let todo_list = tables
                .todo_lists
                .get_mut(&id)
                .ok_or_else(|| missing("todo_lists", id))?;
            if let Some(name) = patch.name {
                todo_list.name = name;
            }
        }
        TodoListRepository::get_single(self, id).await
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        let mut tables = self.lock("todo_lists.delete");
        if !tables.todo_lists.contains_key(&id) {
            return Err(missing("todo_lists", id));
        }
        tables.delete_todo_list(id);
        Ok(())
    }
}

#[async_trait]
impl TodoItemRepository for MemoryStore {
    async fn get_all(&self, todo_list_id: i64) -> DaoResult<Vec<TodoItemWithRelations>> {
        let tables = self.lock("todo_items.get_all");
        tables
            .todo_items
            .values()
            .filter(|item| item.todo_list_id == todo_list_id)
            .cloned()
            .map(|item| tables.item_with_relations(item))
            .collect()
    }

    async fn get_single(&self, id: i64) -> DaoResult<TodoItemWithRelations> {
        let tables = self.lock("todo_items.get_single");
        let item = tables
            .todo_items
            .get(&id)
            .cloned()
            .ok_or_else(|| missing("todo_items", id))?;
        tables.item_with_relations(item)
    }

    async fn create(&self, todo_list_id: i64, data: NewTodoItem) -> DaoResult<todo_item::Model> {
        let mut tables = self.lock("todo_items.create");
        if !tables.todo_lists.contains_key(&todo_list_id) {
            return Err(DaoLayerError::Db(sea_orm::DbErr::Custom(
                "violates foreign key constraint on todo_items.todo_list_id".to_string(),
            )));
        }
        let id = tables.next_id();
        let item = todo_item_model(id, todo_list_id, &data.title, &data.description);
        tables.todo_items.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: i64, patch: TodoItemPatch) -> DaoResult<TodoItemWithRelations> {
        let mut tables = self.lock("todo_items.update");
        let item = tables
            .todo_items
            .get_mut(&id)
            .ok_or_else(|| missing("todo_items", id))?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        let item = item.clone();
        tables.item_with_relations(item)
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        let mut tables = self.lock("todo_items.delete");
        if !tables.todo_items.contains_key(&id) {
            return Err(missing("todo_items", id));
        }
        tables.delete_todo_item(id);
        Ok(())
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn get_all(&self, todo_item: &todo_item::Model) -> DaoResult<Vec<tag::Model>> {
        Ok(self.lock("tags.get_all").tags_of(todo_item.id))
    }

    async fn get_single(&self, id: i64) -> DaoResult<tag::Model> {
        self.lock("tags.get_single")
            .tags
            .get(&id)
            .cloned()
            .ok_or_else(|| missing("tags", id))
    }

    async fn create(&self, todo_item: &todo_item::Model, data: NewTag) -> DaoResult<tag::Model> {
        let mut tables = self.lock("tags.create");
        let id = tables.next_id();
        let tag = tag_model(id, &data.text);
        tables.tags.insert(id, tag.clone());
        tables.links.insert((todo_item.id, id));
        Ok(tag)
    }

    async fn update(&self, id: i64, patch: TagPatch) -> DaoResult<tag::Model> {
        let mut tables = self.lock("tags.update");
        let tag = tables.tags.get_mut(&id).ok_or_else(|| missing("tags", id))?;
        if let Some(text) = patch.text {
            tag.text = text;
        }
        Ok(tag.clone())
    }

    async fn remove(&self, todo_item: &todo_item::Model, tag_id: i64) -> DaoResult<()> {
        let mut tables = self.lock("tags.remove");
        if !tables.tags.contains_key(&tag_id) {
            return Err(missing("tags", tag_id));
        }
        tables.links.remove(&(todo_item.id, tag_id));
        Ok(())
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        let mut tables = self.lock("tags.delete");
        tables.tags.remove(&id).ok_or_else(|| missing("tags", id))?;
        tables.links.retain(|(_, tag_id)| *tag_id != id);
        Ok(())
    }
}
