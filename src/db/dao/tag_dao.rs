use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::{DaoBase, DaoLayerError, DaoResult, TimestampedActiveModel};
use crate::db::entities::prelude::{Tag, TodoItemTag};
use crate::db::entities::{tag, todo_item, todo_item_tag};
use crate::db::repository::{NewTag, TagPatch, TagRepository};

#[derive(Clone)]
pub struct TagDao {
    db: DatabaseConnection,
}

impl DaoBase for TagDao {
    type Entity = Tag;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TagDao {
    /// Loads the tags joined to each of `item_ids`, keyed by item id and
    /// ordered by tag id. Items without tags are absent from the map.
    pub(crate) async fn tags_by_item(
        &self,
        item_ids: Vec<i64>,
    ) -> DaoResult<HashMap<i64, Vec<tag::Model>>> {
        if item_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = TodoItemTag::find()
            .filter(todo_item_tag::Column::TodoItemId.is_in(item_ids))
            .all(&self.db)
            .await?;
        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let tag_ids: BTreeSet<i64> = links.iter().map(|link| link.tag_id).collect();
        let tags: HashMap<i64, tag::Model> = self
            .find_all(move |query| query.filter(tag::Column::Id.is_in(tag_ids)))
            .await?
            .into_iter()
            .map(|tag| (tag.id, tag))
            .collect();

        let mut grouped: HashMap<i64, Vec<tag::Model>> = HashMap::new();
        for link in links {
            if let Some(tag) = tags.get(&link.tag_id) {
                grouped
                    .entry(link.todo_item_id)
                    .or_default()
                    .push(tag.clone());
            }
        }
        for tags in grouped.values_mut() {
            tags.sort_by_key(|tag| tag.id);
        }
        Ok(grouped)
    }
}

#[async_trait::async_trait]
impl TagRepository for TagDao {
    async fn get_all(&self, todo_item: &todo_item::Model) -> DaoResult<Vec<tag::Model>> {
        let mut grouped = self.tags_by_item(vec![todo_item.id]).await?;
        Ok(grouped.remove(&todo_item.id).unwrap_or_default())
    }

    async fn get_single(&self, id: i64) -> DaoResult<tag::Model> {
        self.find_by_id(id).await
    }

    async fn create(&self, todo_item: &todo_item::Model, data: NewTag) -> DaoResult<tag::Model> {
        let txn = self.db.begin().await?;

        let now = Utc::now().fixed_offset();
        let mut active = tag::ActiveModel {
            text: Set(data.text),
            ..Default::default()
        };
        active.set_created_at(now);
        active.set_updated_at(now);
        active.set_deleted_at(None);
        let tag = active.insert(&txn).await?;

        let link = todo_item_tag::ActiveModel {
            todo_item_id: Set(todo_item.id),
            tag_id: Set(tag.id),
        };
        TodoItemTag::insert(link).exec_without_returning(&txn).await?;

        txn.commit().await?;
        tracing::debug!(tag_id = tag.id, todo_item_id = todo_item.id, "tag created");
        Ok(tag)
    }

    async fn update(&self, id: i64, patch: TagPatch) -> DaoResult<tag::Model> {
        DaoBase::update(self, id, move |active| {
            if let Some(text) = patch.text {
                active.text = Set(text);
            }
        })
        .await
    }

    async fn remove(&self, todo_item: &todo_item::Model, tag_id: i64) -> DaoResult<()> {
        self.find_by_id(tag_id).await?;

        TodoItemTag::delete_many()
            .filter(todo_item_tag::Column::TodoItemId.eq(todo_item.id))
            .filter(todo_item_tag::Column::TagId.eq(tag_id))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        tracing::debug!(tag_id, todo_item_id = todo_item.id, "tag detached");
        Ok(())
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        DaoBase::delete(self, id).await?;
        tracing::debug!(tag_id = id, "tag deleted");
        Ok(())
    }
}
