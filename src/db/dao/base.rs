use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityName, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, QueryOrder, Select,
};

use super::base_traits::{SoftDeleteEntity, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

/// Generic record access shared by every entity DAO.
///
/// Reads only see rows whose `deleted_at` is unset. Deletes are hard
/// deletes; dependent rows go with them through the foreign keys.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + TimestampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i64> + Send + Sync,
    Self::Entity: SoftDeleteEntity,
{
    type Entity: EntityTrait + Send + Sync;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    fn entity_name() -> &'static str {
        Self::Entity::default().table_name()
    }

    fn scoped() -> Select<Self::Entity> {
        Self::Entity::find().filter(Self::Entity::deleted_at_column().is_null())
    }

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_created_at(now);
        active.set_updated_at(now);
        active.set_deleted_at(None);
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i64) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let model = Self::scoped()
            .filter(Self::Entity::id_column().eq(id))
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        model.ok_or_else(|| DaoLayerError::not_found(Self::entity_name(), id))
    }

    async fn find_all(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        apply(Self::scoped())
            .order_by_asc(Self::Entity::id_column())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn update<F>(&self, id: i64, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;
        self.update_model(model, apply).await
    }

    /// Applies `apply` to an already loaded row and writes the changed columns.
    async fn update_model<F>(
        &self,
        model: <Self::Entity as EntityTrait>::Model,
        apply: F,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: i64) -> DaoResult<()> {
        self.find_by_id(id).await?;

        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::not_found(Self::entity_name(), id));
        }

        Ok(())
    }
}
