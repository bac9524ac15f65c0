use sea_orm::entity::prelude::*;

/// Join rows between todo items and tags. Either side going away removes
/// the row; the tag itself survives an item delete.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_item_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub todo_item_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i64,
    #[sea_orm(belongs_to, from = "todo_item_id", to = "id", on_delete = "Cascade")]
    pub todo_item: HasOne<super::todo_item::Entity>,
    #[sea_orm(belongs_to, from = "tag_id", to = "id", on_delete = "Cascade")]
    pub tag: HasOne<super::tag::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
