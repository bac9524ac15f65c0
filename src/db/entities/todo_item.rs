use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    pub title: String,
    pub description: String,
    #[sea_orm(indexed)]
    pub todo_list_id: i64,
    #[sea_orm(belongs_to, from = "todo_list_id", to = "id", on_delete = "Cascade")]
    pub todo_list: HasOne<super::todo_list::Entity>,
    #[sea_orm(has_many, via = "todo_item_tag")]
    pub tags: HasMany<super::tag::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
