use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    pub text: String,
    #[sea_orm(has_many, via = "todo_item_tag")]
    pub todo_items: HasMany<super::todo_item::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
