use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    pub username: String,
    #[sea_orm(has_many)]
    pub todo_lists: HasMany<super::todo_list::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
