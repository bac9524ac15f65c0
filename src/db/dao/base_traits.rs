use sea_orm::entity::prelude::DateTimeWithTimeZone;

/// Column accessors the DAOs need for every record table.
pub trait SoftDeleteEntity: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_deleted_at(&mut self, ts: Option<DateTimeWithTimeZone>);
}
