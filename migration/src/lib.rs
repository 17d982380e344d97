pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_address_table;
mod m20240301_000003_create_driver_table;
mod m20240301_000004_create_vehicle_table;
mod m20240301_000005_create_driver_vehicle_table;

/// Persisted value of `deleted_at` for rows that have not been soft-deleted.
pub(crate) const NOT_DELETED: &str = "0001-01-01 00:00:00+00";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_address_table::Migration),
            Box::new(m20240301_000003_create_driver_table::Migration),
            Box::new(m20240301_000004_create_vehicle_table::Migration),
            Box::new(m20240301_000005_create_driver_vehicle_table::Migration),
        ]
    }
}

/// Unique index over `column` that only covers live rows.
///
/// A soft-deleted row keeps its values but no longer blocks a new row with the
/// same value.
pub(crate) fn live_unique_index<T, C>(
    name: &str,
    table: T,
    column: C,
    deleted_at: C,
) -> IndexCreateStatement
where
    T: IntoIden,
    C: IntoIden,
{
    Index::create()
        .name(name)
        .table(table)
        .col(column)
        .unique()
        .and_where(Expr::col(deleted_at).eq(NOT_DELETED))
        .to_owned()
}
