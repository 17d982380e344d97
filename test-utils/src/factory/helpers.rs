//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Unique columns (username, CPF, plate, ...) are derived from this value so
/// factories can be called repeatedly within one database.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a driver together with the user that owns it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, driver))` - The created user and driver
/// - `Err(DbErr)` - Database error during creation
pub async fn create_driver_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::driver::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let driver = crate::factory::driver::create_driver(db, user.id).await?;

    Ok((user, driver))
}

/// Creates a driver whose user has an address.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address, driver))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_driver_with_address(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::address::Model,
        entity::driver::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;
    let driver = crate::factory::driver::create_driver(db, user.id).await?;

    Ok((user, address, driver))
}
