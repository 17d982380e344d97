use chrono::SecondsFormat;
use entity::{prelude::*, soft_delete::LiveUnique};
use sea_orm::{
    sea_query::{ConditionalStatement, Expr, ExprTrait, Index, IndexCreateStatement, TableCreateStatement},
    IdenStatic, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Address};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Address)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Live-row unique indexes, created once every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table and its live-row unique indexes for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: LiveUnique>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));

        for column in E::live_unique_columns() {
            self.indexes.push(
                Index::create()
                    .name(format!(
                        "idx_{}_{}_live",
                        entity.table_name(),
                        column.as_str()
                    ))
                    .table(entity)
                    .col(column)
                    .unique()
                    .and_where(Expr::col(E::deleted_at()).eq(stored_sentinel()))
                    .to_owned(),
            );
        }

        self
    }

    /// Adds the tables needed to load a driver with its address and vehicles.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Address
    /// - Driver
    /// - Vehicle
    /// - DriverVehicle
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_fleet_tables(self) -> Self {
        self.with_table(User)
            .with_table(Address)
            .with_table(Driver)
            .with_table(Vehicle)
            .with_table(DriverVehicle)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements that were added via `with_table()`, then their unique indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// `deleted_at` of a live row as the SQLite driver writes it.
///
/// Index predicates are inlined into the DDL rather than bound, so the literal
/// has to match the driver's RFC 3339 encoding of the sentinel exactly.
fn stored_sentinel() -> String {
    entity::soft_delete::sentinel().to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
