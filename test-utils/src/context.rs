use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Isolated database for a single test.
///
/// Holds one in-memory SQLite connection. The pool is capped at a single
/// connection because every new SQLite memory connection opens an empty
/// database of its own.
#[derive(Default)]
pub struct TestContext {
    /// Set once `database()` has connected.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening it on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The test database
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => {
                let mut options = ConnectOptions::new(IN_MEMORY_URL);
                options.max_connections(1).sqlx_logging(false);

                Database::connect(options).await?
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tables referenced by a foreign key must
    /// come before the tables that reference them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Runs the given CREATE INDEX statements; the indexed tables must exist.
    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
