//! SQLite handle implementation.
//!
//! This module implements the `DatabaseHandle` trait for SQLite
//! using SQLx's SqlitePool.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::options::{build_path, validate_options};
use crate::error::Result;
use crate::traits::{BoxedHandle, DatabaseHandle, DbOptions, DriverKind, QueryLogger, RawPool};

/// SQLite database handle.
///
/// Wraps a lazily connecting SQLx SqlitePool over `<data_dir>/<db_name>.db`.
#[derive(Debug)]
pub struct SqliteHandle {
    driver: String,
    file: PathBuf,
    path: String,
    pool: SqlitePool,
}

impl SqliteHandle {
    /// Validate the options, prepare the data directory and open a handle.
    ///
    /// The database file itself is created on first connection.
    pub fn open(opts: &DbOptions) -> Result<Self> {
        validate_options(opts)?;
        let file = build_path(opts)?;

        let options = SqliteConnectOptions::new()
            .filename(&file)
            .create_if_missing(true)
            .foreign_keys(true);

        // SQLite pools should be smaller due to single-writer limitation
        let pool = SqlitePoolOptions::new()
            .max_connections(3)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(options);

        let path = file.display().to_string();
        tracing::debug!(driver = %opts.driver, %path, "opened sqlite handle");

        Ok(Self {
            driver: opts.driver.clone(),
            file,
            path,
            pool,
        })
    }

    /// Open a boxed handle (for factory use).
    pub fn open_boxed(opts: &DbOptions) -> Result<BoxedHandle> {
        Ok(Box::new(Self::open(opts)?))
    }

    /// Get the typed pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Location of the database file.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

#[async_trait]
impl DatabaseHandle for SqliteHandle {
    fn kind(&self) -> DriverKind {
        DriverKind::Sqlite
    }

    fn driver(&self) -> &str {
        &self.driver
    }

    fn raw(&self) -> RawPool {
        RawPool::Sqlite(self.pool.clone())
    }

    fn path(&self) -> &str {
        &self.path
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::debug!(path = %self.path, "closed sqlite handle");
    }

    async fn is_connected(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }

    async fn table_exists(&self, table: &str, logger: Option<&QueryLogger<'_>>) -> Result<bool> {
        self.lookup_table(table, logger).await
    }
}
