//! MySQL handle implementation.
//!
//! This module implements the `DatabaseHandle` trait for MySQL and MariaDB
//! using SQLx's MySqlPool.

use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use super::options::{build_connect_options, diagnostic_path, validate_options};
use crate::error::Result;
use crate::traits::{BoxedHandle, DatabaseHandle, DbOptions, DriverKind, QueryLogger, RawPool};

/// MySQL/MariaDB database handle.
///
/// Wraps a lazily connecting SQLx MySqlPool together with the settings the
/// uniform operations need.
#[derive(Debug)]
pub struct MySqlHandle {
    driver: String,
    db_name: String,
    path: String,
    pool: MySqlPool,
}

impl MySqlHandle {
    /// Validate the options and open a handle.
    ///
    /// No connection is made here; the pool connects on first use.
    pub fn open(opts: &DbOptions) -> Result<Self> {
        let connect_type = validate_options(opts)?;
        let path = diagnostic_path(opts, connect_type)?;
        let options = build_connect_options(opts, connect_type);

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(options);

        tracing::debug!(driver = %opts.driver, %path, "opened mysql handle");

        Ok(Self {
            driver: opts.driver.clone(),
            db_name: opts.db_name.trim().to_string(),
            path,
            pool,
        })
    }

    /// Open a boxed handle (for factory use).
    pub fn open_boxed(opts: &DbOptions) -> Result<BoxedHandle> {
        Ok(Box::new(Self::open(opts)?))
    }

    /// Get the typed pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Schema the handle was opened against.
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

#[async_trait]
impl DatabaseHandle for MySqlHandle {
    fn kind(&self) -> DriverKind {
        DriverKind::MySql
    }

    fn driver(&self) -> &str {
        &self.driver
    }

    fn raw(&self) -> RawPool {
        RawPool::MySql(self.pool.clone())
    }

    fn path(&self) -> &str {
        &self.path
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::debug!(path = %self.path, "closed mysql handle");
    }

    async fn is_connected(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }

    async fn table_exists(&self, table: &str, logger: Option<&QueryLogger<'_>>) -> Result<bool> {
        self.lookup_table(table, logger).await
    }
}
