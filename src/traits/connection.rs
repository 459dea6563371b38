//! Core database handle trait.
//!
//! This module defines the `DatabaseHandle` trait that all drivers implement,
//! and `RawPool`, the escape hatch to the underlying sqlx pool.

use async_trait::async_trait;
use sqlx::{MySqlPool, SqlitePool};

use super::types::DriverKind;
use crate::drivers::normalize_placeholders;
use crate::error::Result;

/// Callback receiving the exact statement a handle is about to run.
pub type QueryLogger<'a> = dyn Fn(&str) + Send + Sync + 'a;

/// The underlying connection pool of an open handle.
///
/// Pools are reference counted, so cloning one shares the same connections.
#[derive(Debug, Clone)]
pub enum RawPool {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

impl RawPool {
    /// Get the driver kind this pool belongs to
    pub fn kind(&self) -> DriverKind {
        match self {
            Self::MySql(_) => DriverKind::MySql,
            Self::Sqlite(_) => DriverKind::Sqlite,
        }
    }

    pub fn as_mysql(&self) -> Option<&MySqlPool> {
        match self {
            Self::MySql(pool) => Some(pool),
            Self::Sqlite(_) => None,
        }
    }

    pub fn as_sqlite(&self) -> Option<&SqlitePool> {
        match self {
            Self::Sqlite(pool) => Some(pool),
            Self::MySql(_) => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Self::MySql(pool) => pool.is_closed(),
            Self::Sqlite(pool) => pool.is_closed(),
        }
    }
}

/// Uniform interface over an open database connection.
///
/// Handles are created by [`ConnectionFactory`](crate::drivers::ConnectionFactory)
/// from validated options. Opening does not touch the network: the pool
/// connects on first use, so connection failures surface from the first
/// query (for example `table_exists`).
///
/// # Example
///
/// ```ignore
/// use dbhandle::{ConnectionFactory, DbOptions};
///
/// let opts = DbOptions::new("sqlite3")
///     .with_data_dir("/var/lib/app")
///     .with_db_name("app");
///
/// let handle = ConnectionFactory::open(&opts)?;
/// if !handle.table_exists("users", None).await? {
///     // create it
/// }
/// handle.close().await;
/// ```
#[async_trait]
pub trait DatabaseHandle: Send + Sync + std::fmt::Debug {
    /// Get the driver kind backing this handle
    fn kind(&self) -> DriverKind;

    /// Get the driver name exactly as it was configured (e.g. `mariadb`)
    fn driver(&self) -> &str;

    /// Get the underlying pool
    fn raw(&self) -> RawPool;

    /// Get the path used to connect, for diagnostics.
    ///
    /// Usernames and passwords are never part of the returned string.
    fn path(&self) -> &str;

    /// Rewrite the argument placeholders of `query` into the syntax this
    /// backend expects. Run this before preparing a statement.
    fn format(&self, query: &str) -> String {
        normalize_placeholders(query)
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    async fn close(&self);

    /// Check whether the database answers a trivial query.
    async fn is_connected(&self) -> bool;

    /// Check whether a table named exactly `table` exists.
    ///
    /// When `logger` is given it receives the statement before it runs.
    /// Backend errors are passed through; an empty result is `Ok(false)`.
    async fn table_exists(&self, table: &str, logger: Option<&QueryLogger<'_>>) -> Result<bool>;
}

/// A boxed database handle trait object.
pub type BoxedHandle = Box<dyn DatabaseHandle>;

/// Shared tail of the `table_exists` implementations: a matching row only
/// counts when its name is exactly the one asked for.
pub(crate) fn matches_table(found: Option<String>, table: &str) -> bool {
    found.is_some_and(|name| name == table)
}
