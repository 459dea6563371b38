//! Driver registry and handle factory.
//!
//! The registry maps a driver name onto the constructor that opens a handle
//! for it. It is process-wide and seeded with the built-in drivers on first
//! use; applications may register additional names at startup.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use super::mysql::MySqlHandle;
use super::sqlite::SqliteHandle;
use crate::error::{DbError, Result};
use crate::traits::{BoxedHandle, DbOptions};

/// Opens a handle from options. Constructors validate the options they
/// need before touching the backend.
pub type HandleConstructor = fn(&DbOptions) -> Result<BoxedHandle>;

static REGISTRY: LazyLock<RwLock<HashMap<String, HandleConstructor>>> =
    LazyLock::new(|| RwLock::new(builtin_drivers()));

fn builtin_drivers() -> HashMap<String, HandleConstructor> {
    let mut drivers: HashMap<String, HandleConstructor> = HashMap::new();
    drivers.insert("mariadb".to_string(), MySqlHandle::open_boxed);
    drivers.insert("mysql".to_string(), MySqlHandle::open_boxed);
    drivers.insert("sqlite3".to_string(), SqliteHandle::open_boxed);
    drivers
}

/// Factory for opening database handles based on the configured driver name.
///
/// # Example
///
/// ```ignore
/// use dbhandle::drivers::ConnectionFactory;
/// use dbhandle::traits::{DbOptions, UNIX};
///
/// let opts = DbOptions::new("mysql")
///     .unix("/run/mysqld/mysqld.sock")
///     .with_db_name("app");
///
/// let handle = ConnectionFactory::open(&opts)?;
/// println!("connected to {}", handle.path());
/// ```
#[derive(Debug)]
pub struct ConnectionFactory;

impl ConnectionFactory {
    /// Open a handle using the constructor registered for `opts.driver`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No constructor is registered under the driver name
    /// - The options are invalid for the selected backend
    /// - The backend rejects the connection settings
    pub fn open(opts: &DbOptions) -> Result<BoxedHandle> {
        let constructor = REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(opts.driver.as_str())
            .copied();

        let Some(constructor) = constructor else {
            tracing::warn!(driver = %opts.driver, "no constructor registered for driver");
            return Err(DbError::UnsupportedDriver(opts.driver.clone()));
        };

        constructor(opts)
    }

    /// Register a constructor under a driver name, replacing any existing
    /// one. Returns the constructor that was replaced.
    pub fn register(
        name: impl Into<String>,
        constructor: HandleConstructor,
    ) -> Option<HandleConstructor> {
        let name = name.into();
        tracing::debug!(driver = %name, "registering database driver");
        REGISTRY
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, constructor)
    }

    /// Check if a driver name has a registered constructor.
    pub fn is_supported(name: &str) -> bool {
        REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Get all registered driver names, sorted.
    pub fn supported_drivers() -> Vec<String> {
        let mut names: Vec<String> = REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{DriverKind, TCP};

    #[test]
    fn test_builtin_drivers_registered() {
        assert!(ConnectionFactory::is_supported("mysql"));
        assert!(ConnectionFactory::is_supported("mariadb"));
        assert!(ConnectionFactory::is_supported("sqlite3"));
        assert!(!ConnectionFactory::is_supported("postgres"));

        let drivers = ConnectionFactory::supported_drivers();
        assert!(drivers.windows(2).all(|w| w[0] <= w[1]));
        for name in ["mariadb", "mysql", "sqlite3"] {
            assert!(drivers.iter().any(|d| d == name));
        }
    }

    #[test]
    fn test_factory_rejects_unknown_driver() {
        let opts = DbOptions::new("oracle");
        match ConnectionFactory::open(&opts) {
            Err(DbError::UnsupportedDriver(name)) => assert_eq!(name, "oracle"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_factory_driver_lookup_is_exact() {
        let opts = DbOptions::new("MySQL")
            .tcp(TCP, "localhost", 3306)
            .with_db_name("app");
        assert!(matches!(
            ConnectionFactory::open(&opts),
            Err(DbError::UnsupportedDriver(_))
        ));
    }

    #[test]
    fn test_factory_validates_options() {
        let opts = DbOptions::new("mysql").with_db_name("app");
        assert!(matches!(
            ConnectionFactory::open(&opts),
            Err(DbError::ConnectTypeMissing)
        ));

        let opts = DbOptions::new("sqlite3").with_db_name("app");
        assert!(matches!(
            ConnectionFactory::open(&opts),
            Err(DbError::DataPathMissing)
        ));
    }

    #[test]
    fn test_factory_opens_mariadb() {
        let opts = DbOptions::new("mariadb")
            .tcp(TCP, "localhost", 3306)
            .with_credentials("root", "password")
            .with_db_name("app");

        let handle = ConnectionFactory::open(&opts).unwrap();
        assert_eq!(handle.kind(), DriverKind::MySql);
        assert_eq!(handle.driver(), "mariadb");
        assert_eq!(handle.path(), "mysql://localhost:3306/app");
    }

    #[test]
    fn test_factory_opens_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let opts = DbOptions::new("sqlite3")
            .with_data_dir(dir.path())
            .with_db_name("app");

        let handle = ConnectionFactory::open(&opts).unwrap();
        assert_eq!(handle.kind(), DriverKind::Sqlite);
        assert!(handle.raw().as_sqlite().is_some());

        smol::block_on(async {
            assert!(!handle.table_exists("missing", None).await.unwrap());
            handle.close().await;
        });
    }

    #[test]
    fn test_register_custom_driver() {
        ConnectionFactory::register("embedded-test", SqliteHandle::open_boxed);
        assert!(ConnectionFactory::is_supported("embedded-test"));

        let dir = tempfile::tempdir().unwrap();
        let opts = DbOptions::new("embedded-test")
            .with_data_dir(dir.path())
            .with_db_name("app");

        let handle = ConnectionFactory::open(&opts).unwrap();
        assert_eq!(handle.driver(), "embedded-test");
        assert_eq!(handle.kind(), DriverKind::Sqlite);
    }
}
