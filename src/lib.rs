//! Uniform connection handles over MySQL/MariaDB and SQLite.
//!
//! A driver name in [`DbOptions`] selects the backend. The factory validates
//! the backend-specific options, builds the connection settings and returns a
//! [`DatabaseHandle`] exposing a small uniform surface: close, raw pool
//! access, placeholder normalization, table existence checks and a
//! credential-free connection path for diagnostics.
//!
//! ```ignore
//! use dbhandle::{ConnectionFactory, DbOptions, TCP};
//!
//! let opts = DbOptions::new("mysql")
//!     .tcp(TCP, "localhost", 3306)
//!     .with_credentials("app", "secret")
//!     .with_db_name("inventory");
//!
//! let handle = ConnectionFactory::open(&opts)?;
//! let query = handle.format("SELECT * FROM items WHERE id = $1");
//! ```

pub mod drivers;
pub mod error;
pub mod traits;

pub use drivers::{normalize_placeholders, ConnectionFactory, HandleConstructor};
pub use error::{DbError, Result};
pub use traits::{
    BoxedHandle, ConnectType, DatabaseHandle, DbOptions, DriverKind, QueryLogger, RawPool, TCP,
    TCP4, TCP6, UNIX,
};
