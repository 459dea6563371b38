//! SQLite driver implementation.
//!
//! Opens a `DatabaseHandle` over a SQLx SqlitePool. Registered under the
//! driver name `sqlite3`. Each database lives in its own file,
//! `<data_dir>/<db_name>.db`.
//!
//! # Example
//!
//! ```ignore
//! use dbhandle::drivers::sqlite::SqliteHandle;
//! use dbhandle::traits::DbOptions;
//!
//! let opts = DbOptions::new("sqlite3")
//!     .with_data_dir("/var/lib/app")
//!     .with_db_name("app");
//!
//! let handle = SqliteHandle::open(&opts)?;
//! assert_eq!(handle.path(), "/var/lib/app/app.db");
//! ```

mod connection;
mod options;
mod schema;

pub use connection::SqliteHandle;
