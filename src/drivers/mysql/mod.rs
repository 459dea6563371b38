//! MySQL/MariaDB driver implementation.
//!
//! Opens a `DatabaseHandle` over a SQLx MySqlPool. Registered under the
//! driver names `mysql` and `mariadb`.
//!
//! # Example
//!
//! ```ignore
//! use dbhandle::drivers::mysql::MySqlHandle;
//! use dbhandle::traits::{DbOptions, TCP};
//!
//! let opts = DbOptions::new("mariadb")
//!     .tcp(TCP, "localhost", 3306)
//!     .with_credentials("user", "password")
//!     .with_db_name("mydb");
//!
//! let handle = MySqlHandle::open(&opts)?;
//! assert_eq!(handle.path(), "mysql://localhost:3306/mydb");
//! ```

mod connection;
mod options;
mod schema;

pub use connection::MySqlHandle;
