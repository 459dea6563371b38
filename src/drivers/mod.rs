//! Database driver implementations.
//!
//! - **MySQL/MariaDB**: server databases via SQLx, reached over tcp or a unix socket
//! - **SQLite**: one file per database inside a data directory, via SQLx
//!
//! Each driver implements the `DatabaseHandle` trait and is registered with
//! the `ConnectionFactory` under one or more driver names.

mod factory;
mod placeholder;

pub mod mysql;
pub mod sqlite;

pub use factory::{ConnectionFactory, HandleConstructor};
pub use placeholder::normalize_placeholders;
