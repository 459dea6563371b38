//! Handle trait and configuration types.
//!
//! - **Types** (`types`): driver kinds, connection types, `DbOptions`
//! - **Connection** (`connection`): the `DatabaseHandle` trait and `RawPool`

pub mod connection;
pub mod types;

pub use connection::{BoxedHandle, DatabaseHandle, QueryLogger, RawPool};

pub use types::{ConnectType, DbOptions, DriverKind, TCP, TCP4, TCP6, UNIX};

pub(crate) use connection::matches_table;
pub(crate) use types::is_blank;
