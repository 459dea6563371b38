//! Error types returned by option validation and the database drivers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating options, opening a handle, or querying
/// through it.
///
/// The configuration variants are returned before any connection attempt.
/// Backend failures are passed through unchanged in [`DbError::Sqlx`].
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection type was configured.
    #[error("no database connection type provided")]
    ConnectTypeMissing,

    /// The connection type is not one of `tcp`, `tcp4`, `tcp6` or `unix`.
    /// Carries the rejected value.
    #[error("unsupported connection type")]
    ConnectTypeUnsupported(String),

    #[error("no database host provided")]
    HostMissing,

    #[error("no database port provided")]
    PortMissing,

    #[error("no database socket path provided")]
    SocketPathMissing,

    #[error("no database name provided")]
    NameMissing,

    /// sqlite3 requires a data directory.
    #[error("no data path provided")]
    DataPathMissing,

    /// Carries the offending path.
    #[error("data path exists but is not a directory")]
    DataPathNotDir(PathBuf),

    /// No constructor is registered under this driver name.
    #[error("unsupported database type: {0}")]
    UnsupportedDriver(String),

    /// The connection string could not be assembled.
    #[error("invalid connection string: {0}")]
    Dsn(String),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Connection or query failure reported by the backend client.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),
}

impl DbError {
    /// Whether this error was raised by option validation, before any
    /// connection attempt.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectTypeMissing
                | Self::ConnectTypeUnsupported(_)
                | Self::HostMissing
                | Self::PortMissing
                | Self::SocketPathMissing
                | Self::NameMissing
                | Self::DataPathMissing
                | Self::DataPathNotDir(_)
                | Self::UnsupportedDriver(_)
        )
    }
}

pub type Result<T, E = DbError> = std::result::Result<T, E>;
