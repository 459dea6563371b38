//! Driver kinds, connection types and the flat options struct.
//!
//! This module contains:
//! - `DriverKind` - Backends a handle can be opened against
//! - `ConnectType` - How a server-based backend is reached
//! - `DbOptions` - Configuration accepted by every driver

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Connection type for tcp (IPv4 or IPv6)
pub const TCP: &str = "tcp";
/// Connection type for tcp over IPv4
pub const TCP4: &str = "tcp4";
/// Connection type for tcp over IPv6
pub const TCP6: &str = "tcp6";
/// Connection type for a unix domain socket
pub const UNIX: &str = "unix";

/// Backends a handle can be opened against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// MySQL and MariaDB
    MySql,
    /// SQLite3
    Sqlite,
}

impl DriverKind {
    /// Get the display name for this driver kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::Sqlite => "SQLite",
        }
    }

    /// Get the default port for server-based databases
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::MySql => Some(3306),
            Self::Sqlite => None,
        }
    }

    /// Check if this driver kind is file-based
    pub fn is_file_based(&self) -> bool {
        matches!(self, Self::Sqlite)
    }

    /// Map a driver name onto the backend it selects
    pub fn from_driver_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Some(Self::MySql),
            "sqlite3" | "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

impl std::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a server-based backend is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectType {
    Tcp,
    Tcp4,
    Tcp6,
    Unix,
}

impl ConnectType {
    /// Parse a configured connection type. Matching is exact, like the
    /// constants it mirrors.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            TCP => Some(Self::Tcp),
            TCP4 => Some(Self::Tcp4),
            TCP6 => Some(Self::Tcp6),
            UNIX => Some(Self::Unix),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => TCP,
            Self::Tcp4 => TCP4,
            Self::Tcp6 => TCP6,
            Self::Unix => UNIX,
        }
    }

    /// Whether this connection type needs a host and port
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Unix)
    }
}

/// Configuration accepted by every driver.
///
/// Not every field applies to every backend: sqlite3 only reads `data_dir`
/// and `db_name`, MySQL reads everything but `data_dir`. Blank strings and a
/// zero port count as "not provided".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbOptions {
    /// Directory holding the database files (sqlite3 only)
    pub data_dir: PathBuf,
    /// Driver name used to select the backend
    pub driver: String,
    /// `tcp`, `tcp4`, `tcp6` or `unix`
    pub connect_type: String,
    /// Address the database server listens on
    pub host: String,
    /// Port the database server listens on
    pub port: u16,
    /// Unix socket path
    pub socket_path: String,
    pub username: String,
    /// Never serialized
    #[serde(skip_serializing)]
    pub password: String,
    /// Database name; for sqlite3 the file name without the `.db` extension
    pub db_name: String,
}

impl std::fmt::Debug for DbOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbOptions")
            .field("data_dir", &self.data_dir)
            .field("driver", &self.driver)
            .field("connect_type", &self.connect_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("socket_path", &self.socket_path)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("db_name", &self.db_name)
            .finish()
    }
}

impl DbOptions {
    /// Create options for the given driver name
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            ..Self::default()
        }
    }

    /// Parse options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// Reach the server over tcp (`tcp`, `tcp4` or `tcp6`)
    pub fn tcp(mut self, connect_type: &str, host: impl Into<String>, port: u16) -> Self {
        self.connect_type = connect_type.to_string();
        self.host = host.into();
        self.port = port;
        self
    }

    /// Reach the server over a unix socket
    pub fn unix(mut self, socket_path: impl Into<String>) -> Self {
        self.connect_type = UNIX.to_string();
        self.socket_path = socket_path.into();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// The backend selected by `driver`, if it names a known one
    pub fn driver_kind(&self) -> Option<DriverKind> {
        DriverKind::from_driver_name(&self.driver)
    }
}

/// Whether a configured string is absent once surrounding whitespace is
/// ignored.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
