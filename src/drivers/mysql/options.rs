//! MySQL option validation and connection string construction.

use std::net::Ipv6Addr;

use sqlx::mysql::MySqlConnectOptions;
use url::Url;

use crate::error::{DbError, Result};
use crate::traits::{is_blank, ConnectType, DbOptions};

/// Check the options MySQL needs and return the parsed connection type.
///
/// Checks run in a fixed order: connection type, database name, then the
/// fields the connection type requires.
pub(crate) fn validate_options(opts: &DbOptions) -> Result<ConnectType> {
    if is_blank(&opts.connect_type) {
        return Err(DbError::ConnectTypeMissing);
    }
    if is_blank(&opts.db_name) {
        return Err(DbError::NameMissing);
    }

    let connect_type = ConnectType::parse(opts.connect_type.trim())
        .ok_or_else(|| DbError::ConnectTypeUnsupported(opts.connect_type.clone()))?;

    if connect_type.is_network() {
        if is_blank(&opts.host) {
            return Err(DbError::HostMissing);
        }
        if opts.port == 0 {
            return Err(DbError::PortMissing);
        }
    } else if is_blank(&opts.socket_path) {
        return Err(DbError::SocketPathMissing);
    }

    Ok(connect_type)
}

/// Build the sqlx connect options from validated options.
///
/// Credentials are passed through verbatim, never round-tripped through a
/// URL, so `%` and other reserved characters reach the server unchanged.
pub(crate) fn build_connect_options(
    opts: &DbOptions,
    connect_type: ConnectType,
) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new().database(opts.db_name.trim());

    options = if connect_type.is_network() {
        options.host(opts.host.trim()).port(opts.port)
    } else {
        options.socket(opts.socket_path.trim())
    };

    if !opts.username.is_empty() {
        options = options.username(&opts.username);
    }
    if !opts.password.is_empty() {
        options = options.password(&opts.password);
    }

    options
}

/// Build the connection path reported for diagnostics. It never carries
/// credentials.
///
/// tcp: `mysql://host:port/db`
/// unix: `mysql://localhost/db?socket=/path/to/mysqld.sock`
pub(crate) fn diagnostic_path(opts: &DbOptions, connect_type: ConnectType) -> Result<String> {
    let mut dsn = Url::parse("mysql://localhost")?;

    if connect_type.is_network() {
        let host = opts.host.trim();
        // IPv6 literals must be bracketed in a URL authority
        if host.parse::<Ipv6Addr>().is_ok() {
            dsn.set_host(Some(&format!("[{host}]")))?;
        } else {
            dsn.set_host(Some(host))?;
        }
        dsn.set_port(Some(opts.port))
            .map_err(|()| DbError::Dsn(format!("cannot set port {}", opts.port)))?;
    } else {
        dsn.query_pairs_mut()
            .append_pair("socket", opts.socket_path.trim());
    }

    dsn.path_segments_mut()
        .map_err(|()| DbError::Dsn("connection string has no path".to_string()))?
        .clear()
        .push(opts.db_name.trim());

    Ok(dsn.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{TCP, TCP4, TCP6};

    fn tcp_options() -> DbOptions {
        DbOptions::new("mysql")
            .tcp(TCP, "db.internal", 3306)
            .with_credentials("app", "s3cr3t")
            .with_db_name("inventory")
    }

    #[test]
    fn test_validate_tcp_ok() {
        assert_eq!(validate_options(&tcp_options()).unwrap(), ConnectType::Tcp);

        let opts = tcp_options().tcp(TCP4, "10.0.0.5", 3306);
        assert_eq!(validate_options(&opts).unwrap(), ConnectType::Tcp4);
    }

    #[test]
    fn test_validate_unix_ok() {
        let opts = DbOptions::new("mysql")
            .unix("/run/mysqld/mysqld.sock")
            .with_db_name("inventory");
        assert_eq!(validate_options(&opts).unwrap(), ConnectType::Unix);
    }

    #[test]
    fn test_validate_missing_connect_type() {
        let mut opts = tcp_options();
        opts.connect_type = "  ".to_string();
        assert!(matches!(validate_options(&opts), Err(DbError::ConnectTypeMissing)));
    }

    #[test]
    fn test_validate_missing_db_name() {
        let opts = tcp_options().with_db_name("");
        assert!(matches!(validate_options(&opts), Err(DbError::NameMissing)));
    }

    #[test]
    fn test_validate_connect_type_checked_before_db_name() {
        let opts = DbOptions::new("mysql");
        assert!(matches!(validate_options(&opts), Err(DbError::ConnectTypeMissing)));
    }

    #[test]
    fn test_validate_missing_host() {
        let opts = tcp_options().tcp(TCP, " ", 3306);
        assert!(matches!(validate_options(&opts), Err(DbError::HostMissing)));
    }

    #[test]
    fn test_validate_missing_port() {
        let opts = tcp_options().tcp(TCP6, "::1", 0);
        assert!(matches!(validate_options(&opts), Err(DbError::PortMissing)));
    }

    #[test]
    fn test_validate_missing_socket_path() {
        let opts = tcp_options().unix("");
        assert!(matches!(validate_options(&opts), Err(DbError::SocketPathMissing)));
    }

    #[test]
    fn test_validate_unsupported_connect_type() {
        let opts = tcp_options().tcp("udp", "db.internal", 3306);
        match validate_options(&opts) {
            Err(DbError::ConnectTypeUnsupported(ct)) => assert_eq!(ct, "udp"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_diagnostic_path_tcp() {
        let path = diagnostic_path(&tcp_options(), ConnectType::Tcp).unwrap();
        assert_eq!(path, "mysql://db.internal:3306/inventory");
        assert!(!path.contains("app"));
        assert!(!path.contains("s3cr3t"));
    }

    #[test]
    fn test_diagnostic_path_ipv6_host() {
        let opts = tcp_options().tcp(TCP6, "::1", 3307);
        let path = diagnostic_path(&opts, ConnectType::Tcp6).unwrap();
        assert_eq!(path, "mysql://[::1]:3307/inventory");
    }

    #[test]
    fn test_diagnostic_path_unix() {
        let opts = tcp_options().unix("/run/mysqld/mysqld.sock");
        let path = diagnostic_path(&opts, ConnectType::Unix).unwrap();
        let url = Url::parse(&path).unwrap();

        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.path(), "/inventory");
        let socket = url
            .query_pairs()
            .find(|(k, _)| k == "socket")
            .map(|(_, v)| v.into_owned());
        assert_eq!(socket.as_deref(), Some("/run/mysqld/mysqld.sock"));
    }

    #[test]
    fn test_connect_options_tcp() {
        let options = build_connect_options(&tcp_options(), ConnectType::Tcp);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("inventory"));
        assert!(options.get_socket().is_none());
    }

    #[test]
    fn test_connect_options_unix() {
        let opts = tcp_options().unix("/run/mysqld/mysqld.sock");
        let options = build_connect_options(&opts, ConnectType::Unix);

        assert_eq!(
            options.get_socket().map(|p| p.as_path()),
            Some(std::path::Path::new("/run/mysqld/mysqld.sock"))
        );
        assert_eq!(options.get_database(), Some("inventory"));
    }

    #[test]
    fn test_connect_options_keep_percent_in_credentials() {
        let opts = tcp_options().with_credentials("u%41", "ab%41cd");
        let options = build_connect_options(&opts, ConnectType::Tcp);

        assert_eq!(options.get_username(), "u%41");
        let debug = format!("{:?}", options);
        assert!(debug.contains("\"ab%41cd\""));
        assert!(!debug.contains("\"abAcd\""));
    }

    #[test]
    fn test_connect_options_keep_reserved_characters() {
        let opts = tcp_options().with_credentials("app", "p@ss:word/1");
        let options = build_connect_options(&opts, ConnectType::Tcp);
        assert!(format!("{:?}", options).contains("\"p@ss:word/1\""));
    }
}
