//! Open a database handle from a config file and/or flags, print its
//! diagnostic path and optionally check whether a table exists.
//!
//! ```text
//! dbprobe --config db.json --table users
//! dbprobe --driver sqlite3 --data-dir ./data --db-name app --table users
//! RUST_LOG=dbhandle=debug dbprobe --driver mysql --connect-type tcp \
//!     --host 127.0.0.1 --port 3306 --user app --db-name app --table users
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dbhandle::{ConnectionFactory, DatabaseHandle, DbOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dbprobe", about = "Open a database handle and inspect it")]
struct Args {
    /// JSON file with connection options; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Driver name (mysql, mariadb, sqlite3)
    #[arg(long)]
    driver: Option<String>,

    /// tcp, tcp4, tcp6 or unix
    #[arg(long)]
    connect_type: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    socket: Option<String>,

    #[arg(long)]
    user: Option<String>,

    #[arg(long)]
    password: Option<String>,

    #[arg(long)]
    db_name: Option<String>,

    /// Directory holding sqlite3 database files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Table to look for
    #[arg(long)]
    table: Option<String>,

    /// Print the statement used for the table check
    #[arg(long)]
    show_query: bool,
}

impl Args {
    fn into_options(self) -> Result<(DbOptions, Option<String>, bool)> {
        let mut opts = match &self.config {
            Some(path) => DbOptions::from_json_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => DbOptions::default(),
        };

        if let Some(driver) = self.driver {
            opts.driver = driver;
        }
        if let Some(connect_type) = self.connect_type {
            opts.connect_type = connect_type;
        }
        if let Some(host) = self.host {
            opts.host = host;
        }
        if let Some(port) = self.port {
            opts.port = port;
        }
        if let Some(socket) = self.socket {
            opts.socket_path = socket;
        }
        if let Some(user) = self.user {
            opts.username = user;
        }
        if let Some(password) = self.password {
            opts.password = password;
        }
        if let Some(db_name) = self.db_name {
            opts.db_name = db_name;
        }
        if let Some(data_dir) = self.data_dir {
            opts.data_dir = data_dir;
        }

        Ok((opts, self.table, self.show_query))
    }
}

async fn run(opts: DbOptions, table: Option<String>, show_query: bool) -> Result<()> {
    let handle = ConnectionFactory::open(&opts)
        .with_context(|| format!("Failed to open {} handle", opts.driver))?;

    println!("driver: {} ({})", handle.driver(), handle.kind());
    println!("path:   {}", handle.path());

    if let Some(table) = table {
        let print_query = |query: &str| println!("query:  {query}");
        let logger: Option<&dbhandle::QueryLogger<'_>> =
            if show_query { Some(&print_query) } else { None };

        let exists = handle
            .table_exists(&table, logger)
            .await
            .with_context(|| format!("Failed to check for table {table}"))?;
        println!("table {table}: {}", if exists { "exists" } else { "missing" });
    }

    handle.close().await;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let (opts, table, show_query) = Args::parse().into_options()?;
    tracing::debug!(?opts, "resolved options");

    smol::block_on(run(opts, table, show_query))
}
