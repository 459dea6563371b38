//! SQLite option validation and database file location.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{DbError, Result};
use crate::traits::{is_blank, DbOptions};

/// Check the options sqlite3 needs: a data directory and a database name.
pub(crate) fn validate_options(opts: &DbOptions) -> Result<()> {
    if is_blank(&opts.data_dir.to_string_lossy()) {
        return Err(DbError::DataPathMissing);
    }
    if is_blank(&opts.db_name) {
        return Err(DbError::NameMissing);
    }

    Ok(())
}

/// Resolve `<data_dir>/<db_name>.db`, creating the data directory if it does
/// not exist yet.
pub(crate) fn build_path(opts: &DbOptions) -> Result<PathBuf> {
    let data_dir = opts.data_dir.as_path();

    match std::fs::metadata(data_dir) {
        Ok(meta) if !meta.is_dir() => return Err(DbError::DataPathNotDir(data_dir.to_path_buf())),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_data_dir(data_dir)?;
            tracing::debug!(path = %data_dir.display(), "created data directory");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(data_dir.join(format!("{}.db", opts.db_name.trim())))
}

#[cfg(unix)]
fn create_data_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_data_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
