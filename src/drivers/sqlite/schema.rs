//! SQLite table lookup through `sqlite_master`.

use super::connection::SqliteHandle;
use crate::error::Result;
use crate::traits::{matches_table, DatabaseHandle, QueryLogger};

const TABLE_EXISTS_QUERY: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = $1";

impl SqliteHandle {
    pub(super) async fn lookup_table(
        &self,
        table: &str,
        logger: Option<&QueryLogger<'_>>,
    ) -> Result<bool> {
        let query = self.format(TABLE_EXISTS_QUERY);
        if let Some(log) = logger {
            log(query.as_str());
        }
        tracing::debug!(%query, table, "checking table existence");

        let found = sqlx::query_scalar::<_, String>(&query)
            .bind(table)
            .fetch_optional(self.pool())
            .await?;

        Ok(matches_table(found, table))
    }
}
