//! MySQL table lookup through `information_schema`.

use super::connection::MySqlHandle;
use crate::error::Result;
use crate::traits::{matches_table, DatabaseHandle, QueryLogger};

// CAST keeps MySQL 8 from returning the name as a binary column.
const TABLE_EXISTS_QUERY: &str = "SELECT CAST(table_name AS CHAR) FROM information_schema.tables \
     WHERE table_schema = $1 AND table_name = $2";

impl MySqlHandle {
    pub(super) async fn lookup_table(
        &self,
        table: &str,
        logger: Option<&QueryLogger<'_>>,
    ) -> Result<bool> {
        let query = self.format(TABLE_EXISTS_QUERY);
        if let Some(log) = logger {
            log(query.as_str());
        }
        tracing::debug!(%query, schema = self.db_name(), table, "checking table existence");

        let found = sqlx::query_scalar::<_, String>(&query)
            .bind(self.db_name())
            .bind(table)
            .fetch_optional(self.pool())
            .await?;

        Ok(matches_table(found, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_exists_query_uses_bound_arguments() {
        let query = crate::drivers::normalize_placeholders(TABLE_EXISTS_QUERY);
        assert_eq!(query.matches('?').count(), 2);
        assert!(!query.contains("'?'"));
        assert!(query.contains("information_schema.tables"));
    }
}
