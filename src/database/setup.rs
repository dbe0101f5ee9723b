use crate::errors::{with_store_context, Result};

use super::connection::DbConn;

pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        with_store_context(
            conn.execute(statement, []),
            &format!("execute schema statement {}", idx + 1),
        )?;
    }

    log::debug!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_splits_into_statements() {
        let statements = split_sql_statements(include_str!("schema.sql"));
        assert_eq!(statements.len(), 4);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS players"));
    }

    #[test]
    fn test_split_skips_blank_statements() {
        let statements = split_sql_statements("SELECT 1;\n\n;  ;SELECT 2");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }
}
