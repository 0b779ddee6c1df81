use {
    crate::{
        error::{OpenSnafu, QuerySnafu, SetupSnafu},
        QueryExecutor, Result,
    },
    def::{ResultSet, Row, Value},
    rusqlite::{types::Value as SqlValue, Connection},
    snafu::ResultExt,
    tracing::debug,
};

/// A private in-memory SQLite database, dropped with the sandbox.
pub struct SqliteSandbox {
    conn: Connection,
}

impl SqliteSandbox {
    pub fn open() -> Result<Self> {
        let conn = Connection::open_in_memory().context(OpenSnafu)?;

        Ok(Self { conn })
    }
}

impl QueryExecutor for SqliteSandbox {
    fn execute_script(&self, statements: &[String]) -> Result<()> {
        for statement in statements {
            debug!(%statement, "running setup statement");

            self.conn
                .execute_batch(statement)
                .context(SetupSnafu { statement })?;
        }

        Ok(())
    }

    fn query(&self, sql: &str) -> Result<ResultSet> {
        debug!(%sql, "running query");

        let mut stmt = self.conn.prepare(sql.trim()).context(QuerySnafu)?;

        if stmt.column_count() == 0 {
            stmt.execute([]).context(QuerySnafu)?;
            return Ok(ResultSet::default());
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get::<_, SqlValue>(i).map(into_value))
                    .collect::<rusqlite::Result<Row>>()
            })
            .context(QuerySnafu)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context(QuerySnafu)?;

        Ok(ResultSet::new(columns, rows))
    }
}

fn into_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(v) => Value::Integer(v),
        SqlValue::Real(v) => Value::Float(v),
        SqlValue::Text(v) => Value::Text(v),
        // blobs have no scalar counterpart, keep them readable as a hex literal
        SqlValue::Blob(bytes) => {
            let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
            Value::Text(format!("X'{}'", hex))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blob_as_hex_literal() {
        assert_eq!(
            into_value(SqlValue::Blob(vec![0x0a, 0xff])),
            Value::from("X'0AFF'")
        );
        assert_eq!(into_value(SqlValue::Real(2.0)), Value::Float(2.0));
    }
}
