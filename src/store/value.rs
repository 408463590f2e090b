//! Parameter and row types exchanged with a store

use rusqlite::types::{ToSql, ToSqlOutput, Value as SqliteValue};

use super::errors::{StoreError, StoreResult};

/// A single bound parameter or column value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlValue::Null => Ok(ToSqlOutput::Owned(SqliteValue::Null)),
            SqlValue::Integer(i) => i.to_sql(),
            SqlValue::Text(s) => s.to_sql(),
        }
    }
}

impl TryFrom<SqliteValue> for SqlValue {
    type Error = StoreError;

    fn try_from(value: SqliteValue) -> StoreResult<Self> {
        match value {
            SqliteValue::Null => Ok(SqlValue::Null),
            SqliteValue::Integer(i) => Ok(SqlValue::Integer(i)),
            SqliteValue::Text(s) => Ok(SqlValue::Text(s)),
            SqliteValue::Real(_) => Err(StoreError::UnsupportedColumn("real")),
            SqliteValue::Blob(_) => Err(StoreError::UnsupportedColumn("blob")),
        }
    }
}

/// One result row: column names paired with values, in select order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn new(columns: Vec<(String, SqlValue)>) -> Self {
        Self { columns }
    }

    /// Returns the raw value of a column
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Reads a non-null text column
    pub fn text(&self, column: &str) -> StoreResult<String> {
        self.opt_text(column)?
            .ok_or_else(|| StoreError::column_type(column, "text", "null"))
    }

    /// Reads a nullable text column
    pub fn opt_text(&self, column: &str) -> StoreResult<Option<String>> {
        match self.get(column) {
            Some(SqlValue::Text(s)) => Ok(Some(s.clone())),
            Some(SqlValue::Null) => Ok(None),
            Some(SqlValue::Integer(_)) => Err(StoreError::column_type(column, "text", "integer")),
            None => Err(StoreError::MissingColumn(column.to_string())),
        }
    }

    /// Reads a nullable integer column
    pub fn opt_integer(&self, column: &str) -> StoreResult<Option<i64>> {
        match self.get(column) {
            Some(SqlValue::Integer(i)) => Ok(Some(*i)),
            Some(SqlValue::Null) => Ok(None),
            Some(SqlValue::Text(_)) => Err(StoreError::column_type(column, "integer", "text")),
            None => Err(StoreError::MissingColumn(column.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(vec![
            ("isbn".to_string(), SqlValue::from("0691161518")),
            ("pages".to_string(), SqlValue::from(264_i64)),
            ("language".to_string(), SqlValue::from(None::<String>)),
        ])
    }

    #[test]
    fn test_typed_getters() {
        let row = sample_row();
        assert_eq!(row.text("isbn").unwrap(), "0691161518");
        assert_eq!(row.opt_integer("pages").unwrap(), Some(264));
        assert_eq!(row.opt_text("language").unwrap(), None);
    }

    #[test]
    fn test_getter_errors() {
        let row = sample_row();
        assert!(matches!(row.text("language"), Err(StoreError::ColumnType { .. })));
        assert!(matches!(row.opt_integer("isbn"), Err(StoreError::ColumnType { .. })));
        assert!(matches!(row.opt_text("year"), Err(StoreError::MissingColumn(_))));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(SqlValue::from(Some(2017_i64)), SqlValue::Integer(2017));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some("en".to_string())), SqlValue::Text("en".into()));
    }
}
