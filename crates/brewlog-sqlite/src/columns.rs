//! Conversions between record fields and column values

use brewlog_core::prompt::Choice;
use brewlog_core::Date;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// A [`Date`] stored as `YYYY-MM-DD` text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SqlDate(pub Date);

impl ToSql for SqlDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for SqlDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map(SqlDate)
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

pub(crate) fn sql_date(date: Option<Date>) -> Option<SqlDate> {
    date.map(SqlDate)
}

/// Unset choices are stored as `NULL`
pub(crate) fn choice_label<T: Choice>(value: T) -> Option<&'static str> {
    (value != T::UNSET).then(|| value.label())
}

#[derive(Debug, thiserror::Error)]
#[error("unknown label '{0}'")]
struct UnknownLabel(String);

/// Reads a nullable choice column
pub(crate) fn choice_column<T: Choice>(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let Some(label) = row.get::<_, Option<String>>(idx)? else {
        return Ok(T::UNSET);
    };
    T::from_label(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(UnknownLabel(label)),
        )
    })
}

pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
