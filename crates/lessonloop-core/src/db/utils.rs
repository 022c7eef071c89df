//! Row conversion helpers shared by the query modules.

use std::str::FromStr;

use rusqlite::types::Type;

/// Parses a text column, reporting failures as a column conversion error.
pub(crate) fn parse_column<T>(index: usize, text: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}
