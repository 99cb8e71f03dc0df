use std::fmt;

use thiserror::Error;

pub const MAX_QUERY_CHARS: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("city name must not be empty")]
    Empty,

    #[error("city name is too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },
}

/// A validated, trimmed city search string. Casing is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }

        let len = trimmed.chars().count();
        if len > MAX_QUERY_CHARS {
            return Err(QueryError::TooLong { len, max: MAX_QUERY_CHARS });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for CityQuery {
    type Error = QueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
