//! Offset/limit helpers shared by list endpoints.
//!
//! List routes accept `?skip=&limit=`; both are optional and normalized here
//! before they reach the query builder.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;

/// Offset/limit query parameters
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct OffsetLimit {
    /// rows to skip
    #[serde(default)]
    pub skip: Option<u64>,
    /// max rows to return
    #[serde(default)]
    pub limit: Option<u64>,
}

impl OffsetLimit {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip: Some(skip), limit: Some(limit) }
    }

    /// Fill defaults; returns `(offset, limit)`. An explicit limit is used as given, so `0` yields no rows.
    pub fn normalize(self) -> (u64, u64) {
        (self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}
