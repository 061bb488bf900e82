//! Externally-ranked query titles.

use serde::{Deserialize, Serialize};

/// One title from the weekly box-office list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTitle {
    /// 1-based position in the external ranking. Lower ranks claim first.
    pub rank: u32,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
}

impl QueryTitle {
    pub fn new(rank: u32, title: impl Into<String>) -> Self {
        Self {
            rank,
            title: title.into(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}
