//! Library catalog entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog entry, assigned by the library manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(pub u64);

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CatalogId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One item of a catalog snapshot. Never mutated by matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogId,
    pub title: String,
    pub year: Option<u16>,
    #[serde(default)]
    pub alternate_titles: Vec<String>,
    #[serde(default)]
    pub monitored: bool,
    /// The library already holds a file for this entry.
    #[serde(default)]
    pub has_file: bool,
}

impl CatalogEntry {
    pub fn new(id: impl Into<CatalogId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            alternate_titles: Vec::new(),
            monitored: false,
            has_file: false,
        }
    }

    pub fn with_alternate_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_monitored(mut self, monitored: bool) -> Self {
        self.monitored = monitored;
        self
    }

    pub fn with_file(mut self, has_file: bool) -> Self {
        self.has_file = has_file;
        self
    }

    /// Already monitored or downloaded; re-adding it would be redundant.
    pub fn is_tracked(&self) -> bool {
        self.monitored || self.has_file
    }
}
