//! Exact-key lookup structures over a catalog snapshot.

use boxmatch_core::types::collections::{FxHashMap, FxHashSet, SmallVec2};
use boxmatch_core::{CatalogEntry, CatalogId, IndexError, MatchConfig};

use crate::normalize::{normalize, NormalizedTitle};

/// A catalog entry together with the normalized forms of all its names.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    pub entry: CatalogEntry,
    /// Main title first, then each usable alternate title.
    pub names: SmallVec2<NormalizedTitle>,
}

impl IndexedEntry {
    pub fn id(&self) -> CatalogId {
        self.entry.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub keys: usize,
    pub year_keys: usize,
    /// Alternate titles with no alphanumeric content, left out of the index.
    pub skipped_alternates: usize,
}

/// Immutable index over one catalog snapshot.
///
/// Primary map: canonical string -> entries. Secondary map:
/// (canonical string, year) -> entries. No fuzzy structure; anything the
/// exact keys miss is left to the matcher's bounded fallback scan.
///
/// Build it with the same `MatchConfig` the matcher uses, since the keys
/// depend on normalization settings.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    entries: Vec<IndexedEntry>,
    positions: FxHashMap<CatalogId, usize>,
    by_key: FxHashMap<String, SmallVec2<usize>>,
    by_key_year: FxHashMap<(String, u16), SmallVec2<usize>>,
    skipped_alternates: usize,
}

impl CandidateIndex {
    /// Build an index, failing on duplicate ids or an entry whose main
    /// title normalizes to nothing. No partial index is ever returned.
    pub fn build(catalog: &[CatalogEntry], config: &MatchConfig) -> Result<Self, IndexError> {
        let mut index = Self {
            entries: Vec::with_capacity(catalog.len()),
            positions: FxHashMap::default(),
            by_key: FxHashMap::default(),
            by_key_year: FxHashMap::default(),
            skipped_alternates: 0,
        };

        for entry in catalog {
            if index.positions.contains_key(&entry.id) {
                return Err(IndexError::DuplicateId { id: entry.id });
            }
            let indexed = index.normalize_entry(entry, config)?;
            let pos = index.entries.len();
            index.positions.insert(entry.id, pos);
            index.insert_keys(&indexed, pos);
            index.entries.push(indexed);
        }

        let stats = index.stats();
        tracing::debug!(
            entries = stats.entries,
            keys = stats.keys,
            year_keys = stats.year_keys,
            skipped_alternates = stats.skipped_alternates,
            "built candidate index"
        );
        Ok(index)
    }

    fn normalize_entry(
        &mut self,
        entry: &CatalogEntry,
        config: &MatchConfig,
    ) -> Result<IndexedEntry, IndexError> {
        let main = normalize(&entry.title, config).map_err(|_| IndexError::InvalidEntryTitle {
            id: entry.id,
            title: entry.title.clone(),
        })?;

        let mut names = SmallVec2::new();
        names.push(main);
        for alternate in &entry.alternate_titles {
            match normalize(alternate, config) {
                Ok(name) => names.push(name),
                Err(error) => {
                    self.skipped_alternates += 1;
                    tracing::debug!(id = %entry.id, %error, "skipping alternate title");
                }
            }
        }

        Ok(IndexedEntry {
            entry: entry.clone(),
            names,
        })
    }

    fn insert_keys(&mut self, indexed: &IndexedEntry, pos: usize) {
        let keys: FxHashSet<&str> = indexed.names.iter().flat_map(|n| n.keys()).collect();
        for key in keys {
            self.by_key.entry(key.to_string()).or_default().push(pos);
            if let Some(year) = indexed.entry.year {
                self.by_key_year
                    .entry((key.to_string(), year))
                    .or_default()
                    .push(pos);
            }
        }
    }

    /// Entries with a name whose canonical variant equals `key`.
    pub fn lookup<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a IndexedEntry> + 'a {
        self.resolve(self.positions_for(key))
    }

    /// Entries with a name variant equal to `key` and catalog year `year`.
    pub fn lookup_year<'a>(
        &'a self,
        key: &str,
        year: u16,
    ) -> impl Iterator<Item = &'a IndexedEntry> + 'a {
        self.resolve(self.year_positions_for(key, year))
    }

    fn resolve<'a>(
        &'a self,
        positions: &'a [usize],
    ) -> impl Iterator<Item = &'a IndexedEntry> + 'a {
        positions.iter().map(move |&pos| &self.entries[pos])
    }

    pub(crate) fn positions_for(&self, key: &str) -> &[usize] {
        self.by_key.get(key).map(|p| p.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn year_positions_for(&self, key: &str, year: u16) -> &[usize] {
        self.by_key_year
            .get(&(key.to_string(), year))
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn at(&self, pos: usize) -> &IndexedEntry {
        &self.entries[pos]
    }

    /// All entries in snapshot order.
    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn get(&self, id: CatalogId) -> Option<&IndexedEntry> {
        self.positions.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.entries.len(),
            keys: self.by_key.len(),
            year_keys: self.by_key_year.len(),
            skipped_alternates: self.skipped_alternates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(catalog: &[CatalogEntry]) -> Result<CandidateIndex, IndexError> {
        CandidateIndex::build(catalog, &MatchConfig::default())
    }

    #[test]
    fn every_variant_is_a_key() {
        let index = build(&[CatalogEntry::new(1, "The Fantastic 4: First Steps", Some(2025))])
            .unwrap();
        for key in [
            "the fantastic 4 first steps",
            "fantastic 4 first steps",
            "fantastic 4",
        ] {
            assert_eq!(index.lookup(key).count(), 1, "missing key {key}");
        }
        assert_eq!(index.lookup_year("fantastic 4", 2025).count(), 1);
        assert_eq!(index.lookup_year("fantastic 4", 2024).count(), 0);
    }

    #[test]
    fn shared_keys_list_each_entry_once() {
        let index = build(&[
            CatalogEntry::new(1, "A Star Is Born", Some(1976)),
            CatalogEntry::new(2, "A Star Is Born", Some(2018)),
        ])
        .unwrap();
        let ids: Vec<u64> = index.lookup("a star is born").map(|e| e.id().0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(index.lookup_year("star is born", 2018).count(), 1);
    }

    #[test]
    fn alternate_titles_are_indexed() {
        let entry = CatalogEntry::new(7, "Léon: The Professional", Some(1994))
            .with_alternate_titles(["Leon", "???"]);
        let index = build(&[entry]).unwrap();
        assert_eq!(index.lookup("leon").count(), 1);
        assert_eq!(index.stats().skipped_alternates, 1);
        assert_eq!(index.get(CatalogId(7)).unwrap().names.len(), 2);
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let result = build(&[
            CatalogEntry::new(1, "Heat", Some(1995)),
            CatalogEntry::new(1, "Heat", Some(1995)),
        ]);
        assert_eq!(result.unwrap_err(), IndexError::DuplicateId { id: CatalogId(1) });
    }

    #[test]
    fn unusable_main_title_is_fatal() {
        let result = build(&[CatalogEntry::new(3, "...", None)]);
        assert!(matches!(result, Err(IndexError::InvalidEntryTitle { .. })));
    }
}
