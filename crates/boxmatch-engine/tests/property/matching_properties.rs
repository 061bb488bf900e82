use boxmatch_core::{CatalogEntry, MatchConfig, QueryTitle};
use boxmatch_engine::{normalize, BatchMatcher, CandidateIndex, Matcher, Scorer};
use proptest::prelude::*;

const TITLE: &str = "[A-Za-z0-9 :'()\\-éèüñ]{1,40}";

fn catalog_from(titles: &[(String, Option<u16>)]) -> Vec<CatalogEntry> {
    titles
        .iter()
        .enumerate()
        .map(|(i, (title, year))| CatalogEntry::new(i as u64 + 1, format!("{title} x"), *year))
        .collect()
}

proptest! {
    #[test]
    fn canonical_form_is_a_fixed_point(title in TITLE) {
        let config = MatchConfig::default();
        let Ok(first) = normalize(&title, &config) else {
            return Ok(());
        };
        let second = normalize(first.canonical(), &config).unwrap();
        prop_assert_eq!(second.canonical(), first.canonical());
    }

    #[test]
    fn variants_are_bounded_and_distinct(title in TITLE) {
        let config = MatchConfig::default();
        if let Ok(n) = normalize(&title, &config) {
            let keys: Vec<&str> = n.keys().collect();
            prop_assert!(!keys.is_empty() && keys.len() <= 4);
            for (i, key) in keys.iter().enumerate() {
                prop_assert!(!key.is_empty());
                prop_assert!(!keys[i + 1..].contains(key));
            }
        }
    }

    #[test]
    fn scores_stay_in_unit_range(
        a in TITLE,
        b in TITLE,
        qy in proptest::option::of(1900u16..2030),
        ey in proptest::option::of(1900u16..2030),
    ) {
        let config = MatchConfig::default();
        let index = match CandidateIndex::build(&[CatalogEntry::new(1, b, ey)], &config) {
            Ok(index) => index,
            Err(_) => return Ok(()),
        };
        if let Ok(query) = normalize(&a, &config) {
            let score = Scorer::new(&config).score(&query, qy, &index.entries()[0]);
            prop_assert!((0.0..=1.0).contains(&score.value), "score {}", score.value);
        }
    }

    #[test]
    fn fallback_never_exceeds_cap(
        titles in proptest::collection::vec((TITLE, proptest::option::of(1990u16..2025)), 0..120),
        query in TITLE,
        cap in 1usize..40,
    ) {
        let config = MatchConfig { fallback_scan_cap: cap, ..Default::default() };
        let index = CandidateIndex::build(&catalog_from(&titles), &config).unwrap();
        let result = Matcher::new(&config).match_query(&QueryTitle::new(1, query), &index);
        if result.used_fallback {
            prop_assert!(result.candidates_scored <= cap);
            if result.has_partial_scan() {
                prop_assert_eq!(result.candidates_scored, cap);
            }
        }
    }

    #[test]
    fn batch_is_deterministic_and_claims_once(
        titles in proptest::collection::vec((TITLE, proptest::option::of(1990u16..2025)), 1..40),
        queries in proptest::collection::vec(TITLE, 1..20),
    ) {
        let catalog = catalog_from(&titles);
        let queries: Vec<QueryTitle> = queries
            .into_iter()
            .enumerate()
            .map(|(i, t)| QueryTitle::new(i as u32 + 1, format!("{t} x")))
            .collect();
        let matcher = BatchMatcher::default();

        let first = matcher.match_batch(&queries, &catalog).unwrap();
        let second = matcher.match_batch(&queries, &catalog).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), queries.len());

        let mut claimed: Vec<u64> = first
            .iter()
            .filter_map(|r| r.entry.as_ref().map(|e| e.id.0))
            .collect();
        let total = claimed.len();
        claimed.sort_unstable();
        claimed.dedup();
        prop_assert_eq!(claimed.len(), total);
    }
}
