use crate::model::aesthetic::Filter;
use crate::model::pin::Pin;
use crate::ops::catalog::PinCatalog;

/// Trim and lowercase a free-text query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Does `pin` pass the category filter and the (already normalized) query?
///
/// An empty query matches everything; otherwise it must be a
/// case-insensitive substring of the title or of at least one tag.
pub fn matches(pin: &Pin, filter: Filter, normalized_query: &str) -> bool {
    if let Filter::Only(a) = filter
        && !pin.has_aesthetic(a)
    {
        return false;
    }
    if normalized_query.is_empty() {
        return true;
    }
    pin.title.to_lowercase().contains(normalized_query)
        || pin
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(normalized_query))
}

/// Pins passing `filter` and `query`, in catalog order.
pub fn filter<'a>(pins: &'a [Pin], filter: Filter, query: &str) -> Vec<&'a Pin> {
    let q = normalize_query(query);
    pins.iter().filter(|p| matches(p, filter, &q)).collect()
}

/// Memo of the last query result, keyed on catalog revision, filter and
/// normalized query.
#[derive(Debug, Default)]
pub struct QueryCache {
    key: Option<(u64, Filter, String)>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache::default()
    }

    /// Same result as [`filter`] over the catalog, recomputed only when an
    /// input changed.
    pub fn view<'a>(&mut self, catalog: &'a PinCatalog, filter: Filter, query: &str) -> Vec<&'a Pin> {
        let key = (catalog.revision(), filter, normalize_query(query));
        if self.key.as_ref() != Some(&key) {
            self.indices = catalog
                .pins()
                .iter()
                .enumerate()
                .filter(|(_, p)| matches(p, filter, &key.2))
                .map(|(i, _)| i)
                .collect();
            self.key = Some(key);
            self.recomputations += 1;
        }
        let pins = catalog.pins();
        self.indices.iter().filter_map(|&i| pins.get(i)).collect()
    }

    /// How many times the view was actually recomputed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::aesthetic::Aesthetic;
    use crate::model::pin::{Aesthetics, Attribution};
    use crate::model::seed::seed_pins;
    use pretty_assertions::assert_eq;

    fn pin(id: &str, title: &str, tags: &[&str], aesthetics: &[Aesthetic]) -> Pin {
        Pin {
            id: id.to_string(),
            title: title.to_string(),
            image: format!("https://example.com/{}.jpg", id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            aesthetics: Aesthetics::try_from(aesthetics.to_vec()).unwrap(),
            attribution: Attribution::default(),
        }
    }

    fn sample() -> Vec<Pin> {
        vec![
            pin("A", "Sunset", &[], &[Aesthetic::Cottagecore]),
            pin("B", "Dance", &[], &[Aesthetic::Colombian]),
        ]
    }

    fn ids(pins: &[&Pin]) -> Vec<String> {
        pins.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn scenario_from_two_pins() {
        let catalog = sample();
        let cottage = Filter::Only(Aesthetic::Cottagecore);
        assert_eq!(ids(&filter(&catalog, cottage, "sun")), vec!["A"]);
        assert_eq!(ids(&filter(&catalog, Filter::All, "dance")), vec!["B"]);
        assert!(filter(&catalog, Filter::All, "zzz").is_empty());
    }

    #[test]
    fn all_with_empty_query_is_identity() {
        let catalog = seed_pins();
        let out: Vec<Pin> = filter(&catalog, Filter::All, "")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(out, catalog);
    }

    #[test]
    fn category_filter_keeps_only_members_in_order() {
        let catalog = seed_pins();
        for a in Aesthetic::ALL {
            let out = filter(&catalog, Filter::Only(a), "");
            assert!(!out.is_empty());
            assert!(out.iter().all(|p| p.has_aesthetic(a)));
            let expected: Vec<&Pin> = catalog.iter().filter(|p| p.has_aesthetic(a)).collect();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let catalog = sample();
        assert_eq!(ids(&filter(&catalog, Filter::All, "  SUNset ")), vec!["A"]);
        assert_eq!(filter(&catalog, Filter::All, "   ").len(), 2);
    }

    #[test]
    fn query_matches_tags() {
        let catalog = vec![
            pin("A", "Untitled", &["Braids", "beads"], &[Aesthetic::BlackGirl]),
            pin("B", "Other", &["pottery"], &[Aesthetic::EarthyGoddess]),
        ];
        assert_eq!(ids(&filter(&catalog, Filter::All, "braid")), vec!["A"]);
        assert_eq!(ids(&filter(&catalog, Filter::All, "ott")), vec!["B"]);
    }

    #[test]
    fn filter_and_query_must_both_hold() {
        let catalog = seed_pins();
        let out = filter(&catalog, Filter::Only(Aesthetic::EarthyGoddess), "sunset");
        assert_eq!(ids(&out), vec!["p4"]);
    }

    #[test]
    fn multi_aesthetic_pin_matches_each_filter() {
        let catalog = seed_pins();
        for a in [Aesthetic::EarthyGoddess, Aesthetic::BlackGirl] {
            assert!(ids(&filter(&catalog, Filter::Only(a), "")).contains(&"p2".to_string()));
        }
    }

    mod cache {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::io::store::MemoryStore;
        use crate::ops::upload::UploadForm;
        use std::rc::Rc;

        #[test]
        fn repeated_view_is_not_recomputed() {
            let catalog = PinCatalog::open(Rc::new(MemoryStore::new()));
            let mut cache = QueryCache::new();

            let first = ids(&cache.view(&catalog, Filter::All, "braids"));
            let second = ids(&cache.view(&catalog, Filter::All, "  BRAIDS"));
            assert_eq!(first, second);
            assert_eq!(cache.recomputations(), 1);

            cache.view(&catalog, Filter::Only(Aesthetic::BlackGirl), "braids");
            assert_eq!(cache.recomputations(), 2);
        }

        #[test]
        fn catalog_change_invalidates() {
            let mut catalog = PinCatalog::open(Rc::new(MemoryStore::new()));
            let mut cache = QueryCache::new();
            assert!(cache.view(&catalog, Filter::All, "mural").is_empty());

            catalog.append(&UploadForm {
                title: "Street mural".into(),
                ..Default::default()
            });
            let out = cache.view(&catalog, Filter::All, "mural");
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].title, "Street mural");
            assert_eq!(cache.recomputations(), 2);
        }

        #[test]
        fn cached_view_equals_uncached_filter() {
            let catalog = PinCatalog::open(Rc::new(MemoryStore::new()));
            let mut cache = QueryCache::new();
            let f = Filter::Only(Aesthetic::Colombian);
            assert_eq!(cache.view(&catalog, f, "col"), filter(catalog.pins(), f, "col"));
        }
    }
}
