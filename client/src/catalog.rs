use std::sync::Arc;

use statdex_protocol::{CatalogEntry, escape_html};
use statdex_stats::{MatchResult, rank};

/// Catalog snapshot loaded once per session.
///
/// Read-only after construction; clones share the same entries, so it can be
/// handed to any number of readers without locking.
///
/// Entries loaded through the gateway hold HTML-escaped text. Queries are
/// escaped the same way before comparison, so highlight spans index into the
/// escaped name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Arc<[CatalogEntry]>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Autocomplete suggestions for `query`, best first
    pub fn suggest(&self, query: &str) -> Vec<MatchResult<'_>> {
        rank(&escape_html(query), &self.entries)
    }

    /// Case-insensitive exact lookup
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        let wanted = escape_html(name.trim()).to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == wanted)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statdex_protocol::StatBlock;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new(25, "pikachu", StatBlock::new(35, 55, 40, 50, 50, 90)),
            CatalogEntry::new(26, "raichu", StatBlock::new(60, 90, 55, 90, 80, 110)),
            CatalogEntry::new(172, "pichu", StatBlock::new(20, 40, 15, 35, 35, 60)),
        ])
    }

    #[test]
    fn test_suggest() {
        let catalog = sample();
        let results = catalog.suggest("pi");
        let names: Vec<_> = results.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["pikachu", "pichu"]);
        assert!(catalog.suggest("").is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = sample();
        assert_eq!(catalog.find_by_name(" Raichu ").unwrap().id, 26);
        assert!(catalog.find_by_name("ditto").is_none());
        assert_eq!(catalog.find_by_id(172).unwrap().name, "pichu");
    }

    #[test]
    fn test_escaped_names_match_raw_queries() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new(83, "Farfetch&#39;d", StatBlock::new(52, 90, 55, 58, 62, 60)),
            CatalogEntry::new(122, "Mr. Mime", StatBlock::new(40, 45, 65, 100, 120, 90)),
        ]);

        let hits = catalog.suggest("farfetch'd");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 100);

        let hits = catalog.suggest("Farfetch'");
        assert_eq!(hits[0].entry.id, 83);
        let span = hits[0].highlight.unwrap();
        assert_eq!((span.start, span.end), (0, "Farfetch&#39;".chars().count()));

        assert_eq!(catalog.find_by_name("Farfetch'd").unwrap().id, 83);
    }

    #[test]
    fn test_clones_share_entries() {
        let catalog = sample();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.entries(), copy.entries()));
        assert_eq!(copy.len(), 3);
    }
}
