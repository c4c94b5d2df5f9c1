use indexmap::IndexMap;
use std::time::{Duration, Instant};

use crate::table::Table;

/// Default lifetime of a cached sheet read, matching the backend's
/// tolerance for stale views.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
pub struct CachedTables {
    pub full: Table,
    pub view: Table,
}

struct CacheEntry {
    tables: CachedTables,
    loaded_at: Instant,
}

/// Memoizes full-sheet reads per worksheet. Entries age out by
/// wall-clock TTL and are dropped explicitly after any write; there is
/// no background eviction.
pub struct SheetCache {
    ttl: Duration,
    entries: IndexMap<String, CacheEntry>,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        SheetCache {
            ttl,
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, sheet: &str) -> Option<&CachedTables> {
        let entry = self.entries.get(sheet)?;
        if entry.loaded_at.elapsed() >= self.ttl {
            return None;
        }
        Some(&entry.tables)
    }

    pub fn put(&mut self, sheet: impl Into<String>, tables: CachedTables) {
        self.entries.insert(
            sheet.into(),
            CacheEntry {
                tables,
                loaded_at: Instant::now(),
            },
        );
    }

    /// Drop one sheet's entry. Called after every successful write so
    /// the next read reflects the change.
    pub fn invalidate(&mut self, sheet: &str) {
        self.entries.shift_remove(sheet);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SheetCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> CachedTables {
        let table = Table::new(vec!["A".into()], vec![vec!["1".into()]]);
        CachedTables {
            full: table.clone(),
            view: table,
        }
    }

    #[test]
    fn hit_within_ttl() {
        let mut cache = SheetCache::new(Duration::from_secs(60));
        cache.put("SANCION", tables());
        assert!(cache.get("SANCION").is_some());
        assert!(cache.get("CURSOS").is_none());
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let mut cache = SheetCache::new(Duration::ZERO);
        cache.put("SANCION", tables());
        assert!(cache.get("SANCION").is_none());
    }

    #[test]
    fn invalidate_drops_only_that_sheet() {
        let mut cache = SheetCache::new(Duration::from_secs(60));
        cache.put("SANCION", tables());
        cache.put("CURSOS", tables());
        cache.invalidate("SANCION");
        assert!(cache.get("SANCION").is_none());
        assert!(cache.get("CURSOS").is_some());
    }
}
