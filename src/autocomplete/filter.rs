//! Prefix filtering and the per-instance suggestion cache.

use super::model::Model;
use super::types::Item;
use std::sync::Arc;

impl<I: Item> Model<I> {
    /// Recomputes the suggestion list from the settled query.
    ///
    /// Matching is a case-insensitive prefix comparison against each
    /// item's label; source order is preserved. An empty settled query
    /// matches every item. Results are cached per lowercased query and
    /// cache hits return the stored list by reference, so two hits for
    /// the same query share one allocation. Nothing is cached while the
    /// source is still pending.
    pub(super) fn compute_suggestions(&mut self) {
        let key = self.settled_query.to_lowercase();

        let cached = if self.no_cache {
            None
        } else {
            self.cache.get(&key).cloned()
        };

        self.suggestions = match cached {
            Some(hit) => hit,
            None => {
                let matches: Vec<I> = self
                    .source
                    .items
                    .iter()
                    .filter(|item| item.label().to_lowercase().starts_with(&key))
                    .cloned()
                    .collect();
                let matches = Arc::new(matches);
                if !self.no_cache && !self.source.pending {
                    self.cache.insert(key, Arc::clone(&matches));
                }
                matches
            }
        };

        self.selected_index = self.default_index();
        self.clamp_selected_index();

        // Free text is the committed value here, so an empty list has
        // nothing to offer and the dropdown closes.
        if self.allow_non_existing && self.suggestions.is_empty() {
            self.hidden = true;
        }
    }

    /// Probes the cache without touching it, for hit/miss reporting.
    pub(super) fn cache_holds(&self, query: &str) -> bool {
        !self.no_cache && self.cache.contains_key(&query.to_lowercase())
    }

    /// Keeps the highlight inside `[-1, len - 1]`.
    pub(super) fn clamp_selected_index(&mut self) {
        let max = self.suggestions.len() as isize - 1;
        self.selected_index = self.selected_index.clamp(-1, max.max(-1));
    }
}
