//! Selection Tracker
//!
//! Single source of truth for which entity keys are selected. Bulk actions
//! are scoped either to the rows of the current page or to the whole
//! dataset; both are passed in by the caller on every call so the tracker
//! never holds a stale copy of either.
//!
//! Keys of rows that disappeared from the dataset are kept until the
//! selection is replaced or cleared. Every "currently visible" count
//! intersects the selection with the rows passed in.

use ahash::{AHashSet, RandomState};
use hashlink::LinkedHashSet;
use std::fmt;
use tracing::debug;

use crate::domain::Entity;
use crate::state::summary::SelectionSummary;

/// Insertion-ordered key set
pub type KeySet<K> = LinkedHashSet<K, RandomState>;

/// Callback invoked with the full key list after every mutating operation
pub type SelectionChangeHandler<K> = Box<dyn FnMut(&[K]) + 'static>;

/// Selected-key state for one table
pub struct SelectionTracker<K> {
    selected: KeySet<K>,
    revision: u64,
    on_change: Option<SelectionChangeHandler<K>>,
}

impl<K> SelectionTracker<K>
where
    K: Eq + std::hash::Hash + Clone + fmt::Debug,
{
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            selected: KeySet::with_hasher(RandomState::new()),
            revision: 0,
            on_change: None,
        }
    }

    /// Set the selection change handler
    pub fn on_selection_change(mut self, handler: impl FnMut(&[K]) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Replace or remove the selection change handler
    pub fn set_on_selection_change(&mut self, handler: Option<SelectionChangeHandler<K>>) {
        self.on_change = handler;
    }

    // ==================== Queries ====================

    /// Selected keys in the order they were selected
    pub fn selected_keys(&self) -> Vec<K> {
        self.selected.iter().cloned().collect()
    }

    /// Raw number of selected keys, stale keys included
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn is_selected<E: Entity<Key = K>>(&self, entity: &E) -> bool {
        self.selected.contains(entity.key())
    }

    /// Bumped on every mutating operation; used for memoization
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of selected rows in `rows`
    pub fn count_selected_in<E: Entity<Key = K>>(&self, rows: &[E]) -> usize {
        rows.iter()
            .filter(|row| self.selected.contains(row.key()))
            .count()
    }

    /// Check whether `page` is non-empty and every row on it is selected
    pub fn is_page_fully_selected<E: Entity<Key = K>>(&self, page: &[E]) -> bool {
        !page.is_empty() && page.iter().all(|row| self.selected.contains(row.key()))
    }

    /// Some, but not all, rows of `page` are selected
    pub fn is_indeterminate<E: Entity<Key = K>>(&self, page: &[E]) -> bool {
        let count = self.count_selected_in(page);
        count > 0 && count < page.len()
    }

    /// Derive the tri-state summary for `data` and its current `page`
    pub fn summary<E: Entity<Key = K>>(&self, data: &[E], page: &[E]) -> SelectionSummary {
        let data_keys: AHashSet<&K> = data.iter().map(Entity::key).collect();
        let visible_selected_count = self
            .selected
            .iter()
            .filter(|key| data_keys.contains(*key))
            .count();

        SelectionSummary::from_counts(
            page.len(),
            data.len(),
            self.count_selected_in(page),
            self.selected.len(),
            visible_selected_count,
        )
    }

    /// Rows of `data` whose key is selected, in dataset order
    pub fn selected_objects<'a, E: Entity<Key = K>>(&self, data: &'a [E]) -> Vec<&'a E> {
        data.iter()
            .filter(|row| self.selected.contains(row.key()))
            .collect()
    }

    /// Rows of the current page whose key is selected
    pub fn selected_objects_from_current_page<'a, E: Entity<Key = K>>(
        &self,
        page: &'a [E],
    ) -> Vec<&'a E> {
        self.selected_objects(page)
    }

    // ==================== Actions ====================

    /// Flip membership of a single row
    pub fn toggle_item<E: Entity<Key = K>>(&mut self, entity: &E) {
        self.toggle_key(entity.key().clone());
    }

    /// Flip membership of a single key
    pub fn toggle_key(&mut self, key: K) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
        self.commit("toggle_item");
    }

    /// Add every row of `page`; selections elsewhere are kept
    pub fn select_current_page<E: Entity<Key = K>>(&mut self, page: &[E]) {
        for row in page {
            self.selected.insert(row.key().clone());
        }
        self.commit("select_current_page");
    }

    /// Remove every row of `page`; selections elsewhere are kept
    pub fn deselect_current_page<E: Entity<Key = K>>(&mut self, page: &[E]) {
        for row in page {
            self.selected.remove(row.key());
        }
        self.commit("deselect_current_page");
    }

    /// Replace the selection with every row of `data`, dropping stale keys
    pub fn select_all_pages<E: Entity<Key = K>>(&mut self, data: &[E]) {
        self.selected.clear();
        for row in data {
            self.selected.insert(row.key().clone());
        }
        self.commit("select_all_pages");
    }

    /// Empty the selection
    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.commit("deselect_all");
    }

    /// Alias of `deselect_all`
    pub fn clear_selection(&mut self) {
        self.deselect_all();
    }

    /// Flip every row of `page`; keys outside the page are untouched
    pub fn invert_current_page<E: Entity<Key = K>>(&mut self, page: &[E]) {
        for row in page {
            let key = row.key();
            if !self.selected.remove(key) {
                self.selected.insert(key.clone());
            }
        }
        self.commit("invert_current_page");
    }

    /// Header checkbox toggle.
    ///
    /// A fully selected page is deselected. Otherwise the selection becomes
    /// exactly the rows of `page`, dropping selections on other pages. Use
    /// `select_current_page` to add a page to an existing selection. An
    /// empty page leaves the selection unchanged.
    pub fn toggle_select_current_page<E: Entity<Key = K>>(&mut self, page: &[E]) {
        if self.is_page_fully_selected(page) {
            for row in page {
                self.selected.remove(row.key());
            }
        } else if !page.is_empty() {
            self.selected.clear();
            for row in page {
                self.selected.insert(row.key().clone());
            }
        }
        self.commit("toggle_select_current_page");
    }

    /// Add keys directly, e.g. to restore a selection after a refetch
    pub fn select_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.selected.insert(key);
        }
        self.commit("select_keys");
    }

    /// Remove keys directly
    pub fn deselect_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a K>)
    where
        K: 'a,
    {
        for key in keys {
            self.selected.remove(key);
        }
        self.commit("deselect_keys");
    }

    /// Drop keys that have no row in `data`.
    ///
    /// Never called implicitly; stale keys are tolerated everywhere else.
    pub fn retain_present<E: Entity<Key = K>>(&mut self, data: &[E]) {
        let data_keys: AHashSet<&K> = data.iter().map(Entity::key).collect();
        let kept: KeySet<K> = self
            .selected
            .iter()
            .filter(|key| data_keys.contains(*key))
            .cloned()
            .collect();
        self.selected = kept;
        self.commit("retain_present");
    }

    fn commit(&mut self, operation: &'static str) {
        self.revision = self.revision.wrapping_add(1);
        debug!(operation, selected = self.selected.len(), "Selection changed");

        if let Some(handler) = self.on_change.as_mut() {
            let keys: Vec<K> = self.selected.iter().cloned().collect();
            handler(&keys);
        }
    }
}

impl<K> Default for SelectionTracker<K>
where
    K: Eq + std::hash::Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for SelectionTracker<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .field("has_handler", &self.on_change.is_some())
            .finish()
    }
}
