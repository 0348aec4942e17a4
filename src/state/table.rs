//! Entity Table
//!
//! Per-screen composition of filter, sort, pagination and selection over a
//! fetched collection:
//!
//! ```text
//! items → filter → sort → rows → Paginator (page slice) → SelectionTracker
//! ```
//!
//! Filtering and sorting never touch the selection. Each screen owns its
//! own table; nothing is shared between instances.

use ahash::AHashSet;
use std::fmt;
use tracing::{debug, info};

use crate::config::TableConfig;
use crate::domain::{Entity, Searchable, SortSpec, Sortable};
use crate::helpers::Memo;
use crate::state::pagination::{PageInfo, Paginator};
use crate::state::selection::{SelectionChangeHandler, SelectionTracker};
use crate::state::summary::SelectionSummary;

/// Memo dependencies: rows revision, current page, page size, selection revision
type SummaryDeps = (u64, usize, usize, u64);

/// Filterable, sortable, paginated table with cross-page selection
pub struct EntityTable<E: Entity> {
    items: Vec<E>,
    rows: Vec<E>,
    rows_revision: u64,
    filter: String,
    filter_min_chars: usize,
    sort: Option<SortSpec>,
    paginator: Paginator,
    page_size_options: Vec<usize>,
    selection: SelectionTracker<E::Key>,
    summary_memo: Memo<SummaryDeps, SelectionSummary>,
}

impl<E> EntityTable<E>
where
    E: Entity + Searchable + Sortable + Clone,
{
    /// Create an empty table with the given settings
    pub fn new(config: &TableConfig) -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            rows_revision: 0,
            filter: String::new(),
            filter_min_chars: config.filter_min_chars,
            sort: None,
            paginator: Paginator::new(config.page_size),
            page_size_options: config.page_size_options.clone(),
            selection: SelectionTracker::new(),
            summary_memo: Memo::new(),
        }
    }

    /// Create a table over an already fetched collection
    pub fn with_items(config: &TableConfig, items: Vec<E>) -> Self {
        let mut table = Self::new(config);
        table.set_items(items);
        table
    }

    /// Set the selection change handler
    pub fn on_selection_change(mut self, handler: impl FnMut(&[E::Key]) + 'static) -> Self {
        self.selection.set_on_selection_change(Some(Box::new(handler)));
        self
    }

    /// Replace or remove the selection change handler
    pub fn set_on_selection_change(&mut self, handler: Option<SelectionChangeHandler<E::Key>>) {
        self.selection.set_on_selection_change(handler);
    }

    // ==================== Dataset ====================

    /// Replace the fetched collection (refetch). The selection is kept.
    pub fn set_items(&mut self, items: Vec<E>) {
        debug!(count = items.len(), "Table items replaced");
        self.items = items;
        self.rebuild_rows();
    }

    /// The raw fetched collection
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The filtered and sorted dataset
    pub fn data(&self) -> &[E] {
        &self.rows
    }

    /// Rows of the current page
    pub fn paginated_data(&self) -> &[E] {
        self.paginator.paginate(&self.rows)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set free-text filter; text below the minimum length is ignored
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.rebuild_rows();
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Set or clear the sort column
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.rebuild_rows();
    }

    /// Header click: same field flips direction, another field sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        let next = match &self.sort {
            Some(current) if current.field == field => SortSpec {
                field: current.field.clone(),
                direction: current.direction.reversed(),
            },
            _ => SortSpec::asc(field),
        };
        self.set_sort(Some(next));
    }

    fn active_filter(&self) -> Option<String> {
        let trimmed = self.filter.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.filter_min_chars {
            return None;
        }
        Some(trimmed.to_lowercase())
    }

    fn rebuild_rows(&mut self) {
        let mut rows: Vec<E> = match self.active_filter() {
            Some(filter) => self
                .items
                .iter()
                .filter(|item| item.matches_filter(&filter))
                .cloned()
                .collect(),
            None => self.items.clone(),
        };

        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| sort.direction.apply(a.compare_by_field(b, &sort.field)));
        }

        self.rows = rows;
        self.rows_revision = self.rows_revision.wrapping_add(1);
        self.paginator.set_total_items(self.rows.len());
        debug!(
            rows = self.rows.len(),
            items = self.items.len(),
            page = self.paginator.current_page(),
            "Table rows rebuilt"
        );
    }

    // ==================== Pagination ====================

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn page_info(&self) -> PageInfo {
        self.paginator.page_info()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Pagination widget: go to page (clamped)
    pub fn handle_page_change(&mut self, page: usize) {
        self.paginator.set_page(page);
    }

    /// Pagination widget: change page size (current page clamped)
    pub fn handle_page_size_change(&mut self, page_size: usize) {
        self.paginator.set_page_size(page_size);
    }

    // ==================== Selection queries ====================

    pub fn selection(&self) -> &SelectionTracker<E::Key> {
        &self.selection
    }

    /// Derived selection summary, memoized on rows/page/selection revisions
    pub fn summary(&self) -> SelectionSummary {
        let deps = (
            self.rows_revision,
            self.paginator.current_page(),
            self.paginator.page_size(),
            self.selection.revision(),
        );
        self.summary_memo.get_or_compute(&deps, || {
            self.selection.summary(&self.rows, self.paginated_data())
        })
    }

    pub fn is_selected(&self, entity: &E) -> bool {
        self.selection.is_selected(entity)
    }

    pub fn is_indeterminate(&self) -> bool {
        self.summary().is_partial_selection
    }

    /// Selected rows of the dataset; stale keys drop out
    pub fn selected_objects(&self) -> Vec<&E> {
        self.selection.selected_objects(&self.rows)
    }

    pub fn selected_objects_from_current_page(&self) -> Vec<&E> {
        self.selection
            .selected_objects_from_current_page(self.paginated_data())
    }

    /// Keys a bulk action applies to: the explicit selection, stale keys included
    pub fn bulk_target_keys(&self) -> Vec<E::Key> {
        self.selection.selected_keys()
    }

    // ==================== Selection actions ====================

    pub fn toggle_item(&mut self, entity: &E) {
        self.selection.toggle_item(entity);
    }

    pub fn select_current_page(&mut self) {
        let page = self.paginator.paginate(&self.rows);
        self.selection.select_current_page(page);
    }

    pub fn deselect_current_page(&mut self) {
        let page = self.paginator.paginate(&self.rows);
        self.selection.deselect_current_page(page);
    }

    pub fn select_all_pages(&mut self) {
        self.selection.select_all_pages(&self.rows);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    pub fn invert_current_page(&mut self) {
        let page = self.paginator.paginate(&self.rows);
        self.selection.invert_current_page(page);
    }

    /// Header checkbox: deselect a full page, otherwise select only this page
    pub fn toggle_select_current_page(&mut self) {
        let page = self.paginator.paginate(&self.rows);
        self.selection.toggle_select_current_page(page);
    }

    /// Drop the deleted rows after a successful bulk delete and clear the
    /// selection
    pub fn apply_bulk_delete(&mut self, deleted: &[E::Key]) {
        let before = self.items.len();
        let deleted_keys: AHashSet<&E::Key> = deleted.iter().collect();
        self.items.retain(|item| !deleted_keys.contains(item.key()));
        info!(
            requested = deleted.len(),
            removed = before - self.items.len(),
            "Bulk delete applied"
        );
        self.rebuild_rows();
        self.selection.clear_selection();
    }
}

impl<E: Entity> fmt::Debug for EntityTable<E>
where
    E::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityTable")
            .field("items", &self.items.len())
            .field("rows", &self.rows.len())
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("paginator", &self.paginator)
            .field("selection", &self.selection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, User, Vendor};
    use crate::state::summary::SelectionMode;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn users(n: u64) -> Vec<User> {
        (1..=n)
            .map(|id| User {
                id,
                username: format!("user{id:02}"),
                full_name: format!("User {id}"),
                email: format!("user{id}@example.com"),
                active: id % 2 == 0,
            })
            .collect()
    }

    fn table(n: u64, page_size: usize) -> EntityTable<User> {
        let config = TableConfig {
            page_size,
            ..TableConfig::default()
        };
        EntityTable::with_items(&config, users(n))
    }

    fn page_ids(table: &EntityTable<User>) -> Vec<u64> {
        table.paginated_data().iter().map(|u| u.id).collect()
    }

    #[test]
    fn twenty_five_rows_scenario() {
        let mut t = table(25, 10);
        assert_eq!(t.total_pages(), 3);

        t.select_current_page();
        let s = t.summary();
        assert_eq!(s.all_pages_selected_count, 10);
        assert_eq!(s.selection_mode, SelectionMode::Page);

        t.handle_page_change(2);
        t.select_current_page();
        let s = t.summary();
        assert_eq!(s.all_pages_selected_count, 20);
        assert_eq!(s.selection_mode, SelectionMode::Page);
        assert!(!s.is_all_data_fully_selected);

        t.select_all_pages();
        let s = t.summary();
        assert_eq!(s.selection_mode, SelectionMode::All);
        assert_eq!(s.all_pages_selected_count, 25);
    }

    #[test]
    fn page_size_change_clamps_page() {
        let mut t = table(25, 10);
        t.handle_page_change(3);
        t.handle_page_size_change(50);
        assert_eq!(t.total_pages(), 1);
        assert_eq!(t.current_page(), 1);
        assert_eq!(t.paginated_data().len(), 25);
    }

    #[test]
    fn selection_is_independent_of_pages() {
        let mut t = table(25, 10);
        t.select_current_page();
        t.handle_page_change(3);
        let s = t.summary();
        assert_eq!(s.current_page_selected_count, 0);
        assert_eq!(s.all_pages_selected_count, 10);
        assert_eq!(s.selection_mode, SelectionMode::None);
        assert_eq!(page_ids(&t), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn filter_keeps_selection_and_clamps_page() {
        let mut t = table(25, 10);
        t.handle_page_change(3);
        t.select_current_page();

        t.set_filter("user0");
        assert_eq!(t.data().len(), 9);
        assert_eq!(t.current_page(), 1);

        let s = t.summary();
        assert_eq!(s.all_pages_selected_count, 5);
        assert_eq!(s.visible_selected_count, 0);
        assert!(t.selected_objects().is_empty());

        t.set_filter("");
        assert_eq!(t.selected_objects().len(), 5);
    }

    #[test]
    fn short_filter_is_ignored() {
        let config = TableConfig {
            filter_min_chars: 3,
            ..TableConfig::default()
        };
        let mut t = EntityTable::with_items(&config, users(12));
        t.set_filter("us");
        assert_eq!(t.data().len(), 12);
        // user10..user12 by username, user01 by email
        t.set_filter("user1");
        assert_eq!(t.data().len(), 4);
    }

    #[test]
    fn sort_toggles_direction() {
        let mut t = table(5, 10);
        t.toggle_sort("id");
        assert_eq!(page_ids(&t), vec![1, 2, 3, 4, 5]);
        t.toggle_sort("id");
        assert_eq!(t.sort().map(|s| s.direction), Some(SortDirection::Desc));
        assert_eq!(page_ids(&t), vec![5, 4, 3, 2, 1]);
        t.toggle_sort("email");
        assert_eq!(t.sort().map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn sort_moves_rows_across_pages_without_touching_selection() {
        let mut t = table(20, 10);
        t.select_current_page();
        t.set_sort(Some(SortSpec::desc("id")));

        let s = t.summary();
        assert_eq!(page_ids(&t), (11..=20).rev().collect::<Vec<_>>());
        assert_eq!(s.current_page_selected_count, 0);
        assert_eq!(s.all_pages_selected_count, 10);
    }

    #[test]
    fn header_toggle_drops_other_pages() {
        let mut t = table(25, 10);
        t.select_current_page();
        t.handle_page_change(2);
        let first = t.paginated_data()[0].clone();
        t.toggle_item(&first);
        assert!(t.is_indeterminate());

        t.toggle_select_current_page();
        let s = t.summary();
        assert!(s.is_current_page_fully_selected);
        assert_eq!(s.all_pages_selected_count, 10);

        t.handle_page_change(1);
        assert_eq!(t.summary().current_page_selected_count, 0);
    }

    #[test]
    fn invert_current_page() {
        let mut t = table(25, 10);
        let row = t.paginated_data()[0].clone();
        t.toggle_item(&row);
        t.invert_current_page();

        let s = t.summary();
        assert_eq!(s.current_page_selected_count, 9);
        assert!(!t.is_selected(&row));
    }

    #[test]
    fn stale_keys_after_refetch() {
        let mut t = table(5, 10);
        t.select_all_pages();

        let mut remaining = users(5);
        remaining.retain(|u| u.id != 3);
        t.set_items(remaining);

        let s = t.summary();
        assert_eq!(s.all_pages_selected_count, 5);
        assert!(!s.is_all_data_fully_selected);
        let ids: Vec<u64> = t.selected_objects().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
        assert_eq!(t.bulk_target_keys().len(), 5);
    }

    #[test]
    fn bulk_delete_clears_selection_and_clamps_page() {
        let mut t = table(25, 10);
        t.handle_page_change(3);
        t.select_current_page();
        let targets = t.bulk_target_keys();

        t.apply_bulk_delete(&targets);
        assert_eq!(t.items().len(), 20);
        assert!(t.selection().is_empty());
        assert_eq!(t.total_pages(), 2);
        assert_eq!(t.current_page(), 2);
    }

    #[test]
    fn bulk_delete_of_a_large_selection_scales_linearly() {
        let mut t = table(50_000, 25);
        t.select_all_pages();
        let targets = t.bulk_target_keys();
        assert_eq!(targets.len(), 50_000);

        let started = std::time::Instant::now();
        t.apply_bulk_delete(&targets);
        let elapsed = started.elapsed();

        assert!(t.items().is_empty());
        assert!(t.data().is_empty());
        assert!(t.selection().is_empty());
        assert_eq!(t.total_pages(), 1);
        assert_eq!(t.current_page(), 1);
        // a quadratic scan over 50k keys takes tens of seconds
        assert!(elapsed.as_secs() < 5, "bulk delete took {elapsed:?}");
    }

    #[test]
    fn bulk_delete_keeps_unselected_rows() {
        let mut t = table(1_000, 10);
        t.select_all_pages();
        let keep: Vec<u64> = (1..=1_000).filter(|id| id % 100 == 0).collect();
        t.selection.deselect_keys(&keep);

        let targets = t.bulk_target_keys();
        t.apply_bulk_delete(&targets);
        let ids: Vec<u64> = t.items().iter().map(|u| u.id).collect();
        assert_eq!(ids, keep);
    }

    #[test]
    fn bulk_delete_fires_the_handler_once() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut t = table(25, 10).on_selection_change(move |keys: &[u64]| {
            sink.borrow_mut().push(keys.len());
        });

        t.select_all_pages();
        let targets = t.bulk_target_keys();
        t.apply_bulk_delete(&targets);

        assert_eq!(*seen.borrow(), vec![25, 0]);
    }

    #[test]
    fn summary_is_memoized_until_something_changes() {
        let mut t = table(25, 10);
        let first = t.summary();
        assert_eq!(t.summary(), first);

        t.select_current_page();
        assert_ne!(t.summary(), first);
    }

    #[test]
    fn callback_sees_post_mutation_keys() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut t = table(25, 10).on_selection_change(move |keys: &[u64]| {
            sink.borrow_mut().push(keys.len());
        });

        t.select_current_page();
        t.handle_page_change(2);
        t.select_current_page();
        t.deselect_current_page();
        t.deselect_all();

        assert_eq!(*seen.borrow(), vec![10, 20, 10, 0]);
    }

    #[test]
    fn vendors_are_keyed_by_code() {
        let vendors = vec![
            Vendor {
                vendor_code: "V-2".to_string(),
                name: "Globex".to_string(),
                city: "Oslo".to_string(),
            },
            Vendor {
                vendor_code: "V-1".to_string(),
                name: "Acme".to_string(),
                city: "Lyon".to_string(),
            },
        ];
        let mut t = EntityTable::with_items(&TableConfig::default(), vendors);
        t.toggle_sort("vendorCode");
        let first = t.paginated_data()[0].clone();
        t.toggle_item(&first);
        assert_eq!(t.bulk_target_keys(), vec!["V-1".to_string()]);
    }
}
