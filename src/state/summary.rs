//! Selection Summary
//!
//! Derived, read-only view of a selection relative to the current page and
//! the whole dataset. Nothing here is stored between operations; the mode
//! is recomputed from the counts every time.

use serde::{Deserialize, Serialize};

/// Tri-state selection mode for the bulk-action toolbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    None,
    Page,
    All,
}

/// Visual state of the "select page" header checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCheckbox {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

/// Counts and flags derived from `(selected keys, page keys, data keys)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Rows on the current page
    pub current_page_count: usize,
    /// Rows in the dataset
    pub total_count: usize,
    /// Selected rows on the current page
    pub current_page_selected_count: usize,
    /// Raw selection size, stale keys included. Used for bulk-action labels.
    pub all_pages_selected_count: usize,
    /// Selected keys still present in the dataset
    pub visible_selected_count: usize,
    pub is_current_page_fully_selected: bool,
    pub is_all_data_fully_selected: bool,
    pub is_partial_selection: bool,
    pub selection_mode: SelectionMode,
    pub header_checkbox: HeaderCheckbox,
}

impl SelectionSummary {
    /// Build a summary from raw counts
    pub fn from_counts(
        current_page_count: usize,
        total_count: usize,
        current_page_selected_count: usize,
        all_pages_selected_count: usize,
        visible_selected_count: usize,
    ) -> Self {
        let is_current_page_fully_selected =
            current_page_count > 0 && current_page_selected_count == current_page_count;
        let is_all_data_fully_selected =
            total_count > 0 && all_pages_selected_count == total_count;
        let is_partial_selection =
            current_page_selected_count > 0 && current_page_selected_count < current_page_count;

        let selection_mode = if is_all_data_fully_selected {
            SelectionMode::All
        } else if is_current_page_fully_selected || is_partial_selection {
            SelectionMode::Page
        } else {
            SelectionMode::None
        };

        let header_checkbox = if is_current_page_fully_selected {
            HeaderCheckbox::Checked
        } else if is_partial_selection {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        };

        Self {
            current_page_count,
            total_count,
            current_page_selected_count,
            all_pages_selected_count,
            visible_selected_count,
            is_current_page_fully_selected,
            is_all_data_fully_selected,
            is_partial_selection,
            selection_mode,
            header_checkbox,
        }
    }

    /// Alias of `is_partial_selection`
    pub fn is_indeterminate(&self) -> bool {
        self.is_partial_selection
    }

    /// Whether anything is selected at all (stale keys count)
    pub fn has_selection(&self) -> bool {
        self.all_pages_selected_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_is_never_fully_selected() {
        let s = SelectionSummary::from_counts(0, 0, 0, 0, 0);
        assert!(!s.is_current_page_fully_selected);
        assert!(!s.is_all_data_fully_selected);
        assert_eq!(s.selection_mode, SelectionMode::None);
        assert_eq!(s.header_checkbox, HeaderCheckbox::Unchecked);
    }

    #[test]
    fn partial_page_is_indeterminate() {
        let s = SelectionSummary::from_counts(10, 25, 4, 4, 4);
        assert!(s.is_indeterminate());
        assert!(!s.is_current_page_fully_selected);
        assert_eq!(s.selection_mode, SelectionMode::Page);
        assert_eq!(s.header_checkbox, HeaderCheckbox::Indeterminate);
    }

    #[test]
    fn full_page_is_page_mode() {
        let s = SelectionSummary::from_counts(10, 25, 10, 10, 10);
        assert_eq!(s.selection_mode, SelectionMode::Page);
        assert_eq!(s.header_checkbox, HeaderCheckbox::Checked);
    }

    #[test]
    fn selection_on_other_pages_only_is_none_mode() {
        let s = SelectionSummary::from_counts(10, 25, 0, 3, 3);
        assert_eq!(s.selection_mode, SelectionMode::None);
        assert!(s.has_selection());
    }

    #[test]
    fn everything_selected_is_all_mode() {
        let s = SelectionSummary::from_counts(5, 25, 5, 25, 25);
        assert_eq!(s.selection_mode, SelectionMode::All);
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&SelectionMode::Page).expect("serializable");
        assert_eq!(json, "\"page\"");
    }
}
