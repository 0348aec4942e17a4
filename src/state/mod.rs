//! State - Table State Modules
//!
//! Pagination and selection are independent leaf components; the entity
//! table composes them for a screen. Derived values are recomputed from
//! primitive state, never stored:
//!
//! ```text
//! UI Action → EntityTable method → Paginator / SelectionTracker → summary() → UI
//! ```

pub mod pagination;
pub mod selection;
pub mod summary;
pub mod table;

pub use pagination::{PageInfo, Paginator};
pub use selection::{KeySet, SelectionChangeHandler, SelectionTracker};
pub use summary::{HeaderCheckbox, SelectionMode, SelectionSummary};
pub use table::EntityTable;
