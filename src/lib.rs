//! Entity Table Library
//!
//! Client-side pagination and cross-page bulk selection for the entity
//! management screens of an administrative console (users, vendors,
//! customers, ...). The dataset is already fetched into memory; this crate
//! decides which page is shown and which rows a bulk action applies to.

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod state;

pub use config::{ConsoleConfig, TableConfig};
pub use domain::{Entity, Searchable, SortDirection, SortSpec, Sortable};
pub use error::{Error, Result};
pub use state::{
    EntityTable, HeaderCheckbox, PageInfo, Paginator, SelectionMode, SelectionSummary,
    SelectionTracker,
};
