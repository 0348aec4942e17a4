//! Domain - Pure Data Structures
//!
//! Entity capabilities and the record types listed by the console screens.

pub mod entity;
pub mod records;

pub use entity::{Entity, Searchable, SortDirection, SortSpec, Sortable};
pub use records::{Customer, User, Vendor};
