//! Table Constants
//!
//! Centralized defaults shared by every entity screen.

/// Rows per page when neither the config nor the caller says otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size selector
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Filter text shorter than this is treated as "no filter"
pub const DEFAULT_FILTER_MIN_CHARS: usize = 1;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "entity-table.toml";

/// Prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "entity-table.log";
