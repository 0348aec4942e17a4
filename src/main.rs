//! Entity Table - Demo Entry Point
//!
//! Walks a users table through paging and bulk selection and logs the
//! derived state after each step.

use std::process::ExitCode;

use entity_table::domain::User;
use entity_table::helpers::{get_or_create_log_dir, init_logging, is_development};
use entity_table::{ConsoleConfig, EntityTable, Result};

fn sample_users(count: u64) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id,
            username: format!("user{id:03}"),
            full_name: format!("Sample User {id}"),
            email: format!("user{id}@example.com"),
            active: id % 3 != 0,
        })
        .collect()
}

fn log_state(step: &str, table: &EntityTable<User>) {
    let page = table.page_info();
    let summary = table.summary();
    tracing::info!(
        step,
        page = page.current_page,
        total_pages = page.total_pages,
        on_page = summary.current_page_selected_count,
        selected = summary.all_pages_selected_count,
        mode = ?summary.selection_mode,
        header = ?summary.header_checkbox,
        "Table state"
    );
}

fn run() -> Result<()> {
    let config = ConsoleConfig::try_load()?.for_screen("users");
    let mut table = EntityTable::with_items(&config, sample_users(25)).on_selection_change(
        |keys: &[u64]| tracing::debug!(count = keys.len(), "Selection mirrored"),
    );
    log_state("loaded", &table);

    table.select_current_page();
    log_state("select page 1", &table);

    table.handle_page_change(2);
    table.select_current_page();
    log_state("select page 2", &table);

    table.select_all_pages();
    log_state("select all pages", &table);

    table.handle_page_change(table.total_pages());
    table.toggle_select_current_page();
    log_state("header toggle on last page", &table);

    let targets = table.bulk_target_keys();
    table.apply_bulk_delete(&targets);
    log_state("bulk delete", &table);

    Ok(())
}

fn main() -> ExitCode {
    let log_dir = if is_development() {
        None
    } else {
        get_or_create_log_dir().ok()
    };
    let _guard = match init_logging(log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    tracing::info!("Starting entity table demo...");

    // returned, not `process::exit`, so the log guard flushes on drop
    exit_code(run())
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Demo failed");
            ExitCode::FAILURE
        }
    }
}
