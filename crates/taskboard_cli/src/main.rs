//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open a board store per `CoreConfig` and print a per-board summary.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use taskboard_core::db::{open_db, open_db_in_memory};
use taskboard_core::{
    init_logging, BoardStore, CollectionRepository, CoreConfig, SqliteCollectionRepository,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskboard error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CoreConfig::from_env();
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }

    let conn = match &config.db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let repo = SqliteCollectionRepository::try_new(&conn)?;
    let store = if config.seed_sample_data {
        BoardStore::open(repo)?
    } else {
        BoardStore::load(repo)?
    };

    println!("taskboard_core version={}", taskboard_core::core_version());
    print_summary(&store);
    Ok(())
}

fn print_summary<R: CollectionRepository>(store: &BoardStore<R>) {
    println!("boards={}", store.boards().len());
    for board in store.boards() {
        println!("board id={} title={:?}", board.id, board.title);
        for column in store.columns_by_board_id(&board.id) {
            println!(
                "  column order={} title={:?} tasks={}",
                column.order,
                column.title,
                store.tasks_by_column_id(&column.id).len()
            );
        }
    }
}
