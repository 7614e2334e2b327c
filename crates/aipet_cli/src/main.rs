//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `aipet_core` linkage (`ping`, version).
//! - With a database path argument, open the slot database, seed empty
//!   collections and print per-collection record counts.
//! - With an optional absolute log directory, start core file logging first.

use aipet_core::db::open_db;
use aipet_core::{
    default_log_level, init_logging, CaseStudy, DesignPattern, Entity, EntityStore, Exercise,
    ResearchPaper, SeedService, SlotStorage, SqliteSlotStorage, Token,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("aipet_core ping={}", aipet_core::ping());
    println!("aipet_core version={}", aipet_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(db_path) = args.next() else {
        return ExitCode::SUCCESS;
    };

    if let Some(log_dir) = args.next() {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match report(&db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn report(db_path: &str) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let storage = SqliteSlotStorage::try_new(&conn)?;

    let seeded = SeedService::new(&storage).seed_all()?;
    println!("seeded={}", seeded.total());

    print_count::<Token, _>(&storage)?;
    print_count::<Exercise, _>(&storage)?;
    print_count::<ResearchPaper, _>(&storage)?;
    print_count::<CaseStudy, _>(&storage)?;
    print_count::<DesignPattern, _>(&storage)?;
    Ok(())
}

fn print_count<T: Entity, S: SlotStorage>(storage: S) -> Result<(), Box<dyn Error>> {
    let store = EntityStore::<T, S>::open(storage)?;
    println!("collection={} count={}", store.collection(), store.len());
    Ok(())
}
