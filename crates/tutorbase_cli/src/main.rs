//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise every `tutorbase_core` store operation against an in-memory
//!   database.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::process::ExitCode;

use tutorbase_core::db::open_db_in_memory;
use tutorbase_core::{SqliteTutorialRepository, Tutorial, TutorialService};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tutorbase_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("tutorbase version={}", tutorbase_core::core_version());

    let conn = open_db_in_memory()?;
    let service = TutorialService::new(SqliteTutorialRepository::try_new(&conn)?);

    let spring_id = service.create(&Tutorial::new(
        "Spring Boot Guide",
        "CRUD walkthrough",
        true,
    ))?;
    service.create(&Tutorial::new("Node Basics", "event loop primer", false))?;
    let draft_id = service.create_draft("Rust Ownership", "borrow checker notes")?;

    print_rows("all", &service.list()?)?;
    print_rows("published", &service.list_by_published(true)?)?;
    print_rows("title~spr", &service.search_titles("spr")?)?;

    service.set_published(draft_id, true)?;
    print_rows("published-after-promote", &service.list_by_published(true)?)?;

    println!("removed={}", service.remove(spring_id)?);
    println!("cleared={}", service.clear()?);

    Ok(())
}

fn print_rows(label: &str, rows: &[Tutorial]) -> Result<(), Box<dyn Error>> {
    for row in rows {
        println!("{label} {}", serde_json::to_string(row)?);
    }
    Ok(())
}
