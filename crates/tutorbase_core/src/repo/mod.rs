//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for tutorial records.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Every user-provided value reaches SQL as a bound parameter, never as
//!   interpolated statement text.
//! - Absence (zero rows for a keyed lookup, zero affected rows) is reported
//!   as data, not as an error.

pub mod tutorial_repo;
