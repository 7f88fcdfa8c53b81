//! Domain model for tutorial records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by repository and service code.
//!
//! # Invariants
//! - Every persisted tutorial is identified by a database-assigned `TutorialId`.
//! - In-memory records and persisted rows are not kept in sync automatically;
//!   callers re-fetch to observe store-assigned values.

pub mod tutorial;
