//! Timetable suggestion and allocation engine.
//!
//! Assigns units (courses, recurring tasks) to fixed weekly time slots
//! without double-booking a slot, and produces heuristic, ranked
//! suggestions for which slot(s) to pick. Persistence, identity, and
//! presentation live outside this crate behind the
//! [`store::TimetableStore`] trait.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Unit`, `Slot`, `Allocation`, `Day`,
//!   `SuggestionRequest`
//! - **`scoring`**: Named pure scoring rules summed per mode into a
//!   slot desirability score
//! - **`suggest`**: Candidate builder, single-unit ranker, and the
//!   whole-timetable greedy matcher
//! - **`gate`**: Clash-checked commit boundary (single, top-of-ranking,
//!   and batch commits)
//! - **`store`**: Store trait, store errors, and an in-memory reference
//!   implementation
//! - **`validation`**: Structural integrity checks on store snapshots
//!
//! # Guarantees
//!
//! Suggestion queries are pure and deterministic over the snapshot they
//! are given. The matcher is a fast greedy heuristic, not a solver: it
//! never promises a globally optimal assignment. The only state-changing
//! path is the allocation gate, which re-checks slot occupancy against a
//! fresh snapshot immediately before every write.

pub mod error;
pub mod gate;
pub mod models;
pub mod scoring;
pub mod store;
pub mod suggest;
pub mod validation;

pub use error::{EngineError, EngineResult};
