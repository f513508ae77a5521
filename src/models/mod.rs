//! Timetable domain models.
//!
//! Core data types for the suggestion and allocation engine. Units,
//! slots, and allocations are snapshots of store-owned state; suggestion
//! requests are transient caller input.
//!
//! | Type | Role |
//! |------|------|
//! | `Unit` | Course/task being placed |
//! | `Slot` | Fixed weekly interval (day + wall-clock times) |
//! | `Allocation` | Committed unit→slot binding, one per slot |
//! | `SuggestionRequest` | Mode, scope, and day preferences for one pass |

mod allocation;
mod day;
mod request;
mod slot;
mod unit;

pub use allocation::Allocation;
pub use day::{Day, ParseDayError};
pub use request::{SuggestionMode, SuggestionRequest, SuggestionScope};
pub use slot::Slot;
pub use unit::Unit;
