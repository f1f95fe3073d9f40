//! View module - the list and detail views over fetched content

pub mod detail;
pub mod list;

pub use detail::{estimate_reading_minutes, DetailState, DisplayModel, PostDetailView, Section};
pub use list::{LoadOutcome, PaginationState, PostListView};
