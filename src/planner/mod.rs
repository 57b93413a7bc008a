//! Itinerary planning engine.
//!
//! Three layers, leaf to root:
//!
//! - **`combinations`**: legal attendance options for one day (skip; one per
//!   slot; both slots when venue-locked)
//! - **`scoring`**: additive combination score plus category-coverage update
//! - **`optimizer`**: memoized day-by-day dynamic-programming search with a
//!   global no-duplicate guarantee
//!
//! The engine is single-threaded and pure: no I/O during the search, one
//! memo table per optimizer instance, nothing shared between instances.

mod combinations;
mod optimizer;
mod scoring;

pub use combinations::{combinations_for_day, Combination};
pub use optimizer::{ItineraryOptimizer, SolveError};
pub use scoring::{score_combination, CategoryInterner, CategorySet, MAX_CATEGORIES};
