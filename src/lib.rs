//! Festival itinerary optimization.
//!
//! Selects, from a multi-day festival program, the subset of performances
//! that maximizes an additive score under per-day constraints: at most one
//! performance per time slot, both slots only at a single main venue, and no
//! performance attended twice anywhere in the itinerary.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RawPerformance`, `Performance`, `Slot`,
//!   `FestivalSchedule`, `Itinerary`, `ItineraryStats`
//! - **`ingest`**: Parsing and schedule indexing (date/slot grouping)
//! - **`validation`**: Input integrity checks (duplicate IDs, blank fields)
//! - **`planner`**: Combination enumeration, scoring, and the memoized
//!   dynamic-programming search
//! - **`config`**: Scoring weights and the slot cutoff
//!
//! # Architecture
//!
//! This crate is a pure in-memory library consumed by a presentation layer.
//! It fetches nothing, renders nothing, and persists nothing; collaborators
//! supply raw records and consume the (score, itinerary) result as opaque
//! values.
//!
//! # Example
//!
//! ```
//! use festival_planner::config::PlannerConfig;
//! use festival_planner::ingest::build_schedule;
//! use festival_planner::models::RawPerformance;
//! use festival_planner::planner::ItineraryOptimizer;
//!
//! let records = vec![
//!     RawPerformance::new("E1", "14-11-2025", "18:30")
//!         .with_category("Music")
//!         .with_venue("ATIRA, Amphitheatre"),
//!     RawPerformance::new("E2", "14-11-2025", "21:00")
//!         .with_category("Dance")
//!         .with_venue("ATIRA, Main Hall"),
//! ];
//!
//! let config = PlannerConfig::default();
//! let schedule = build_schedule(&records, &config).unwrap();
//! let itinerary = ItineraryOptimizer::new(&schedule)
//!     .with_config(config)
//!     .solve()
//!     .unwrap();
//!
//! // Same main venue, different categories: both attended.
//! assert_eq!(itinerary.score, 22);
//! assert_eq!(itinerary.len(), 2);
//! ```
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod config;
pub mod ingest;
pub mod models;
pub mod planner;
pub mod validation;
