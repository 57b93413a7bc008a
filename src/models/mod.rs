//! Festival domain models.
//!
//! Core data types for representing a festival program and a planned
//! itinerary:
//!
//! | Type | Role |
//! |------|------|
//! | `RawPerformance` | Boundary input record (all strings) |
//! | `Performance` | Parsed immutable record with derived slot & main venue |
//! | `FestivalSchedule` | Date-ordered, slot-bucketed program |
//! | `Itinerary` | Selected performances + score |

mod itinerary;
mod performance;
mod schedule;

pub use itinerary::{Itinerary, ItineraryStats};
pub use performance::{main_venue_of, Performance, RawPerformance, Slot};
pub use schedule::{DaySchedule, FestivalSchedule};
