//! Memoized dynamic-programming itinerary search.
//!
//! Explores the festival day by day. At each day the search either skips
//! (the baseline branch, evaluated first) or takes one of the day's legal
//! combinations, rejecting any combination that reuses an already consumed
//! performance identifier — the global no-duplicate guarantee lives here,
//! not in per-day scoping. Results are memoized on the full search state
//! (day index, covered categories, consumed identifiers); two states are
//! equal regardless of how they were reached, which is what makes the
//! memoization sound.
//!
//! Keeping the consumed-identifier set in the memo key trades memory for
//! correctness: dropping it would let the same performance be chosen along
//! two different histories. Festival-sized programs keep the table small.
//!
//! Ties keep the first branch found, so results are deterministic given the
//! combination enumeration order.
//!
//! # Reference
//! Bellman (1957), "Dynamic Programming"; Cormen et al. (2009),
//! "Introduction to Algorithms", Ch. 15 (memoized recursion).

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::PlannerConfig;
use crate::models::{DaySchedule, FestivalSchedule, Itinerary, Performance};

use super::{
    combinations_for_day, score_combination, CategoryInterner, CategorySet, MAX_CATEGORIES,
};

/// Search failure.
///
/// `DuplicateSelection` is a programming-defect class, not an input error:
/// the engine refuses to return a corrupted itinerary rather than silently
/// emitting duplicates.
#[derive(Error, Debug)]
pub enum SolveError {
    /// The reconstructed itinerary repeats an identifier.
    #[error("itinerary selected duplicate performances: {ids:?}")]
    DuplicateSelection { ids: Vec<String> },

    /// The program exceeds the category capacity of the coverage bitmask.
    #[error("program has {count} distinct categories; at most {MAX_CATEGORIES} are supported")]
    TooManyCategories { count: usize },
}

/// A frozen set of consumed performance identifiers, one bit per interned
/// index. Fixed width per search, so equality and hashing are canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
struct PerformanceSet {
    bits: Vec<u64>,
}

impl PerformanceSet {
    fn with_capacity(count: usize) -> Self {
        Self {
            bits: vec![0; count.div_ceil(64)],
        }
    }

    fn insert(&mut self, index: u32) {
        let index = index as usize;
        self.bits[index / 64] |= 1 << (index % 64);
    }

    fn contains(&self, index: u32) -> bool {
        let index = index as usize;
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }
}

/// Memoization key: equal states are interchangeable sub-problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    day: usize,
    covered: CategorySet,
    seen: PerformanceSet,
}

/// Dynamic-programming solver for the optimal festival itinerary.
///
/// Owns its memo table; run one search per instance and give concurrent
/// searches their own instances.
///
/// # Example
/// ```
/// use festival_planner::config::PlannerConfig;
/// use festival_planner::ingest::build_schedule;
/// use festival_planner::models::RawPerformance;
/// use festival_planner::planner::ItineraryOptimizer;
///
/// let records = vec![
///     RawPerformance::new("E1", "14-11-2025", "18:30")
///         .with_category("Music")
///         .with_venue("ATIRA"),
/// ];
/// let config = PlannerConfig::default();
/// let schedule = build_schedule(&records, &config).unwrap();
///
/// let itinerary = ItineraryOptimizer::new(&schedule).solve().unwrap();
/// assert_eq!(itinerary.score, 11);
/// ```
#[derive(Debug)]
pub struct ItineraryOptimizer<'a> {
    schedule: &'a FestivalSchedule,
    config: PlannerConfig,
}

impl<'a> ItineraryOptimizer<'a> {
    /// Creates an optimizer over a schedule with the default configuration.
    pub fn new(schedule: &'a FestivalSchedule) -> Self {
        Self {
            schedule,
            config: PlannerConfig::default(),
        }
    }

    /// Sets the scoring configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search and returns the best itinerary.
    ///
    /// Total over any well-formed schedule: an empty program yields score 0
    /// and an empty itinerary. The returned records are copies of the input
    /// records, concatenated in day order.
    pub fn solve(&self) -> Result<Itinerary, SolveError> {
        let mut search = Search::prepare(self.schedule, self.config.clone())?;

        debug!(
            days = search.days.len(),
            performances = search.ids.len(),
            categories = search.categories.len(),
            "starting itinerary search"
        );

        let no_one_seen = PerformanceSet::with_capacity(search.ids.len());
        let (score, picks) = search.best_from(0, CategorySet::EMPTY, &no_one_seen);

        // Audit the no-duplicate invariant before handing the result out.
        let mut unique = HashSet::new();
        let mut duplicates: Vec<String> = picks
            .iter()
            .filter(|p| !unique.insert(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect();
        if !duplicates.is_empty() {
            duplicates.sort();
            duplicates.dedup();
            return Err(SolveError::DuplicateSelection { ids: duplicates });
        }

        debug!(
            score,
            selected = picks.len(),
            memoized = search.memo.len(),
            "itinerary search complete"
        );

        Ok(Itinerary::new(picks.into_iter().cloned().collect(), score))
    }
}

/// One search run: interned identifiers, day list, and the memo table.
struct Search<'a> {
    days: Vec<&'a DaySchedule>,
    ids: HashMap<&'a str, u32>,
    categories: CategoryInterner,
    config: PlannerConfig,
    memo: HashMap<SearchState, (i64, Vec<&'a Performance>)>,
}

impl<'a> Search<'a> {
    /// Walks the program once, interning identifiers and categories.
    ///
    /// Repeated instances of the same show (same identifier on several days)
    /// intern to one index, which is what lets the seen-set deduplicate them
    /// across days.
    fn prepare(schedule: &'a FestivalSchedule, config: PlannerConfig) -> Result<Self, SolveError> {
        let mut ids: HashMap<&'a str, u32> = HashMap::new();
        let mut categories = CategoryInterner::new();
        let mut days = Vec::with_capacity(schedule.day_count());

        for (_, day) in schedule.days() {
            for performance in day.iter() {
                let next = ids.len() as u32;
                ids.entry(performance.id.as_str()).or_insert(next);
                categories.intern(&performance.category);
            }
            days.push(day);
        }

        if categories.len() > MAX_CATEGORIES {
            return Err(SolveError::TooManyCategories {
                count: categories.len(),
            });
        }

        Ok(Self {
            days,
            ids,
            categories,
            config,
            memo: HashMap::new(),
        })
    }

    fn id_index(&self, performance: &Performance) -> u32 {
        // Every performance in `days` was interned by `prepare`.
        self.ids[performance.id.as_str()]
    }

    /// Best score and selection from `day_index` onward.
    fn best_from(
        &mut self,
        day_index: usize,
        covered: CategorySet,
        seen: &PerformanceSet,
    ) -> (i64, Vec<&'a Performance>) {
        if day_index >= self.days.len() {
            return (0, Vec::new());
        }

        let state = SearchState {
            day: day_index,
            covered,
            seen: seen.clone(),
        };
        if let Some(cached) = self.memo.get(&state) {
            return cached.clone();
        }

        // Baseline: skip today. Evaluated first so ties resolve toward it.
        let (mut best_score, mut best_picks) = self.best_from(day_index + 1, covered, seen);

        let day = self.days[day_index];
        for combination in combinations_for_day(day) {
            if combination.is_empty() {
                continue; // the skip branch is the baseline above
            }
            if combination
                .performances()
                .iter()
                .any(|p| seen.contains(self.id_index(p)))
            {
                continue; // would reuse a consumed identifier
            }

            let (points, covered_after) =
                score_combination(&combination, covered, &self.categories, &self.config);

            let mut seen_after = seen.clone();
            for performance in combination.performances() {
                seen_after.insert(self.id_index(performance));
            }

            let (future_score, future_picks) =
                self.best_from(day_index + 1, covered_after, &seen_after);

            let total = points + future_score;
            if total > best_score {
                best_score = total;
                let mut picks = combination.performances().to_vec();
                picks.extend(future_picks);
                best_picks = picks;
            }
        }

        trace!(day = day_index, score = best_score, "memoized day state");
        self.memo.insert(state, (best_score, best_picks.clone()));
        (best_score, best_picks)
    }
}
