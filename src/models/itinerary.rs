//! Itinerary (solution) model.
//!
//! An itinerary is the final selection produced by the optimizer: the chosen
//! performances in day order plus the total score. `ItineraryStats` derives
//! summary figures and audits the no-duplicate guarantee in one pass.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Performance;

/// The selected performances across all days, concatenated in day order.
///
/// Invariant: no performance identifier appears twice. The optimizer enforces
/// this globally and refuses to return an itinerary that violates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Chosen performances, day order.
    pub performances: Vec<Performance>,
    /// Total optimization score.
    pub score: i64,
}

impl Itinerary {
    /// Creates an empty itinerary with score 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an itinerary from a selection and its score.
    pub fn new(performances: Vec<Performance>, score: i64) -> Self {
        Self { performances, score }
    }

    /// Number of selected performances.
    pub fn len(&self) -> usize {
        self.performances.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }

    /// Groups the selection by date, ascending.
    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<&Performance>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&Performance>> = BTreeMap::new();
        for perf in &self.performances {
            grouped.entry(perf.date).or_default().push(perf);
        }
        grouped
    }

    /// Computes summary statistics and the duplicate audit.
    pub fn stats(&self) -> ItineraryStats {
        ItineraryStats::calculate(self)
    }
}

/// Summary figures for an itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStats {
    /// Selected performances, duplicates included.
    pub total_performances: usize,
    /// Distinct performance identifiers.
    pub unique_performances: usize,
    /// Distinct festival days attended.
    pub days_attended: usize,
    /// Distinct categories covered.
    pub categories_covered: BTreeSet<String>,
    /// Distinct main venues visited.
    pub venues: BTreeSet<String>,
    /// Identifiers appearing more than once (should always be empty).
    pub duplicate_ids: Vec<String>,
}

impl ItineraryStats {
    /// Derives statistics from an itinerary in one pass.
    pub fn calculate(itinerary: &Itinerary) -> Self {
        let mut categories = BTreeSet::new();
        let mut venues = BTreeSet::new();
        let mut dates = BTreeSet::new();
        let mut id_counts: HashMap<&str, usize> = HashMap::new();

        for perf in &itinerary.performances {
            categories.insert(perf.category.clone());
            venues.insert(perf.main_venue.clone());
            dates.insert(perf.date);
            *id_counts.entry(perf.id.as_str()).or_insert(0) += 1;
        }

        let mut duplicate_ids: Vec<String> = id_counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(id, _)| id.to_string())
            .collect();
        duplicate_ids.sort();

        Self {
            total_performances: itinerary.performances.len(),
            unique_performances: id_counts.len(),
            days_attended: dates.len(),
            categories_covered: categories,
            venues,
            duplicate_ids,
        }
    }

    /// Whether any identifier was selected more than once.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_ids.is_empty()
    }

    /// Number of distinct categories covered.
    pub fn category_count(&self) -> usize {
        self.categories_covered.len()
    }

    /// Whether every given category is covered.
    pub fn covers<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .all(|c| self.categories_covered.contains(c))
    }
}
