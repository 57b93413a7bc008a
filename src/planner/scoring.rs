//! Combination scoring and category coverage.
//!
//! The score of a day's combination is additive: a flat award per attended
//! performance plus a bonus per category not covered before that day. With
//! the default weights a new category outweighs any volume gain, so the
//! search fills coverage before piling on performances.
//!
//! Category coverage is tracked as a bitmask over interned category names,
//! which gives the memo key cheap structural equality and hashing.

use crate::config::PlannerConfig;

use super::Combination;

/// Maximum distinct categories a single search supports.
pub const MAX_CATEGORIES: usize = 64;

/// A frozen set of covered categories, one bit per interned name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u64);

impl CategorySet {
    /// The empty coverage set.
    pub const EMPTY: Self = Self(0);

    /// Adds an interned category index.
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < MAX_CATEGORIES);
        self.0 |= 1 << index;
    }

    /// Whether an interned index is covered.
    pub fn contains(self, index: usize) -> bool {
        index < MAX_CATEGORIES && self.0 & (1 << index) != 0
    }

    /// Set union.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Members of `self` not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Number of covered categories.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether nothing is covered.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Maps category names to dense bit indices.
///
/// Interning happens once, when the optimizer walks the program; scoring
/// then only touches bitmasks.
#[derive(Debug, Clone, Default)]
pub struct CategoryInterner {
    names: Vec<String>,
}

impl CategoryInterner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning its index.
    pub fn intern(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Some(index) => index,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        }
    }

    /// Index of an already interned name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name at an index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of distinct categories seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing was interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Scores a combination against the categories covered so far.
///
/// Returns the points earned and the updated coverage set:
/// `|combination| * points_per_performance + |new categories| * new_category_bonus`.
/// The empty combination scores 0 and leaves coverage unchanged. Pure and
/// deterministic.
pub fn score_combination(
    combination: &Combination<'_>,
    covered: CategorySet,
    categories: &CategoryInterner,
    config: &PlannerConfig,
) -> (i64, CategorySet) {
    if combination.is_empty() {
        return (0, covered);
    }

    let mut combination_categories = CategorySet::EMPTY;
    for performance in combination.performances() {
        if let Some(index) = categories.index_of(&performance.category) {
            combination_categories.insert(index);
        }
    }

    let new_categories = combination_categories.difference(covered);
    let points = combination.len() as i64 * config.points_per_performance
        + new_categories.len() as i64 * config.new_category_bonus;

    (points, covered.union(combination_categories))
}
