//! Query resolver: free-text and typed filters over the food inventory.
//!
//! Resolution is a pure read over a snapshot; it never mutates anything and
//! the same inputs always produce the same output order. An empty result is
//! reported as [`SearchStatus::NoResults`], never silently replaced with the
//! full listing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Food};

/// Which field the query text applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilter {
    /// Free text matched against food names and category names.
    #[default]
    None,
    /// Query is a category-name substring.
    Category,
    /// Query is an ISO `YYYY-MM-DD` date; matches food expiring on or before it.
    BestBefore,
}

/// Status token the presentation layer turns into a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Ok,
    NoResults,
    InvalidDate,
    EmptyQuery,
}

/// Resolved food sequence plus the status of the resolution.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub foods: Vec<Food>,
    pub status: SearchStatus,
}

impl SearchOutcome {
    fn of(foods: Vec<Food>) -> Self {
        let status = if foods.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Ok
        };
        Self { foods, status }
    }

    fn empty(status: SearchStatus) -> Self {
        Self {
            foods: Vec::new(),
            status,
        }
    }
}

/// Resolve a query against a snapshot of the inventory.
///
/// With no filter and no text the full inventory comes back in insertion
/// order. Ordering is only mandated for the best-before filter (ascending by
/// date); everything else preserves snapshot order.
pub fn resolve(
    filter: SearchFilter,
    query: &str,
    categories: &[Category],
    foods: &[Food],
) -> SearchOutcome {
    let query = query.trim();
    match filter {
        SearchFilter::None => {
            if query.is_empty() {
                return SearchOutcome {
                    foods: foods.to_vec(),
                    status: SearchStatus::Ok,
                };
            }
            // Single pass: a food matches on its own name OR its category's
            // name, so a hit on both fields still yields one entry.
            let needle = query.to_lowercase();
            let by_category: HashSet<CategoryId> = categories
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .map(|c| c.id)
                .collect();
            let matched = foods
                .iter()
                .filter(|f| {
                    f.name.to_lowercase().contains(&needle) || by_category.contains(&f.category)
                })
                .cloned()
                .collect();
            SearchOutcome::of(matched)
        }
        SearchFilter::Category => {
            if query.is_empty() {
                return SearchOutcome::empty(SearchStatus::EmptyQuery);
            }
            let needle = query.to_lowercase();
            let matching: HashSet<CategoryId> = categories
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .map(|c| c.id)
                .collect();
            let matched = foods
                .iter()
                .filter(|f| matching.contains(&f.category))
                .cloned()
                .collect();
            SearchOutcome::of(matched)
        }
        SearchFilter::BestBefore => {
            if query.is_empty() {
                return SearchOutcome::empty(SearchStatus::EmptyQuery);
            }
            let Ok(limit) = NaiveDate::parse_from_str(query, "%Y-%m-%d") else {
                return SearchOutcome::empty(SearchStatus::InvalidDate);
            };
            let mut matched: Vec<Food> = foods
                .iter()
                .filter(|f| f.best_before <= limit)
                .cloned()
                .collect();
            // Stable sort keeps insertion order within a date.
            matched.sort_by_key(|f| f.best_before);
            SearchOutcome::of(matched)
        }
    }
}
