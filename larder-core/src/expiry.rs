//! Food-level expiry derivations.
//!
//! All functions are pure over `(food, today)`; `today` is always threaded
//! explicitly so callers control the clock and tests stay deterministic.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Food;

/// Forward-looking window (in days) for "expiring soon".
pub const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Whole days from `today` to the best-before date. Negative once expired.
pub fn days_until_expiry(food: &Food, today: NaiveDate) -> i64 {
    (food.best_before - today).num_days()
}

pub fn is_expired(food: &Food, today: NaiveDate) -> bool {
    food.best_before < today
}

/// Per-item check, inclusive of items expiring today.
///
/// The dashboard's per-category "expiring soon" count uses a strictly-future
/// window instead (see `report`); the two consumers intentionally disagree on
/// the `today` boundary.
pub fn is_expiring_soon(food: &Food, today: NaiveDate) -> bool {
    let days = days_until_expiry(food, today);
    (0..=EXPIRY_WINDOW_DAYS).contains(&days)
}

/// Expiry classification for display.
///
/// Total over the integer day distance: `{<0, 0, 1..=7, >7}` map to the four
/// variants in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    ExpiresToday,
    ExpiresInDays(i64),
    Fresh,
}

impl ExpiryStatus {
    pub fn of(food: &Food, today: NaiveDate) -> Self {
        Self::from_days(days_until_expiry(food, today))
    }

    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Expired,
            0 => Self::ExpiresToday,
            1..=EXPIRY_WINDOW_DAYS => Self::ExpiresInDays(days),
            _ => Self::Fresh,
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => write!(f, "Expired"),
            Self::ExpiresToday => write!(f, "Expires today"),
            Self::ExpiresInDays(1) => write!(f, "Expires in 1 day"),
            Self::ExpiresInDays(n) => write!(f, "Expires in {n} days"),
            Self::Fresh => write!(f, "Fresh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, FoodId};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn food(best_before: NaiveDate) -> Food {
        Food {
            id: FoodId(1),
            name: "Tomato".to_string(),
            category: CategoryId(1),
            quantity: 5.0,
            best_before,
        }
    }

    #[test]
    fn days_until_expiry_may_be_negative() {
        let f = food(today() - Duration::days(3));
        assert_eq!(days_until_expiry(&f, today()), -3);
        assert!(is_expired(&f, today()));
    }

    #[test]
    fn expired_matches_negative_days() {
        for offset in -10..=10 {
            let f = food(today() + Duration::days(offset));
            assert_eq!(
                is_expired(&f, today()),
                days_until_expiry(&f, today()) < 0
            );
        }
    }

    #[test]
    fn expiring_soon_includes_today_and_window_edge() {
        assert!(is_expiring_soon(&food(today()), today()));
        assert!(is_expiring_soon(&food(today() + Duration::days(7)), today()));
        assert!(!is_expiring_soon(&food(today() + Duration::days(8)), today()));
        assert!(!is_expiring_soon(&food(today() - Duration::days(1)), today()));
    }

    #[test]
    fn status_partitions_day_distance() {
        assert_eq!(ExpiryStatus::from_days(-1), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days(0), ExpiryStatus::ExpiresToday);
        assert_eq!(ExpiryStatus::from_days(1), ExpiryStatus::ExpiresInDays(1));
        assert_eq!(ExpiryStatus::from_days(7), ExpiryStatus::ExpiresInDays(7));
        assert_eq!(ExpiryStatus::from_days(8), ExpiryStatus::Fresh);
    }

    #[test]
    fn status_of_food_five_days_out() {
        let f = food(today() + Duration::days(5));
        assert_eq!(ExpiryStatus::of(&f, today()), ExpiryStatus::ExpiresInDays(5));
    }

    #[test]
    fn display_pluralizes() {
        assert_eq!(ExpiryStatus::ExpiresInDays(1).to_string(), "Expires in 1 day");
        assert_eq!(
            ExpiryStatus::ExpiresInDays(3).to_string(),
            "Expires in 3 days"
        );
        assert_eq!(ExpiryStatus::ExpiresToday.to_string(), "Expires today");
        assert_eq!(ExpiryStatus::Expired.to_string(), "Expired");
    }
}
