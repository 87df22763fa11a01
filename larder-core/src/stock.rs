//! Category-level stock derivations.
//!
//! Pure aggregations over a snapshot of food records; the store never feeds
//! these anything but cloned values, so they are safe from any thread.

use crate::models::{Category, Food};

/// Sum of quantities over all food owned by the category; 0 when it owns none.
pub fn current_quantity(category: &Category, foods: &[Food]) -> f64 {
    foods
        .iter()
        .filter(|f| f.category == category.id)
        .map(|f| f.quantity)
        .sum()
}

/// Negative means under-stocked, zero ideal, positive over-stocked.
pub fn quantity_difference(category: &Category, foods: &[Food]) -> f64 {
    current_quantity(category, foods) - category.ideal_quantity
}

pub fn is_low_stock(category: &Category, foods: &[Food]) -> bool {
    current_quantity(category, foods) < category.ideal_quantity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, FoodId};
    use chrono::NaiveDate;

    fn category(id: u64, ideal: f64) -> Category {
        Category {
            id: CategoryId(id),
            name: format!("category-{id}"),
            unit: "kg".to_string(),
            ideal_quantity: ideal,
        }
    }

    fn food(id: u64, category: u64, quantity: f64) -> Food {
        Food {
            id: FoodId(id),
            name: format!("food-{id}"),
            category: CategoryId(category),
            quantity,
            best_before: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    #[test]
    fn empty_category_has_zero_stock() {
        let cat = category(1, 10.0);
        assert_eq!(current_quantity(&cat, &[]), 0.0);
        assert!(is_low_stock(&cat, &[]));
    }

    #[test]
    fn sums_only_owned_food() {
        let cat = category(1, 10.0);
        let foods = vec![food(1, 1, 3.0), food(2, 1, 2.5), food(3, 2, 100.0)];
        assert_eq!(current_quantity(&cat, &foods), 5.5);
        assert_eq!(quantity_difference(&cat, &foods), -4.5);
        assert!(is_low_stock(&cat, &foods));
    }

    #[test]
    fn stock_at_ideal_is_not_low() {
        let cat = category(1, 5.0);
        let foods = vec![food(1, 1, 5.0)];
        assert_eq!(quantity_difference(&cat, &foods), 0.0);
        assert!(!is_low_stock(&cat, &foods));
    }

    #[test]
    fn overstocked_difference_is_positive() {
        let cat = category(1, 5.0);
        let foods = vec![food(1, 1, 8.0)];
        assert_eq!(quantity_difference(&cat, &foods), 3.0);
        assert!(!is_low_stock(&cat, &foods));
    }
}
