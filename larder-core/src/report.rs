//! Aggregation reporter: dashboard and shopping-list summaries.
//!
//! Output types are plain serializable records ready for templating; nothing
//! here formats text or touches the store directly.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::expiry::EXPIRY_WINDOW_DAYS;
use crate::models::{Category, CategoryId, Food};
use crate::stock;

/// How many under-stocked categories the dashboard highlight list shows.
const HIGHLIGHT_LIMIT: usize = 5;

/// One under-stocked category on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct StockShortfall {
    pub category_id: CategoryId,
    pub category_name: String,
    pub current_quantity: f64,
    pub ideal_quantity: f64,
    pub unit: String,
    /// `ideal_quantity - current_quantity`, always positive here.
    pub quantity_needed: f64,
}

/// Per-category count of food expiring within the next week.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiringSoonCount {
    pub category_id: CategoryId,
    pub category_name: String,
    pub count: usize,
}

/// Parallel series for the stock chart, one entry per category.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub ideal: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_categories: usize,
    pub total_food_items: usize,
    /// Every under-stocked category, in category iteration order.
    pub below_ideal: Vec<StockShortfall>,
    pub num_categories_below_ideal: usize,
    /// Top entries of `below_ideal` by `quantity_needed`, descending.
    pub low_stock_highlights: Vec<StockShortfall>,
    pub expiring_soon: Vec<ExpiringSoonCount>,
    pub chart: ChartSeries,
}

/// One line of the shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingItem {
    pub category_name: String,
    pub current_quantity: f64,
    pub ideal_quantity: f64,
    pub needed_quantity: f64,
}

pub fn build_dashboard(
    categories: &[Category],
    foods: &[Food],
    today: NaiveDate,
) -> DashboardSummary {
    let mut below_ideal = Vec::new();
    let mut expiring_soon = Vec::new();
    let mut chart = ChartSeries {
        labels: Vec::with_capacity(categories.len()),
        current: Vec::with_capacity(categories.len()),
        ideal: Vec::with_capacity(categories.len()),
    };

    // Strictly-future window: items expiring today or already expired are not
    // counted here, unlike the per-item `is_expiring_soon` check.
    let window_end = today + Duration::days(EXPIRY_WINDOW_DAYS);

    for category in categories {
        let current = stock::current_quantity(category, foods);

        if current < category.ideal_quantity {
            below_ideal.push(StockShortfall {
                category_id: category.id,
                category_name: category.name.clone(),
                current_quantity: current,
                ideal_quantity: category.ideal_quantity,
                unit: category.unit.clone(),
                quantity_needed: category.ideal_quantity - current,
            });
        }

        let count = foods
            .iter()
            .filter(|f| {
                f.category == category.id && f.best_before > today && f.best_before <= window_end
            })
            .count();
        expiring_soon.push(ExpiringSoonCount {
            category_id: category.id,
            category_name: category.name.clone(),
            count,
        });

        chart.labels.push(category.name.clone());
        chart.current.push(round2(current));
        chart.ideal.push(round2(category.ideal_quantity));
    }

    let mut low_stock_highlights = below_ideal.clone();
    low_stock_highlights.sort_by(|a, b| b.quantity_needed.total_cmp(&a.quantity_needed));
    low_stock_highlights.truncate(HIGHLIGHT_LIMIT);

    DashboardSummary {
        total_categories: categories.len(),
        total_food_items: foods.len(),
        num_categories_below_ideal: below_ideal.len(),
        below_ideal,
        low_stock_highlights,
        expiring_soon,
        chart,
    }
}

/// One item per under-stocked category, in category iteration order.
pub fn build_shopping_list(categories: &[Category], foods: &[Food]) -> Vec<ShoppingItem> {
    categories
        .iter()
        .filter(|c| stock::is_low_stock(c, foods))
        .map(|c| {
            let current = stock::current_quantity(c, foods);
            ShoppingItem {
                category_name: c.name.clone(),
                current_quantity: current,
                ideal_quantity: c.ideal_quantity,
                needed_quantity: c.ideal_quantity - current,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
