//! Larder Core - stock-level and expiry reasoning for a food inventory
//!
//! Categories carry an ideal stock target; food items carry quantities and
//! best-before dates. This crate derives everything the surrounding
//! application displays:
//!
//! - **Models** (`models`): plain value records for categories and food
//! - **Derivations** (`stock`, `expiry`): current stock, low-stock detection,
//!   expiry classification
//! - **Search** (`search`): free-text and typed filter resolution
//! - **Reports** (`report`): dashboard summary and shopping list
//! - **Store** (`store`): data-access trait plus an in-process implementation
//!
//! Everything that depends on the current date takes `today` as an explicit
//! parameter; nothing in this crate reads the system clock.

pub mod error;
pub mod expiry;
pub mod models;
pub mod report;
pub mod search;
pub mod stock;
pub mod store;

// Re-export public types
pub use error::{InventoryError, Result};
pub use expiry::{
    EXPIRY_WINDOW_DAYS, ExpiryStatus, days_until_expiry, is_expired, is_expiring_soon,
};
pub use models::{
    Category, CategoryCreate, CategoryId, CategoryUpdate, Food, FoodCreate, FoodId, FoodUpdate,
};
pub use report::{
    ChartSeries, DashboardSummary, ExpiringSoonCount, ShoppingItem, StockShortfall,
    build_dashboard, build_shopping_list,
};
pub use search::{SearchFilter, SearchOutcome, SearchStatus, resolve};
pub use stock::{current_quantity, is_low_stock, quantity_difference};
pub use store::{InventoryStore, MemoryStore, NameUniqueness};
