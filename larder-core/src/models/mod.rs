//! Inventory Models
//!
//! Plain immutable value records. Constraints live at the input boundary
//! (the `Create`/`Update` DTOs), not on the models themselves.

pub mod category;
pub mod food;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryId, CategoryUpdate};
pub use food::{Food, FoodCreate, FoodId, FoodUpdate};
