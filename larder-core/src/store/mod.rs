//! Data-access layer.
//!
//! The reasoning engines (`stock`, `expiry`, `search`, `report`) only ever see
//! plain value snapshots; this module owns the trait they are fed from and an
//! in-process implementation of it.

pub mod memory;

// Re-exports
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{
    Category, CategoryCreate, CategoryId, CategoryUpdate, Food, FoodCreate, FoodId, FoodUpdate,
};

/// Category-name uniqueness policy.
///
/// The data layer has historically flip-flopped between the two; callers pick
/// one explicitly. Case-sensitive is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameUniqueness {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl NameUniqueness {
    pub(crate) fn conflicts(self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseSensitive => a == b,
            Self::CaseInsensitive => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Common store trait for inventory CRUD.
///
/// Listings preserve insertion order; reads hand out cloned snapshots so a
/// derivation always runs over a consistent view.
pub trait InventoryStore {
    fn list_categories(&self) -> Vec<Category>;
    fn list_food(&self) -> Vec<Food>;

    fn get_category(&self, id: CategoryId) -> Result<Category>;
    fn get_food(&self, id: FoodId) -> Result<Food>;

    fn create_category(&self, data: CategoryCreate) -> Result<Category>;
    fn update_category(&self, id: CategoryId, data: CategoryUpdate) -> Result<Category>;
    /// Blocked while the category still owns food.
    fn delete_category(&self, id: CategoryId) -> Result<()>;
    /// Removes the category together with every food it owns.
    fn delete_category_cascade(&self, id: CategoryId) -> Result<()>;

    fn create_food(&self, data: FoodCreate) -> Result<Food>;
    fn update_food(&self, id: FoodId, data: FoodUpdate) -> Result<Food>;
    fn delete_food(&self, id: FoodId) -> Result<()>;
}
