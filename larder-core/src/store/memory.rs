//! In-process inventory store.

use chrono::NaiveDate;
use parking_lot::RwLock;

use super::{InventoryStore, NameUniqueness};
use crate::error::{InventoryError, Result};
use crate::models::{
    Category, CategoryCreate, CategoryId, CategoryUpdate, Food, FoodCreate, FoodId, FoodUpdate,
};
use crate::report::{self, DashboardSummary, ShoppingItem};
use crate::search::{self, SearchFilter, SearchOutcome};

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    foods: Vec<Food>,
    next_category_id: u64,
    next_food_id: u64,
}

/// Vec-backed store guarded by a single lock.
///
/// Listings come back in insertion order and every read clones, so callers
/// always derive from a consistent snapshot regardless of concurrent writes.
pub struct MemoryStore {
    policy: NameUniqueness,
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_policy(NameUniqueness::default())
    }

    pub fn with_policy(policy: NameUniqueness) -> Self {
        Self {
            policy,
            inner: RwLock::new(Inner {
                next_category_id: 1,
                next_food_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Consistent (categories, foods) snapshot taken under one read lock.
    fn snapshot(&self) -> (Vec<Category>, Vec<Food>) {
        let inner = self.inner.read();
        (inner.categories.clone(), inner.foods.clone())
    }

    /// Resolve a search against the current snapshot.
    pub fn search(&self, filter: SearchFilter, query: &str) -> SearchOutcome {
        let (categories, foods) = self.snapshot();
        search::resolve(filter, query, &categories, &foods)
    }

    /// Dashboard summary for the given date.
    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        let (categories, foods) = self.snapshot();
        report::build_dashboard(&categories, &foods, today)
    }

    /// Shopping list for every under-stocked category.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        let (categories, foods) = self.snapshot();
        report::build_shopping_list(&categories, &foods)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for MemoryStore {
    fn list_categories(&self) -> Vec<Category> {
        self.inner.read().categories.clone()
    }

    fn list_food(&self) -> Vec<Food> {
        self.inner.read().foods.clone()
    }

    fn get_category(&self, id: CategoryId) -> Result<Category> {
        self.inner
            .read()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| InventoryError::NotFound(format!("Category {} not found", id.0)))
    }

    fn get_food(&self, id: FoodId) -> Result<Food> {
        self.inner
            .read()
            .foods
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| InventoryError::NotFound(format!("Food {} not found", id.0)))
    }

    fn create_category(&self, data: CategoryCreate) -> Result<Category> {
        data.validate()?;
        let mut inner = self.inner.write();
        if inner
            .categories
            .iter()
            .any(|c| self.policy.conflicts(&c.name, &data.name))
        {
            return Err(InventoryError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }
        let id = CategoryId(inner.next_category_id);
        inner.next_category_id += 1;
        let category = Category {
            id,
            name: data.name,
            unit: data.unit,
            ideal_quantity: data.ideal_quantity,
        };
        inner.categories.push(category.clone());
        tracing::debug!(id = id.0, name = %category.name, "category created");
        Ok(category)
    }

    fn update_category(&self, id: CategoryId, data: CategoryUpdate) -> Result<Category> {
        data.validate()?;
        let mut inner = self.inner.write();

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && inner
                .categories
                .iter()
                .any(|c| c.id != id && self.policy.conflicts(&c.name, new_name))
        {
            return Err(InventoryError::Duplicate(format!(
                "Category '{}' already exists",
                new_name
            )));
        }

        let category = inner
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| InventoryError::NotFound(format!("Category {} not found", id.0)))?;

        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(unit) = data.unit {
            category.unit = unit;
        }
        if let Some(ideal) = data.ideal_quantity {
            category.ideal_quantity = ideal;
        }
        Ok(category.clone())
    }

    fn delete_category(&self, id: CategoryId) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.categories.iter().any(|c| c.id == id) {
            return Err(InventoryError::NotFound(format!(
                "Category {} not found",
                id.0
            )));
        }
        if inner.foods.iter().any(|f| f.category == id) {
            tracing::warn!(id = id.0, "delete blocked, category still owns food");
            return Err(InventoryError::Constraint(
                "Cannot delete a category that still owns food items".to_string(),
            ));
        }
        inner.categories.retain(|c| c.id != id);
        tracing::debug!(id = id.0, "category deleted");
        Ok(())
    }

    fn delete_category_cascade(&self, id: CategoryId) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.categories.iter().any(|c| c.id == id) {
            return Err(InventoryError::NotFound(format!(
                "Category {} not found",
                id.0
            )));
        }
        let before = inner.foods.len();
        inner.foods.retain(|f| f.category != id);
        inner.categories.retain(|c| c.id != id);
        tracing::debug!(
            id = id.0,
            removed_food = before - inner.foods.len(),
            "category deleted with cascade"
        );
        Ok(())
    }

    fn create_food(&self, data: FoodCreate) -> Result<Food> {
        data.validate()?;
        let mut inner = self.inner.write();
        if !inner.categories.iter().any(|c| c.id == data.category) {
            return Err(InventoryError::NotFound(format!(
                "Category {} not found",
                data.category.0
            )));
        }
        let id = FoodId(inner.next_food_id);
        inner.next_food_id += 1;
        let food = Food {
            id,
            name: data.name,
            category: data.category,
            quantity: data.quantity,
            best_before: data.best_before,
        };
        inner.foods.push(food.clone());
        tracing::debug!(id = id.0, name = %food.name, "food created");
        Ok(food)
    }

    fn update_food(&self, id: FoodId, data: FoodUpdate) -> Result<Food> {
        data.validate()?;
        let mut inner = self.inner.write();

        // Re-homing a food requires the target category to exist
        if let Some(category_id) = data.category
            && !inner.categories.iter().any(|c| c.id == category_id)
        {
            return Err(InventoryError::NotFound(format!(
                "Category {} not found",
                category_id.0
            )));
        }

        let food = inner
            .foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| InventoryError::NotFound(format!("Food {} not found", id.0)))?;

        if let Some(name) = data.name {
            food.name = name;
        }
        if let Some(category) = data.category {
            food.category = category;
        }
        if let Some(quantity) = data.quantity {
            food.quantity = quantity;
        }
        if let Some(best_before) = data.best_before {
            food.best_before = best_before;
        }
        Ok(food.clone())
    }

    fn delete_food(&self, id: FoodId) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.foods.iter().any(|f| f.id == id) {
            return Err(InventoryError::NotFound(format!("Food {} not found", id.0)));
        }
        inner.foods.retain(|f| f.id != id);
        tracing::debug!(id = id.0, "food deleted");
        Ok(())
    }
}
