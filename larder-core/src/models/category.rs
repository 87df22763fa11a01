//! Category Model

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

/// Category identifier, assigned by the store on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// A grouping of food items sharing a unit and an ideal total stock target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Unit label shown next to quantities (e.g. "kg", "pieces"). Free-form,
    /// not validated against a fixed set.
    pub unit: String,
    /// Target total stock across all food in this category.
    pub ideal_quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub unit: String,
    pub ideal_quantity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub ideal_quantity: Option<f64>,
}

impl CategoryCreate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::Validation(
                "Category name is required.".to_string(),
            ));
        }
        validate_ideal_quantity(self.ideal_quantity)
    }
}

impl CategoryUpdate {
    /// Updates re-validate the same rules as creation.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name
            && name.trim().is_empty()
        {
            return Err(InventoryError::Validation(
                "Category name is required.".to_string(),
            ));
        }
        if let Some(ideal) = self.ideal_quantity {
            validate_ideal_quantity(ideal)?;
        }
        Ok(())
    }
}

fn validate_ideal_quantity(ideal: f64) -> Result<()> {
    if !ideal.is_finite() || ideal <= 0.0 {
        return Err(InventoryError::Validation(
            "Ideal quantity must be greater than zero.".to_string(),
        ));
    }
    Ok(())
}
