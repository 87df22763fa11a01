//! Food Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CategoryId;
use crate::error::{InventoryError, Result};

/// Food identifier, assigned by the store on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FoodId(pub u64);

/// A single trackable inventory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    /// Owning category. Every food belongs to exactly one.
    pub category: CategoryId,
    pub quantity: f64,
    /// Past dates are permitted and represent already-expired stock.
    pub best_before: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub category: CategoryId,
    pub quantity: f64,
    pub best_before: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodUpdate {
    pub name: Option<String>,
    pub category: Option<CategoryId>,
    pub quantity: Option<f64>,
    pub best_before: Option<NaiveDate>,
}

impl FoodCreate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::Validation(
                "Food name is required.".to_string(),
            ));
        }
        validate_quantity(self.quantity)
    }
}

impl FoodUpdate {
    /// Updates re-validate the same rules as creation.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name
            && name.trim().is_empty()
        {
            return Err(InventoryError::Validation(
                "Food name is required.".to_string(),
            ));
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }
}

fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(InventoryError::Validation(
            "Quantity cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, quantity: f64) -> FoodCreate {
        FoodCreate {
            name: name.to_string(),
            category: CategoryId(1),
            quantity,
            best_before: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    #[test]
    fn valid_food_passes() {
        assert!(draft("Tomato", 5.0).validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_allowed() {
        assert!(draft("Tomato", 0.0).validate().is_ok());
    }

    #[test]
    fn negative_quantity_rejected() {
        let err = draft("Tomato", -1.0).validate().unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn blank_name_rejected() {
        assert!(draft("", 1.0).validate().is_err());
    }

    #[test]
    fn update_revalidates_quantity() {
        let update = FoodUpdate {
            quantity: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
