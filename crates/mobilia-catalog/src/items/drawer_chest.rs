//! Drawer chest: a storage item priced per drawer.

use serde::{Deserialize, Serialize};

use crate::capability::{StorageAttrs, StorageItem};
use crate::error::CatalogResult;
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::{validate_positive_count, ValidationResult};

/// A chest of drawers.
///
/// ## Price Rule
/// `base + drawers × $20 + $30 with wheels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerChest {
    profile: ItemProfile,
    storage: StorageAttrs,
    drawers: u32,
    has_wheels: bool,
}

impl DrawerChest {
    /// Builds a drawer chest; at least one drawer, `capacity_liters` > 0.
    /// One drawer is one storage compartment.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        drawers: u32,
        has_wheels: bool,
        capacity_liters: f64,
    ) -> ValidationResult<Self> {
        let drawers = validate_positive_count("drawer count", drawers)?;
        Ok(DrawerChest {
            profile: ItemProfile::new(name, material, color, base_price)?,
            storage: StorageAttrs::new(drawers, capacity_liters)?,
            drawers,
            has_wheels,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn drawers(&self) -> u32 {
        self.drawers
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_wheels(&mut self, wheels: bool) {
        self.has_wheels = wheels;
    }

    fn price(&self) -> Money {
        let mut price =
            self.profile.base_price() + Money::from_cents(2_000) * self.drawers as i64;
        if self.has_wheels {
            price += Money::from_cents(3_000);
        }
        price
    }
}

impl Sellable for DrawerChest {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::DrawerChest
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Drawer chest: {}\n  Material: {}\n  Color: {}\n  Drawers: {}\n  Wheels: {}\n  {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.drawers,
            if self.has_wheels { "yes" } else { "no" },
            self.storage.describe_line(),
            self.price()
        )
    }

    fn label(&self) -> String {
        self.profile.to_string()
    }

    fn material(&self) -> Option<&str> {
        Some(self.profile.material())
    }
}

impl StorageItem for DrawerChest {
    fn storage(&self) -> &StorageAttrs {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rule() {
        // base $150, 3 drawers, wheels → 150 + 60 + 30 = $240
        let c = DrawerChest::new(
            "Bedside",
            "beech",
            "natural",
            Money::from_cents(15_000),
            3,
            true,
            120.0,
        )
        .unwrap();
        assert_eq!(c.calculate_price().unwrap().cents(), 24_000);
    }

    #[test]
    fn test_without_wheels() {
        let c = DrawerChest::new(
            "Bedside",
            "beech",
            "natural",
            Money::from_cents(15_000),
            4,
            false,
            120.0,
        )
        .unwrap();
        assert_eq!(c.calculate_price().unwrap().cents(), 23_000);
    }

    #[test]
    fn test_requires_a_drawer() {
        assert!(DrawerChest::new(
            "Empty",
            "beech",
            "natural",
            Money::zero(),
            0,
            false,
            120.0,
        )
        .is_err());
    }

    #[test]
    fn test_drawers_are_compartments() {
        let c = DrawerChest::new(
            "Bedside",
            "beech",
            "natural",
            Money::from_cents(15_000),
            5,
            false,
            150.0,
        )
        .unwrap();
        assert_eq!(c.storage().compartments(), 5);
    }
}
