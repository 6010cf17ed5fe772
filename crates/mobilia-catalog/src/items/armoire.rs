//! Armoire: a storage item priced per door and drawer.

use serde::{Deserialize, Serialize};

use crate::capability::{StorageAttrs, StorageItem};
use crate::error::CatalogResult;
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::{validate_positive_count, ValidationResult};

/// An armoire (wardrobe).
///
/// ## Price Rule
/// `base + doors × $50 + drawers × $30 + $100 with mirrors`
///
/// The storage factor is exposed through [`StorageItem`] but not part of
/// the price rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armoire {
    profile: ItemProfile,
    storage: StorageAttrs,
    doors: u32,
    drawers: u32,
    has_mirrors: bool,
}

impl Armoire {
    /// Builds an armoire; at least one door, `capacity_liters` > 0.
    ///
    /// Compartment count is derived as doors + drawers.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        doors: u32,
        drawers: u32,
        has_mirrors: bool,
        capacity_liters: f64,
    ) -> ValidationResult<Self> {
        let doors = validate_positive_count("door count", doors)?;
        Ok(Armoire {
            profile: ItemProfile::new(name, material, color, base_price)?,
            storage: StorageAttrs::new(doors + drawers, capacity_liters)?,
            doors,
            drawers,
            has_mirrors,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }

    pub fn drawers(&self) -> u32 {
        self.drawers
    }

    pub fn has_mirrors(&self) -> bool {
        self.has_mirrors
    }

    pub fn set_mirrors(&mut self, mirrors: bool) {
        self.has_mirrors = mirrors;
    }

    fn price(&self) -> Money {
        let mut price = self.profile.base_price()
            + Money::from_cents(5_000) * self.doors as i64
            + Money::from_cents(3_000) * self.drawers as i64;
        if self.has_mirrors {
            price += Money::from_cents(10_000);
        }
        price
    }
}

impl Sellable for Armoire {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Armoire
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Armoire: {}\n  Material: {}\n  Color: {}\n  Doors: {}\n  Drawers: {}\n  Mirrors: {}\n  {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.doors,
            self.drawers,
            if self.has_mirrors { "yes" } else { "no" },
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

impl StorageItem for Armoire {
    fn storage(&self) -> &StorageAttrs {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // base $300, 3 doors, 2 drawers, mirrors → 300 + 150 + 60 + 100 = $550
        let a = Armoire::new(
            "Grande",
            "walnut",
            "brown",
            Money::from_cents(30_000),
            3,
            2,
            true,
            600.0,
        )
        .unwrap();
        assert_eq!(a.calculate_price().unwrap().cents(), 55_000);
    }

    #[test]
    fn test_no_mirrors() {
        let a = Armoire::new(
            "Plain",
            "pine",
            "white",
            Money::from_cents(30_000),
            2,
            0,
            false,
            400.0,
        )
        .unwrap();
        assert_eq!(a.calculate_price().unwrap().cents(), 40_000);
    }

    #[test]
    fn test_requires_a_door() {
        assert!(Armoire::new(
            "Doorless",
            "pine",
            "white",
            Money::zero(),
            0,
            2,
            false,
            400.0,
        )
        .is_err());
    }

    #[test]
    fn test_storage_capability() {
        let a = Armoire::new(
            "Grande",
            "walnut",
            "brown",
            Money::from_cents(30_000),
            3,
            2,
            true,
            600.0,
        )
        .unwrap();
        assert_eq!(a.storage().compartments(), 5);
        assert!(a.storage_factor() > 1.0);
    }
}
