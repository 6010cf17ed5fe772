//! Sofa: a multi-seat item whose price scales with the comfort factor.

use serde::{Deserialize, Serialize};

use crate::capability::{SeatingAttrs, SeatingItem};
use crate::error::CatalogResult;
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::ValidationResult;

/// A sofa.
///
/// ## Price Rule
/// `base × comfort_factor`, then `+ $150 with arms + $200 if modular
/// + $50 with cushions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sofa {
    profile: ItemProfile,
    seating: SeatingAttrs,
    has_arms: bool,
    is_modular: bool,
    includes_cushions: bool,
}

impl Sofa {
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        capacity: u32,
        has_backrest: bool,
        upholstery: Option<&str>,
        has_arms: bool,
        is_modular: bool,
        includes_cushions: bool,
    ) -> ValidationResult<Self> {
        Ok(Sofa {
            profile: ItemProfile::new(name, material, color, base_price)?,
            seating: SeatingAttrs::new(capacity, has_backrest, upholstery)?,
            has_arms,
            is_modular,
            includes_cushions,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn has_arms(&self) -> bool {
        self.has_arms
    }

    pub fn is_modular(&self) -> bool {
        self.is_modular
    }

    pub fn includes_cushions(&self) -> bool {
        self.includes_cushions
    }

    pub fn set_capacity(&mut self, capacity: u32) -> ValidationResult<()> {
        self.seating.set_capacity(capacity)
    }

    pub fn set_upholstery(&mut self, upholstery: Option<&str>) {
        self.seating.set_upholstery(upholstery);
    }

    fn price(&self) -> Money {
        let mut price = self
            .profile
            .base_price()
            .apply_factor(self.seating.comfort_factor());

        if self.has_arms {
            price += Money::from_cents(15_000);
        }
        if self.is_modular {
            price += Money::from_cents(20_000);
        }
        if self.includes_cushions {
            price += Money::from_cents(5_000);
        }

        price
    }
}

impl Sellable for Sofa {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Sofa
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Sofa: {}\n  Material: {}\n  Color: {}\n  {}\n  Arms: {}\n  Modular: {}\n  Cushions included: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.seating.describe_line(),
            if self.has_arms { "yes" } else { "no" },
            if self.is_modular { "yes" } else { "no" },
            if self.includes_cushions { "yes" } else { "no" },
            self.price()
        )
    }

    fn label(&self) -> String {
        self.profile.to_string()
    }

    fn material(&self) -> Option<&str> {
        Some(self.profile.material())
    }

    fn upholstery(&self) -> Option<&str> {
        self.seating.upholstery()
    }
}

impl SeatingItem for Sofa {
    fn seating(&self) -> &SeatingAttrs {
        &self.seating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comfort_factor_applied() {
        // 3 seats, backrest, fabric → 1.0 + 0.1 + 0.1 + 2×0.05 = 1.3
        // $400 × 1.3 = $520, no extras
        let s = Sofa::new(
            "Family Sofa",
            "pine",
            "gray",
            Money::from_cents(40_000),
            3,
            true,
            Some("fabric"),
            false,
            false,
            false,
        )
        .unwrap();
        assert_eq!(s.calculate_price().unwrap().cents(), 52_000);
    }

    #[test]
    fn test_extras_added_after_factor() {
        let s = Sofa::new(
            "Family Sofa",
            "pine",
            "gray",
            Money::from_cents(40_000),
            3,
            true,
            Some("fabric"),
            true,
            true,
            true,
        )
        .unwrap();
        // 520 + 150 + 200 + 50 = $920
        assert_eq!(s.calculate_price().unwrap().cents(), 92_000);
    }

    #[test]
    fn test_capacity_raises_price() {
        let mut s = Sofa::new(
            "Grower",
            "pine",
            "gray",
            Money::from_cents(40_000),
            2,
            true,
            None,
            false,
            false,
            false,
        )
        .unwrap();
        let two_seats = s.calculate_price().unwrap();
        s.set_capacity(4).unwrap();
        let four_seats = s.calculate_price().unwrap();
        assert!(four_seats > two_seats);
    }
}
