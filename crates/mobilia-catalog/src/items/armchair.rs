//! Armchair: a seat with flat comfort-feature surcharges.

use serde::{Deserialize, Serialize};

use crate::capability::{SeatingAttrs, SeatingItem};
use crate::error::CatalogResult;
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::ValidationResult;

/// An armchair.
///
/// ## Price Rule (flat additive)
/// `base + $200 if upholstered + $100 with arms + $250 if reclinable
/// + $80 with footrest`
///
/// Any upholstery at all triggers the $200 surcharge; the material only
/// matters for the (unused) comfort factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armchair {
    profile: ItemProfile,
    seating: SeatingAttrs,
    has_arms: bool,
    is_reclinable: bool,
    has_footrest: bool,
}

impl Armchair {
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        capacity: u32,
        upholstery: Option<&str>,
        has_arms: bool,
        is_reclinable: bool,
        has_footrest: bool,
    ) -> ValidationResult<Self> {
        Ok(Armchair {
            profile: ItemProfile::new(name, material, color, base_price)?,
            seating: SeatingAttrs::new(capacity, true, upholstery)?,
            has_arms,
            is_reclinable,
            has_footrest,
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

    pub fn is_reclinable(&self) -> bool {
        self.is_reclinable
    }

    pub fn has_footrest(&self) -> bool {
        self.has_footrest
    }

    pub fn set_arms(&mut self, arms: bool) {
        self.has_arms = arms;
    }

    pub fn set_reclinable(&mut self, reclinable: bool) {
        self.is_reclinable = reclinable;
    }

    pub fn set_footrest(&mut self, footrest: bool) {
        self.has_footrest = footrest;
    }

    pub fn set_upholstery(&mut self, upholstery: Option<&str>) {
        self.seating.set_upholstery(upholstery);
    }

    fn price(&self) -> Money {
        let mut price = self.profile.base_price();
        if self.seating.upholstery().is_some() {
            price += Money::from_cents(20_000);
        }
        if self.has_arms {
            price += Money::from_cents(10_000);
        }
        if self.is_reclinable {
            price += Money::from_cents(25_000);
        }
        if self.has_footrest {
            price += Money::from_cents(8_000);
        }
        price
    }
}

impl Sellable for Armchair {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Armchair
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Armchair: {}\n  Material: {}\n  Color: {}\n  {}\n  Arms: {}\n  Reclinable: {}\n  Footrest: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.seating.describe_line(),
            if self.has_arms { "yes" } else { "no" },
            if self.is_reclinable { "yes" } else { "no" },
            if self.has_footrest { "yes" } else { "no" },
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

impl SeatingItem for Armchair {
    fn seating(&self) -> &SeatingAttrs {
        &self.seating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_armchair() {
        let a = Armchair::new(
            "Reader",
            "oak",
            "green",
            Money::from_cents(30_000),
            1,
            None,
            false,
            false,
            false,
        )
        .unwrap();
        assert_eq!(a.calculate_price().unwrap().cents(), 30_000);
    }

    #[test]
    fn test_all_surcharges() {
        let a = Armchair::new(
            "Lounge King",
            "oak",
            "green",
            Money::from_cents(30_000),
            2,
            Some("leather"),
            true,
            true,
            true,
        )
        .unwrap();
        // 300 + 200 + 100 + 250 + 80 = $930
        assert_eq!(a.calculate_price().unwrap().cents(), 93_000);
    }

    #[test]
    fn test_any_upholstery_counts() {
        // The surcharge is for being upholstered at all, not for the material.
        let a = Armchair::new(
            "Velvet One",
            "oak",
            "green",
            Money::from_cents(30_000),
            1,
            Some("velvet"),
            false,
            false,
            false,
        )
        .unwrap();
        assert_eq!(a.calculate_price().unwrap().cents(), 50_000);
    }
}
