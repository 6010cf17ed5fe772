//! Chair: a single-person seat with flat per-feature surcharges.

use serde::{Deserialize, Serialize};

use crate::capability::{SeatingAttrs, SeatingItem};
use crate::error::{CatalogError, CatalogResult, ValidationError};
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::{validate_positive_count, ValidationResult};

/// Height-adjustment range for adjustable chairs, in cm.
const MIN_SEAT_HEIGHT_CM: u32 = 40;
const MAX_SEAT_HEIGHT_CM: u32 = 100;

/// A chair. Always seats exactly one person.
///
/// ## Price Rule (flat additive)
/// `base + $10 if height-adjustable + $15 if it has wheels`
///
/// The comfort factor is available through [`SeatingItem`] but deliberately
/// NOT part of the chair price rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chair {
    profile: ItemProfile,
    seating: SeatingAttrs,
    leg_count: u32,
    height_adjustable: bool,
    has_wheels: bool,
}

impl Chair {
    /// Builds a chair with a backrest, four legs, and no upholstery.
    ///
    /// Seating capacity is fixed at 1; it is not a constructor parameter.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(Chair {
            profile: ItemProfile::new(name, material, color, base_price)?,
            seating: SeatingAttrs::new(1, true, None)?,
            leg_count: 4,
            height_adjustable: false,
            has_wheels: false,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn leg_count(&self) -> u32 {
        self.leg_count
    }

    pub fn height_adjustable(&self) -> bool {
        self.height_adjustable
    }

    pub fn has_wheels(&self) -> bool {
        self.has_wheels
    }

    pub fn set_leg_count(&mut self, legs: u32) -> ValidationResult<()> {
        self.leg_count = validate_positive_count("leg count", legs)?;
        Ok(())
    }

    pub fn set_height_adjustable(&mut self, adjustable: bool) {
        self.height_adjustable = adjustable;
    }

    pub fn set_wheels(&mut self, wheels: bool) {
        self.has_wheels = wheels;
    }

    pub fn set_backrest(&mut self, backrest: bool) {
        self.seating.set_backrest(backrest);
    }

    pub fn set_upholstery(&mut self, upholstery: Option<&str>) {
        self.seating.set_upholstery(upholstery);
    }

    /// Simulates adjusting the seat height.
    ///
    /// Fails on chairs without the mechanism or for heights outside the
    /// 40-100 cm range; otherwise returns a confirmation message.
    pub fn adjust_height(&self, height_cm: u32) -> CatalogResult<String> {
        if !self.height_adjustable {
            return Err(CatalogError::Unsupported {
                reason: "this chair has no height adjustment".to_string(),
            });
        }

        if !(MIN_SEAT_HEIGHT_CM..=MAX_SEAT_HEIGHT_CM).contains(&height_cm) {
            return Err(ValidationError::OutOfRange {
                field: "seat height".to_string(),
                min: MIN_SEAT_HEIGHT_CM as i64,
                max: MAX_SEAT_HEIGHT_CM as i64,
            }
            .into());
        }

        Ok(format!("seat height adjusted to {height_cm} cm"))
    }

    /// An office chair is both height-adjustable and wheeled.
    pub fn is_office_chair(&self) -> bool {
        self.height_adjustable && self.has_wheels
    }

    fn price(&self) -> Money {
        let mut price = self.profile.base_price();
        if self.height_adjustable {
            price += Money::from_cents(1_000);
        }
        if self.has_wheels {
            price += Money::from_cents(1_500);
        }
        price
    }
}

impl Sellable for Chair {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Chair
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Chair: {}\n  Material: {}\n  Color: {}\n  {}\n  Height adjustable: {}\n  Wheels: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.seating.describe_line(),
            if self.height_adjustable { "yes" } else { "no" },
            if self.has_wheels { "yes" } else { "no" },
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

impl SeatingItem for Chair {
    fn seating(&self) -> &SeatingAttrs {
        &self.seating
    }
}
