//! # Item Contract
//!
//! The polymorphic price-and-description contract shared by every furniture
//! kind, plus the common identity attributes they all carry.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Contract                                   │
//! │                                                                         │
//! │  ┌───────────────────┐      ┌──────────────────────────────────────┐   │
//! │  │   trait Sellable  │      │            ItemProfile               │   │
//! │  │  ───────────────  │      │  ──────────────────────────────────  │   │
//! │  │  name()           │      │  name / material / color             │   │
//! │  │  kind()           │      │  base_price (Money)                  │   │
//! │  │  calculate_price()│      │  validating setters                  │   │
//! │  │  describe()       │      │  Display = "name (material, color)"  │   │
//! │  │  label()          │      └──────────────────────────────────────┘   │
//! │  │  material()?      │                                                 │
//! │  │  upholstery()?    │      Concrete items embed an ItemProfile and    │
//! │  └───────────────────┘      implement Sellable on top of it.           │
//! │                                                                         │
//! │  DiningSet implements Sellable WITHOUT an ItemProfile: it is a priced   │
//! │  aggregate, not a physical item, so material() stays None.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Optional Capabilities Instead of Attribute Probing
//! `Sellable` declares `material` and `upholstery` as optional accessors
//! with a `None` default, so a caller checks an `Option` against a defined
//! interface instead of probing a value for attributes at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::money::Money;
use crate::validation::{validate_base_price, validate_label, ValidationResult};

// =============================================================================
// Item Kind
// =============================================================================

/// Every concrete kind the catalog knows about.
///
/// `key()` is the stable lowercase token used for discount-category lookup
/// and reports; `Display` gives the human-readable form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Chair,
    Table,
    Bed,
    Armoire,
    DrawerChest,
    Desk,
    Armchair,
    Sofa,
    SofaBed,
    DiningSet,
}

impl ItemKind {
    /// Stable lowercase token for this kind (singular).
    pub const fn key(&self) -> &'static str {
        match self {
            ItemKind::Chair => "chair",
            ItemKind::Table => "table",
            ItemKind::Bed => "bed",
            ItemKind::Armoire => "armoire",
            ItemKind::DrawerChest => "drawer_chest",
            ItemKind::Desk => "desk",
            ItemKind::Armchair => "armchair",
            ItemKind::Sofa => "sofa",
            ItemKind::SofaBed => "sofa_bed",
            ItemKind::DiningSet => "dining_set",
        }
    }

    /// Pluralized token, tried first in discount-category lookup.
    pub fn plural_key(&self) -> String {
        format!("{}s", self.key())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Chair => "chair",
            ItemKind::Table => "table",
            ItemKind::Bed => "bed",
            ItemKind::Armoire => "armoire",
            ItemKind::DrawerChest => "drawer chest",
            ItemKind::Desk => "desk",
            ItemKind::Armchair => "armchair",
            ItemKind::Sofa => "sofa",
            ItemKind::SofaBed => "sofa-bed",
            ItemKind::DiningSet => "dining set",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Item Profile
// =============================================================================

/// Identity and base attributes every physical furniture item carries.
///
/// ## Invariants
/// - `name`, `material`, `color` are non-empty (whitespace-stripped)
/// - `base_price` is never negative
///
/// Mutation only goes through the validating setters; a rejected value
/// leaves the previous state unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProfile {
    name: String,
    material: String,
    color: String,
    base_price: Money,
}

impl ItemProfile {
    /// Builds a profile, validating all four fields.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
    ) -> ValidationResult<Self> {
        Ok(ItemProfile {
            name: validate_label("name", name)?,
            material: validate_label("material", material)?,
            color: validate_label("color", color)?,
            base_price: validate_base_price(base_price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Sets the name; the stored value is the stripped form.
    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = validate_label("name", name)?;
        Ok(())
    }

    /// Sets the material; the stored value is the stripped form.
    pub fn set_material(&mut self, material: &str) -> ValidationResult<()> {
        self.material = validate_label("material", material)?;
        Ok(())
    }

    /// Sets the color; the stored value is the stripped form.
    pub fn set_color(&mut self, color: &str) -> ValidationResult<()> {
        self.color = validate_label("color", color)?;
        Ok(())
    }

    /// Sets the base price; negative amounts are rejected.
    pub fn set_base_price(&mut self, price: Money) -> ValidationResult<()> {
        self.base_price = validate_base_price(price)?;
        Ok(())
    }
}

/// The fixed label format shared by all items: `"name (material, color)"`.
impl fmt::Display for ItemProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.material, self.color)
    }
}

// =============================================================================
// Sellable Contract
// =============================================================================

/// The contract every priced, describable entity fulfills.
///
/// Implemented by all concrete furniture kinds and by `DiningSet` (a priced
/// aggregate). The store service holds `Rc<dyn Sellable>` references and
/// never needs to know the concrete type.
///
/// ## Why is `calculate_price` fallible?
/// A well-formed catalog item always prices successfully, but the store's
/// aggregation operations must tolerate malformed members (exercised with
/// stub items in tests). Returning `CatalogResult<Money>` lets aggregates
/// skip a failing member instead of aborting.
pub trait Sellable {
    /// The item's display name.
    fn name(&self) -> &str;

    /// The concrete kind, used for discount lookup and reporting.
    fn kind(&self) -> ItemKind;

    /// Computes the final price from the current attribute state.
    ///
    /// Pure: two calls with no mutation in between yield identical results.
    fn calculate_price(&self) -> CatalogResult<Money>;

    /// A deterministic multi-line description of the item.
    fn describe(&self) -> String;

    /// Short one-line label; physical items use the `ItemProfile` form.
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Primary material, when the entity has one.
    fn material(&self) -> Option<&str> {
        None
    }

    /// Upholstery material, for seat-like items that have one.
    fn upholstery(&self) -> Option<&str> {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn profile() -> ItemProfile {
        ItemProfile::new("Oak Chair", "oak", "brown", Money::from_cents(10_000)).unwrap()
    }

    #[test]
    fn test_profile_construction_validates() {
        assert!(ItemProfile::new("", "oak", "brown", Money::zero()).is_err());
        assert!(ItemProfile::new("Chair", "  ", "brown", Money::zero()).is_err());
        assert!(ItemProfile::new("Chair", "oak", "", Money::zero()).is_err());
        assert!(ItemProfile::new("Chair", "oak", "brown", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_setter_round_trip_strips() {
        let mut p = profile();
        p.set_name("  Walnut Chair  ").unwrap();
        assert_eq!(p.name(), "Walnut Chair");

        p.set_material(" walnut ").unwrap();
        assert_eq!(p.material(), "walnut");
    }

    #[test]
    fn test_rejected_setter_leaves_state_unchanged() {
        let mut p = profile();
        let err = p.set_color("   ").unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
        assert_eq!(p.color(), "brown");

        assert!(p.set_base_price(Money::from_cents(-500)).is_err());
        assert_eq!(p.base_price().cents(), 10_000);
    }

    #[test]
    fn test_display_label_format() {
        assert_eq!(profile().to_string(), "Oak Chair (oak, brown)");
    }

    #[test]
    fn test_kind_keys() {
        assert_eq!(ItemKind::Chair.key(), "chair");
        assert_eq!(ItemKind::Chair.plural_key(), "chairs");
        assert_eq!(ItemKind::SofaBed.key(), "sofa_bed");
        assert_eq!(ItemKind::DiningSet.to_string(), "dining set");
    }
}
