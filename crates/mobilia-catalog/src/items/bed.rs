//! Bed: priced by frame size plus mattress and headboard extras.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogResult, ValidationError};
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::ValidationResult;

// =============================================================================
// Bed Size
// =============================================================================

/// Recognized bed sizes, ordered from smallest to largest.
///
/// Parsing is case-insensitive and normalizes to this canonical form;
/// an unrecognized size is a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedSize {
    Individual,
    Matrimonial,
    Queen,
    King,
}

impl BedSize {
    const ALLOWED: [&'static str; 4] = ["individual", "matrimonial", "queen", "king"];

    /// Fixed price surcharge for the size.
    pub const fn surcharge(&self) -> Money {
        match self {
            BedSize::Individual => Money::from_cents(0),
            BedSize::Matrimonial => Money::from_cents(20_000),
            BedSize::Queen => Money::from_cents(40_000),
            BedSize::King => Money::from_cents(60_000),
        }
    }
}

impl FromStr for BedSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(BedSize::Individual),
            "matrimonial" => Ok(BedSize::Matrimonial),
            "queen" => Ok(BedSize::Queen),
            "king" => Ok(BedSize::King),
            _ => Err(ValidationError::NotAllowed {
                field: "bed size".to_string(),
                allowed: Self::ALLOWED.to_vec(),
            }),
        }
    }
}

impl fmt::Display for BedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BedSize::Individual => "individual",
            BedSize::Matrimonial => "matrimonial",
            BedSize::Queen => "queen",
            BedSize::King => "king",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Bed
// =============================================================================

/// A bed.
///
/// ## Price Rule
/// `base + size surcharge (matrimonial $200 / queen $400 / king $600)
/// + $300 with mattress + $100 with headboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    profile: ItemProfile,
    size: BedSize,
    includes_mattress: bool,
    has_headboard: bool,
}

impl Bed {
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        size: BedSize,
        includes_mattress: bool,
        has_headboard: bool,
    ) -> ValidationResult<Self> {
        Ok(Bed {
            profile: ItemProfile::new(name, material, color, base_price)?,
            size,
            includes_mattress,
            has_headboard,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn size(&self) -> BedSize {
        self.size
    }

    pub fn includes_mattress(&self) -> bool {
        self.includes_mattress
    }

    pub fn has_headboard(&self) -> bool {
        self.has_headboard
    }

    pub fn set_size(&mut self, size: BedSize) {
        self.size = size;
    }

    /// Parses and assigns a size from text (case-insensitive).
    pub fn set_size_str(&mut self, size: &str) -> ValidationResult<()> {
        self.size = size.parse()?;
        Ok(())
    }

    fn price(&self) -> Money {
        let mut price = self.profile.base_price() + self.size.surcharge();
        if self.includes_mattress {
            price += Money::from_cents(30_000);
        }
        if self.has_headboard {
            price += Money::from_cents(10_000);
        }
        price
    }
}

impl Sellable for Bed {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Bed
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Bed: {}\n  Material: {}\n  Color: {}\n  Size: {}\n  Mattress included: {}\n  Headboard: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.size,
            if self.includes_mattress { "yes" } else { "no" },
            if self.has_headboard { "yes" } else { "no" },
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
