//! Table: a surface item whose price scales with its area.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::{SurfaceAttrs, SurfaceItem};
use crate::error::{CatalogResult, ValidationError};
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::money::Money;
use crate::validation::{validate_positive_count, ValidationResult};

// =============================================================================
// Table Shape
// =============================================================================

/// Allowed table-top shapes. Anything outside this set is a validation
/// error at assignment time, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableShape {
    Rectangular,
    Round,
    Square,
    Oval,
}

impl TableShape {
    const ALLOWED: [&'static str; 4] = ["rectangular", "round", "square", "oval"];
}

/// Case-insensitive parse; the canonical form is lowercase.
impl FromStr for TableShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" => Ok(TableShape::Rectangular),
            "round" => Ok(TableShape::Round),
            "square" => Ok(TableShape::Square),
            "oval" => Ok(TableShape::Oval),
            _ => Err(ValidationError::NotAllowed {
                field: "shape".to_string(),
                allowed: Self::ALLOWED.to_vec(),
            }),
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableShape::Rectangular => "rectangular",
            TableShape::Round => "round",
            TableShape::Square => "square",
            TableShape::Oval => "oval",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Table
// =============================================================================

/// A table. Declares how many people sit at it, which the dining-set
/// composite uses as its chair limit.
///
/// ## Price Rule
/// `base × size_factor`, then `+ $50` for a non-rectangular shape,
/// `+ $100` for more than 6 seats, `+ $50` for 5-6 seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    profile: ItemProfile,
    surface: SurfaceAttrs,
    shape: TableShape,
    seats: u32,
}

impl Table {
    /// Builds a table; dimensions are cm, `seats` must be positive.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        shape: TableShape,
        length: f64,
        width: f64,
        height: f64,
        seats: u32,
    ) -> ValidationResult<Self> {
        Ok(Table {
            profile: ItemProfile::new(name, material, color, base_price)?,
            surface: SurfaceAttrs::new(length, width, height)?,
            shape,
            seats: validate_positive_count("seat count", seats)?,
        })
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn set_shape(&mut self, shape: TableShape) {
        self.shape = shape;
    }

    /// Parses and assigns a shape from text (case-insensitive).
    pub fn set_shape_str(&mut self, shape: &str) -> ValidationResult<()> {
        self.shape = shape.parse()?;
        Ok(())
    }

    pub fn set_seats(&mut self, seats: u32) -> ValidationResult<()> {
        self.seats = validate_positive_count("seat count", seats)?;
        Ok(())
    }

    pub fn surface_mut(&mut self) -> &mut SurfaceAttrs {
        &mut self.surface
    }

    fn price(&self) -> Money {
        let mut price = self.profile.base_price().apply_factor(self.size_factor());

        if self.shape != TableShape::Rectangular {
            price += Money::from_cents(5_000);
        }

        if self.seats > 6 {
            price += Money::from_cents(10_000);
        } else if self.seats > 4 {
            price += Money::from_cents(5_000);
        }

        price
    }
}

impl Sellable for Table {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Table
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Table: {}\n  Material: {}\n  Color: {}\n  Shape: {}\n  {}\n  Seats: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.shape,
            self.surface.describe_line(),
            self.seats,
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

impl SurfaceItem for Table {
    fn surface(&self) -> &SurfaceAttrs {
        &self.surface
    }

    fn declared_seating(&self) -> Option<u32> {
        Some(self.seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seats: u32) -> Table {
        Table::new(
            "Family Table",
            "oak",
            "natural",
            Money::from_cents(20_000),
            TableShape::Rectangular,
            120.0,
            80.0,
            75.0,
            seats,
        )
        .unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        // base $200, 120×80 → area 9600, factor 1.048 → $209.60,
        // 6 seats (4 < seats ≤ 6) → +$50 = $259.60
        let t = table(6);
        assert_eq!(t.calculate_price().unwrap().cents(), 25_960);
    }

    #[test]
    fn test_seat_surcharge_boundaries() {
        // 4 seats: no surcharge
        assert_eq!(table(4).calculate_price().unwrap().cents(), 20_960);
        // 5 seats: +$50
        assert_eq!(table(5).calculate_price().unwrap().cents(), 25_960);
        // 7 seats: +$100
        assert_eq!(table(7).calculate_price().unwrap().cents(), 30_960);
    }

    #[test]
    fn test_shape_surcharge() {
        let mut t = table(4);
        t.set_shape(TableShape::Round);
        assert_eq!(t.calculate_price().unwrap().cents(), 25_960);
    }

    #[test]
    fn test_shape_parse() {
        assert_eq!("Round".parse::<TableShape>().unwrap(), TableShape::Round);
        assert_eq!(" OVAL ".parse::<TableShape>().unwrap(), TableShape::Oval);
        assert!(matches!(
            "hexagonal".parse::<TableShape>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_invalid_shape_leaves_state_unchanged() {
        let mut t = table(4);
        assert!(t.set_shape_str("triangular").is_err());
        assert_eq!(t.shape(), TableShape::Rectangular);
    }

    #[test]
    fn test_declared_seating() {
        assert_eq!(table(6).declared_seating(), Some(6));
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(Table::new(
            "Bad",
            "oak",
            "natural",
            Money::zero(),
            TableShape::Rectangular,
            0.0,
            80.0,
            75.0,
            4,
        )
        .is_err());
    }
}
