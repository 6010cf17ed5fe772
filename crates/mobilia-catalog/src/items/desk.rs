//! Desk: a work surface with drawer, length, and lighting surcharges.

use serde::{Deserialize, Serialize};

use crate::capability::{SurfaceAttrs, SurfaceItem};
use crate::error::CatalogResult;
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::items::table::TableShape;
use crate::money::Money;
use crate::validation::ValidationResult;

/// Desks longer than this are surcharged.
const LONG_DESK_CM: f64 = 150.0;

/// A desk. Shares the shape vocabulary with tables, but declares no
/// seating capacity.
///
/// ## Price Rule
/// `base + drawers × $25 + $50 if longer than 150 cm + $40 with lighting
/// + $30 for a non-rectangular shape`
///
/// Zero drawers means "no drawer unit"; there is no separate flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desk {
    profile: ItemProfile,
    surface: SurfaceAttrs,
    shape: TableShape,
    drawers: u32,
    has_lighting: bool,
}

impl Desk {
    /// Builds a desk; dimensions are cm.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        shape: TableShape,
        length: f64,
        width: f64,
        height: f64,
        drawers: u32,
        has_lighting: bool,
    ) -> ValidationResult<Self> {
        Ok(Desk {
            profile: ItemProfile::new(name, material, color, base_price)?,
            surface: SurfaceAttrs::new(length, width, height)?,
            shape,
            drawers,
            has_lighting,
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

    pub fn drawers(&self) -> u32 {
        self.drawers
    }

    pub fn has_lighting(&self) -> bool {
        self.has_lighting
    }

    pub fn set_shape(&mut self, shape: TableShape) {
        self.shape = shape;
    }

    pub fn set_drawers(&mut self, drawers: u32) {
        self.drawers = drawers;
    }

    pub fn set_lighting(&mut self, lighting: bool) {
        self.has_lighting = lighting;
    }

    pub fn surface_mut(&mut self) -> &mut SurfaceAttrs {
        &mut self.surface
    }

    fn price(&self) -> Money {
        let mut price =
            self.profile.base_price() + Money::from_cents(2_500) * self.drawers as i64;

        if self.surface.length() > LONG_DESK_CM {
            price += Money::from_cents(5_000);
        }
        if self.has_lighting {
            price += Money::from_cents(4_000);
        }
        if self.shape != TableShape::Rectangular {
            price += Money::from_cents(3_000);
        }

        price
    }
}

impl Sellable for Desk {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Desk
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Desk: {}\n  Material: {}\n  Color: {}\n  Shape: {}\n  {}\n  Drawers: {}\n  Lighting: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.shape,
            self.surface.describe_line(),
            self.drawers,
            if self.has_lighting { "yes" } else { "no" },
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

impl SurfaceItem for Desk {
    fn surface(&self) -> &SurfaceAttrs {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk(length: f64, drawers: u32) -> Desk {
        Desk::new(
            "Workstation",
            "mdf",
            "white",
            Money::from_cents(18_000),
            TableShape::Rectangular,
            length,
            60.0,
            74.0,
            drawers,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_plain_desk() {
        assert_eq!(desk(120.0, 0).calculate_price().unwrap().cents(), 18_000);
    }

    #[test]
    fn test_drawer_surcharge() {
        // 3 drawers × $25 = $75
        assert_eq!(desk(120.0, 3).calculate_price().unwrap().cents(), 25_500);
    }

    #[test]
    fn test_long_desk_surcharge() {
        // 160 cm > 150 cm → +$50
        assert_eq!(desk(160.0, 0).calculate_price().unwrap().cents(), 23_000);
        // Exactly 150 cm is not "longer than"
        assert_eq!(desk(150.0, 0).calculate_price().unwrap().cents(), 18_000);
    }

    #[test]
    fn test_lighting_and_shape() {
        let mut d = desk(120.0, 0);
        d.set_lighting(true);
        d.set_shape(TableShape::Oval);
        // +$40 lighting, +$30 shape
        assert_eq!(d.calculate_price().unwrap().cents(), 25_000);
    }

    #[test]
    fn test_no_declared_seating() {
        assert_eq!(desk(120.0, 0).declared_seating(), None);
    }
}
