//! # Category Capabilities
//!
//! The three shared attribute sets (seating, surface, storage) and their
//! factor formulas, expressed as composable capabilities instead of an
//! inheritance chain.
//!
//! ## Capability Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Category Capabilities                               │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │  │ SeatingAttrs │   │ SurfaceAttrs │   │ StorageAttrs │                │
//! │  │ ──────────── │   │ ──────────── │   │ ──────────── │                │
//! │  │ capacity     │   │ length       │   │ compartments │                │
//! │  │ backrest     │   │ width        │   │ liters       │                │
//! │  │ upholstery   │   │ height       │   │              │                │
//! │  │              │   │              │   │              │                │
//! │  │ comfort_     │   │ size_        │   │ storage_     │                │
//! │  │  factor()    │   │  factor()    │   │  factor()    │                │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘                │
//! │         │                  │                   │                        │
//! │   Chair, Armchair,    Table, Desk        Armoire, DrawerChest          │
//! │   Sofa, SofaBed                                                         │
//! │                                                                         │
//! │  A concrete kind embeds zero, one, or several attribute structs and    │
//! │  decides in its OWN price rule whether a factor multiplies or is       │
//! │  ignored. Factors never read or write price.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `SeatingItem` / `SurfaceItem` / `StorageItem` traits mark which
//! `Sellable` kinds carry which capability; the dining set composite uses
//! them as its member bounds.

use serde::{Deserialize, Serialize};

use crate::item::Sellable;
use crate::validation::{
    validate_dimension, validate_positive_count, ValidationResult,
};

// =============================================================================
// Seating
// =============================================================================

/// Shared attributes of seat-like items (chairs, armchairs, sofas).
///
/// ## Invariants
/// - `capacity` > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingAttrs {
    capacity: u32,
    has_backrest: bool,
    upholstery: Option<String>,
}

impl SeatingAttrs {
    /// Builds a seating attribute set; capacity must be positive.
    ///
    /// `upholstery` is free-form: only "leather" and "fabric" influence the
    /// comfort factor, any other value is kept but adds nothing.
    pub fn new(
        capacity: u32,
        has_backrest: bool,
        upholstery: Option<&str>,
    ) -> ValidationResult<Self> {
        Ok(SeatingAttrs {
            capacity: validate_positive_count("person capacity", capacity)?,
            has_backrest,
            upholstery: upholstery.map(str::to_string),
        })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn has_backrest(&self) -> bool {
        self.has_backrest
    }

    pub fn upholstery(&self) -> Option<&str> {
        self.upholstery.as_deref()
    }

    pub fn set_capacity(&mut self, capacity: u32) -> ValidationResult<()> {
        self.capacity = validate_positive_count("person capacity", capacity)?;
        Ok(())
    }

    pub fn set_backrest(&mut self, has_backrest: bool) {
        self.has_backrest = has_backrest;
    }

    pub fn set_upholstery(&mut self, upholstery: Option<&str>) {
        self.upholstery = upholstery.map(str::to_string);
    }

    /// Comfort factor formula.
    ///
    /// Starts at 1.0, then:
    /// - +0.1 for a backrest
    /// - +0.2 for leather upholstery, +0.1 for fabric (case-insensitive;
    ///   anything else adds nothing)
    /// - +0.05 per seat beyond the first
    pub fn comfort_factor(&self) -> f64 {
        let mut factor = 1.0;

        if self.has_backrest {
            factor += 0.1;
        }

        if let Some(upholstery) = &self.upholstery {
            match upholstery.to_lowercase().as_str() {
                "leather" => factor += 0.2,
                "fabric" => factor += 0.1,
                _ => {}
            }
        }

        factor += (self.capacity as f64 - 1.0) * 0.05;

        factor
    }

    /// One-line summary used inside item descriptions.
    pub fn describe_line(&self) -> String {
        let mut line = format!(
            "Seats: {}, Backrest: {}",
            self.capacity,
            if self.has_backrest { "yes" } else { "no" }
        );
        if let Some(upholstery) = &self.upholstery {
            line.push_str(&format!(", Upholstery: {upholstery}"));
        }
        line
    }
}

/// A `Sellable` that carries seating attributes.
pub trait SeatingItem: Sellable + std::fmt::Debug {
    fn seating(&self) -> &SeatingAttrs;

    /// Comfort factor of this item's current seating state.
    fn comfort_factor(&self) -> f64 {
        self.seating().comfort_factor()
    }
}

// =============================================================================
// Surface
// =============================================================================

/// Shared attributes of surface items (tables, desks). Dimensions in cm.
///
/// ## Invariants
/// - `length`, `width`, `height` all > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAttrs {
    length: f64,
    width: f64,
    height: f64,
}

impl SurfaceAttrs {
    pub fn new(length: f64, width: f64, height: f64) -> ValidationResult<Self> {
        Ok(SurfaceAttrs {
            length: validate_dimension("length", length)?,
            width: validate_dimension("width", width)?,
            height: validate_dimension("height", height)?,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_length(&mut self, length: f64) -> ValidationResult<()> {
        self.length = validate_dimension("length", length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> ValidationResult<()> {
        self.width = validate_dimension("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> ValidationResult<()> {
        self.height = validate_dimension("height", height)?;
        Ok(())
    }

    /// Work surface area in cm².
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Size factor formula: 1.0 + 5% per 10,000 cm² of area.
    pub fn size_factor(&self) -> f64 {
        1.0 + (self.area() / 10_000.0) * 0.05
    }

    /// One-line summary used inside item descriptions.
    pub fn describe_line(&self) -> String {
        format!(
            "Dimensions: {}x{}x{} cm (area: {} cm²)",
            self.length,
            self.width,
            self.height,
            self.area()
        )
    }
}

/// A `Sellable` that carries surface attributes.
pub trait SurfaceItem: Sellable {
    fn surface(&self) -> &SurfaceAttrs;

    /// Size factor of this item's current dimensions.
    fn size_factor(&self) -> f64 {
        self.surface().size_factor()
    }

    /// Declared seating capacity of the surface, when it has one.
    ///
    /// Tables declare how many people sit at them; desks do not. The dining
    /// set composite derives its chair limit from this, falling back to
    /// [`crate::DEFAULT_TABLE_SEATS`].
    fn declared_seating(&self) -> Option<u32> {
        None
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Shared attributes of storage items (armoires, drawer chests).
///
/// ## Invariants
/// - `compartments` > 0
/// - `capacity_liters` > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageAttrs {
    compartments: u32,
    capacity_liters: f64,
}

impl StorageAttrs {
    pub fn new(compartments: u32, capacity_liters: f64) -> ValidationResult<Self> {
        Ok(StorageAttrs {
            compartments: validate_positive_count("compartment count", compartments)?,
            capacity_liters: validate_dimension("capacity in liters", capacity_liters)?,
        })
    }

    pub fn compartments(&self) -> u32 {
        self.compartments
    }

    pub fn capacity_liters(&self) -> f64 {
        self.capacity_liters
    }

    pub fn set_compartments(&mut self, compartments: u32) -> ValidationResult<()> {
        self.compartments = validate_positive_count("compartment count", compartments)?;
        Ok(())
    }

    pub fn set_capacity_liters(&mut self, liters: f64) -> ValidationResult<()> {
        self.capacity_liters = validate_dimension("capacity in liters", liters)?;
        Ok(())
    }

    /// Storage factor formula: 1.0 + 5% per compartment beyond the first
    /// + 2% per 100 liters of capacity.
    pub fn storage_factor(&self) -> f64 {
        1.0 + (self.compartments as f64 - 1.0) * 0.05 + (self.capacity_liters / 100.0) * 0.02
    }

    /// One-line summary used inside item descriptions.
    pub fn describe_line(&self) -> String {
        format!(
            "Compartments: {}, Capacity: {} L",
            self.compartments, self.capacity_liters
        )
    }
}

/// A `Sellable` that carries storage attributes.
pub trait StorageItem: Sellable {
    fn storage(&self) -> &StorageAttrs;

    /// Storage factor of this item's current state.
    fn storage_factor(&self) -> f64 {
        self.storage().storage_factor()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_comfort_factor_components() {
        // Bare one-seater: neutral
        let bare = SeatingAttrs::new(1, false, None).unwrap();
        assert!(close(bare.comfort_factor(), 1.0));

        // Backrest adds 0.1
        let backed = SeatingAttrs::new(1, true, None).unwrap();
        assert!(close(backed.comfort_factor(), 1.1));

        // Leather adds 0.2, case-insensitive
        let leather = SeatingAttrs::new(1, false, Some("Leather")).unwrap();
        assert!(close(leather.comfort_factor(), 1.2));

        // Fabric adds 0.1
        let fabric = SeatingAttrs::new(1, false, Some("fabric")).unwrap();
        assert!(close(fabric.comfort_factor(), 1.1));

        // Unknown upholstery adds nothing
        let velvet = SeatingAttrs::new(1, false, Some("velvet")).unwrap();
        assert!(close(velvet.comfort_factor(), 1.0));

        // +0.05 per seat beyond the first
        let three_seater = SeatingAttrs::new(3, true, Some("fabric")).unwrap();
        assert!(close(three_seater.comfort_factor(), 1.3));
    }

    #[test]
    fn test_seating_validation() {
        assert!(SeatingAttrs::new(0, true, None).is_err());

        let mut attrs = SeatingAttrs::new(2, true, None).unwrap();
        assert!(attrs.set_capacity(0).is_err());
        assert_eq!(attrs.capacity(), 2);
    }

    #[test]
    fn test_size_factor() {
        // 120 × 80 = 9600 cm² → 1.0 + 0.96 × 0.05 = 1.048
        let attrs = SurfaceAttrs::new(120.0, 80.0, 75.0).unwrap();
        assert!(close(attrs.area(), 9_600.0));
        assert!(close(attrs.size_factor(), 1.048));
    }

    #[test]
    fn test_surface_validation() {
        assert!(SurfaceAttrs::new(0.0, 80.0, 75.0).is_err());
        assert!(SurfaceAttrs::new(120.0, -1.0, 75.0).is_err());

        let mut attrs = SurfaceAttrs::new(120.0, 80.0, 75.0).unwrap();
        assert!(attrs.set_height(0.0).is_err());
        assert!(close(attrs.height(), 75.0));
    }

    #[test]
    fn test_storage_factor() {
        // 3 compartments, 200 L → 1.0 + 2×0.05 + 2×0.02 = 1.14
        let attrs = StorageAttrs::new(3, 200.0).unwrap();
        assert!(close(attrs.storage_factor(), 1.14));

        // Single compartment, 100 L → 1.02
        let small = StorageAttrs::new(1, 100.0).unwrap();
        assert!(close(small.storage_factor(), 1.02));
    }

    #[test]
    fn test_storage_validation() {
        assert!(StorageAttrs::new(0, 100.0).is_err());
        assert!(StorageAttrs::new(2, 0.0).is_err());
    }
}
