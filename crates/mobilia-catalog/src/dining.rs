//! # Dining Set Composite
//!
//! A priced aggregate of one table and its chairs, sharing member ownership
//! with the rest of the catalog through `Rc`.
//!
//! ## Aggregation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           DiningSet                                     │
//! │                                                                         │
//! │   table:  Rc<dyn SurfaceItem>      chairs: Vec<Rc<dyn SeatingItem>>    │
//! │            │                                 │                          │
//! │            │ declared_seating()              │ kind() homogeneity:      │
//! │            ▼                                 │ every chair matches the  │
//! │   capacity = declared or                     │ FIRST chair's kind       │
//! │              DEFAULT_TABLE_SEATS             ▼                          │
//! │                                     chairs.len() ≤ capacity             │
//! │                                                                         │
//! │   total_price = table + Σ chairs, × 0.95 once chairs ≥ 4               │
//! │                                                                         │
//! │   Members are shared, not owned: the same chair Rc can sit in the      │
//! │   store inventory and in a set at once. The set never mutates its      │
//! │   members.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The set itself implements [`Sellable`], so a whole dining set can be
//! stocked and sold as a single inventory line.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::capability::{SeatingItem, SurfaceItem};
use crate::error::{CatalogError, CatalogResult};
use crate::item::{ItemKind, Sellable};
use crate::money::Money;
use crate::validation::{validate_label, ValidationResult};
use crate::{BULK_DISCOUNT_BPS, BULK_DISCOUNT_MIN_CHAIRS, DEFAULT_TABLE_SEATS};

// =============================================================================
// Summary
// =============================================================================

/// Priced snapshot of a dining set's composition, for reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningSetSummary {
    pub name: String,
    /// Table plus chairs.
    pub piece_count: usize,
    pub table_price: Money,
    pub chairs_price: Money,
    /// Whole-set price with the bulk discount already applied.
    pub total_price: Money,
    /// People the set currently seats (one per chair).
    pub seats: usize,
    /// Distinct member materials (including chair upholstery), sorted.
    pub materials: Vec<String>,
}

impl fmt::Display for DiningSetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} pieces seating {}, total {} (materials: {})",
            self.name,
            self.piece_count,
            self.seats,
            self.total_price,
            self.materials.join(", ")
        )
    }
}

// =============================================================================
// Dining Set
// =============================================================================

/// One table plus up to `capacity` chairs of a single kind.
///
/// ## Invariants
/// - `chairs.len() <= capacity()` at all times
/// - every chair has the same `ItemKind` as the first chair added
pub struct DiningSet {
    name: String,
    table: Rc<dyn SurfaceItem>,
    chairs: Vec<Rc<dyn SeatingItem>>,
}

impl DiningSet {
    /// Builds an empty set around a table. The name is a validated label.
    pub fn new(name: &str, table: Rc<dyn SurfaceItem>) -> ValidationResult<Self> {
        Ok(DiningSet {
            name: validate_label("name", name)?,
            table,
            chairs: Vec::new(),
        })
    }

    pub fn table(&self) -> &Rc<dyn SurfaceItem> {
        &self.table
    }

    pub fn chairs(&self) -> &[Rc<dyn SeatingItem>] {
        &self.chairs
    }

    pub fn chair_count(&self) -> usize {
        self.chairs.len()
    }

    /// Chair limit: what the table declares, or the house default when the
    /// table declares nothing.
    pub fn capacity(&self) -> u32 {
        self.table.declared_seating().unwrap_or(DEFAULT_TABLE_SEATS)
    }

    /// Adds a chair. Rejected when the set is full or when the chair's kind
    /// differs from the first chair's; a rejected add changes nothing.
    pub fn add_chair(&mut self, chair: Rc<dyn SeatingItem>) -> CatalogResult<()> {
        let capacity = self.capacity();
        if self.chairs.len() as u32 >= capacity {
            return Err(CatalogError::CapacityExceeded { max: capacity });
        }

        if let Some(first) = self.chairs.first() {
            if chair.kind() != first.kind() {
                return Err(CatalogError::ChairKindMismatch {
                    expected: first.kind(),
                    found: chair.kind(),
                });
            }
        }

        self.chairs.push(chair);
        Ok(())
    }

    /// Removes and returns a chair: the one at `index`, or the most recently
    /// added when `index` is `None`.
    pub fn remove_chair(
        &mut self,
        index: Option<usize>,
    ) -> CatalogResult<Rc<dyn SeatingItem>> {
        if self.chairs.is_empty() {
            return Err(CatalogError::EmptyAssembly);
        }

        match index {
            None => Ok(self.chairs.pop().ok_or(CatalogError::EmptyAssembly)?),
            Some(i) if i < self.chairs.len() => Ok(self.chairs.remove(i)),
            Some(i) => Err(CatalogError::ChairIndexOutOfRange {
                index: i,
                count: self.chairs.len(),
            }),
        }
    }

    /// Whether the bulk discount applies to the current composition.
    pub fn qualifies_for_bulk_discount(&self) -> bool {
        self.chairs.len() >= BULK_DISCOUNT_MIN_CHAIRS
    }

    /// Table price plus all chair prices, with the bulk discount applied
    /// once to the whole when the set holds enough chairs.
    ///
    /// Fails if any member fails to price; nothing is silently skipped here
    /// (the store's aggregates are the tolerant layer, not the set).
    pub fn total_price(&self) -> CatalogResult<Money> {
        let mut total = self.table.calculate_price()?;
        for chair in &self.chairs {
            total += chair.calculate_price()?;
        }

        if self.qualifies_for_bulk_discount() {
            total = total.apply_percentage_discount(BULK_DISCOUNT_BPS);
        }

        Ok(total)
    }

    /// Distinct member materials (chair upholstery included), sorted.
    fn materials(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        if let Some(material) = self.table.material() {
            set.insert(material.to_string());
        }
        for chair in &self.chairs {
            if let Some(material) = chair.material() {
                set.insert(material.to_string());
            }
            if let Some(upholstery) = chair.upholstery() {
                set.insert(upholstery.to_string());
            }
        }
        set.into_iter().collect()
    }

    /// Priced composition snapshot. Fails when any member fails to price.
    pub fn summary(&self) -> CatalogResult<DiningSetSummary> {
        let table_price = self.table.calculate_price()?;
        let mut chairs_price = Money::zero();
        for chair in &self.chairs {
            chairs_price += chair.calculate_price()?;
        }

        Ok(DiningSetSummary {
            name: self.name.clone(),
            piece_count: 1 + self.chairs.len(),
            table_price,
            chairs_price,
            total_price: self.total_price()?,
            seats: self.chairs.len(),
            materials: self.materials(),
        })
    }

    /// Multi-line report: the set line, the table's description, each
    /// chair's description in insertion order, and a discount note when the
    /// bulk discount applies.
    pub fn full_description(&self) -> CatalogResult<String> {
        let mut out = format!(
            "Dining set: {} ({} chairs, capacity {})\nTotal price: {}\n\n[Table]\n{}",
            self.name,
            self.chairs.len(),
            self.capacity(),
            self.total_price()?,
            self.table.describe(),
        );

        for (i, chair) in self.chairs.iter().enumerate() {
            out.push_str(&format!("\n\n[Chair {}]\n{}", i + 1, chair.describe()));
        }

        if self.qualifies_for_bulk_discount() {
            out.push_str("\n\nBulk discount applied: 5% off the whole set");
        }

        Ok(out)
    }
}

impl Sellable for DiningSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ItemKind {
        ItemKind::DiningSet
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        self.total_price()
    }

    fn describe(&self) -> String {
        self.full_description()
            .unwrap_or_else(|e| format!("Dining set: {} (price unavailable: {e})", self.name))
    }

    // label() stays the bare set name; material() stays None because the
    // aggregate has no single material of its own.
}

impl fmt::Debug for DiningSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiningSet")
            .field("name", &self.name)
            .field("table", &self.table.label())
            .field("chairs", &self.chairs.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Armchair, Chair, Table, TableShape};

    fn table(seats: u32) -> Rc<Table> {
        Rc::new(
            Table::new(
                "Family Table",
                "oak",
                "brown",
                Money::from_cents(20_000),
                TableShape::Rectangular,
                120.0,
                80.0,
                75.0,
                seats,
            )
            .unwrap(),
        )
    }

    fn chair(name: &str) -> Rc<Chair> {
        Rc::new(
            Chair::new(name, "oak", "brown", Money::from_cents(10_000)).unwrap(),
        )
    }

    fn armchair(name: &str) -> Rc<Armchair> {
        Rc::new(
            Armchair::new(
                name,
                "oak",
                "brown",
                Money::from_cents(30_000),
                1,
                None,
                false,
                false,
                false,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_capacity_from_table_declaration() {
        let set = DiningSet::new("Six Top", table(4)).unwrap();
        assert_eq!(set.capacity(), 4);
    }

    #[test]
    fn test_capacity_limit_enforced() {
        let mut set = DiningSet::new("Two Top", table(2)).unwrap();
        set.add_chair(chair("C1")).unwrap();
        set.add_chair(chair("C2")).unwrap();

        let err = set.add_chair(chair("C3")).unwrap_err();
        assert!(matches!(err, CatalogError::CapacityExceeded { max: 2 }));
        assert_eq!(set.chair_count(), 2);
    }

    #[test]
    fn test_kind_homogeneity() {
        let mut set = DiningSet::new("Mixed", table(6)).unwrap();
        set.add_chair(chair("C1")).unwrap();

        let err = set.add_chair(armchair("A1")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ChairKindMismatch {
                expected: ItemKind::Chair,
                found: ItemKind::Armchair,
            }
        ));
        assert_eq!(set.chair_count(), 1);
    }

    #[test]
    fn test_first_chair_sets_the_kind() {
        // An armchair-first set is fine; plain chairs are then rejected
        let mut set = DiningSet::new("Lounge", table(6)).unwrap();
        set.add_chair(armchair("A1")).unwrap();
        set.add_chair(armchair("A2")).unwrap();
        assert!(set.add_chair(chair("C1")).is_err());
    }

    #[test]
    fn test_remove_chair_default_is_last() {
        let mut set = DiningSet::new("Set", table(6)).unwrap();
        set.add_chair(chair("First")).unwrap();
        set.add_chair(chair("Second")).unwrap();

        let removed = set.remove_chair(None).unwrap();
        assert_eq!(removed.name(), "Second");
        assert_eq!(set.chair_count(), 1);
    }

    #[test]
    fn test_remove_chair_by_index() {
        let mut set = DiningSet::new("Set", table(6)).unwrap();
        set.add_chair(chair("First")).unwrap();
        set.add_chair(chair("Second")).unwrap();

        let removed = set.remove_chair(Some(0)).unwrap();
        assert_eq!(removed.name(), "First");

        let err = set.remove_chair(Some(5)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ChairIndexOutOfRange { index: 5, count: 1 }
        ));
    }

    #[test]
    fn test_remove_from_empty_set() {
        let mut set = DiningSet::new("Empty", table(6)).unwrap();
        assert!(matches!(
            set.remove_chair(None).unwrap_err(),
            CatalogError::EmptyAssembly
        ));
    }

    #[test]
    fn test_total_price_without_discount() {
        // Table: $200 × 1.048 + $50 six-seat surcharge = $259.60;
        // chairs: 3 × $100 = $300
        let mut set = DiningSet::new("Trio", table(6)).unwrap();
        for i in 0..3 {
            set.add_chair(chair(&format!("C{i}"))).unwrap();
        }
        assert!(!set.qualifies_for_bulk_discount());
        assert_eq!(set.total_price().unwrap().cents(), 55_960);
    }

    #[test]
    fn test_bulk_discount_at_four_chairs() {
        // Table $259.60 + 4 × $100 = $659.60 → × 0.95 = $626.62
        let mut set = DiningSet::new("Quartet", table(6)).unwrap();
        for i in 0..4 {
            set.add_chair(chair(&format!("C{i}"))).unwrap();
        }
        assert!(set.qualifies_for_bulk_discount());
        assert_eq!(set.total_price().unwrap().cents(), 62_662);
        assert!(set
            .full_description()
            .unwrap()
            .contains("Bulk discount applied: 5%"));
    }

    #[test]
    fn test_shared_chair_ownership() {
        // The same chair Rc can live in two sets at once
        let shared = chair("Shared");
        let mut a = DiningSet::new("A", table(6)).unwrap();
        let mut b = DiningSet::new("B", table(6)).unwrap();
        a.add_chair(shared.clone()).unwrap();
        b.add_chair(shared.clone()).unwrap();
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_summary_prices_and_materials() {
        let mut set = DiningSet::new("Dinner", table(6)).unwrap();
        set.add_chair(chair("C1")).unwrap();
        set.add_chair(chair("C2")).unwrap();

        let summary = set.summary().unwrap();
        assert_eq!(summary.piece_count, 3);
        assert_eq!(summary.seats, 2);
        assert_eq!(summary.table_price.cents(), 25_960);
        assert_eq!(summary.chairs_price.cents(), 20_000);
        assert_eq!(summary.total_price.cents(), 45_960);
        // Table and chairs are all oak, deduplicated to one entry
        assert_eq!(summary.materials, vec!["oak".to_string()]);
    }

    #[test]
    fn test_summary_includes_upholstery() {
        let upholstered = Rc::new(
            Armchair::new(
                "Plush",
                "pine",
                "red",
                Money::from_cents(30_000),
                1,
                Some("leather"),
                true,
                false,
                false,
            )
            .unwrap(),
        );
        let mut set = DiningSet::new("Lounge", table(6)).unwrap();
        set.add_chair(upholstered).unwrap();

        let materials = set.summary().unwrap().materials;
        assert_eq!(
            materials,
            vec!["leather".to_string(), "oak".to_string(), "pine".to_string()]
        );
    }

    #[test]
    fn test_set_is_sellable() {
        let mut set = DiningSet::new("Whole Set", table(6)).unwrap();
        set.add_chair(chair("C1")).unwrap();

        let sellable: &dyn Sellable = &set;
        assert_eq!(sellable.kind(), ItemKind::DiningSet);
        assert_eq!(sellable.name(), "Whole Set");
        assert!(sellable.material().is_none());
        assert_eq!(sellable.calculate_price().unwrap().cents(), 35_960);
    }

    #[test]
    fn test_full_description_lists_members() {
        let mut set = DiningSet::new("Described", table(6)).unwrap();
        set.add_chair(chair("C1")).unwrap();
        set.add_chair(chair("C2")).unwrap();

        let text = set.full_description().unwrap();
        assert!(text.contains("[Table]"));
        assert!(text.contains("[Chair 1]"));
        assert!(text.contains("[Chair 2]"));
        assert!(text.starts_with("Dining set: Described (2 chairs, capacity 6)"));
    }
}
