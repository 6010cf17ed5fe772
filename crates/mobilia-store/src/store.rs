//! # Store Service
//!
//! Owns the inventory, category discounts, and sales counters. All mutation
//! flows through the methods here; the catalog items themselves are never
//! modified by the store.
//!
//! ## Discount Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell(item)                                                             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  kind = item.kind()          discounts: { "chairs": 10, "sofa_bed": 5 } │
//! │     │                                                                   │
//! │     ├──▶ try kind.plural_key()   ("chairs")   ── hit? use it            │
//! │     ├──▶ try kind.key()          ("chair")    ── hit? use it            │
//! │     └──▶ neither ── 0% (no discount)                                    │
//! │                                                                         │
//! │  final = original × (1 − percent/100), rounded to the cent              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Partial Failure Tolerance
//! A member whose `calculate_price` fails never aborts an aggregate query
//! (`inventory_value`, `statistics`, `filter_by_price_range`): the member is
//! skipped with a `warn!`. Point operations on that same member (`sell`,
//! `add_furniture`) DO fail, with `StoreError::PriceUnavailable`.

use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use mobilia_catalog::validation::{validate_discount_percent, validate_label};
use mobilia_catalog::{DiningSet, ItemKind, Money, Sellable};

use crate::error::{StoreError, StoreResult};
use crate::records::{SaleRecord, StoreStatistics};

/// A furniture store: shared-ownership inventory plus sales accounting.
///
/// Single-threaded by design; inventory entries are `Rc` so the same item
/// can simultaneously sit in a dining set or in a caller's hands.
pub struct Store {
    name: String,
    inventory: Vec<Rc<dyn Sellable>>,
    /// Category token → discount in whole percent (1..=100).
    discounts: BTreeMap<String, u32>,
    items_sold: u64,
    sales_value: Money,
}

impl Store {
    /// Opens an empty store. The name is a validated label.
    pub fn new(name: &str) -> StoreResult<Self> {
        Ok(Store {
            name: validate_label("store name", name)?,
            inventory: Vec::new(),
            discounts: BTreeMap::new(),
            items_sold: 0,
            sales_value: Money::zero(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &[Rc<dyn Sellable>] {
        &self.inventory
    }

    pub fn items_sold(&self) -> u64 {
        self.items_sold
    }

    pub fn sales_value(&self) -> Money {
        self.sales_value
    }

    // =========================================================================
    // Stocking
    // =========================================================================

    /// Appends an item unconditionally. No price check.
    pub fn add_item(&mut self, item: Rc<dyn Sellable>) {
        info!(item = %item.label(), kind = %item.kind(), "Stocked item");
        self.inventory.push(item);
    }

    /// Stocks an item with a price check: the item must price successfully
    /// and the result must be strictly positive.
    pub fn add_furniture(&mut self, item: Rc<dyn Sellable>) -> StoreResult<()> {
        let price = item.calculate_price().map_err(|e| {
            warn!(item = %item.label(), error = %e, "Rejected item: price computation failed");
            StoreError::PriceUnavailable {
                item: item.name().to_string(),
                reason: e.to_string(),
            }
        })?;

        if !price.is_positive() {
            warn!(item = %item.label(), price = %price, "Rejected item: non-positive price");
            return Err(StoreError::NonPositivePrice {
                item: item.name().to_string(),
                price,
            });
        }

        self.add_item(item);
        Ok(())
    }

    /// Stocks a dining set: as a single priced unit when the whole set
    /// prices, otherwise decomposed into its table and chairs.
    ///
    /// Returns the number of inventory entries added (1 for the unit, 1 +
    /// chair count for a decomposed set).
    pub fn add_dining_set(&mut self, set: Rc<DiningSet>) -> StoreResult<usize> {
        match self.add_furniture(set.clone()) {
            Ok(()) => Ok(1),
            Err(e) => {
                warn!(
                    set = %set.name(),
                    error = %e,
                    "Set rejected as a unit; stocking members individually"
                );

                let table: Rc<dyn Sellable> = set.table().clone();
                self.add_item(table);

                let chair_count = set.chairs().len();
                for chair in set.chairs() {
                    let chair: Rc<dyn Sellable> = chair.clone();
                    self.add_item(chair);
                }

                Ok(1 + chair_count)
            }
        }
    }

    // =========================================================================
    // Discounts
    // =========================================================================

    /// Registers (or replaces) a category discount. The category token is
    /// normalized to lowercase; percent must be in 1..=100.
    pub fn apply_discount(&mut self, category: &str, percent: u32) -> StoreResult<()> {
        let category = validate_label("discount category", category)?.to_lowercase();
        let percent = validate_discount_percent(percent)?;

        info!(category = %category, percent, "Discount registered");
        self.discounts.insert(category, percent);
        Ok(())
    }

    /// Active discount for a kind: the plural category key wins over the
    /// singular one; no entry means 0%.
    pub fn discount_for(&self, kind: ItemKind) -> u32 {
        self.discounts
            .get(&kind.plural_key())
            .or_else(|| self.discounts.get(kind.key()))
            .copied()
            .unwrap_or(0)
    }

    // =========================================================================
    // Selling
    // =========================================================================

    /// Sells an item (not necessarily a stocked one): prices it, applies the
    /// category discount, and bumps the sales counters.
    pub fn sell(
        &mut self,
        item: &dyn Sellable,
        customer: Option<&str>,
    ) -> StoreResult<SaleRecord> {
        let original_price =
            item.calculate_price()
                .map_err(|e| StoreError::PriceUnavailable {
                    item: item.name().to_string(),
                    reason: e.to_string(),
                })?;

        let discount_percent = self.discount_for(item.kind());
        let final_price = if discount_percent > 0 {
            original_price.apply_percentage_discount(discount_percent * 100)
        } else {
            original_price
        };

        self.items_sold += 1;
        self.sales_value += final_price;

        let record = SaleRecord {
            id: Uuid::new_v4(),
            item: item.label(),
            original_price,
            discount_percent,
            final_price,
            customer: customer.map(str::to_string),
            sold_at: Utc::now(),
        };

        info!(
            sale_id = %record.id,
            item = %record.item,
            final_price = %record.final_price,
            discount_percent,
            "Sale completed"
        );

        Ok(record)
    }

    /// Sells the first inventory entry whose `name()` or `label()` matches
    /// exactly, removing it from inventory. The entry stays stocked if the
    /// sale itself fails.
    pub fn sell_by_name(&mut self, name: &str) -> StoreResult<SaleRecord> {
        let position = self
            .inventory
            .iter()
            .position(|item| item.name() == name || item.label() == name)
            .ok_or_else(|| StoreError::UnknownItem {
                name: name.to_string(),
            })?;

        let item = Rc::clone(&self.inventory[position]);
        let record = self.sell(item.as_ref(), None)?;
        self.inventory.remove(position);
        Ok(record)
    }

    // =========================================================================
    // Aggregates & Queries
    // =========================================================================

    /// Sum of all member prices. Members that fail to price are skipped.
    pub fn inventory_value(&self) -> Money {
        self.inventory
            .iter()
            .filter_map(|item| match item.calculate_price() {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!(item = %item.label(), error = %e, "Skipping unpriceable item");
                    None
                }
            })
            .sum()
    }

    /// Human-readable inventory listing with the active discounts appended.
    pub fn inventory_report(&self) -> String {
        let mut report = format!(
            "Store: {}\nItems in stock: {}\n",
            self.name,
            self.inventory.len()
        );

        for item in &self.inventory {
            report.push_str(&format!("- {} ({})\n", item.name(), item.kind()));
        }

        if !self.discounts.is_empty() {
            report.push_str("Active discounts:\n");
            for (category, percent) in &self.discounts {
                report.push_str(&format!("- {category}: {percent}%\n"));
            }
        }

        report
    }

    /// Case-insensitive substring match on item names.
    pub fn filter_by_name_substring(&self, query: &str) -> Vec<Rc<dyn Sellable>> {
        let query = query.to_lowercase();
        self.inventory
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Case-insensitive equality on the primary material. Entities with no
    /// material (aggregates) never match.
    pub fn filter_by_material(&self, material: &str) -> Vec<Rc<dyn Sellable>> {
        self.inventory
            .iter()
            .filter(|item| {
                item.material()
                    .is_some_and(|m| m.eq_ignore_ascii_case(material))
            })
            .cloned()
            .collect()
    }

    /// Inclusive price range filter; members that fail to price are skipped.
    pub fn filter_by_price_range(&self, min: Money, max: Money) -> Vec<Rc<dyn Sellable>> {
        self.inventory
            .iter()
            .filter(|item| match item.calculate_price() {
                Ok(price) => price >= min && price <= max,
                Err(e) => {
                    warn!(item = %item.label(), error = %e, "Skipping unpriceable item");
                    false
                }
            })
            .cloned()
            .collect()
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> Vec<Rc<dyn Sellable>> {
        self.inventory
            .iter()
            .filter(|item| item.kind() == kind)
            .cloned()
            .collect()
    }

    /// Inventory entry counts per kind, deterministically ordered.
    pub fn count_by_kind(&self) -> BTreeMap<ItemKind, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.inventory {
            *counts.entry(item.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Aggregate snapshot. Unpriceable members count toward `total_items`
    /// but not toward the value or the average.
    pub fn statistics(&self) -> StoreStatistics {
        let mut priced_items = 0;
        let mut inventory_value = Money::zero();

        for item in &self.inventory {
            match item.calculate_price() {
                Ok(price) => {
                    priced_items += 1;
                    inventory_value += price;
                }
                Err(e) => {
                    warn!(item = %item.label(), error = %e, "Skipping unpriceable item");
                }
            }
        }

        let average_price = if priced_items > 0 {
            Some(Money::from_cents(
                inventory_value.cents() / priced_items as i64,
            ))
        } else {
            None
        };

        StoreStatistics {
            total_items: self.inventory.len(),
            priced_items,
            inventory_value,
            average_price,
            items_sold: self.items_sold,
            sales_value: self.sales_value,
            counts_by_kind: self.count_by_kind(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
