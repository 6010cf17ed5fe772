//! Reportable store records: completed sales and aggregate statistics.
//!
//! Everything here is serde-serializable so reports can be exported as JSON
//! without touching the live inventory.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mobilia_catalog::{ItemKind, Money};

// =============================================================================
// Sale Record
// =============================================================================

/// One completed sale.
///
/// `original_price` is the item's computed price at the moment of sale;
/// `final_price` has the category discount (if any) already applied. The
/// record is immutable once issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: Uuid,
    pub item: String,
    pub original_price: Money,
    /// Category discount applied, in whole percent (0 = none).
    pub discount_percent: u32,
    pub final_price: Money,
    pub customer: Option<String>,
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Amount the discount saved the customer.
    pub fn savings(&self) -> Money {
        self.original_price - self.final_price
    }
}

impl fmt::Display for SaleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sold {} for {}", self.item, self.final_price)?;
        if self.discount_percent > 0 {
            write!(
                f,
                " ({}% off, was {})",
                self.discount_percent, self.original_price
            )?;
        }
        if let Some(customer) = &self.customer {
            write!(f, " to {customer}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Store Statistics
// =============================================================================

/// Aggregate snapshot of a store's inventory and sales counters.
///
/// `priced_items` can be lower than `total_items` when some member's price
/// computation fails; such members are counted but excluded from
/// `inventory_value` and `average_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub total_items: usize,
    pub priced_items: usize,
    pub inventory_value: Money,
    /// Mean price over the priced members; `None` when none priced.
    pub average_price: Option<Money>,
    pub items_sold: u64,
    pub sales_value: Money,
    pub counts_by_kind: BTreeMap<ItemKind, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(discount: u32, customer: Option<&str>) -> SaleRecord {
        SaleRecord {
            id: Uuid::new_v4(),
            item: "Oak Chair".to_string(),
            original_price: Money::from_cents(10_000),
            discount_percent: discount,
            final_price: if discount == 10 {
                Money::from_cents(9_000)
            } else {
                Money::from_cents(10_000)
            },
            customer: customer.map(str::to_string),
            sold_at: Utc::now(),
        }
    }

    #[test]
    fn test_savings() {
        assert_eq!(record(10, None).savings().cents(), 1_000);
        assert!(record(0, None).savings().is_zero());
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(record(0, None).to_string(), "Sold Oak Chair for $100.00");
        assert_eq!(
            record(10, Some("Ana")).to_string(),
            "Sold Oak Chair for $90.00 (10% off, was $100.00) to Ana"
        );
    }

    #[test]
    fn test_record_round_trips_as_json() {
        let original = record(10, Some("Ana"));
        let json = serde_json::to_string(&original).unwrap();
        let restored: SaleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
