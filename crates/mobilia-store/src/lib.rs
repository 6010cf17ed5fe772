//! # Mobilia Store
//!
//! The store service on top of [`mobilia_catalog`]: inventory of shared
//! `Rc<dyn Sellable>` references, per-category percentage discounts, and
//! sales accounting with reportable records.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          mobilia-store                                  │
//! │                                                                         │
//! │   Store                                                                 │
//! │   ├── inventory: Vec<Rc<dyn Sellable>>   (shared with callers/sets)    │
//! │   ├── discounts: BTreeMap<category, %>   (plural key, then singular)   │
//! │   └── items_sold / sales_value           (monotone counters)           │
//! │                                                                         │
//! │   sell ──▶ SaleRecord { uuid, prices, customer, timestamp }            │
//! │   statistics ──▶ StoreStatistics (serde, deterministic ordering)       │
//! │                                                                         │
//! │   Single-threaded by design; aggregate queries tolerate members whose  │
//! │   price computation fails (skip + warn) instead of aborting.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod records;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use records::{SaleRecord, StoreStatistics};
pub use store::Store;
