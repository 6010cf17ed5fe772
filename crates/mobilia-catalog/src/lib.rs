//! # Mobilia Catalog
//!
//! Core furniture-catalog domain logic: item kinds, capability attribute
//! sets, price rules, and the dining-set composite. Pure and synchronous;
//! no I/O, no persistence, no global state.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        mobilia-catalog                                  │
//! │                                                                         │
//! │  money ──────▶ item ──────▶ capability ──────▶ items/ ──────▶ dining   │
//! │  (cents,       (Sellable,   (Seating/Surface/  (9 concrete    (table + │
//! │   factors)      ItemProfile) Storage attrs)     kinds)         chairs) │
//! │                                                                         │
//! │  validation / error: two tiers                                          │
//! │    • ValidationError — rejected constructor/setter input                │
//! │    • CatalogError    — failed operational outcome (capacity,           │
//! │                        mismatch, price unavailable, ...)               │
//! │                                                                         │
//! │  Consumed by mobilia-store (inventory, discounts, sales).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Rules
//! - Prices are integer cents ([`Money`]); the single float boundary is
//!   [`Money::apply_factor`], which rounds to the nearest cent.
//! - Every price rule is pure: `calculate_price` reads attribute state and
//!   never caches or mutates.
//! - Failed validation leaves the target unchanged.

pub mod capability;
pub mod dining;
pub mod error;
pub mod item;
pub mod items;
pub mod money;
pub mod validation;

pub use capability::{
    SeatingAttrs, SeatingItem, StorageAttrs, StorageItem, SurfaceAttrs, SurfaceItem,
};
pub use dining::{DiningSet, DiningSetSummary};
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use item::{ItemKind, ItemProfile, Sellable};
pub use money::Money;

/// Chair limit assumed for a table that declares no seating of its own.
pub const DEFAULT_TABLE_SEATS: u32 = 6;

/// Chair count at which a dining set's bulk discount kicks in.
pub const BULK_DISCOUNT_MIN_CHAIRS: usize = 4;

/// Dining-set bulk discount, in basis points (500 = 5%).
pub const BULK_DISCOUNT_BPS: u32 = 500;
