//! # Concrete Furniture Kinds
//!
//! One module per catalog kind. Every kind embeds an [`crate::item::ItemProfile`],
//! zero or more capability attribute sets, and its own surcharge fields, and
//! implements [`crate::item::Sellable`] with the canonical price rule.
//!
//! ## Price Rule Summary
//! ```text
//! ┌────────────────┬────────────────────────────────────────────────────────┐
//! │ Chair          │ base + $10 adjustable + $15 wheels                     │
//! │ Table          │ base × size_factor + shape/seats surcharges            │
//! │ Bed            │ base + size + $300 mattress + $100 headboard           │
//! │ Armoire        │ base + doors×$50 + drawers×$30 + $100 mirrors          │
//! │ DrawerChest    │ base + drawers×$20 + $30 wheels                        │
//! │ Desk           │ base + drawers×$25 + $50 long + $40 light + $30 shape  │
//! │ Armchair       │ base + $200 uphol. + $100 arms + $250 recl. + $80 foot │
//! │ Sofa           │ base × comfort_factor + $150 arms + $200 mod + $50 cu. │
//! │ SofaBed        │ sofa rule + bed size + $300 mattress + mechanism       │
//! └────────────────┴────────────────────────────────────────────────────────┘
//! ```

mod armchair;
mod armoire;
mod bed;
mod chair;
mod desk;
mod drawer_chest;
mod sofa;
mod sofa_bed;
mod table;

pub use armchair::Armchair;
pub use armoire::Armoire;
pub use bed::{Bed, BedSize};
pub use chair::Chair;
pub use desk::Desk;
pub use drawer_chest::DrawerChest;
pub use sofa::Sofa;
pub use sofa_bed::{ConversionMechanism, ModeSwitch, SofaBed, SofaBedMode};
pub use table::{Table, TableShape};
