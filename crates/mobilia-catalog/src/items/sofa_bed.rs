//! Sofa-bed: the combined item merging the sofa and bed pricing rules.
//!
//! ## Combination Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            SofaBed                                      │
//! │                                                                         │
//! │   ┌─────────────────────┐        ┌─────────────────────────┐           │
//! │   │   SeatingAttrs      │        │   Bed attribute group   │           │
//! │   │   (sofa rule:       │   +    │   size / mattress /     │           │
//! │   │    base × comfort)  │        │   conversion mechanism  │           │
//! │   └─────────────────────┘        └─────────────────────────┘           │
//! │                                                                         │
//! │   One entity, two independent attribute groups, ONE price rule that    │
//! │   composes both — not a physical composition of two objects, and not   │
//! │   a linearized multi-parent resolution.                                │
//! │                                                                         │
//! │   Mode machine:  sofa ──convert_to_bed()──▶ bed                        │
//! │                  sofa ◀─convert_to_sofa()── bed                        │
//! │   (converting into the current mode is a no-op with its own outcome)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::capability::{SeatingAttrs, SeatingItem};
use crate::error::{CatalogResult, ValidationError};
use crate::item::{ItemKind, ItemProfile, Sellable};
use crate::items::bed::BedSize;
use crate::money::Money;
use crate::validation::ValidationResult;

// =============================================================================
// Conversion Mechanism
// =============================================================================

/// How the sofa folds out into a bed. The mechanism carries its own
/// surcharge: folding is the baseline, hydraulic and electric cost extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMechanism {
    Folding,
    Hydraulic,
    Electric,
}

impl ConversionMechanism {
    const ALLOWED: [&'static str; 3] = ["folding", "hydraulic", "electric"];

    /// Fixed price surcharge for the mechanism.
    pub const fn surcharge(&self) -> Money {
        match self {
            ConversionMechanism::Folding => Money::from_cents(0),
            ConversionMechanism::Hydraulic => Money::from_cents(15_000),
            ConversionMechanism::Electric => Money::from_cents(30_000),
        }
    }
}

impl FromStr for ConversionMechanism {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "folding" => Ok(ConversionMechanism::Folding),
            "hydraulic" => Ok(ConversionMechanism::Hydraulic),
            "electric" => Ok(ConversionMechanism::Electric),
            _ => Err(ValidationError::NotAllowed {
                field: "conversion mechanism".to_string(),
                allowed: Self::ALLOWED.to_vec(),
            }),
        }
    }
}

impl fmt::Display for ConversionMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConversionMechanism::Folding => "folding",
            ConversionMechanism::Hydraulic => "hydraulic",
            ConversionMechanism::Electric => "electric",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Mode Machine
// =============================================================================

/// The two states of the sofa-bed. It always starts as a sofa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SofaBedMode {
    Sofa,
    Bed,
}

impl fmt::Display for SofaBedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SofaBedMode::Sofa => "sofa",
            SofaBedMode::Bed => "bed",
        })
    }
}

/// Outcome of a conversion request. Converting into the mode the item is
/// already in is not an error, but callers can tell the two cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    /// The mode changed.
    Switched {
        to: SofaBedMode,
        mechanism: ConversionMechanism,
    },
    /// The item was already in the requested mode; nothing changed.
    AlreadyIn(SofaBedMode),
}

impl fmt::Display for ModeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSwitch::Switched { to, mechanism } => {
                write!(f, "converted to {to} mode using the {mechanism} mechanism")
            }
            ModeSwitch::AlreadyIn(mode) => write!(f, "already in {mode} mode"),
        }
    }
}

// =============================================================================
// SofaBed
// =============================================================================

/// The sofa-bed combined item.
///
/// ## Price Rule
/// `base × comfort_factor` (the sofa rule) `+ bed-size surcharge
/// + $300 with mattress + mechanism surcharge`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SofaBed {
    profile: ItemProfile,
    seating: SeatingAttrs,
    bed_size: BedSize,
    includes_mattress: bool,
    mechanism: ConversionMechanism,
    mode: SofaBedMode,
}

impl SofaBed {
    /// Builds a sofa-bed in sofa mode.
    ///
    /// `bed_size` and `mechanism` are accepted as text, parsed
    /// case-insensitively, and normalized to their canonical forms.
    /// A sofa-bed always has a backrest.
    pub fn new(
        name: &str,
        material: &str,
        color: &str,
        base_price: Money,
        capacity: u32,
        upholstery: Option<&str>,
        bed_size: &str,
        includes_mattress: bool,
        mechanism: &str,
    ) -> ValidationResult<Self> {
        Ok(SofaBed {
            profile: ItemProfile::new(name, material, color, base_price)?,
            seating: SeatingAttrs::new(capacity, true, upholstery)?,
            bed_size: bed_size.parse()?,
            includes_mattress,
            mechanism: mechanism.parse()?,
            mode: SofaBedMode::Sofa,
        })
    }

    /// Maps a named bed-size token to a seat capacity.
    ///
    /// Compatibility shim for callers that hand a size name ("queen") where
    /// a numeric seat capacity is expected. The mapping is lossy and the
    /// fallback is a fixed 3; new callers should pass a number.
    pub fn seat_capacity_from_token(token: &str) -> u32 {
        match token.trim().to_lowercase().as_str() {
            "full" => 1,
            "queen" => 2,
            "king" => 3,
            _ => 3,
        }
    }

    pub fn profile(&self) -> &ItemProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut ItemProfile {
        &mut self.profile
    }

    pub fn bed_size(&self) -> BedSize {
        self.bed_size
    }

    pub fn includes_mattress(&self) -> bool {
        self.includes_mattress
    }

    pub fn mechanism(&self) -> ConversionMechanism {
        self.mechanism
    }

    pub fn mode(&self) -> SofaBedMode {
        self.mode
    }

    pub fn set_bed_size(&mut self, size: BedSize) {
        self.bed_size = size;
    }

    /// How many people sleep on it in bed mode: 2 from matrimonial up,
    /// 1 for an individual.
    pub fn sleeping_capacity(&self) -> u32 {
        match self.bed_size {
            BedSize::Individual => 1,
            BedSize::Matrimonial | BedSize::Queen | BedSize::King => 2,
        }
    }

    /// Folds the sofa out into a bed. Idempotent.
    pub fn convert_to_bed(&mut self) -> ModeSwitch {
        if self.mode == SofaBedMode::Bed {
            return ModeSwitch::AlreadyIn(SofaBedMode::Bed);
        }

        self.mode = SofaBedMode::Bed;
        ModeSwitch::Switched {
            to: SofaBedMode::Bed,
            mechanism: self.mechanism,
        }
    }

    /// Folds the bed back into a sofa. Idempotent.
    pub fn convert_to_sofa(&mut self) -> ModeSwitch {
        if self.mode == SofaBedMode::Sofa {
            return ModeSwitch::AlreadyIn(SofaBedMode::Sofa);
        }

        self.mode = SofaBedMode::Sofa;
        ModeSwitch::Switched {
            to: SofaBedMode::Sofa,
            mechanism: self.mechanism,
        }
    }

    fn price(&self) -> Money {
        let mut price = self
            .profile
            .base_price()
            .apply_factor(self.seating.comfort_factor());

        price += self.bed_size.surcharge();
        if self.includes_mattress {
            price += Money::from_cents(30_000);
        }
        price += self.mechanism.surcharge();

        price
    }
}

impl Sellable for SofaBed {
    fn name(&self) -> &str {
        self.profile.name()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::SofaBed
    }

    fn calculate_price(&self) -> CatalogResult<Money> {
        Ok(self.price())
    }

    fn describe(&self) -> String {
        format!(
            "Sofa-bed: {}\n  Material: {}\n  Color: {}\n  {}\n  Bed size: {}\n  Mattress included: {}\n  Mechanism: {}\n  Current mode: {}\n  Final price: {}",
            self.profile.name(),
            self.profile.material(),
            self.profile.color(),
            self.seating.describe_line(),
            self.bed_size,
            if self.includes_mattress { "yes" } else { "no" },
            self.mechanism,
            self.mode,
            self.price()
        )
    }

    fn label(&self) -> String {
        format!("{} (mode: {})", self.profile.name(), self.mode)
    }

    fn material(&self) -> Option<&str> {
        Some(self.profile.material())
    }

    fn upholstery(&self) -> Option<&str> {
        self.seating.upholstery()
    }
}

impl SeatingItem for SofaBed {
    fn seating(&self) -> &SeatingAttrs {
        &self.seating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa_bed(size: &str, mechanism: &str) -> SofaBed {
        SofaBed::new(
            "Studio Convertible",
            "pine",
            "blue",
            Money::from_cents(50_000),
            3,
            Some("fabric"),
            size,
            false,
            mechanism,
        )
        .unwrap()
    }

    #[test]
    fn test_price_composition() {
        // comfort: 1.0 + 0.1 backrest + 0.1 fabric + 2×0.05 = 1.3
        // $500 × 1.3 = $650, + matrimonial $200 = $850
        let sb = sofa_bed("matrimonial", "folding");
        assert_eq!(sb.calculate_price().unwrap().cents(), 85_000);
    }

    #[test]
    fn test_size_monotonicity() {
        let matrimonial = sofa_bed("matrimonial", "folding").calculate_price().unwrap();
        let queen = sofa_bed("queen", "folding").calculate_price().unwrap();
        let king = sofa_bed("king", "folding").calculate_price().unwrap();
        assert!(king > queen);
        assert!(queen > matrimonial);
    }

    #[test]
    fn test_mechanism_monotonicity() {
        let folding = sofa_bed("queen", "folding").calculate_price().unwrap();
        let hydraulic = sofa_bed("queen", "hydraulic").calculate_price().unwrap();
        let electric = sofa_bed("queen", "electric").calculate_price().unwrap();
        assert!(electric > hydraulic);
        assert!(hydraulic > folding);
    }

    #[test]
    fn test_mattress_surcharge() {
        let mut sb = sofa_bed("queen", "folding");
        let without = sb.calculate_price().unwrap();
        sb.includes_mattress = true;
        let with = sb.calculate_price().unwrap();
        assert_eq!((with - without).cents(), 30_000);
    }

    #[test]
    fn test_mode_machine() {
        let mut sb = sofa_bed("queen", "hydraulic");
        assert_eq!(sb.mode(), SofaBedMode::Sofa);

        let first = sb.convert_to_bed();
        assert_eq!(
            first,
            ModeSwitch::Switched {
                to: SofaBedMode::Bed,
                mechanism: ConversionMechanism::Hydraulic,
            }
        );
        assert_eq!(sb.mode(), SofaBedMode::Bed);

        // Idempotent: repeating the call reports but does not change state
        let second = sb.convert_to_bed();
        assert_eq!(second, ModeSwitch::AlreadyIn(SofaBedMode::Bed));
        assert_eq!(sb.mode(), SofaBedMode::Bed);

        let back = sb.convert_to_sofa();
        assert!(matches!(back, ModeSwitch::Switched { to: SofaBedMode::Sofa, .. }));
        assert_eq!(sb.mode(), SofaBedMode::Sofa);
        assert_eq!(
            sb.convert_to_sofa(),
            ModeSwitch::AlreadyIn(SofaBedMode::Sofa)
        );
    }

    #[test]
    fn test_mode_switch_messages() {
        let mut sb = sofa_bed("queen", "electric");
        assert_eq!(
            sb.convert_to_bed().to_string(),
            "converted to bed mode using the electric mechanism"
        );
        assert_eq!(sb.convert_to_bed().to_string(), "already in bed mode");
    }

    #[test]
    fn test_case_insensitive_construction() {
        let sb = sofa_bed("QUEEN", "Hydraulic");
        assert_eq!(sb.bed_size(), BedSize::Queen);
        assert_eq!(sb.mechanism(), ConversionMechanism::Hydraulic);
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert!(SofaBed::new(
            "Bad",
            "pine",
            "blue",
            Money::zero(),
            2,
            None,
            "california",
            false,
            "folding",
        )
        .is_err());

        assert!(SofaBed::new(
            "Bad",
            "pine",
            "blue",
            Money::zero(),
            2,
            None,
            "queen",
            false,
            "magnetic",
        )
        .is_err());
    }

    #[test]
    fn test_capacity_token_shim() {
        assert_eq!(SofaBed::seat_capacity_from_token("queen"), 2);
        assert_eq!(SofaBed::seat_capacity_from_token("Full"), 1);
        assert_eq!(SofaBed::seat_capacity_from_token("KING"), 3);
        // Unrecognized tokens fall back to 3
        assert_eq!(SofaBed::seat_capacity_from_token("bunk"), 3);
    }

    #[test]
    fn test_sleeping_capacity() {
        assert_eq!(sofa_bed("queen", "folding").sleeping_capacity(), 2);
        assert_eq!(sofa_bed("individual", "folding").sleeping_capacity(), 1);
    }
}
