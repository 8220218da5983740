//! The closed set of supported games.
//!
//! ## Families
//!
//! | Family   | Shared defaults                                           |
//! |----------|-----------------------------------------------------------|
//! | Klondike | waste stock, build down alternating, Kings into gaps      |
//! | Yukon    | no stock, lift any face-up card, single-suit readiness    |
//! | Spider   | stock deals a row, complete suits go to the foundations   |
//! | Golf     | one foundation, only top cards move, no autocomplete      |
//!
//! Each family module builds its variants from the family defaults and
//! overrides only what differs.

pub mod descriptor;
mod golf;
mod klondike;
mod spider;
mod yukon;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

pub use descriptor::{GameVariant, Redeals, StockMode};

/// Variant families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Klondike,
    Yukon,
    Spider,
    Golf,
}

/// Identifier of a supported game.
///
/// ```
/// use solitaire_engine::variants::{Family, VariantId};
///
/// let id: VariantId = "forty_thieves".parse().unwrap();
/// assert_eq!(id, VariantId::FortyThieves);
/// assert_eq!(id.family(), Family::Klondike);
/// assert_eq!(id.label(), "Forty Thieves");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantId {
    KlondikeTurnOne,
    KlondikeTurnThree,
    Gargantua,
    ClassicWestcliff,
    AmericanWestcliff,
    Easthaven,
    ThumbAndPouch,
    FortyThieves,
    Streets,
    Yukon,
    Russian,
    Alaska,
    Moosehide,
    AustralianPatience,
    Canberra,
    Spider,
    SpiderTwoSuit,
    SpiderOneSuit,
    Spiderette,
    Golf,
    BlackHole,
    AcesUp,
}

impl VariantId {
    /// Every supported variant.
    pub const ALL: [VariantId; 22] = [
        VariantId::KlondikeTurnOne,
        VariantId::KlondikeTurnThree,
        VariantId::Gargantua,
        VariantId::ClassicWestcliff,
        VariantId::AmericanWestcliff,
        VariantId::Easthaven,
        VariantId::ThumbAndPouch,
        VariantId::FortyThieves,
        VariantId::Streets,
        VariantId::Yukon,
        VariantId::Russian,
        VariantId::Alaska,
        VariantId::Moosehide,
        VariantId::AustralianPatience,
        VariantId::Canberra,
        VariantId::Spider,
        VariantId::SpiderTwoSuit,
        VariantId::SpiderOneSuit,
        VariantId::Spiderette,
        VariantId::Golf,
        VariantId::BlackHole,
        VariantId::AcesUp,
    ];

    /// Stable identifier, used in statistics and snapshots.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            VariantId::KlondikeTurnOne => "klondike_turn_one",
            VariantId::KlondikeTurnThree => "klondike_turn_three",
            VariantId::Gargantua => "gargantua",
            VariantId::ClassicWestcliff => "classic_westcliff",
            VariantId::AmericanWestcliff => "american_westcliff",
            VariantId::Easthaven => "easthaven",
            VariantId::ThumbAndPouch => "thumb_and_pouch",
            VariantId::FortyThieves => "forty_thieves",
            VariantId::Streets => "streets",
            VariantId::Yukon => "yukon",
            VariantId::Russian => "russian",
            VariantId::Alaska => "alaska",
            VariantId::Moosehide => "moosehide",
            VariantId::AustralianPatience => "australian_patience",
            VariantId::Canberra => "canberra",
            VariantId::Spider => "spider",
            VariantId::SpiderTwoSuit => "spider_two_suit",
            VariantId::SpiderOneSuit => "spider_one_suit",
            VariantId::Spiderette => "spiderette",
            VariantId::Golf => "golf",
            VariantId::BlackHole => "black_hole",
            VariantId::AcesUp => "aces_up",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            VariantId::KlondikeTurnOne => "Klondike (Turn One)",
            VariantId::KlondikeTurnThree => "Klondike (Turn Three)",
            VariantId::Gargantua => "Gargantua",
            VariantId::ClassicWestcliff => "Classic Westcliff",
            VariantId::AmericanWestcliff => "American Westcliff",
            VariantId::Easthaven => "Easthaven",
            VariantId::ThumbAndPouch => "Thumb and Pouch",
            VariantId::FortyThieves => "Forty Thieves",
            VariantId::Streets => "Streets",
            VariantId::Yukon => "Yukon",
            VariantId::Russian => "Russian",
            VariantId::Alaska => "Alaska",
            VariantId::Moosehide => "Moosehide",
            VariantId::AustralianPatience => "Australian Patience",
            VariantId::Canberra => "Canberra",
            VariantId::Spider => "Spider (Four Suits)",
            VariantId::SpiderTwoSuit => "Spider (Two Suits)",
            VariantId::SpiderOneSuit => "Spider (One Suit)",
            VariantId::Spiderette => "Spiderette",
            VariantId::Golf => "Golf",
            VariantId::BlackHole => "Black Hole",
            VariantId::AcesUp => "Aces Up",
        }
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            VariantId::KlondikeTurnOne
            | VariantId::KlondikeTurnThree
            | VariantId::Gargantua
            | VariantId::ClassicWestcliff
            | VariantId::AmericanWestcliff
            | VariantId::Easthaven
            | VariantId::ThumbAndPouch
            | VariantId::FortyThieves
            | VariantId::Streets => Family::Klondike,
            VariantId::Yukon
            | VariantId::Russian
            | VariantId::Alaska
            | VariantId::Moosehide
            | VariantId::AustralianPatience
            | VariantId::Canberra => Family::Yukon,
            VariantId::Spider | VariantId::SpiderTwoSuit | VariantId::SpiderOneSuit | VariantId::Spiderette => {
                Family::Spider
            }
            VariantId::Golf | VariantId::BlackHole | VariantId::AcesUp => Family::Golf,
        }
    }

    /// Look up a variant by its stable identifier.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.id() == id)
            .ok_or_else(|| EngineError::UnknownVariant(id.to_string()))
    }

    /// Build this variant's rule descriptor.
    #[must_use]
    pub fn descriptor(self) -> GameVariant {
        match self.family() {
            Family::Klondike => klondike::descriptor(self),
            Family::Yukon => yukon::descriptor(self),
            Family::Spider => spider::descriptor(self),
            Family::Golf => golf::descriptor(self),
        }
    }
}

impl FromStr for VariantId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
