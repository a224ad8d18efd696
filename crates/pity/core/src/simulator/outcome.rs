//! Resolved single-pull results.

/// Rarity tier of a pull.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    /// Top tier, subject to soft and hard pity.
    Rare,
    /// Middle tier, guaranteed every minor window.
    Minor,
    /// Everything else.
    Common,
}

/// What a pull actually produced.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Variant {
    /// The banner's featured rare.
    Featured,
    /// First prior limited rare (lost 50/50).
    #[strum(serialize = "prior_limited_1")]
    PriorLimited1,
    /// Second prior limited rare (lost 50/50).
    #[strum(serialize = "prior_limited_2")]
    PriorLimited2,
    /// Standard-pool rare (lost 50/50).
    Standard,
    MinorTier,
    CommonTier,
}

impl Variant {
    /// Rarity tier this variant belongs to.
    pub const fn rarity(self) -> Rarity {
        match self {
            Self::Featured | Self::PriorLimited1 | Self::PriorLimited2 | Self::Standard => {
                Rarity::Rare
            }
            Self::MinorTier => Rarity::Minor,
            Self::CommonTier => Rarity::Common,
        }
    }
}

/// A resolved pull: tier, variant, and the 50/50 result when one applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullOutcome {
    pub rarity: Rarity,
    pub variant: Variant,
    /// `None` when no 50/50 was involved (guarantees, non-rare pulls).
    pub tie_break_won: Option<bool>,
}

impl PullOutcome {
    /// Won 50/50: featured rare.
    pub const fn featured_win() -> Self {
        Self {
            rarity: Rarity::Rare,
            variant: Variant::Featured,
            tie_break_won: Some(true),
        }
    }

    /// Lost 50/50 resolved to an off-banner rare.
    pub const fn tie_break_loss(variant: Variant) -> Self {
        Self {
            rarity: Rarity::Rare,
            variant,
            tie_break_won: Some(false),
        }
    }

    /// Featured rare granted by the banner guarantee, no 50/50 rolled.
    pub const fn guaranteed_featured() -> Self {
        Self {
            rarity: Rarity::Rare,
            variant: Variant::Featured,
            tie_break_won: None,
        }
    }

    pub const fn minor() -> Self {
        Self {
            rarity: Rarity::Minor,
            variant: Variant::MinorTier,
            tie_break_won: None,
        }
    }

    pub const fn common() -> Self {
        Self {
            rarity: Rarity::Common,
            variant: Variant::CommonTier,
            tie_break_won: None,
        }
    }

    pub const fn is_rare(&self) -> bool {
        matches!(self.rarity, Rarity::Rare)
    }

    pub const fn is_minor(&self) -> bool {
        matches!(self.rarity, Rarity::Minor)
    }

    pub const fn is_featured(&self) -> bool {
        matches!(self.variant, Variant::Featured)
    }
}
