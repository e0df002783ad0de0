//! Trait catalog and rarity tiers
//!
//! Every trait category has a flat list of default values and a tiered list
//! keyed by rarity. Tier lists are fixed; the flat lists can be replaced per
//! category through [`TraitOverrides`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Rarity tier of a trait value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythical,
}

impl Rarity {
    /// Order in which tiers are evaluated during selection
    pub const RAREST_FIRST: [Rarity; 5] = [
        Rarity::Mythical,
        Rarity::Legendary,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Order in which tiers are searched for rarity lookups
    pub const COMMONEST_FIRST: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Probability mass of this tier
    pub fn weight(self) -> f64 {
        match self {
            Self::Common => 0.6,
            Self::Uncommon => 0.25,
            Self::Rare => 0.1,
            Self::Legendary => 0.04,
            Self::Mythical => 0.01,
        }
    }

    /// Lowercase tier name
    pub fn name(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
            Self::Mythical => "mythical",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An axis of visual variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitCategory {
    Colors,
    FurPatterns,
    EyeShapes,
    Mouths,
    Accessories,
    Mutations,
}

impl TraitCategory {
    /// All categories in resolution order
    pub const ALL: [TraitCategory; 6] = [
        TraitCategory::Colors,
        TraitCategory::FurPatterns,
        TraitCategory::EyeShapes,
        TraitCategory::Mouths,
        TraitCategory::Accessories,
        TraitCategory::Mutations,
    ];

    /// Catalog key of the category
    pub fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::FurPatterns => "furPatterns",
            Self::EyeShapes => "eyeShapes",
            Self::Mouths => "mouths",
            Self::Accessories => "accessories",
            Self::Mutations => "mutations",
        }
    }

    /// Built-in flat list of values
    pub fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::Colors => DEFAULT_COLORS,
            Self::FurPatterns => DEFAULT_FUR_PATTERNS,
            Self::EyeShapes => DEFAULT_EYE_SHAPES,
            Self::Mouths => DEFAULT_MOUTHS,
            Self::Accessories => DEFAULT_ACCESSORIES,
            Self::Mutations => DEFAULT_MUTATIONS,
        }
    }

    /// Tiered values of the category
    pub fn tiers(self) -> &'static TierTable {
        match self {
            Self::Colors => &COLOR_TIERS,
            Self::FurPatterns => &FUR_PATTERN_TIERS,
            Self::EyeShapes => &EYE_SHAPE_TIERS,
            Self::Mouths => &MOUTH_TIERS,
            Self::Accessories => &ACCESSORY_TIERS,
            Self::Mutations => &MUTATION_TIERS,
        }
    }

    /// Rarity of a value; values outside every tier count as common
    pub fn rarity_of(self, value: &str) -> Rarity {
        let tiers = self.tiers();
        Rarity::COMMONEST_FIRST
            .into_iter()
            .find(|rarity| tiers.get(*rarity).contains(&value))
            .unwrap_or(Rarity::Common)
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values of one category grouped by rarity tier
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    pub common: &'static [&'static str],
    pub uncommon: &'static [&'static str],
    pub rare: &'static [&'static str],
    pub legendary: &'static [&'static str],
    pub mythical: &'static [&'static str],
}

impl TierTable {
    /// Values of a tier (possibly empty)
    pub fn get(&self, rarity: Rarity) -> &'static [&'static str] {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
            Rarity::Legendary => self.legendary,
            Rarity::Mythical => self.mythical,
        }
    }

    /// Whether any tier holds the value
    pub fn contains(&self, value: &str) -> bool {
        Rarity::COMMONEST_FIRST
            .into_iter()
            .any(|rarity| self.get(rarity).contains(&value))
    }
}

pub const DEFAULT_COLORS: &[&str] = &[
    // Classic coats
    "#D2691E", "#8B4513", "#2F4F4F", "#000000", "#FFFFFF", "#F5DEB3", "#DEB887", "#C0C0C0",
    "#778899", "#A0522D",
    // Pastels
    "#FFB6C1", "#87CEEB", "#98FB98", "#DDA0DD", "#F0E68C", "#FFA07A", "#20B2AA", "#FFE4E1",
    "#F0F8FF", "#F5F5DC", "#E6E6FA", "#FFF8DC", "#FFE4B5", "#FFEFD5", "#F0FFFF", "#F5FFFA",
];

pub const DEFAULT_FUR_PATTERNS: &[&str] = &[
    "solid",
    "stripes",
    "spots",
    "calico",
    "tuxedo",
    "tabby",
    "tortoiseshell",
    "bicolor",
    "colorpoint",
    "mackerel",
    "classic",
    "ticked",
    "rosette",
    "marble",
    "van",
    "harlequin",
    "gradient",
    "ombre",
    "patches",
    "swirl",
];

pub const DEFAULT_EYE_SHAPES: &[&str] = &[
    "round",
    "almond",
    "oval",
    "wide",
    "narrow",
    "upturned",
    "downturned",
    "sleepy",
    "alert",
    "mysterious",
    "bright",
    "gentle",
    "fierce",
    "curious",
    "wise",
    "playful",
    "sparkly",
    "dreamy",
    "mischievous",
    "loving",
];

pub const DEFAULT_MOUTHS: &[&str] = &[
    "smile",
    "frown",
    "neutral",
    "open",
    "tongue",
    "whiskers",
    "small",
    "wide",
    "cute",
    "serious",
    "playful",
    "surprised",
    "sleepy",
    "content",
    "mischievous",
    "grumpy",
    "blep",
    "yawn",
    "meow",
    "purr",
];

pub const DEFAULT_ACCESSORIES: &[&str] = &[
    "none",
    "bow-tie",
    "hat",
    "glasses",
    "bandana",
    "scarf",
    "flower",
    "crown",
    "monocle",
    "earrings",
    "necklace",
    "cape",
    "bowtie",
    "bell",
    "ribbon",
    "sunglasses",
    "party-hat",
    "tiara",
    "mask",
    "headband",
    "bow",
    "charm",
    "brooch",
    "1st-place-medal",
    "adhesive-bandage",
];

pub const DEFAULT_MUTATIONS: &[&str] = &[
    "extra-fluffy",
    "rainbow-fur",
    "glowing-eyes",
    "double-tail",
    "extra-whiskers",
    "crystal-fur",
    "fire-pattern",
    "ice-pattern",
    "galaxy-fur",
    "metallic-sheen",
    "transparency",
    "size-variant",
    "pattern-shift",
    "color-changing",
    "sparkles",
    "shadow-clone",
];

pub static COLOR_TIERS: TierTable = TierTable {
    common: &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD"],
    uncommon: &["#FFA07A", "#87CEEB", "#F0E68C", "#FFB6C1"],
    rare: &["#D2691E", "#708090", "#000000", "#FFFFFF"],
    legendary: &["#8B4513", "#FF69B4"],
    mythical: &[],
};

pub static FUR_PATTERN_TIERS: TierTable = TierTable {
    common: &["solid", "stripes", "spots", "tabby"],
    uncommon: &["calico", "tuxedo", "tortoiseshell", "bicolor"],
    rare: &["colorpoint", "mackerel", "classic", "ticked"],
    legendary: &["rosette", "marble", "van"],
    mythical: &["harlequin"],
};

pub static EYE_SHAPE_TIERS: TierTable = TierTable {
    common: &["round", "almond", "oval", "wide"],
    uncommon: &["narrow", "upturned", "downturned", "sleepy"],
    rare: &["alert", "mysterious", "bright", "gentle"],
    legendary: &["fierce", "curious", "wise"],
    mythical: &["playful"],
};

pub static MOUTH_TIERS: TierTable = TierTable {
    common: &["smile", "frown", "neutral", "open"],
    uncommon: &["tongue", "whiskers", "small", "wide"],
    rare: &["cute", "serious", "playful", "surprised"],
    legendary: &["sleepy", "content", "mischievous"],
    mythical: &["grumpy"],
};

pub static ACCESSORY_TIERS: TierTable = TierTable {
    common: &["none", "bandana"],
    uncommon: &["bow-tie", "hat", "glasses", "scarf"],
    rare: &["flower", "crown", "monocle", "earrings"],
    legendary: &["necklace", "cape", "bowtie", "bell"],
    mythical: &["ribbon"],
};

pub static MUTATION_TIERS: TierTable = TierTable {
    common: &[],
    uncommon: &["extra-fluffy", "extra-whiskers"],
    rare: &["rainbow-fur", "glowing-eyes", "double-tail"],
    legendary: &["crystal-fur", "fire-pattern", "ice-pattern", "galaxy-fur"],
    mythical: &[
        "metallic-sheen",
        "transparency",
        "size-variant",
        "pattern-shift",
        "color-changing",
        "sparkles",
        "shadow-clone",
    ],
};

/// Replacement flat lists, one optional list per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraitOverrides {
    pub colors: Option<Vec<String>>,
    pub fur_patterns: Option<Vec<String>>,
    pub eye_shapes: Option<Vec<String>>,
    pub mouths: Option<Vec<String>>,
    pub accessories: Option<Vec<String>>,
    pub mutations: Option<Vec<String>>,
}

impl TraitOverrides {
    /// Override for one category, if any
    pub fn get(&self, category: TraitCategory) -> Option<&[String]> {
        let list = match category {
            TraitCategory::Colors => &self.colors,
            TraitCategory::FurPatterns => &self.fur_patterns,
            TraitCategory::EyeShapes => &self.eye_shapes,
            TraitCategory::Mouths => &self.mouths,
            TraitCategory::Accessories => &self.accessories,
            TraitCategory::Mutations => &self.mutations,
        };
        list.as_deref()
    }

    /// Set the override for one category
    pub fn with(mut self, category: TraitCategory, values: Vec<String>) -> Self {
        let slot = match category {
            TraitCategory::Colors => &mut self.colors,
            TraitCategory::FurPatterns => &mut self.fur_patterns,
            TraitCategory::EyeShapes => &mut self.eye_shapes,
            TraitCategory::Mouths => &mut self.mouths,
            TraitCategory::Accessories => &mut self.accessories,
            TraitCategory::Mutations => &mut self.mutations,
        };
        *slot = Some(values);
        self
    }
}

/// Flat fallback lists used once rarity tiers yield nothing
///
/// Every list is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitCatalog {
    lists: [Vec<String>; 6],
}

impl TraitCatalog {
    /// Catalog with the built-in lists
    pub fn new() -> Self {
        Self {
            lists: TraitCategory::ALL.map(|category| {
                category.defaults().iter().map(|s| s.to_string()).collect()
            }),
        }
    }

    /// Catalog with some lists replaced
    pub fn with_overrides(overrides: &TraitOverrides) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (slot, category) in TraitCategory::ALL.into_iter().enumerate() {
            if let Some(values) = overrides.get(category) {
                if values.is_empty() {
                    return Err(CatalogError::EmptyTraitList(category));
                }
                tracing::debug!("Overriding {} with {} values", category, values.len());
                catalog.lists[slot] = values.to_vec();
            }
        }
        Ok(catalog)
    }

    /// Flat list of one category
    pub fn defaults(&self, category: TraitCategory) -> &[String] {
        &self.lists[Self::slot(category)]
    }

    /// Whether a value can ever be selected for the category
    pub fn contains(&self, category: TraitCategory, value: &str) -> bool {
        category.tiers().contains(value) || self.defaults(category).iter().any(|v| v == value)
    }

    fn slot(category: TraitCategory) -> usize {
        match category {
            TraitCategory::Colors => 0,
            TraitCategory::FurPatterns => 1,
            TraitCategory::EyeShapes => 2,
            TraitCategory::Mouths => 3,
            TraitCategory::Accessories => 4,
            TraitCategory::Mutations => 5,
        }
    }
}

impl Default for TraitCatalog {
    fn default() -> Self {
        Self::new()
    }
}
