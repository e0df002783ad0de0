//! Rarity-weighted attribute selection
//!
//! Attributes are resolved in a fixed order on one shared generator: color,
//! fur pattern, eye shape, mouth, accessory, then mutations. Each trait draw
//! rolls once for a tier, walking tiers from mythical down to common, and
//! then picks uniformly inside the first non-empty tier the roll reaches.

use serde::{Deserialize, Serialize};

use crate::random::SeededRandom;
use crate::traits::{Rarity, TraitCatalog, TraitCategory};

/// Probability that a cat carries any mutation at all
pub const MUTATION_CHANCE: f64 = 0.15;

/// Resolved attributes of one cat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatAttributes {
    pub color: String,
    pub fur_pattern: String,
    pub eye_shape: String,
    pub mouth: String,
    pub accessory: String,
    /// Ordered, without duplicates
    pub mutation_flags: Vec<String>,
}

impl CatAttributes {
    /// Value of a single-valued category
    ///
    /// Returns `None` for [`TraitCategory::Mutations`].
    pub fn get(&self, category: TraitCategory) -> Option<&str> {
        match category {
            TraitCategory::Colors => Some(&self.color),
            TraitCategory::FurPatterns => Some(&self.fur_pattern),
            TraitCategory::EyeShapes => Some(&self.eye_shape),
            TraitCategory::Mouths => Some(&self.mouth),
            TraitCategory::Accessories => Some(&self.accessory),
            TraitCategory::Mutations => None,
        }
    }

    /// Whether a mutation flag is set
    pub fn has_mutation(&self, flag: &str) -> bool {
        self.mutation_flags.iter().any(|f| f == flag)
    }
}

/// Rarity tier of every attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRarities {
    pub color: Rarity,
    pub fur_pattern: Rarity,
    pub eye_shape: Rarity,
    pub mouth: Rarity,
    pub accessory: Rarity,
    pub mutation_flags: Vec<Rarity>,
}

impl TraitRarities {
    /// Look up the tier of each attribute
    pub fn of(attributes: &CatAttributes) -> Self {
        Self {
            color: TraitCategory::Colors.rarity_of(&attributes.color),
            fur_pattern: TraitCategory::FurPatterns.rarity_of(&attributes.fur_pattern),
            eye_shape: TraitCategory::EyeShapes.rarity_of(&attributes.eye_shape),
            mouth: TraitCategory::Mouths.rarity_of(&attributes.mouth),
            accessory: TraitCategory::Accessories.rarity_of(&attributes.accessory),
            mutation_flags: attributes
                .mutation_flags
                .iter()
                .map(|flag| TraitCategory::Mutations.rarity_of(flag))
                .collect(),
        }
    }

    /// Rarest tier among all attributes
    pub fn highest(&self) -> Rarity {
        [
            self.color,
            self.fur_pattern,
            self.eye_shape,
            self.mouth,
            self.accessory,
        ]
        .into_iter()
        .chain(self.mutation_flags.iter().copied())
        .max()
        .unwrap_or(Rarity::Common)
    }
}

/// Turns a generator stream into [`CatAttributes`]
#[derive(Debug, Clone, Default)]
pub struct AttributeSelector {
    catalog: TraitCatalog,
}

impl AttributeSelector {
    /// Create a selector over a catalog
    pub fn new(catalog: TraitCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog used for fallback picks
    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    /// Pick one value of a category
    ///
    /// Consumes one draw for the tier roll and one for the pick.
    pub fn select_trait(&self, rng: &mut SeededRandom, category: TraitCategory) -> String {
        let roll = rng.next_f64();
        let tiers = category.tiers();

        let mut cumulative = 0.0;
        for rarity in Rarity::RAREST_FIRST {
            cumulative += rarity.weight();
            if roll <= cumulative {
                let values = tiers.get(rarity);
                if !values.is_empty() {
                    return rng.choose(values).to_string();
                }
            }
        }

        rng.choose(self.catalog.defaults(category)).clone()
    }

    /// Roll the mutation flags
    ///
    /// When the mutation chance fires, one to two rarity picks are made and
    /// repeated values are dropped, so the result can be shorter than the
    /// number of picks.
    pub fn select_mutations(&self, rng: &mut SeededRandom) -> Vec<String> {
        let mut flags: Vec<String> = Vec::new();
        if !rng.chance(MUTATION_CHANCE) {
            return flags;
        }

        let count = rng.range(1, 3);
        for _ in 0..count {
            let flag = self.select_trait(rng, TraitCategory::Mutations);
            if !flags.contains(&flag) {
                flags.push(flag);
            }
        }
        flags
    }

    /// Resolve every attribute in order
    pub fn select(&self, rng: &mut SeededRandom) -> CatAttributes {
        CatAttributes {
            color: self.select_trait(rng, TraitCategory::Colors),
            fur_pattern: self.select_trait(rng, TraitCategory::FurPatterns),
            eye_shape: self.select_trait(rng, TraitCategory::EyeShapes),
            mouth: self.select_trait(rng, TraitCategory::Mouths),
            accessory: self.select_trait(rng, TraitCategory::Accessories),
            mutation_flags: self.select_mutations(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitOverrides;

    fn select(seed: &str) -> (CatAttributes, f64) {
        let mut rng = SeededRandom::new(seed);
        let attributes = AttributeSelector::default().select(&mut rng);
        (attributes, rng.next_f64())
    }

    fn attrs(
        color: &str,
        fur: &str,
        eyes: &str,
        mouth: &str,
        accessory: &str,
        mutations: &[&str],
    ) -> CatAttributes {
        CatAttributes {
            color: color.into(),
            fur_pattern: fur.into(),
            eye_shape: eyes.into(),
            mouth: mouth.into(),
            accessory: accessory.into(),
            mutation_flags: mutations.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_known_seeds() {
        let (cat, next) = select("test-seed");
        assert_eq!(cat, attrs("#45B7D1", "classic", "round", "frown", "none", &[]));
        assert_eq!(next, 0.12335390946502058);

        let (cat, next) = select("consistent-seed");
        assert_eq!(cat, attrs("#4ECDC4", "van", "curious", "tongue", "bandana", &[]));
        assert_eq!(next, 0.36049382716049383);

        let (cat, _) = select("hello-world");
        assert_eq!(
            cat,
            attrs("#87CEEB", "colorpoint", "upturned", "whiskers", "hat", &[])
        );
    }

    #[test]
    fn test_neighbouring_seeds_differ() {
        let (a, _) = select("seed1");
        let (b, _) = select("seed2");
        assert_eq!(a, attrs("#FFA07A", "solid", "wide", "cute", "bandana", &[]));
        assert_eq!(b, attrs("#FFB6C1", "solid", "wide", "smile", "bandana", &[]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_mutations() {
        let (cat, next) = select("cat-38");
        assert_eq!(
            cat,
            attrs(
                "#87CEEB",
                "calico",
                "round",
                "open",
                "scarf",
                &["color-changing", "extra-fluffy"]
            )
        );
        assert_eq!(next, 0.4801997599451303);

        let (cat, next) = select("cat-41");
        assert_eq!(
            cat,
            attrs("#87CEEB", "ticked", "bright", "smile", "crown", &["glowing-eyes"])
        );
        assert_eq!(next, 0.42756772976680385);

        let (cat, next) = select("cat-5");
        assert_eq!(cat.mutation_flags, ["extra-whiskers", "crystal-fur"]);
        assert_eq!(next, 0.5841863854595336);

        let (cat, next) = select("cat-0");
        assert_eq!(cat.mutation_flags, ["size-variant"]);
        assert_eq!(next, 0.17746913580246915);

        let (cat, _) = select("cat-48");
        assert_eq!(cat.fur_pattern, "stripes");
        assert_eq!(cat.accessory, "none");
        assert_eq!(cat.mutation_flags, ["fire-pattern"]);
    }

    #[test]
    fn test_duplicate_mutations_dropped() {
        // Both seeds roll two picks that land on the same flag
        let (cat, _) = select("cat-56");
        assert_eq!(
            cat,
            attrs("#4ECDC4", "solid", "mysterious", "smile", "bow-tie", &["extra-fluffy"])
        );

        let (cat, _) = select("cat-370");
        assert_eq!(cat.accessory, "scarf");
        assert_eq!(cat.mutation_flags, ["extra-fluffy"]);
    }

    #[test]
    fn test_empty_common_tier_falls_back() {
        let selector = AttributeSelector::default();

        let mut rng = SeededRandom::from_state(309_550_765);
        assert_eq!(selector.select_trait(&mut rng, TraitCategory::Mutations), "glowing-eyes");
        assert_eq!(rng.next_f64(), 0.28247599451303157);

        let mut rng = SeededRandom::from_state(309_550_764);
        assert_eq!(selector.select_trait(&mut rng, TraitCategory::Mutations), "crystal-fur");
        assert_eq!(rng.next_f64(), 0.4869470164609053);
    }

    #[test]
    fn test_fallback_uses_overridden_list() {
        let overrides = TraitOverrides::default()
            .with(TraitCategory::Mutations, vec!["moon-whiskers".into()]);
        let catalog = TraitCatalog::with_overrides(&overrides).unwrap();
        let selector = AttributeSelector::new(catalog);

        let mut rng = SeededRandom::from_state(309_550_765);
        assert_eq!(
            selector.select_trait(&mut rng, TraitCategory::Mutations),
            "moon-whiskers"
        );
    }

    #[test]
    fn test_selection_stays_in_catalog() {
        let selector = AttributeSelector::default();
        for i in 0..300 {
            let mut rng = SeededRandom::new(format!("sweep-{i}"));
            for category in TraitCategory::ALL {
                let value = selector.select_trait(&mut rng, category);
                assert!(
                    selector.catalog().contains(category, &value),
                    "{category}: {value}"
                );
            }
        }
    }

    #[test]
    fn test_mutation_flags_unique() {
        let selector = AttributeSelector::default();
        for i in 0..500 {
            let mut rng = SeededRandom::new(format!("cat-{i}"));
            let flags = selector.select(&mut rng).mutation_flags;
            assert!(flags.len() <= 2);
            if flags.len() == 2 {
                assert_ne!(flags[0], flags[1]);
            }
        }
    }

    #[test]
    fn test_rarities() {
        let cat = attrs(
            "#8B4513",
            "harlequin",
            "round",
            "mystery-mouth",
            "ribbon",
            &["sparkles", "extra-fluffy"],
        );
        let rarities = TraitRarities::of(&cat);
        assert_eq!(rarities.color, Rarity::Legendary);
        assert_eq!(rarities.fur_pattern, Rarity::Mythical);
        assert_eq!(rarities.eye_shape, Rarity::Common);
        assert_eq!(rarities.mouth, Rarity::Common);
        assert_eq!(rarities.mutation_flags, [Rarity::Mythical, Rarity::Uncommon]);
        assert_eq!(rarities.highest(), Rarity::Mythical);
    }

    #[test]
    fn test_attributes_json_keys() {
        let (cat, _) = select("test-seed");
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["furPattern"], "classic");
        assert_eq!(json["mutationFlags"], serde_json::json!([]));
        assert_eq!(cat.get(TraitCategory::EyeShapes), Some("round"));
        assert_eq!(cat.get(TraitCategory::Mutations), None);
    }
}
