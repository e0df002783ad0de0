//! Cat generator facade
//!
//! Ties attribute selection and compositing together. Each call owns its own
//! [`SeededRandom`], so one generator can serve any number of threads.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};
use whisker_core::{
    AttributeSelector, CatAttributes, Seed, SeededRandom, TraitCatalog, TraitRarities,
};
use whisker_svg::{AssetLibrary, CanvasMode};

use crate::accessory::HEAD_OR_NECK_ACCESSORIES;
use crate::compositor::CatCompositor;
use crate::config::GeneratorConfig;
use crate::error::Result;

/// Regenerations tried by the constrained variants unless told otherwise
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Characters of the seed kept in a cat id
const ID_SEED_PREFIX: usize = 8;

/// Length of generated random seeds
const RANDOM_SEED_LEN: usize = 13;

/// One generated avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCat {
    /// `cat_<seed prefix>_<unix millis>`; not part of the deterministic output
    pub id: String,
    pub seed: Seed,
    pub attributes: CatAttributes,
    #[serde(rename = "svgData")]
    pub svg: String,
    pub traits: TraitRarities,
}

/// Outcome of a constrained generation
#[derive(Debug, Clone)]
pub struct Constrained {
    /// Last cat generated, whether or not it satisfied the predicate
    pub cat: GeneratedCat,
    pub satisfied: bool,
    /// Regenerations after the first try
    pub attempts: u32,
}

/// Deterministic cat generator
pub struct CatGenerator {
    config: GeneratorConfig,
    selector: AttributeSelector,
    assets: Cow<'static, AssetLibrary>,
}

impl CatGenerator {
    /// Build a generator, validating trait overrides and loading extra assets
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let catalog = TraitCatalog::with_overrides(&config.traits)?;
        let assets = AssetLibrary::embedded_with_dir(config.asset_dir.as_deref())?;

        Ok(Self {
            config,
            selector: AttributeSelector::new(catalog),
            assets,
        })
    }

    /// Generator with the default config
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
            selector: AttributeSelector::default(),
            assets: Cow::Borrowed(AssetLibrary::embedded()),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    /// Generate the cat for a seed
    pub fn generate(&self, seed: impl Into<Seed>) -> GeneratedCat {
        self.render(seed.into(), self.mode(), None)
    }

    /// Same cat as [`generate`](Self::generate), with a scalable root element
    pub fn generate_responsive(&self, seed: impl Into<Seed>) -> GeneratedCat {
        self.render(seed.into(), CanvasMode::Responsive, None)
    }

    /// Generate one cat per seed, in order
    pub fn generate_many<S: Into<Seed>>(
        &self,
        seeds: impl IntoIterator<Item = S>,
    ) -> Vec<GeneratedCat> {
        seeds.into_iter().map(|seed| self.generate(seed)).collect()
    }

    /// Generate a cat from a fresh random seed
    pub fn generate_random(&self) -> GeneratedCat {
        self.generate(random_seed())
    }

    /// Regenerate until `predicate` holds or `max_attempts` is spent
    ///
    /// The first try uses the seed as given; retry `n` uses
    /// `"<seed>-attempt-<n>"`. Never fails: when nothing matches, the last
    /// cat is returned with `satisfied == false`.
    pub fn generate_with_constraint<F>(
        &self,
        seed: impl Into<Seed>,
        predicate: F,
        max_attempts: u32,
    ) -> Constrained
    where
        F: Fn(&GeneratedCat) -> bool,
    {
        let seed = seed.into();
        let mut cat = self.generate(seed.clone());
        let mut attempts = 0;

        while !predicate(&cat) && attempts < max_attempts {
            attempts += 1;
            tracing::debug!("Seed '{}' rejected, attempt {}", seed, attempts);
            cat = self.generate(seed.with_suffix(format!("-attempt-{attempts}")));
        }

        Constrained {
            satisfied: predicate(&cat),
            cat,
            attempts,
        }
    }

    /// Regenerate until the cat wears one of `allowed`
    ///
    /// Defaults to [`HEAD_OR_NECK_ACCESSORIES`].
    pub fn generate_with_accessory(
        &self,
        seed: impl Into<Seed>,
        allowed: Option<&[&str]>,
    ) -> Constrained {
        let allowed = allowed.unwrap_or(HEAD_OR_NECK_ACCESSORIES);
        self.generate_with_constraint(
            seed,
            |cat| allowed.contains(&cat.attributes.accessory.as_str()),
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    /// Generate a cat and dress it in a given accessory
    ///
    /// Every other attribute and the layout jitter match what the seed
    /// would produce on its own.
    pub fn generate_with_fixed_accessory(
        &self,
        seed: impl Into<Seed>,
        accessory: &str,
    ) -> GeneratedCat {
        self.render(seed.into(), self.mode(), Some(accessory))
    }

    fn mode(&self) -> CanvasMode {
        if self.config.responsive {
            CanvasMode::Responsive
        } else {
            CanvasMode::Fixed
        }
    }

    fn render(&self, seed: Seed, mode: CanvasMode, accessory: Option<&str>) -> GeneratedCat {
        let mut rng = SeededRandom::new(seed.clone());
        let mut attributes = self.selector.select(&mut rng);
        if let Some(accessory) = accessory {
            attributes.accessory = accessory.to_string();
        }
        tracing::debug!("Seed '{}' resolved to {:?}", seed, attributes);

        let compositor = CatCompositor::new(&self.config, &self.assets);
        let svg = compositor.compose(&attributes, &mut rng, mode);

        GeneratedCat {
            id: cat_id(&seed),
            traits: TraitRarities::of(&attributes),
            seed,
            attributes,
            svg,
        }
    }
}

impl Default for CatGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn cat_id(seed: &Seed) -> String {
    let prefix: String = seed.to_string().chars().take(ID_SEED_PREFIX).collect();
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("cat_{prefix}_{millis}")
}

/// Fresh base-36 seed of fixed length
pub fn random_seed() -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut value = rand::random::<u64>();
    let mut seed = vec![b'0'; RANDOM_SEED_LEN];
    for slot in seed.iter_mut().rev() {
        *slot = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&seed).into_owned()
}
