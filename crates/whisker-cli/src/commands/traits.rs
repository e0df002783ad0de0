//! Traits command

use whisker_core::{Rarity, TraitCatalog, TraitCategory};
use whisker_render::GeneratorConfig;

use crate::CategoryArg;

impl From<CategoryArg> for TraitCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Colors => Self::Colors,
            CategoryArg::FurPatterns => Self::FurPatterns,
            CategoryArg::EyeShapes => Self::EyeShapes,
            CategoryArg::Mouths => Self::Mouths,
            CategoryArg::Accessories => Self::Accessories,
            CategoryArg::Mutations => Self::Mutations,
        }
    }
}

pub fn run(
    config: GeneratorConfig,
    category: Option<CategoryArg>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = TraitCatalog::with_overrides(&config.traits)?;

    let categories: Vec<TraitCategory> = match category {
        Some(category) => vec![category.into()],
        None => TraitCategory::ALL.to_vec(),
    };

    for (i, category) in categories.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", describe(&catalog, category));
    }

    Ok(())
}

/// Tier and fallback listing for one category
fn describe(catalog: &TraitCatalog, category: TraitCategory) -> String {
    let mut out = format!("{}\n", category.key());
    out.push_str(&"=".repeat(category.key().len()));
    out.push('\n');

    let tiers = category.tiers();
    for rarity in Rarity::RAREST_FIRST {
        let values = tiers.get(rarity);
        let listed = if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        };
        out.push_str(&format!(
            "  {:<10} {:>5}  {}\n",
            rarity.name(),
            format!("{:.0}%", rarity.weight() * 100.0),
            listed
        ));
    }

    out.push_str(&format!(
        "  {:<10} {:>5}  {}\n",
        "fallback",
        "",
        catalog.defaults(category).join(", ")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use whisker_core::TraitOverrides;

    #[test]
    fn test_describe_lists_every_tier() {
        let text = describe(&TraitCatalog::new(), TraitCategory::Accessories);

        assert!(text.starts_with("accessories\n===========\n"));
        assert!(text.contains("mythical      1%  ribbon"));
        assert!(text.contains("common       60%  none, bandana"));
        assert!(text.contains("1st-place-medal"));
    }

    #[test]
    fn test_describe_empty_tier() {
        let text = describe(&TraitCatalog::new(), TraitCategory::Mutations);
        assert!(text.contains("common       60%  -"));
    }

    #[test]
    fn test_describe_uses_overrides() {
        let overrides = TraitOverrides::default()
            .with(TraitCategory::Colors, vec!["#123456".to_string()]);
        let catalog = TraitCatalog::with_overrides(&overrides).unwrap();

        let text = describe(&catalog, TraitCategory::Colors);
        assert!(text.contains("fallback          #123456\n"));
    }
}
