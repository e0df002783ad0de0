//! Asset inspection commands

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use whisker_render::{Accessory, GeneratorConfig};
use whisker_svg::{AssetLibrary, SvgBuilder};

/// Canvas size used by `assets show`
const PREVIEW_SIZE: u32 = 128;

/// Embedded assets plus the configured asset directory
fn library(
    config: &GeneratorConfig,
) -> Result<Cow<'static, AssetLibrary>, Box<dyn std::error::Error>> {
    Ok(AssetLibrary::embedded_with_dir(config.asset_dir.as_deref())?)
}

pub fn list(config: GeneratorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let library = library(&config)?;

    if library.is_empty() {
        println!("No assets found.");
        return Ok(());
    }

    println!("Found {} asset(s):", library.len());
    for name in library.names() {
        if let Some(asset) = library.get(name) {
            println!("  - {:<20} viewBox {}", name, asset.view_box);
        }
    }

    Ok(())
}

/// Names of accessory assets the library lacks
fn missing(library: &AssetLibrary) -> Vec<&'static str> {
    Accessory::ALL
        .iter()
        .filter_map(|accessory| accessory.asset())
        .map(|(name, _)| name)
        .filter(|name| !library.contains(name))
        .collect()
}

pub fn check(config: GeneratorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let library = library(&config)?;
    let missing = missing(&library);

    for (name, _) in Accessory::ALL.iter().filter_map(|accessory| accessory.asset()) {
        if missing.contains(&name) {
            println!("✗ {}", name);
        } else {
            println!("✓ {}", name);
        }
    }

    println!();
    if missing.is_empty() {
        println!("All accessory assets present");
        Ok(())
    } else {
        Err(format!("{} accessory asset(s) missing: {}", missing.len(), missing.join(", ")).into())
    }
}

/// Standalone document showing one asset
fn preview(library: &AssetLibrary, name: &str) -> Result<String, Box<dyn std::error::Error>> {
    library.require(name)?;

    let center = f64::from(PREVIEW_SIZE) / 2.0;
    let mut svg = SvgBuilder::new(PREVIEW_SIZE, PREVIEW_SIZE, library);
    svg.embed_asset(name, center, center, f64::from(PREVIEW_SIZE), 1.0);
    Ok(svg.build())
}

pub fn show(
    config: GeneratorConfig,
    name: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let library = library(&config)?;
    let svg = preview(&library, name)?;

    match output {
        Some(path) => {
            fs::write(path, &svg)?;
            println!("Asset written to {}", path.display());
        }
        None => {
            println!("{}", svg);
        }
    }

    Ok(())
}
