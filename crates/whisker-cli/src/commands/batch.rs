//! Batch command

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use whisker_render::GeneratorConfig;

use crate::{CanvasArgs, OutputFormat};

pub fn run(
    config: GeneratorConfig,
    canvas: &CanvasArgs,
    seeds: &[String],
    output_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = super::generator(config, canvas)?;
    fs::create_dir_all(output_dir)?;

    info!("Generating {} cats into {}", seeds.len(), output_dir.display());

    let mut taken = HashSet::new();
    for cat in generator.generate_many(seeds) {
        let path = unique_path(output_dir, &cat.seed.to_string(), format, &mut taken);
        fs::write(&path, super::render(&cat, format)?)?;
        println!("{} written to {}", cat.id, path.display());
    }

    Ok(())
}

/// Output path that no earlier seed of this batch has claimed
///
/// Seeds that sanitize to the same stem get `-2`, `-3`, ... appended.
fn unique_path(
    dir: &Path,
    seed: &str,
    format: OutputFormat,
    taken: &mut HashSet<PathBuf>,
) -> PathBuf {
    let mut path = output_path(dir, seed, format);
    let mut n = 1;
    while !taken.insert(path.clone()) {
        n += 1;
        path = output_path(dir, &format!("{seed}-{n}"), format);
    }
    if n > 1 {
        warn!("Seed '{}' clashes with an earlier file, writing {}", seed, path.display());
    }
    path
}

/// File for one seed, with anything outside `[A-Za-z0-9_-]` replaced
fn output_path(dir: &Path, seed: &str, format: OutputFormat) -> PathBuf {
    let stem: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let extension = match format {
        OutputFormat::Svg => "svg",
        OutputFormat::Json => "json",
    };
    dir.join(format!("{stem}.{extension}"))
}
