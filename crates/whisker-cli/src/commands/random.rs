//! Random command

use std::path::Path;
use tracing::info;
use whisker_render::GeneratorConfig;

use crate::{CanvasArgs, OutputFormat};

pub fn run(
    config: GeneratorConfig,
    canvas: &CanvasArgs,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = super::generator(config, canvas)?;
    let cat = generator.generate_random();

    // The seed is the only way to draw this cat again
    info!("Random seed: {}", cat.seed);

    super::emit(&cat, output, format)
}
