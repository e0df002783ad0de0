//! Generate command

use std::path::Path;
use tracing::info;
use whisker_render::GeneratorConfig;

use crate::{CanvasArgs, OutputFormat};

pub fn run(
    config: GeneratorConfig,
    canvas: &CanvasArgs,
    seed: &str,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = super::generator(config, canvas)?;
    let cat = generator.generate(seed);

    info!(
        "Generated {} ({} {} cat, {} eyes)",
        cat.id, cat.attributes.color, cat.attributes.fur_pattern, cat.attributes.eye_shape
    );

    super::emit(&cat, output, format)
}
