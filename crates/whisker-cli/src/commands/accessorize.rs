//! Accessorize command

use std::path::Path;
use tracing::{info, warn};
use whisker_render::GeneratorConfig;

use crate::{CanvasArgs, OutputFormat};

/// What the cat should wear
pub struct Request<'a> {
    pub seed: &'a str,
    /// Put this accessory on the seed's own cat
    pub accessory: Option<&'a str>,
    /// Retry until one of these turns up; empty means head and neck wear
    pub allow: &'a [String],
    pub max_attempts: u32,
}

pub fn run(
    config: GeneratorConfig,
    canvas: &CanvasArgs,
    request: Request<'_>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = super::generator(config, canvas)?;

    let cat = match request.accessory {
        Some(accessory) => generator.generate_with_fixed_accessory(request.seed, accessory),
        None => {
            let allowed: Vec<&str> = if request.allow.is_empty() {
                whisker_render::HEAD_OR_NECK_ACCESSORIES.to_vec()
            } else {
                request.allow.iter().map(String::as_str).collect()
            };

            let result = generator.generate_with_constraint(
                request.seed,
                |cat| allowed.contains(&cat.attributes.accessory.as_str()),
                request.max_attempts,
            );

            if result.satisfied {
                info!(
                    "Found {} after {} attempt(s) (seed '{}')",
                    result.cat.attributes.accessory, result.attempts, result.cat.seed
                );
            } else {
                warn!(
                    "No allowed accessory after {} attempts, keeping {}",
                    result.attempts, result.cat.attributes.accessory
                );
            }
            result.cat
        }
    };

    super::emit(&cat, output, format)
}
