//! Subcommand implementations

pub mod accessorize;
pub mod assets;
pub mod batch;
pub mod generate;
pub mod random;
pub mod traits;

use std::fs;
use std::path::Path;
use tracing::info;
use whisker_render::{CatGenerator, GeneratedCat, GeneratorConfig};

use crate::{CanvasArgs, OutputFormat};

/// Read the config file, or fall back to defaults
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    info!("Loading config from {}", path.display());
    let json = fs::read_to_string(path)?;
    Ok(GeneratorConfig::from_json(&json)?)
}

impl CanvasArgs {
    /// Layer command-line overrides over a config
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.responsive {
            config.responsive = true;
        }
        if self.background {
            config.background = true;
        }
        if let Some(layering) = self.layering {
            config.accessory_layering = layering.into();
        }
        config
    }
}

/// Build a generator from a config plus canvas overrides
pub fn generator(
    config: GeneratorConfig,
    canvas: &CanvasArgs,
) -> Result<CatGenerator, Box<dyn std::error::Error>> {
    Ok(CatGenerator::new(canvas.apply(config))?)
}

/// Serialize a cat in the requested format
pub fn render(cat: &GeneratedCat, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Svg => Ok(cat.svg.clone()),
        OutputFormat::Json => serde_json::to_string_pretty(cat),
    }
}

/// Write a cat to a file, or print it
pub fn emit(
    cat: &GeneratedCat,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = render(cat, format)?;

    match output {
        Some(path) => {
            fs::write(path, &document)?;
            println!("Cat written to {}", path.display());
        }
        None => {
            println!("{}", document);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layering;
    use whisker_render::AccessoryLayering;

    #[test]
    fn test_missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whisker.json");
        fs::write(&path, r#"{ "width": 256, "background": true }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.width, 256);
        assert_eq!(config.height, 400);
        assert!(config.background);
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whisker.json");
        fs::write(&path, "{ width: }").unwrap();

        assert!(load_config(Some(&path)).is_err());
        assert!(load_config(Some(&dir.path().join("missing.json"))).is_err());
    }

    #[test]
    fn test_canvas_overrides() {
        let canvas = CanvasArgs {
            width: Some(300),
            layering: Some(Layering::AlwaysLast),
            ..CanvasArgs::default()
        };
        let config = canvas.apply(GeneratorConfig::default().with_background(true));

        assert_eq!(config.width, 300);
        assert_eq!(config.height, 400);
        assert!(config.background);
        assert!(!config.responsive);
        assert_eq!(config.accessory_layering, AccessoryLayering::AlwaysLast);
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.json");
        let cat = CatGenerator::default().generate("test-seed");

        emit(&cat, Some(&path), OutputFormat::Json).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        let written: GeneratedCat = serde_json::from_str(&json).unwrap();
        assert_eq!(written.attributes, cat.attributes);
        assert_eq!(written.svg, cat.svg);
    }
}
