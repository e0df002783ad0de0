//! Whisker CLI - Seeded Cat Avatar Generator
//!
//! Generates reproducible cartoon cats as SVG documents.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use whisker_render::AccessoryLayering;

mod commands;

/// Whisker - Seeded Cat Avatar Generator
///
/// The same seed always draws the same cat.
#[derive(Parser, Debug)]
#[command(name = "whisker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generator config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the cat for a seed
    Generate {
        seed: String,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Generate one cat per seed into a directory
    Batch {
        #[arg(required = true)]
        seeds: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Generate a cat from a random seed
    Random {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Generate a cat that wears an accessory
    Accessorize {
        seed: String,

        /// Dress the cat in this accessory instead of retrying
        #[arg(short, long, conflicts_with_all = ["allow", "max_attempts"])]
        accessory: Option<String>,

        /// Accessories accepted when retrying (defaults to head and neck wear)
        #[arg(long, value_delimiter = ',')]
        allow: Vec<String>,

        /// Retry budget
        #[arg(short, long, default_value_t = whisker_render::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: u32,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Show trait tiers and fallback lists
    Traits {
        /// Only show one category
        #[arg(value_enum)]
        category: Option<CategoryArg>,
    },

    /// Inspect the accessory artwork
    Assets {
        #[command(subcommand)]
        action: AssetAction,
    },
}

/// Canvas options that override the config file
#[derive(Args, Debug, Clone, Default)]
struct CanvasArgs {
    /// Canvas width
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height
    #[arg(long)]
    height: Option<u32>,

    /// Scalable output without fixed width and height
    #[arg(long)]
    responsive: bool,

    /// Paint a backdrop with paw prints
    #[arg(long)]
    background: bool,

    /// When the accessory is painted
    #[arg(long, value_enum)]
    layering: Option<Layering>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// SVG document
    Svg,
    /// Full generated cat as JSON
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Layering {
    /// Neck wear behind the body, head wear over the face
    NeckAware,
    /// Accessory painted over everything
    AlwaysLast,
}

impl From<Layering> for AccessoryLayering {
    fn from(layering: Layering) -> Self {
        match layering {
            Layering::NeckAware => Self::NeckAware,
            Layering::AlwaysLast => Self::AlwaysLast,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum CategoryArg {
    Colors,
    FurPatterns,
    EyeShapes,
    Mouths,
    Accessories,
    Mutations,
}

#[derive(Subcommand, Debug)]
enum AssetAction {
    /// List available assets
    List,
    /// Check that every accessory has artwork
    Check,
    /// Render one asset on its own
    Show {
        name: String,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            seed,
            output,
            format,
            canvas,
        } => {
            commands::generate::run(config, &canvas, &seed, output.as_deref(), format)?;
        }

        Commands::Batch {
            seeds,
            output_dir,
            format,
            canvas,
        } => {
            commands::batch::run(config, &canvas, &seeds, &output_dir, format)?;
        }

        Commands::Random {
            output,
            format,
            canvas,
        } => {
            commands::random::run(config, &canvas, output.as_deref(), format)?;
        }

        Commands::Accessorize {
            seed,
            accessory,
            allow,
            max_attempts,
            output,
            format,
            canvas,
        } => {
            let request = commands::accessorize::Request {
                seed: &seed,
                accessory: accessory.as_deref(),
                allow: &allow,
                max_attempts,
            };
            commands::accessorize::run(config, &canvas, request, output.as_deref(), format)?;
        }

        Commands::Traits { category } => {
            commands::traits::run(config, category)?;
        }

        Commands::Assets { action } => match action {
            AssetAction::List => commands::assets::list(config)?,
            AssetAction::Check => commands::assets::check(config)?,
            AssetAction::Show { name, output } => {
                commands::assets::show(config, &name, output.as_deref())?
            }
        },
    }

    Ok(())
}
