use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettize::models::PresetConfig;
use palettize::services::{quantize_file, resolve_palette, PaletteSource};

#[derive(Parser)]
#[command(name = "palettize")]
#[command(about = "Quantize images to a fixed color palette with Floyd-Steinberg dithering")]
struct Cli {
    /// Palette presets YAML file (falls back to PALETTIZE_PRESETS, then built-ins)
    #[arg(long, global = true)]
    presets: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize a PNG image to a palette
    Quantize {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Name of a palette preset (default: first preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000").
        /// Takes precedence over --preset.
        #[arg(short, long)]
        colors: Option<String>,
    },
    /// List available palette presets
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettize=info,palette_quant=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let presets_path = cli
        .presets
        .or_else(|| std::env::var("PALETTIZE_PRESETS").ok().map(PathBuf::from));
    let presets = PresetConfig::load_or_default(presets_path.as_deref())?;

    match cli.command {
        Commands::Quantize {
            input,
            output,
            preset,
            colors,
        } => run_quantize_command(&presets, &input, &output, preset, colors),
        Commands::Presets => {
            run_presets_command(&presets);
            Ok(())
        }
    }
}

/// Quantize one image file
fn run_quantize_command(
    presets: &PresetConfig,
    input: &Path,
    output: &Path,
    preset: Option<String>,
    colors: Option<String>,
) -> anyhow::Result<()> {
    let source = PaletteSource::from_args(colors.as_deref(), preset.as_deref());
    let palette = resolve_palette(presets, source)?;

    let stats = quantize_file(input, output, &palette)?;

    println!(
        "Quantized {} -> {} ({} pixels, {}/{} colors used)",
        input.display(),
        output.display(),
        stats.pixels,
        stats.colors_used(),
        palette.len()
    );
    Ok(())
}

/// Print presets in configuration order
fn run_presets_command(presets: &PresetConfig) {
    if presets.palettes.is_empty() {
        println!("No palette presets configured");
        return;
    }

    for (i, preset) in presets.palettes.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!("{}{}: {}", preset.name, marker, preset.colors.join(", "));
    }
}
