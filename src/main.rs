use clap::Parser;
use std::path::{Path, PathBuf};

use tumorscan::AppContext;
use tumorscan::detection::ingest;

#[derive(Parser)]
#[command(name = "tumorscan")]
#[command(about = "Detect brain tumors in MRI images")]
struct Cli {
    /// Path to an MRI image; omit to start the interactive interface
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Path to the detection model artifact
    #[arg(long, value_name = "MODEL", default_value = "model.rten")]
    model: PathBuf,

    /// Where to save the annotated image (headless mode)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print detected regions as JSON (headless mode)
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match args.image_path.clone() {
        Some(path) => run_headless(&args, &path),
        None => launch_gui(args.model),
    }
}

#[cfg(feature = "gui")]
fn launch_gui(model: PathBuf) -> anyhow::Result<()> {
    tumorscan::gui::run(model).map_err(|e| anyhow::anyhow!("interface error: {e}"))
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_model: PathBuf) -> anyhow::Result<()> {
    anyhow::bail!("no image given and this build has no interface; pass an IMAGE path")
}

fn run_headless(args: &Cli, image_path: &Path) -> anyhow::Result<()> {
    let extension = image_path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(image_path)?;
    let image = ingest::decode_image(&bytes, &extension)?;

    if args.verbose {
        println!("Image loaded: {}x{}", image.width(), image.height());
    }

    let context = AppContext::initialize(&args.model);
    let Some(detector) = context.detector() else {
        anyhow::bail!("{}", context.model_error().unwrap_or("model unavailable"));
    };

    let result = detector.detect(&image)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.regions)?);
    } else if result.regions.is_empty() {
        println!("No tumor regions reported.");
    } else {
        for region in &result.regions {
            println!("Detected: {}", region.label);
            println!("Detection Confidence: {}", region.confidence_percent());
        }
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(image_path));
    result
        .annotated
        .save(&output)
        .map_err(|e| anyhow::anyhow!("Failed to save annotated image: {e}"))?;
    println!("Annotated image saved to {}", output.display());

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_detected.png"))
}
