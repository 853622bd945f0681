use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use applescan::{ApplePipeline, Region};

#[derive(Parser)]
#[command(name = "applescan")]
#[command(about = "Detect red and green apples in an image")]
struct Cli {
    /// Path to input image file (JPEG or PNG)
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Where to write the annotated JPEG
    #[arg(short, long, default_value = "detected.jpg")]
    output: PathBuf,

    /// Skip drawing bounding boxes (count is unaffected)
    #[arg(long)]
    no_boxes: bool,

    /// Minimum region area in pixels
    #[arg(long, default_value_t = 500.0)]
    min_area: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    count: usize,
    regions: &'a [Region],
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }
    let image_bytes = std::fs::read(&args.image_path)?;

    let pipeline = ApplePipeline::new()
        .with_min_area(args.min_area)
        .with_verbose(args.verbose);
    let detection = pipeline.detect(&image_bytes, !args.no_boxes)?;

    std::fs::write(&args.output, &detection.image)?;

    if args.json {
        let report = Report {
            count: detection.count,
            regions: &detection.regions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n=== Apple Detection Results ===");
        println!("Apples detected: {}", detection.count);
        for (i, region) in detection.regions.iter().enumerate() {
            println!(
                "  Apple {} at ({}, {}) - {}x{}, circularity {:.2}",
                i + 1,
                region.bbox.x,
                region.bbox.y,
                region.bbox.width,
                region.bbox.height,
                region.circularity()
            );
        }
        println!("Annotated image written to {:?}", args.output);
    }

    Ok(())
}
