use anyhow::Context;
use clap::Parser;
use datemark::{BatchProcessor, Cli, ProcessingSummary, WatermarkConfig};
use log::LevelFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(&cli) {
        Ok(summary) if summary.is_success() => {
            println!(
                "Watermarked {} of {} images, results in: {}",
                summary.succeeded,
                summary.attempted,
                summary.output_dir.display()
            );
        }
        Ok(_) => {
            log::error!("No images were successfully processed");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ProcessingSummary> {
    // The color is a run-wide parameter; a bad value aborts before any
    // file is touched.
    let color = datemark::resolve_color(&cli.color)?;

    let config = WatermarkConfig {
        font_size: cli.size,
        color,
        anchor: cli.position.into(),
        quality: cli.quality,
        date_fallback: cli.on_missing_date.into(),
        font_path: cli.font.clone(),
    };

    let processor = BatchProcessor::new(config, cli.threads)?;
    let summary = processor
        .process(&cli.input_path)
        .with_context(|| format!("Failed to process {}", cli.input_path.display()))?;

    Ok(summary)
}
