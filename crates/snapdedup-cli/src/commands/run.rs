use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use snapdedup_core::io::FsDecoder;
use snapdedup_core::pipeline::config::DedupConfig;
use snapdedup_core::pipeline::{run_dedup_reported, DedupStage, ProgressReporter};
use snapdedup_core::review::ReviewConfig;

use crate::summary::{print_config_summary, print_run_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Snapshot folder
    pub folder: Option<PathBuf>,

    /// Dedup config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum changed-region area in pixels
    #[arg(long)]
    pub min_area: Option<u64>,

    /// Score above which a frame is kept
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Write a review contact sheet per camera into this directory
    #[arg(long)]
    pub review: Option<PathBuf>,

    /// Skip decoding every file during discovery
    #[arg(long)]
    pub no_validate: bool,

    /// Delete frames that were not retained
    #[arg(long)]
    pub delete: bool,

    /// With --delete, only list what would be removed
    #[arg(long)]
    pub dry_run: bool,
}

/// Drives an indicatif bar from pipeline progress events.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: DedupStage, total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
        self.bar.set_position(0);
        self.bar.set_length(total_items.unwrap_or(0) as u64);
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    print_config_summary(&config);

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len} cameras")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    let report = run_dedup_reported(&config, &FsDecoder, reporter)
        .with_context(|| format!("Deduplication of {} failed", config.input.display()))?;
    bar.finish_with_message("Done");

    print_run_summary(&report);
    Ok(())
}

fn build_config(args: &RunArgs) -> Result<DedupConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid dedup config")?
    } else {
        let folder = args
            .folder
            .clone()
            .context("A snapshot folder or --config is required")?;
        DedupConfig::new(folder)
    };

    if let Some(ref folder) = args.folder {
        config.input = folder.clone();
    }
    if let Some(min_area) = args.min_area {
        config.comparator.min_region_area = min_area;
    }
    if let Some(threshold) = args.threshold {
        config.walker.change_threshold = threshold;
    }
    if let Some(ref dir) = args.review {
        config.review = Some(ReviewConfig::new(dir.clone()));
    }
    if args.no_validate {
        config.discovery.validate_images = false;
    }
    config.delete |= args.delete;
    config.dry_run |= args.dry_run;

    tracing::debug!(?config, "Resolved dedup config");
    Ok(config)
}
