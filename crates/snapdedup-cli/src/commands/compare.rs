use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use snapdedup_core::compare::{compare_images, ComparatorConfig, ComparisonOutcome};
use snapdedup_core::consts::{DEFAULT_CHANGE_THRESHOLD, DEFAULT_MIN_REGION_AREA};
use snapdedup_core::io::{FrameDecoder, FsDecoder};

#[derive(Args)]
pub struct CompareArgs {
    /// Reference image
    pub reference: PathBuf,

    /// Candidate image
    pub candidate: PathBuf,

    /// Minimum changed-region area in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_REGION_AREA)]
    pub min_area: u64,

    /// Score above which the candidate counts as changed
    #[arg(long, default_value_t = DEFAULT_CHANGE_THRESHOLD)]
    pub threshold: u64,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = ComparatorConfig {
        min_region_area: args.min_area,
        ..Default::default()
    };
    let reference = FsDecoder.decode(&args.reference);
    let candidate = FsDecoder.decode(&args.candidate);

    let result = match compare_images(reference.as_ref(), candidate.as_ref(), &config) {
        ComparisonOutcome::Compared(result) => result,
        ComparisonOutcome::LoadFailure => {
            let missing = if reference.is_none() {
                &args.reference
            } else {
                &args.candidate
            };
            bail!("Could not decode {}", missing.display());
        }
    };

    println!("Score:    {}", result.score);
    println!("Regions:  {}", result.regions.len());
    println!(
        "Verdict:  {}",
        if result.score > args.threshold {
            "changed"
        } else {
            "duplicate"
        }
    );

    if !result.regions.is_empty() {
        println!();
        println!("{:>5}  {:>9}  {:>11}  {:>8}", "#", "Position", "Size", "Area");
        println!("{}", "-".repeat(40));
        for (i, r) in result.regions.iter().enumerate() {
            println!(
                "{:>5}  {:>9}  {:>11}  {:>8}",
                i + 1,
                format!("{},{}", r.x, r.y),
                format!("{}x{}", r.width, r.height),
                r.area
            );
        }
    }

    Ok(())
}
