use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use snapdedup_core::io::{discover, FsDecoder};

#[derive(Args)]
pub struct ScanArgs {
    /// Snapshot folder
    pub folder: PathBuf,

    /// Also decode every image and report unreadable files
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let decoder = args.validate.then_some(&FsDecoder);
    let discovery = discover(&args.folder, decoder)
        .with_context(|| format!("Failed to scan {}", args.folder.display()))?;

    println!("{:<12}  {:>7}  {:<14}  {:<14}", "Camera", "Frames", "First", "Last");
    println!("{}", "-".repeat(53));
    for (camera, frames) in &discovery.cameras {
        let first = frames.first().map(|f| f.timestamp_key.as_str()).unwrap_or("");
        let last = frames.last().map(|f| f.timestamp_key.as_str()).unwrap_or("");
        println!("{:<12}  {:>7}  {:<14}  {:<14}", camera, frames.len(), first, last);
    }

    println!("\nTotal frames: {}", discovery.frame_count());
    for path in &discovery.unrecognized {
        println!("Skipped (unrecognized name): {}", path.display());
    }
    for path in &discovery.invalid {
        println!("Skipped (unreadable image):  {}", path.display());
    }

    Ok(())
}
