use console::Style;
use snapdedup_core::pipeline::config::DedupConfig;
use snapdedup_core::pipeline::DedupReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    kept: Style,
    dropped: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            kept: Style::new().green(),
            dropped: Style::new().red(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &DedupConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Snapshot Dedup"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Min area"),
        s.value.apply_to(config.comparator.min_region_area)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.walker.change_threshold)
    );
    match &config.review {
        Some(review) => println!(
            "  {:<14}{}",
            s.label.apply_to("Review"),
            s.path.apply_to(review.output_dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Review"),
            s.disabled.apply_to("disabled")
        ),
    }
    let delete = match (config.delete, config.dry_run) {
        (false, _) => s.disabled.apply_to("disabled".to_string()),
        (true, true) => s.value.apply_to("dry run".to_string()),
        (true, false) => s.dropped.apply_to("enabled".to_string()),
    };
    println!("  {:<14}{}", s.label.apply_to("Delete"), delete);
    println!();
}

pub fn print_run_summary(report: &DedupReport) {
    let s = Styles::new();

    println!();
    println!(
        "  {:<12}  {:>7}  {:>7}  {:>7}  {:>9}",
        s.label.apply_to("Camera"),
        s.label.apply_to("Frames"),
        s.label.apply_to("Kept"),
        s.label.apply_to("Dropped"),
        s.label.apply_to("Failures")
    );
    println!("  {}", "-".repeat(50));
    for camera in &report.cameras {
        let kept = camera.decision.retained_count();
        let total = camera.decision.len();
        println!(
            "  {:<12}  {:>7}  {:>7}  {:>7}  {:>9}",
            camera.camera_id,
            total,
            s.kept.apply_to(kept),
            s.dropped.apply_to(total - kept),
            camera.decision.load_failures()
        );
        if let Some(ref path) = camera.review {
            println!("    {} {}", s.label.apply_to("review"), s.path.apply_to(path.display()));
        }
        if let Some(ref deletion) = camera.deletion {
            let verb = if deletion.dry_run { "would delete" } else { "deleted" };
            println!(
                "    {} {}",
                s.label.apply_to(verb),
                s.value.apply_to(deletion.deleted.len())
            );
            for (path, err) in &deletion.failed {
                println!("    {} {}: {}", s.dropped.apply_to("failed"), path.display(), err);
            }
            if !deletion.skipped.is_empty() {
                println!(
                    "    {} {} (unreadable, kept)",
                    s.label.apply_to("skipped"),
                    s.value.apply_to(deletion.skipped.len())
                );
            }
        }
    }

    println!();
    println!(
        "  {:<14}{} of {}",
        s.label.apply_to("Retained"),
        s.kept.apply_to(report.total_retained()),
        report.total_frames()
    );
    for path in &report.unrecognized {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Unrecognized"),
            s.path.apply_to(path.display())
        );
    }
    for path in &report.invalid {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Unreadable"),
            s.path.apply_to(path.display())
        );
    }
}
