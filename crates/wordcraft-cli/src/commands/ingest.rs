//! Ingest command - build tier files from the raw dictionary.

use colored::Colorize;
use wordcraft::ingest::Ingestor;
use wordcraft::Strategy;

use super::Context;

pub fn run(
    ctx: &Context,
    target: Option<usize>,
    strategy: Option<Strategy>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ctx.config.ingest.clone();
    if let Some(t) = target {
        config.target_per_tier = t;
    }
    if let Some(s) = strategy {
        config.strategy = s;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    println!(
        "{} {}",
        "Ingesting".cyan().bold(),
        ctx.layout.dictionary().display().to_string().white()
    );

    let report = Ingestor::with_config(config.clone()).run(&ctx.layout)?;

    println!();
    println!(
        "Scanned {} words, {} look like English",
        report.scanned.to_string().white().bold(),
        report.accepted.to_string().green()
    );
    if report.duplicates > 0 {
        println!("  ({} keys repeated an accepted word and were skipped)", report.duplicates);
    }
    println!();
    println!("{}", "Tiers:".yellow().bold());
    for tier in &report.tiers {
        println!(
            "  Level {}: {:>5} selected of {:>6} available",
            tier.level,
            tier.selected.to_string().green(),
            tier.available
        );
    }
    println!();
    println!(
        "{} {} words written to {} ({} misspellings)",
        "✓".green(),
        report.total_selected.to_string().white().bold(),
        ctx.layout.combined().display(),
        config.strategy
    );

    Ok(())
}
