//! Improve command - regenerate misspellings in the combined file.

use colored::Colorize;
use wordcraft::synth::{improve_corpus, IMPROVE_BACKUP_LABEL};
use wordcraft::Strategy;

use super::{cancelled, Context};
use crate::prompt::confirm;

const SAMPLES: usize = 5;

pub fn run(
    ctx: &Context,
    strategy: Strategy,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let combined = ctx.layout.combined();
    if !combined.exists() {
        return Err(format!(
            "Combined file not found: {}\nRun 'wordcraft ingest' first.",
            combined.display()
        )
        .into());
    }

    println!("This will:");
    println!(
        "  - back up {} to {}",
        combined.display(),
        ctx.layout.combined_backup(IMPROVE_BACKUP_LABEL).display()
    );
    println!("  - replace every entry's misspellings using the {} strategy", strategy);
    println!();
    if !confirm("Continue?", ctx.yes)? {
        return cancelled();
    }

    let mut synth = match seed {
        Some(seed) => strategy.build_seeded(seed),
        None => strategy.build(),
    };
    let report = improve_corpus(&ctx.layout, synth.as_mut(), SAMPLES)?;

    println!();
    println!(
        "{} Improved misspellings for {} of {} words",
        "✓".green(),
        report.changed.to_string().white().bold(),
        report.entries
    );
    if !report.samples.is_empty() {
        println!();
        println!("{}", "Examples:".yellow().bold());
        for sample in &report.samples {
            println!(
                "  {:16} {} {} {}",
                sample.word.white(),
                sample.before.join(", ").dimmed(),
                "→".cyan(),
                sample.after.join(", ")
            );
        }
    }
    Ok(())
}
