//! Scrub command - remove misspellings that collide with correct spellings.

use colored::Colorize;
use wordcraft::scrub::{scrub_corpus, ScrubOutcome};

use super::Context;

const LISTED: usize = 20;

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Scrubbing".cyan().bold(),
        ctx.layout.combined().display().to_string().white()
    );

    match scrub_corpus(&ctx.layout)? {
        ScrubOutcome::Clean(report) => {
            println!(
                "{} No duplicates among {} words, nothing to do",
                "✓".green(),
                report.entries
            );
        }
        ScrubOutcome::Scrubbed {
            before,
            report,
            backup,
        } => {
            println!();
            println!(
                "{} {} misspellings are correct spellings elsewhere:",
                "Found".yellow().bold(),
                before.collisions.len()
            );
            let limit = if ctx.verbose { usize::MAX } else { LISTED };
            for c in before.collisions.iter().take(limit) {
                println!("  {:16} {}", c.word.white(), c.misspelling.red());
            }
            if before.collisions.len() > limit {
                println!("  ... and {} more", before.collisions.len() - limit);
            }
            println!();
            println!("Backup written to {}", backup.display());
            println!(
                "{} Removed {} misspellings from {} words; no duplicates remain",
                "✓".green(),
                report.removed.to_string().white().bold(),
                report.entries_affected
            );
        }
    }
    Ok(())
}
