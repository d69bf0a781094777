//! Check command - read-only duplicate report.

use colored::Colorize;
use wordcraft::scrub::check_corpus;

use super::Context;

pub fn run(ctx: &Context, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = check_corpus(&ctx.layout)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {}",
            "Duplicate check for".cyan().bold(),
            ctx.layout.combined().display().to_string().white()
        );
        println!();
        println!("  Entries:               {}", report.entries);
        println!("  Unique correct words:  {}", report.unique_correct);
        println!("  Misspellings checked:  {}", report.misspellings_checked);
        println!();

        if report.is_clean() {
            println!("{} No misspelling is a correct spelling", "✓".green());
        } else {
            println!(
                "{} {} collisions in {} words:",
                "✗".red(),
                report.collisions.len().to_string().red().bold(),
                report.entries_affected()
            );
            for c in &report.collisions {
                println!("  {:16} {}", c.word.white(), c.misspelling.red());
            }
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(format!(
            "{} misspellings collide with correct spellings; run 'wordcraft scrub'",
            report.collisions.len()
        )
        .into())
    }
}
