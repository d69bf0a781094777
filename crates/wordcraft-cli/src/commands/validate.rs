//! Validate command - confirm words with the dictionary service.

use colored::Colorize;
use wordcraft::corpus::{load_json, TIERS};
use wordcraft::validate::Validator;
use wordcraft::{CorpusLayout, TierFile};

use super::{cancelled, sample_list, Context};
use crate::prompt::confirm;

pub fn run(
    ctx: &Context,
    batch_size: Option<usize>,
    base_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ctx.config.validate.clone();
    if let Some(size) = batch_size {
        config.batch_size = size;
    }
    if let Some(url) = base_url {
        config.base_url = url;
    }

    let mut validator = Validator::free_dictionary(config)?;

    println!("{} {}", "Probing".cyan().bold(), validator.config().base_url);
    let definition = validator.probe()?;
    println!(
        "{} '{}' is valid: {}",
        "✓".green(),
        validator.config().probe_word,
        definition.dimmed()
    );

    let words = count_tier_words(&ctx.layout)?;
    if words == 0 {
        return Err(format!(
            "No tier files found in {}\nRun 'wordcraft ingest' first.",
            ctx.layout.data_dir().display()
        )
        .into());
    }

    let estimate = validator.config().estimate(words);
    println!();
    println!(
        "This will look up {} words one at a time (about {} minutes).",
        words.to_string().white().bold(),
        estimate.as_secs().div_ceil(60)
    );
    println!("Tier files are backed up and rewritten as each tier completes.");
    println!();
    if !confirm("Continue?", ctx.yes)? {
        return cancelled();
    }

    let report = validator.run_tiers(&ctx.layout)?;

    println!();
    println!("{}", "Results:".yellow().bold());
    for tier in &report.tiers {
        println!(
            "  Level {}: {} valid, {} invalid, {} kept after errors (of {})",
            tier.level,
            tier.valid.to_string().green(),
            tier.invalid.to_string().red(),
            tier.api_errors.to_string().yellow(),
            tier.original
        );
        if ctx.verbose && !tier.invalid_sample.is_empty() {
            println!(
                "           invalid: {}",
                sample_list(&tier.invalid_sample, tier.invalid).dimmed()
            );
        }
    }
    for level in &report.skipped {
        println!("  Level {}: {}", level, "skipped (file not found)".dimmed());
    }
    println!();
    println!(
        "{} Combined file rebuilt with {} words in {}s",
        "✓".green(),
        report.combined_total.to_string().white().bold(),
        (report.finished_at - report.started_at).num_seconds()
    );
    Ok(())
}

/// Words across the existing tier files; a missing file counts as empty.
fn count_tier_words(layout: &CorpusLayout) -> wordcraft::Result<usize> {
    let mut words = 0;
    for level in TIERS {
        let path = layout.tier(level);
        if path.exists() {
            words += load_json::<TierFile>(&path)?.doc.words.len();
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordcraft::corpus::save_json;
    use wordcraft::WordEntry;
    use wordcraft::WordcraftError;

    #[test]
    fn test_count_tier_words() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        assert_eq!(count_tier_words(&layout).unwrap(), 0);

        let words = vec![WordEntry::new("lemon", vec![]), WordEntry::new("melon", vec![])];
        save_json(layout.tier(1), &TierFile::new(1, words)).unwrap();
        assert_eq!(count_tier_words(&layout).unwrap(), 2);
    }

    #[test]
    fn test_count_tier_words_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        std::fs::write(layout.tier(3), "{ not json").unwrap();

        let err = count_tier_words(&layout).unwrap_err();
        assert!(matches!(err, WordcraftError::Persistence(_)));
    }
}
