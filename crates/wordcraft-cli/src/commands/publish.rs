//! Publish command - upload new and changed entries.

use colored::Colorize;
use wordcraft::publish::{FirestoreStore, Publisher};

use super::{cancelled, sample_list, Context};
use crate::prompt::confirm;

pub fn run(
    ctx: &Context,
    collection: Option<String>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ctx.config.clone();
    if let Some(c) = collection {
        config.publish.collection = c;
    }

    let store = FirestoreStore::new(config.firestore()?)?;
    let publisher = Publisher::with_config(store, config.publish.clone());

    println!(
        "{} {}",
        "Comparing".cyan().bold(),
        ctx.layout.combined().display().to_string().white()
    );
    let prepared = publisher.prepare(&ctx.layout)?;
    let plan = &prepared.plan;
    let samples = plan.samples(config.publish.sample_size);

    println!();
    println!("{}", "Change analysis:".yellow().bold());
    println!("  Local words:     {}", prepared.local_words);
    println!("  Remote words:    {}", prepared.remote.len());
    println!("  New:             {}", plan.new.len().to_string().green());
    println!("  Updated:         {}", plan.updated.len().to_string().yellow());
    println!("  Unchanged:       {}", plan.unchanged.len());
    if !samples.new.is_empty() {
        println!("  Sample new:       {}", sample_list(&samples.new, plan.new.len()));
    }
    if !samples.updated.is_empty() {
        println!("  Sample updated:   {}", sample_list(&samples.updated, plan.updated.len()));
    }
    if !samples.unchanged.is_empty() {
        println!("  Sample unchanged: {}", sample_list(&samples.unchanged, plan.unchanged.len()).dimmed());
    }
    println!();

    if !plan.has_changes() {
        println!("{} No changes, every word is up to date", "✓".green());
        return Ok(());
    }
    if dry_run {
        println!("{}", "Dry run, nothing uploaded.".dimmed());
        return Ok(());
    }

    if !confirm(
        &format!(
            "Add {} and update {} words in '{}'?",
            plan.new.len(),
            plan.updated.len(),
            config.publish.collection
        ),
        ctx.yes,
    )? {
        return cancelled();
    }

    let report = publisher.execute(&ctx.layout, &prepared)?;

    println!();
    println!("Remote snapshot saved to {}", report.snapshot.display());
    println!(
        "{} Uploaded {} new and {} updated words in {} commits",
        "✓".green(),
        report.inserted.to_string().white().bold(),
        report.updated.to_string().white().bold(),
        report.commits
    );
    match report.remote_after {
        Some(found) if report.verified() => {
            println!("{} Remote collection holds {} words", "✓".green(), found)
        }
        Some(found) => println!(
            "{} Expected {} words remotely, found {}",
            "⚠".yellow(),
            report.expected,
            found
        ),
        None => println!("{} Could not recount the remote collection", "⚠".yellow()),
    }
    Ok(())
}
