//! Example: Compare both misspelling strategies on a corpus file.
//!
//! Usage:
//!   cargo run --example synthesize -- <combined_file> [limit]
//!
//! Example:
//!   cargo run --example synthesize -- assets/data/words_combined.json 20

use std::env;
use std::path::Path;

use wordcraft::corpus::{load_json, CombinedFile};
use wordcraft::scrub::find_collisions;
use wordcraft::{Strategy, Synthesize, WordEntry};

fn main() -> wordcraft::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example synthesize -- <combined_file> [limit]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example synthesize -- assets/data/words_combined.json 20");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let limit: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(15);
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let corpus = load_json::<CombinedFile>(path)?.doc;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Misspelling comparison: {}", file_path);
    println!("{}", separator);
    println!();
    println!("Entries: {}", corpus.words.len());
    println!();

    let mut simple = Strategy::Simple.build_seeded(42);
    let mut realistic = Strategy::Realistic.build_seeded(42);

    println!("{:<16} {:<34} {}", "WORD", "SIMPLE", "REALISTIC");
    println!("{}", "-".repeat(80));
    for entry in corpus.words.iter().take(limit) {
        let word = entry.key();
        println!(
            "{:<16} {:<34} {}",
            word,
            simple.synthesize(&word).join(", "),
            realistic.synthesize(&word).join(", ")
        );
    }
    println!();

    // Collisions each strategy would introduce if applied to the whole file.
    for (label, synth) in [("simple", &mut simple), ("realistic", &mut realistic)] {
        let regenerated: Vec<WordEntry> = corpus
            .words
            .iter()
            .map(|e| WordEntry::new(e.key(), synth.synthesize(&e.key())))
            .collect();
        let report = find_collisions(&regenerated);
        println!(
            "{:<10} {} misspellings, {} collide with a correct spelling",
            label, report.misspellings_checked, report.collisions.len()
        );
    }

    Ok(())
}
