//! Synth command - print misspellings for individual words.

use colored::Colorize;
use wordcraft::{Strategy, Synthesize};

pub fn run(
    words: Vec<String>,
    strategy: Strategy,
    seed: Option<u64>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut synth = match seed {
        Some(seed) => strategy.build_seeded(seed),
        None => strategy.build(),
    };

    let results: Vec<(String, Vec<String>)> = words
        .iter()
        .map(|w| {
            let word = w.trim().to_lowercase();
            let misspellings = synth.synthesize(&word);
            (word, misspellings)
        })
        .collect();

    if json_output {
        let out: serde_json::Map<String, serde_json::Value> = results
            .into_iter()
            .map(|(word, misspellings)| (word, serde_json::json!(misspellings)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (word, misspellings) in &results {
        if misspellings.is_empty() {
            println!("{:16} {}", word.white().bold(), "(none)".dimmed());
        } else {
            println!("{:16} {}", word.white().bold(), misspellings.join(", ").yellow());
        }
    }
    Ok(())
}
