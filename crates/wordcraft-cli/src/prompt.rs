//! Interactive confirmation.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Ask a yes/no question on stdin. `assume_yes` skips the prompt.
pub fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{} {} ", question, "(y/n):".dimmed());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(confirm("Continue?", true).unwrap());
    }
}
