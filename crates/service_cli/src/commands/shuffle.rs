//! Shuffle command implementation
//!
//! Shuffles the range `[start, end)` of the given items and prints the
//! whole list, space-separated.

use std::io::Write;

use infra_random::Randomizer;
use tracing::debug;

use crate::{CliError, Result};

/// Run the shuffle command
pub fn run(
    rng: &mut Randomizer,
    mut items: Vec<String>,
    start: Option<usize>,
    end: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let start = start.unwrap_or(0);
    let end = end.unwrap_or(items.len());
    if start > end {
        return Err(CliError::InvalidArgument(format!(
            "--start {} must not exceed --end {}",
            start, end
        )));
    }

    debug!(len = items.len(), start, end, "Shuffling items");
    rng.shuffle_range(&mut items, start, end)?;
    writeln!(out, "{}", items.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_shuffle_whole_list_is_permutation() {
        let mut rng = Randomizer::from_seed(4);
        let mut buffer = Vec::new();
        run(&mut rng, items(&["a", "b", "c", "d"]), None, None, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut shuffled: Vec<&str> = output.split_whitespace().collect();
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shuffle_subrange_keeps_edges() {
        let mut rng = Randomizer::from_seed(4);
        let mut buffer = Vec::new();
        let list = items(&["x", "1", "2", "3", "y"]);
        run(&mut rng, list, Some(1), Some(4), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let shuffled: Vec<&str> = output.split_whitespace().collect();
        assert_eq!(shuffled.first(), Some(&"x"));
        assert_eq!(shuffled.last(), Some(&"y"));
    }

    #[test]
    fn test_shuffle_reversed_bounds_rejected() {
        let mut rng = Randomizer::new();
        let mut buffer = Vec::new();
        let result = run(&mut rng, items(&["a", "b"]), Some(2), Some(1), &mut buffer);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_shuffle_out_of_bounds_rejected() {
        let mut rng = Randomizer::new();
        let mut buffer = Vec::new();
        let result = run(&mut rng, items(&["a", "b"]), None, Some(5), &mut buffer);
        assert!(matches!(result, Err(CliError::Randomize(_))));
    }
}
