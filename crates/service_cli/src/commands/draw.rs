//! Draw command implementations
//!
//! Prints `count` samples of one shape, one per line.

use std::io::Write;

use infra_random::Randomizer;
use tracing::debug;

use crate::Result;

/// Run the coin command
pub fn coin(rng: &mut Randomizer, count: usize, out: &mut impl Write) -> Result<()> {
    debug!(count, "Flipping coins");
    for _ in 0..count {
        writeln!(out, "{}", rng.flip_coin())?;
    }
    Ok(())
}

/// Run the int command
pub fn int(
    rng: &mut Randomizer,
    low: i32,
    high: i32,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    debug!(low, high, count, "Drawing integers");
    for _ in 0..count {
        writeln!(out, "{}", rng.get_random_int(low, high)?)?;
    }
    Ok(())
}

/// Run the float command
pub fn float(
    rng: &mut Randomizer,
    low: f64,
    high: f64,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    debug!(low, high, count, "Drawing reals");
    for _ in 0..count {
        writeln!(out, "{}", rng.get_random_float(low, high)?)?;
    }
    Ok(())
}

/// Run the normal command
pub fn normal(
    rng: &mut Randomizer,
    mean: f64,
    std_dev: f64,
    count: usize,
    out: &mut impl Write,
) -> Result<()> {
    debug!(mean, std_dev, count, "Drawing normal samples");
    for _ in 0..count {
        writeln!(out, "{}", rng.get_normal_distributed_float(mean, std_dev)?)?;
    }
    Ok(())
}

/// Run the seeds command
pub fn seeds(rng: &mut Randomizer, count: usize, out: &mut impl Write) -> Result<()> {
    for worker in rng.fork_workers(count) {
        writeln!(out, "{}", worker.seed())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn lines(buffer: Vec<u8>) -> Vec<String> {
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_int_golden_output() {
        let mut rng = Randomizer::from_seed(7);
        let mut buffer = Vec::new();
        int(&mut rng, 0, 9, 3, &mut buffer).unwrap();
        assert_eq!(lines(buffer), vec!["0", "2", "7"]);
    }

    #[test]
    fn test_int_invalid_range() {
        let mut rng = Randomizer::new();
        let mut buffer = Vec::new();
        let result = int(&mut rng, 9, 0, 1, &mut buffer);
        assert!(matches!(result, Err(CliError::Randomize(_))));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_coin_output() {
        let mut rng = Randomizer::from_seed(1);
        let mut buffer = Vec::new();
        coin(&mut rng, 5, &mut buffer).unwrap();
        let output = lines(buffer);
        assert_eq!(output.len(), 5);
        assert!(output.iter().all(|l| l == "true" || l == "false"));
    }

    #[test]
    fn test_float_output_in_range() {
        let mut rng = Randomizer::from_seed(2);
        let mut buffer = Vec::new();
        float(&mut rng, -1.0, 1.0, 20, &mut buffer).unwrap();
        for line in lines(buffer) {
            let value: f64 = line.parse().unwrap();
            assert!((-1.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_normal_rejects_bad_std_dev() {
        let mut rng = Randomizer::new();
        let mut buffer = Vec::new();
        assert!(normal(&mut rng, 0.0, -2.0, 1, &mut buffer).is_err());
    }

    #[test]
    fn test_seeds_match_forks() {
        let mut rng = Randomizer::from_seed(9);
        let mut reference = Randomizer::from_seed(9);
        let mut buffer = Vec::new();
        seeds(&mut rng, 3, &mut buffer).unwrap();

        let expected: Vec<String> = (0..3)
            .map(|_| reference.new_random_seed().to_string())
            .collect();
        assert_eq!(lines(buffer), expected);
    }
}
