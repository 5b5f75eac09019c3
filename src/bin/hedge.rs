// src/bin/hedge.rs
//! CLI for the delta-hedging Monte Carlo simulation
//!
//! Positional arguments (all required, whole numbers):
//! ```text
//! hedge numTimePeriods numSimulations maturityYears initialSpot realizedVolPct impliedVolPct seed
//! ```
//! Volatilities are whole percentage points (20 → 0.20). The strike is fixed
//! at the initial spot and the risk-free rate at zero, so only whole-number
//! years, spots, and vol percentages are representable; fractional inputs
//! are out of contract by design.
//!
//! Price paths land in `./simulations/` (which must already exist) and the
//! mean terminal cash flow is printed to stdout.

use hedge_mc::analytics::call_option::CallOption;
use hedge_mc::hedging::engine::{run, SimulationConfig};
use hedge_mc::math_utils::Timer;
use hedge_mc::output;
use std::env;
use std::process;

const OUTPUT_DIR: &str = "./simulations";

struct CliArgs {
    num_periods: usize,
    num_paths: usize,
    maturity: f64,
    initial_spot: f64,
    realized_vol_pct: u64,
    implied_vol_pct: u64,
    seed: u64,
}

fn print_usage(program: &str) {
    println!(
        "Usage: {} numTimePeriods numSimulations maturityYears initialSpot realizedVolPct impliedVolPct seed",
        program
    );
}

/// Parse the seven positional arguments, `None` on any violation
///
/// Every argument is a non-negative whole number; parsing as `u64` rejects
/// signs outright, so a negative count cannot wrap into a huge allocation.
fn parse_args(args: &[String]) -> Option<CliArgs> {
    if args.len() != 8 {
        return None;
    }
    let mut values = [0u64; 7];
    for (slot, raw) in values.iter_mut().zip(&args[1..]) {
        *slot = raw.parse::<u64>().ok()?;
    }
    Some(CliArgs {
        num_periods: values[0] as usize,
        num_paths: values[1] as usize,
        maturity: values[2] as f64,
        initial_spot: values[3] as f64,
        realized_vol_pct: values[4],
        implied_vol_pct: values[5],
        seed: values[6],
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Some(cli) => cli,
        None => {
            print_usage(args.first().map(String::as_str).unwrap_or("hedge"));
            process::exit(1);
        }
    };

    let CliArgs {
        num_periods,
        num_paths,
        maturity,
        initial_spot,
        realized_vol_pct,
        implied_vol_pct,
        seed,
    } = cli;

    let realized_vol = realized_vol_pct as f64 / 100.0;
    let implied_vol = implied_vol_pct as f64 / 100.0;

    // At-the-money contract, zero risk-free rate
    let option = match CallOption::new(initial_spot, 0.0, implied_vol, maturity) {
        Ok(option) => option,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let cfg = SimulationConfig {
        num_periods,
        num_paths,
        maturity,
        initial_spot,
        realized_vol,
        seed,
    };

    println!(
        "Simulating {} paths x {} periods on {} cores ({} rayon threads)",
        num_paths,
        num_periods,
        num_cpus::get(),
        rayon::current_num_threads()
    );

    let mut timer = Timer::new();
    timer.start();
    let result = match run(&option, &cfg) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    println!("Simulation completed in {:.1} ms", timer.elapsed_ms());

    let filename = output::csv_filename(OUTPUT_DIR, num_periods, implied_vol_pct, realized_vol_pct);
    if let Err(e) = output::write_paths_to_csv(&filename, result.paths.view(), num_periods) {
        eprintln!("Error writing {}: {}", filename, e);
        process::exit(1);
    }
    println!("Price paths written to {}", filename);

    println!(
        "Average Cash Flow across simulations: {}",
        result.mean_cash_flow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("hedge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_valid() {
        let cli = parse_args(&args(&["250", "10000", "1", "100", "30", "20", "42"]))
            .expect("seven whole-number arguments");
        assert_eq!(cli.num_periods, 250);
        assert_eq!(cli.num_paths, 10_000);
        assert_eq!(cli.maturity, 1.0);
        assert_eq!(cli.initial_spot, 100.0);
        assert_eq!(cli.realized_vol_pct, 30);
        assert_eq!(cli.implied_vol_pct, 20);
        assert_eq!(cli.seed, 42);
    }

    #[test]
    fn test_parse_args_wrong_count() {
        assert!(parse_args(&args(&[])).is_none());
        assert!(parse_args(&args(&["250", "10000", "1"])).is_none());
        assert!(
            parse_args(&args(&["250", "10000", "1", "100", "30", "20", "42", "extra"])).is_none()
        );
    }

    #[test]
    fn test_parse_args_rejects_negative_and_non_numeric() {
        // Signed input must fail the parse instead of wrapping through a
        // cast into an enormous count.
        assert!(parse_args(&args(&["-1", "10000", "1", "100", "30", "20", "42"])).is_none());
        assert!(parse_args(&args(&["250", "-5", "1", "100", "30", "20", "42"])).is_none());
        assert!(parse_args(&args(&["250", "10000", "one", "100", "30", "20", "42"])).is_none());
        assert!(parse_args(&args(&["250", "10000", "1.5", "100", "30", "20", "42"])).is_none());
    }
}
