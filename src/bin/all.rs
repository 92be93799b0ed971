//! Generic CLI for running algorithms.
//!
//! Usage:
//!   kadane-bench                # Benchmark all algorithms
//!   kadane-bench --list         # List available algorithms
//!   kadane-bench max_subarray   # Benchmark a specific algorithm
//!   kadane-bench --demo         # Walk through the classic example
//!   kadane-bench --help         # Show help

use kadane_bench::registry::build_registry;
use kadane_bench::utils::runner::export_csv;
use kadane_bench::utils::{time_seed, Distribution, InputSpec, TimingConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut show_demo = false;
    let mut sizes: Vec<usize> = vec![100, 1_000, 10_000, 100_000];
    let mut samples: usize = 30;
    let mut runs: usize = 10;
    let mut range: (i32, i32) = (-1000, 1000);
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--demo" => show_demo = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--samples" => {
                i += 1;
                if i < args.len() {
                    samples = args[i].parse().unwrap_or(30);
                }
            }
            "--runs" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(10);
                }
            }
            "--range" => {
                i += 1;
                if i < args.len() {
                    let parts: Vec<i32> = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                    if parts.len() == 2 {
                        range = (parts[0].min(parts[1]), parts[0].max(parts[1]));
                    }
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        kadane_bench::tui::print_help();
        return;
    }

    if show_list {
        kadane_bench::tui::print_available_algorithms(&registry);
        return;
    }

    if show_demo {
        kadane_bench::tui::print_demo();
        return;
    }

    if sizes.is_empty() {
        eprintln!("No valid input sizes given.");
        std::process::exit(1);
    }

    let seed = seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: samples,
        ..TimingConfig::default()
    };

    let selected: Vec<_> = match &algorithm_filter {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    kadane_bench::tui::print_header();
    println!("seed = {}, value range = [{}, {}]\n", seed, range.0, range.1);

    let mut csv_records = Vec::new();

    for algo in &selected {
        kadane_bench::tui::run_and_display(*algo, &sizes, range, &config, seed);

        if csv_path.is_some() {
            for &size in &sizes {
                let spec = InputSpec::uniform(size, range.0, range.1);
                csv_records.extend(algo.scan_records(&spec, runs, seed));
            }
            // Distribution sweep at the largest size.
            if let Some(&largest) = sizes.iter().max() {
                for distribution in [Distribution::AllPositive, Distribution::AllNegative] {
                    let spec =
                        InputSpec::uniform(largest, range.0, range.1).with_distribution(distribution);
                    csv_records.extend(algo.scan_records(&spec, runs, seed));
                }
            }
        }
    }

    if let Some(path) = csv_path {
        match export_csv(&path, &csv_records) {
            Ok(()) => println!("Results saved to {}", path),
            Err(e) => {
                eprintln!("Error writing results: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("Note: Speedup is relative to the first variant (usually 'baseline').");
}
