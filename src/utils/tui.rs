//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::runner::RawScanRecord;
use crate::utils::timer::{measure_variants, TimingConfig, Variant};
use crate::utils::InputSpec;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

pub fn print_header() {
    let width = get_term_width().min(72);
    println!("{}", "=".repeat(width));
    println!("  kadane-bench: instrumented maximum-subarray scan");
    println!("{}", "=".repeat(width));
    println!();
}

pub fn print_help() {
    println!("Usage: kadane-bench [ALGORITHM] [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --list          List available algorithms and variants");
    println!("  -h, --help          Show this help");
    println!("      --demo          Walk through the classic example array");
    println!("      --sizes A,B,..  Input sizes to benchmark (default: 100,1000,10000,100000)");
    println!("      --samples N     Timing samples per variant (default: 30)");
    println!("      --runs N        Instrumented runs per size for CSV export (default: 10)");
    println!("      --range LO,HI   Value range of generated elements (default: -1000,1000)");
    println!("      --seed N        Seed for input generation (default: derived from time)");
    println!("      --csv PATH      Write instrumented per-run rows to PATH");
}

pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    for algo in registry.all() {
        println!("  {} ({})", algo.name(), algo.category());
        println!("      {}", algo.description());
        for variant in algo.available_variants() {
            println!("      - {}", variant);
        }
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

fn format_nanos(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.3} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} us", ns / 1_000.0)
    } else {
        format!("{:.0} ns", ns)
    }
}

/// Print a timing comparison table. Speedup is relative to the first variant.
pub fn print_timing_table(results: &[BenchmarkResult]) {
    if results.is_empty() {
        return;
    }

    println!(
        "{:<22} | {:>12} | {:>12} | {:>12} | {:>12} | {:>8}",
        "Variant", "Avg", "Median", "Min", "StdDev", "Speedup"
    );
    println!("{}", "-".repeat(92));

    let reference_avg = results[0].avg_nanos_f64;
    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            reference_avg / result.avg_nanos_f64
        } else {
            0.0
        };
        println!(
            "{:<22} | {:>12} | {:>12} | {:>12} | {:>12} | {:>7.2}x",
            truncate(&result.name, 22),
            format_nanos(result.avg_nanos_f64),
            format_nanos(result.median_time.as_nanos() as f64),
            format_nanos(result.min_time.as_nanos() as f64),
            format_nanos(result.std_dev.as_nanos() as f64),
            speedup
        );
    }
    println!();
}

/// Print per-variant operation counts from instrumented runs.
pub fn print_operation_table(records: &[RawScanRecord]) {
    if records.is_empty() {
        return;
    }

    println!(
        "{:<22} | {:>12} | {:>13} | {:>9} | {:>10} | {:>10}",
        "Variant", "Comparisons", "ArrayAccesses", "Acc/elem", "Time (ms)", "Mem (B)"
    );
    println!("{}", "-".repeat(92));

    for record in records {
        let per_element =
            record.metrics.array_accesses() as f64 / record.input_size.max(1) as f64;
        println!(
            "{:<22} | {:>12} | {:>13} | {:>9.2} | {:>10.4} | {:>10}",
            truncate(record.variant, 22),
            record.metrics.comparisons(),
            record.metrics.array_accesses(),
            per_element,
            record.metrics.elapsed_millis(),
            record.metrics.memory_delta_bytes()
        );
    }
    println!();
}

/// Benchmark one algorithm across input sizes and print the tables.
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    range: (i32, i32),
    config: &TimingConfig,
    seed: u64,
) {
    print_algo_info_box(algo);

    for &size in sizes {
        let spec = InputSpec::uniform(size, range.0, range.1);
        println!("n = {}", size);

        let variants: Vec<Variant> = algo
            .variant_closures(&spec, seed)
            .into_iter()
            .map(|c| Variant {
                name: c.name,
                description: c.description,
                run: c.run,
            })
            .collect();

        let mut results = measure_variants(variants, config);
        results.sort_by(|a, b| {
            // Keep the reference variant on top so speedups read naturally.
            (a.name != "baseline").cmp(&(b.name != "baseline"))
        });
        print_timing_table(&results);

        let records = algo.scan_records(&spec, 1, seed);
        print_operation_table(&records);
    }
}

/// Walk through the classic example array with the reference variant.
pub fn print_demo() {
    use crate::array::max_subarray::max_subarray_baseline;

    let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];

    println!("Test Array:");
    println!("{:?}", input);

    let result = max_subarray_baseline(&input).expect("demo input is non-empty");

    println!();
    println!("Result: {}", result);
    print!("Subarray: ");
    for value in &input[result.start()..=result.end()] {
        print!("{} ", value);
    }
    println!();
    println!();
    println!("Metrics: {}", result.metrics());
}
