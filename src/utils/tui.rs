//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::runner;
use crate::utils::timer::TimingConfig;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Get sorting priority for a variant based on its name.
/// Lower values sort first.
/// Order: dynamic reference (0), other scalar strategies (1), SIMD (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "dynamic" {
        (0, String::new())
    } else if name.contains("simd") || name.contains("avx") || name.contains("neon") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: the dynamic-dispatch reference first, SIMD last
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Strategies: {}", variants_str);

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

/// Print results table for a single dataset size.
///
/// Speedup and relative error are reported against the first variant in the
/// (sorted) list, normally the dynamic-dispatch reference.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(18);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);

    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Shapes: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Strategy",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = baseline_time / result.avg_time.as_nanos() as f64;

        let avg_ns = result.avg_time.as_nanos() as f64;
        let std_dev_ns = result.std_dev.as_nanos() as f64;

        let cv = if avg_ns > 0.0 {
            std_dev_ns / avg_ns
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        let time_str = crate::utils::bench::format_measurement(result.avg_time);
        let min_str = crate::utils::bench::format_measurement(result.min_time);
        let max_str = crate::utils::bench::format_measurement(result.max_time);

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            time_str,
            min_str,
            max_str,
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }

    if let Some(sample) = baseline_result {
        println!("  Result sample: {}", sample);
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Shape-Area Dispatch Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: shape-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available algorithms");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated shape counts (default: 4096,65536,1000000)");
    println!("  --iter N       Number of measurement runs per strategy (default: 100)");
    println!("  --seed N       Random seed for the measurement schedule (default: time-based)");
    println!("  --csv PATH     Export raw timings to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM      Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  shape-bench                     # Run all algorithms");
    println!("  shape-bench total_area          # Run only total_area");
    println!("  shape-bench --list              # List algorithms");
    println!("  shape-bench --sizes 1000000     # Article's reference size");
    println!("  shape-bench --seed 12345        # Reproducible schedule");
    println!("  shape-bench --csv data.csv      # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<24} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

/// Run multiple algorithms and display results.
/// If csv_path is provided, also exports raw data to CSV.
pub fn run_all_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
    csv_path: Option<&str>,
) {
    let grouped = runner::run_all_algorithms(algorithms, sizes, config);

    if let Some(path) = csv_path {
        match runner::export_csv(path, &grouped.raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    for (algo_idx, algo) in algorithms.iter().enumerate() {
        print_algo_info_box(*algo);

        for (size_idx, &size) in sizes.iter().enumerate() {
            let mut variant_results = grouped.results[algo_idx][size_idx].clone();
            sort_variants(&mut variant_results);

            if !variant_results.is_empty() {
                print_results_table(&variant_results, size, config.runs_per_variant);
            }
        }
    }
}

/// Run a single algorithm benchmark and display results
pub fn run_and_display(algo: &dyn AlgorithmRunner, sizes: &[usize], config: &TimingConfig) {
    print_algo_info_box(algo);

    for &size in sizes {
        let mut results = runner::run_algorithm(algo, size, config);
        sort_variants(&mut results);
        print_results_table(&results, size, config.runs_per_variant);
    }
}
