//! CLI for running the shape-area benchmarks.
//!
//! Usage:
//!   shape-bench                     # Run all algorithms
//!   shape-bench --list              # List available algorithms
//!   shape-bench total_area          # Run specific algorithm
//!   shape-bench --help              # Show help

use shape_area_bench::registry::build_registry;
use shape_area_bench::utils::timer::TimingConfig;
use shape_area_bench::utils::tui;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    // Article's reference configuration is 1,000,000 shapes x 100 runs;
    // smaller sizes show where the collector's cache residency flips.
    let mut sizes: Vec<usize> = vec![4096, 65536, 1_000_000];
    let mut iterations: usize = 100;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--iter" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(100);
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
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let config = TimingConfig {
        runs_per_variant: iterations,
        schedule_seed: seed,
        ..TimingConfig::default()
    };

    tui::print_header();

    match algorithm_filter {
        Some(name) => match registry.find(&name) {
            Some(algo) => tui::run_and_display(algo, &sizes, &config),
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => {
            let all_algos: Vec<_> = registry.all().iter().map(|a| a.as_ref()).collect();
            tui::run_all_algorithms(&all_algos, &sizes, &config, csv_path.as_deref());
        }
    }

    println!("Note: Speedup is relative to the first strategy (the dynamic-dispatch reference).");
}
