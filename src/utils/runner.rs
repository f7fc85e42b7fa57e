//! Benchmark driver: runs registry algorithms across dataset sizes and
//! exports raw data.

use crate::registry::AlgorithmRunner;
use crate::utils::timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results for a set of algorithms, indexed `[algorithm][size][variant]`,
/// plus the flattened raw rows for CSV export.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<VariantResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every strategy of one algorithm at one dataset size.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    size: usize,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    let variants: Vec<Variant> = algo
        .get_variant_closures(size)
        .into_iter()
        .map(|closure| Variant {
            name: closure.name,
            description: closure.description,
            run: closure.run,
        })
        .collect();

    measure_variants(variants, config)
}

/// Measure all algorithms at all sizes.
pub fn run_all_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
) -> GroupedResults {
    let mut results = Vec::with_capacity(algorithms.len());
    let mut raw_data = Vec::new();

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let variant_results = run_algorithm(*algo, size, config);

            for result in &variant_results {
                raw_data.push(RawTimingData {
                    algo_name: algo.name().to_string(),
                    variant_name: result.name.clone(),
                    input_size: size,
                    avg_nanos: result.avg_nanos_f64 as u64,
                    result_sample: result.result_sample,
                });
            }
            per_size.push(variant_results);
        }
        results.push(per_size);
    }

    GroupedResults { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "algorithm,variant,input_size,avg_time_ns,result")?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.avg_nanos,
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}
