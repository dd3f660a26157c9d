use rand::rngs::StdRng;
use rand::SeedableRng;

use dijkstra_bench::bench::report;
use dijkstra_bench::{BenchConfig, BenchReport, BenchmarkRunner, Representation};

/// Sweep used when no arguments are given: every (V, D) pair below runs
/// against both representations.
const VERTEX_COUNTS: [usize; 3] = [100, 500, 1_000];
const DENSITIES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const DEFAULT_TRIALS: usize = 10;

/// Optional positional overrides: `benchmark [V D N]`.
fn parse_configs() -> Result<Vec<BenchConfig>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let mut configs = Vec::new();
            for &vertices in &VERTEX_COUNTS {
                for &density in &DENSITIES {
                    configs.push(
                        BenchConfig::new(vertices, density, DEFAULT_TRIALS)
                            .map_err(|e| e.to_string())?,
                    );
                }
            }
            Ok(configs)
        }
        [v, d, n] => {
            let vertices: usize = v.parse().map_err(|_| format!("bad vertex count: {}", v))?;
            let density: f64 = d.parse().map_err(|_| format!("bad density: {}", d))?;
            let trials: usize = n.parse().map_err(|_| format!("bad trial count: {}", n))?;
            Ok(vec![
                BenchConfig::new(vertices, density, trials).map_err(|e| e.to_string())?
            ])
        }
        _ => Err("usage: benchmark [vertices density trials]".to_string()),
    }
}

fn main() {
    env_logger::init();

    let configs = match parse_configs() {
        Ok(configs) => configs,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    let runner = BenchmarkRunner::new();
    let mut rng = StdRng::from_entropy();
    let mut reports = Vec::new();

    println!("=====================================================");
    println!("Benchmark: Dijkstra on adjacency list vs adjacency matrix");
    println!("Edge weights uniform in [1, 20]");
    println!("=====================================================");

    for config in &configs {
        for representation in [Representation::List, Representation::Matrix] {
            match runner.run(representation, config, &mut rng) {
                Ok(bench_report) => {
                    println!("{}", bench_report);
                    reports.push(bench_report);
                }
                Err(error) => {
                    eprintln!(
                        "{} |V| = {} D = {} failed: {}",
                        representation, config.vertices, config.density, error
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    print_comparison(&reports);
}

fn print_comparison(reports: &[BenchReport]) {
    report::print_summary(reports);

    // Pair up list/matrix reports for the same configuration
    println!("\nList vs matrix speedup (to-all):");
    for pair in reports.chunks(2) {
        if let [list, matrix] = pair {
            let speedup = matrix.mean_to_all.as_secs_f64() / list.mean_to_all.as_secs_f64();
            println!(
                "|V| = {:<6} D = {:<5}: list is {:.2}x vs matrix",
                list.vertices, list.density, speedup
            );
        }
    }
}
