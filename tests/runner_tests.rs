use dijkstra_bench::{BenchConfig, BenchmarkRunner, Error, Representation};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn config_validation_happens_before_any_timing() {
    assert!(matches!(
        BenchConfig::new(1, 0.5, 3),
        Err(Error::TooFewVertices(1))
    ));
    assert!(matches!(
        BenchConfig::new(10, 1.5, 3),
        Err(Error::InvalidDensity(_))
    ));
    assert!(matches!(BenchConfig::new(10, 0.5, 0), Err(Error::NoTrials)));
    assert!(BenchConfig::new(2, 0.0, 1).is_ok());
}

#[test]
fn runner_reports_means_for_both_representations() {
    let runner = BenchmarkRunner::new();
    let config = BenchConfig::new(30, 0.6, 4).unwrap();

    for representation in [Representation::List, Representation::Matrix] {
        let mut rng = StdRng::seed_from_u64(500);
        let report = runner.run(representation, &config, &mut rng).unwrap();
        assert_eq!(report.representation, representation);
        assert_eq!(report.vertices, 30);
        assert_eq!(report.trials, 4);
        // Dense 30-vertex graphs are connected, so both modes must have
        // measured something
        assert!(report.mean_to_all.as_nanos() > 0);
        assert!(report.mean_to_one.as_nanos() > 0);
    }
}

#[test]
fn complete_small_graph_supports_diagnostic_run() {
    // V <= 10 with a single trial triggers the verbose path dump; the run
    // must still produce a report
    let runner = BenchmarkRunner::new();
    let config = BenchConfig::new(5, 1.0, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let report = runner.run(Representation::List, &config, &mut rng).unwrap();
    assert_eq!(report.density, 1.0);
}

#[test]
fn edgeless_graph_fails_with_disconnected_error_instead_of_looping() {
    let runner = BenchmarkRunner::new();
    let config = BenchConfig::new(4, 0.0, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    match runner.run(Representation::Matrix, &config, &mut rng) {
        Err(Error::DisconnectedGraph { attempts }) => assert!(attempts > 0),
        other => panic!("expected DisconnectedGraph, got {:?}", other),
    }
}
