//! End-to-end runs driven through the request-facing parameters.

use realga::ga::{self, function_label, GaParams, GaRunner, Objective};

fn params(function_type: &str) -> GaParams {
    GaParams {
        function_type: function_type.into(),
        ..GaParams::default()
    }
}

#[test]
fn test_quadratic_reaches_optimum_across_seeds() {
    let mut hits = 0;
    for seed in 0..10 {
        let report = ga::run(&GaParams {
            seed: Some(seed),
            ..params("simple_quadratic")
        })
        .unwrap();
        if report.best_fitness > 9.5 {
            hits += 1;
        }
    }
    assert!(hits >= 9, "only {hits}/10 runs exceeded 9.5");
}

#[test]
fn test_every_objective_terminates_with_its_dimensionality() {
    for (name, dims) in [
        ("simple_quadratic", 1),
        ("complex", 2),
        ("rastrigin", 2),
        ("not_a_function", 1),
    ] {
        let report = ga::run(&GaParams {
            population_size: 2,
            num_generations: 3,
            seed: Some(17),
            ..params(name)
        })
        .unwrap();
        assert_eq!(report.best_individual.len(), dims, "{name}");
        assert_eq!(report.generation_stats.len(), 3, "{name}");
    }
}

#[test]
fn test_complex_approaches_two() {
    let report = ga::run(&GaParams {
        seed: Some(3),
        ..params("complex")
    })
    .unwrap();
    assert!(report.best_fitness <= 2.0);
    assert!(report.best_fitness > 1.7, "got {}", report.best_fitness);
}

#[test]
fn test_no_variation_keeps_parent_genes() {
    let config = GaParams {
        function_type: "rastrigin".into(),
        population_size: 9,
        num_generations: 1,
        mutation_rate: 0.0,
        crossover_rate: 0.0,
        seed: Some(12),
        ..GaParams::default()
    }
    .to_config()
    .unwrap();

    let mut runner = GaRunner::new(config).unwrap();
    let before = runner.population().to_vec();
    runner.step();
    for ind in runner.population() {
        assert!(before.contains(ind));
    }
}

#[test]
fn test_invalid_params_surface_config_error() {
    let err = ga::run(&GaParams {
        min_value: 1.0,
        max_value: 1.0,
        ..GaParams::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("must be less than"));

    let err = ga::run(&GaParams {
        num_generations: 0,
        ..GaParams::default()
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "num_generations must be at least 1");
}

#[test]
fn test_labels() {
    assert_eq!(
        function_label("simple_quadratic"),
        Objective::SimpleQuadratic.label()
    );
    assert_eq!(function_label("complex"), Objective::Complex.label());
    assert_eq!(function_label("rastrigin"), Objective::Rastrigin.label());
    assert_eq!(function_label("anything"), "Unknown function");

    let report = ga::run(&GaParams {
        num_generations: 1,
        seed: Some(1),
        ..params("rastrigin")
    })
    .unwrap();
    assert_eq!(report.function_name(), function_label("rastrigin"));
}

#[test]
fn test_concurrent_runs_are_independent() {
    let p = GaParams {
        seed: Some(77),
        ..params("complex")
    };
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = p.clone();
            std::thread::spawn(move || ga::run(&p).unwrap())
        })
        .collect();
    let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &reports[1..] {
        assert_eq!(r, &reports[0]);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes() {
    let report = ga::run(&GaParams {
        num_generations: 2,
        seed: Some(5),
        ..params("complex")
    })
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["objective"], "complex");
    assert_eq!(json["generation_stats"].as_array().unwrap().len(), 2);
    assert_eq!(json["generation_stats"][0]["generation"], 1);
    assert!(json["generation_stats"][0]["avg_fitness"].is_number());

    let params: GaParams =
        serde_json::from_str(r#"{"function_type": "rastrigin", "mutation_rate": 5}"#).unwrap();
    assert_eq!(params.population_size, 50);
    assert_eq!(params.objective(), Objective::Rastrigin);
}
