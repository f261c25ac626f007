use proptest::prelude::*;
use skillrank_core::candidate::Course;
use skillrank_core::colony::{AntColony, ColonyConfig};
use skillrank_core::heuristic;
use skillrank_core::query::Query;

const VOCABULARY: &[&str] = &["python", "sql", "rust", "statistics", "excel", "go"];

fn arb_corpus() -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..4),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, tags)| Course::new(i as u64, tags))
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = Query> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 1..4)
        .prop_map(|tags| Query::parse(tags).unwrap())
}

fn arb_config() -> impl Strategy<Value = ColonyConfig> {
    (1usize..60, 1usize..5, 0.0f64..3.0, 0.0f64..3.0, 0.0f64..=1.0).prop_map(
        |(ants, iterations, alpha, beta, rho)| {
            ColonyConfig::new(ants, iterations, alpha, beta, rho).unwrap()
        },
    )
}

// ── Heuristic stays within [0, 1] ────────────────────────────────────────

proptest! {
    #[test]
    fn heuristic_is_bounded(corpus in arb_corpus(), query in arb_query()) {
        for h in heuristic::relevance(&query, &corpus) {
            prop_assert!((0.0..=1.0).contains(&h));
        }
    }
}

// ── Pheromones and scores never go negative ──────────────────────────────

proptest! {
    #[test]
    fn pheromones_and_scores_non_negative(
        corpus in arb_corpus(),
        query in arb_query(),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let mut colony = AntColony::with_seed(&corpus, config, seed).unwrap();
        let ranking = colony.run(&query);

        prop_assert!(colony.pheromones().iter().all(|p| *p >= 0.0));
        prop_assert!(ranking.scores().iter().all(|s| *s > 0.0));
    }
}

// ── Ranking is sorted and only holds matching candidates ─────────────────

proptest! {
    #[test]
    fn ranking_sorted_and_relevant(
        corpus in arb_corpus(),
        query in arb_query(),
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        // With beta > 0 a zero heuristic means a zero weight
        prop_assume!(config.beta > 0.0);

        let h = heuristic::relevance(&query, &corpus);
        let mut colony = AntColony::with_seed(&corpus, config, seed).unwrap();
        let ranking = colony.run(&query);

        let scores = ranking.scores();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        for entry in ranking.iter() {
            prop_assert!(h[entry.index] > 0.0);
        }

        let total: f64 = scores.iter().sum();
        let expected = if h.iter().any(|v| *v > 0.0) {
            (config.num_ants * config.num_iterations) as f64
        } else {
            0.0
        };
        prop_assert_eq!(total, expected);
    }
}

// ── Iterations with no draws only evaporate ──────────────────────────────

proptest! {
    #[test]
    fn no_draws_means_pure_evaporation(
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        prop_assume!(config.beta > 0.0);
        let corpus = vec![Course::new(0, ["x"]), Course::new(1, ["y"])];
        let query = Query::parse(["q"]).unwrap();

        let mut colony = AntColony::with_seed(&corpus, config, seed).unwrap();
        let before = colony.pheromones().to_vec();
        colony.run(&query);

        let mut expected = before;
        for _ in 0..config.num_iterations {
            for p in expected.iter_mut() {
                *p *= 1.0 - config.evaporation_rate;
            }
        }
        prop_assert_eq!(colony.pheromones(), expected.as_slice());
    }
}
