//! `skillrank recommend` - rank courses for a set of skills
//!
//! - Skills are normalized (trimmed, lowercased, blanks dropped); an empty
//!   set is a usage error
//! - A fresh colony is built for every invocation, so pheromones never carry
//!   over between requests
//! - Flags override the colony parameters from `config.toml`
//! - Shown courses are registered in the feedback store

pub mod format;

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cli::args::RecommendArgs;
use crate::cli::Cli;
use crate::output_by_format_result;
use skillrank_core::candidate::Course;
use skillrank_core::colony::{AntColony, ColonyConfig};
use skillrank_core::error::Result;
use skillrank_core::format::format_score;
use skillrank_core::query::Query;
use skillrank_core::ranking::RankedCandidate;
use skillrank_core::store::Store;

use self::format::{output_human, output_json, output_records};

/// Placeholder for optional course fields
const NOT_AVAILABLE: &str = "N/A";

/// One recommended course as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub course_id: u64,
    pub course_name: String,
    pub course_provided_by: String,
    /// Lowercase skills in alphabetical order, comma separated
    pub skills: String,
    pub course_rating: String,
    pub course_url: String,
    pub match_score: String,
}

impl Recommendation {
    fn from_ranked(entry: &RankedCandidate<'_, Course>) -> Self {
        let course = entry.candidate;
        Recommendation {
            course_id: course.id,
            course_name: course.name.clone(),
            course_provided_by: course.provider.clone(),
            skills: course.skills_display(),
            course_rating: course
                .rating
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            course_url: course.url.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            match_score: format_score(entry.score),
        }
    }
}

/// Apply command-line overrides on top of the configured colony parameters
pub fn colony_config(base: &ColonyConfig, args: &RecommendArgs) -> ColonyConfig {
    let mut config = *base;
    if let Some(ants) = args.ants {
        config = config.with_ants(ants);
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(alpha) = args.alpha {
        config = config.with_alpha(alpha);
    }
    if let Some(beta) = args.beta {
        config = config.with_beta(beta);
    }
    if let Some(rate) = args.evaporation {
        config = config.with_evaporation_rate(rate);
    }
    config
}

/// Execute the recommend command
pub fn execute(cli: &Cli, store: &Store, args: &RecommendArgs) -> Result<()> {
    let start = Instant::now();

    let query = Query::from_args(&args.skills)?;
    let config = colony_config(&store.config().colony, args);
    config.validate()?;
    let limit = args.limit.unwrap_or(store.config().limit);

    let corpus = store.load_corpus(args.corpus.as_deref())?;

    if cli.verbose {
        debug!(
            query = %query,
            courses = corpus.len(),
            ?config,
            limit,
            seed = ?args.seed,
            elapsed = ?start.elapsed(),
            "recommend_params"
        );
    }

    let mut colony = match args.seed {
        Some(seed) => AntColony::with_seed(&corpus, config, seed)?,
        None => AntColony::new(&corpus, config)?,
    };
    let ranking = colony.run(&query);

    let recommendations: Vec<Recommendation> = ranking
        .top(limit)
        .iter()
        .map(Recommendation::from_ranked)
        .collect();

    if cli.verbose {
        debug!(
            ranked = ranking.len(),
            shown = recommendations.len(),
            elapsed = ?start.elapsed(),
            "recommend"
        );
    }

    let mut feedback = store.load_feedback()?;
    let mut registered = false;
    for recommendation in &recommendations {
        registered |= feedback.register(recommendation.course_id);
    }
    if registered {
        store.save_feedback(&feedback)?;
    }

    output_by_format_result!(cli.format,
        json => output_json(&recommendations),
        human => { output_human(cli, &recommendations, &query); },
        records => { output_records(&recommendations, &query, ranking.len()); }
    )
}
