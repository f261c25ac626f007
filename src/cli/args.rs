//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_evaporation_rate, parse_positive};

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Corpus file to record in the store configuration
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

/// Arguments for the recommend command.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Skills to match (comma separated or repeated)
    #[arg(required = true, num_args = 1..)]
    pub skills: Vec<String>,

    /// Corpus file (overrides the store configuration)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Maximum number of recommendations
    #[arg(long, short = 'n', value_parser = parse_positive)]
    pub limit: Option<usize>,

    /// Seed for reproducible rankings
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draws per iteration
    #[arg(long, value_parser = parse_positive)]
    pub ants: Option<usize>,

    /// Evaporate/reinforce cycles
    #[arg(long, value_parser = parse_positive)]
    pub iterations: Option<usize>,

    /// Pheromone exponent
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Heuristic exponent
    #[arg(long)]
    pub beta: Option<f64>,

    /// Fraction of pheromone lost per iteration (0.0-1.0)
    #[arg(long, value_parser = parse_evaporation_rate)]
    pub evaporation: Option<f64>,
}

/// Arguments for the feedback command.
#[derive(Args, Debug)]
pub struct FeedbackArgs {
    /// Course ID as shown by `recommend`
    pub course_id: u64,

    /// Feedback value: 1/positive/yes/true count as positive, anything else as negative
    pub value: String,
}

/// Arguments for the courses command.
#[derive(Args, Debug)]
pub struct CoursesArgs {
    /// Only list courses teaching this skill
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Corpus file (overrides the store configuration)
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}
