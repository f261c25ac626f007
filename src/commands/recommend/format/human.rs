//! Human-readable output formatting for recommend command

use super::super::Recommendation;
use crate::cli::Cli;
use skillrank_core::query::Query;

/// Output in human-readable format
pub fn output_human(cli: &Cli, recommendations: &[Recommendation], query: &Query) {
    if recommendations.is_empty() {
        if !cli.quiet {
            println!("No courses matched '{}'", query);
        }
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{:>2}. [{}] {} ({}) score={}",
            rank + 1,
            rec.course_id,
            rec.course_name,
            rec.course_provided_by,
            rec.match_score
        );
        if !cli.quiet {
            println!("      skills: {}", rec.skills);
        }
        if cli.verbose {
            println!("      rating: {}  url: {}", rec.course_rating, rec.course_url);
        }
    }
}
