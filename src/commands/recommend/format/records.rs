//! Records output formatting for recommend command

use super::super::Recommendation;
use skillrank_core::format::escape_quotes;
use skillrank_core::query::Query;

/// Output in records format
pub fn output_records(recommendations: &[Recommendation], query: &Query, ranked: usize) {
    println!(
        "H skillrank=1 records=1 mode=recommend query=\"{}\" ranked={} results={}",
        escape_quotes(&query.to_string()),
        ranked,
        recommendations.len()
    );

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "R {} {} score={} \"{}\" provider=\"{}\" skills=\"{}\"",
            rank + 1,
            rec.course_id,
            rec.match_score,
            escape_quotes(&rec.course_name),
            escape_quotes(&rec.course_provided_by),
            escape_quotes(&rec.skills)
        );
    }
}
