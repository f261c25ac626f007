//! `skillrank feedback` - record feedback on a recommendation

use crate::cli::Cli;
use crate::output_by_format_result;
use skillrank_core::error::Result;
use skillrank_core::feedback::parse_feedback_value;
use skillrank_core::store::Store;

/// Execute the feedback command
pub fn execute(cli: &Cli, store: &Store, course_id: u64, value: &str) -> Result<()> {
    let positive = parse_feedback_value(value);

    let mut feedback = store.load_feedback()?;
    let entry = feedback.record(course_id, positive);
    store.save_feedback(&feedback)?;

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "message": "Feedback received!",
                "course_id": course_id,
                "positive": positive,
                "course_positive": entry.positive,
                "course_total": entry.total,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                println!(
                    "Feedback received for course {} ({}, {}/{} positive)",
                    course_id,
                    if positive { "positive" } else { "negative" },
                    entry.positive,
                    entry.total
                );
            }
        },
        records => {
            println!(
                "F {} positive={} course_positive={} course_total={}",
                course_id, positive, entry.positive, entry.total
            );
        }
    )
}
