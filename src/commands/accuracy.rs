//! `skillrank accuracy` - report recommendation accuracy
//!
//! Each call with tracked courses appends a snapshot to the history, so the
//! history grows by one point per report.

use crate::cli::Cli;
use crate::output_by_format_result;
use skillrank_core::error::Result;
use skillrank_core::store::Store;

/// Execute the accuracy command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let mut feedback = store.load_feedback()?;

    let accuracy = match feedback.snapshot() {
        Some(accuracy) => {
            store.save_feedback(&feedback)?;
            accuracy
        }
        None => 0.0,
    };
    let history: Vec<f64> = feedback.history().iter().map(|p| p.accuracy).collect();

    output_by_format_result!(cli.format,
        json => {
            let points: Vec<_> = feedback
                .history()
                .iter()
                .map(|p| serde_json::json!({ "at": p.at.to_rfc3339(), "accuracy": p.accuracy }))
                .collect();
            let output = serde_json::json!({
                "accuracy": accuracy,
                "history": history,
                "points": points,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if feedback.is_empty() {
                if !cli.quiet {
                    println!("No feedback recorded yet");
                }
            } else {
                println!("Accuracy: {:.1}%", accuracy);
                if !cli.quiet {
                    let rendered: Vec<String> = history.iter().map(|a| format!("{:.1}", a)).collect();
                    println!("History ({} points): {}", history.len(), rendered.join(" "));
                }
            }
        },
        records => {
            println!(
                "H skillrank=1 records=1 mode=accuracy accuracy={:.2} points={}",
                accuracy,
                history.len()
            );
            for point in feedback.history() {
                println!("A {} {:.2}", point.at.to_rfc3339(), point.accuracy);
            }
        }
    )
}
