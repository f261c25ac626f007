//! `skillrank courses` - list the corpus

use std::path::Path;

use crate::cli::Cli;
use crate::output_by_format_result;
use skillrank_core::candidate::{normalize_tag, Course};
use skillrank_core::error::Result;
use skillrank_core::format::escape_quotes;
use skillrank_core::store::Store;

/// Execute the courses command
pub fn execute(
    cli: &Cli,
    store: &Store,
    corpus: Option<&Path>,
    tag: Option<&str>,
) -> Result<()> {
    let courses = store.load_corpus(corpus)?;
    let tag = tag.and_then(normalize_tag);

    let selected: Vec<&Course> = courses
        .iter()
        .filter(|c| tag.as_ref().map_or(true, |t| c.skills.contains(t)))
        .collect();

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&selected)?);
            Ok(())
        },
        human => {
            if selected.is_empty() && !cli.quiet {
                println!("No courses found");
            }
            for course in &selected {
                println!("{:>5} {} ({})", course.id, course.name, course.provider);
                if cli.verbose {
                    println!("      skills: {}", course.skills_display());
                }
            }
        },
        records => {
            println!("H skillrank=1 records=1 mode=courses results={}", selected.len());
            for course in &selected {
                println!(
                    "C {} \"{}\" provider=\"{}\" skills={}",
                    course.id,
                    escape_quotes(&course.name),
                    escape_quotes(&course.provider),
                    skills_csv(course)
                );
            }
        }
    )
}

/// Comma-joined skills, or `-` when there are none
fn skills_csv(course: &Course) -> String {
    if course.skills.is_empty() {
        "-".to_string()
    } else {
        course
            .skills
            .iter()
            .map(|s| s.replace(' ', "_"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
