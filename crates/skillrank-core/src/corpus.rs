//! Course corpus loading
//!
//! Supported files:
//! - `.csv` with a header row and the columns `course_name`,
//!   `course_provided_by`, `skills` (a serialized list, see [`crate::tags`]),
//!   and optionally `course_rating` and `course_url`
//! - `.json` with an array of `{name, provider, skills, rating?, url?}`
//!   objects, where `skills` is either an array or a serialized list
//!
//! Course ids are assigned by position, starting at zero.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::debug;

use crate::candidate::{tag_set, Course, TagSet};
use crate::error::{Result, SkillrankError};
use crate::tags::parse_tag_list;
use crate::trace_time;

/// Load a corpus, choosing the reader from the file extension
pub fn load(path: &Path) -> Result<Vec<Course>> {
    let start = Instant::now();

    if !path.exists() {
        return Err(SkillrankError::not_found("corpus", path.display()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let courses = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        other => {
            return Err(SkillrankError::InvalidCorpus {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported extension {:?} (supported: csv, json)",
                    other.unwrap_or("")
                ),
            })
        }
    };

    debug!(path = %path.display(), courses = courses.len(), "load_corpus");
    trace_time!(start, "load_corpus");
    Ok(courses)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    course_name: String,
    #[serde(default)]
    course_provided_by: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    course_rating: Option<String>,
    #[serde(default)]
    course_url: Option<String>,
}

/// Read a CSV corpus from any reader
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Vec<Course>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut courses = Vec::new();

    for (position, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        courses.push(Course {
            id: position as u64,
            name: row.course_name,
            provider: row.course_provided_by,
            skills: parse_tag_list(&row.skills)?,
            rating: non_blank(row.course_rating),
            url: non_blank(row.course_url),
        });
    }

    Ok(courses)
}

fn load_csv(path: &Path) -> Result<Vec<Course>> {
    let file = fs::File::open(path)
        .map_err(|e| SkillrankError::io_operation("open corpus", path.display(), e))?;
    read_csv(file).map_err(|e| with_corpus_path(e, path))
}

/// Attach the corpus path to a parse failure from the underlying reader
fn with_corpus_path(err: SkillrankError, path: &Path) -> SkillrankError {
    match err {
        SkillrankError::Csv(e) => SkillrankError::InvalidCorpus {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        SkillrankError::Json(e) => SkillrankError::InvalidCorpus {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        other => other,
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSkills {
    List(Vec<String>),
    Serialized(String),
}

impl JsonSkills {
    fn into_tags(self) -> Result<TagSet> {
        match self {
            JsonSkills::List(items) => Ok(tag_set(items)),
            JsonSkills::Serialized(text) => parse_tag_list(&text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonCourse {
    name: String,
    #[serde(default)]
    provider: String,
    skills: Option<JsonSkills>,
    #[serde(default)]
    rating: Option<serde_json::Value>,
    #[serde(default)]
    url: Option<String>,
}

/// Parse a JSON corpus from a string
pub fn parse_json(content: &str) -> Result<Vec<Course>> {
    let rows: Vec<JsonCourse> = serde_json::from_str(content)?;

    rows.into_iter()
        .enumerate()
        .map(|(position, row)| {
            let skills = match row.skills {
                Some(skills) => skills.into_tags()?,
                None => TagSet::new(),
            };
            Ok(Course {
                id: position as u64,
                name: row.name,
                provider: row.provider,
                skills,
                rating: row.rating.and_then(rating_text),
                url: non_blank(row.url),
            })
        })
        .collect()
}

fn load_json(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path)
        .map_err(|e| SkillrankError::io_operation("read corpus", path.display(), e))?;
    parse_json(&content).map_err(|e| with_corpus_path(e, path))
}

fn rating_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => non_blank(Some(s)),
        other => Some(other.to_string()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
