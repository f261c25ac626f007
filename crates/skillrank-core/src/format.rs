//! Output format handling for skillrank
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillrankError;

/// Output format for skillrank commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output, one line per item
    Records,
}

impl FromStr for OutputFormat {
    type Err = SkillrankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(SkillrankError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape double quotes for embedding in a quoted records field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Render a selection count the way recommendations display it
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("records".parse::<OutputFormat>().unwrap(), OutputFormat::Records);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(SkillrankError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"The "Best" Course"#), r#"The \"Best\" Course"#);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(412.0), "412.00");
        assert_eq!(format_score(0.5), "0.50");
    }
}
