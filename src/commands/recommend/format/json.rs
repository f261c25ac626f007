//! JSON output formatting for recommend command

use super::super::Recommendation;
use skillrank_core::error::Result;

/// Output in JSON format
pub fn output_json(recommendations: &[Recommendation]) -> Result<()> {
    let output = serde_json::json!({ "recommendations": recommendations });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
