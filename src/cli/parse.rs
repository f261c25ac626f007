use skillrank_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a strictly positive count
pub fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Parse an evaporation rate in [0, 1]
pub fn parse_evaporation_rate(s: &str) -> std::result::Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{} is not within 0.0-1.0", rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("3"), Ok(3));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
    }

    #[test]
    fn test_parse_evaporation_rate() {
        assert_eq!(parse_evaporation_rate("0.25"), Ok(0.25));
        assert_eq!(parse_evaporation_rate("1"), Ok(1.0));
        assert!(parse_evaporation_rate("1.5").is_err());
        assert!(parse_evaporation_rate("abc").is_err());
    }
}
