//! User skill queries

use crate::candidate::{normalize_tag, TagSet};
use crate::error::{Result, SkillrankError};

/// A normalized, non-empty set of skill tags supplied by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tags: TagSet,
}

impl Query {
    /// Build a query from raw strings.
    ///
    /// Each piece is trimmed and lowercased; blank pieces are dropped.
    /// Returns [`SkillrankError::EmptyQuery`] if nothing usable remains.
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: TagSet = raw
            .into_iter()
            .filter_map(|s| normalize_tag(s.as_ref()))
            .collect();

        if tags.is_empty() {
            return Err(SkillrankError::EmptyQuery);
        }
        Ok(Query { tags })
    }

    /// Build a query from a comma-separated list, e.g. `"Python, SQL"`
    pub fn from_csv(raw: &str) -> Result<Self> {
        Self::parse(raw.split(','))
    }

    /// Build a query from arguments that may themselves be comma separated
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        Self::parse(args.iter().flat_map(|a| a.as_ref().split(',')))
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Number of tags this query shares with `other`
    pub fn overlap(&self, other: &TagSet) -> usize {
        // Iterate the smaller set
        if self.tags.len() <= other.len() {
            self.tags.iter().filter(|t| other.contains(*t)).count()
        } else {
            other.iter().filter(|t| self.tags.contains(*t)).count()
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(f, "{}", joined.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::tag_set;

    #[test]
    fn test_parse_normalizes() {
        let query = Query::from_csv(" Python ,SQL,, ").unwrap();
        let tags: Vec<&str> = query.tags().iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["python", "sql"]);
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            Query::from_csv(" , ,"),
            Err(SkillrankError::EmptyQuery)
        ));
        assert!(matches!(
            Query::parse(Vec::<String>::new()),
            Err(SkillrankError::EmptyQuery)
        ));
    }

    #[test]
    fn test_from_args_splits_commas() {
        let query = Query::from_args(&["python,sql", "Data Analysis"]).unwrap();
        assert_eq!(query.tags().len(), 3);
        assert!(query.tags().contains("data analysis"));
    }

    #[test]
    fn test_overlap() {
        let query = Query::from_csv("a,b,c").unwrap();
        assert_eq!(query.overlap(&tag_set(["b", "c", "d"])), 2);
        assert_eq!(query.overlap(&tag_set(["x"])), 0);
        assert_eq!(query.overlap(&TagSet::new()), 0);
    }

    #[test]
    fn test_display() {
        let query = Query::from_csv("sql,python").unwrap();
        assert_eq!(query.to_string(), "python,sql");
    }
}
