//! Static relevance heuristic
//!
//! Scores each candidate by the share of its own tags covered by the query:
//! `|query ∩ tags| / |tags|`, or `0` for a tagless candidate. This rewards
//! candidates whose whole tag set falls inside the query.

use crate::candidate::Candidate;
use crate::query::Query;

/// Desirability of a single tag set for `query`
pub fn score<C: Candidate>(query: &Query, candidate: &C) -> f64 {
    let tags = candidate.tags();
    if tags.is_empty() {
        return 0.0;
    }
    query.overlap(tags) as f64 / tags.len() as f64
}

/// Heuristic vector for the whole corpus, index-aligned with `corpus`
pub fn relevance<C: Candidate>(query: &Query, corpus: &[C]) -> Vec<f64> {
    corpus.iter().map(|c| score(query, c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Course;

    #[test]
    fn test_partial_overlap() {
        let query = Query::from_csv("a").unwrap();
        let corpus = vec![Course::new(0, ["a", "b"])];
        assert_eq!(relevance(&query, &corpus), vec![0.5]);
    }

    #[test]
    fn test_tagless_candidate_scores_zero() {
        let query = Query::from_csv("a,b").unwrap();
        let corpus = vec![Course::new(0, Vec::<&str>::new())];
        assert_eq!(relevance(&query, &corpus), vec![0.0]);
    }

    #[test]
    fn test_subset_scores_one() {
        let query = Query::from_csv("python,sql,excel").unwrap();
        let corpus = vec![
            Course::new(0, ["python"]),
            Course::new(1, ["python", "sql"]),
            Course::new(2, ["python", "java", "go", "rust"]),
        ];
        assert_eq!(relevance(&query, &corpus), vec![1.0, 1.0, 0.25]);
    }

    #[test]
    fn test_disjoint_query_is_all_zero() {
        let query = Query::from_csv("q").unwrap();
        let corpus = vec![
            Course::new(0, ["x"]),
            Course::new(1, ["y"]),
            Course::new(2, ["z"]),
        ];
        assert!(relevance(&query, &corpus).iter().all(|h| *h == 0.0));
    }

    #[test]
    fn test_empty_corpus() {
        let query = Query::from_csv("a").unwrap();
        assert!(relevance::<Course>(&query, &[]).is_empty());
    }
}
