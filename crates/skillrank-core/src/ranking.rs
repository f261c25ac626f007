//! Ranked output of a colony run

use crate::candidate::Candidate;

/// One candidate in a ranking, paired with its accumulated score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate<'a, C> {
    pub candidate: &'a C,
    /// Position of the candidate in the corpus
    pub index: usize,
    /// Raw selection count accumulated over all iterations
    pub score: f64,
}

/// Candidates with a strictly positive score, ordered by descending score
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a, C> {
    entries: Vec<RankedCandidate<'a, C>>,
}

impl<'a, C: Candidate> Ranking<'a, C> {
    /// Build a ranking from an index-aligned score vector.
    ///
    /// Zero scores are dropped. The sort is stable, so tied candidates keep
    /// their corpus order.
    pub fn from_scores(corpus: &'a [C], scores: &[f64]) -> Self {
        let mut entries: Vec<RankedCandidate<'a, C>> = corpus
            .iter()
            .zip(scores)
            .enumerate()
            .filter(|(_, (_, score))| **score > 0.0)
            .map(|(index, (candidate, score))| RankedCandidate {
                candidate,
                index,
                score: *score,
            })
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ranking { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate<'a, C>> {
        self.entries.iter()
    }

    /// The best `limit` entries
    pub fn top(&self, limit: usize) -> &[RankedCandidate<'a, C>] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Ranked candidates, in order
    pub fn candidates(&self) -> Vec<&'a C> {
        self.entries.iter().map(|e| e.candidate).collect()
    }

    /// Scores, index-aligned with [`Ranking::candidates`]
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }
}

impl<'a, C> IntoIterator for Ranking<'a, C> {
    type Item = RankedCandidate<'a, C>;
    type IntoIter = std::vec::IntoIter<RankedCandidate<'a, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Course;

    fn corpus() -> Vec<Course> {
        (0..4).map(|i| Course::new(i, ["t"])).collect()
    }

    #[test]
    fn test_filters_zero_scores_and_sorts_descending() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(&corpus, &[3.0, 0.0, 7.0, 1.0]);

        let ids: Vec<u64> = ranking.candidates().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 0, 3]);
        assert_eq!(ranking.scores(), vec![7.0, 3.0, 1.0]);
        assert!(ranking.iter().all(|e| corpus[e.index].id == e.candidate.id));
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(&corpus, &[2.0, 5.0, 2.0, 2.0]);
        let ids: Vec<u64> = ranking.candidates().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_top_clamps_to_len() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(&corpus, &[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(ranking.top(5).len(), 2);
        assert_eq!(ranking.top(1)[0].candidate.id, 1);
        assert!(ranking.top(0).is_empty());
    }

    #[test]
    fn test_all_zero_is_empty() {
        let corpus = corpus();
        let ranking = Ranking::from_scores(&corpus, &[0.0; 4]);
        assert!(ranking.is_empty());
        assert_eq!(ranking.len(), 0);
    }
}
