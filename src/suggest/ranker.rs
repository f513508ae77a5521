//! Single-scope ranking: top-N truncation and score rounding.

use super::Candidate;

/// Rounds to one decimal place, half up (half toward positive infinity).
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 10.0 + 0.5).floor() / 10.0
}

/// Truncates a sorted candidate list to the top `top_n` entries and
/// rounds their scores for presentation.
pub(crate) fn rank(mut candidates: Vec<Candidate>, top_n: usize) -> Vec<Candidate> {
    candidates.truncate(top_n);
    for candidate in &mut candidates {
        candidate.score = round_score(candidate.score);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Slot};
    use chrono::NaiveTime;

    fn candidate(id: &str, score: f64) -> Candidate {
        Candidate {
            slot: Slot::new(
                id,
                Day::Mon,
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            ),
            score,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_score(8.74), 8.7);
        assert_eq!(round_score(8.75), 8.8);
        assert_eq!(round_score(-0.25), -0.2); // half toward +inf
        assert_eq!(round_score(-0.26), -0.3);
        assert_eq!(round_score(0.0), 0.0);
    }

    #[test]
    fn test_rank_truncates() {
        let candidates: Vec<Candidate> = (0..12)
            .map(|i| candidate(&format!("s{i}"), 100.0 - i as f64))
            .collect();

        let ranked = rank(candidates, 8);
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].slot.id, "s0");
        assert_eq!(ranked[7].slot.id, "s7");
    }

    #[test]
    fn test_rank_rounds_scores() {
        let ranked = rank(vec![candidate("s1", 8.6999999)], 8);
        assert_eq!(ranked[0].score, 8.7);
    }

    #[test]
    fn test_rank_shorter_than_top_n() {
        let ranked = rank(vec![candidate("s1", 1.0)], 8);
        assert_eq!(ranked.len(), 1);
    }
}
