//! Ranker - Competition ranking of closeness scores.

/// Converts scores to ranks using the "min" tie method.
pub struct Ranker;

impl Ranker {
    /// Ranks scores in descending order, 1 being best.
    ///
    /// Tied scores share the lowest rank of their group and the next
    /// distinct score skips ahead: scores `[0.9, 0.9, 0.5]` rank `[1, 1, 3]`.
    /// Output order matches input order.
    pub fn rank(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut ranks = vec![0; scores.len()];
        let mut group_rank = 0;
        for (position, &index) in order.iter().enumerate() {
            let tied_with_previous =
                position > 0 && scores[order[position - 1]] == scores[index];
            if !tied_with_previous {
                group_rank = position + 1;
            }
            ranks[index] = group_rank;
        }
        ranks
    }
}
