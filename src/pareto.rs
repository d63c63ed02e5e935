use serde::Serialize;

use crate::portfolio::Portfolio;

/// The set of mutually non-dominated portfolios, maintained
/// incrementally one candidate at a time.
///
/// Uniqueness is keyed by the (net return, volatility) pair: a
/// candidate landing on an objective point already in the front is
/// dropped and the first-seen portfolio survives.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ParetoFront {
    members: Vec<Portfolio>,
}

impl ParetoFront {
    pub fn new() -> Self {
        ParetoFront {
            members: Vec::new(),
        }
    }

    /// Reduces a population to its non-dominated subset.
    ///
    /// # Complexity
    /// O(population × front size) worst case; fine at the intended
    /// scale of thousands of candidates and a small front.
    pub fn build(population: Vec<Portfolio>) -> Self {
        let mut front = ParetoFront::new();
        for candidate in population {
            front.insert(candidate);
        }
        front
    }

    /// Offers one candidate to the front. Returns whether it was kept.
    ///
    /// Any member dominating the candidate discards it; otherwise the
    /// candidate evicts every member it dominates and joins the front,
    /// unless its objective point is already taken.
    pub fn insert(&mut self, candidate: Portfolio) -> bool {
        if self.members.iter().any(|member| member.dominates(&candidate)) {
            return false;
        }

        self.members.retain(|member| !candidate.dominates(member));

        if self
            .members
            .iter()
            .any(|member| member.same_objectives(&candidate))
        {
            return false;
        }

        self.members.push(candidate);
        true
    }

    pub fn members(&self) -> &[Portfolio] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Portfolio> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl IntoIterator for ParetoFront {
    type Item = Portfolio;
    type IntoIter = std::vec::IntoIter<Portfolio>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_with(net_return: f64, volatility: f64) -> Portfolio {
        Portfolio {
            weights: vec![1.0],
            net_return,
            volatility,
            transaction_cost: 0.0,
        }
    }

    fn front_points(front: &ParetoFront) -> Vec<(f64, f64)> {
        front
            .iter()
            .map(|p| (p.net_return, p.volatility))
            .collect()
    }

    #[test]
    fn empty_population_builds_empty_front() {
        let front = ParetoFront::build(vec![]);
        assert!(front.is_empty());
    }

    #[test]
    fn dominated_candidate_is_discarded() {
        let risk = 0.1f64.sqrt();
        let front = ParetoFront::build(vec![
            portfolio_with(0.12, risk),
            portfolio_with(0.10, risk),
        ]);
        assert_eq!(front_points(&front), vec![(0.12, risk)]);
    }

    #[test]
    fn candidate_evicts_dominated_members() {
        // Insertion order puts the weaker portfolio in first.
        let mut front = ParetoFront::new();
        assert!(front.insert(portfolio_with(0.10, 0.30)));
        assert!(front.insert(portfolio_with(0.12, 0.25)));
        assert_eq!(front_points(&front), vec![(0.12, 0.25)]);
    }

    #[test]
    fn trade_off_curve_is_kept_whole() {
        let front = ParetoFront::build(vec![
            portfolio_with(0.10, 0.30),
            portfolio_with(0.12, 0.35),
            portfolio_with(0.08, 0.20),
        ]);
        assert_eq!(front.len(), 3);
    }

    #[test]
    fn front_contains_no_dominated_pair() {
        let population: Vec<Portfolio> = [
            (0.10, 0.30),
            (0.12, 0.35),
            (0.08, 0.20),
            (0.11, 0.30),
            (0.10, 0.25),
            (0.05, 0.10),
            (0.12, 0.30),
        ]
        .iter()
        .map(|&(r, v)| portfolio_with(r, v))
        .collect();

        let front = ParetoFront::build(population);
        for a in front.iter() {
            for b in front.iter() {
                assert!(!a.dominates(b));
            }
        }
    }

    #[test]
    fn build_is_idempotent_on_its_own_output() {
        let population: Vec<Portfolio> = [(0.10, 0.30), (0.12, 0.35), (0.08, 0.20), (0.12, 0.30)]
            .iter()
            .map(|&(r, v)| portfolio_with(r, v))
            .collect();

        let front = ParetoFront::build(population);
        let before = front_points(&front);
        let rebuilt = ParetoFront::build(front.members().to_vec());
        assert_eq!(front_points(&rebuilt), before);
    }

    #[test]
    fn identical_portfolios_collapse_to_one() {
        let front = ParetoFront::build(vec![
            portfolio_with(0.10, 0.30),
            portfolio_with(0.10, 0.30),
            portfolio_with(0.10, 0.30),
        ]);
        assert_eq!(front.len(), 1);
    }

    #[test]
    fn objective_collision_keeps_the_first_seen_allocation() {
        let mut first = portfolio_with(0.10, 0.30);
        first.weights = vec![0.6, 0.4];
        let mut second = portfolio_with(0.10, 0.30);
        second.weights = vec![0.4, 0.6];

        let front = ParetoFront::build(vec![first, second]);
        assert_eq!(front.len(), 1);
        assert_eq!(front.members()[0].weights, vec![0.6, 0.4]);
    }
}
