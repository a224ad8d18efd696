//! Pull-by-pull probability tables.

use pity_core::{CounterEngine, Probability, ProbabilityEngine, Rules};

/// One row of a probability table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityRow {
    /// 1-indexed pull number counted from the last rare draw.
    pub pull_number: u32,
    /// Clamped pity before this pull.
    pub pity: u32,
    /// Probability of a rare draw on this pull.
    pub probability: Probability,
    /// Probability of at least one rare draw from the table's first row
    /// through this one.
    pub cumulative: Probability,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    rows: Vec<ProbabilityRow>,
}

impl ProbabilityTable {
    /// Table for the first `rows` pulls after a rare draw.
    pub fn soft_pity(rules: &Rules, rows: u32) -> Self {
        Self::upcoming(rules, 0, rows)
    }

    /// Table for the next `rows` pulls, starting from the current pity.
    pub fn upcoming(rules: &Rules, pulls_since_rare: u32, rows: u32) -> Self {
        let probability = ProbabilityEngine::new(*rules);
        let counters = CounterEngine::new(*rules);

        let rows = (0..rows)
            .map(|offset| {
                let position = pulls_since_rare.saturating_add(offset);
                ProbabilityRow {
                    pull_number: position.saturating_add(1),
                    pity: counters.pity_counter(position),
                    probability: probability.draw_probability(position),
                    cumulative: probability.cumulative_probability(pulls_since_rare, offset + 1),
                }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ProbabilityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose cumulative probability reaches `threshold`.
    pub fn first_reaching(&self, threshold: f64) -> Option<&ProbabilityRow> {
        self.rows
            .iter()
            .find(|row| row.cumulative.value() >= threshold)
    }
}
