//! Generation transition using row-sliding neighborhood masks

use super::bit_row::BitRow;
use super::board::Board;
use super::rules::RuleSpec;
use rayon::prelude::*;

/// Computes successive generations under a [`RuleSpec`]
pub struct TransitionEngine;

impl TransitionEngine {
    /// Compute the generation after `current`.
    ///
    /// Rows above the first and below the last are treated as all dead; each
    /// output row depends only on the three input rows around it, so rows are
    /// evolved in parallel.
    pub fn step(current: &Board, rule: &RuleSpec) -> Board {
        let columns = current.columns();
        let dead = BitRow::new(columns);
        let masks = Self::masks(columns);

        let next_rows: Vec<BitRow> = (1..=current.rows())
            .into_par_iter()
            .map(|i| {
                let prev = i
                    .checked_sub(1)
                    .and_then(|r| current.row(r))
                    .unwrap_or(&dead);
                let row = current.row(i).unwrap_or(&dead);
                let next = current.row(i + 1).unwrap_or(&dead);
                Self::step_row(prev, row, next, &masks, rule)
            })
            .collect();

        Board::from_rows(columns, next_rows).unwrap_or_else(|_| Board::empty(current.rows(), columns))
    }

    /// Neighborhood masks for every column of a row `width` wide; entry
    /// `j - 1` covers columns `j - 1 ..= j + 1`.
    pub fn masks(width: usize) -> Vec<BitRow> {
        (1..=width).map(|j| BitRow::window(width, j)).collect()
    }

    /// Evolve one row from its own state and its two neighbors, using masks
    /// built by [`Self::masks`]
    pub fn step_row(
        prev: &BitRow,
        row: &BitRow,
        next: &BitRow,
        masks: &[BitRow],
        rule: &RuleSpec,
    ) -> BitRow {
        let mut out = BitRow::new(row.width());

        for (j, mask) in (1..=row.width()).zip(masks) {
            let alive = row.get(j);
            let live_around = prev.count_and(mask) + row.count_and(mask) + next.count_and(mask)
                - usize::from(alive);

            if rule.next_state(alive, live_around) {
                out.set(j);
            }
        }
        out
    }
}
