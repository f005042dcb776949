//! Fixed-width packed bit row with a closed boundary

use serde::{Deserialize, Serialize};

const WORD_BITS: usize = 64;

/// One grid row packed into 64-bit words.
///
/// Columns are 1-based. Bit 0 and bit `width + 1` are guard positions that are
/// never set, so column 0 and column `width + 1` always read as dead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitRow {
    width: usize,
    words: Vec<u64>,
}

impl BitRow {
    /// Create an all-dead row of the given width
    pub fn new(width: usize) -> Self {
        // room for columns 0..=width+1
        let words = (width + 2).div_ceil(WORD_BITS);
        Self {
            width,
            words: vec![0; words],
        }
    }

    /// Build the neighborhood mask covering columns `center - 1 ..= center + 1`,
    /// clipped to `[1, width]`.
    pub fn window(width: usize, center: usize) -> Self {
        let mut mask = Self::new(width);
        for col in center.saturating_sub(1)..=center + 1 {
            mask.set(col);
        }
        mask
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn in_range(&self, col: usize) -> bool {
        col >= 1 && col <= self.width
    }

    /// Mark a column live. Out-of-range columns are ignored.
    pub fn set(&mut self, col: usize) {
        if self.in_range(col) {
            self.words[col / WORD_BITS] |= 1 << (col % WORD_BITS);
        }
    }

    /// Read a column. Out-of-range columns read as dead.
    pub fn get(&self, col: usize) -> bool {
        self.in_range(col) && (self.words[col / WORD_BITS] >> (col % WORD_BITS)) & 1 == 1
    }

    /// OR another row into this one, column by column.
    ///
    /// Only the overlapping columns are merged when widths differ.
    pub fn or(&mut self, other: &BitRow) {
        if other.width == self.width {
            for (word, rhs) in self.words.iter_mut().zip(&other.words) {
                *word |= rhs;
            }
        } else {
            for col in other.live_columns() {
                self.set(col);
            }
        }
    }

    /// Bitwise AND with a mask, returning a new row of this row's width
    pub fn and(&self, mask: &BitRow) -> BitRow {
        let mut words = self.words.clone();
        for (i, word) in words.iter_mut().enumerate() {
            *word &= mask.words.get(i).copied().unwrap_or(0);
        }
        BitRow {
            width: self.width,
            words,
        }
    }

    /// Number of live columns also set in `mask`, without building the AND
    pub fn count_and(&self, mask: &BitRow) -> usize {
        self.words
            .iter()
            .zip(&mask.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate over the live columns in ascending order
    pub fn live_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.width).filter(move |&col| self.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_matches_and_popcount() {
        let mut row = BitRow::new(70);
        for col in [1, 2, 3, 63, 64, 65, 70] {
            row.set(col);
        }
        for center in [1, 2, 40, 64, 70] {
            let mask = BitRow::window(70, center);
            assert_eq!(row.count_and(&mask), row.and(&mask).popcount());
        }
        assert_eq!(row.count_and(&BitRow::window(70, 64)), 3);
        assert_eq!(row.count_and(&BitRow::window(70, 70)), 1);
    }

    #[test]
    fn test_set_and_get() {
        let mut row = BitRow::new(70);
        row.set(1);
        row.set(63);
        row.set(64);
        row.set(70);

        assert!(row.get(1));
        assert!(row.get(63));
        assert!(row.get(64));
        assert!(row.get(70));
        assert!(!row.get(2));
        assert_eq!(row.popcount(), 4);
    }

    #[test]
    fn test_out_of_range_is_dead() {
        let mut row = BitRow::new(15);
        row.set(0);
        row.set(16);
        row.set(500);

        assert!(row.is_empty());
        assert!(!row.get(0));
        assert!(!row.get(16));
        assert!(!row.get(500));
    }

    #[test]
    fn test_window_is_clipped_at_edges() {
        let left = BitRow::window(15, 1);
        assert_eq!(left.live_columns().collect::<Vec<_>>(), vec![1, 2]);

        let middle = BitRow::window(15, 7);
        assert_eq!(middle.live_columns().collect::<Vec<_>>(), vec![6, 7, 8]);

        let right = BitRow::window(15, 15);
        assert_eq!(right.live_columns().collect::<Vec<_>>(), vec![14, 15]);
    }

    #[test]
    fn test_or_and_popcount() {
        let mut a = BitRow::new(20);
        a.set(3);
        a.set(4);
        let mut b = BitRow::new(20);
        b.set(4);
        b.set(10);

        a.or(&b);
        assert_eq!(a.live_columns().collect::<Vec<_>>(), vec![3, 4, 10]);

        let masked = a.and(&BitRow::window(20, 4));
        assert_eq!(masked.popcount(), 2);
        assert_eq!(masked.width(), 20);
    }

    #[test]
    fn test_or_with_different_width() {
        let mut narrow = BitRow::new(15);
        let mut wide = BitRow::new(30);
        wide.set(2);
        wide.set(25);

        narrow.or(&wide);
        assert_eq!(narrow.live_columns().collect::<Vec<_>>(), vec![2]);
    }
}
