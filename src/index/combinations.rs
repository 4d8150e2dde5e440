//! Revealed-position subsets
//!
//! Every non-empty subset of `{0, .., width - 1}` names one way of revealing a word.
//! Subsets are enumerated as bitmasks, so width 5 yields the 31 masks `1..32`.

/// All non-empty subsets of the positions of a word of length `width`
///
/// Each subset lists its positions in ascending order.
///
/// # Examples
/// ```
/// use wordsquare::index::position_subsets;
///
/// let subsets = position_subsets(2);
/// assert_eq!(subsets, vec![vec![0], vec![1], vec![0, 1]]);
/// assert_eq!(position_subsets(5).len(), 31);
/// ```
#[must_use]
pub fn position_subsets(width: usize) -> Vec<Vec<usize>> {
    (1..1usize << width)
        .map(|mask| (0..width).filter(|&bit| mask & (1 << bit) != 0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn count_is_two_to_the_width_minus_one() {
        for width in 1..=8 {
            assert_eq!(position_subsets(width).len(), (1 << width) - 1);
        }
    }

    #[test]
    fn subsets_are_distinct_and_non_empty() {
        let subsets = position_subsets(5);
        let unique: FxHashSet<_> = subsets.iter().collect();
        assert_eq!(unique.len(), subsets.len());
        assert!(subsets.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn positions_sorted_and_in_range() {
        for subset in position_subsets(4) {
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(subset.iter().all(|&p| p < 4));
        }
    }

    #[test]
    fn full_set_included() {
        assert!(position_subsets(3).contains(&vec![0, 1, 2]));
    }
}
