//! Frequency ranking of column values.
//!
//! Ranking is by descending count. Ties are broken by the smallest key in the
//! key's natural `Ord`, so every mode is reproducible.

use std::collections::BTreeMap;

use bikeshare_core::formatting::percentage as percent_of;
use bikeshare_core::Unavailable;

/// A value together with how often it occurs and its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Share<K> {
    pub value: K,
    pub count: usize,
    /// Share of all non-missing values, rounded to two decimal places.
    pub percentage: f64,
}

impl<K> Share<K> {
    /// Convert the value while keeping count and percentage.
    pub fn map<U>(self, f: impl FnOnce(K) -> U) -> Share<U> {
        Share {
            value: f(self.value),
            count: self.count,
            percentage: self.percentage,
        }
    }
}

/// Counts of each distinct non-missing value, ranked most frequent first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCounts<K> {
    ranked: Vec<(K, usize)>,
    total: usize,
}

impl<K: Ord + Clone> ValueCounts<K> {
    /// Count a column where every cell is present.
    pub fn from_values(values: impl IntoIterator<Item = K>) -> Self {
        Self::from_column(values.into_iter().map(Some))
    }

    /// Count a column, skipping missing (`None`) cells.
    pub fn from_column(column: impl IntoIterator<Item = Option<K>>) -> Self {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        let mut total = 0usize;
        for value in column.into_iter().flatten() {
            *counts.entry(value).or_default() += 1;
            total += 1;
        }

        // BTreeMap yields ascending keys and the sort is stable, so equal
        // counts stay in key order.
        let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self { ranked, total }
    }

    /// `(value, count)` pairs, most frequent first.
    pub fn ranked(&self) -> &[(K, usize)] {
        &self.ranked
    }

    /// The most frequent value.
    pub fn mode(&self) -> Result<&K, Unavailable> {
        self.ranked
            .first()
            .map(|(k, _)| k)
            .ok_or(Unavailable::NoData)
    }

    /// Value at position `rank` (0 = most frequent) with its share.
    pub fn share_at(&self, rank: usize) -> Option<Share<K>> {
        let (value, count) = self.ranked.get(rank)?;
        let pct = percent_of(*count as f64, self.total as f64, 2)?;
        Some(Share {
            value: value.clone(),
            count: *count,
            percentage: pct,
        })
    }

    /// The mode with its share of the total.
    pub fn top_share(&self) -> Result<Share<K>, Unavailable> {
        self.share_at(0).ok_or(Unavailable::NoData)
    }
}

/// Share of the most frequent value among the non-missing cells of `column`,
/// in percent rounded to two decimal places.
pub fn percentage<K: Ord + Clone>(
    column: impl IntoIterator<Item = Option<K>>,
) -> Result<f64, Unavailable> {
    ValueCounts::from_column(column)
        .top_share()
        .map(|s| s.percentage)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_by_count_descending() {
        let counts = ValueCounts::from_values(["b", "a", "b", "c", "b", "a"]);
        assert_eq!(counts.ranked(), &[("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(counts.top_share().unwrap().percentage, 50.0);
    }

    #[test]
    fn test_tie_break_smallest_key() {
        let counts = ValueCounts::from_values(["pear", "apple", "pear", "apple", "fig"]);
        assert_eq!(counts.mode(), Ok(&"apple"));

        let hours = ValueCounts::from_values([17u32, 8, 8, 17]);
        assert_eq!(hours.mode(), Ok(&8));
    }

    #[test]
    fn test_missing_values_skipped() {
        let counts = ValueCounts::from_column([Some("Male"), None, Some("Female"), Some("Male")]);
        let top = counts.top_share().unwrap();
        assert_eq!(top.value, "Male");
        assert_eq!(top.count, 2);
        assert!((top.percentage - 66.67).abs() < 1e-9);
    }

    #[test]
    fn test_empty_is_no_data() {
        let counts: ValueCounts<String> = ValueCounts::from_values(Vec::new());
        assert!(counts.ranked().is_empty());
        assert_eq!(counts.mode(), Err(Unavailable::NoData));
        assert_eq!(counts.top_share(), Err(Unavailable::NoData));
    }

    #[test]
    fn test_share_at_out_of_range() {
        let counts = ValueCounts::from_values(["only"]);
        assert!(counts.share_at(1).is_none());
    }

    #[test]
    fn test_share_map() {
        let share = ValueCounts::from_values([6u32, 6]).top_share().unwrap();
        let mapped = share.map(|m| format!("month {m}"));
        assert_eq!(mapped.value, "month 6");
        assert_eq!(mapped.count, 2);
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_single_distinct_value_is_full() {
        assert_eq!(percentage([Some("June"), Some("June"), None]), Ok(100.0));
    }

    #[test]
    fn test_percentage_all_missing_is_no_data() {
        let column: Vec<Option<&str>> = vec![None, None];
        assert_eq!(percentage(column), Err(Unavailable::NoData));
    }

    #[test]
    fn test_percentage_in_range() {
        let columns: [&[Option<u32>]; 3] = [
            &[Some(1), Some(2), Some(3)],
            &[Some(1), Some(1), Some(2)],
            &[Some(9)],
        ];
        for column in columns {
            let p = percentage(column.iter().copied()).unwrap();
            assert!((0.0..=100.0).contains(&p), "percentage = {p}");
        }
    }
}
