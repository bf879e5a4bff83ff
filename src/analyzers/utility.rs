use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Counts `(date, column)` pairs into a wide table with one slot per column.
///
/// Absent combinations stay 0. Rows come out ascending by date.
pub fn pivot_by_date<const N: usize>(
    pairs: impl IntoIterator<Item = (NaiveDate, usize)>,
) -> BTreeMap<NaiveDate, [u64; N]> {
    let mut table: BTreeMap<NaiveDate, [u64; N]> = BTreeMap::new();
    for (date, column) in pairs {
        if let Some(slot) = table.entry(date).or_insert([0; N]).get_mut(column) {
            *slot += 1;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, d).unwrap()
    }

    #[test]
    fn test_pivot_fills_zeros() {
        let table = pivot_by_date::<3>(vec![(date(4), 2), (date(3), 0), (date(3), 0)]);

        let rows: Vec<_> = table.into_iter().collect();
        assert_eq!(rows, vec![(date(3), [2, 0, 0]), (date(4), [0, 0, 1])]);
    }

    #[test]
    fn test_pivot_empty() {
        assert!(pivot_by_date::<2>(Vec::new()).is_empty());
    }
}
