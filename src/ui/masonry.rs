//! Round-robin distribution of items into display columns.
//!
//! This is the layout core of the masonry widgets: it decides which item
//! goes into which column, while the widgets only decide where on screen
//! each column ends up.

use thiserror::Error;

/// Column count used by widgets when none was given.
pub const DEFAULT_COLUMNS: usize = 2;

/// Error returned when a non-empty sequence of items should be
/// distributed into zero columns.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid column count: expected at least 1 column for {len} item(s)")]
pub struct InvalidColumns {
    /// Number of items that could not be distributed.
    pub len: usize,
}

/// Distributes `items` into at most `columns` buckets, assigning the
/// item at position `i` to the bucket `i % columns`.
///
/// The number of buckets never exceeds the number of items, so no
/// bucket is ever empty. An empty input yields no buckets at all; in
/// that case `columns` is not even looked at.
pub fn distribute<I>(items: I, columns: usize) -> Result<Vec<Vec<I::Item>>, InvalidColumns>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let len = items.len();

    if len == 0 {
        return Ok(Vec::new());
    }
    if columns == 0 {
        return Err(InvalidColumns { len });
    }

    let columns = columns.min(len);
    let mut buckets: Vec<Vec<I::Item>> =
        std::iter::repeat_with(Vec::new).take(columns).collect();

    for (index, item) in items.enumerate() {
        buckets[index % columns].push(item);
    }

    Ok(buckets)
}

/// Same as [`distribute`], but pairs every item with its position in
/// the input. Widgets hand that position to their content closures, so
/// callers can identify items without comparing them; equal items stay
/// distinguishable.
pub fn distribute_indexed<I>(
    items: I,
    columns: usize,
) -> Result<Vec<Vec<(usize, I::Item)>>, InvalidColumns>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    distribute(items.into_iter().enumerate(), columns)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_input_should_produce_no_buckets() -> anyhow::Result<()> {
        for columns in [2, 3] {
            let buckets = distribute(Vec::<u32>::new(), columns)?;
            assert_eq!(buckets, Vec::<Vec<u32>>::new());
        }

        Ok(())
    }

    #[test]
    fn empty_input_should_ignore_zero_columns() -> anyhow::Result<()> {
        let buckets = distribute(Vec::<u32>::new(), 0)?;
        assert_eq!(buckets, Vec::<Vec<u32>>::new());

        Ok(())
    }

    #[test]
    fn zero_columns_should_be_rejected() {
        let result = distribute(vec![1, 2, 3], 0);
        assert_eq!(result, Err(InvalidColumns { len: 3 }));
    }

    #[test]
    fn more_columns_than_items_should_produce_singletons() -> anyhow::Result<()> {
        for columns in 6..=10 {
            let buckets = distribute(vec![1, 2, 3, 4, 5, 6], columns)?;
            assert_eq!(
                buckets,
                vec![vec![1], vec![2], vec![3], vec![4], vec![5], vec![6]]
            );
        }

        Ok(())
    }

    #[test]
    fn more_items_than_columns_should_interleave() -> anyhow::Result<()> {
        let buckets = distribute(vec!["a", "b", "c", "d", "e", "f", "g"], 3)?;
        assert_eq!(
            buckets,
            vec![vec!["a", "d", "g"], vec!["b", "e"], vec!["c", "f"]]
        );

        Ok(())
    }

    #[test]
    fn as_many_columns_as_items_should_produce_singletons() -> anyhow::Result<()> {
        let buckets = distribute(vec!["a", "b", "c", "d"], 4)?;
        assert_eq!(buckets, vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]]);

        Ok(())
    }

    #[test]
    fn float_items_should_distribute() -> anyhow::Result<()> {
        let buckets = distribute(vec![0.4, 1.5, 9.8, 25.0, 61.4, 3.2], 5)?;
        assert_eq!(
            buckets,
            vec![
                vec![0.4, 3.2],
                vec![1.5],
                vec![9.8],
                vec![25.0],
                vec![61.4]
            ]
        );

        Ok(())
    }

    #[test]
    fn buckets_should_reconstruct_input() -> anyhow::Result<()> {
        for len in 1..=32_usize {
            for columns in 1..=8_usize {
                let items = (0..len).collect::<Vec<_>>();
                let buckets = distribute(items.clone(), columns)?;

                assert_eq!(buckets.len(), columns.min(len));
                assert_eq!(buckets.iter().map(Vec::len).sum::<usize>(), len);

                for (position, item) in items.iter().enumerate() {
                    let (bucket, depth) = (position % buckets.len(), position / buckets.len());
                    assert_eq!(buckets[bucket][depth], *item);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn indexed_distribution_should_carry_source_positions() -> anyhow::Result<()> {
        let items = vec!["x", "y", "x", "x", "y"];
        let buckets = distribute_indexed(items.clone(), 2)?;

        assert_eq!(
            buckets,
            vec![
                vec![(0, "x"), (2, "x"), (4, "y")],
                vec![(1, "y"), (3, "x")]
            ]
        );

        for bucket in buckets {
            for (position, item) in bucket {
                assert_eq!(items[position], item);
            }
        }

        Ok(())
    }

    #[test]
    fn default_column_count_should_be_two() {
        assert_eq!(DEFAULT_COLUMNS, 2);
    }
}
