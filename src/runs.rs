//! Longest-run scanning over lines of cells.

use alloc::collections::BTreeMap;

/// Longest run length per value, keyed by value.
pub type RunLengths<T> = BTreeMap<T, usize>;

/// Length of the longest block of equal consecutive elements for every
/// distinct value in `line`. Equal values separated by anything else are
/// separate runs. An empty line yields an empty map.
pub fn longest_runs<T, I>(line: I) -> RunLengths<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut longest = RunLengths::new();
    let mut current: Option<(T, usize)> = None;
    for value in line {
        current = match current.take() {
            Some((prev, len)) if prev == value => Some((prev, len + 1)),
            Some((prev, len)) => {
                record(&mut longest, prev, len);
                Some((value, 1))
            }
            None => Some((value, 1)),
        };
    }
    if let Some((prev, len)) = current {
        record(&mut longest, prev, len);
    }
    longest
}

fn record<T: Ord>(longest: &mut RunLengths<T>, value: T, len: usize) {
    let best = longest.entry(value).or_insert(0);
    *best = (*best).max(len);
}

/// Union of two run maps keeping the larger length for keys present in both.
pub fn merge_max<T: Ord>(mut left: RunLengths<T>, right: RunLengths<T>) -> RunLengths<T> {
    for (value, len) in right {
        record(&mut left, value, len);
    }
    left
}
