//! Column labels: the shortest strings over an alphabet, ordered first by
//! length and then by alphabet position (`a, b, …, z, aa, ab, …`).

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::LabelError;

#[cfg(feature = "std")]
type LabelIndex = std::collections::HashMap<String, usize>;
// Without std there is no hasher; fall back to an ordered map.
#[cfg(not(feature = "std"))]
type LabelIndex = alloc::collections::BTreeMap<String, usize>;

/// Generate the first `count` labels over `alphabet`.
///
/// Every label of length `n` precedes every label of length `n + 1`; within
/// a length, labels follow the order of symbols in `alphabet`, not their
/// code points.
pub fn generate(count: usize, alphabet: &str) -> Result<Vec<String>, LabelError> {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return if count == 0 {
            Ok(Vec::new())
        } else {
            Err(LabelError::EmptyAlphabet { count })
        };
    }
    for (i, sym) in symbols.iter().enumerate() {
        if symbols[..i].contains(sym) {
            return Err(LabelError::DuplicateSymbol(*sym));
        }
    }

    let max_len = if symbols.len() == 1 {
        count
    } else {
        label_length(count, symbols.len())
    };

    let mut labels = Vec::with_capacity(count);
    for len in 1..=max_len {
        let mut digits = vec![0usize; len];
        loop {
            if labels.len() == count {
                return Ok(labels);
            }
            labels.push(digits.iter().map(|&d| symbols[d]).collect());
            if !advance(&mut digits, symbols.len()) {
                break;
            }
        }
    }
    Ok(labels)
}

/// Step the odometer, rightmost digit fastest. Returns `false` once every
/// combination of this length has been produced.
fn advance(digits: &mut [usize], base: usize) -> bool {
    for d in digits.iter_mut().rev() {
        *d += 1;
        if *d < base {
            return true;
        }
        *d = 0;
    }
    false
}

/// Shortest label length `L` with `base + base² + … + base^L >= count`.
///
/// Starts from the closed form `⌈log_base(count·(base−1) + base) − 1⌉` and
/// corrects the float estimate against the exact integer series.
fn label_length(count: usize, base: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let k = base as f64;
    let estimate = libm::ceil(libm::log(count as f64 * (k - 1.0) + k) / libm::log(k) - 1.0);
    let mut len = if estimate.is_finite() && estimate >= 1.0 {
        estimate as usize
    } else {
        1
    };
    while labels_up_to(len, base) < count {
        len += 1;
    }
    while len > 1 && labels_up_to(len - 1, base) >= count {
        len -= 1;
    }
    len
}

/// Number of labels of length `1..=len`, saturating on overflow.
fn labels_up_to(len: usize, base: usize) -> usize {
    match num_traits::checked_pow(base, len + 1) {
        Some(power) => (power - base) / (base - 1),
        None => usize::MAX,
    }
}

/// Bijection between column indices and their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    labels: Vec<String>,
    index: LabelIndex,
}

impl ColumnLabels {
    /// Labels for `columns` columns drawn from `alphabet`.
    pub fn new(columns: usize, alphabet: &str) -> Result<Self, LabelError> {
        let labels = generate(columns, alphabet)?;
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        Ok(Self { labels, index })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of column `col`.
    pub fn label(&self, col: usize) -> Option<&str> {
        self.labels.get(col).map(String::as_str)
    }

    /// Column index named by `label`. Constant time with `std`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
