use proptest::prelude::*;
use tictac::{generate, ColumnLabels, LabelError, COLUMN_ALPHABET};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// All strings of exactly `len` symbols, in alphabet order.
fn product(alphabet: &str, len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    for _ in 0..len {
        out = out
            .iter()
            .flat_map(|prefix| alphabet.chars().map(move |c| format!("{}{}", prefix, c)))
            .collect();
    }
    out
}

#[test]
fn test_empty_alphabet() {
    assert_eq!(generate(0, "").unwrap(), Vec::<String>::new());
    assert_eq!(
        generate(1, "").unwrap_err(),
        LabelError::EmptyAlphabet { count: 1 }
    );
}

#[test]
fn test_single_symbol_repeats() {
    for n in 0..10 {
        let expected: Vec<String> = (1..=n).map(|len| "a".repeat(len)).collect();
        assert_eq!(generate(n, "a").unwrap(), expected);
    }
}

#[test]
fn test_two_symbols() {
    assert_eq!(generate(0, "ab").unwrap(), Vec::<String>::new());
    assert_eq!(generate(1, "ab").unwrap(), strings(&["a"]));
    assert_eq!(generate(2, "ab").unwrap(), strings(&["a", "b"]));
    assert_eq!(generate(3, "ab").unwrap(), strings(&["a", "b", "aa"]));
    assert_eq!(
        generate(6, "ab").unwrap(),
        strings(&["a", "b", "aa", "ab", "ba", "bb"])
    );
    assert_eq!(
        generate(7, "ab").unwrap(),
        strings(&["a", "b", "aa", "ab", "ba", "bb", "aaa"])
    );
}

#[test]
fn test_length_classes_are_complete() {
    let alphabet = "abcdefgh";
    assert_eq!(generate(8, alphabet).unwrap(), product(alphabet, 1));

    let mut one_and_two = product(alphabet, 1);
    one_and_two.extend(product(alphabet, 2));
    assert_eq!(generate(8 + 64, alphabet).unwrap(), one_and_two);

    one_and_two.push("aaa".to_string());
    assert_eq!(generate(8 + 64 + 1, alphabet).unwrap(), one_and_two);
}

#[test]
fn test_latin_alphabet_boundaries() {
    let labels = generate(26 + 26 * 26 + 1, COLUMN_ALPHABET).unwrap();
    assert_eq!(labels[0], "a");
    assert_eq!(labels[25], "z");
    assert_eq!(labels[26], "aa");
    assert_eq!(labels[27], "ab");
    assert_eq!(labels[26 + 26 * 26 - 1], "zz");
    assert_eq!(labels[26 + 26 * 26], "aaa");
}

#[test]
fn test_order_follows_alphabet_not_code_points() {
    assert_eq!(generate(4, "ba").unwrap(), strings(&["b", "a", "bb", "ba"]));
}

#[test]
fn test_duplicate_symbol_rejected() {
    assert_eq!(
        generate(3, "aba").unwrap_err(),
        LabelError::DuplicateSymbol('a')
    );
}

#[test]
fn test_column_labels_bijection() {
    let labels = ColumnLabels::new(30, COLUMN_ALPHABET).unwrap();
    assert_eq!(labels.len(), 30);
    assert_eq!(labels.label(0), Some("a"));
    assert_eq!(labels.label(26), Some("aa"));
    assert_eq!(labels.label(29), Some("ad"));
    assert_eq!(labels.label(30), None);
    assert_eq!(labels.index_of("ad"), Some(29));
    assert_eq!(labels.index_of("ae"), None);
    assert_eq!(labels.index_of("A"), None);
    for (i, label) in labels.iter().enumerate() {
        assert_eq!(labels.index_of(label), Some(i));
    }
}

#[test]
fn test_column_labels_lookup_on_wide_boards() {
    let count = 26 + 26 * 26 + 26 * 26 * 26;
    let labels = ColumnLabels::new(count, COLUMN_ALPHABET).unwrap();
    assert_eq!(labels.index_of("zzz"), Some(count - 1));
    assert_eq!(labels.index_of("aaaa"), None);
    for (i, label) in labels.iter().enumerate().step_by(97) {
        assert_eq!(labels.index_of(label), Some(i));
        assert_eq!(labels.label(i), Some(label));
    }
}

fn sort_key(label: &str, alphabet: &str) -> (usize, Vec<usize>) {
    let digits = label
        .chars()
        .map(|c| alphabet.chars().position(|a| a == c).unwrap())
        .collect();
    (label.chars().count(), digits)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn labels_are_minimal_and_strictly_ordered(size in 2usize..7, count in 0usize..1500) {
        let alphabet = &"abcdef"[..size];
        let labels = generate(count, alphabet).unwrap();
        prop_assert_eq!(labels.len(), count);
        for pair in labels.windows(2) {
            prop_assert!(sort_key(&pair[0], alphabet) < sort_key(&pair[1], alphabet));
        }
        // No shorter label was skipped: the last label is the one at `count - 1`
        // in the full enumeration of its length class.
        if let Some(last) = labels.last() {
            let len = last.chars().count();
            let shorter: usize = (1..len).map(|l| size.pow(l as u32)).sum();
            prop_assert!(shorter < count);
            prop_assert!(count <= shorter + size.pow(len as u32));
        }
    }

    #[test]
    fn shorter_requests_are_prefixes(count in 0usize..400, extra in 0usize..100) {
        let short = generate(count, COLUMN_ALPHABET).unwrap();
        let long = generate(count + extra, COLUMN_ALPHABET).unwrap();
        prop_assert_eq!(&long[..count], &short[..]);
    }
}
