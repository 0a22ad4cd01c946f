use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::molecule::chain::ChainSet;
use crate::molecule::NUM_CHAINS;

/// Splits the input into chain sets. Chains are separated by whitespace and the input
/// ends at the first token starting with `sentinel`; anything after it is ignored
pub fn parse_datasets(text: &str, sentinel: char) -> Result<Vec<ChainSet>> {
    let mut tokens = Vec::new();
    let mut found_sentinel = false;
    for token in text.split_whitespace() {
        let first = token.chars().next().map(|c| c.to_ascii_uppercase());
        if first == Some(sentinel.to_ascii_uppercase()) {
            found_sentinel = true;
            break;
        }
        tokens.push(token);
    }

    if !found_sentinel {
        return Err(Error::MissingSentinel { sentinel });
    }
    if tokens.len() % NUM_CHAINS != 0 {
        return Err(Error::IncompleteDataset {
            count: tokens.len(),
        });
    }

    let sets = tokens
        .chunks(NUM_CHAINS)
        .map(ChainSet::from_strs)
        .collect::<Result<Vec<_>>>()?;
    debug!(datasets = sets.len(), "parsed input");
    Ok(sets)
}

pub fn read_datasets<P: AsRef<Path>>(path: P, sentinel: char) -> Result<Vec<ChainSet>> {
    let text = fs::read_to_string(path)?;
    parse_datasets(&text, sentinel)
}

/// A dataset whose computed result differs from the expected output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    /// Expected line, None when the expected output ran out
    pub expected: Option<String>,
    /// Computed result, None when there are more expected lines than datasets
    pub actual: Option<usize>,
}

/// Compares results with expected output, one whitespace separated value per dataset
pub fn compare_expected(results: &[usize], expected: &str) -> Vec<Mismatch> {
    let expected = expected.split_whitespace().collect::<Vec<_>>();
    let n = results.len().max(expected.len());
    (0..n)
        .filter_map(|index| {
            let want = expected.get(index).map(|s| s.to_string());
            let got = results.get(index).copied();
            let matches = match (&want, got) {
                (Some(w), Some(g)) => *w == g.to_string(),
                _ => false,
            };
            if matches {
                None
            } else {
                Some(Mismatch {
                    index,
                    expected: want,
                    actual: got,
                })
            }
        })
        .collect()
}

pub fn read_expected<P: AsRef<Path>>(results: &[usize], path: P) -> Result<Vec<Mismatch>> {
    let text = fs::read_to_string(path)?;
    Ok(compare_expected(results, &text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "OIMDIHEIAFNL
CHJDBJMHPJKD
LCBJOJGIEKBO
KAINLHLOLBEJ
azaaaaaaaawa
BWBBBBBBBXBB
CYCCCCCCCCXC
DZDDDDDDDYDD
Q
";

    #[test]
    fn test_parse_groups_of_four() {
        let sets = parse_datasets(INPUT, 'Q').unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0][0].to_string(), "OIMDIHEIAFNL");
        assert_eq!(sets[1][0].to_string(), "AZAAAAAAAAWA");
    }

    #[test]
    fn test_input_after_sentinel_is_ignored() {
        let text = format!("{}GARBAGE\n", INPUT);
        assert_eq!(parse_datasets(&text, 'Q').unwrap().len(), 2);
        assert!(parse_datasets("Q\n", 'Q').unwrap().is_empty());
    }

    #[test]
    fn test_missing_sentinel() {
        let text = INPUT.replace('Q', "");
        assert!(matches!(
            parse_datasets(&text, 'Q'),
            Err(Error::MissingSentinel { sentinel: 'Q' })
        ));
    }

    #[test]
    fn test_incomplete_group() {
        let text = "OIMDIHEIAFNL\nCHJDBJMHPJKD\nQ\n";
        assert!(matches!(
            parse_datasets(text, 'Q'),
            Err(Error::IncompleteDataset { count: 2 })
        ));
    }

    #[test]
    fn test_bad_chain_fails_whole_input() {
        let text = INPUT.replace("KAINLHLOLBEJ", "KAINLHLOLBE");
        assert!(matches!(
            parse_datasets(&text, 'Q'),
            Err(Error::MalformedChain { .. })
        ));
    }

    #[test]
    fn test_compare_expected() {
        assert!(compare_expected(&[30, 0], "30\n0\n").is_empty());

        let wrong = compare_expected(&[30, 4], "30\n0\n");
        assert_eq!(
            wrong,
            vec![Mismatch {
                index: 1,
                expected: Some("0".to_string()),
                actual: Some(4),
            }]
        );

        let short = compare_expected(&[30, 0], "30\n");
        assert_eq!(short[0].expected, None);
        assert_eq!(short[0].actual, Some(0));

        let long = compare_expected(&[30], "30\n56\n");
        assert_eq!(long[0].index, 1);
        assert_eq!(long[0].actual, None);
    }
}
