//! [Longest Common Subsequence]: The longest sequence of symbols appearing in
//! both inputs in the same relative order, though not necessarily
//! contiguously.
//!
//! Symbols are compared per [`char`], so the functions work on any UTF-8
//! text.
//!
//! [Longest Common Subsequence]: https://en.wikipedia.org/wiki/Longest_common_subsequence

/// Returns the length of the longest common subsequence of `a` and `b` by
/// plain recursion.
///
/// When the current symbols match both advance; otherwise the better of
/// skipping a symbol in either input is taken.
///
/// # Time Complexity
///
/// Takes *O*(*2^(m + n)*) time in the worst case.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(lcs_recursive("ABCDGH", "AEDFHR"), 3);
/// ```
pub fn lcs_recursive(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    lcs_recursive_inner(&a, &b)
}

fn lcs_recursive_inner(a: &[char], b: &[char]) -> usize {
    match (a.split_first(), b.split_first()) {
        (Some((x, a_rest)), Some((y, b_rest))) => {
            if x == y {
                1 + lcs_recursive_inner(a_rest, b_rest)
            } else {
                lcs_recursive_inner(a_rest, b).max(lcs_recursive_inner(a, b_rest))
            }
        }
        _ => 0,
    }
}

/// Returns the length of the longest common subsequence of `a` and `b`
/// top-down, caching results by index pair.
///
/// # Time Complexity
///
/// Takes *O*(*m · n*) time and space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(lcs_memo("AGGTAB", "GXTXAYB"), 4);
/// ```
pub fn lcs_memo(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut memo = vec![vec![None; b.len()]; a.len()];

    lcs_memo_inner(&a, &b, 0, 0, &mut memo)
}

fn lcs_memo_inner(
    a: &[char],
    b: &[char],
    i: usize,
    j: usize,
    memo: &mut [Vec<Option<usize>>],
) -> usize {
    if i >= a.len() || j >= b.len() {
        return 0;
    }
    if let Some(len) = memo[i][j] {
        return len;
    }

    let len = if a[i] == b[j] {
        1 + lcs_memo_inner(a, b, i + 1, j + 1, memo)
    } else {
        lcs_memo_inner(a, b, i + 1, j, memo).max(lcs_memo_inner(a, b, i, j + 1, memo))
    };

    memo[i][j] = Some(len);
    len
}

/// Returns one longest common subsequence of `a` and `b`, built bottom-up.
///
/// Cell `(i, j)` of the table holds the LCS length of the first `i` symbols
/// of `a` and the first `j` of `b`. The subsequence is recovered by walking
/// back from the last cell: diagonally on a match, otherwise toward the
/// larger neighbour, preferring to drop a symbol of `a` on a tie.
///
/// When several subsequences share the maximum length only one is returned,
/// and which one is a consequence of the tie-break above.
///
/// # Time Complexity
///
/// Takes *O*(*m · n*) time and space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(lcs_tabulation("ABCDGH", "AEDFHR"), "ADH");
/// ```
pub fn lcs_tabulation(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut lcs = Vec::with_capacity(dp[m][n]);
    let (mut i, mut j) = (m, n);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            lcs.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.iter().rev().collect()
}

/// Returns the length of the longest common subsequence of `a` and `b`,
/// keeping only two rows of the table.
///
/// # Time Complexity
///
/// Takes *O*(*m · n*) time and *O*(*n*) space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for x in a.chars() {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == *y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        core::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whether `sub` can be obtained from `s` by deleting symbols.
    fn is_subsequence(sub: &str, s: &str) -> bool {
        let mut it = s.chars();
        sub.chars().all(|c| it.any(|x| x == c))
    }

    #[test]
    fn test_classic_example() {
        let (a, b) = ("ABCDGH", "AEDFHR");
        assert_eq!(lcs_recursive(a, b), 3);
        assert_eq!(lcs_memo(a, b), 3);
        assert_eq!(lcs_length(a, b), 3);
        assert_eq!(lcs_tabulation(a, b), "ADH");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(lcs_recursive("", "ABC"), 0);
        assert_eq!(lcs_memo("ABC", ""), 0);
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_tabulation("", "ABC"), "");
    }

    #[test]
    fn test_no_common_symbols() {
        assert_eq!(lcs_memo("ABC", "XYZ"), 0);
        assert_eq!(lcs_tabulation("ABC", "XYZ"), "");
    }

    #[test]
    fn test_identical_inputs() {
        assert_eq!(lcs_memo("DYNAMIC", "DYNAMIC"), 7);
        assert_eq!(lcs_tabulation("DYNAMIC", "DYNAMIC"), "DYNAMIC");
    }

    #[test]
    fn test_unicode_symbols() {
        assert_eq!(lcs_tabulation("αβγδ", "xβyδ"), "βδ");
        assert_eq!(lcs_length("αβγδ", "xβyδ"), 2);
    }

    #[test]
    fn test_tie_prefers_dropping_from_first_input() {
        // Both "A" and "B" are valid answers.
        assert_eq!(lcs_tabulation("AB", "BA"), "A");
    }

    #[test]
    fn test_all_strategies_agree() {
        let words = [
            "", "A", "AB", "BA", "ABCBDAB", "BDCABA", "AGGTAB", "GXTXAYB", "AAAA", "ABAB",
        ];

        for a in words {
            for b in words {
                let expected = lcs_length(a, b);
                assert_eq!(lcs_recursive(a, b), expected, "{a:?} {b:?}");
                assert_eq!(lcs_memo(a, b), expected, "{a:?} {b:?}");

                let lcs = lcs_tabulation(a, b);
                assert_eq!(lcs.chars().count(), expected, "{a:?} {b:?}");
                assert!(is_subsequence(&lcs, a), "{lcs:?} of {a:?}");
                assert!(is_subsequence(&lcs, b), "{lcs:?} of {b:?}");
            }
        }
    }
}
