//! Prime listing up to a limit.
//!
//! The listing starts with a literal 1. That is how the classroom program has
//! always presented it, and `count` includes it.

use serde::Serialize;
use std::fmt;

/// Values per row when the listing is rendered as a grid.
pub const ROW_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeListing {
    pub limit: u64,
    pub values: Vec<u64>,
}

impl PrimeListing {
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Values chunked into rows of `ROW_WIDTH`.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.values.chunks(ROW_WIDTH)
    }
}

impl fmt::Display for PrimeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Primes up to {}:", self.limit)?;
        let width = self.values.last().map_or(1, |v| v.to_string().len());
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        write!(f, "Total: {} primes", self.count())
    }
}

pub fn is_prime(k: u64) -> bool {
    if k <= 1 {
        return false;
    }
    if k == 2 {
        return true;
    }
    if k % 2 == 0 {
        return false;
    }
    let mut i = 3;
    while i <= k / i {
        if k % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

pub fn enumerate(limit: u64) -> PrimeListing {
    let mut values = vec![1];
    values.extend((2..=limit).filter(|&k| is_prime(k)));
    PrimeListing { limit, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_ten() {
        let listing = enumerate(10);
        assert_eq!(listing.values, vec![1, 2, 3, 5, 7]);
        assert_eq!(listing.count(), 5);
    }

    #[test]
    fn test_limit_one_lists_only_one() {
        let listing = enumerate(1);
        assert_eq!(listing.values, vec![1]);
        assert_eq!(listing.count(), 1);
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(enumerate(13).values.last(), Some(&13));
    }

    #[test]
    fn test_is_prime_edges() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_prime_count_below_ten_thousand() {
        // π(10000) = 1229, plus the leading 1
        assert_eq!(enumerate(10_000).count(), 1230);
    }

    #[test]
    fn test_rows_chunk_by_ten() {
        let listing = enumerate(100);
        let rows: Vec<&[u64]> = listing.rows().collect();
        assert_eq!(rows.len(), 3); // 26 values
        assert_eq!(rows[0].len(), ROW_WIDTH);
        assert_eq!(rows[2].len(), 6);
    }

    #[test]
    fn test_display_reports_total() {
        let text = enumerate(10).to_string();
        assert!(text.starts_with("Primes up to 10:"));
        assert!(text.contains("1 2 3 5 7"));
        assert!(text.ends_with("Total: 5 primes"));
    }
}
