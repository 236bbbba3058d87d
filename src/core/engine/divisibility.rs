//! Divisibility by 1, 2, 3, 4, 5, 7, 8, 9 and 10, each decided by the
//! schoolbook rule for that divisor rather than a bare `%`.

use serde::Serialize;
use std::fmt;

/// Divisors reported, in display order.
pub const DIVISORS: [u64; 9] = [1, 2, 3, 4, 5, 7, 8, 9, 10];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub divisor: u64,
    pub divisible: bool,
    /// Why the rule says yes; shown only for positive verdicts.
    pub rule: &'static str,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.divisible {
            write!(f, "✓ divisible by {} ({})", self.divisor, self.rule)
        } else {
            write!(f, "✗ NOT divisible by {}", self.divisor)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisibilityReport {
    pub n: u64,
    pub verdicts: Vec<Verdict>,
}

impl fmt::Display for DivisibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis of {}:", self.n)?;
        for (i, verdict) in self.verdicts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{verdict}")?;
        }
        Ok(())
    }
}

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Apply the rule for `divisor`. Divisors outside `DIVISORS` fall back to
/// direct modulo.
pub fn is_divisible_by(n: u64, divisor: u64) -> bool {
    match divisor {
        1 => true,
        2 => (n % 10) % 2 == 0,
        3 => digit_sum(n) % 3 == 0,
        4 => (n % 100) % 4 == 0,
        5 => matches!(n % 10, 0 | 5),
        8 => (n % 1000) % 8 == 0,
        9 => digit_sum(n) % 9 == 0,
        10 => n % 10 == 0,
        0 => n == 0,
        d => n % d == 0,
    }
}

fn rule_for(divisor: u64) -> &'static str {
    match divisor {
        1 => "every number is",
        2 => "last digit is even",
        3 => "digit sum is divisible by 3",
        4 => "last two digits are divisible by 4",
        5 => "ends in 0 or 5",
        8 => "last three digits are divisible by 8",
        9 => "digit sum is divisible by 9",
        10 => "ends in 0",
        _ => "remainder is 0",
    }
}

pub fn analyze(n: u64) -> DivisibilityReport {
    let verdicts = DIVISORS
        .iter()
        .map(|&divisor| Verdict {
            divisor,
            divisible: is_divisible_by(n, divisor),
            rule: rule_for(divisor),
        })
        .collect();
    DivisibilityReport { n, verdicts }
}
