//! Prime factorization by trial division.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Factorization {
    /// n ≤ 1 has no prime decomposition.
    Indecomposable { n: i64 },
    Prime { n: u64 },
    Composite {
        n: u64,
        /// prime → exponent, ascending by prime
        factors: BTreeMap<u64, u32>,
    },
}

impl Factorization {
    /// Multiply the prime powers back together. `None` for n ≤ 1.
    pub fn product(&self) -> Option<u64> {
        match self {
            Factorization::Indecomposable { .. } => None,
            Factorization::Prime { n } => Some(*n),
            Factorization::Composite { factors, .. } => Some(
                factors
                    .iter()
                    .map(|(&p, &e)| p.pow(e))
                    .product(),
            ),
        }
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factorization::Indecomposable { n } => write!(f, "{n} cannot be decomposed"),
            Factorization::Prime { n } => write!(f, "{n} is prime"),
            Factorization::Composite { n, factors } => {
                write!(f, "{n} = ")?;
                for (i, (prime, exponent)) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, " × ")?;
                    }
                    if *exponent == 1 {
                        write!(f, "{prime}")?;
                    } else {
                        write!(f, "{prime}^{exponent}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Raw prime → exponent map for n ≥ 2. Empty for n < 2.
pub fn prime_factors(n: u64) -> BTreeMap<u64, u32> {
    let mut factors = BTreeMap::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    let mut divisor: u64 = 2;
    // divisor ≤ rest / divisor is divisor² ≤ rest without the overflow
    while divisor <= rest / divisor {
        while rest % divisor == 0 {
            *factors.entry(divisor).or_insert(0) += 1;
            rest /= divisor;
        }
        divisor += 1;
    }
    if rest > 1 {
        *factors.entry(rest).or_insert(0) += 1;
    }
    factors
}

pub fn factorize(n: i64) -> Factorization {
    if n <= 1 {
        return Factorization::Indecomposable { n };
    }
    let n = n as u64;
    let factors = prime_factors(n);

    // A single factor with exponent 1 can only be n itself.
    if factors.len() == 1 && factors.get(&n) == Some(&1) {
        Factorization::Prime { n }
    } else {
        Factorization::Composite { n, factors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_cannot_be_decomposed() {
        for n in [-7, 0, 1] {
            assert_eq!(factorize(n), Factorization::Indecomposable { n });
        }
        assert_eq!(factorize(1).to_string(), "1 cannot be decomposed");
    }

    #[test]
    fn test_prime_is_reported_as_prime() {
        assert_eq!(factorize(17), Factorization::Prime { n: 17 });
        assert_eq!(factorize(2), Factorization::Prime { n: 2 });
        assert_eq!(factorize(17).to_string(), "17 is prime");
    }

    #[test]
    fn test_composite_rendering() {
        assert_eq!(factorize(24).to_string(), "24 = 2^3 × 3");
        assert_eq!(factorize(360).to_string(), "360 = 2^3 × 3^2 × 5");
        assert_eq!(factorize(49).to_string(), "49 = 7^2");
        assert_eq!(factorize(4).to_string(), "4 = 2^2");
    }

    #[test]
    fn test_large_prime_remainder() {
        // 2 × 1_000_003, the cofactor is prime
        let result = factorize(2_000_006);
        assert_eq!(result.to_string(), "2000006 = 2 × 1000003");
    }

    #[test]
    fn test_product_reconstructs_input() {
        for n in 2..3000i64 {
            assert_eq!(factorize(n).product(), Some(n as u64), "n={n}");
        }
    }

    #[test]
    fn test_factors_are_ascending_primes() {
        let factors = prime_factors(9_699_690); // 2·3·5·7·11·13·17·19
        let primes: Vec<u64> = factors.keys().copied().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert!(factors.values().all(|&e| e == 1));
    }
}
