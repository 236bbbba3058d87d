//! Greatest common divisor and least common multiple over a list.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Gcd,
    Lcm,
}

impl Operation {
    /// Flips between the two operations.
    pub fn toggle(self) -> Operation {
        match self {
            Operation::Gcd => Operation::Lcm,
            Operation::Lcm => Operation::Gcd,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Gcd => "GCD",
            Operation::Lcm => "LCM",
        }
    }
}

/// Euclid's algorithm.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Divides by the GCD before multiplying.
pub fn lcm(a: u64, b: u64) -> Result<u64, EngineError> {
    let g = gcd(a, b);
    if g == 0 {
        return Ok(0);
    }
    (a / g).checked_mul(b).ok_or(EngineError::Overflow)
}

/// Left fold of `operation` across `values`. Needs at least two values, all ≥ 1.
pub fn fold(operation: Operation, values: &[u64]) -> Result<u64, EngineError> {
    if values.len() < 2 {
        return Err(EngineError::InvalidDomain {
            value: values.len().to_string(),
            reason: "at least two numbers are required".into(),
        });
    }
    if let Some(zero) = values.iter().find(|&&v| v == 0) {
        return Err(EngineError::InvalidDomain {
            value: zero.to_string(),
            reason: "every number must be at least 1".into(),
        });
    }

    values[1..].iter().try_fold(values[0], |acc, &v| match operation {
        Operation::Gcd => Ok(gcd(acc, v)),
        Operation::Lcm => lcm(acc, v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(lcm(12, 18), Ok(36));
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(lcm(4, 6), Ok(12));
    }

    #[test]
    fn test_fold_three_values() {
        assert_eq!(fold(Operation::Gcd, &[12, 18, 30]), Ok(6));
        assert_eq!(fold(Operation::Lcm, &[12, 18, 30]), Ok(180));
    }

    #[test]
    fn test_fold_is_order_independent() {
        assert_eq!(
            fold(Operation::Lcm, &[4, 6, 10]),
            fold(Operation::Lcm, &[10, 4, 6])
        );
        assert_eq!(
            fold(Operation::Gcd, &[84, 36, 120]),
            fold(Operation::Gcd, &[120, 84, 36])
        );
    }

    #[test]
    fn test_fold_needs_two_values() {
        assert!(matches!(
            fold(Operation::Gcd, &[12]),
            Err(EngineError::InvalidDomain { .. })
        ));
        assert!(fold(Operation::Gcd, &[]).is_err());
    }

    #[test]
    fn test_fold_rejects_zero() {
        assert!(matches!(
            fold(Operation::Lcm, &[12, 0]),
            Err(EngineError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_lcm_overflow_is_reported() {
        assert_eq!(
            fold(Operation::Lcm, &[u64::MAX, u64::MAX - 1]),
            Err(EngineError::Overflow)
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Operation::Gcd.toggle(), Operation::Lcm);
        assert_eq!(Operation::Lcm.toggle(), Operation::Gcd);
    }
}
