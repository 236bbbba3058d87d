//! # Topic Engines
//!
//! One pure function per topic, plus the glue the presentation layer needs:
//!
//! - [`parse_request`]: raw input text → validated [`Request`]
//! - [`run`]: [`Request`] → [`Outcome`], an exhaustive match over topics
//!
//! ```text
//! "12 18"  ──parse_request──►  Request::GcdLcm  ──run──►  Outcome::GcdLcm  ──Display──►  "GCD(12, 18) = 6"
//! ```
//!
//! Nothing in here touches the terminal, the filesystem, or global state.

pub mod divisibility;
pub mod factorial;
pub mod factorization;
pub mod gcd_lcm;
pub mod primes;

use log::debug;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

use crate::core::topic::TopicId;
use divisibility::DivisibilityReport;
use factorization::Factorization;
use gcd_lcm::Operation;
use primes::PrimeListing;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Text that is not an integer.
    InvalidInput { input: String },
    /// An integer outside the routine's domain.
    InvalidDomain { value: String, reason: String },
    RecursionDepthExceeded { requested: u64, max: u32 },
    /// Result does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput { input } if input.is_empty() => {
                write!(f, "please enter a number")
            }
            EngineError::InvalidInput { input } => write!(f, "'{input}' is not a whole number"),
            EngineError::InvalidDomain { value, reason } => write!(f, "{value}: {reason}"),
            EngineError::RecursionDepthExceeded { requested, max } => write!(
                f,
                "number too large for recursion ({requested} exceeds the limit of {max})"
            ),
            EngineError::Overflow => write!(f, "result is too large to represent"),
        }
    }
}

impl std::error::Error for EngineError {}

// ============================================================================
// Limits
// ============================================================================

/// Input bounds enforced by `parse_request` and `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub factorial_max: u32,
    pub prime_limit_max: u64,
    pub max_operands: usize,
    /// Cap for divisibility and factorization inputs.
    pub number_max: u64,
}

pub const DEFAULT_PRIME_LIMIT_MAX: u64 = 100_000;
pub const DEFAULT_MAX_OPERANDS: usize = 10;
pub const DEFAULT_NUMBER_MAX: u64 = 1_000_000_000_000;
/// Highest `number_max` config may ask for. Trial division of a prime this
/// size still finishes in well under a second.
pub const NUMBER_MAX_CEILING: u64 = 1_000_000_000_000_000;

impl Default for Limits {
    fn default() -> Self {
        Self {
            factorial_max: factorial::MAX_FACTORIAL,
            prime_limit_max: DEFAULT_PRIME_LIMIT_MAX,
            max_operands: DEFAULT_MAX_OPERANDS,
            number_max: DEFAULT_NUMBER_MAX,
        }
    }
}

// ============================================================================
// Requests and Outcomes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Divisibility(u64),
    Factorize(i64),
    Primes(u64),
    Factorial(u32),
    GcdLcm {
        operation: Operation,
        values: Vec<u64>,
    },
}

impl Request {
    pub fn topic(&self) -> TopicId {
        match self {
            Request::Divisibility(_) => TopicId::Divisibility,
            Request::Factorize(_) => TopicId::FundamentalTheorem,
            Request::Primes(_) => TopicId::Primes,
            Request::Factorial(_) => TopicId::Recursion,
            Request::GcdLcm { .. } => TopicId::GcdLcm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum Outcome {
    Divisibility(DivisibilityReport),
    Factorization(Factorization),
    Primes(PrimeListing),
    Factorial {
        n: u32,
        value: u64,
    },
    GcdLcm {
        operation: Operation,
        values: Vec<u64>,
        result: u64,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Divisibility(report) => write!(f, "{report}"),
            Outcome::Factorization(factorization) => write!(f, "{factorization}"),
            Outcome::Primes(listing) => write!(f, "{listing}"),
            Outcome::Factorial { n, value } => write!(f, "The factorial of {n} is {value}"),
            Outcome::GcdLcm {
                operation,
                values,
                result,
            } => {
                let list: Vec<String> = values.iter().map(u64::to_string).collect();
                write!(f, "{}({}) = {result}", operation.label(), list.join(", "))
            }
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parsed wide enough to hold every `u64` and every `i64`, so a whole number
/// is only ever rejected for its size, never reported as "not a number".
fn parse_integer(raw: &str) -> Result<i128, EngineError> {
    let trimmed = raw.trim();
    trimmed.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => EngineError::InvalidDomain {
            value: trimmed.to_string(),
            reason: format!("must be at most {}", u64::MAX),
        },
        IntErrorKind::NegOverflow => EngineError::InvalidDomain {
            value: trimmed.to_string(),
            reason: format!("must be at least {}", i64::MIN),
        },
        _ => EngineError::InvalidInput {
            input: trimmed.to_string(),
        },
    })
}

fn at_least(value: i128, min: i128, what: &str) -> Result<i128, EngineError> {
    if value < min {
        return Err(EngineError::InvalidDomain {
            value: value.to_string(),
            reason: format!("{what} must be at least {min}"),
        });
    }
    Ok(value)
}

/// `min..=max` check that hands back the value as `u64`. `min` must be ≥ 0.
fn in_range(value: i128, min: i128, max: u64, what: &str) -> Result<u64, EngineError> {
    let value = at_least(value, min, what)?;
    u64::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| EngineError::InvalidDomain {
            value: value.to_string(),
            reason: format!("{what} must be at most {max}"),
        })
}

/// Turn what the user typed into a request for `topic`.
///
/// `operation` only matters for `TopicId::GcdLcm`. The factorial bound is
/// left to `run` so that it surfaces as `RecursionDepthExceeded`.
pub fn parse_request(
    topic: TopicId,
    raw: &str,
    operation: Operation,
    limits: &Limits,
) -> Result<Request, EngineError> {
    match topic {
        TopicId::Divisibility => {
            let n = in_range(parse_integer(raw)?, 1, limits.number_max, "the number")?;
            Ok(Request::Divisibility(n))
        }
        TopicId::FundamentalTheorem => {
            // n <= 1 is answered by the engine itself ("cannot be decomposed")
            let n = at_least(parse_integer(raw)?, i128::from(i64::MIN), "the number")?;
            if n > 1 {
                in_range(n, 2, limits.number_max, "the number")?;
            }
            let n = i64::try_from(n).map_err(|_| EngineError::InvalidDomain {
                value: n.to_string(),
                reason: format!("the number must be at most {}", i64::MAX),
            })?;
            Ok(Request::Factorize(n))
        }
        TopicId::Primes => {
            let limit = in_range(parse_integer(raw)?, 1, limits.prime_limit_max, "the limit")?;
            Ok(Request::Primes(limit))
        }
        TopicId::Recursion => {
            let n = in_range(parse_integer(raw)?, 0, u64::MAX, "the number")?;
            let n = u32::try_from(n).map_err(|_| EngineError::RecursionDepthExceeded {
                requested: n,
                max: limits.factorial_max.min(factorial::MAX_FACTORIAL),
            })?;
            Ok(Request::Factorial(n))
        }
        TopicId::GcdLcm => {
            let values = raw
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| in_range(parse_integer(s)?, 1, u64::MAX, "each number"))
                .collect::<Result<Vec<u64>, EngineError>>()?;
            if values.len() < 2 || values.len() > limits.max_operands {
                return Err(EngineError::InvalidDomain {
                    value: format!("{} numbers", values.len()),
                    reason: format!("enter between 2 and {} numbers", limits.max_operands),
                });
            }
            Ok(Request::GcdLcm { operation, values })
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run the engine behind a request.
pub fn run(request: &Request, limits: &Limits) -> Result<Outcome, EngineError> {
    debug!("Running {:?} engine: {:?}", request.topic(), request);
    let outcome = match request {
        Request::Divisibility(n) => Outcome::Divisibility(divisibility::analyze(*n)),
        Request::Factorize(n) => Outcome::Factorization(factorization::factorize(*n)),
        Request::Primes(limit) => Outcome::Primes(primes::enumerate(*limit)),
        Request::Factorial(n) => Outcome::Factorial {
            n: *n,
            value: factorial::factorial(*n, limits.factorial_max)?,
        },
        Request::GcdLcm { operation, values } => Outcome::GcdLcm {
            operation: *operation,
            values: values.clone(),
            result: gcd_lcm::fold(*operation, values)?,
        },
    };
    Ok(outcome)
}

/// `parse_request` followed by `run`.
pub fn evaluate(
    topic: TopicId,
    raw: &str,
    operation: Operation,
    limits: &Limits,
) -> Result<Outcome, EngineError> {
    let request = parse_request(topic, raw, operation, limits)?;
    run(&request, limits)
}
