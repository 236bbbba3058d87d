//! # Topics
//!
//! The five demonstrations Numera offers. Every piece of static content
//! (titles, definitions, source listings) hangs off `TopicId` through an
//! exhaustive `match`, so adding a topic fails to compile until it has all
//! of them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    Divisibility,
    #[value(alias = "factorization")]
    FundamentalTheorem,
    Primes,
    #[value(alias = "factorial")]
    Recursion,
    #[value(alias = "gcd", alias = "lcm")]
    GcdLcm,
}

impl TopicId {
    /// Menu order.
    pub const ALL: [TopicId; 5] = [
        TopicId::Divisibility,
        TopicId::FundamentalTheorem,
        TopicId::Primes,
        TopicId::Recursion,
        TopicId::GcdLcm,
    ];

    /// Position in the menu (0-based).
    pub fn index(self) -> usize {
        match self {
            TopicId::Divisibility => 0,
            TopicId::FundamentalTheorem => 1,
            TopicId::Primes => 2,
            TopicId::Recursion => 3,
            TopicId::GcdLcm => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<TopicId> {
        Self::ALL.get(index).copied()
    }

    /// Page heading.
    pub fn title(self) -> &'static str {
        match self {
            TopicId::Divisibility => "Divisibility",
            TopicId::FundamentalTheorem => "Fundamental Theorem of Arithmetic",
            TopicId::Primes => "Prime Numbers",
            TopicId::Recursion => "Recursion",
            TopicId::GcdLcm => "GCD and LCM",
        }
    }

    /// Short label used in the title bar and footer.
    pub fn label(self) -> &'static str {
        match self {
            TopicId::Divisibility => "Divisibility",
            TopicId::FundamentalTheorem => "Fundamental Theorem",
            TopicId::Primes => "Primes",
            TopicId::Recursion => "Recursion",
            TopicId::GcdLcm => "GCD & LCM",
        }
    }

    /// Prompt shown above the execute page's input box.
    pub fn prompt(self) -> &'static str {
        match self {
            TopicId::Divisibility => "Enter a number (>= 1)",
            TopicId::FundamentalTheorem => "Enter a number greater than 1",
            TopicId::Primes => "List primes up to",
            TopicId::Recursion => "Compute the factorial of",
            TopicId::GcdLcm => "Numbers separated by spaces or commas",
        }
    }

    /// Explanatory text, as markdown.
    pub fn definition(self) -> &'static str {
        match self {
            TopicId::Divisibility => DIVISIBILITY_DEFINITION,
            TopicId::FundamentalTheorem => FUNDAMENTAL_THEOREM_DEFINITION,
            TopicId::Primes => PRIMES_DEFINITION,
            TopicId::Recursion => RECURSION_DEFINITION,
            TopicId::GcdLcm => GCD_LCM_DEFINITION,
        }
    }

    /// Rust listing of the routine behind the topic.
    pub fn source_listing(self) -> &'static str {
        match self {
            TopicId::Divisibility => DIVISIBILITY_SOURCE,
            TopicId::FundamentalTheorem => FUNDAMENTAL_THEOREM_SOURCE,
            TopicId::Primes => PRIMES_SOURCE,
            TopicId::Recursion => RECURSION_SOURCE,
            TopicId::GcdLcm => GCD_LCM_SOURCE,
        }
    }
}

const DIVISIBILITY_DEFINITION: &str = "\
Divisibility studies when one number can be divided exactly by another. \
A number *a* is divisible by *b* if there is an integer *c* such that `a = b × c`.

**Divisibility rules:**

- By 2: the last digit is even
- By 3: the sum of the digits is divisible by 3
- By 4: the last two digits form a number divisible by 4
- By 5: the number ends in 0 or 5
- By 8: the last three digits form a number divisible by 8
- By 9: the sum of the digits is divisible by 9
- By 10: the number ends in 0
";

const FUNDAMENTAL_THEOREM_DEFINITION: &str = "\
The Fundamental Theorem of Arithmetic states that every integer greater than 1 \
can be written in exactly one way as a product of primes, ignoring the order of \
the factors.

**The theorem guarantees that:**

- Every number has a unique prime factorization
- Primes are the building blocks of all integers
- The order in which the prime factors are multiplied does not matter
";

const PRIMES_DEFINITION: &str = "\
A prime is a natural number greater than 1 whose only divisors are 1 and itself. \
Primes are the building blocks of the integers.

**Key properties:**

- 2 is the only even prime
- There are infinitely many primes (Euclid)
- Numbers greater than 1 that are not prime are called composite
- The distribution of primes follows intricate patterns

The listing produced here starts with 1, as the classroom version always has, \
even though 1 is not prime.
";

const RECURSION_DEFINITION: &str = "\
Recursion is a technique in programming and mathematics where a function is \
defined in terms of itself. It suits problems that split into smaller copies \
of the same problem.

**Ingredients:**

- Base case: the condition that stops the recursion
- Recursive case: the function calls itself on a smaller input
- Classic examples: factorial, Fibonacci
- Benefit: elegant code for naturally recursive problems

Inputs are capped at 20, the largest factorial that fits in 64 bits.
";

const GCD_LCM_DEFINITION: &str = "\
The Greatest Common Divisor (GCD) is the largest number that divides two or \
more numbers exactly. The Least Common Multiple (LCM) is the smallest number \
that is a multiple of two or more numbers.

**Properties:**

- `GCD(a, b) × LCM(a, b) = a × b`
- Euclid's algorithm computes the GCD efficiently
- The GCD simplifies fractions
- The LCM adds fractions with different denominators
";

const DIVISIBILITY_SOURCE: &str = r#"fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn divisible_by_3(n: u64) -> bool {
    digit_sum(n) % 3 == 0
}

fn divisible_by_4(n: u64) -> bool {
    (n % 100) % 4 == 0
}

fn divisible_by_8(n: u64) -> bool {
    (n % 1000) % 8 == 0
}
// ... and so on for 2, 5, 7, 9 and 10
"#;

const FUNDAMENTAL_THEOREM_SOURCE: &str = r#"fn factorize(n: u64) -> BTreeMap<u64, u32> {
    let mut rest = n;
    let mut factors = BTreeMap::new();
    let mut divisor = 2;

    while divisor * divisor <= rest {
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
"#;

const PRIMES_SOURCE: &str = r#"fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

fn primes_up_to(limit: u64) -> Vec<u64> {
    (2..=limit).filter(|&k| is_prime(k)).collect()
}
"#;

const RECURSION_SOURCE: &str = r#"fn factorial(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * factorial(n - 1)
    }
}
"#;

const GCD_LCM_SOURCE: &str = r#"fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
"#;
