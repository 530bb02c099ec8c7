//! Validated bit-strings used as oracle patterns and secrets.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AlgoError, AlgoResult};

/// A string over `{0, 1}`, stored as bits.
///
/// Position `k` is the `k`-th character as written, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Build from bits, leftmost first.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// `n` zero bits.
    pub fn zeros(n: usize) -> Self {
        Self::from_bits(std::iter::repeat_n(false, n))
    }

    /// `"1010..."` of length `n`.
    pub fn alternating(n: usize) -> Self {
        Self::from_bits((0..n).map(|k| k % 2 == 0))
    }

    /// Uniformly random string of length `n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::from_bits((0..n).map(|_| rng.r#gen::<bool>()))
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the string has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether every bit is 0.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }

    /// Bit at position `k`, leftmost first.
    pub fn bit(&self, k: usize) -> bool {
        self.bits.get(k).copied().unwrap_or(false)
    }

    /// Iterate over bits, leftmost first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Positions holding a 1, leftmost first.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(k, _)| k)
    }

    /// Fail unless the string has exactly `n` bits.
    pub fn require_len(&self, role: &'static str, n: usize) -> AlgoResult<&Self> {
        if self.len() == n {
            Ok(self)
        } else {
            Err(AlgoError::BitStringLength {
                role,
                expected: n,
                got: self.len(),
            })
        }
    }
}

impl FromStr for BitString {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(AlgoError::NonBinary { position, found }),
            })
            .collect::<AlgoResult<Vec<_>>>()
            .map(Self::from_bits)
    }
}

impl TryFrom<String> for BitString {
    type Error = AlgoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.to_string()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_and_display() {
        let s: BitString = "0110".parse().unwrap();
        assert_eq!(s.len(), 4);
        assert!(s.bit(1) && s.bit(2) && !s.bit(0));
        assert_eq!(s.ones().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(s.to_string(), "0110");
    }

    #[test]
    fn test_rejects_non_binary() {
        let err = "10a1".parse::<BitString>().unwrap_err();
        assert_eq!(err, AlgoError::NonBinary { position: 2, found: 'a' });
    }

    #[test]
    fn test_patterns() {
        assert_eq!(BitString::alternating(3).to_string(), "101");
        assert_eq!(BitString::alternating(4).to_string(), "1010");
        assert!(BitString::zeros(5).is_zero());
        assert!("".parse::<BitString>().unwrap().is_empty());
    }

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(BitString::random(9, &mut rng).len(), 9);
    }

    #[test]
    fn test_require_len() {
        let s = BitString::alternating(3);
        assert!(s.require_len("secret", 3).is_ok());
        assert_eq!(
            s.require_len("secret", 4).unwrap_err(),
            AlgoError::BitStringLength { role: "secret", expected: 4, got: 3 }
        );
    }

    #[test]
    fn test_serde_as_string() {
        let s: BitString = serde_json::from_str("\"101\"").unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"101\"");
        assert!(serde_json::from_str::<BitString>("\"12\"").is_err());
    }
}
