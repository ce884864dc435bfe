//! Criterion weights and impact directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TopsisError;

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher values are better (`+`).
    Benefit,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    /// Returns the symbol used in impact strings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Impact {
    type Err = TopsisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            _ => Err(TopsisError::InvalidImpact),
        }
    }
}

/// Ordered per-criterion weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting non-finite and non-positive values.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        for &value in &weights {
            if !value.is_finite() {
                return Err(TopsisError::InvalidWeights);
            }
            if value <= 0.0 {
                return Err(TopsisError::NonPositiveWeight { value });
            }
        }
        Ok(Self(weights))
    }

    /// Parses a comma-separated weights string such as `"1, 2, 0.5"`.
    ///
    /// Any token that does not parse fails the whole string.
    pub fn parse(raw: &str) -> Result<Self, TopsisError> {
        let weights = raw
            .split(',')
            .map(|token| token.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| TopsisError::InvalidWeights)?;
        Self::new(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Ordered per-criterion impact directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses a comma-separated impacts string such as `"+,-,+"`.
    ///
    /// Tokens are trimmed and must be exactly `+` or `-`.
    pub fn parse(raw: &str) -> Result<Self, TopsisError> {
        raw.split(',')
            .map(|token| token.trim().parse::<Impact>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    /// Returns a copy with every direction flipped.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().map(Impact::reversed).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_parses_symbols() {
        assert_eq!("+".parse::<Impact>().unwrap(), Impact::Benefit);
        assert_eq!("-".parse::<Impact>().unwrap(), Impact::Cost);
        assert_eq!("x".parse::<Impact>(), Err(TopsisError::InvalidImpact));
        assert_eq!("++".parse::<Impact>(), Err(TopsisError::InvalidImpact));
    }

    #[test]
    fn impact_reverses() {
        assert_eq!(Impact::Benefit.reversed(), Impact::Cost);
        assert_eq!(Impact::Cost.reversed(), Impact::Benefit);
    }

    #[test]
    fn weights_parse_with_whitespace() {
        let weights = WeightVector::parse(" 1, 2.5 ,0.25").unwrap();
        assert_eq!(weights.as_slice(), &[1.0, 2.5, 0.25]);
    }

    #[test]
    fn weights_fail_as_a_whole_on_bad_token() {
        assert_eq!(WeightVector::parse("1,two,3"), Err(TopsisError::InvalidWeights));
        assert_eq!(WeightVector::parse("1,,3"), Err(TopsisError::InvalidWeights));
        assert_eq!(WeightVector::parse(""), Err(TopsisError::InvalidWeights));
    }

    #[test]
    fn weights_reject_non_finite_values() {
        assert_eq!(WeightVector::parse("1,inf"), Err(TopsisError::InvalidWeights));
        assert_eq!(WeightVector::parse("NaN,1"), Err(TopsisError::InvalidWeights));
    }

    #[test]
    fn weights_reject_non_positive_values() {
        assert_eq!(
            WeightVector::parse("1,0"),
            Err(TopsisError::NonPositiveWeight { value: 0.0 })
        );
        assert_eq!(
            WeightVector::parse("-1,2"),
            Err(TopsisError::NonPositiveWeight { value: -1.0 })
        );
    }

    #[test]
    fn impacts_parse_and_trim() {
        let impacts = ImpactVector::parse("+, -,+ ").unwrap();
        assert_eq!(
            impacts.as_slice(),
            &[Impact::Benefit, Impact::Cost, Impact::Benefit]
        );
    }

    #[test]
    fn impacts_reject_unknown_tokens() {
        assert_eq!(ImpactVector::parse("+,*"), Err(TopsisError::InvalidImpact));
        assert_eq!(ImpactVector::parse(""), Err(TopsisError::InvalidImpact));
        assert_eq!(ImpactVector::parse("+ -"), Err(TopsisError::InvalidImpact));
    }

    #[test]
    fn impacts_reverse_all() {
        let impacts = ImpactVector::parse("+,-").unwrap().reversed();
        assert_eq!(impacts.as_slice(), &[Impact::Cost, Impact::Benefit]);
    }
}
