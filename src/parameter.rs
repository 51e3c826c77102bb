//! Central parameter trait and the sub-parameter types a bandit domain is
//! built from.
//!
//! The [`Parameter`] trait is the generic capability an optimizer consumes:
//! a name, a flat list of bounds, and an effective dimension. The concrete
//! sub-parameter kinds ([`ContinuousParameter`], [`DiscreteParameter`] and
//! [`CategoricalParameter`]) are wrapped in the closed [`SubParameter`]
//! union so that kind-dependent behavior is dispatched by exhaustive pattern
//! matching rather than runtime type inspection.

use crate::encoding::OneHotEncoding;
use crate::error::{Error, Result};

/// The generic capability exposed by every parameter.
///
/// [`BanditParameter`](crate::BanditParameter) implements this trait too, so
/// a restricted joint domain can stand wherever a plain parameter is
/// expected.
pub trait Parameter {
    /// Returns the parameter name.
    fn name(&self) -> &str;

    /// Returns one `(low, high)` pair per dimension of this parameter.
    fn bounds(&self) -> Vec<(f64, f64)>;

    /// Returns the number of dimensions this parameter contributes.
    fn dimension(&self) -> usize;
}

/// A continuous parameter over a closed interval.
///
/// Representable by the framework, but never produced when reflecting a
/// bandit domain: enumerated columns are always discrete or categorical.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousParameter {
    name: String,
    low: f64,
    high: f64,
}

impl ContinuousParameter {
    /// Creates a continuous parameter over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `low > high`.
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidBounds { low, high });
        }
        Ok(Self {
            name: name.into(),
            low,
            high,
        })
    }

    /// Returns `true` if `value` lies within the interval.
    #[must_use]
    pub fn check_in_domain(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Clamps `value` to the interval.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

impl Parameter for ContinuousParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(self.low, self.high)]
    }

    fn dimension(&self) -> usize {
        1
    }
}

/// A discrete parameter over an explicit finite set of numeric values.
///
/// Values are sorted and deduplicated at construction. Membership is exact:
/// no tolerance is applied, floating noise is expected to be removed by
/// [`round`](DiscreteParameter::round) beforehand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteParameter {
    name: String,
    values: Vec<f64>,
}

impl DiscreteParameter {
    /// Creates a discrete parameter over the given values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValues`] if `values` is empty.
    pub fn new(name: impl Into<String>, mut values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyValues);
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Returns the valid values in ascending order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `true` if `value` is exactly one of the valid values.
    #[allow(clippy::float_cmp)] // membership is exact by contract
    #[must_use]
    pub fn check_in_domain(&self, value: f64) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    /// Returns the valid value closest to `value`. On ties the smaller valid
    /// value wins, since values are scanned in ascending order.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let mut nearest = self.values[0];
        let mut best = (nearest - value).abs();
        for &v in &self.values[1..] {
            let distance = (v - value).abs();
            if distance < best {
                nearest = v;
                best = distance;
            }
        }
        nearest
    }
}

impl Parameter for DiscreteParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        // values is non-empty and sorted
        vec![(self.values[0], self.values[self.values.len() - 1])]
    }

    fn dimension(&self) -> usize {
        1
    }
}

/// A categorical parameter backed by a one-hot encoding.
///
/// Contributes one dimension and one `(0, 1)` bound pair per encoding level.
/// Bandit domains can reflect one from a non-numeric column but reject it
/// immediately afterwards; see
/// [`Error::UnsupportedCategorical`](crate::Error::UnsupportedCategorical).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoricalParameter {
    name: String,
    encoding: OneHotEncoding,
}

impl CategoricalParameter {
    /// Creates a categorical parameter from an encoding.
    #[must_use]
    pub fn new(name: impl Into<String>, encoding: OneHotEncoding) -> Self {
        Self {
            name: name.into(),
            encoding,
        }
    }

    /// Returns the backing one-hot encoding.
    #[must_use]
    pub fn encoding(&self) -> &OneHotEncoding {
        &self.encoding
    }
}

impl Parameter for CategoricalParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0.0, 1.0); self.encoding.dimension()]
    }

    fn dimension(&self) -> usize {
        self.encoding.dimension()
    }
}

/// A single column's descriptor within a bandit domain.
///
/// The set of kinds is closed on purpose: dispatch is exhaustive, so adding a
/// kind forces every match site to handle it at compile time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubParameter {
    /// A continuous interval column.
    Continuous(ContinuousParameter),
    /// An enumerated numeric column.
    Discrete(DiscreteParameter),
    /// A one-hot encoded non-numeric column.
    Categorical(CategoricalParameter),
}

impl Parameter for SubParameter {
    fn name(&self) -> &str {
        match self {
            SubParameter::Continuous(p) => p.name(),
            SubParameter::Discrete(p) => p.name(),
            SubParameter::Categorical(p) => p.name(),
        }
    }

    fn bounds(&self) -> Vec<(f64, f64)> {
        match self {
            SubParameter::Continuous(p) => p.bounds(),
            SubParameter::Discrete(p) => p.bounds(),
            SubParameter::Categorical(p) => p.bounds(),
        }
    }

    fn dimension(&self) -> usize {
        match self {
            SubParameter::Continuous(p) => p.dimension(),
            SubParameter::Discrete(p) => p.dimension(),
            SubParameter::Categorical(p) => p.dimension(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn continuous_bounds_and_dimension() {
        let p = ContinuousParameter::new("x", -1.0, 1.0).unwrap();
        assert_eq!(p.bounds(), vec![(-1.0, 1.0)]);
        assert_eq!(p.dimension(), 1);
        assert_eq!(p.name(), "x");
    }

    #[test]
    fn continuous_invalid_bounds() {
        let err = ContinuousParameter::new("x", 1.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));
    }

    #[test]
    fn continuous_membership_and_round() {
        let p = ContinuousParameter::new("x", 0.0, 1.0).unwrap();
        assert!(p.check_in_domain(0.5));
        assert!(!p.check_in_domain(1.5));
        assert_eq!(p.round(1.5), 1.0);
        assert_eq!(p.round(-0.5), 0.0);
        assert_eq!(p.round(0.25), 0.25);
    }

    #[test]
    fn discrete_sorts_and_dedups() {
        let p = DiscreteParameter::new("n", vec![3.0, 1.0, 2.0, 1.0]).unwrap();
        assert_eq!(p.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(p.bounds(), vec![(1.0, 3.0)]);
        assert_eq!(p.dimension(), 1);
    }

    #[test]
    fn discrete_empty_rejected() {
        assert!(matches!(
            DiscreteParameter::new("n", vec![]),
            Err(Error::EmptyValues)
        ));
    }

    #[test]
    fn discrete_membership_is_exact() {
        let p = DiscreteParameter::new("n", vec![1.0, 2.0]).unwrap();
        assert!(p.check_in_domain(2.0));
        assert!(!p.check_in_domain(2.0 + 1e-12));
    }

    #[test]
    fn discrete_round_nearest() {
        let p = DiscreteParameter::new("n", vec![1.0, 2.0, 10.0]).unwrap();
        assert_eq!(p.round(1.4), 1.0);
        assert_eq!(p.round(7.0), 10.0);
        // Tie between 1.0 and 2.0: the smaller value wins.
        assert_eq!(p.round(1.5), 1.0);
    }

    #[test]
    fn categorical_bounds_per_level() {
        let encoding =
            OneHotEncoding::new(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]).unwrap();
        let p = CategoricalParameter::new("kind", encoding);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.bounds(), vec![(0.0, 1.0); 3]);
        assert_eq!(p.encoding().categories(), ["a", "b", "c"]);
    }

    #[test]
    fn sub_parameter_delegates() {
        let discrete = SubParameter::Discrete(DiscreteParameter::new("n", vec![1.0, 5.0]).unwrap());
        assert_eq!(discrete.name(), "n");
        assert_eq!(discrete.dimension(), 1);
        assert_eq!(discrete.bounds(), vec![(1.0, 5.0)]);

        let encoding = OneHotEncoding::new(vec!["a".to_owned(), "b".to_owned()]).unwrap();
        let categorical = SubParameter::Categorical(CategoricalParameter::new("kind", encoding));
        assert_eq!(categorical.dimension(), 2);

        let continuous =
            SubParameter::Continuous(ContinuousParameter::new("x", 0.0, 1.0).unwrap());
        assert_eq!(continuous.bounds(), vec![(0.0, 1.0)]);
    }
}
