#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Restricted multivariate discrete parameter domains for bandit-style
//! optimization.
//!
//! A [`BanditParameter`] is a named variable whose valid values are **not**
//! the Cartesian product of per-column ranges but an explicit enumerated set
//! of joint value-combinations, stored as rows of an immutable N×D table.
//! It reflects one sub-parameter descriptor per column, tests exact set
//! membership, projects arbitrary points onto the nearest valid row, reports
//! dimension and bounds, and draws uniform samples from the valid set.
//!
//! # Getting Started
//!
//! ```
//! use param_space::prelude::*;
//!
//! // Three valid (depth, width) combinations, not the full 2x2 product.
//! let domain = DomainTable::from_numeric_rows(vec![
//!     vec![1.0, 10.0],
//!     vec![1.0, 20.0],
//!     vec![2.0, 10.0],
//! ])?;
//! let param = BanditParameter::new("layer", domain, None)?;
//!
//! // Each coordinate of [2, 20] appears somewhere, but never jointly.
//! assert!(!param.check_in_domain(&[2.0, 20.0])?);
//!
//! // Projection always lands exactly on a domain row.
//! let rounded = param.round(&Matrix::from_rows(vec![vec![1.2, 10.9]])?)?;
//! assert_eq!(rounded.row(0), &[1.0, 10.0]);
//!
//! // Sampling draws whole rows, preserving the joint restriction.
//! for row in param.sample_uniform(10).rows() {
//!     assert!(param.check_in_domain(row)?);
//! }
//! # Ok::<(), param_space::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`BanditParameter`] | The restricted joint domain: membership, rounding, bounds, sampling. |
//! | [`DomainTable`] | Construction-time N×D table of [`CellValue`]s, one column per sub-parameter slot. |
//! | [`Matrix`] | Dense numeric table used for the stored domain and query batches. |
//! | [`Parameter`](parameter::Parameter) | Generic capability (`name`, `bounds`, `dimension`) consumed by optimizers. |
//! | [`SubParameter`](parameter::SubParameter) | Closed union of per-column descriptors: continuous, discrete, categorical. |
//! | [`OneHotEncoding`] | Indicator-vector encoding backing categorical descriptors. |
//!
//! Categorical sub-parameters are reflected from non-numeric columns but are
//! **not yet supported** end-to-end: construction fails with
//! [`Error::UnsupportedCategorical`] rather than silently coercing.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on the public data types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at construction, rounding, and sampling | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod bandit;
mod encoding;
mod error;
mod matrix;
pub mod parameter;
mod table;

pub use bandit::{BanditParameter, Query};
pub use encoding::OneHotEncoding;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use table::{CellValue, DomainTable};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use param_space::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bandit::{BanditParameter, Query};
    pub use crate::encoding::OneHotEncoding;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::parameter::{
        CategoricalParameter, ContinuousParameter, DiscreteParameter, Parameter, SubParameter,
    };
    pub use crate::table::{CellValue, DomainTable};
}
