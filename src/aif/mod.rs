//! Arterial input function (AIF) models for DCE imaging analysis
//!
//! This module evaluates population-average AIF concentration-time curves,
//! the driving input to pharmacokinetic tissue models in dynamic
//! contrast-enhanced (DCE) analysis.
//!
//! # Design Philosophy
//!
//! - **Pure**: each evaluation is a stateless, element-wise map from a time
//!   array to a concentration array
//! - **Closed-form**: curves come from published population fits, with no
//!   integration or parameter estimation involved
//! - **Explicit**: models without a published formula fail with
//!   [`AifError::UnimplementedModel`] instead of returning an empty curve
//!
//! # Models
//!
//! | Model | Status | Description |
//! |-------|--------|-------------|
//! | Parker | Implemented | Two Gaussian lobes plus a sigmoid-modulated exponential decay |
//! | Georgiou | Placeholder | Fails until the published formula is wired in |
//! | Weinmann | Placeholder | Fails until the published formula is wired in |
//!
//! # Usage
//!
//! ```rust,ignore
//! use aifsol::prelude::*;
//! use ndarray::Array1;
//!
//! // 6 min acquisition sampled once per second
//! let t = Array1::linspace(0.0, 6.0, 361);
//!
//! // Parker model under the reference protocol
//! let ca = Aif::default().evaluate(&t)?;
//!
//! // Plasma curve for a patient with hematocrit 0.42
//! let params = ParkerParams::default().with_hct(0.42);
//! let ca_plasma = Aif::Parker(params).evaluate(&t)?;
//! ```
//!
//! Time points are minutes since scan start and concentrations are mM; unit
//! conversion is the caller's responsibility.

mod error;
mod params;
mod parker;

pub use error::AifError;
pub use params::ParkerParams;
pub use parker::{parker, parker_conc};

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Population AIF model selector.
///
/// Each variant maps a time array to a concentration array through
/// [`evaluate`](Aif::evaluate); model-specific constants travel with the
/// variant. Future formulas plug in as new variants with their own parameter
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Aif {
    /// Parker population model with its per-invocation constants
    Parker(ParkerParams),
    /// Georgiou model; no published formula is wired in yet
    Georgiou,
    /// Weinmann model; no published formula is wired in yet
    Weinmann,
}

impl Default for Aif {
    fn default() -> Self {
        Aif::Parker(ParkerParams::default())
    }
}

impl Aif {
    /// Model name as used in error messages and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Aif::Parker(_) => "parker",
            Aif::Georgiou => "georgiou",
            Aif::Weinmann => "weinmann",
        }
    }

    /// Evaluate the model over an array of time points in minutes.
    ///
    /// `Parker` always succeeds; the placeholder variants fail with
    /// [`AifError::UnimplementedModel`].
    pub fn evaluate(&self, t: &Array1<f64>) -> Result<Array1<f64>, AifError> {
        match self {
            Aif::Parker(params) => Ok(parker(t, params)),
            Aif::Georgiou => georgiou(t),
            Aif::Weinmann => weinmann(t),
        }
    }
}

/// Georgiou AIF model.
///
/// Declared for signature parity with the model family; the published formula
/// is not wired in, so every call fails with
/// [`AifError::UnimplementedModel`].
pub fn georgiou(_t: &Array1<f64>) -> Result<Array1<f64>, AifError> {
    Err(AifError::UnimplementedModel { model: "georgiou" })
}

/// Weinmann AIF model.
///
/// Declared for signature parity with the model family; the published formula
/// is not wired in, so every call fails with
/// [`AifError::UnimplementedModel`].
pub fn weinmann(_t: &Array1<f64>) -> Result<Array1<f64>, AifError> {
    Err(AifError::UnimplementedModel { model: "weinmann" })
}
