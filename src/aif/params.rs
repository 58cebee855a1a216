//! Parker model parameters

use serde::{Deserialize, Serialize};

/// Per-invocation constants for the Parker population AIF.
///
/// Defaults follow the reference acquisition protocol: bolus arrival 0.5 min
/// after scan start, whole-blood output (`hct = 0.0`), and the 0.1 reference
/// dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParkerParams {
    /// Time in minutes before the bolus arrives; shifts the time axis
    pub prebolus: f64,

    /// Hematocrit fraction
    ///
    /// The whole-blood curve is converted to plasma concentration by dividing
    /// by `1 - hct`. `hct == 1` saturates the output to non-finite values
    /// under IEEE-754 semantics; it is not treated as an error.
    pub hct: f64,

    /// Injected contrast agent dose, relative to the 0.1 reference dose of
    /// the population fit
    ///
    /// The physical unit is not defined by the published fit and is left to
    /// the caller; only the ratio against the reference dose enters the
    /// formula.
    pub dose: f64,
}

impl Default for ParkerParams {
    fn default() -> Self {
        Self {
            prebolus: 0.5,
            hct: 0.0,
            dose: 0.1,
        }
    }
}

impl ParkerParams {
    /// Set the prebolus delay in minutes
    pub fn with_prebolus(mut self, prebolus: f64) -> Self {
        self.prebolus = prebolus;
        self
    }

    /// Set the hematocrit fraction
    pub fn with_hct(mut self, hct: f64) -> Self {
        self.hct = hct;
        self
    }

    /// Set the injected dose
    pub fn with_dose(mut self, dose: f64) -> Self {
        self.dose = dose;
        self
    }
}
