//! Parker population AIF
//!
//! Closed-form population-average arterial input function from prior
//! population pharmacokinetic data: the sum of two Gaussian lobes and a
//! sigmoid-modulated exponential decay, shifted by the bolus arrival delay.
//!
//! ```text
//! C(t) = (dose / 0.1) * (gaussian1 + gaussian2 + sigmoid) / (1 - hct)
//! ```
//!
//! The constants below are the published population fit and are fixed at
//! compile time; the Gaussian amplitudes are pre-scaled, i.e. `A / (σ √(2π))`.

use ndarray::Array1;

use super::params::ParkerParams;

// Published population fit. Do not refactor the arithmetic below into
// algebraically equivalent forms; the rounding of the reference curve depends
// on these exact literals and operations.
const GAUSS1_AMPLITUDE: f64 = 5.73258;
const GAUSS1_CENTER: f64 = 0.17046;
const GAUSS1_WIDTH: f64 = 0.0563;

const GAUSS2_AMPLITUDE: f64 = 0.997356;
const GAUSS2_CENTER: f64 = 0.365;
const GAUSS2_WIDTH: f64 = 0.132;

const DECAY_AMPLITUDE: f64 = 1.050;
const DECAY_RATE: f64 = 0.1685;
const SIGMOID_STEEPNESS: f64 = 38.078;
const SIGMOID_MIDPOINT: f64 = 0.483;

/// Reference dose of the population fit; `params.dose` scales relative to it
const REFERENCE_DOSE: f64 = 0.1;

/// Blood-plasma concentration at a single time point, in mM.
///
/// `t` is minutes since scan start. Total over the reals: every finite input
/// produces a value by plain IEEE-754 arithmetic, with no error path
/// (`hct == 1` divides by zero and yields non-finite values).
#[inline]
pub fn parker_conc(t: f64, params: &ParkerParams) -> f64 {
    let offset = t - params.prebolus;

    let gaussian1 = GAUSS1_AMPLITUDE
        * (-(offset - GAUSS1_CENTER) * (offset - GAUSS1_CENTER)
            / (2.0 * GAUSS1_WIDTH * GAUSS1_WIDTH))
            .exp();

    let gaussian2 = GAUSS2_AMPLITUDE
        * (-(offset - GAUSS2_CENTER) * (offset - GAUSS2_CENTER)
            / (2.0 * GAUSS2_WIDTH * GAUSS2_WIDTH))
            .exp();

    let sigmoid = DECAY_AMPLITUDE * (-DECAY_RATE * offset).exp()
        / (1.0 + (-SIGMOID_STEEPNESS * (offset - SIGMOID_MIDPOINT)).exp());

    (params.dose / REFERENCE_DOSE) * (gaussian1 + gaussian2 + sigmoid) / (1.0 - params.hct)
}

/// Evaluate the Parker population AIF over an array of time points.
///
/// Each element of `t` is minutes since scan start; the result holds the
/// blood-plasma concentration in mM at the corresponding index. The transform
/// is applied independently per element, so `t` need not be sorted or unique,
/// and an empty array yields an empty array.
///
/// # Examples
///
/// ```rust
/// use aifsol::{parker, ParkerParams};
/// use ndarray::Array1;
///
/// // 6 min acquisition sampled once per second
/// let t = Array1::linspace(0.0, 6.0, 361);
/// let ca = parker(&t, &ParkerParams::default());
///
/// assert_eq!(ca.len(), t.len());
/// ```
pub fn parker(t: &Array1<f64>, params: &ParkerParams) -> Array1<f64> {
    t.mapv(|ti| parker_conc(ti, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // Pinned from a reference evaluation of the published formula at the
    // default parameters; tolerance absorbs libm ulp differences.
    const REL_TOL: f64 = 1e-12;

    #[test]
    fn matches_reference_values_at_default_parameters() {
        let t = array![0.5, 1.0, 2.0, 6.0];
        let ca = parker(&t, &ParkerParams::default());

        assert_relative_eq!(ca[0], 0.08038467060967844, max_relative = REL_TOL);
        assert_relative_eq!(ca[1], 1.2247205855568697, max_relative = REL_TOL);
        assert_relative_eq!(ca[2], 0.8154951242138793, max_relative = REL_TOL);
        assert_relative_eq!(ca[3], 0.41563000072262396, max_relative = REL_TOL);
    }

    #[test]
    fn peak_sits_on_first_gaussian_center() {
        let params = ParkerParams::default();
        let peak = parker_conc(params.prebolus + GAUSS1_CENTER, &params);
        assert_relative_eq!(peak, 6.069249918951364, max_relative = REL_TOL);

        // The grid maximum of a 1 s sampling lands within one step of it
        let t = Array1::linspace(0.0, 6.0, 361);
        let ca = parker(&t, &params);
        let (argmax, _) = ca
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &c)| if c > acc.1 { (i, c) } else { acc });
        assert!((t[argmax] - (params.prebolus + GAUSS1_CENTER)).abs() <= 1.0 / 60.0);
    }

    #[test]
    fn baseline_before_bolus_arrival_is_negligible() {
        let params = ParkerParams::default();
        assert!(parker_conc(0.0, &params) < 1e-9);
        assert!(parker_conc(-1.0, &params) < 1e-30);
    }

    #[test]
    fn bolus_delay_moves_the_peak() {
        let delayed = ParkerParams::default().with_prebolus(2.0);
        let peak = parker_conc(2.0 + GAUSS1_CENTER, &delayed);
        assert_relative_eq!(peak, 6.069249918951364, max_relative = REL_TOL);
        assert!(parker_conc(0.5 + GAUSS1_CENTER, &delayed) < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let t: Array1<f64> = array![];
        let ca = parker(&t, &ParkerParams::default());
        assert!(ca.is_empty());
    }
}
