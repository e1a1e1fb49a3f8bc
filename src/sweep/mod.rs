pub mod dynamic_pressure;
pub mod range;
pub mod series;
pub mod thrust_curve;

pub use dynamic_pressure::{dynamic_pressure_sweep, run_profiles, DynamicPressureRun, MaxQ};
pub use range::Sweep;
pub use series::{Extremum, Sample, Series};
pub use thrust_curve::{thrust_curve, thrust_curves, ThrustCurve};

use tracing::warn;

use crate::error::{AeroError, Result};

/// Evaluate `f` over `sweep`, stopping at the first non-finite result.
pub(crate) fn sample(
    label: &str,
    sweep: &Sweep,
    mut f: impl FnMut(f64) -> f64,
) -> Result<Series> {
    sweep.validate()?;
    let mut samples = Vec::with_capacity(sweep.len());
    for x in sweep.values() {
        let y = f(x);
        if !y.is_finite() {
            warn!(series = label, x, y, "sweep aborted on non-finite sample");
            return Err(AeroError::NonFinite { series: label.to_string(), x });
        }
        samples.push(Sample { x, y });
    }
    Ok(Series::new(label, samples))
}
