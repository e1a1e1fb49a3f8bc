use serde::{Deserialize, Serialize};

use crate::error::{AeroError, Result};

/// Half-open arithmetic range `[start, stop)` sampled every `step`.
///
/// Sample `i` is `start + i·step`, computed from the index so long sweeps
/// do not accumulate rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

/// Upper bound on samples in one sweep.
pub const MAX_SAMPLES: usize = 1 << 24;

impl Sweep {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !(self.start.is_finite() && self.stop.is_finite() && self.step.is_finite()) {
            "bounds and step must be finite"
        } else if self.step <= 0.0 {
            "step must be positive"
        } else if self.stop < self.start {
            "stop < start"
        } else if self.count() > MAX_SAMPLES as f64 {
            "too many samples"
        } else {
            return Ok(());
        };
        Err(AeroError::InvalidSweep {
            start: self.start,
            stop: self.stop,
            step: self.step,
            reason,
        })
    }

    /// Number of samples; zero for an invalid sweep.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        self.count() as usize
    }

    fn count(&self) -> f64 {
        ((self.stop - self.start) / self.step).ceil()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascent_sweep_has_1100_samples() {
        let s = Sweep::new(0.0, 550.0, 0.5);
        assert_eq!(s.len(), 1100);
        let v: Vec<f64> = s.values().collect();
        assert_eq!(v[0], 0.0);
        assert_eq!(v[69], 34.5);
        assert_eq!(*v.last().unwrap(), 549.5);
    }

    #[test]
    fn stop_is_excluded() {
        assert_eq!(Sweep::new(80.0, 750.0, 10.0).len(), 67);
        assert_eq!(Sweep::new(110.0, 745.0, 10.0).len(), 64);
        let last = Sweep::new(280.0, 695.0, 10.0).values().last();
        assert_eq!(last, Some(690.0));
    }

    #[test]
    fn empty_range_is_valid() {
        let s = Sweep::new(5.0, 5.0, 1.0);
        assert!(s.validate().is_ok());
        assert!(s.is_empty());
    }

    #[test]
    fn sample_count_is_bounded() {
        let at_limit = Sweep::new(0.0, MAX_SAMPLES as f64, 1.0);
        assert!(at_limit.validate().is_ok());
        assert_eq!(at_limit.len(), MAX_SAMPLES);

        let over = Sweep::new(0.0, MAX_SAMPLES as f64 + 1.0, 1.0);
        match over.validate() {
            Err(AeroError::InvalidSweep { reason, .. }) => assert_eq!(reason, "too many samples"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(over.len(), 0);
    }

    #[test]
    fn rejects_bad_sweeps() {
        for s in [
            Sweep::new(0.0, 10.0, 0.0),
            Sweep::new(0.0, 10.0, -1.0),
            Sweep::new(10.0, 0.0, 1.0),
            Sweep::new(0.0, f64::INFINITY, 1.0),
            Sweep::new(f64::NAN, 1.0, 1.0),
            Sweep::new(0.0, 1.0e30, 1.0e-10),
            Sweep::new(0.0, 1.0, f64::MIN_POSITIVE),
        ] {
            assert!(matches!(s.validate(), Err(AeroError::InvalidSweep { .. })), "{:?}", s);
            assert_eq!(s.len(), 0);
        }
    }
}
