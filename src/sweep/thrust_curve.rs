use tracing::{debug, info};

use crate::error::Result;
use crate::units::{ft_per_sec_to_knots, knots_to_ft_per_sec};
use crate::vehicle::{Aircraft, AltitudeBand};

use super::{sample, Extremum, Sample, Series};

/// Thrust required and available for one altitude band. Speeds are knots,
/// thrust is lb.
#[derive(Debug, Clone)]
pub struct ThrustCurve {
    pub band: AltitudeBand,
    pub required: Series,
    pub available: f64,
    /// Lowest sampled thrust required.
    pub min_required: Option<Extremum>,
    /// Analytic minimum-drag speed.
    pub min_drag_speed_kt: f64,
    /// Speeds where the sampled T_R curve meets T_A.
    pub crossings: Vec<f64>,
}

impl ThrustCurve {
    /// Constant T_A line over the same airspeeds as `required`.
    pub fn available_series(&self) -> Series {
        let samples = self
            .required
            .xs()
            .map(|x| Sample { x, y: self.available })
            .collect();
        Series::new(format!("T_A at {}", self.band.name), samples)
    }

    /// Thrust margin T_A − T_R at each sampled speed.
    pub fn excess_thrust(&self) -> Series {
        let samples = self
            .required
            .samples
            .iter()
            .map(|s| Sample { x: s.x, y: self.available - s.y })
            .collect();
        Series::new(format!("Excess thrust at {}", self.band.name), samples)
    }
}

/// Sweep the band's airspeed range and evaluate the aircraft's drag polar.
pub fn thrust_curve(aircraft: &Aircraft, band: &AltitudeBand) -> Result<ThrustCurve> {
    let rho = band.density;
    debug!(band = %band.name, samples = band.airspeed.len(), "sweeping thrust required");

    let required = sample(&format!("T_R at {}", band.name), &band.airspeed, |kt| {
        aircraft.thrust_required(rho, knots_to_ft_per_sec(kt))
    })?;
    let available = aircraft.thrust_available(rho);
    let min_required = required.min();
    let crossings = required.crossings(available);

    info!(
        band = %band.name,
        available,
        min_required = min_required.map(|m| m.y),
        crossings = crossings.len(),
        "thrust curve"
    );

    Ok(ThrustCurve {
        band: band.clone(),
        required,
        available,
        min_required,
        min_drag_speed_kt: ft_per_sec_to_knots(aircraft.min_drag_speed(rho)),
        crossings,
    })
}

pub fn thrust_curves(aircraft: &Aircraft, bands: &[AltitudeBand]) -> Result<Vec<ThrustCurve>> {
    bands.iter().map(|b| thrust_curve(aircraft, b)).collect()
}
