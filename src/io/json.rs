use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::sweep::{DynamicPressureRun, MaxQ, ThrustCurve};
use crate::vehicle::Aircraft;

/// Headline figures from both studies.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub aircraft: AircraftSummary,
    pub ascent: Vec<AscentSummary>,
    pub thrust: Vec<BandSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AircraftSummary {
    pub name: String,
    pub weight_lb: f64,
    pub aspect_ratio: f64,
    pub k: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AscentSummary {
    pub profile: String,
    pub acceleration_fps2: f64,
    pub max_q: Option<MaxQ>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandSummary {
    pub band: String,
    pub density_slug_ft3: f64,
    pub thrust_available_lb: f64,
    pub min_thrust_required_lb: Option<f64>,
    pub min_thrust_required_kt: Option<f64>,
    pub min_drag_speed_kt: f64,
    pub crossings_kt: Vec<f64>,
}

impl Summary {
    pub fn new(aircraft: &Aircraft, runs: &[DynamicPressureRun], curves: &[ThrustCurve]) -> Self {
        Summary {
            aircraft: AircraftSummary {
                name: aircraft.name.clone(),
                weight_lb: aircraft.weight,
                aspect_ratio: aircraft.aspect_ratio(),
                k: aircraft.k(),
            },
            ascent: runs
                .iter()
                .map(|r| AscentSummary {
                    profile: r.profile.name.clone(),
                    acceleration_fps2: r.profile.acceleration,
                    max_q: r.max_q,
                })
                .collect(),
            thrust: curves
                .iter()
                .map(|c| BandSummary {
                    band: c.band.name.clone(),
                    density_slug_ft3: c.band.density,
                    thrust_available_lb: c.available,
                    min_thrust_required_lb: c.min_required.map(|m| m.y),
                    min_thrust_required_kt: c.min_required.map(|m| m.x),
                    min_drag_speed_kt: c.min_drag_speed_kt,
                    crossings_kt: c.crossings.clone(),
                })
                .collect(),
        }
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &Summary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_summary_file(path: &str, summary: &Summary) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
