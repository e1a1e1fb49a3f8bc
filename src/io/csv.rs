use std::io::Write;

use crate::error::Result;
use crate::sweep::{DynamicPressureRun, ThrustCurve};

/// Write q(t) for several profiles in wide format.
///
/// Columns: time_s, then one `q_<n>` column per run (psf). Runs are expected
/// to share a time sweep; a shorter run leaves its trailing cells empty.
pub fn write_dynamic_pressure<W: Write>(writer: &mut W, runs: &[DynamicPressureRun]) -> Result<()> {
    write!(writer, "time_s")?;
    for run in runs {
        write!(writer, ",q_{}", column_name(run.profile.acceleration))?;
    }
    writeln!(writer)?;

    let rows = runs.iter().map(|r| r.series.len()).max().unwrap_or(0);
    for i in 0..rows {
        let time = runs
            .iter()
            .find_map(|r| r.series.samples.get(i))
            .map_or(0.0, |s| s.x);
        write!(writer, "{:.2}", time)?;
        for run in runs {
            match run.series.samples.get(i) {
                Some(s) => write!(writer, ",{:.4}", s.y)?,
                None => write!(writer, ",")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write thrust curves in long format.
///
/// Columns: band, airspeed_kt, thrust_required_lb, thrust_available_lb
pub fn write_thrust_curves<W: Write>(writer: &mut W, curves: &[ThrustCurve]) -> Result<()> {
    writeln!(writer, "band,airspeed_kt,thrust_required_lb,thrust_available_lb")?;
    for c in curves {
        for s in &c.required.samples {
            writeln!(
                writer,
                "{},{:.1},{:.2},{:.2}",
                c.band.name, s.x, s.y, c.available
            )?;
        }
    }
    Ok(())
}

/// 51.76 -> "51_76"
fn column_name(acceleration: f64) -> String {
    acceleration.to_string().replace('.', "_")
}

pub fn write_dynamic_pressure_file(path: &str, runs: &[DynamicPressureRun]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_dynamic_pressure(&mut file, runs)
}

pub fn write_thrust_curves_file(path: &str, curves: &[ThrustCurve]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_thrust_curves(&mut file, curves)
}
