use aero_charts::io::csv;
use aero_charts::io::json::{self, Summary};
use aero_charts::sweep::{self, DynamicPressureRun, ThrustCurve};
use aero_charts::vehicle::{presets, Aircraft};
use aero_charts::AeroError;
use tracing_subscriber::EnvFilter;

/// Time span shown in the q table, s.
const Q_TABLE_SPAN: f64 = 150.0;
const Q_TABLE_INTERVAL: f64 = 10.0;

fn main() -> Result<(), AeroError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // -----------------------------------------------------------------------
    // Run both studies
    // -----------------------------------------------------------------------
    let aircraft = presets::a321();
    let time = presets::ascent_time();
    let runs = sweep::run_profiles(&presets::ascent_profiles(), &time)?;
    let curves = sweep::thrust_curves(&aircraft, &presets::altitude_bands())?;

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DYNAMIC PRESSURE — vertical ascent from rest");
    println!("====================================================================");
    println!();
    print_max_q(&runs);
    print_q_table(&runs, time.step);

    println!("====================================================================");
    println!("  THRUST REQUIRED & THRUST AVAILABLE — {}", aircraft.name);
    println!("====================================================================");
    println!();
    print_aircraft(&aircraft);
    for curve in &curves {
        print_curve(curve);
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    csv::write_dynamic_pressure_file("dynamic_pressure.csv", &runs)?;
    csv::write_thrust_curves_file("thrust_curves.csv", &curves)?;
    json::write_summary_file("summary.json", &Summary::new(&aircraft, &runs, &curves))?;

    println!("  Exported: dynamic_pressure.csv, thrust_curves.csv, summary.json");
    println!("====================================================================");
    println!();
    Ok(())
}

fn print_max_q(runs: &[DynamicPressureRun]) {
    println!("  Max-q");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>18}  {:>9}  {:>7}  {:>9}  {:>9}  {:>6}",
        "profile", "q (psf)", "t (s)", "alt (ft)", "v (ft/s)", "Mach"
    );
    for run in runs {
        match &run.max_q {
            Some(m) => println!(
                "  {:>18}  {:>9.0}  {:>7.1}  {:>9.0}  {:>9.1}  {:>6.2}",
                run.profile.name, m.q, m.time, m.altitude, m.velocity, m.mach
            ),
            None => println!("  {:>18}  (no samples)", run.profile.name),
        }
    }
    println!();
}

fn print_q_table(runs: &[DynamicPressureRun], step: f64) {
    println!("  q (psf) vs time");
    println!("  ──────────────────────────────────────────────────────────────────");
    print!("  {:>7}", "t (s)");
    for run in runs {
        print!("  {:>18}", run.profile.name);
    }
    println!();

    let stride = ((Q_TABLE_INTERVAL / step).round() as usize).max(1);
    let rows = runs.iter().map(|r| r.series.len()).min().unwrap_or(0);
    for i in (0..rows).step_by(stride) {
        let t = runs[0].series.samples[i].x;
        if t > Q_TABLE_SPAN {
            break;
        }
        print!("  {:>7.1}", t);
        for run in runs {
            print!("  {:>18.1}", run.series.samples[i].y);
        }
        println!();
    }
    println!();
}

fn print_aircraft(aircraft: &Aircraft) {
    println!("  Aircraft");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Weight:        {:>8.0} lb    Wing area:    {:>8.0} ft^2",
        aircraft.weight, aircraft.wing_area
    );
    println!(
        "  Span:          {:>8.2} ft    AR:           {:>8.2}",
        aircraft.span,
        aircraft.aspect_ratio()
    );
    println!(
        "  CD0:           {:>8.4}       k:            {:>8.5}",
        aircraft.cd0,
        aircraft.k()
    );
    println!(
        "  Rated thrust:  {:>8.0} lb    Usable:       {:>7.0} %",
        aircraft.rated_thrust,
        aircraft.usable_thrust_fraction * 100.0
    );
    println!();
}

fn print_curve(curve: &ThrustCurve) {
    println!("  {}  (rho = {:.2e} slug/ft^3)", curve.band.name, curve.band.density);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  T_A:            {:>8.0} lb", curve.available);
    if let Some(m) = curve.min_required {
        println!(
            "  Min T_R:        {:>8.0} lb @ {:.0} kt  (analytic V_md {:.1} kt)",
            m.y, m.x, curve.min_drag_speed_kt
        );
    }
    if let Some(marker) = &curve.band.marker {
        println!("  {}: {:.0} kt", marker.label, marker.speed_kt);
    }
    if curve.crossings.is_empty() {
        println!("  T_R = T_A:      outside swept range");
    } else {
        let speeds: Vec<String> = curve.crossings.iter().map(|v| format!("{:.1} kt", v)).collect();
        println!("  T_R = T_A:      {}", speeds.join(", "));
    }
    println!();
}
