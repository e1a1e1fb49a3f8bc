use aero_charts::atmosphere::{density, layer_at, LayerKind};
use aero_charts::io::{csv, json, Summary};
use aero_charts::kinematics::{altitude, velocity};
use aero_charts::physics::aerodynamics::{aspect_ratio, induced_drag_factor, thrust_required};
use aero_charts::sweep::{self, Sweep};
use aero_charts::units::knots_to_ft_per_sec;
use aero_charts::vehicle::{presets, AircraftBuilder, AltitudeBand, AscentProfile};
use aero_charts::AeroError;
use approx::assert_relative_eq;

#[test]
fn sea_level_density_matches_reference_weight() {
    assert_relative_eq!(density(0.0), 0.0765 / 32.17, max_relative = 0.01);
}

#[test]
fn reference_ascent_peaks_in_upper_troposphere() {
    let run = sweep::dynamic_pressure_sweep(&AscentProfile::new(51.76), &Sweep::new(0.0, 550.0, 0.5)).unwrap();
    let m = run.max_q.unwrap();

    // Recompute the peak sample directly from the physics functions.
    let t = 32.5;
    let q = 0.5 * density(altitude(t, 51.76)) * velocity(t, 51.76).powi(2);
    assert_eq!(m.time, t);
    assert_eq!(m.q, q);
    assert_relative_eq!(m.q, 1388.96, max_relative = 1e-5);
    assert_eq!(layer_at(m.altitude), LayerKind::Troposphere);

    // Later samples climb into the stratosphere and q decays.
    let last = run.series.samples.last().unwrap();
    assert_eq!(layer_at(altitude(last.x, 51.76)), LayerKind::UpperStratosphere);
    assert!(last.y < m.q);
}

#[test]
fn textbook_thrust_required_is_reproducible() {
    let k = induced_drag_factor(0.92, aspect_ratio(117.42, 1318.0));
    let a = thrust_required(23.77e-4, 400.0, 1318.0, 0.0185, k, 200_000.0);
    let b = thrust_required(23.77e-4, 400.0, 1318.0, 0.0185, k, 200_000.0);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_relative_eq!(a, 9915.2739, max_relative = 1e-8);
}

#[test]
fn knot_conversion_is_exact() {
    assert_eq!(knots_to_ft_per_sec(1.0), 1.68781);
}

#[test]
fn custom_aircraft_runs_through_the_thrust_sweep() {
    let trainer = AircraftBuilder::new("Trainer")
        .weight(2_400.0)
        .wing_area(174.0)
        .span(36.0)
        .cd0(0.027)
        .oswald(0.75)
        .rated_thrust(400.0)
        .build();
    let band = AltitudeBand::new("Sea Level", presets::SEA_LEVEL_DENSITY, Sweep::new(50.0, 160.0, 5.0));

    let curve = sweep::thrust_curve(&trainer, &band).unwrap();
    assert_eq!(curve.required.len(), 22);
    assert_eq!(curve.available, 400.0);
    let m = curve.min_required.unwrap();
    assert!((m.x - curve.min_drag_speed_kt).abs() <= 5.0);
}

#[test]
fn faults_propagate_instead_of_plotting_nan() {
    let band = AltitudeBand::new("Hover", presets::SEA_LEVEL_DENSITY, Sweep::new(0.0, 50.0, 10.0));
    let err = sweep::thrust_curve(&presets::a321(), &band).unwrap_err();
    assert!(matches!(err, AeroError::NonFinite { x, .. } if x == 0.0));

    let err = sweep::run_profiles(&presets::ascent_profiles(), &Sweep::new(0.0, 10.0, -0.5)).unwrap_err();
    assert!(matches!(err, AeroError::InvalidSweep { .. }));
}

#[test]
fn exports_cover_both_studies() {
    let aircraft = presets::a321();
    let runs = sweep::run_profiles(&presets::ascent_profiles(), &presets::ascent_time()).unwrap();
    let curves = sweep::thrust_curves(&aircraft, &presets::altitude_bands()).unwrap();

    let mut q_csv = Vec::new();
    csv::write_dynamic_pressure(&mut q_csv, &runs).unwrap();
    let q_csv = String::from_utf8(q_csv).unwrap();
    assert_eq!(q_csv.lines().count(), 1 + 1100);
    assert!(q_csv.starts_with("time_s,q_51_76,q_32_2,q_20\n"));

    let mut summary = Vec::new();
    json::write_summary(&mut summary, &Summary::new(&aircraft, &runs, &curves)).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&summary).unwrap();
    assert_eq!(value["ascent"].as_array().unwrap().len(), 3);
    assert_eq!(value["thrust"][0]["crossings_kt"].as_array().unwrap().len(), 1);
}
