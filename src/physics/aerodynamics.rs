use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Steady level-flight aerodynamics (parabolic drag polar)
// ---------------------------------------------------------------------------

/// Dynamic pressure q = ½·ρ·v², lb/ft^2 for slug/ft^3 and ft/s.
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed.powi(2)
}

/// Lift coefficient needed to carry `weight` in level flight.
/// Zero airspeed gives +inf.
pub fn lift_coefficient(density: f64, speed: f64, wing_area: f64, weight: f64) -> f64 {
    2.0 * weight / (density * speed.powi(2) * wing_area)
}

/// Thrust required to balance drag in level flight: T_R = q·S·(CD0 + k·CL²)
pub fn thrust_required(
    density: f64,
    speed: f64,
    wing_area: f64,
    cd0: f64,
    k: f64,
    weight: f64,
) -> f64 {
    let cl = lift_coefficient(density, speed, wing_area, weight);
    0.5 * density * speed.powi(2) * wing_area * (cd0 + k * cl * cl)
}

pub fn aspect_ratio(span: f64, wing_area: f64) -> f64 {
    span * span / wing_area
}

/// Induced-drag factor k = 1 / (π·e·AR)
pub fn induced_drag_factor(oswald: f64, aspect_ratio: f64) -> f64 {
    1.0 / (PI * oswald * aspect_ratio)
}

/// Usable thrust, lapsed linearly with density ratio.
pub fn thrust_available(
    density: f64,
    fraction: f64,
    rated_thrust: f64,
    sea_level_density: f64,
) -> f64 {
    fraction * rated_thrust * (density / sea_level_density)
}

/// Speed of minimum drag (and minimum thrust required), ft/s.
pub fn min_drag_speed(density: f64, wing_area: f64, cd0: f64, k: f64, weight: f64) -> f64 {
    (2.0 * weight / (density * wing_area) * (k / cd0).sqrt()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_k() -> f64 {
        induced_drag_factor(0.92, aspect_ratio(117.42, 1318.0))
    }

    #[test]
    fn textbook_thrust_required() {
        let tr = thrust_required(23.77e-4, 400.0, 1318.0, 0.0185, reference_k(), 200_000.0);
        assert_relative_eq!(tr, 9915.273918243369, max_relative = 1e-12);
        let again = thrust_required(23.77e-4, 400.0, 1318.0, 0.0185, reference_k(), 200_000.0);
        assert_eq!(tr.to_bits(), again.to_bits());
    }

    #[test]
    fn induced_drag_factor_from_geometry() {
        assert_relative_eq!(reference_k(), 0.03307452060983143, max_relative = 1e-12);
    }

    #[test]
    fn zero_speed_is_not_finite() {
        let cl = lift_coefficient(23.77e-4, 0.0, 1318.0, 200_000.0);
        assert!(cl.is_infinite());
        let tr = thrust_required(23.77e-4, 0.0, 1318.0, 0.0185, reference_k(), 200_000.0);
        assert!(!tr.is_finite());
    }

    #[test]
    fn thrust_required_is_minimal_at_min_drag_speed() {
        let (rho, s, cd0, k, w) = (17.56e-4, 1318.0, 0.0185, reference_k(), 200_000.0);
        let v = min_drag_speed(rho, s, cd0, k, w);
        let at = thrust_required(rho, v, s, cd0, k, w);
        assert!(thrust_required(rho, v * 0.95, s, cd0, k, w) > at);
        assert!(thrust_required(rho, v * 1.05, s, cd0, k, w) > at);
        // Induced and parasite drag are equal there.
        let cl = lift_coefficient(rho, v, s, w);
        assert_relative_eq!(k * cl * cl, cd0, max_relative = 1e-9);
    }

    #[test]
    fn thrust_available_scales_with_density_ratio() {
        assert_eq!(thrust_available(23.77e-4, 0.7, 66_000.0, 23.77e-4), 0.7 * 66_000.0);
        let fl350 = thrust_available(7.38e-4, 0.7, 66_000.0, 23.77e-4);
        assert_relative_eq!(fl350, 14_343.962978544385, max_relative = 1e-12);
    }

    #[test]
    fn dynamic_pressure_at_sea_level() {
        assert!((dynamic_pressure(23.77e-4, 100.0) - 11.885).abs() < 1e-9);
    }
}
