// ---------------------------------------------------------------------------
// English engineering units (ft, lb, slug, s, °F)
// ---------------------------------------------------------------------------

pub const FT_PER_SEC_PER_KNOT: f64 = 1.68781;

/// Offset between °F and °R.
pub const RANKINE_OFFSET: f64 = 459.7;

/// Specific gas constant for air, ft·lb/(slug·°R).
pub const R_AIR: f64 = 1718.0;

/// Standard gravity, ft/s^2.
pub const G0: f64 = 32.17;

/// Sea-level standard specific weight of air, lb/ft^3.
pub const SEA_LEVEL_SPECIFIC_WEIGHT: f64 = 0.0765;

pub fn knots_to_ft_per_sec(knots: f64) -> f64 {
    knots * FT_PER_SEC_PER_KNOT
}

pub fn ft_per_sec_to_knots(ft_per_sec: f64) -> f64 {
    ft_per_sec / FT_PER_SEC_PER_KNOT
}

pub fn fahrenheit_to_rankine(temp_f: f64) -> f64 {
    temp_f + RANKINE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_knot_is_exact() {
        assert_eq!(knots_to_ft_per_sec(1.0), 1.68781);
    }

    #[test]
    fn knots_round_trip() {
        let v = 450.0;
        assert!((ft_per_sec_to_knots(knots_to_ft_per_sec(v)) - v).abs() < 1e-9);
    }

    #[test]
    fn rankine_of_standard_day() {
        assert!((fahrenheit_to_rankine(59.0) - 518.7).abs() < 1e-9);
    }
}
