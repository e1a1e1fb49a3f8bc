/// Velocity after `time` seconds of constant `acceleration` from rest: v = a·t
pub fn velocity(time: f64, acceleration: f64) -> f64 {
    acceleration * time
}

/// Distance covered from rest under constant acceleration: x = ½·a·t²
pub fn altitude(time: f64, acceleration: f64) -> f64 {
    0.5 * acceleration * time.powi(2)
}
