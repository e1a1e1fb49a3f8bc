use serde::{Deserialize, Serialize};

/// Straight-up climb from rest at constant acceleration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AscentProfile {
    pub name: String,
    pub acceleration: f64, // ft/s^2
}

impl AscentProfile {
    pub fn new(acceleration: f64) -> Self {
        Self {
            name: format!("a = {} ft/s^2", acceleration),
            acceleration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_shows_acceleration() {
        assert_eq!(AscentProfile::new(51.76).name, "a = 51.76 ft/s^2");
        assert_eq!(AscentProfile::new(20.0).name, "a = 20 ft/s^2");
    }
}
