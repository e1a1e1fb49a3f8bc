use serde::{Deserialize, Serialize};

use crate::units::{fahrenheit_to_rankine, R_AIR};

// ---------------------------------------------------------------------------
// Standard atmosphere, English units (NASA Glenn curve fits)
// ---------------------------------------------------------------------------

const GAMMA: f64 = 1.4; // ratio of specific heats

/// Atmospheric properties at a given geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmo {
    pub temperature_f: f64, // °F
    pub pressure: f64,      // lb/ft^2
    pub density: f64,       // slug/ft^3
    pub sound_speed: f64,   // ft/s
}

impl Atmo {
    pub fn temperature_r(&self) -> f64 {
        fahrenheit_to_rankine(self.temperature_f)
    }
}

/// Altitude band of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Troposphere,
    LowerStratosphere,
    UpperStratosphere,
}

#[derive(Debug, Clone, Copy)]
enum Model {
    /// T = t0 + lapse·h, p = p_ref·(T°R / t_ref)^exponent
    Gradient {
        t0: f64,
        lapse: f64,
        p_ref: f64,
        t_ref: f64,
        exponent: f64,
    },
    /// T = const, p = p_ref·exp(a + b·h)
    Isothermal { t: f64, p_ref: f64, a: f64, b: f64 },
}

impl Model {
    /// (temperature °F, pressure lb/ft^2)
    fn evaluate(&self, h: f64) -> (f64, f64) {
        match *self {
            Model::Gradient { t0, lapse, p_ref, t_ref, exponent } => {
                let t = t0 + lapse * h;
                let p = p_ref * (fahrenheit_to_rankine(t) / t_ref).powf(exponent);
                (t, p)
            }
            Model::Isothermal { t, p_ref, a, b } => (t, p_ref * (a + b * h).exp()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Layer {
    kind: LayerKind,
    base: f64, // ft, inclusive lower bound
    model: Model,
}

/// Ordered lowest to highest. A layer applies from its base (inclusive) up
/// to the next layer's base (exclusive).
const LAYERS: [Layer; 3] = [
    Layer {
        kind: LayerKind::Troposphere,
        base: f64::NEG_INFINITY,
        model: Model::Gradient {
            t0: 59.0,
            lapse: -0.00356,
            p_ref: 2116.0,
            t_ref: 518.6,
            exponent: 5.256,
        },
    },
    Layer {
        kind: LayerKind::LowerStratosphere,
        base: 36_152.0,
        model: Model::Isothermal { t: -70.0, p_ref: 473.1, a: 1.73, b: -0.000_048 },
    },
    Layer {
        kind: LayerKind::UpperStratosphere,
        base: 82_345.0,
        model: Model::Gradient {
            t0: -205.05,
            lapse: 0.00164,
            p_ref: 51.97,
            t_ref: 389.98,
            exponent: -11.388,
        },
    },
];

/// Tropopause altitude, ft.
pub const TROPOPAUSE: f64 = LAYERS[1].base;
/// Base of the upper stratosphere fit, ft.
pub const UPPER_STRATOSPHERE_BASE: f64 = LAYERS[2].base;

fn layer(altitude_ft: f64) -> &'static Layer {
    // NaN fails every comparison and lands in the troposphere row.
    LAYERS
        .iter()
        .rev()
        .find(|l| altitude_ft >= l.base)
        .unwrap_or(&LAYERS[0])
}

/// Band that governs `altitude_ft`.
pub fn layer_at(altitude_ft: f64) -> LayerKind {
    layer(altitude_ft).kind
}

/// Full atmospheric state at a geometric altitude in feet.
///
/// No clamping: altitudes outside the fitted range extrapolate the
/// governing band's formula.
pub fn atmosphere(altitude_ft: f64) -> Atmo {
    let (temperature_f, pressure) = layer(altitude_ft).model.evaluate(altitude_ft);
    let mut atmo = Atmo {
        temperature_f,
        pressure,
        density: 0.0,
        sound_speed: 0.0,
    };
    let t_r = atmo.temperature_r();
    atmo.density = pressure / (R_AIR * t_r);
    atmo.sound_speed = (GAMMA * R_AIR * t_r).sqrt();
    atmo
}

/// Air density in slug/ft^3.
pub fn density(altitude_ft: f64) -> f64 {
    atmosphere(altitude_ft).density
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
