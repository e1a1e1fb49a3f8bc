use thiserror::Error;

/// Errors raised while sweeping or exporting charts.
///
/// The physics functions themselves never fail; they follow IEEE semantics.
/// Sweeps check every sample and surface the first non-finite value here.
#[derive(Debug, Error)]
pub enum AeroError {
    #[error("invalid sweep [{start}, {stop}) step {step}: {reason}")]
    InvalidSweep {
        start: f64,
        stop: f64,
        step: f64,
        reason: &'static str,
    },

    #[error("non-finite sample in '{series}' at x = {x}")]
    NonFinite { series: String, x: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AeroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_sample() {
        let err = AeroError::NonFinite { series: "Sea Level".into(), x: 0.0 };
        assert_eq!(err.to_string(), "non-finite sample in 'Sea Level' at x = 0");

        let err = AeroError::InvalidSweep { start: 1.0, stop: 0.0, step: 0.5, reason: "stop < start" };
        assert!(err.to_string().contains("stop < start"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: AeroError = io.into();
        assert!(matches!(err, AeroError::Io(_)));
    }
}
