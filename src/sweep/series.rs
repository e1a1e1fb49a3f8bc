use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Location of a maximum or minimum within a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Ordered (x, y) samples produced by a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { label: label.into(), samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.x)
    }

    /// Largest y; ties resolve to the earliest sample.
    pub fn max(&self) -> Option<Extremum> {
        self.extremum(|candidate, best| candidate > best)
    }

    /// Smallest y; ties resolve to the earliest sample.
    pub fn min(&self) -> Option<Extremum> {
        self.extremum(|candidate, best| candidate < best)
    }

    // Only a strict improvement replaces the incumbent, so the first of
    // equal values wins. `Iterator::max_by` would keep the last.
    fn extremum(&self, better: impl Fn(f64, f64) -> bool) -> Option<Extremum> {
        let mut best: Option<Extremum> = None;
        for (index, s) in self.samples.iter().enumerate() {
            match best {
                Some(b) if !better(s.y, b.y) => {}
                Some(_) => best = Some(Extremum { index, x: s.x, y: s.y }),
                None if s.y.is_nan() => {}
                None => best = Some(Extremum { index, x: s.x, y: s.y }),
            }
        }
        best
    }

    /// x positions where the polyline crosses `level`, interpolated linearly
    /// between neighbouring samples. A sample lying exactly on `level` is
    /// reported once at its own x.
    pub fn crossings(&self, level: f64) -> Vec<f64> {
        let mut out = Vec::new();
        for (i, s) in self.samples.iter().enumerate() {
            let d0 = s.y - level;
            if d0 == 0.0 {
                out.push(s.x);
                continue;
            }
            let Some(next) = self.samples.get(i + 1) else { break };
            let d1 = next.y - level;
            if d1 != 0.0 && (d0 < 0.0) != (d1 < 0.0) {
                out.push(s.x + (next.x - s.x) * d0 / (d0 - d1));
            }
        }
        out
    }
}
