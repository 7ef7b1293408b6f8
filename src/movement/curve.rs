//! Movement domain: easing curve driving dash progress.

use serde::{Deserialize, Serialize};

use crate::content::ConfigError;

/// Piecewise-linear mapping from time fraction to progress fraction.
///
/// Keys are `(time, progress)` pairs. A valid curve spans times 0 to 1 with
/// strictly increasing times and non-decreasing progress inside [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EasingCurve {
    keys: Vec<(f32, f32)>,
}

impl EasingCurve {
    pub fn new(keys: Vec<(f32, f32)>) -> Result<Self, ConfigError> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    pub fn linear() -> Self {
        Self {
            keys: vec![(0.0, 0.0), (1.0, 1.0)],
        }
    }

    /// Fast start, soft landing.
    pub fn ease_out() -> Self {
        Self {
            keys: vec![(0.0, 0.0), (0.25, 0.55), (0.5, 0.85), (1.0, 1.0)],
        }
    }

    pub fn keys(&self) -> &[(f32, f32)] {
        &self.keys
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Err(ConfigError::Curve("must contain at least one key"));
        };
        if self
            .keys
            .iter()
            .any(|(t, p)| !t.is_finite() || !p.is_finite())
        {
            return Err(ConfigError::Curve("keys must be finite"));
        }
        if first.0 != 0.0 || last.0 != 1.0 {
            return Err(ConfigError::Curve("must span times 0 to 1"));
        }
        if self.keys.iter().any(|(_, p)| !(0.0..=1.0).contains(p)) {
            return Err(ConfigError::Curve("progress must lie in [0, 1]"));
        }
        for pair in self.keys.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ConfigError::Curve("key times must be strictly increasing"));
            }
            if pair[1].1 < pair[0].1 {
                return Err(ConfigError::Curve("progress must be non-decreasing"));
            }
        }
        Ok(())
    }

    /// Progress at time fraction `t`, clamped into the curve's domain.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some(&(_, mut progress)) = self.keys.first() else {
            return t;
        };
        for pair in self.keys.windows(2) {
            let (t0, p0) = pair[0];
            let (t1, p1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                return p0 + (p1 - p0) * ((t - t0) / span);
            }
            progress = p1;
        }
        progress
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::linear()
    }
}
