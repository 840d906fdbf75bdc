use serde::{Deserialize, Serialize};

/// Inclusive range of acceptable values for one measurement, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    pub min: f64,
    pub max: f64,
}

/// Where a measured value falls relative to an [`IdealRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeVerdict {
    Below,
    Within,
    Above,
}

impl IdealRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn classify(&self, value: f64) -> RangeVerdict {
        if value < self.min {
            RangeVerdict::Below
        } else if value > self.max {
            RangeVerdict::Above
        } else {
            RangeVerdict::Within
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.classify(value) == RangeVerdict::Within
    }
}

/// Shooting arm bent close to an L.
pub const ELBOW_ANGLE_RANGE: IdealRange = IdealRange::new(80.0, 100.0);
/// Average hip-knee-ankle angle of a loaded, athletic stance.
pub const KNEE_BEND_RANGE: IdealRange = IdealRange::new(120.0, 150.0);
pub const SHOOTING_ARC_RANGE: IdealRange = IdealRange::new(45.0, 60.0);

/// The ranges a frame is graded against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormStandards {
    pub elbow_angle: IdealRange,
    pub knee_bend: IdealRange,
    pub shooting_arc: IdealRange,
}

impl Default for FormStandards {
    fn default() -> Self {
        Self {
            elbow_angle: ELBOW_ANGLE_RANGE,
            knee_bend: KNEE_BEND_RANGE,
            shooting_arc: SHOOTING_ARC_RANGE,
        }
    }
}
