//! Joint poses and linear interpolation between them.

use crate::kinematics::{Result, check_len};
use serde::{Deserialize, Serialize};

/// Ordered joint angles in radians, one per link, base joint first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose(Vec<f64>);

impl Pose {
    pub fn new(angles: Vec<f64>) -> Self {
        Self(angles)
    }

    /// Every joint at zero.
    pub fn zeros(joints: usize) -> Self {
        Self(vec![0.0; joints])
    }

    pub fn from_degrees(angles: &[f64]) -> Self {
        Self(angles.iter().map(|a| a.to_radians()).collect())
    }

    pub fn to_degrees(&self) -> Vec<f64> {
        self.0.iter().map(|a| a.to_degrees()).collect()
    }

    pub fn angles(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Pose at fraction `t` of the way from `self` to `end`.
    pub fn lerp(&self, end: &Pose, t: f64) -> Result<Pose> {
        interpolate(self, end, t)
    }
}

impl From<Vec<f64>> for Pose {
    fn from(angles: Vec<f64>) -> Self {
        Self(angles)
    }
}

impl<const N: usize> From<[f64; N]> for Pose {
    fn from(angles: [f64; N]) -> Self {
        Self(angles.to_vec())
    }
}

impl AsRef<[f64]> for Pose {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Per-joint linear interpolation.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate. Written as
/// `(1 - t) * start + t * end` so both endpoints come back exactly.
pub fn interpolate(start: &Pose, end: &Pose, t: f64) -> Result<Pose> {
    check_len(start.len(), end.len())?;
    Ok(blend(start, end, t))
}

pub(crate) fn blend(start: &Pose, end: &Pose, t: f64) -> Pose {
    let s = 1.0 - t;
    start
        .0
        .iter()
        .zip(&end.0)
        .map(|(a, b)| s * a + t * b)
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::KinematicsError;

    #[test]
    fn endpoints_are_exact() {
        let start = Pose::from([0.1, -2.7, 3.3]);
        let end = Pose::from([0.3, 1.9, -0.7]);
        assert_eq!(interpolate(&start, &end, 0.0).unwrap(), start);
        assert_eq!(interpolate(&start, &end, 1.0).unwrap(), end);
    }

    #[test]
    fn midpoint() {
        let start = Pose::zeros(2);
        let end = Pose::from([1.0, -4.0]);
        assert_eq!(start.lerp(&end, 0.5).unwrap(), Pose::from([0.5, -2.0]));
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let start = Pose::from([1.0]);
        let end = Pose::from([2.0]);
        assert_eq!(interpolate(&start, &end, 2.0).unwrap(), Pose::from([3.0]));
        assert_eq!(interpolate(&start, &end, -1.0).unwrap(), Pose::from([0.0]));
    }

    #[test]
    fn mismatched_lengths() {
        assert_eq!(
            interpolate(&Pose::zeros(3), &Pose::zeros(2), 0.5),
            Err(KinematicsError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn degree_conversion() {
        let pose = Pose::from_degrees(&[180.0, -90.0]);
        assert_eq!(pose.angles(), &[std::f64::consts::PI, -std::f64::consts::FRAC_PI_2]);
        assert_eq!(pose.to_degrees(), vec![180.0, -90.0]);
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let pose = Pose::from([0.5, 0.25]);
        let json = serde_json::to_string(&pose).unwrap();
        assert_eq!(json, "[0.5,0.25]");
    }
}
