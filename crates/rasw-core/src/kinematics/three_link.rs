// Three-link inverse kinematics - biased shoulder, then a 2-link sub-problem

use crate::{
    kinematics::{Coord, KinematicsError, Result, check_link},
    trig::{safe_arccos, safe_arcsin},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Below this fraction of `l1`, the target counts as sitting on joint 2.
const COINCIDENT_EPSILON: f64 = 1e-12;

/// Steers the first joint: `angle1 = weight * bearing(target) + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoulderBias {
    pub weight: f64,
    /// Radians.
    pub offset: f64,
}

impl Default for ShoulderBias {
    fn default() -> Self {
        Self {
            weight: 1.0,
            offset: 10f64.to_radians(),
        }
    }
}

impl ShoulderBias {
    /// Pure bearing, no offset.
    pub const NONE: ShoulderBias = ShoulderBias {
        weight: 1.0,
        offset: 0.0,
    };

    pub fn from_degrees(weight: f64, offset_deg: f64) -> Self {
        Self {
            weight,
            offset: offset_deg.to_radians(),
        }
    }

    pub fn shoulder_angle(&self, target: Coord) -> f64 {
        self.weight * target.bearing() + self.offset
    }
}

/// Three-link solver.
///
/// The first joint is not solved for; it points along the biased bearing to
/// the target. Links 2 and 3 then close the gap from the tip of link 1 with
/// the elbow bending clockwise. Only the outer reach is checked, so targets
/// near the base may come back as a best-effort pose that misses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeLinkIk {
    l1: f64,
    l2: f64,
    l3: f64,
    bias: ShoulderBias,
}

impl ThreeLinkIk {
    pub fn new(l1: f64, l2: f64, l3: f64) -> Result<Self> {
        check_link(0, l1)?;
        check_link(1, l2)?;
        check_link(2, l3)?;
        Ok(Self {
            l1,
            l2,
            l3,
            bias: ShoulderBias::default(),
        })
    }

    pub fn with_bias(mut self, bias: ShoulderBias) -> Self {
        self.bias = bias;
        self
    }

    pub fn reach(&self) -> f64 {
        self.l1 + self.l2 + self.l3
    }

    pub fn solve(&self, target: Coord) -> Result<[f64; 3]> {
        let (l1, l2, l3) = (self.l1, self.l2, self.l3);

        let distance = target.norm();
        if distance > self.reach() {
            return Err(KinematicsError::TargetOutOfReach {
                distance,
                reach: self.reach(),
            });
        }

        let angle1 = self.bias.shoulder_angle(target);
        let p2 = Coord::polar(l1, angle1);
        let h = target.distance(&p2);
        if h <= COINCIDENT_EPSILON * l1 {
            return Err(KinematicsError::DegenerateTarget { joint: 1 });
        }

        // angle at joint 2 between link 2 and the line to the target, plus
        // the rise of that line
        let spread = safe_arccos((l3 * l3 - l2 * l2 - h * h) / (-2.0 * l2 * h));
        let rise = safe_arcsin((target.y - p2.y) / h);
        let angle2 = -angle1 + spread + rise;

        let angle3 = -PI + safe_arccos((h * h - l2 * l2 - l3 * l3) / (-2.0 * l2 * l3));

        Ok([angle1, angle2, angle3])
    }
}

/// Solve a 3-link arm with an explicit first-joint bias.
pub fn solve_ik_3link(
    target: Coord,
    l1: f64,
    l2: f64,
    l3: f64,
    bias: ShoulderBias,
) -> Result<[f64; 3]> {
    ThreeLinkIk::new(l1, l2, l3)?.with_bias(bias).solve(target)
}
