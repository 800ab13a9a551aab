// Planar arm kinematics

use crate::pose::Pose;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Submodules for each solver
pub mod forward;
pub mod three_link;
pub mod two_link;

use three_link::{ShoulderBias, ThreeLinkIk};
use two_link::{ElbowBranch, TwoLinkIk};

/// Fewest links an [`Arm`] may have.
pub const MIN_LINKS: usize = 2;
/// Most links an [`Arm`] may have.
pub const MAX_LINKS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// The fixed base of every arm.
    pub const ORIGIN: Coord = Coord { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `length` along `heading` from the origin.
    pub fn polar(length: f64, heading: f64) -> Self {
        Self {
            x: length * heading.cos(),
            y: length * heading.sin(),
        }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of the ray from the origin through this point, in `(-pi, pi]`.
    pub fn bearing(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum KinematicsError {
    #[error("target is out of reach: distance {distance} exceeds arm reach {reach}")]
    TargetOutOfReach { distance: f64, reach: f64 },

    #[error(
        "target is too close to reach: distance {distance} is inside minimum reach {min_reach}"
    )]
    TargetTooClose { distance: f64, min_reach: f64 },

    #[error("at least {required} arm segments are required, got {actual}")]
    InsufficientLinkCount { required: usize, actual: usize },

    #[error("at most {max} arm segments are supported, got {actual}")]
    TooManyLinks { max: usize, actual: usize },

    #[error("inverse kinematics is not available for {links}-link arms")]
    UnsupportedLinkCount { links: usize },

    #[error("expected {expected} joint angles, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("link {index} has invalid length {length}")]
    InvalidLinkLength { index: usize, length: f64 },

    #[error("target coincides with joint {joint}; joint angles are undefined")]
    DegenerateTarget { joint: usize },
}

pub type Result<T, E = KinematicsError> = std::result::Result<T, E>;

/// Link lengths must be positive and finite.
pub(crate) fn check_link(index: usize, length: f64) -> Result<()> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::InvalidLinkLength { index, length })
    }
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(KinematicsError::LengthMismatch { expected, actual })
    }
}

/// Solver settings used by [`Arm::solve`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IkOptions {
    /// Elbow configuration for 2-link arms.
    pub branch: ElbowBranch,
    /// First-joint steering for 3-link arms.
    pub bias: ShoulderBias,
}

/// Geometry of a single arm: ordered link lengths, base link first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Arm {
    links: Vec<f64>,
}

impl Arm {
    pub fn new(links: impl Into<Vec<f64>>) -> Result<Self> {
        let links = links.into();
        if links.len() < MIN_LINKS {
            return Err(KinematicsError::InsufficientLinkCount {
                required: MIN_LINKS,
                actual: links.len(),
            });
        }
        if links.len() > MAX_LINKS {
            return Err(KinematicsError::TooManyLinks {
                max: MAX_LINKS,
                actual: links.len(),
            });
        }
        for (index, &length) in links.iter().enumerate() {
            check_link(index, length)?;
        }
        Ok(Self { links })
    }

    pub fn links(&self) -> &[f64] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false; arms have at least [`MIN_LINKS`] links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Distance from the base to the end-effector when fully stretched.
    pub fn reach(&self) -> f64 {
        self.links.iter().sum()
    }

    /// The all-zero pose: every link laid out along +x.
    pub fn rest_pose(&self) -> Pose {
        Pose::zeros(self.links.len())
    }

    /// Base, joint and end-effector positions for `pose`.
    pub fn forward(&self, pose: &Pose) -> Result<Vec<Coord>> {
        forward::forward_kinematics(pose.angles(), &self.links)
    }

    pub fn end_effector(&self, pose: &Pose) -> Result<Coord> {
        forward::end_effector(pose.angles(), &self.links)
    }

    /// Joint angles that put the end-effector on `target`.
    ///
    /// Two-link arms use the closed-form elbow solver, three-link arms the
    /// biased solver. Four-link arms have no inverse solution here.
    pub fn solve(&self, target: Coord, options: &IkOptions) -> Result<Pose> {
        match *self.links.as_slice() {
            [l1, l2] => {
                let solution = TwoLinkIk::new(l1, l2)?
                    .with_branch(options.branch)
                    .solve(target)?;
                Ok(solution.pose())
            }
            [l1, l2, l3] => {
                let angles = ThreeLinkIk::new(l1, l2, l3)?
                    .with_bias(options.bias)
                    .solve(target)?;
                Ok(Pose::from(angles))
            }
            _ => Err(KinematicsError::UnsupportedLinkCount {
                links: self.links.len(),
            }),
        }
    }
}

/// Forward kinematics with joint angles given in degrees.
pub fn calculate_fk(angles_deg: &[f64], lengths: &[f64]) -> Result<Vec<Coord>> {
    let pose = Pose::from_degrees(angles_deg);
    forward::forward_kinematics(pose.angles(), lengths)
}

/// Inverse kinematics for the first two links of `lengths`.
///
/// Returns `[shoulder, elbow]` in degrees on the default elbow branch, where
/// `elbow` is the interior angle between the links. Extra lengths are ignored.
/// Use [`TwoLinkSolution::pose`](two_link::TwoLinkSolution::pose) for angles
/// that feed back into [`calculate_fk`].
pub fn calculate_ik(target_x: f64, target_y: f64, lengths: &[f64]) -> Result<Vec<f64>> {
    let [l1, l2, ..] = *lengths else {
        return Err(KinematicsError::InsufficientLinkCount {
            required: MIN_LINKS,
            actual: lengths.len(),
        });
    };
    let solution = TwoLinkIk::new(l1, l2)?.solve(Coord::new(target_x, target_y))?;
    Ok(vec![solution.shoulder.to_degrees(), solution.elbow.to_degrees()])
}
