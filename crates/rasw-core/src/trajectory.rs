//! Rest-to-target motion sampled into animation frames.
//!
//! A [`Trajectory`] moves every joint linearly from a rest pose to a target
//! pose over `frames` steps, then holds the target for `hold` more frames so a
//! renderer can linger on the final configuration. Each [`Frame`] carries the
//! forward-kinematics positions, ready to draw.

use crate::{
    kinematics::{Arm, Coord, Result, check_len, forward},
    pose::{self, Pose},
};
use serde::Serialize;

/// Motion frames used when none are configured.
pub const DEFAULT_FRAMES: usize = 60;
/// Trailing frames spent at the target.
pub const DEFAULT_HOLD_FRAMES: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    /// Interpolation parameter in `[0, 1]`.
    pub t: f64,
    pub pose: Pose,
    /// Base, joints and end-effector.
    pub positions: Vec<Coord>,
}

impl Frame {
    pub fn end_effector(&self) -> Coord {
        self.positions.last().copied().unwrap_or(Coord::ORIGIN)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    lengths: Vec<f64>,
    rest: Pose,
    target: Pose,
    frames: usize,
    hold: usize,
}

impl Trajectory {
    pub fn new(lengths: impl Into<Vec<f64>>, rest: Pose, target: Pose) -> Result<Self> {
        let lengths = lengths.into();
        check_len(lengths.len(), rest.len())?;
        check_len(lengths.len(), target.len())?;
        Ok(Self {
            lengths,
            rest,
            target,
            frames: DEFAULT_FRAMES,
            hold: DEFAULT_HOLD_FRAMES,
        })
    }

    /// Motion from the arm's all-zero rest pose.
    pub fn from_arm(arm: &Arm, target: Pose) -> Result<Self> {
        Self::new(arm.links(), arm.rest_pose(), target)
    }

    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_hold(mut self, hold: usize) -> Self {
        self.hold = hold;
        self
    }

    pub fn rest(&self) -> &Pose {
        &self.rest
    }

    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Total number of frames, motion plus hold.
    pub fn len(&self) -> usize {
        self.frames + self.hold
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn t_at(&self, index: usize) -> f64 {
        if index < self.frames {
            index as f64 / self.frames as f64
        } else {
            1.0
        }
    }

    pub fn frame(&self, index: usize) -> Frame {
        let t = self.t_at(index);
        let pose = pose::blend(&self.rest, &self.target, t);
        let positions = forward::chain(pose.angles(), &self.lengths);
        Frame {
            index,
            t,
            pose,
            positions,
        }
    }

    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame> + '_ {
        (0..self.len()).map(move |index| self.frame(index))
    }
}
