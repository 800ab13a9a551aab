//! Kinematics for planar robotic arms made of 2 to 4 revolute links.
//!
//! Everything in this crate is a pure function of its inputs. There is no
//! logging and no I/O; callers own the arm geometry and borrow it per call.
//! Angles are radians unless a function says otherwise.

pub mod kinematics;
pub mod pose;
pub mod trajectory;
pub mod trig;

pub use kinematics::{
    Arm, Coord, IkOptions, KinematicsError, MAX_LINKS, MIN_LINKS, Result, calculate_fk,
    calculate_ik,
    forward::{end_effector, forward_kinematics},
    three_link::{ShoulderBias, ThreeLinkIk, solve_ik_3link},
    two_link::{ElbowBranch, TwoLinkIk, TwoLinkSolution, solve_ik_2link},
};
pub use pose::{Pose, interpolate};
pub use trajectory::{DEFAULT_FRAMES, DEFAULT_HOLD_FRAMES, Frame, Trajectory};
pub use trig::{safe_arccos, safe_arcsin};
