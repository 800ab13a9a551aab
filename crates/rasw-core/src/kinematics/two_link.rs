// Two-link inverse kinematics - law of cosines

use crate::{
    kinematics::{Coord, KinematicsError, Result, check_link},
    pose::Pose,
    trig::safe_arccos,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Which of the two mirror-image solutions a 2-link arm takes.
///
/// Both place the end-effector on the target; they differ in which side of
/// the base-to-target line the elbow ends up on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElbowBranch {
    /// Shoulder at `bearing - alpha`, elbow bending counter-clockwise.
    /// The elbow sits clockwise of the base-to-target line.
    ///
    /// This is the single solution the RASW Python package returns, which
    /// its sources call "elbow-up". The name here follows the elbow's side
    /// of the base-to-target line for targets along +x.
    #[default]
    Down,
    /// Shoulder at `bearing + alpha`, elbow bending clockwise.
    Up,
}

impl ElbowBranch {
    /// Parse branch from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" | "d" => Some(ElbowBranch::Down),
            "up" | "u" => Some(ElbowBranch::Up),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TwoLinkSolution {
    /// Heading of the first link, radians from +x.
    pub shoulder: f64,
    /// Interior angle between the two links at the elbow, in `[0, pi]`.
    /// `pi` means fully stretched.
    pub elbow: f64,
    pub branch: ElbowBranch,
}

impl TwoLinkSolution {
    /// Joint angles in the chain convention used by forward kinematics.
    pub fn pose(&self) -> Pose {
        let bend = PI - self.elbow;
        let elbow = match self.branch {
            ElbowBranch::Down => bend,
            ElbowBranch::Up => -bend,
        };
        Pose::from([self.shoulder, elbow])
    }
}

/// Closed-form solver for a shoulder + elbow arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoLinkIk {
    l1: f64,
    l2: f64,
    branch: ElbowBranch,
}

impl TwoLinkIk {
    pub fn new(l1: f64, l2: f64) -> Result<Self> {
        check_link(0, l1)?;
        check_link(1, l2)?;
        Ok(Self {
            l1,
            l2,
            branch: ElbowBranch::default(),
        })
    }

    pub fn with_branch(mut self, branch: ElbowBranch) -> Self {
        self.branch = branch;
        self
    }

    /// Outer radius of the reach envelope.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Inner radius of the reach envelope.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }

    pub fn solve(&self, target: Coord) -> Result<TwoLinkSolution> {
        let (l1, l2) = (self.l1, self.l2);
        let d = target.norm();

        if d > self.max_reach() {
            return Err(KinematicsError::TargetOutOfReach {
                distance: d,
                reach: self.max_reach(),
            });
        }
        if d < self.min_reach() {
            return Err(KinematicsError::TargetTooClose {
                distance: d,
                min_reach: self.min_reach(),
            });
        }
        // Only reachable with equal links; every shoulder heading works.
        if d == 0.0 {
            return Err(KinematicsError::DegenerateTarget { joint: 0 });
        }

        let elbow = safe_arccos((l1 * l1 + l2 * l2 - d * d) / (2.0 * l1 * l2));
        let alpha = safe_arccos((l1 * l1 + d * d - l2 * l2) / (2.0 * l1 * d));
        let shoulder = match self.branch {
            ElbowBranch::Down => target.bearing() - alpha,
            ElbowBranch::Up => target.bearing() + alpha,
        };

        Ok(TwoLinkSolution {
            shoulder,
            elbow,
            branch: self.branch,
        })
    }
}

/// Solve a 2-link arm on the default [`ElbowBranch`].
pub fn solve_ik_2link(target: Coord, l1: f64, l2: f64) -> Result<TwoLinkSolution> {
    TwoLinkIk::new(l1, l2)?.solve(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::forward::end_effector;

    fn reaches(solution: &TwoLinkSolution, l1: f64, l2: f64, target: Coord) -> bool {
        let tip = end_effector(solution.pose().angles(), &[l1, l2]).unwrap();
        tip.distance(&target) < 1e-9
    }

    #[test]
    fn branch_parse() {
        assert_eq!(ElbowBranch::parse("down"), Some(ElbowBranch::Down));
        assert_eq!(ElbowBranch::parse("UP"), Some(ElbowBranch::Up));
        assert_eq!(ElbowBranch::parse("u"), Some(ElbowBranch::Up));
        assert_eq!(ElbowBranch::parse("sideways"), None);
    }

    #[test]
    fn right_angle_elbow() {
        // L1 = L2 = 1 at (sqrt 2, 0): isosceles right triangle
        let target = Coord::new(2f64.sqrt(), 0.0);
        let s = solve_ik_2link(target, 1.0, 1.0).unwrap();
        assert!((s.elbow - PI / 2.0).abs() < 1e-12);
        assert!((s.shoulder + PI / 4.0).abs() < 1e-12);
        assert!(reaches(&s, 1.0, 1.0, target));
    }

    #[test]
    fn default_branch_is_the_package_solution() {
        // shoulder = atan2(y, x) - acos((L1^2 + D^2 - L2^2) / (2 L1 D))
        let target = Coord::new(12.0, 5.0);
        let s = solve_ik_2link(target, 10.0, 10.0).unwrap();
        assert_eq!(s.branch, ElbowBranch::Down);
        let expected = 5f64.atan2(12.0) - (169f64 / 260.0).acos();
        assert!((s.shoulder - expected).abs() < 1e-12);
        assert!((s.elbow - 0.155f64.acos()).abs() < 1e-12);
    }

    #[test]
    fn both_branches_reach_the_target() {
        let target = Coord::new(-3.0, 8.0);
        for branch in [ElbowBranch::Down, ElbowBranch::Up] {
            let s = TwoLinkIk::new(10.0, 10.0)
                .unwrap()
                .with_branch(branch)
                .solve(target)
                .unwrap();
            assert_eq!(s.branch, branch);
            assert!(reaches(&s, 10.0, 10.0, target));
        }
    }

    #[test]
    fn branches_mirror_about_the_target_line() {
        let target = Coord::new(12.0, 5.0);
        let ik = TwoLinkIk::new(10.0, 10.0).unwrap();
        let down = ik.solve(target).unwrap();
        let up = ik.with_branch(ElbowBranch::Up).solve(target).unwrap();
        assert_eq!(down.elbow, up.elbow);
        let bearing = target.bearing();
        assert!(((bearing - down.shoulder) - (up.shoulder - bearing)).abs() < 1e-12);
        assert_eq!(down.pose().angles()[1], -up.pose().angles()[1]);
    }

    #[test]
    fn out_of_reach() {
        assert_eq!(
            solve_ik_2link(Coord::new(21.0, 0.0), 10.0, 10.0),
            Err(KinematicsError::TargetOutOfReach {
                distance: 21.0,
                reach: 20.0
            })
        );
    }

    #[test]
    fn full_extension_is_reachable() {
        let target = Coord::new(0.0, 20.0);
        let s = solve_ik_2link(target, 10.0, 10.0).unwrap();
        assert_eq!(s.elbow, PI);
        assert!(reaches(&s, 10.0, 10.0, target));
    }

    #[test]
    fn inner_bound() {
        assert_eq!(
            solve_ik_2link(Coord::new(5.0, 0.0), 10.0, 4.0),
            Err(KinematicsError::TargetTooClose {
                distance: 5.0,
                min_reach: 6.0
            })
        );
        let target = Coord::new(6.0, 0.0);
        let s = solve_ik_2link(target, 10.0, 4.0).unwrap();
        assert_eq!(s.elbow, 0.0);
        assert_eq!(s.shoulder, 0.0);
        assert!(reaches(&s, 10.0, 4.0, target));
    }

    #[test]
    fn equal_links_reach_everything_but_the_base() {
        assert_eq!(
            solve_ik_2link(Coord::ORIGIN, 10.0, 10.0),
            Err(KinematicsError::DegenerateTarget { joint: 0 })
        );
        for target in [Coord::new(1e-3, 0.0), Coord::new(0.0, -0.5), Coord::new(-7.0, 7.0)] {
            let s = solve_ik_2link(target, 10.0, 10.0).unwrap();
            assert!(reaches(&s, 10.0, 10.0, target));
        }
    }

    #[test]
    fn rejects_invalid_links() {
        assert_eq!(
            solve_ik_2link(Coord::new(1.0, 1.0), 1.0, -2.0),
            Err(KinematicsError::InvalidLinkLength {
                index: 1,
                length: -2.0
            })
        );
    }

    #[test]
    fn envelope() {
        let ik = TwoLinkIk::new(10.0, 4.0).unwrap();
        assert_eq!(ik.max_reach(), 14.0);
        assert_eq!(ik.min_reach(), 6.0);
    }
}
