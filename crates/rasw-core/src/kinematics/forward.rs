// Forward kinematics - chain of revolute joints in the plane

use crate::kinematics::{Coord, Result, check_len};

/// Positions of the base, every joint and the end-effector.
///
/// Each angle is relative to the heading of the link before it, so headings
/// accumulate along the chain. The result has `lengths.len() + 1` entries and
/// always starts at [`Coord::ORIGIN`].
pub fn forward_kinematics(angles: &[f64], lengths: &[f64]) -> Result<Vec<Coord>> {
    check_len(lengths.len(), angles.len())?;

    Ok(chain(angles, lengths))
}

/// [`forward_kinematics`] for inputs already known to agree in length.
pub(crate) fn chain(angles: &[f64], lengths: &[f64]) -> Vec<Coord> {
    let mut positions = Vec::with_capacity(lengths.len() + 1);
    positions.push(Coord::ORIGIN);
    walk(angles, lengths, |p| positions.push(p));
    positions
}

/// Tip of the chain only, without allocating.
pub fn end_effector(angles: &[f64], lengths: &[f64]) -> Result<Coord> {
    check_len(lengths.len(), angles.len())?;

    let mut tip = Coord::ORIGIN;
    walk(angles, lengths, |p| tip = p);
    Ok(tip)
}

fn walk(angles: &[f64], lengths: &[f64], mut visit: impl FnMut(Coord)) {
    let mut heading = 0.0;
    let mut at = Coord::ORIGIN;
    for (angle, length) in angles.iter().zip(lengths) {
        heading += angle;
        let step = Coord::polar(*length, heading);
        at = Coord::new(at.x + step.x, at.y + step.y);
        visit(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::KinematicsError;

    fn deg(angles: &[f64]) -> Vec<f64> {
        angles.iter().map(|a| a.to_radians()).collect()
    }

    #[test]
    fn four_link_reference_pose() {
        let angles = deg(&[45.0, -30.0, 45.0, -20.0]);
        let lengths = [160.0; 4];
        let positions = forward_kinematics(&angles, &lengths).unwrap();
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], Coord::ORIGIN);

        // headings accumulate to 45, 15, 60, 40 degrees
        let headings = deg(&[45.0, 15.0, 60.0, 40.0]);
        let x: f64 = headings.iter().map(|h| 160.0 * h.cos()).sum();
        let y: f64 = headings.iter().map(|h| 160.0 * h.sin()).sum();
        let tip = positions[4];
        assert!((tip.x - x).abs() < 1e-9);
        assert!((tip.y - y).abs() < 1e-9);
        assert!((tip.x - 470.2523).abs() < 1e-4);
        assert!((tip.y - 395.9582).abs() < 1e-4);
    }

    #[test]
    fn angles_are_relative() {
        // a right angle at every joint walks around a square
        let angles = deg(&[90.0, 90.0, 90.0, 90.0]);
        let positions = forward_kinematics(&angles, &[1.0; 4]).unwrap();
        let expected = [(0.0, 0.0), (0.0, 1.0), (-1.0, 1.0), (-1.0, 0.0), (0.0, 0.0)];
        for (p, (x, y)) in positions.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let angles = [0.3, -1.2, 2.5];
        let lengths = [7.5, 3.25, 11.0];
        let a = forward_kinematics(&angles, &lengths).unwrap();
        let b = forward_kinematics(&angles, &lengths).unwrap();
        assert_eq!(a, b);
        assert_eq!(end_effector(&angles, &lengths).unwrap(), a[3]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            forward_kinematics(&[0.0, 0.0], &[1.0, 1.0, 1.0]),
            Err(KinematicsError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(end_effector(&[0.0], &[]).is_err());
    }

    #[test]
    fn empty_chain_is_just_the_base() {
        assert_eq!(forward_kinematics(&[], &[]).unwrap(), vec![Coord::ORIGIN]);
    }
}
