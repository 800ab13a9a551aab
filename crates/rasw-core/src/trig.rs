//! Inverse trigonometry that tolerates rounding overshoot.
//!
//! Law-of-cosines ratios land a few ULPs outside `[-1, 1]` whenever the arm
//! is fully stretched or folded. `f64::acos` would return NaN there, so the
//! argument is clamped first.

/// `acos` with its argument clamped to `[-1, 1]`. Result is in `[0, pi]`.
#[inline]
pub fn safe_arccos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// `asin` with its argument clamped to `[-1, 1]`. Result is in `[-pi/2, pi/2]`.
#[inline]
pub fn safe_arcsin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}
