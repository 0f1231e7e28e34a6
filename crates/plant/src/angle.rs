use std::f64::consts::{PI, TAU};

/// Wraps an angle into `(-π, π]`.
///
/// Angles already in range are returned unchanged, so `wrap(wrap(a)) == wrap(a)`
/// holds exactly.
#[must_use]
pub fn wrap(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }

    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { PI } else { wrapped }
}
