use formcheck_base::Vec2;

/// Interior angle `∠abc` in degrees, in `[0, 180]`.
///
/// `b` is the vertex. Returns `None` if any point is absent or has a
/// non-finite coordinate. The result does not depend on which endpoint is
/// passed first.
pub fn joint_angle(
    a: Option<Vec2<f32>>,
    b: Option<Vec2<f32>>,
    c: Option<Vec2<f32>>,
) -> Option<f64> {
    let (a, b, c) = (a?, b?, c?);
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return None;
    }

    let (a, b, c) = (a.to_f64(), b.to_f64(), c.to_f64());
    let radians = (c - b).heading() - (a - b).heading();

    let degrees = radians.to_degrees().abs();
    Some(if degrees > 180.0 { 360.0 - degrees } else { degrees })
}
