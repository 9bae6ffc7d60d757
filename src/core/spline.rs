use crate::core::projection::ScenePoint;

/// Samples a uniform Catmull-Rom spline through `points`.
///
/// The curve passes through every control point; end tangents are formed by
/// repeating the first and last points. Returns the input unchanged when
/// there are fewer than two points or `segments` is zero.
pub fn catmull_rom(points: &[ScenePoint], segments: usize) -> Vec<ScenePoint> {
    if points.len() < 2 || segments == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut out = Vec::with_capacity(last * segments + 1);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        for s in 0..segments {
            let t = s as f64 / segments as f64;
            out.push(ScenePoint::new(
                interpolate(p0.x, p1.x, p2.x, p3.x, t),
                interpolate(p0.y, p1.y, p2.y, p3.y, t),
                interpolate(p0.z, p1.z, p2.z, p3.z, t),
            ));
        }
    }
    out.push(points[last]);

    out
}

fn interpolate(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
