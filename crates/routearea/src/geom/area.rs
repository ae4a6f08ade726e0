use super::Point;

/// Raw shoelace accumulator: `Σ (x[j] + x[i]) · (y[j] − y[i])` where `j` is the
/// wrapping predecessor of `i`.
///
/// The sign encodes orientation (positive for clockwise vertex order); half of
/// the magnitude is the enclosed area.
pub fn shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    if n == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        sum += (points[j].x + points[i].x) * (points[j].y - points[i].y);
        j = i;
    }
    sum
}

/// Enclosed area of the polygon through `points` (surveyor's formula).
///
/// Pre: vertices are listed in boundary order; a trailing copy of the first
/// vertex is allowed and contributes nothing.
/// Post: result is finite and `>= 0` for finite input.
#[inline]
pub fn compute_area(points: &[Point]) -> f64 {
    0.5 * shoelace_sum(points).abs()
}

/// `true` iff the route is non-empty and its first and last vertices are
/// coordinate-equal.
#[inline]
pub fn is_closed(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}
