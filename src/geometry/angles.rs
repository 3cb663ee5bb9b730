use crate::foundation::math::{FULL_TURN, normalize_degrees};

/// One child's angular allocation, in degrees.
///
/// Angles are cumulative and not wrapped: with a large offset `end_angle` may exceed 360.
/// Membership tests wrap on the fly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slice {
    /// Inclusive start of the wedge.
    pub start_angle: f64,
    /// Exclusive end of the wedge.
    pub end_angle: f64,
}

impl Slice {
    /// Construct a slice from its bounds.
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    /// Angular extent in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Bisector angle, where the child is centered.
    pub fn center_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    /// Half-open `[start, end)` membership of `angle` (any representation of it mod 360).
    ///
    /// The angle is shifted into the first turn at or after `start_angle`, so a slice that
    /// crosses the 0/360 seam still matches. An angle equal to `end_angle` belongs to the
    /// following slice.
    pub fn contains(&self, angle: f64) -> bool {
        let sweep = self.sweep();
        if sweep.is_nan() || sweep <= 0.0 || !angle.is_finite() {
            return false;
        }
        if sweep >= FULL_TURN {
            return true;
        }
        let turns = ((self.start_angle - angle) / FULL_TURN).ceil();
        let shifted = angle + turns * FULL_TURN;
        shifted >= self.start_angle && shifted < self.end_angle
    }
}

/// Split `range` degrees starting at `offset` into contiguous weighted slices.
///
/// Non-finite or non-positive weights count as zero. When no weight is positive every
/// entry gets an equal share, so the sweeps always add up to `range`.
pub fn partition(offset: f64, range: f64, weights: &[f64]) -> Vec<Slice> {
    if weights.is_empty() {
        return Vec::new();
    }

    let sanitized: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let total: f64 = sanitized.iter().sum();
    let (weights, total) = if total > 0.0 && total.is_finite() {
        (sanitized, total)
    } else {
        (vec![1.0; weights.len()], weights.len() as f64)
    };

    let mut out = Vec::with_capacity(weights.len());
    let mut start = offset;
    for (i, w) in weights.iter().enumerate() {
        // Pin the last end exactly so accumulated rounding never leaves a gap before the seam.
        let end = if i + 1 == weights.len() {
            offset + range
        } else {
            start + range * (w / total)
        };
        out.push(Slice::new(start, end));
        start = end;
    }
    out
}

/// Index of the slice whose wedge contains `angle`, if any.
///
/// When `range < 360` angles in the uncovered gap return `None`.
pub fn slice_index_at(slices: &[Slice], angle: f64) -> Option<usize> {
    let angle = normalize_degrees(angle);
    slices.iter().position(|s| s.contains(angle))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/angles.rs"]
mod tests;
