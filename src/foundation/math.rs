/// Degrees in a full turn.
pub(crate) const FULL_TURN: f64 = 360.0;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    let n = deg.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if n >= FULL_TURN { 0.0 } else { n }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
