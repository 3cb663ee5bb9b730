use kurbo::Rect;

use crate::foundation::{
    core::Canvas,
    error::{CircleError, CircleResult},
    math::{mul_div255_u8, mul_div255_u16},
};

pub(crate) type PremulRgba8 = [u8; 4];

/// Integer pixel span `[x0, x1) x [y0, y1)` clamped to a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PixelRect {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl PixelRect {
    /// Smallest pixel span covering `rect`, clipped to `canvas`.
    pub(crate) fn covering(rect: Rect, canvas: Canvas) -> Self {
        let clamp = |v: f64, max: u32| -> u32 {
            if v.is_nan() {
                0
            } else {
                v.clamp(0.0, f64::from(max)) as u32
            }
        };
        let x0 = clamp(rect.x0.floor(), canvas.width);
        let y0 = clamp(rect.y0.floor(), canvas.height);
        let x1 = clamp(rect.x1.ceil(), canvas.width).max(x0);
        let y1 = clamp(rect.y1.ceil(), canvas.height).max(y0);
        Self { x0, y0, x1, y1 }
    }

    /// The whole canvas.
    pub(crate) fn full(canvas: Canvas) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: canvas.width,
            y1: canvas.height,
        }
    }

    pub(crate) fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Smallest span containing both; empty spans are ignored.
    pub(crate) fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub(crate) fn intersect(self, other: Self) -> Self {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        Self {
            x0,
            y0,
            x1: self.x1.min(other.x1).max(x0),
            y1: self.y1.min(other.y1).max(y0),
        }
    }

    pub(crate) fn overlaps(self, other: Self) -> bool {
        !self.intersect(other).is_empty()
    }

    fn row_range(self, y: u32, stride: u32) -> std::ops::Range<usize> {
        let base = (y as usize) * (stride as usize);
        (base + self.x0 as usize) * 4..(base + self.x1 as usize) * 4
    }
}

pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Porter-Duff source-in: `src` scaled by the coverage (alpha) of `mask`.
pub(crate) fn src_in(src: PremulRgba8, mask: PremulRgba8) -> PremulRgba8 {
    match mask[3] {
        0 => [0, 0, 0, 0],
        255 => src,
        a => {
            let a = u16::from(a);
            [
                mul_div255_u16(u16::from(src[0]), a) as u8,
                mul_div255_u16(u16::from(src[1]), a) as u8,
                mul_div255_u16(u16::from(src[2]), a) as u8,
                mul_div255_u16(u16::from(src[3]), a) as u8,
            ]
        }
    }
}

fn check_lengths(dst: &[u8], src: &[u8], op: &str) -> CircleResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CircleError::render(format!(
            "{op} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> CircleResult<()> {
    check_lengths(dst, src, "over_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// `dst = src over dst`, touching only the pixels inside `rect`.
pub(crate) fn over_rect_in_place(
    dst: &mut [u8],
    src: &[u8],
    stride: u32,
    rect: PixelRect,
) -> CircleResult<()> {
    check_lengths(dst, src, "over_rect_in_place")?;
    if rect.is_empty() {
        return Ok(());
    }
    for y in rect.y0..rect.y1 {
        let range = rect.row_range(y, stride);
        if range.end > dst.len() {
            return Err(CircleError::render("over_rect_in_place span out of bounds"));
        }
        for (d, s) in dst[range.clone()]
            .chunks_exact_mut(4)
            .zip(src[range].chunks_exact(4))
        {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// `mask = src IN mask` inside `rect`; the mask buffer ends up holding the clipped child.
///
/// Pixels outside `rect` are left untouched and must not be read afterwards.
pub(crate) fn src_in_rect_in_place(
    mask: &mut [u8],
    src: &[u8],
    stride: u32,
    rect: PixelRect,
) -> CircleResult<()> {
    check_lengths(mask, src, "src_in_rect_in_place")?;
    if rect.is_empty() {
        return Ok(());
    }
    for y in rect.y0..rect.y1 {
        let range = rect.row_range(y, stride);
        if range.end > mask.len() {
            return Err(CircleError::render("src_in_rect_in_place span out of bounds"));
        }
        for (m, s) in mask[range.clone()]
            .chunks_exact_mut(4)
            .zip(src[range].chunks_exact(4))
        {
            let out = src_in([s[0], s[1], s[2], s[3]], [m[0], m[1], m[2], m[3]]);
            m.copy_from_slice(&out);
        }
    }
    Ok(())
}

pub(crate) fn fill(buf: &mut [u8], rgba: PremulRgba8) {
    for px in buf.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

/// Overwrite the pixels inside `rect` with `rgba`.
pub(crate) fn fill_rect_in_place(
    buf: &mut [u8],
    stride: u32,
    rect: PixelRect,
    rgba: PremulRgba8,
) -> CircleResult<()> {
    if rect.is_empty() {
        return Ok(());
    }
    for y in rect.y0..rect.y1 {
        let range = rect.row_range(y, stride);
        if range.end > buf.len() {
            return Err(CircleError::render("fill_rect_in_place span out of bounds"));
        }
        fill(&mut buf[range], rgba);
    }
    Ok(())
}

pub(crate) fn clear(buf: &mut [u8]) {
    buf.fill(0);
}

/// Undo premultiplication, rounding to nearest.
pub(crate) fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let a32 = u32::from(a);
            let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a32 / 2) / a32).min(255) as u8 };
            [un(px[0]), un(px[1]), un(px[2]), a]
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
