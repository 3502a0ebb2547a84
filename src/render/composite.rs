use crate::foundation::error::{MockupError, MockupResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto an opaque RGB pixel.
pub fn over_opaque(dst: [u8; 3], src: PremulRgba8) -> [u8; 3] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2]];
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Premultiply a straight RGB pixel by `coverage`.
pub fn premul_rgb(rgb: [u8; 3], coverage: u8) -> PremulRgba8 {
    let a = u16::from(coverage);
    [
        mul_div255(u16::from(rgb[0]), a),
        mul_div255(u16::from(rgb[1]), a),
        mul_div255(u16::from(rgb[2]), a),
        coverage,
    ]
}

/// Composite a premultiplied RGBA8 buffer of `width * height` onto `dst` with its top-left at
/// (`x`, `y`). Pixels landing outside `dst` are dropped.
pub fn over_premul_at(
    dst: &mut image::RgbImage,
    src: &[u8],
    width: u32,
    height: u32,
    x: i64,
    y: i64,
) -> MockupResult<()> {
    if src.len() != width as usize * height as usize * 4 {
        return Err(MockupError::validation(
            "over_premul_at expects a tightly packed rgba8 buffer",
        ));
    }

    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    for (row, line) in src.chunks_exact(width as usize * 4).enumerate() {
        let ty = y + row as i64;
        if ty < 0 || ty >= dh {
            continue;
        }
        for (col, px) in line.chunks_exact(4).enumerate() {
            let tx = x + col as i64;
            if tx < 0 || tx >= dw {
                continue;
            }
            let d = dst.get_pixel_mut(tx as u32, ty as u32);
            d.0 = over_opaque(d.0, [px[0], px[1], px[2], px[3]]);
        }
    }
    Ok(())
}

/// Paste `src` onto `dst` at (`x`, `y`) weighted by the per-pixel `mask`.
pub fn paste_masked(
    dst: &mut image::RgbImage,
    src: &image::RgbImage,
    mask: &image::GrayImage,
    x: u32,
    y: u32,
) -> MockupResult<()> {
    if src.dimensions() != mask.dimensions() {
        return Err(MockupError::validation(format!(
            "paste mask is {:?} but source is {:?}",
            mask.dimensions(),
            src.dimensions()
        )));
    }

    let (dw, dh) = dst.dimensions();
    for (sx, sy, px) in src.enumerate_pixels() {
        let (tx, ty) = (u64::from(x) + u64::from(sx), u64::from(y) + u64::from(sy));
        if tx >= u64::from(dw) || ty >= u64::from(dh) {
            continue;
        }
        let coverage = mask.get_pixel(sx, sy).0[0];
        if coverage == 0 {
            continue;
        }
        let d = dst.get_pixel_mut(tx as u32, ty as u32);
        d.0 = over_opaque(d.0, premul_rgb(px.0, coverage));
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
