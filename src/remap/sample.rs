use crate::foundation::core::Texture;

/// Sample `tex` at real coordinates `(x, y)` with bilinear filtering, one value per channel.
///
/// Coordinates are clamped to `[0, dim - 1]` first, so any finite input stays in bounds;
/// NaN is treated as 0. `out` must hold at least `tex.channels` values. An empty texture
/// samples as zeros.
pub fn bilinear_sample(tex: &Texture, x: f64, y: f64, out: &mut [f64]) {
    let channels = usize::from(tex.channels);
    let out = &mut out[..channels];
    if tex.is_empty() {
        out.fill(0.0);
        return;
    }

    let max_x = f64::from(tex.width - 1);
    let max_y = f64::from(tex.height - 1);
    let xf = clamp_coord(x, max_x);
    let yf = clamp_coord(y, max_y);

    let x0 = xf.floor() as u32;
    let y0 = yf.floor() as u32;
    let x1 = (x0 + 1).min(tex.width - 1);
    let y1 = (y0 + 1).min(tex.height - 1);
    let fx = xf - f64::from(x0);
    let fy = yf - f64::from(y0);

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let p00 = tex.pixel(x0, y0);
    let p10 = tex.pixel(x1, y0);
    let p01 = tex.pixel(x0, y1);
    let p11 = tex.pixel(x1, y1);

    for (c, o) in out.iter_mut().enumerate() {
        *o = f64::from(p00[c]) * w00
            + f64::from(p10[c]) * w10
            + f64::from(p01[c]) * w01
            + f64::from(p11[c]) * w11;
    }
}

fn clamp_coord(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}

#[cfg(test)]
#[path = "../../tests/unit/remap/sample.rs"]
mod tests;
