#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Piecewise-linear interpolation of `x` over anchors `(xp[i], fp[i])`.
///
/// `xp` must be strictly increasing and non-empty. Outside `[xp[0], xp[last]]`
/// the boundary value is returned unchanged. Between anchors the value is
/// `slope * (x - xp[lo]) + fp[lo]`, the same rounding as numpy's `interp`.
pub(crate) fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());

    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }
    // First anchor strictly greater than x; both neighbours exist here.
    let hi = xp.partition_point(|&v| v <= x);
    let lo = hi - 1;
    if x == xp[lo] {
        return fp[lo];
    }
    let slope = (fp[hi] - fp[lo]) / (xp[hi] - xp[lo]);
    slope * (x - xp[lo]) + fp[lo]
}

/// Position `i` of `n` evenly spaced values covering `[0, 1]`.
///
/// Computed as `i * step` with the last position pinned to exactly 1.0, so rows
/// land on the same floating-point values as numpy's `linspace`.
#[inline]
pub(crate) fn linspace_at(i: u32, n: u32) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    if i == n - 1 {
        return 1.0;
    }
    let step = 1.0 / f64::from(n - 1);
    f64::from(i) * step
}

/// Clamp to `[0, 255]` then truncate.
#[inline]
pub(crate) fn quantize_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
