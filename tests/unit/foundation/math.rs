use super::*;

#[test]
fn interp_between_and_outside_anchors() {
    let xp = [10.0, 20.0, 40.0];
    let fp = [1.0, 3.0, 7.0];
    assert_eq!(interp(15.0, &xp, &fp), 2.0);
    assert_eq!(interp(30.0, &xp, &fp), 5.0);
    assert_eq!(interp(20.0, &xp, &fp), 3.0);
    assert_eq!(interp(0.0, &xp, &fp), 1.0);
    assert_eq!(interp(100.0, &xp, &fp), 7.0);
}

#[test]
fn interp_single_anchor_is_flat() {
    assert_eq!(interp(0.0, &[5.0], &[42.0]), 42.0);
    assert_eq!(interp(255.0, &[5.0], &[42.0]), 42.0);
}

#[test]
fn linspace_endpoints() {
    assert_eq!(linspace_at(0, 1), 0.0);
    assert_eq!(linspace_at(0, 5), 0.0);
    assert_eq!(linspace_at(4, 5), 1.0);
    assert_eq!(linspace_at(2, 5), 0.5);
}

#[test]
fn linspace_uses_multiplied_step_and_pinned_end() {
    // 3 * (1/5) rounds to 0.6000000000000001, unlike 3 / 5.
    assert_eq!(linspace_at(3, 6), 3.0 * (1.0 / 5.0));
    assert_ne!(linspace_at(3, 6), 0.6);
    assert_eq!(linspace_at(5, 7), 5.0 * (1.0 / 6.0));
    assert_eq!(linspace_at(6, 7), 1.0);
    assert_eq!(linspace_at(78, 79), 1.0);
}

#[test]
fn interp_endpoints_ramp_is_exact() {
    let xp = [0.0, 255.0];
    let fp = [0.0, 255.0];
    for i in 0..=255u32 {
        assert_eq!(interp(f64::from(i), &xp, &fp), f64::from(i));
    }
}

#[test]
fn quantize_floors_after_clamp() {
    assert_eq!(quantize_u8(-3.0), 0);
    assert_eq!(quantize_u8(300.0), 255);
    assert_eq!(quantize_u8(254.999), 254);
    assert_eq!(quantize_u8(0.999), 0);
    assert_eq!(quantize_u8(f64::NAN), 0);
}
