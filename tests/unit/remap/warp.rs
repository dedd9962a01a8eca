use super::*;

#[test]
fn edge_columns_with_default_timing() {
    let table = AttackReleaseTable::identity();
    let params = TimingParams::default();

    let first = ColumnWarp::for_column(0, 4, &table, &params);
    assert_eq!(first.attack, 0.0);
    assert_eq!(first.red_value, 255);
    assert_eq!(first.release, 1.0);
    assert_eq!(first.key_press, 0.0);
    assert_eq!(first.key_release, 2.0);

    let last = ColumnWarp::for_column(3, 4, &table, &params);
    assert_eq!(last.attack, 1.0);
    assert_eq!(last.red_value, 0);
    assert_eq!(last.release, 0.0);
    assert_eq!(last.key_press, 0.5);
    // fade_out_start + 0 * fade_out = 0.0 lies before key_press.
    assert!((last.key_release - (0.5 + ColumnWarp::MIN_WINDOW)).abs() < 1e-12);
}

#[test]
fn single_column_uses_midpoint_attack() {
    let table = AttackReleaseTable::identity();
    let w = ColumnWarp::for_column(0, 1, &table, &TimingParams::default());
    assert_eq!(w.attack, 0.5);
    // 127.5 rounds half to even.
    assert_eq!(w.red_value, 128);
    assert_eq!(w.release, 128.0 / 255.0);
}

#[test]
fn halfway_red_rounds_to_even() {
    let table = AttackReleaseTable::identity();
    let w = ColumnWarp::for_column(1, 3, &table, &TimingParams::default());
    assert_eq!(w.attack, 0.5);
    assert_eq!(w.red_value, 128);
}

#[test]
fn inverted_window_is_widened_not_flipped() {
    let table = AttackReleaseTable::identity();
    let params = TimingParams::new(2.0, 0.0, 1.0).unwrap();
    let w = ColumnWarp::for_column(1, 2, &table, &params);
    assert_eq!(w.key_press, 2.0);
    assert!(w.key_release > w.key_press);
    assert!((w.key_release - w.key_press - ColumnWarp::MIN_WINDOW).abs() < 1e-12);

    for nt in [0.0, 0.5, 1.0] {
        let (x, y) = w.source_coords(nt, 8, 5);
        assert!(x.is_finite() && y.is_finite());
        assert_eq!(x, 7.0);
        assert_eq!(y, nt * 4.0);
    }
}

#[test]
fn source_coords_follow_global_time() {
    let table = AttackReleaseTable::identity();
    let w = ColumnWarp::for_column(0, 4, &table, &TimingParams::default());
    assert_eq!(w.global_time(0.5), 1.0);
    assert_eq!(w.source_coords(0.0, 4, 4), (0.0, 0.0));
    assert_eq!(w.source_coords(0.5, 4, 4), (1.5, 1.5));
    assert_eq!(w.source_coords(1.0, 4, 4), (3.0, 3.0));
}
