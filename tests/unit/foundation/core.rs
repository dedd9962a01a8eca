use super::*;

#[test]
fn texture_new_checks_buffer_len() {
    assert!(Texture::new(2, 2, 3, vec![0; 12]).is_ok());
    let err = Texture::new(2, 2, 3, vec![0; 11]).unwrap_err();
    assert!(matches!(err, RemapError::InvalidInput(_)));
}

#[test]
fn zeroed_and_validate_share_shape_rules() {
    let t = Texture::zeroed(3, 2, 4).unwrap();
    assert_eq!(t.data.len(), 24);
    t.validate().unwrap();

    let hand_built = Texture {
        width: 3,
        height: 2,
        channels: 4,
        data: vec![0; 23],
    };
    assert!(matches!(hand_built.validate(), Err(RemapError::InvalidInput(_))));
    assert!(matches!(Texture::zeroed(1, 1, 0), Err(RemapError::InvalidInput(_))));
    assert!(matches!(
        Texture::zeroed(u32::MAX, u32::MAX, u8::MAX),
        Err(RemapError::InvalidInput(_))
    ));
}

#[test]
fn texture_rejects_zero_channels() {
    let err = Texture::new(0, 0, 0, vec![]).unwrap_err();
    assert!(matches!(err, RemapError::InvalidInput(_)));
}

#[test]
fn empty_texture_is_allowed() {
    let t = Texture::new(0, 0, 2, vec![]).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.pixel_count(), 0);
}

#[test]
fn pixel_addresses_row_major() {
    let t = Texture::new(2, 2, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(t.pixel(0, 0), &[1, 2]);
    assert_eq!(t.pixel(1, 0), &[3, 4]);
    assert_eq!(t.pixel(0, 1), &[5, 6]);
    assert_eq!(t.pixel(1, 1), &[7, 8]);
    assert_eq!(t.shape(), (2, 2, 2));
}

#[test]
fn timing_defaults_match_cli() {
    let p = TimingParams::default();
    assert_eq!(p.fade_in, 0.5);
    assert_eq!(p.fade_out, 2.0);
    assert_eq!(p.animation_duration, 2.0);
    assert_eq!(p.fade_out_start(), 0.0);
    p.validate().unwrap();
}

#[test]
fn timing_validation() {
    assert!(TimingParams::new(0.0, 0.0, 1.0).is_ok());
    // Overlapping fades are tolerated.
    assert!(TimingParams::new(3.0, 3.0, 1.0).is_ok());
    assert!(TimingParams::new(-0.1, 1.0, 1.0).is_err());
    assert!(TimingParams::new(0.5, f64::NAN, 1.0).is_err());
    assert!(TimingParams::new(0.5, 1.0, 0.0).is_err());
    assert!(TimingParams::new(0.5, 1.0, f64::INFINITY).is_err());
}

#[test]
fn timing_params_read_from_json() {
    let p: TimingParams =
        serde_json::from_str(r#"{"fade_in":1.0,"fade_out":0.25,"animation_duration":3.0}"#)
            .unwrap();
    assert_eq!(p, TimingParams::new(1.0, 0.25, 3.0).unwrap());
    assert_eq!(p.fade_out_start(), 2.75);
}
