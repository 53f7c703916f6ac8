use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(90), FrameIndex(120)).unwrap();
    assert!(!r.contains(FrameIndex(89)));
    assert!(r.contains(FrameIndex(90)));
    assert!(r.contains(FrameIndex(119)));
    assert!(!r.contains(FrameIndex(120)));
    assert_eq!(r.len_frames(), 30);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    assert!(
        FrameRange::new(FrameIndex(5), FrameIndex(5))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn frame_range_iter_yields_every_frame() {
    let r = FrameRange::new(FrameIndex(3), FrameIndex(6)).unwrap();
    let frames: Vec<u64> = r.iter().map(|f| f.0).collect();
    assert_eq!(frames, vec![3, 4, 5]);
}

#[test]
fn frames_since_is_signed() {
    assert_eq!(FrameIndex(45).frames_since(60), -15);
    assert_eq!(FrameIndex(60).frames_since(30), 30);
}

#[test]
fn frames_since_saturates_for_huge_indices() {
    assert_eq!(FrameIndex(u64::MAX).frames_since(0), i64::MAX);
    assert_eq!(FrameIndex(u64::MAX).frames_since(90), i64::MAX);
    assert_eq!(FrameIndex(0).frames_since(u64::MAX), i64::MIN);
    assert_eq!(FrameIndex(1 << 63).frames_since(1), i64::MAX);
}

#[test]
fn canvas_center() {
    let c = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(c.center(), Point::new(960.0, 540.0));
}
