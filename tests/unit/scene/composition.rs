use super::*;
use serde_json::json;

#[test]
fn built_in_descriptor_matches_host_contract() {
    let d = CompositionDescriptor::phishing_flow();
    assert_eq!(d.id, "PhishingFlow");
    assert_eq!(d.duration_in_frames, 240);
    assert_eq!(d.fps, 30);
    assert_eq!(d.width, 1920);
    assert_eq!(d.height, 1080);
    assert_eq!(d.duration_secs(), 8.0);
    d.validate().unwrap();
}

#[test]
fn json_uses_camel_case_fields() {
    let v = serde_json::to_value(CompositionDescriptor::phishing_flow()).unwrap();
    assert_eq!(
        v,
        json!({
            "id": "PhishingFlow",
            "durationInFrames": 240,
            "fps": 30,
            "width": 1920,
            "height": 1080
        })
    );
}

#[test]
fn from_reader_rejects_unknown_fields() {
    let s = r#"{"id":"X","durationInFrames":1,"fps":1,"width":1,"height":1,"codec":"h264"}"#;
    let err = CompositionDescriptor::from_reader(s.as_bytes()).unwrap_err();
    assert!(matches!(err, FlowError::Serde(_)));
}

#[test]
fn validate_rejects_zero_fields() {
    let base = CompositionDescriptor::phishing_flow();

    let mut d = base.clone();
    d.duration_in_frames = 0;
    assert!(matches!(d.validate(), Err(FlowError::Validation(_))));

    let mut d = base.clone();
    d.fps = 0;
    assert!(d.validate().is_err());

    let mut d = base.clone();
    d.width = 0;
    assert!(d.validate().is_err());

    let mut d = base.clone();
    d.height = 0;
    assert!(d.validate().is_err());

    let mut d = base;
    d.id = "  ".to_owned();
    assert!(d.validate().is_err());
}

#[test]
fn eval_frame_rejects_out_of_range() {
    let d = CompositionDescriptor::phishing_flow();
    assert!(d.eval_frame(FrameIndex(0)).is_ok());
    assert!(d.eval_frame(FrameIndex(239)).is_ok());
    let err = d.eval_frame(FrameIndex(240)).unwrap_err();
    assert!(matches!(err, FlowError::Evaluation(_)));
}

#[test]
fn eval_frame_refuses_invalid_descriptor() {
    let mut d = CompositionDescriptor::phishing_flow();
    d.fps = 0;
    assert!(matches!(
        d.eval_frame(FrameIndex(0)),
        Err(FlowError::Validation(_))
    ));
}

#[test]
fn eval_frame_matches_direct_computation() {
    let d = CompositionDescriptor::phishing_flow();
    let direct = d.computer().compute(FrameIndex(100));
    assert_eq!(d.eval_frame(FrameIndex(100)).unwrap(), direct);
}
