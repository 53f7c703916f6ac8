use super::*;

fn ids(state: &FrameState) -> Vec<&'static str> {
    state.elements.iter().map(|e| e.id).collect()
}

#[test]
fn frame_zero_is_empty_stage() {
    let c = FrameStateComputer::default();
    let s = c.signals(FrameIndex(0));
    assert_eq!(s.email_opacity, 0.0);
    assert_eq!(s.email_x, 200.0);
    assert_eq!(s.arrow1_opacity, 0.0);
    assert_eq!(s.user_opacity, 0.0);
    assert!(!s.attack_phase);

    let state = c.compute(FrameIndex(0));
    assert_eq!(
        ids(&state),
        vec!["background", "title", "email_icon", "arrow", "user_icon"]
    );
    assert!(!state.element("email_icon").unwrap().visible);
    assert!(!state.element("arrow").unwrap().visible);
    assert!(!state.element("user_icon").unwrap().visible);
}

#[test]
fn opacity_and_slide_are_independent_curves() {
    let c = FrameStateComputer::default();

    let s = c.signals(FrameIndex(15));
    assert_eq!(s.email_opacity, 1.0);
    assert_eq!(s.email_x, 250.0);

    let s = c.signals(FrameIndex(30));
    assert_eq!(s.email_x, 300.0);

    let s = c.signals(FrameIndex(200));
    assert_eq!(s.email_x, 300.0);
}

#[test]
fn fake_email_label_follows_the_icon() {
    let c = FrameStateComputer::default();

    // 12/15 == 0.8 exactly, which does not pass the strict threshold.
    assert!(c.compute(FrameIndex(12)).element("email_label").is_none());

    let state = c.compute(FrameIndex(13));
    let label = state.element("email_label").unwrap();
    let icon = state.element("email_icon").unwrap();
    assert_eq!(label.text, Some("Fake Email"));
    assert_eq!(label.position.x, icon.position.x);
    assert_eq!(label.position.y, 520.0);
}

#[test]
fn frame_45_arrow_in_user_out() {
    let c = FrameStateComputer::default();
    let s = c.signals(FrameIndex(45));
    assert_eq!(s.arrow1_opacity, 1.0);
    assert_eq!(s.user_opacity, 0.0);
    assert!(!s.attack_phase);

    let state = c.compute(FrameIndex(45));
    assert!(state.element("user_label").is_none());
    assert!(state.element("warning_icon").is_none());
    let arrow = state.element("arrow").unwrap();
    assert_eq!(arrow.position, Point::new(550.0, 430.0));
    assert_eq!(arrow.opacity, 1.0);
}

#[test]
fn victim_label_appears_after_threshold() {
    let c = FrameStateComputer::default();
    assert!(c.compute(FrameIndex(72)).element("user_label").is_none());
    let state = c.compute(FrameIndex(73));
    let label = state.element("user_label").unwrap();
    assert_eq!(label.text, Some("Victim"));
    assert_eq!(label.position, Point::new(810.0, 520.0));
}

#[test]
fn attack_group_appears_together_after_click() {
    let c = FrameStateComputer::default();
    let before = c.compute(FrameIndex(90));
    assert!(before.element("warning_icon").is_none());
    assert!(before.element("border").is_none());
    assert!(before.element("data_stolen").is_none());

    let after = c.compute(FrameIndex(91));
    let warning = after.element("warning_icon").unwrap();
    assert_eq!(warning.position, Point::new(800.0, 250.0));
    assert_eq!(warning.scale, 1.5);
    assert_eq!(warning.opacity, 1.0);

    let border = after.element("border").unwrap();
    assert_eq!(border.opacity, 0.5);
    assert_eq!(border.size, 10.0);

    let heading = after.element("data_stolen").unwrap();
    assert_eq!(heading.text, Some("DATA STOLEN"));
    assert_eq!(heading.size, 60.0);
}

#[test]
fn border_flashes_inside_window() {
    let c = FrameStateComputer::default();
    let color = |f: u64| c.compute(FrameIndex(f)).element("border").unwrap().color;
    assert_eq!(color(92), Color::RED);
    assert_eq!(color(95), Color::WHITE);
    assert_eq!(color(100), Color::RED);
    assert_eq!(color(119), Color::WHITE);
}

#[test]
fn border_rests_white_after_theft() {
    let c = FrameStateComputer::default();
    for f in [120u64, 121, 125, 130, 239] {
        let state = c.compute(FrameIndex(f));
        assert_eq!(state.element("border").unwrap().color, Color::WHITE, "frame {f}");
    }
}

#[test]
fn draw_order_is_fixed() {
    let state = compute_frame(FrameIndex(150));
    assert_eq!(
        ids(&state),
        vec![
            "background",
            "title",
            "email_icon",
            "email_label",
            "arrow",
            "user_icon",
            "user_label",
            "warning_icon",
            "border",
            "data_stolen",
        ]
    );
}

#[test]
fn opacities_stay_in_unit_interval() {
    let c = FrameStateComputer::default();
    for f in 0..240u64 {
        for e in &c.compute(FrameIndex(f)).elements {
            assert!((0.0..=1.0).contains(&e.opacity), "{} at {f}", e.id);
        }
    }
}

#[test]
fn huge_frames_hold_the_final_pose() {
    let c = FrameStateComputer::default();
    let s = c.signals(FrameIndex(u64::MAX));
    assert_eq!(s.email_opacity, 1.0);
    assert_eq!(s.arrow1_opacity, 1.0);
    assert_eq!(s.user_opacity, 1.0);
    assert_eq!(s.email_x, 300.0);
    assert!(s.attack_phase);
    assert_eq!(s.border_color, Color::WHITE);

    let state = c.compute(FrameIndex(1 << 63));
    assert!(state.element("email_label").is_some());
    assert!(state.element("user_label").is_some());
}

#[test]
fn computation_is_idempotent() {
    let c = FrameStateComputer::default();
    for f in [0u64, 14, 59, 92, 125, 239] {
        assert_eq!(c.compute(FrameIndex(f)), c.compute(FrameIndex(f)));
    }
}
