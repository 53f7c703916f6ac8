use crate::animation::interp::{fade_in, interpolate_clamped};
use crate::foundation::core::{FrameIndex, Point};
use crate::scene::color::Color;
use crate::scene::element::{Anchor, ElementKind, IconKind, VisualElement};
use crate::scene::layout::SceneLayout;
use crate::scene::timeline::Timeline;

/// Everything a renderer draws for one frame, back to front.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    pub frame: FrameIndex,
    pub elements: Vec<VisualElement>,
}

impl FrameState {
    /// First element with the given role name.
    pub fn element(&self, id: &str) -> Option<&VisualElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Elements a renderer honoring opacity would actually paint.
    pub fn visible(&self) -> impl Iterator<Item = &VisualElement> {
        self.elements.iter().filter(|e| e.visible)
    }
}

/// Scalar values the element list is built from.
///
/// Exposed separately so the timing curves can be checked without inspecting draw records.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSignals {
    pub email_opacity: f64,
    pub arrow1_opacity: f64,
    pub user_opacity: f64,
    pub email_x: f64,
    pub attack_phase: bool,
    pub border_color: Color,
}

/// Pure mapping from a frame index to the scene's draw list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStateComputer {
    timeline: Timeline,
    layout: SceneLayout,
}

impl FrameStateComputer {
    pub fn new(timeline: Timeline, layout: SceneLayout) -> Self {
        Self { timeline, layout }
    }

    pub fn signals(&self, frame: FrameIndex) -> FrameSignals {
        let t = &self.timeline;
        let l = &self.layout;

        let border_color = if t.is_flash_on(frame) {
            l.border_flash_on
        } else {
            l.border_flash_off
        };

        FrameSignals {
            email_opacity: fade_in(frame, t.email_appear, t.fade_frames),
            arrow1_opacity: fade_in(frame, t.arrow1_appear, t.fade_frames),
            user_opacity: fade_in(frame, t.user_appear, t.fade_frames),
            email_x: interpolate_clamped(frame, t.email_slide, l.email_x),
            attack_phase: t.is_attack_phase_visible(frame),
            border_color,
        }
    }

    pub fn compute(&self, frame: FrameIndex) -> FrameState {
        let t = &self.timeline;
        let l = &self.layout;
        let s = self.signals(frame);

        let mut elements = Vec::with_capacity(10);

        elements.push(
            VisualElement::new("background", ElementKind::Background, Point::ZERO, l.background),
        );
        elements.push(
            VisualElement::new(
                "title",
                ElementKind::Heading,
                l.title_anchor_point(),
                Color::WHITE,
            )
            .with_anchor(Anchor::TopCenter)
            .with_size(l.title_size)
            .with_text(l.title_text),
        );

        // Step 1: the lure.
        elements.push(
            VisualElement::new(
                "email_icon",
                ElementKind::Icon(IconKind::Mail),
                Point::new(s.email_x, l.email_y),
                l.email_color,
            )
            .with_size(l.icon_size)
            .with_opacity(s.email_opacity),
        );
        if t.label_revealed(s.email_opacity) {
            elements.push(
                VisualElement::new(
                    "email_label",
                    ElementKind::Text,
                    Point::new(s.email_x, l.email_label_y),
                    l.email_color,
                )
                .with_size(l.label_size)
                .with_text(l.email_label_text),
            );
        }

        elements.push(
            VisualElement::new(
                "arrow",
                ElementKind::Icon(IconKind::ArrowRight),
                l.arrow_pos,
                l.arrow_color,
            )
            .with_size(l.arrow_size)
            .with_opacity(s.arrow1_opacity),
        );

        // Step 2: the victim.
        elements.push(
            VisualElement::new(
                "user_icon",
                ElementKind::Icon(IconKind::User),
                l.user_pos,
                l.user_color,
            )
            .with_size(l.icon_size)
            .with_opacity(s.user_opacity),
        );
        if t.label_revealed(s.user_opacity) {
            elements.push(
                VisualElement::new("user_label", ElementKind::Text, l.user_label_pos, l.user_color)
                    .with_size(l.label_size)
                    .with_text(l.user_label_text),
            );
        }

        // Step 3: the attack. Drawn as one group, no fade.
        if s.attack_phase {
            elements.push(
                VisualElement::new(
                    "warning_icon",
                    ElementKind::Icon(IconKind::AlertTriangle),
                    l.warning_pos,
                    l.warning_color,
                )
                .with_size(l.icon_size)
                .with_scale(l.warning_scale),
            );
            elements.push(
                VisualElement::new("border", ElementKind::Border, Point::ZERO, s.border_color)
                    .with_size(l.border_width)
                    .with_opacity(l.border_opacity),
            );
            elements.push(
                VisualElement::new(
                    "data_stolen",
                    ElementKind::Heading,
                    l.heading_anchor_point(),
                    l.heading_color,
                )
                .with_anchor(Anchor::BottomCenter)
                .with_size(l.heading_size)
                .with_text(l.heading_text),
            );
        }

        tracing::trace!(
            frame = frame.0,
            elements = elements.len(),
            attack = s.attack_phase,
            "computed frame state"
        );

        FrameState { frame, elements }
    }
}

impl Default for FrameStateComputer {
    fn default() -> Self {
        let d = crate::scene::composition::CompositionDescriptor::phishing_flow();
        Self::new(Timeline::PHISHING_FLOW, SceneLayout::for_canvas(d.canvas()))
    }
}

/// Frame state of the built-in 1920x1080 clip.
pub fn compute_frame(frame: FrameIndex) -> FrameState {
    FrameStateComputer::default().compute(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame_state.rs"]
mod tests;
