use crate::foundation::core::Point;
use crate::scene::color::Color;

/// Vector glyphs used by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Mail,
    ArrowRight,
    User,
    AlertTriangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Full-frame fill.
    Background,
    Icon(IconKind),
    /// Small caption.
    Text,
    /// Full-frame stroked outline.
    Border,
    /// Large caption.
    Heading,
}

/// Which point of the element `position` refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    BottomCenter,
}

/// One drawable record of a frame.
///
/// Produced fresh for every frame and never mutated afterwards. `size` means pixel size for
/// icons, font size for text and headings, and stroke width for the border.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualElement {
    /// Stable role name of the element within the scene.
    pub id: &'static str,
    pub kind: ElementKind,
    pub position: Point,
    pub anchor: Anchor,
    pub opacity: f64, // 0..1
    pub color: Color,
    pub scale: f64,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'static str>,
    pub visible: bool,
}

impl VisualElement {
    pub(crate) fn new(id: &'static str, kind: ElementKind, position: Point, color: Color) -> Self {
        Self {
            id,
            kind,
            position,
            anchor: Anchor::TopLeft,
            opacity: 1.0,
            color,
            scale: 1.0,
            size: 0.0,
            text: None,
            visible: true,
        }
    }

    pub(crate) fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = crate::foundation::math::clamp01(opacity);
        self.visible = self.opacity > 0.0;
        self
    }

    pub(crate) fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub(crate) fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub(crate) fn with_text(mut self, text: &'static str) -> Self {
        self.text = Some(text);
        self
    }

    pub(crate) fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Rendered size after applying `scale`.
    pub fn scaled_size(&self) -> f64 {
        self.size * self.scale
    }
}
