//! Frame-accurate scene state for the "Phishing Attack Flow" explainer clip.
//!
//! - [`CompositionDescriptor`] declares id, duration, fps and resolution
//! - [`FrameStateComputer`] maps a frame index to an ordered list of [`VisualElement`]s
//! - [`render`] turns a frame state into SVG, pixels and PNG files for preview
#![forbid(unsafe_code)]

pub mod animation;
pub mod eval;
pub mod foundation;
pub mod render;
pub mod scene;

pub use crate::eval::frame_state::{FrameSignals, FrameState, FrameStateComputer, compute_frame};
pub use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Point};
pub use crate::foundation::error::{FlowError, FlowResult};
pub use crate::render::raster::{FrameRGBA, rasterize_svg, write_png};
pub use crate::render::sequence::{render_frame, render_png_sequence, sequence_file_name};
pub use crate::render::svg::frame_to_svg;
pub use crate::scene::color::Color;
pub use crate::scene::composition::CompositionDescriptor;
pub use crate::scene::element::{Anchor, ElementKind, IconKind, VisualElement};
pub use crate::scene::layout::SceneLayout;
pub use crate::scene::timeline::Timeline;
