use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::eval::frame_state::{FrameState, FrameStateComputer};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{FlowError, FlowResult};
use crate::scene::layout::SceneLayout;
use crate::scene::timeline::Timeline;

/// Identity, timing and resolution of the clip, as handed to a renderer.
///
/// JSON field names follow the host composition contract (`durationInFrames`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompositionDescriptor {
    pub id: String,
    pub duration_in_frames: u64,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl CompositionDescriptor {
    pub const PHISHING_FLOW_ID: &'static str = "PhishingFlow";

    /// The built-in 8 second, 1080p30 clip.
    pub fn phishing_flow() -> Self {
        Self {
            id: Self::PHISHING_FLOW_ID.to_owned(),
            duration_in_frames: 240,
            fps: 30,
            width: 1920,
            height: 1080,
        }
    }

    /// Parse a descriptor from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlowError::serde(format!("parse composition JSON: {e}")))
    }

    /// Parse a descriptor from a JSON file on disk. The result is not validated.
    pub fn from_path(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> FlowResult<()> {
        if self.id.trim().is_empty() {
            return Err(FlowError::validation("composition id must be non-empty"));
        }
        if self.duration_in_frames == 0 {
            return Err(FlowError::validation("durationInFrames must be > 0"));
        }
        if self.fps == 0 {
            return Err(FlowError::validation("fps must be > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(FlowError::validation("width/height must be > 0"));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// `[0, durationInFrames)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_in_frames),
        }
    }

    pub fn duration_secs(&self) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        self.duration_in_frames as f64 / f64::from(self.fps)
    }

    /// Frame-state computer laid out for this descriptor's canvas.
    pub fn computer(&self) -> FrameStateComputer {
        FrameStateComputer::new(
            Timeline::PHISHING_FLOW,
            SceneLayout::for_canvas(self.canvas()),
        )
    }

    /// Bounds-checked evaluation of a single frame.
    ///
    /// Frames at or past `durationInFrames` are rejected rather than clamped.
    #[tracing::instrument(skip(self), fields(id = %self.id))]
    pub fn eval_frame(&self, frame: FrameIndex) -> FlowResult<FrameState> {
        self.validate()?;
        if !self.frame_range().contains(frame) {
            return Err(FlowError::evaluation(format!(
                "frame {} is out of bounds (durationInFrames={})",
                frame.0, self.duration_in_frames
            )));
        }
        Ok(self.computer().compute(frame))
    }
}

impl Default for CompositionDescriptor {
    fn default() -> Self {
        Self::phishing_flow()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
