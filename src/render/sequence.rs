use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::raster::{FrameRGBA, rasterize_svg, write_png};
use crate::render::svg::frame_to_svg;
use crate::scene::composition::CompositionDescriptor;

/// Evaluate, lay out and rasterize one frame of `comp`.
pub fn render_frame(comp: &CompositionDescriptor, frame: FrameIndex) -> FlowResult<FrameRGBA> {
    let state = comp.eval_frame(frame)?;
    let svg = frame_to_svg(comp.canvas(), &state)?;
    rasterize_svg(&svg, comp.width, comp.height)
}

/// File name used for `frame` inside a sequence directory.
pub fn sequence_file_name(frame: FrameIndex) -> String {
    format!("frame_{:05}.png", frame.0)
}

/// Render every frame of `range` to `out_dir/frame_NNNNN.png`.
///
/// Frames are independent, so they are rendered in parallel. Returns the number of files
/// written.
#[tracing::instrument(skip(comp), fields(id = %comp.id))]
pub fn render_png_sequence(
    comp: &CompositionDescriptor,
    range: FrameRange,
    out_dir: &Path,
) -> FlowResult<u64> {
    comp.validate()?;
    if range.end.0 > comp.duration_in_frames {
        return Err(FlowError::validation(format!(
            "range end {} exceeds durationInFrames {}",
            range.end.0, comp.duration_in_frames
        )));
    }

    std::fs::create_dir_all(out_dir).map_err(|e| {
        FlowError::render(format!("create output dir '{}': {e}", out_dir.display()))
    })?;

    let frames: Vec<FrameIndex> = range.iter().collect();
    frames.par_iter().try_for_each(|&f| -> FlowResult<()> {
        let frame = render_frame(comp, f)?;
        let path: PathBuf = out_dir.join(sequence_file_name(f));
        write_png(&frame, &path)
    })?;

    tracing::debug!(frames = frames.len(), out_dir = %out_dir.display(), "wrote png sequence");
    Ok(range.len_frames())
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
