use crate::foundation::core::FrameIndex;
use crate::foundation::math::{clamp01, lerp};

/// Linear fade from 0 to 1 over `duration` frames starting at `start`.
///
/// Frames before `start` yield 0, frames at or after `start + duration` yield 1.
pub fn fade_in(frame: FrameIndex, start: u64, duration: u64) -> f64 {
    if duration == 0 {
        return if frame.0 >= start { 1.0 } else { 0.0 };
    }
    clamp01(frame.frames_since(start) as f64 / duration as f64)
}

/// Map `frame` from `input` onto `output`, holding the boundary values outside `input`.
pub fn interpolate_clamped(frame: FrameIndex, input: [u64; 2], output: [f64; 2]) -> f64 {
    let [i0, i1] = input;
    if i1 <= i0 {
        return if frame.0 < i1 { output[0] } else { output[1] };
    }
    let t = clamp01(frame.frames_since(i0) as f64 / (i1 - i0) as f64);
    lerp(output[0], output[1], t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
