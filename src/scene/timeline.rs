use crate::foundation::core::FrameIndex;

/// Named frame thresholds of the phishing flow clip.
///
/// Every timing decision made by [`crate::eval::frame_state::compute_frame`] reads from here;
/// nothing in the evaluator hard-codes a frame number.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    /// First frame of the email fade-in.
    pub email_appear: u64,
    /// First frame of the arrow fade-in.
    pub arrow1_appear: u64,
    /// First frame of the victim fade-in.
    pub user_appear: u64,
    /// The attack phase starts on the frame *after* this one.
    pub click_action: u64,
    /// Border flashing stops at this frame.
    pub theft_action: u64,
    /// Length of every fade-in, in frames.
    pub fade_frames: u64,
    /// Frame window over which the email slides horizontally.
    pub email_slide: [u64; 2],
    /// Opacity a fading element must exceed before its caption is shown.
    pub label_reveal_opacity: f64,
    /// Border flash cycle length, in frames.
    pub flash_period: u64,
    /// Frames at the start of each flash cycle that use the "on" color.
    pub flash_on_frames: u64,
}

impl Timeline {
    pub const PHISHING_FLOW: Timeline = Timeline {
        email_appear: 0,
        arrow1_appear: 30,
        user_appear: 60,
        click_action: 90,
        theft_action: 120,
        fade_frames: 15,
        email_slide: [0, 30],
        label_reveal_opacity: 0.8,
        flash_period: 10,
        flash_on_frames: 5,
    };

    pub fn is_attack_phase_visible(&self, frame: FrameIndex) -> bool {
        frame.0 > self.click_action
    }

    /// Open interval `(click_action, theft_action)`.
    pub fn is_flash_window(&self, frame: FrameIndex) -> bool {
        frame.0 > self.click_action && frame.0 < self.theft_action
    }

    pub fn is_flash_on(&self, frame: FrameIndex) -> bool {
        self.is_flash_window(frame)
            && self.flash_period > 0
            && frame.0 % self.flash_period < self.flash_on_frames
    }

    pub fn label_revealed(&self, opacity: f64) -> bool {
        opacity > self.label_reveal_opacity
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::PHISHING_FLOW
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
