//! Hand landmark ingestion: normalizer and mode classifier.
//!
//! The external detector (MediaPipe Hands on web, a cursor stand-in on
//! native) delivers 21 landmarks per hand with `x`/`y` normalized to \[0, 1\]
//! and origin at the top-left of the image. Everything here is a pure
//! function of that input; absence of a detection is simply "no call".

use crate::constants::{DRAWING_RAW_Y_MAX, STACKED_RAW_Y_MIN};
use crate::state::{ControlSignal, InteractionMode};

pub const HAND_LANDMARK_COUNT: usize = 21;
pub const FLOATS_PER_LANDMARK: usize = 3; // x, y, z

pub const WRIST: usize = 0;
pub const INDEX_MCP: usize = 5;
/// Knuckle of the middle finger: a stable proxy for palm position, used as
/// the reference landmark for both the control signal and mode classification.
pub const MIDDLE_MCP: usize = 9;
pub const PINKY_MCP: usize = 17;

/// A detected keypoint on the tracked hand, image-normalized.
#[derive(Clone, Copy, Debug, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Parse one hand out of a flat `[x, y, z] * 21` buffer.
///
/// The buffer may carry more than one hand back to back; only the first is
/// consumed (single-hand tracking). A buffer shorter than one full hand is
/// malformed detector output and yields `None`, so callers treat it exactly
/// like detection absence.
pub fn parse_hand_frame(data: &[f32]) -> Option<[Landmark; HAND_LANDMARK_COUNT]> {
    if data.len() < HAND_LANDMARK_COUNT * FLOATS_PER_LANDMARK {
        return None;
    }
    let mut landmarks = [Landmark::default(); HAND_LANDMARK_COUNT];
    for (i, lm) in landmarks.iter_mut().enumerate() {
        let base = i * FLOATS_PER_LANDMARK;
        *lm = Landmark {
            x: data[base],
            y: data[base + 1],
            z: data[base + 2],
        };
    }
    Some(landmarks)
}

/// Remap an image-normalized landmark to the \[-1, 1\] control signal.
///
/// The vertical axis flips so that "up" in camera space yields positive `y`.
#[inline]
pub fn control_signal(lm: Landmark) -> ControlSignal {
    ControlSignal {
        x: (lm.x - 0.5) * 2.0,
        y: -(lm.y - 0.5) * 2.0,
    }
}

/// Classify the interaction mode from the RAW vertical coordinate (pre-remap,
/// \[0, 1\], origin top-left): hand low in the image stacks the deck, hand
/// high draws the top card, the middle band shuffles.
///
/// Thresholds are evaluated independently on every detection. There is no
/// hysteresis, so rapid crossing of a boundary flickers between modes.
#[inline]
pub fn classify(raw_y: f32) -> InteractionMode {
    if raw_y > STACKED_RAW_Y_MIN {
        InteractionMode::Stacked
    } else if raw_y < DRAWING_RAW_Y_MAX {
        InteractionMode::Drawing
    } else {
        InteractionMode::Shuffling
    }
}

/// Derive the full per-detection update from one hand's landmark set.
pub fn interaction_from_landmarks(
    landmarks: &[Landmark; HAND_LANDMARK_COUNT],
) -> (InteractionMode, ControlSignal) {
    let reference = landmarks[MIDDLE_MCP];
    (classify(reference.y), control_signal(reference))
}
