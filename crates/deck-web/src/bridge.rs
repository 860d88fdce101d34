//! JS bridge for the hand-landmark detector.
//!
//! The host page runs MediaPipe Hands (max one hand, model complexity per the
//! page's config) and calls [`on_hand_frame`] once per camera frame with a
//! flat `Float32Array` of `[x, y, z] * 21` per detected hand. This callback
//! is the only writer of the interaction state; the render loop is the only
//! reader. Detection absence is not an error: the last mode and signal stay
//! in effect with no decay toward neutral.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use deck_core::hand::{interaction_from_landmarks, parse_hand_frame};
use deck_core::state::{ControlSignal, InteractionMode};

#[derive(Default, Clone, Copy)]
struct InteractionState {
    mode: InteractionMode,
    signal: ControlSignal,
}

// Single-threaded on WASM, so a thread-local cell is the whole story.
thread_local! {
    static INTERACTION: RefCell<InteractionState> = RefCell::new(InteractionState::default());
}

/// Detector callback, invoked from JavaScript per camera frame.
///
/// `num_hands == 0` means no detection this frame and leaves the state
/// untouched. A buffer too short for one hand is dropped the same way
/// (fail closed), with a warning so broken detector wiring is visible.
#[wasm_bindgen]
pub fn on_hand_frame(data: &[f32], num_hands: usize) {
    if num_hands == 0 {
        return;
    }
    let Some(landmarks) = parse_hand_frame(data) else {
        log::warn!(
            "[bridge] short landmark frame ({} floats), dropping",
            data.len()
        );
        return;
    };
    let (mode, signal) = interaction_from_landmarks(&landmarks);
    INTERACTION.with(|cell| {
        let mut state = cell.borrow_mut();
        if state.mode != mode {
            log::info!("[bridge] mode -> {:?}", mode);
        }
        state.mode = mode;
        state.signal = signal;
    });
}

/// Latest (mode, signal) pair for the render loop.
pub fn current_interaction() -> (InteractionMode, ControlSignal) {
    INTERACTION.with(|cell| {
        let state = cell.borrow();
        (state.mode, state.signal)
    })
}
