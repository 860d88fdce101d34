//! The card roster and the per-frame pose animator.
//!
//! Each card keeps a displayed pose that is advanced toward a mode-dependent
//! target every rendered frame. Positions approach their target with a
//! first-order exponential lerp and never jump; rotations are set directly.
//! That asymmetry matches the intended look: cards glide into place while
//! flips and the shuffle wobble read as immediate.

use glam::{EulerRot, Mat4, Vec3};

use crate::constants::{
    ALPHA_DRAWING, ALPHA_SHUFFLING, ALPHA_STACKED, CARD_COUNT, CARD_SIZE, DRAW_DEPTH, GRID_COLS,
    GRID_SPACING, SHUFFLE_DEPTH, SIGNAL_GAIN, STACK_SPACING, VENUE_LABELS, WOBBLE_AMPLITUDE,
};
use crate::state::{ControlSignal, InteractionMode, InteractionSnapshot};

/// Displayed transform of one card: position plus Euler rotation in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// One card in the deck. Created once at scene start, never destroyed; only
/// the pose mutates.
#[derive(Clone, Debug)]
pub struct Card {
    pub index: usize,
    pub label: &'static str,
    pub pose: Pose,
}

/// The fixed roster of cards plus the update entry point the render loop
/// calls once per tick.
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(count: usize) -> Self {
        let cards = (0..count)
            .map(|index| Card {
                index,
                label: VENUE_LABELS[index % VENUE_LABELS.len()],
                pose: Pose::default(),
            })
            .collect();
        Self { cards }
    }

    /// Reference-sized deck (15 cards).
    pub fn with_default_count() -> Self {
        Self::new(CARD_COUNT)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Advance every card's displayed pose by one rendered frame.
    pub fn update(&mut self, snapshot: &InteractionSnapshot) {
        for card in &mut self.cards {
            card.pose = next_pose(card.pose, snapshot, card.index);
        }
    }
}

/// Target position for `(mode, signal, index)`, or `None` when the mode has
/// no rule for this card (Drawing leaves every card except the top one
/// frozen; that focus-on-top-card behavior is deliberate).
pub fn target_position(mode: InteractionMode, signal: ControlSignal, index: usize) -> Option<Vec3> {
    match mode {
        InteractionMode::Stacked => Some(Vec3::new(0.0, index as f32 * STACK_SPACING, 0.0)),
        InteractionMode::Shuffling => {
            let col = (index % GRID_COLS) as f32;
            let row = (index / GRID_COLS) as f32;
            Some(Vec3::new(
                (col - 2.0) * GRID_SPACING + signal.x * SIGNAL_GAIN,
                (row - 2.0) * GRID_SPACING + signal.y * SIGNAL_GAIN,
                SHUFFLE_DEPTH,
            ))
        }
        InteractionMode::Drawing if index == 0 => Some(Vec3::new(0.0, 0.0, DRAW_DEPTH)),
        InteractionMode::Drawing => None,
    }
}

/// Position smoothing factor per mode.
#[inline]
pub fn smoothing_alpha(mode: InteractionMode) -> f32 {
    match mode {
        InteractionMode::Stacked => ALPHA_STACKED,
        InteractionMode::Shuffling => ALPHA_SHUFFLING,
        InteractionMode::Drawing => ALPHA_DRAWING,
    }
}

/// One exponential smoothing step: `current + (target - current) * alpha`.
#[inline]
pub fn lerp_toward(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}

/// Unsmoothed roll oscillation layered on the shuffle grid.
#[inline]
pub fn shuffle_wobble(time_sec: f32, index: usize) -> f32 {
    (time_sec + index as f32).sin() * WOBBLE_AMPLITUDE
}

/// Pure per-card pose step: `(current, snapshot, index) -> next`.
///
/// Position converges toward the target one lerp step per call; rotation is
/// assigned outright. A card with no target for the current mode is returned
/// unchanged.
pub fn next_pose(current: Pose, snapshot: &InteractionSnapshot, index: usize) -> Pose {
    let Some(target) = target_position(snapshot.mode, snapshot.signal, index) else {
        return current;
    };
    let position = lerp_toward(current.position, target, smoothing_alpha(snapshot.mode));
    let rotation = match snapshot.mode {
        // Lying flat in the stack
        InteractionMode::Stacked => Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0),
        InteractionMode::Shuffling => {
            Vec3::new(0.0, 0.0, shuffle_wobble(snapshot.time_sec, index))
        }
        // Top card flips to face the camera
        InteractionMode::Drawing => Vec3::new(0.0, std::f32::consts::PI, 0.0),
    };
    Pose { position, rotation }
}

/// World transform for a card quad, shared by the web and native renderers.
pub fn card_model_matrix(pose: &Pose) -> Mat4 {
    Mat4::from_translation(pose.position)
        * Mat4::from_euler(
            EulerRot::XYZ,
            pose.rotation.x,
            pose.rotation.y,
            pose.rotation.z,
        )
        * Mat4::from_scale(Vec3::new(CARD_SIZE[0], CARD_SIZE[1], 1.0))
}
