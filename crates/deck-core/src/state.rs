//! Interaction and camera state shared with the frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The frontends consume
//! them to build camera matrices and to drive per-card pose updates.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_EYE, CAMERA_TARGET};

/// Normalized 2D control vector derived from the tracked hand.
///
/// Both components are in \[-1, 1\] with origin at the image center and the
/// vertical axis inverted, so moving the hand up in camera space yields
/// positive `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlSignal {
    pub x: f32,
    pub y: f32,
}

/// Discrete interaction state governing which pose rule applies.
///
/// Exactly one mode is active at a time; transitions happen only when a new
/// hand detection arrives. The session starts in `Stacked`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Stacked,
    Shuffling,
    Drawing,
}

/// Immutable per-render-tick view of the interaction state.
///
/// Produced once per frame by the frontend and passed by reference into every
/// card's pose update, so the pose math stays pure and testable.
#[derive(Clone, Copy, Debug)]
pub struct InteractionSnapshot {
    pub mode: InteractionMode,
    pub signal: ControlSignal,
    /// Wall-clock seconds since scene start; drives the shuffle wobble.
    pub time_sec: f32,
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default scene camera, aspect filled in by the frontend.
    pub fn scene_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::from(CAMERA_TARGET),
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Combined view-projection, column-major, ready for a uniform buffer.
    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        (self.projection_matrix() * self.view_matrix()).to_cols_array_2d()
    }
}
