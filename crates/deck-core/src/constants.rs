// Shared deck layout and interaction tuning constants used by both frontends.

// Deck
pub const CARD_COUNT: usize = 15;
pub const CARD_SIZE: [f32; 2] = [0.7, 1.0]; // card quad width/height in world units

// Stacked layout
pub const STACK_SPACING: f32 = 0.02; // vertical gap between stacked cards

// Shuffling layout
pub const GRID_COLS: usize = 5;
pub const GRID_SPACING: f32 = 1.5; // per-cell spacing in world units
pub const SIGNAL_GAIN: f32 = 3.0; // how far the control signal pushes the grid
pub const SHUFFLE_DEPTH: f32 = -1.0; // grid z, away from camera
pub const WOBBLE_AMPLITUDE: f32 = 0.2; // roll oscillation in radians

// Drawing layout (top card only)
pub const DRAW_DEPTH: f32 = 2.0; // toward the camera

// Position smoothing factors per mode (applied once per rendered frame)
pub const ALPHA_STACKED: f32 = 0.1;
pub const ALPHA_SHUFFLING: f32 = 0.05;
pub const ALPHA_DRAWING: f32 = 0.1;

// Mode thresholds on the raw vertical landmark coordinate ([0,1], origin
// top-left). Evaluated independently on every detection, no hysteresis.
pub const STACKED_RAW_Y_MIN: f32 = 0.7;
pub const DRAWING_RAW_Y_MAX: f32 = 0.3;

// Camera placement shared by web and native frontends
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 10.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Venue vocabulary; card labels cycle through this by index.
pub const VENUE_LABELS: [&str; 7] = [
    "Ballroom",
    "Garden",
    "Rooftop",
    "Chapel",
    "Vineyard",
    "Courtyard",
    "Conservatory",
];

// Face tint per vocabulary entry (parallel to VENUE_LABELS)
pub const LABEL_COLORS: [[f32; 3]; 7] = [
    [0.92, 0.56, 0.56], // Ballroom
    [0.46, 0.82, 0.52], // Garden
    [0.55, 0.68, 0.94], // Rooftop
    [0.94, 0.90, 0.70], // Chapel
    [0.72, 0.48, 0.78], // Vineyard
    [0.90, 0.72, 0.46], // Courtyard
    [0.48, 0.84, 0.82], // Conservatory
];
