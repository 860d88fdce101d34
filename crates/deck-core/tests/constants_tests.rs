// Host-side tests for constants and their relationships.

use deck_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(CARD_COUNT > 0);
    assert!(CARD_SIZE[0] > 0.0 && CARD_SIZE[1] > 0.0);
    assert!(STACK_SPACING > 0.0);
    assert!(GRID_COLS > 0);
    assert!(GRID_SPACING > 0.0);
    assert!(SIGNAL_GAIN > 0.0);
    assert!(WOBBLE_AMPLITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_stay_in_the_open_unit_interval() {
    for alpha in [ALPHA_STACKED, ALPHA_SHUFFLING, ALPHA_DRAWING] {
        assert!(alpha > 0.0 && alpha < 1.0);
    }
    // Shuffling is deliberately the laziest follower
    assert!(ALPHA_SHUFFLING < ALPHA_STACKED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mode_thresholds_leave_a_shuffle_band() {
    assert!(DRAWING_RAW_Y_MAX > 0.0);
    assert!(STACKED_RAW_Y_MIN < 1.0);
    assert!(DRAWING_RAW_Y_MAX < STACKED_RAW_Y_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_depths_bracket_the_deck() {
    // Shuffle grid sits away from the camera, the drawn card comes toward it
    assert!(SHUFFLE_DEPTH < 0.0);
    assert!(DRAW_DEPTH > 0.0);
    assert!(CAMERA_EYE[2] > DRAW_DEPTH);
}

#[test]
fn label_palette_matches_vocabulary() {
    assert!(!VENUE_LABELS.is_empty());
    assert_eq!(VENUE_LABELS.len(), LABEL_COLORS.len());
    for rgb in LABEL_COLORS {
        for c in rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}
