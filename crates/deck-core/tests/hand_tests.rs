// Host-side tests for the landmark normalizer and mode classifier.

use deck_core::hand::*;
use deck_core::state::InteractionMode;

#[test]
fn classifier_partitions_unit_interval_exhaustively() {
    for i in 0..=1000 {
        let v = i as f32 / 1000.0;
        let mode = classify(v);
        if v > 0.7 {
            assert_eq!(mode, InteractionMode::Stacked, "v={v}");
        } else if v < 0.3 {
            assert_eq!(mode, InteractionMode::Drawing, "v={v}");
        } else {
            assert_eq!(mode, InteractionMode::Shuffling, "v={v}");
        }
    }
}

#[test]
fn classifier_boundaries_are_exclusive() {
    // Exactly on a threshold falls into the shuffle band
    assert_eq!(classify(0.7), InteractionMode::Shuffling);
    assert_eq!(classify(0.3), InteractionMode::Shuffling);
    assert_eq!(classify(0.701), InteractionMode::Stacked);
    assert_eq!(classify(0.299), InteractionMode::Drawing);
    assert_eq!(classify(1.0), InteractionMode::Stacked);
    assert_eq!(classify(0.0), InteractionMode::Drawing);
}

#[test]
fn normalizer_remaps_center_and_corners() {
    let center = control_signal(Landmark {
        x: 0.5,
        y: 0.5,
        z: 0.0,
    });
    assert!(center.x.abs() < 1e-6);
    assert!(center.y.abs() < 1e-6);

    // Top-left of the image maps to (-1, +1): y flips, x does not
    let top_left = control_signal(Landmark {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    });
    assert!((top_left.x + 1.0).abs() < 1e-6);
    assert!((top_left.y - 1.0).abs() < 1e-6);

    let bottom_right = control_signal(Landmark {
        x: 1.0,
        y: 1.0,
        z: 0.0,
    });
    assert!((bottom_right.x - 1.0).abs() < 1e-6);
    assert!((bottom_right.y + 1.0).abs() < 1e-6);
}

#[test]
fn parse_rejects_short_frames() {
    assert!(parse_hand_frame(&[]).is_none());
    let short = vec![0.5f32; HAND_LANDMARK_COUNT * FLOATS_PER_LANDMARK - 1];
    assert!(parse_hand_frame(&short).is_none());
}

#[test]
fn parse_reads_one_full_hand() {
    let mut data = vec![0.0f32; HAND_LANDMARK_COUNT * FLOATS_PER_LANDMARK];
    data[MIDDLE_MCP * FLOATS_PER_LANDMARK] = 0.25;
    data[MIDDLE_MCP * FLOATS_PER_LANDMARK + 1] = 0.75;
    let lms = parse_hand_frame(&data).expect("full frame parses");
    assert!((lms[MIDDLE_MCP].x - 0.25).abs() < 1e-6);
    assert!((lms[MIDDLE_MCP].y - 0.75).abs() < 1e-6);
    assert!(lms[WRIST].x.abs() < 1e-6);
}

#[test]
fn parse_uses_first_hand_when_two_are_present() {
    let mut data = vec![0.9f32; 2 * HAND_LANDMARK_COUNT * FLOATS_PER_LANDMARK];
    for v in data.iter_mut().take(HAND_LANDMARK_COUNT * FLOATS_PER_LANDMARK) {
        *v = 0.1;
    }
    let lms = parse_hand_frame(&data).expect("two-hand frame parses");
    assert!((lms[PINKY_MCP].y - 0.1).abs() < 1e-6);
}

#[test]
fn interaction_uses_middle_knuckle_as_reference() {
    let mut lms = [Landmark::default(); HAND_LANDMARK_COUNT];
    // Only the reference landmark placed; everything else at the origin
    lms[MIDDLE_MCP] = Landmark {
        x: 0.75,
        y: 0.9,
        z: 0.0,
    };
    let (mode, signal) = interaction_from_landmarks(&lms);
    assert_eq!(mode, InteractionMode::Stacked);
    assert!((signal.x - 0.5).abs() < 1e-6);
    assert!((signal.y + 0.8).abs() < 1e-6);
}
