// DOM element ids the host page must provide

pub const CANVAS_ID: &str = "deck-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const LABEL_LIST_ID: &str = "card-labels";
