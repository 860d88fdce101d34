//! WASM entry point and scene wiring.
//!
//! Host page contract:
//! - `#deck-canvas`: the render target canvas.
//! - `#start-overlay`: clicked once by the user to start the scene (camera
//!   access needs a user gesture anyway).
//! - optional `#card-labels`: filled with the deck's venue labels.
//! - The page runs the landmark detector (MediaPipe Hands, `maxNumHands: 1`)
//!   and forwards each result to [`bridge::on_hand_frame`].
#![cfg(target_arch = "wasm32")]

pub mod bridge;
pub mod constants;
pub mod dom;
pub mod frame;
pub mod overlay;
pub mod render;

use deck_core::Deck;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("deck-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::install_resize_listener(&canvas);
    overlay::show(&document);

    // First click on the overlay starts the render loop (the host page starts
    // the camera/detector from the same gesture).
    static STARTED: AtomicBool = AtomicBool::new(false);
    dom::add_click_listener(&document, constants::START_OVERLAY_ID, move || {
        if STARTED.swap(true, Ordering::SeqCst) {
            log::warn!("[start] already triggered; ignoring extra click");
            return;
        }
        let canvas = canvas.clone();
        spawn_local(async move {
            let deck = Deck::with_default_count();
            if let Some(doc) = dom::window_document() {
                overlay::populate_label_list(&doc, deck.cards().iter().map(|c| c.label));
                overlay::hide(&doc);
            }
            let gpu = frame::init_gpu(&canvas, deck.len()).await;
            log::info!("[start] scene running with {} cards", deck.len());
            let ctx = Rc::new(RefCell::new(frame::FrameContext {
                deck,
                canvas,
                gpu,
                started_at: Instant::now(),
            }));
            frame::start_loop(ctx);
        });
    });

    Ok(())
}
