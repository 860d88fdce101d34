use crate::bridge;
use crate::render;
use deck_core::{card_model_matrix, Deck, InteractionSnapshot, LABEL_COLORS, VENUE_LABELS};
use glam::{Mat4, Vec4};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub deck: Deck,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started_at: Instant,
}

impl<'a> FrameContext<'a> {
    /// One render tick: snapshot the interaction state, advance every card,
    /// then draw. Detection updates arrive on their own cadence through the
    /// bridge; this loop only ever reads them.
    pub fn frame(&mut self) {
        let time_sec = self.started_at.elapsed().as_secs_f32();
        let (mode, signal) = bridge::current_interaction();
        let snapshot = InteractionSnapshot {
            mode,
            signal,
            time_sec,
        };
        self.deck.update(&snapshot);

        let mut models: Vec<Mat4> = Vec::with_capacity(self.deck.len());
        let mut colors: Vec<Vec4> = Vec::with_capacity(self.deck.len());
        for card in self.deck.cards() {
            models.push(card_model_matrix(&card.pose));
            let rgb = LABEL_COLORS[card.index % VENUE_LABELS.len()];
            colors.push(Vec4::new(rgb[0], rgb[1], rgb[2], 1.0));
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&models, &colors) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
