use crate::canvas2d::Canvas2d;
use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::core::{Field, FrameOutcome, FrameScheduler, FrameStats};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    stats: FrameStats,
    skipped: u64,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<Field>>, canvas: web::HtmlCanvasElement) -> Self {
        let ctx = dom::context_2d(&canvas);
        Self {
            field,
            canvas,
            ctx,
            stats: FrameStats::new(Duration::from_secs(FRAME_STATS_INTERVAL_SEC)),
            skipped: 0,
        }
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        if self.ctx.is_none() {
            self.ctx = dom::context_2d(&self.canvas);
        }
        let Some(ctx) = self.ctx.as_ref() else {
            self.skip("no 2d context yet");
            return;
        };

        let mut target = Canvas2d::new(ctx);
        let outcome = self.field.borrow_mut().frame(timestamp_ms, &mut target);
        match outcome {
            Ok(FrameOutcome::Drawn) => {}
            Ok(FrameOutcome::Skipped) => self.skip("surface has no area"),
            Err(e) => log::warn!("[frame] render error: {}", e),
        }

        if let Some(fps) = self.stats.record(Instant::now()) {
            log::debug!("[frame] {:.1} fps, {} skipped", fps, self.skipped);
        }
    }

    fn skip(&mut self, why: &str) {
        if self.skipped == 0 {
            log::warn!("[frame] skipping: {}", why);
        }
        self.skipped += 1;
    }
}

/// A running `requestAnimationFrame` loop. [`FrameLoop::stop`] cancels the
/// pending request and releases the callback.
pub struct FrameLoop {
    scheduler: Rc<RefCell<FrameScheduler>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(mut frame_ctx: FrameContext) -> Self {
        let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
        scheduler.borrow_mut().start();

        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let scheduler_tick = scheduler.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !scheduler_tick.borrow_mut().begin_frame() {
                return;
            }
            frame_ctx.frame(timestamp_ms);
            request_next(&scheduler_tick, &tick_clone);
        }) as Box<dyn FnMut(f64)>));

        request_next(&scheduler, &tick);
        Self { scheduler, tick }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.scheduler.borrow().is_running()
    }

    pub fn stop(&self) {
        let pending = self.scheduler.borrow_mut().stop();
        if let (Some(id), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own slot; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_next(scheduler: &Rc<RefCell<FrameScheduler>>, tick: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => scheduler.borrow_mut().schedule(id),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}
