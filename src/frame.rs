use crate::convert;
use crate::hud::{self, SharedToasts};
use crate::loop_state::{CallbackSlot, LoopState};
use crate::storage::LocalStorage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::ViewController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedController = Rc<RefCell<ViewController<LocalStorage>>>;

/// Everything one frame needs. Cheap to clone; all state is shared, and no
/// borrow is held while host callbacks run, so they may call back into the
/// viewer (including stopping the loop).
#[derive(Clone)]
pub struct FrameContext {
    pub controller: SharedController,
    pub toasts: SharedToasts,
    // Receives the serialised FrameUpdate every frame.
    pub on_frame: CallbackSlot<js_sys::Function>,
    pub state: Rc<LoopState>,
    pub last_status: Rc<RefCell<String>>,
}

impl FrameContext {
    pub fn new(controller: SharedController, toasts: SharedToasts) -> Self {
        Self {
            controller,
            toasts,
            on_frame: CallbackSlot::default(),
            state: Rc::new(LoopState::default()),
            last_status: Rc::new(RefCell::new(String::new())),
        }
    }

    /// Tick the controller once and hand the result to the renderer.
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        let now = Instant::now();
        let (update, notices, status) = {
            let mut ctl = self.controller.borrow_mut();
            let update = convert::to_js(&ctl.tick(now))?;
            let notices = ctl.take_notices();
            (update, notices, ctl.status().to_string())
        };
        hud::deliver(&self.toasts, notices);
        let status_changed = {
            let mut last = self.last_status.borrow_mut();
            if *last != status {
                *last = status.clone();
                true
            } else {
                false
            }
        };
        if status_changed {
            hud::update_status(&status);
        }
        if let Some(f) = self.on_frame.get() {
            f.call1(&JsValue::NULL, &update)?;
        }
        Ok(update)
    }
}

pub fn start_loop(frame_ctx: FrameContext) {
    let Some(generation) = frame_ctx.state.start() else {
        return;
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.state.is_current(generation) {
            return;
        }
        if let Err(e) = frame_ctx.frame() {
            log::error!("frame error: {:?}", e);
        }
        if frame_ctx.state.is_current(generation) {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
