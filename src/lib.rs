#![cfg(target_arch = "wasm32")]
use crate::frame::{FrameContext, SharedController};
use crate::hud::{SharedToasts, ToastSink};
use crate::storage::LocalStorage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{millis, Pose, TweenHandle, ViewController};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod constants;
mod convert;
mod events;
mod frame;
mod hud;
mod keys;
mod loop_state;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    console_log::init_with_level(constants::DEFAULT_LOG_LEVEL)?;
    log::info!("viewer-web starting");
    web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Ok(())
}

/// Awaitable for a camera move: resolves with "arrived" or "cancelled", or
/// with "missing" when the preset did not exist.
fn move_promise(handle: Option<TweenHandle>) -> js_sys::Promise {
    match handle {
        Some(handle) => future_to_promise(async move {
            let outcome = handle.await;
            Ok(JsValue::from_str(outcome.as_str()))
        }),
        None => js_sys::Promise::resolve(&JsValue::from_str("missing")),
    }
}

fn duration_arg(ms: Option<f64>) -> Option<std::time::Duration> {
    ms.map(millis)
}

/// The host-facing viewer. One instance per embedded viewer; instances share
/// nothing but the page's localStorage.
#[wasm_bindgen]
pub struct CarViewer {
    controller: SharedController,
    toasts: SharedToasts,
    frame_ctx: FrameContext,
}

impl CarViewer {
    /// Run `f` against the controller, then deliver whatever it queued.
    fn with<R>(&self, f: impl FnOnce(&mut ViewController<LocalStorage>) -> R) -> R {
        let (result, notices) = {
            let mut ctl = self.controller.borrow_mut();
            let result = f(&mut ctl);
            (result, ctl.take_notices())
        };
        hud::deliver(&self.toasts, notices);
        result
    }
}

#[wasm_bindgen]
impl CarViewer {
    /// Build a viewer from an optional config object and start at Home.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CarViewer, JsValue> {
        let config = convert::viewer_config(&config)?;
        let storage = LocalStorage::from_window();
        log::info!(
            "[presets] storage {}",
            if storage.is_available() { "ready" } else { "missing" }
        );
        let controller = Rc::new(RefCell::new(ViewController::new(storage, config)));
        let toasts: SharedToasts = Rc::new(RefCell::new(ToastSink::default()));
        events::wire_shortcuts(controller.clone(), toasts.clone());
        let frame_ctx = FrameContext::new(controller.clone(), toasts.clone());
        let viewer = CarViewer {
            controller,
            toasts,
            frame_ctx,
        };
        hud::update_status(&viewer.status_line());
        Ok(viewer)
    }

    // ---------------- Signals ----------------

    #[wasm_bindgen(js_name = setParkingBrake)]
    pub fn set_parking_brake(&self, value: JsValue) {
        let value = convert::signal_value(&value);
        self.with(|c| c.set_parking_brake(&value, Instant::now()));
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&self, value: JsValue) {
        let value = convert::signal_value(&value);
        self.with(|c| c.set_speed(&value));
    }

    /// Returns the route taken ("parkingBrake", "speed", "notify") or
    /// `undefined` for an empty name.
    #[wasm_bindgen(js_name = receiveSignal)]
    pub fn receive_signal(&self, name: &str, value: JsValue) -> Option<String> {
        let value = convert::signal_value(&value);
        self.with(|c| c.receive_signal(name, value, Instant::now()))
            .map(|route| route.as_str().to_owned())
    }

    // ---------------- Presets ----------------

    #[wasm_bindgen(js_name = savePreset)]
    pub fn save_preset(&self, name: &str, pose: JsValue) -> Result<JsValue, JsValue> {
        let input = convert::pose_input(&pose)?;
        let saved = self.with(|c| c.save_preset(name, input));
        convert::to_js(&saved)
    }

    /// The stored pose, or `null`.
    #[wasm_bindgen(js_name = getPreset)]
    pub fn get_preset(&self, name: &str) -> Result<JsValue, JsValue> {
        match self.controller.borrow().get_preset(name) {
            Some(pose) => convert::to_js(&pose),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = listPresetNames)]
    pub fn list_preset_names(&self) -> Vec<String> {
        self.controller.borrow().preset_names()
    }

    #[wasm_bindgen(js_name = goToPreset)]
    pub fn go_to_preset(&self, name: &str, duration_ms: Option<f64>) -> js_sys::Promise {
        let handle = self.with(|c| c.go_to_preset(name, duration_arg(duration_ms), Instant::now()));
        move_promise(handle)
    }

    #[wasm_bindgen(js_name = animateTo)]
    pub fn animate_to(&self, pose: JsValue, duration_ms: Option<f64>) -> Result<js_sys::Promise, JsValue> {
        let input = convert::pose_input(&pose)?;
        let handle = self.with(|c| {
            let end: Pose = input.unwrap_or_default().merge_with(&c.camera_pose());
            c.animate_to(end, duration_arg(duration_ms), Instant::now())
        });
        Ok(move_promise(Some(handle)))
    }

    // ---------------- Environment ----------------

    #[wasm_bindgen(js_name = setDayMode)]
    pub fn set_day_mode(&self, day: bool) {
        self.with(|c| c.set_day_mode(day));
    }

    #[wasm_bindgen(js_name = getDayMode)]
    pub fn get_day_mode(&self) -> bool {
        self.controller.borrow().day_mode()
    }

    #[wasm_bindgen(js_name = toggleDayNight)]
    pub fn toggle_day_night(&self) -> bool {
        self.with(|c| c.toggle_day_night())
    }

    #[wasm_bindgen(js_name = getSpeed)]
    pub fn get_speed(&self) -> f32 {
        self.controller.borrow().speed()
    }

    #[wasm_bindgen(js_name = getAnimationSpeed)]
    pub fn get_animation_speed(&self) -> f32 {
        self.controller.borrow().animation_speed()
    }

    // ---------------- Orbit control hooks ----------------

    #[wasm_bindgen(js_name = interactionStart)]
    pub fn interaction_start(&self) {
        self.with(|c| c.interaction_start());
    }

    #[wasm_bindgen(js_name = interactionEnd)]
    pub fn interaction_end(&self) {
        self.with(|c| c.interaction_end(Instant::now()));
    }

    /// Report the orbit control's pose; returns the floor-clamped pose the
    /// camera should take.
    #[wasm_bindgen(js_name = poseChanged)]
    pub fn pose_changed(&self, pose: JsValue) -> Result<JsValue, JsValue> {
        let input = convert::pose_input(&pose)?;
        let clamped = self.with(|c| {
            let pose = input.unwrap_or_default().merge_with(&c.camera_pose());
            c.pose_changed(pose)
        });
        convert::to_js(&clamped)
    }

    // ---------------- Frame loop ----------------

    /// Advance one frame by hand and return `{ camera, lighting, scenery }`.
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        self.frame_ctx.frame()
    }

    /// Drive frames from requestAnimationFrame, calling `on_frame` with each
    /// frame update.
    #[wasm_bindgen(js_name = startLoop)]
    pub fn start_loop(&self, on_frame: Option<js_sys::Function>) {
        self.frame_ctx.on_frame.set(on_frame);
        frame::start_loop(self.frame_ctx.clone());
    }

    #[wasm_bindgen(js_name = stopLoop)]
    pub fn stop_loop(&self) {
        self.frame_ctx.state.stop();
    }

    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.frame_ctx.state.is_running()
    }

    // ---------------- HUD ----------------

    #[wasm_bindgen(js_name = setToastSink)]
    pub fn set_toast_sink(&self, sink: Option<js_sys::Function>) {
        self.toasts.borrow_mut().set_callback(sink);
    }

    #[wasm_bindgen(js_name = cameraInfo)]
    pub fn camera_info(&self) -> Result<JsValue, JsValue> {
        convert::to_js(&self.controller.borrow().readout())
    }

    pub fn status(&self) -> Result<JsValue, JsValue> {
        convert::to_js(&self.controller.borrow().status())
    }

    #[wasm_bindgen(js_name = statusLine)]
    pub fn status_line(&self) -> String {
        self.controller.borrow().status().to_string()
    }

    #[wasm_bindgen(js_name = currentMode)]
    pub fn current_mode(&self) -> Option<String> {
        self.controller.borrow().current_mode().map(str::to_owned)
    }
}
