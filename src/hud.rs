use crate::constants::{STATUS_ELEMENT_ID, TOAST_ELEMENT_ID, TOAST_VISIBLE_MS};
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::Notice;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn document() -> Option<web::Document> {
    web::window()?.document()
}

/// Write the status line into the page's status element, if it has one.
pub fn update_status(line: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(STATUS_ELEMENT_ID)) {
        el.set_text_content(Some(line));
    }
}

#[inline]
fn show_fallback_toast(text: &str) {
    let Some(el) = document().and_then(|d| d.get_element_by_id(TOAST_ELEMENT_ID)) else {
        return;
    };
    el.set_text_content(Some(text));
    _ = el.set_attribute("style", "");
    let Some(window) = web::window() else {
        return;
    };
    let hide = Closure::once_into_js(move || {
        _ = el.set_attribute("style", "display:none");
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.unchecked_ref(),
        TOAST_VISIBLE_MS,
    );
}

/// Where notices end up: a host callback taking the toast text, or the
/// page's fallback toast element plus the console.
#[derive(Clone, Default)]
pub struct ToastSink {
    callback: Option<js_sys::Function>,
}

pub type SharedToasts = Rc<RefCell<ToastSink>>;

impl ToastSink {
    pub fn set_callback(&mut self, callback: Option<js_sys::Function>) {
        self.callback = callback;
    }

    pub fn show(&self, notice: &Notice) {
        let text = notice.to_string();
        log::info!("[toast] {}", text);
        match &self.callback {
            Some(f) => {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_str(&text)) {
                    log::warn!("[toast] sink threw: {:?}", e);
                }
            }
            None => show_fallback_toast(&text),
        }
    }
}

/// Deliver notices without holding any borrow on the controller, so sinks
/// may call back into the viewer.
pub fn deliver(toasts: &SharedToasts, notices: Vec<Notice>) {
    if notices.is_empty() {
        return;
    }
    let sink = toasts.borrow().clone();
    for notice in &notices {
        sink.show(notice);
    }
}
