use crate::frame::SharedController;
use crate::hud::{self, SharedToasts};
use crate::keys::{shortcut_for_keydown, Shortcut};
use instant::Instant;
use viewer_core::Notice;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_info(ev: &web::KeyboardEvent) -> (Option<String>, bool) {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return (None, false);
    };
    let editable = el
        .dyn_ref::<web::HtmlElement>()
        .map(|h| h.is_content_editable())
        .unwrap_or(false);
    (Some(el.tag_name()), editable)
}

pub fn handle_keydown(ev: &web::KeyboardEvent, controller: &SharedController, toasts: &SharedToasts) {
    let (tag, editable) = target_info(ev);
    let Some(shortcut) = shortcut_for_keydown(&ev.key(), ev.repeat(), tag.as_deref(), editable)
    else {
        return;
    };
    let notices = {
        let mut ctl = controller.borrow_mut();
        match shortcut {
            Shortcut::GoHome => {
                log::info!("[keys] home");
                _ = ctl.go_home(Instant::now());
            }
            Shortcut::ToggleDayNight => {
                let day = ctl.toggle_day_night();
                log::info!("[keys] day mode {}", day);
                ctl.push_notice(Notice::DayMode(day));
            }
        }
        ctl.take_notices()
    };
    ev.prevent_default();
    hud::deliver(toasts, notices);
}

pub fn wire_shortcuts(controller: SharedController, toasts: SharedToasts) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &controller, &toasts);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
