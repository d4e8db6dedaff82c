//! Ripple feedback, keyboard focus mode and the load fade-in.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{ButtonBox, FolioConfig, InteractionEffects, Result};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::dom;
use crate::views::EffectsDom;

pub fn init(config: &FolioConfig) -> Result<()> {
    let document = dom::document()?;
    let window = dom::window()?;
    let body = dom::body()?;
    let buttons = dom::as_html(dom::query_all(&config.selectors.ripple_buttons).unwrap_or_default());

    let view = EffectsDom::new(buttons.clone(), Some(body), &config.effects);
    let effects = Rc::new(RefCell::new(InteractionEffects::new(view, &config.effects)));

    for (idx, button) in buttons.iter().enumerate() {
        let fx = effects.clone();
        let el = button.clone();
        dom::listen(button, "click", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
            let rect = el.get_bounding_client_rect();
            let bounds = ButtonBox {
                left: rect.left(),
                top: rect.top(),
                client_width: f64::from(el.client_width()),
                client_height: f64::from(el.client_height()),
            };
            fx.borrow().on_button_click(
                idx,
                &bounds,
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
            );
        })?;
    }

    let fx = effects.clone();
    dom::listen(&document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            fx.borrow_mut().on_key_down(&key.key());
        }
    })?;

    let fx = effects.clone();
    dom::listen(&document, "mousedown", move |_| fx.borrow_mut().on_mouse_down())?;

    // The module may finish loading after the window load event
    if document.ready_state() == "complete" {
        effects.borrow().on_load();
    } else {
        dom::listen(&window, "load", move |_| effects.borrow().on_load())?;
    }
    Ok(())
}
