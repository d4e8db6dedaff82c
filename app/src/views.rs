//! View trait implementations writing to the live document.
//!
//! Views are cheap to clone: element lists sit behind `Rc` so delayed tasks
//! can carry their own handle.

use std::cell::OnceCell;
use std::rc::Rc;

use folio_core::RippleGeometry;
use folio_core::view::{ContactView, EffectsView, FilterView, NavView, RevealView, TyperView};
use folio_types::formatting::{format_opacity, format_px, format_transition, format_translate_y};
use folio_types::{EffectsConfig, NavConfig, NavStyle, RevealConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver};

use crate::dom::{self, set_class, set_style, warn_on_err};

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct NavDom {
    pub navbar: Option<HtmlElement>,
    pub links: Rc<Vec<Element>>,
    pub scrolled_style: NavStyle,
    pub default_style: NavStyle,
    pub active_class: String,
}

impl NavDom {
    pub fn new(navbar: Option<HtmlElement>, links: Vec<Element>, config: &NavConfig) -> Self {
        Self {
            navbar,
            links: Rc::new(links),
            scrolled_style: config.scrolled_style.clone(),
            default_style: config.default_style.clone(),
            active_class: config.active_class.clone(),
        }
    }
}

impl NavView for NavDom {
    fn set_scrolled(&self, scrolled: bool) {
        let Some(navbar) = &self.navbar else { return };
        let style = if scrolled {
            &self.scrolled_style
        } else {
            &self.default_style
        };
        set_style(navbar, "background", &style.background);
        set_style(navbar, "border-bottom", &style.border_bottom);
    }

    fn set_link_active(&self, link: usize, active: bool) {
        if let Some(el) = self.links.get(link) {
            set_class(el, &self.active_class, active);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reveal
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RevealDom {
    pub elements: Rc<Vec<HtmlElement>>,
    /// Set once the observer exists; it needs the animator first
    pub observer: Rc<OnceCell<IntersectionObserver>>,
    hidden_transform: String,
    transition: String,
}

impl RevealDom {
    pub fn new(elements: Vec<HtmlElement>, config: &RevealConfig) -> Self {
        Self {
            elements: Rc::new(elements),
            observer: Rc::new(OnceCell::new()),
            hidden_transform: format_translate_y(config.offset_px),
            transition: format_transition(config.duration_secs, &config.easing),
        }
    }
}

impl RevealView for RevealDom {
    fn conceal(&self, element: usize) {
        let Some(el) = self.elements.get(element) else { return };
        set_style(el, "opacity", &format_opacity(0.0));
        set_style(el, "transform", &self.hidden_transform);
        set_style(el, "transition", &self.transition);
    }

    fn reveal(&self, element: usize) {
        let Some(el) = self.elements.get(element) else { return };
        set_style(el, "opacity", &format_opacity(1.0));
        set_style(el, "transform", &format_translate_y(0.0));
    }

    fn unobserve(&self, element: usize) {
        if let (Some(observer), Some(el)) = (self.observer.get(), self.elements.get(element)) {
            observer.unobserve(el);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Project Filter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct FilterDom {
    pub buttons: Rc<Vec<Element>>,
    pub cards: Rc<Vec<HtmlElement>>,
    pub visible_display: String,
    pub active_class: String,
}

impl FilterView for FilterDom {
    fn set_button_active(&self, button: usize, active: bool) {
        if let Some(el) = self.buttons.get(button) {
            set_class(el, &self.active_class, active);
        }
    }

    fn set_card_displayed(&self, card: usize, displayed: bool) {
        if let Some(el) = self.cards.get(card) {
            let display = if displayed { self.visible_display.as_str() } else { "none" };
            set_style(el, "display", display);
        }
    }

    fn set_card_opacity(&self, card: usize, opacity: f64) {
        if let Some(el) = self.cards.get(card) {
            set_style(el, "opacity", &format_opacity(opacity));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact Form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ContactDom {
    /// Parent of each `.form-input`, which carries the focused class
    pub containers: Rc<Vec<Option<Element>>>,
    pub focused_class: String,
}

impl ContactView for ContactDom {
    fn set_field_focused(&self, field: usize, focused: bool) {
        if let Some(Some(parent)) = self.containers.get(field) {
            set_class(parent, &self.focused_class, focused);
        }
    }

    fn open_uri(&self, uri: &str) {
        match dom::window() {
            Ok(window) => {
                if let Err(e) = window.open_with_url(uri) {
                    tracing::warn!(error = ?e, "Failed to open mail client");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to open mail client"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction Effects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct EffectsDom {
    pub buttons: Rc<Vec<HtmlElement>>,
    pub body: Option<HtmlElement>,
    pub ripple_class: String,
    pub keyboard_nav_class: String,
}

impl EffectsDom {
    pub fn new(buttons: Vec<HtmlElement>, body: Option<HtmlElement>, config: &EffectsConfig) -> Self {
        Self {
            buttons: Rc::new(buttons),
            body,
            ripple_class: config.ripple_class.clone(),
            keyboard_nav_class: config.keyboard_nav_class.clone(),
        }
    }
}

impl EffectsView for EffectsDom {
    fn replace_ripple(&self, button: usize, ripple: &RippleGeometry) {
        let Some(button) = self.buttons.get(button) else { return };
        let Ok(document) = dom::document() else { return };

        let circle = match document.create_element("span") {
            Ok(el) => el,
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to create ripple");
                return;
            }
        };
        let Ok(circle) = circle.dyn_into::<HtmlElement>() else { return };

        let size = format_px(ripple.diameter);
        set_style(&circle, "width", &size);
        set_style(&circle, "height", &size);
        set_style(&circle, "left", &format_px(ripple.left));
        set_style(&circle, "top", &format_px(ripple.top));
        set_class(&circle, &self.ripple_class, true);

        if let Some(previous) = button.get_elements_by_class_name(&self.ripple_class).item(0) {
            previous.remove();
        }
        warn_on_err(button.append_child(&circle).map(|_| ()), "append ripple");
    }

    fn set_keyboard_nav(&self, enabled: bool) {
        if let Some(body) = &self.body {
            set_class(body, &self.keyboard_nav_class, enabled);
        }
    }

    fn set_page_opacity(&self, opacity: f64) {
        if let Some(body) = &self.body {
            set_style(body, "opacity", &format_opacity(opacity));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hero Tagline
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct TyperDom {
    pub tagline: Element,
}

impl TyperView for TyperDom {
    fn show_text(&self, text: &str) {
        self.tagline.set_text_content(Some(text));
    }
}
