//! Decorative interaction feedback: button ripples, keyboard-navigation
//! focus mode, and the page fade-in once loading completes.

use folio_types::EffectsConfig;

use crate::view::EffectsView;

/// Button box as reported by layout, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonBox {
    pub left: f64,
    pub top: f64,
    /// Inner width, excluding borders
    pub client_width: f64,
    pub client_height: f64,
}

/// Size and offset of a ripple relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Circle covering the button's larger side, centered on the click.
    pub fn centered_on(button: &ButtonBox, client_x: f64, client_y: f64) -> Self {
        let diameter = button.client_width.max(button.client_height);
        let radius = diameter / 2.0;
        Self {
            diameter,
            left: client_x - button.left - radius,
            top: client_y - button.top - radius,
        }
    }
}

pub struct InteractionEffects<V: EffectsView> {
    view: V,
    nav_key: String,
    keyboard_nav: bool,
}

impl<V: EffectsView> InteractionEffects<V> {
    pub fn new(view: V, config: &EffectsConfig) -> Self {
        Self {
            view,
            nav_key: config.keyboard_nav_key.clone(),
            keyboard_nav: false,
        }
    }

    pub fn keyboard_nav(&self) -> bool {
        self.keyboard_nav
    }

    pub fn on_button_click(&self, button: usize, rect: &ButtonBox, client_x: f64, client_y: f64) {
        let ripple = RippleGeometry::centered_on(rect, client_x, client_y);
        self.view.replace_ripple(button, &ripple);
    }

    pub fn on_key_down(&mut self, key: &str) {
        if key == self.nav_key && !self.keyboard_nav {
            self.keyboard_nav = true;
            self.view.set_keyboard_nav(true);
        }
    }

    pub fn on_mouse_down(&mut self) {
        if self.keyboard_nav {
            self.keyboard_nav = false;
            self.view.set_keyboard_nav(false);
        }
    }

    /// All page resources have loaded.
    pub fn on_load(&self) {
        self.view.set_page_opacity(1.0);
    }
}
