//! Rendering seams.
//!
//! Each component talks to the page through its own narrow trait, so the
//! decision logic never touches a rendering surface directly. Elements are
//! addressed by their index in the list collected when the component was
//! built. Methods take `&self`: implementations are handles onto shared
//! page state, the same way DOM element handles are.

use crate::effects::RippleGeometry;

/// One observer notification about a watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: usize,
    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    /// True when the element is entering view at or beyond `threshold`.
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

pub trait NavView {
    /// Switch the navigation bar between its scrolled and default styles.
    fn set_scrolled(&self, scrolled: bool);
    fn set_link_active(&self, link: usize, active: bool);
}

pub trait RevealView {
    /// Apply the hidden starting state (zero opacity, offset, transition).
    fn conceal(&self, element: usize);
    /// Move to the final state (full opacity, zero offset).
    fn reveal(&self, element: usize);
    /// Stop delivering intersection notifications for the element.
    fn unobserve(&self, element: usize);
}

pub trait FilterView {
    fn set_button_active(&self, button: usize, active: bool);
    /// Toggle layout participation of a card.
    fn set_card_displayed(&self, card: usize, displayed: bool);
    fn set_card_opacity(&self, card: usize, opacity: f64);
}

pub trait ContactView {
    fn set_field_focused(&self, field: usize, focused: bool);
    /// Hand a URI to the platform (new browsing context).
    fn open_uri(&self, uri: &str);
}

pub trait EffectsView {
    /// Remove any ripple on the button, then attach a new one.
    fn replace_ripple(&self, button: usize, ripple: &RippleGeometry);
    fn set_keyboard_nav(&self, enabled: bool);
    fn set_page_opacity(&self, opacity: f64);
}

pub trait TyperView {
    fn show_text(&self, text: &str);
}
