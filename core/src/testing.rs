//! Recording view used by the component tests.

use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::effects::RippleGeometry;
use crate::view::{ContactView, EffectsView, FilterView, NavView, RevealView, TyperView};

/// Page state as the view calls left it.
#[derive(Debug, Default)]
pub struct PageState {
    pub scrolled: Option<bool>,
    pub scrolled_writes: usize,
    pub active_links: BTreeSet<usize>,
    pub concealed: BTreeSet<usize>,
    pub revealed: BTreeSet<usize>,
    pub reveal_writes: usize,
    pub unobserved: BTreeSet<usize>,
    pub active_buttons: BTreeSet<usize>,
    pub card_displayed: BTreeMap<usize, bool>,
    pub card_opacity: BTreeMap<usize, f64>,
    pub focused_fields: BTreeSet<usize>,
    pub opened: Vec<String>,
    pub ripples: BTreeMap<usize, RippleGeometry>,
    pub ripple_writes: usize,
    pub keyboard_nav: bool,
    pub page_opacity: Option<f64>,
    pub texts: Vec<String>,
}

impl PageState {
    pub fn card_visible(&self, card: usize) -> bool {
        self.card_displayed.get(&card) == Some(&true) && self.card_opacity.get(&card) == Some(&1.0)
    }

    pub fn card_hidden(&self, card: usize) -> bool {
        self.card_displayed.get(&card) == Some(&false) && self.card_opacity.get(&card) == Some(&0.0)
    }
}

#[derive(Clone, Default)]
pub struct RecordingView {
    state: Rc<RefCell<PageState>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }
}

impl NavView for RecordingView {
    fn set_scrolled(&self, scrolled: bool) {
        let mut state = self.state.borrow_mut();
        state.scrolled = Some(scrolled);
        state.scrolled_writes += 1;
    }

    fn set_link_active(&self, link: usize, active: bool) {
        let mut state = self.state.borrow_mut();
        if active {
            state.active_links.insert(link);
        } else {
            state.active_links.remove(&link);
        }
    }
}

impl RevealView for RecordingView {
    fn conceal(&self, element: usize) {
        self.state.borrow_mut().concealed.insert(element);
    }

    fn reveal(&self, element: usize) {
        let mut state = self.state.borrow_mut();
        state.concealed.remove(&element);
        state.revealed.insert(element);
        state.reveal_writes += 1;
    }

    fn unobserve(&self, element: usize) {
        self.state.borrow_mut().unobserved.insert(element);
    }
}

impl FilterView for RecordingView {
    fn set_button_active(&self, button: usize, active: bool) {
        let mut state = self.state.borrow_mut();
        if active {
            state.active_buttons.insert(button);
        } else {
            state.active_buttons.remove(&button);
        }
    }

    fn set_card_displayed(&self, card: usize, displayed: bool) {
        self.state.borrow_mut().card_displayed.insert(card, displayed);
    }

    fn set_card_opacity(&self, card: usize, opacity: f64) {
        self.state.borrow_mut().card_opacity.insert(card, opacity);
    }
}

impl ContactView for RecordingView {
    fn set_field_focused(&self, field: usize, focused: bool) {
        let mut state = self.state.borrow_mut();
        if focused {
            state.focused_fields.insert(field);
        } else {
            state.focused_fields.remove(&field);
        }
    }

    fn open_uri(&self, uri: &str) {
        self.state.borrow_mut().opened.push(uri.to_string());
    }
}

impl EffectsView for RecordingView {
    fn replace_ripple(&self, button: usize, ripple: &RippleGeometry) {
        let mut state = self.state.borrow_mut();
        state.ripples.insert(button, *ripple);
        state.ripple_writes += 1;
    }

    fn set_keyboard_nav(&self, enabled: bool) {
        self.state.borrow_mut().keyboard_nav = enabled;
    }

    fn set_page_opacity(&self, opacity: f64) {
        self.state.borrow_mut().page_opacity = Some(opacity);
    }
}

impl TyperView for RecordingView {
    fn show_text(&self, text: &str) {
        self.state.borrow_mut().texts.push(text.to_string());
    }
}
