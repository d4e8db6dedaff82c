//! Contact form focus styling and mailto submission.

use std::rc::Rc;

use folio_core::{ContactField, ContactFormBridge, FolioConfig, Result, SubmitEvent};
use folio_types::Selectors;
use web_sys::Event;

use crate::dom;
use crate::views::ContactDom;

/// Live submit event; field values are read by id at submission time.
struct FormSubmit<'a> {
    event: &'a Event,
    selectors: &'a Selectors,
}

impl SubmitEvent for FormSubmit<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn field_value(&self, field: ContactField) -> String {
        let id = match field {
            ContactField::Name => &self.selectors.name_field_id,
            ContactField::Email => &self.selectors.email_field_id,
            ContactField::Message => &self.selectors.message_field_id,
        };
        dom::by_id(id)
            .map(|el| dom::field_value(&el))
            .unwrap_or_default()
    }
}

pub fn init(config: &FolioConfig) -> Result<()> {
    let form = dom::by_id(&config.selectors.contact_form_id)?;
    let inputs = dom::query_all_in(&form, &config.selectors.form_inputs)?;

    let view = ContactDom {
        containers: Rc::new(inputs.iter().map(|input| input.parent_element()).collect()),
        focused_class: config.contact.focused_class.clone(),
    };
    let bridge = Rc::new(ContactFormBridge::new(view, &config.contact));

    for (idx, input) in inputs.iter().enumerate() {
        let on_focus = bridge.clone();
        dom::listen(input, "focus", move |_| on_focus.on_focus(idx))?;

        let on_blur = bridge.clone();
        let field = input.clone();
        dom::listen(input, "blur", move |_| {
            on_blur.on_blur(idx, &dom::field_value(&field));
        })?;
    }

    let selectors = config.selectors.clone();
    dom::listen(&form, "submit", move |event| {
        let submit = FormSubmit {
            event: &event,
            selectors: &selectors,
        };
        bridge.on_submit(&submit);
    })?;
    Ok(())
}
