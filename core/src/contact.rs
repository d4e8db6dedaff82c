//! Contact form hand-off to the platform mail client.
//!
//! Nothing is sent from the page. Submitting builds a `mailto:` link and
//! opens it; blank fields produce blank sections rather than blocking the
//! submission.

use folio_types::ContactConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::view::ContactView;

/// Characters left as-is by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component the way browsers do.
///
/// ```
/// use folio_core::contact::encode_uri_component;
/// assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_uri_component("(it's)!"), "(it's)!");
/// ```
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Submission event as seen by the bridge.
pub trait SubmitEvent {
    /// Suppress the browser's own form submission.
    fn prevent_default(&self);
    fn field_value(&self, field: ContactField) -> String;
}

/// The three form fields, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn subject(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.name)
    }

    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }

    /// `mailto:<address>?subject=<encoded>&body=<encoded>`
    pub fn mailto_uri(&self, address: &str, subject_prefix: &str) -> String {
        format!(
            "mailto:{address}?subject={}&body={}",
            encode_uri_component(&self.subject(subject_prefix)),
            encode_uri_component(&self.body()),
        )
    }
}

pub struct ContactFormBridge<V: ContactView> {
    view: V,
    address: String,
    subject_prefix: String,
}

impl<V: ContactView> ContactFormBridge<V> {
    pub fn new(view: V, config: &ContactConfig) -> Self {
        Self {
            view,
            address: config.address.clone(),
            subject_prefix: config.subject_prefix.clone(),
        }
    }

    pub fn on_focus(&self, field: usize) {
        self.view.set_field_focused(field, true);
    }

    /// Filled fields keep the focused style after losing focus.
    pub fn on_blur(&self, field: usize, value: &str) {
        if value.is_empty() {
            self.view.set_field_focused(field, false);
        }
    }

    /// Returns the opened URI.
    pub fn on_submit(&self, event: &impl SubmitEvent) -> String {
        event.prevent_default();

        let message = ContactMessage::new(
            &event.field_value(ContactField::Name),
            &event.field_value(ContactField::Email),
            &event.field_value(ContactField::Message),
        );
        let uri = message.mailto_uri(&self.address, &self.subject_prefix);
        tracing::info!(has_name = !message.name.is_empty(), "Opening mail client");
        self.view.open_uri(&uri);
        uri
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::testing::RecordingView;

    struct FakeSubmit {
        name: &'static str,
        email: &'static str,
        message: &'static str,
        prevented: Cell<bool>,
    }

    impl FakeSubmit {
        fn new(name: &'static str, email: &'static str, message: &'static str) -> Self {
            Self {
                name,
                email,
                message,
                prevented: Cell::new(false),
            }
        }
    }

    impl SubmitEvent for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn field_value(&self, field: ContactField) -> String {
            match field {
                ContactField::Name => self.name,
                ContactField::Email => self.email,
                ContactField::Message => self.message,
            }
            .to_string()
        }
    }

    /// Inverse of `encode_uri_component` for assertions.
    fn decode(s: &str) -> String {
        percent_encoding::percent_decode_str(s)
            .decode_utf8()
            .unwrap()
            .into_owned()
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let query = uri.split_once('?').unwrap().1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|v| v.strip_prefix('=')))
            .unwrap()
    }

    #[test]
    fn submit_builds_mailto_and_prevents_native_submit() {
        let view = RecordingView::new();
        let bridge = ContactFormBridge::new(view.clone(), &ContactConfig::default());
        let event = FakeSubmit::new("Ada", "ada@x.com", "Hello");

        let uri = bridge.on_submit(&event);

        assert!(event.prevented.get());
        assert!(uri.starts_with("mailto:mijaresgiancyril@gmail.com?subject="));
        assert_eq!(decode(query_param(&uri, "subject")), "Portfolio Contact from Ada");
        assert_eq!(
            decode(query_param(&uri, "body")),
            "Name: Ada\nEmail: ada@x.com\n\nHello"
        );
        assert_eq!(view.state().opened, vec![uri]);
    }

    #[test]
    fn fields_are_trimmed() {
        let message = ContactMessage::new("  Ada \n", "\tada@x.com", " Hi there  ");
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@x.com");
        assert_eq!(message.body(), "Name: Ada\nEmail: ada@x.com\n\nHi there");
    }

    #[test]
    fn empty_fields_still_submit() {
        let view = RecordingView::new();
        let bridge = ContactFormBridge::new(view.clone(), &ContactConfig::default());
        let event = FakeSubmit::new("", "   ", "");

        let uri = bridge.on_submit(&event);

        assert_eq!(decode(query_param(&uri, "subject")), "Portfolio Contact from ");
        assert_eq!(decode(query_param(&uri, "body")), "Name: \nEmail: \n\n");
        assert_eq!(view.state().opened.len(), 1);
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let message = ContactMessage::new("A&B", "x@y.z", "100% = done?\n#1");
        let uri = message.mailto_uri("me@example.com", "Re: ");

        assert_eq!(
            uri,
            "mailto:me@example.com?subject=Re%3A%20A%26B\
             &body=Name%3A%20A%26B%0AEmail%3A%20x%40y.z%0A%0A100%25%20%3D%20done%3F%0A%231"
        );
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_uri_component("José"), "Jos%C3%A9");
        assert_eq!(encode_uri_component("~_-.*"), "~_-.*");
    }

    #[test]
    fn focus_style_persists_while_filled() {
        let view = RecordingView::new();
        let bridge = ContactFormBridge::new(view.clone(), &ContactConfig::default());

        bridge.on_focus(0);
        bridge.on_focus(1);
        bridge.on_blur(0, "Ada");
        bridge.on_blur(1, "");

        assert!(view.state().focused_fields.contains(&0));
        assert!(!view.state().focused_fields.contains(&1));
    }
}
