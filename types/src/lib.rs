//! Shared configuration types for the folio page script.
//!
//! Every section deserializes with `#[serde(default)]`, so an empty or
//! partial document reproduces the stock page behavior.

use serde::{Deserialize, Deserializer, Serialize};

pub mod formatting;

/// Destination address of the contact form.
pub const DEFAULT_CONTACT_ADDRESS: &str = "mijaresgiancyril@gmail.com";

/// Category value that matches every project card.
pub const WILDCARD_CATEGORY: &str = "all";

// ─────────────────────────────────────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────────────────────────────────────

/// Full page script configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub selectors: Selectors,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub filter: FilterConfig,
    pub contact: ContactConfig,
    pub effects: EffectsConfig,
    pub typer: TyperConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// Markup Contract
// ─────────────────────────────────────────────────────────────────────────────

/// Element ids and CSS selectors the page markup is expected to provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Id of the navigation bar
    pub navbar_id: String,
    pub nav_links: String,
    /// Sections observed for active-link highlighting
    pub sections: String,
    /// Elements that fade in on first scroll into view
    pub reveal: String,
    pub category_buttons: String,
    pub project_cards: String,
    /// Attribute carrying the category tag on buttons and cards
    pub category_attribute: String,
    pub contact_form_id: String,
    pub form_inputs: String,
    pub name_field_id: String,
    pub email_field_id: String,
    pub message_field_id: String,
    pub ripple_buttons: String,
    pub hero_tagline: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_string(),
            nav_links: ".nav-link".to_string(),
            sections: "section[id]".to_string(),
            reveal: ".section-title, .experience-card, .project-card, .skill-item".to_string(),
            category_buttons: ".category-btn".to_string(),
            project_cards: ".project-card".to_string(),
            category_attribute: "data-category".to_string(),
            contact_form_id: "contactForm".to_string(),
            form_inputs: ".form-input".to_string(),
            name_field_id: "name".to_string(),
            email_field_id: "email".to_string(),
            message_field_id: "message".to_string(),
            ripple_buttons: ".btn-primary, .btn-secondary, .btn-submit, .btn-outline".to_string(),
            hero_tagline: ".hero-tagline".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component Sections
// ─────────────────────────────────────────────────────────────────────────────

/// Inline styles applied to the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavStyle {
    pub background: String,
    pub border_bottom: String,
}

impl NavStyle {
    /// Style once the page has scrolled past the threshold.
    pub fn scrolled() -> Self {
        Self {
            background: "rgba(5, 5, 5, 0.95)".to_string(),
            border_bottom: "1px solid #333".to_string(),
        }
    }

    /// Style at the top of the page.
    pub fn resting() -> Self {
        Self {
            background: "rgba(5, 5, 5, 0.7)".to_string(),
            border_bottom: "1px solid transparent".to_string(),
        }
    }
}

/// Fields of a [`NavStyle`] given in a document; absent ones keep the stock value.
#[derive(Default, Deserialize)]
#[serde(default)]
struct NavStyleOverride {
    background: Option<String>,
    border_bottom: Option<String>,
}

impl NavStyleOverride {
    fn apply(self, mut style: NavStyle) -> NavStyle {
        if let Some(background) = self.background {
            style.background = background;
        }
        if let Some(border_bottom) = self.border_bottom {
            style.border_bottom = border_bottom;
        }
        style
    }
}

fn scrolled_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NavStyle, D::Error> {
    NavStyleOverride::deserialize(deserializer).map(|o| o.apply(NavStyle::scrolled()))
}

fn resting_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NavStyle, D::Error> {
    NavStyleOverride::deserialize(deserializer).map(|o| o.apply(NavStyle::resting()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset above which the bar switches to the scrolled style
    pub scroll_threshold: f64,
    /// Visible fraction at which a section claims the active link
    pub section_ratio: f64,
    #[serde(deserialize_with = "scrolled_style")]
    pub scrolled_style: NavStyle,
    #[serde(deserialize_with = "resting_style")]
    pub default_style: NavStyle,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            section_ratio: 0.3,
            scrolled_style: NavStyle::scrolled(),
            default_style: NavStyle::resting(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that triggers the reveal
    pub ratio: f64,
    pub stagger_ms: u32,
    /// Initial downward offset in pixels
    pub offset_px: f64,
    pub duration_secs: f64,
    pub easing: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            ratio: 0.1,
            stagger_ms: 100,
            offset_px: 20.0,
            duration_secs: 0.6,
            easing: "ease-out".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub wildcard: String,
    /// Delay between showing a card and starting its fade-in
    pub fade_delay_ms: u32,
    /// `display` value of a visible card
    pub visible_display: String,
    pub active_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD_CATEGORY.to_string(),
            fade_delay_ms: 50,
            visible_display: "flex".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub address: String,
    pub subject_prefix: String,
    /// Class toggled on an input's parent while it is focused or filled
    pub focused_class: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTACT_ADDRESS.to_string(),
            subject_prefix: "Portfolio Contact from ".to_string(),
            focused_class: "focused".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_class: String,
    pub keyboard_nav_class: String,
    /// Key that enables keyboard-navigation mode
    pub keyboard_nav_key: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            ripple_class: "ripple".to_string(),
            keyboard_nav_class: "keyboard-nav".to_string(),
            keyboard_nav_key: "Tab".to_string(),
        }
    }
}

/// Hero tagline typing animation settings. All delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TyperConfig {
    pub roles: Vec<String>,
    pub start_delay_ms: u32,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    /// Pause after a role is fully typed
    pub hold_delay_ms: u32,
    /// Pause after a role is fully deleted
    pub gap_delay_ms: u32,
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self {
            roles: vec![
                "Developer & Designer".to_string(),
                "AI explorer".to_string(),
                "Full Stack Developer".to_string(),
                "UI/UX Designer".to_string(),
            ],
            start_delay_ms: 3000,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 3000,
            gap_delay_ms: 500,
        }
    }
}
