//! Navigation bar styling and active-link highlighting.

use folio_types::NavConfig;

use crate::view::{Intersection, NavView};

/// Section id a navigation link points at, if its href is an in-page anchor.
///
/// ```
/// use folio_core::nav::section_target;
/// assert_eq!(section_target("#projects"), Some("projects"));
/// assert_eq!(section_target("/blog"), None);
/// assert_eq!(section_target("#"), None);
/// ```
pub fn section_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct NavigationController<V: NavView> {
    view: V,
    scroll_threshold: f64,
    section_ratio: f64,
    /// Section id targeted by each link, in link order
    link_targets: Vec<Option<String>>,
    /// Section ids in observation order
    sections: Vec<String>,
    scrolled: Option<bool>,
    active: Option<usize>,
}

impl<V: NavView> NavigationController<V> {
    /// `link_hrefs` are the raw `href` values of the navigation links;
    /// `sections` are the ids of the observed page sections.
    pub fn new(
        view: V,
        config: &NavConfig,
        link_hrefs: &[Option<String>],
        sections: Vec<String>,
    ) -> Self {
        let link_targets = link_hrefs
            .iter()
            .map(|href| href.as_deref().and_then(section_target).map(str::to_string))
            .collect();

        Self {
            view,
            scroll_threshold: config.scroll_threshold,
            section_ratio: config.section_ratio,
            link_targets,
            sections,
            scrolled: None,
            active: None,
        }
    }

    pub fn is_scrolled(&self) -> Option<bool> {
        self.scrolled
    }

    /// Index of the link currently marked active.
    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    /// React to the window's vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        let scrolled = offset > self.scroll_threshold;
        if self.scrolled == Some(scrolled) {
            return;
        }
        self.scrolled = Some(scrolled);
        self.view.set_scrolled(scrolled);
    }

    /// Process one observer batch over the sections.
    ///
    /// Entries are handled in delivery order and each qualifying entry
    /// re-resolves the active link, so the last qualifying section wins.
    pub fn on_sections_intersect(&mut self, entries: &[Intersection]) {
        let ratio = self.section_ratio;
        for entry in entries.iter().filter(|e| e.reaches(ratio)) {
            let Some(section) = self.sections.get(entry.target) else {
                continue;
            };
            let link = self
                .link_targets
                .iter()
                .position(|target| target.as_deref() == Some(section.as_str()));

            for idx in 0..self.link_targets.len() {
                self.view.set_link_active(idx, false);
            }
            if let Some(idx) = link {
                self.view.set_link_active(idx, true);
            }
            tracing::debug!(section = %section, link = ?link, "Active section changed");
            self.active = link;
        }
    }
}
