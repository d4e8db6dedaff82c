//! Navigation bar scroll styling and active-link tracking.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, FolioError, NavigationController, Result};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::observe;
use crate::dom;
use crate::views::NavDom;

pub fn init(config: &FolioConfig) -> Result<()> {
    let selectors = &config.selectors;
    let navbar = dom::by_id(&selectors.navbar_id)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let links = dom::query_all(&selectors.nav_links).unwrap_or_default();
    let sections = dom::query_all(&selectors.sections).unwrap_or_default();

    if navbar.is_none() && sections.is_empty() {
        return Err(FolioError::missing(format!("#{}", selectors.navbar_id)));
    }

    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let section_ids = sections.iter().map(|section| section.id()).collect();
    let has_navbar = navbar.is_some();

    let view = NavDom::new(navbar, links, &config.nav);
    let controller = Rc::new(RefCell::new(NavigationController::new(
        view,
        &config.nav,
        &hrefs,
        section_ids,
    )));

    if has_navbar {
        let window = dom::window()?;
        let scroll_window = window.clone();
        let nav = controller.clone();
        dom::listen(&window, "scroll", move |_| {
            if let Ok(offset) = scroll_window.scroll_y() {
                nav.borrow_mut().on_scroll(offset);
            }
        })?;
    }

    if !sections.is_empty() {
        let count = sections.len();
        observe(sections, config.nav.section_ratio, move |batch| {
            controller.borrow_mut().on_sections_intersect(batch);
        })?;
        tracing::debug!(sections = count, "Observing page sections");
    }
    Ok(())
}
