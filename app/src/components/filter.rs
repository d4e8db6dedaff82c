//! Project category filter buttons.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, ProjectFilter, Result, Scheduler};

use crate::dom;
use crate::views::FilterDom;

pub fn init(config: &FolioConfig, scheduler: Rc<dyn Scheduler>) -> Result<()> {
    let selectors = &config.selectors;
    let buttons = dom::query_all(&selectors.category_buttons)?;
    let cards = dom::as_html(dom::query_all(&selectors.project_cards).unwrap_or_default());

    let attribute = selectors.category_attribute.as_str();
    let button_tags = buttons.iter().map(|b| b.get_attribute(attribute)).collect();
    let card_tags = cards.iter().map(|c| c.get_attribute(attribute)).collect();

    let view = FilterDom {
        buttons: Rc::new(buttons.clone()),
        cards: Rc::new(cards),
        visible_display: config.filter.visible_display.clone(),
        active_class: config.filter.active_class.clone(),
    };
    let filter = Rc::new(RefCell::new(ProjectFilter::new(
        view,
        scheduler,
        &config.filter,
        button_tags,
        card_tags,
    )));

    for (idx, button) in buttons.iter().enumerate() {
        let filter = filter.clone();
        dom::listen(button, "click", move |_| filter.borrow_mut().select(idx))?;
    }
    Ok(())
}
