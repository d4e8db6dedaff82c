//! Scroll-triggered reveal of content blocks.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, Result, RevealAnimator, Scheduler};
use web_sys::Element;

use super::observe;
use crate::dom;
use crate::views::RevealDom;

pub fn init(config: &FolioConfig, scheduler: Rc<dyn Scheduler>) -> Result<()> {
    let elements = dom::as_html(dom::query_all(&config.selectors.reveal)?);
    let targets: Vec<Element> = elements.iter().map(|el| Element::clone(el)).collect();

    let view = RevealDom::new(elements, &config.reveal);
    let animator = Rc::new(RefCell::new(RevealAnimator::new(
        view.clone(),
        scheduler,
        &config.reveal,
        targets.len(),
    )));

    let observer = observe(targets, config.reveal.ratio, move |batch| {
        animator.borrow_mut().on_intersect(batch);
    })?;
    // Batches are delivered asynchronously, after the cell is filled
    let _ = view.observer.set(observer);
    Ok(())
}
