//! One-shot fade-in of content as it first scrolls into view.
//!
//! Elements that never reach the viewport stay hidden for the life of the
//! page; there is no fallback reveal. The same holds for an element that
//! can never show the configured fraction of itself at once: with the stock
//! ratio of 0.1, anything taller than ten viewports stays hidden even while it
//! fills the screen.

use std::rc::Rc;

use folio_types::RevealConfig;

use crate::scheduler::Scheduler;
use crate::view::{Intersection, RevealView};

pub struct RevealAnimator<V> {
    view: V,
    scheduler: Rc<dyn Scheduler>,
    ratio: f64,
    stagger_ms: u32,
    /// Per element: observer has fired
    fired: Vec<bool>,
}

impl<V: RevealView + Clone + 'static> RevealAnimator<V> {
    /// Conceal all `count` elements and start tracking them.
    pub fn new(view: V, scheduler: Rc<dyn Scheduler>, config: &RevealConfig, count: usize) -> Self {
        for element in 0..count {
            view.conceal(element);
        }
        tracing::debug!(count, "Concealed reveal targets");

        Self {
            view,
            scheduler,
            ratio: config.ratio,
            stagger_ms: config.stagger_ms,
            fired: vec![false; count],
        }
    }

    pub fn has_fired(&self, element: usize) -> bool {
        self.fired.get(element).copied().unwrap_or(false)
    }

    /// Elements still waiting for their first qualifying intersection.
    pub fn pending(&self) -> usize {
        self.fired.iter().filter(|fired| !**fired).count()
    }

    pub fn on_intersect(&mut self, entries: &[Intersection]) {
        for entry in entries {
            if !entry.reaches(self.ratio) {
                continue;
            }
            let Some(fired) = self.fired.get_mut(entry.target) else {
                continue;
            };
            if *fired {
                continue;
            }
            *fired = true;

            let element = entry.target;
            self.view.unobserve(element);
            let view = self.view.clone();
            self.scheduler
                .schedule(self.stagger_ms, Box::new(move || view.reveal(element)));
        }
    }
}
