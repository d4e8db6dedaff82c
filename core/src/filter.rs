//! Project card filtering by category.

use std::rc::Rc;

use folio_types::FilterConfig;

use crate::scheduler::Scheduler;
use crate::view::FilterView;

pub struct ProjectFilter<V> {
    view: V,
    scheduler: Rc<dyn Scheduler>,
    wildcard: String,
    fade_delay_ms: u32,
    /// Category tag of each button; `None` when the attribute is absent
    buttons: Vec<Option<String>>,
    cards: Vec<Option<String>>,
    active: Option<usize>,
}

impl<V: FilterView + Clone + 'static> ProjectFilter<V> {
    pub fn new(
        view: V,
        scheduler: Rc<dyn Scheduler>,
        config: &FilterConfig,
        buttons: Vec<Option<String>>,
        cards: Vec<Option<String>>,
    ) -> Self {
        Self {
            view,
            scheduler,
            wildcard: config.wildcard.clone(),
            fade_delay_ms: config.fade_delay_ms,
            buttons,
            cards,
            active: None,
        }
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    /// Whether a card with `card` category is shown under `selected`.
    ///
    /// Untagged cards only match an untagged button.
    pub fn matches(&self, selected: Option<&str>, card: Option<&str>) -> bool {
        selected == Some(self.wildcard.as_str()) || selected == card
    }

    /// Handle a click on the button at `button`.
    pub fn select(&mut self, button: usize) {
        let Some(category) = self.buttons.get(button).cloned() else {
            tracing::warn!(button, "Filter click on unknown button");
            return;
        };

        for idx in 0..self.buttons.len() {
            self.view.set_button_active(idx, false);
        }
        self.view.set_button_active(button, true);
        self.active = Some(button);

        let mut shown = 0;
        for (card, card_category) in self.cards.iter().enumerate() {
            if self.matches(category.as_deref(), card_category.as_deref()) {
                shown += 1;
                self.view.set_card_displayed(card, true);
                let view = self.view.clone();
                self.scheduler.schedule(
                    self.fade_delay_ms,
                    Box::new(move || view.set_card_opacity(card, 1.0)),
                );
            } else {
                self.view.set_card_displayed(card, false);
                self.view.set_card_opacity(card, 0.0);
            }
        }
        tracing::debug!(category = ?category, shown, total = self.cards.len(), "Filtered projects");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::testing::RecordingView;

    fn tags(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    fn setup() -> (RecordingView, ManualScheduler, ProjectFilter<RecordingView>) {
        let view = RecordingView::new();
        let scheduler = ManualScheduler::new();
        let filter = ProjectFilter::new(
            view.clone(),
            Rc::new(scheduler.clone()),
            &FilterConfig::default(),
            tags(&[Some("all"), Some("web"), Some("ai")]),
            tags(&[Some("web"), Some("ai"), Some("web"), None]),
        );
        (view, scheduler, filter)
    }

    #[test]
    fn category_shows_matching_cards_only() {
        let (view, scheduler, mut filter) = setup();

        filter.select(1);
        scheduler.advance(50);

        let state = view.state();
        assert!(state.card_visible(0));
        assert!(state.card_hidden(1));
        assert!(state.card_visible(2));
        assert!(state.card_hidden(3));
        assert_eq!(state.active_buttons.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn wildcard_shows_everything() {
        let (view, scheduler, mut filter) = setup();

        filter.select(2);
        scheduler.advance(50);
        filter.select(0);
        scheduler.advance(50);

        let state = view.state();
        for card in 0..4 {
            assert!(state.card_visible(card), "card {card}");
        }
        assert_eq!(state.active_buttons.iter().copied().collect::<Vec<_>>(), vec![0]);
        assert_eq!(filter.active_button(), Some(0));
    }

    #[test]
    fn fade_in_waits_for_layout_pass() {
        let (view, scheduler, mut filter) = setup();

        filter.select(2);
        assert_eq!(view.state().card_displayed.get(&1), Some(&true));
        assert_eq!(view.state().card_opacity.get(&1), None);
        // Hidden cards fade out immediately
        assert_eq!(view.state().card_opacity.get(&0), Some(&0.0));

        scheduler.advance(49);
        assert_eq!(view.state().card_opacity.get(&1), None);
        scheduler.advance(1);
        assert_eq!(view.state().card_opacity.get(&1), Some(&1.0));
    }

    #[test]
    fn untagged_button_matches_untagged_cards() {
        let view = RecordingView::new();
        let scheduler = ManualScheduler::new();
        let mut filter = ProjectFilter::new(
            view.clone(),
            Rc::new(scheduler.clone()),
            &FilterConfig::default(),
            tags(&[None]),
            tags(&[Some("web"), None]),
        );

        filter.select(0);
        scheduler.advance(50);
        assert!(view.state().card_hidden(0));
        assert!(view.state().card_visible(1));
    }

    #[test]
    fn unknown_button_changes_nothing() {
        let (view, scheduler, mut filter) = setup();

        filter.select(7);
        scheduler.advance(100);
        assert!(view.state().active_buttons.is_empty());
        assert!(view.state().card_displayed.is_empty());
        assert_eq!(filter.active_button(), None);
    }
}
