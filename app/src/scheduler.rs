//! [`Scheduler`] backed by browser timeouts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::{Scheduler, Task, TimerId};
use gloo_timers::callback::Timeout;

#[derive(Default)]
struct Timers {
    next_id: u64,
    live: HashMap<TimerId, Timeout>,
}

/// Keeps each pending [`Timeout`] alive until it fires or is cancelled.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<Timers>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let id = {
            let mut timers = self.timers.borrow_mut();
            let id = TimerId(timers.next_id);
            timers.next_id += 1;
            id
        };

        let registry: Weak<RefCell<Timers>> = Rc::downgrade(&self.timers);
        let timeout = Timeout::new(delay_ms, move || {
            // Release the registry borrow before the task can schedule more work
            let spent = registry
                .upgrade()
                .and_then(|timers| timers.borrow_mut().live.remove(&id));
            task();
            drop(spent);
        });

        self.timers.borrow_mut().live.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        // Dropping a Timeout clears it
        let removed = self.timers.borrow_mut().live.remove(&id);
        drop(removed);
    }
}
